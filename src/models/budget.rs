//! Budget item and snapshot models
//!
//! A budget item is one recurring payment or expense. Items live in named
//! categories; within a category they keep the server's insertion order and
//! are addressed by position, which is also how the data service's edit and
//! delete operations identify them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::frequency::Frequency;
use super::money::Money;

/// One recurring payment or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Free-text label
    pub description: String,

    /// Amount in currency units, charged once per recurrence
    pub amount: Money,

    /// How often the amount recurs
    pub frequency: Frequency,

    /// Required spending, as opposed to discretionary
    pub necessary: bool,
}

impl BudgetItem {
    /// Create a new budget item
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        frequency: Frequency,
        necessary: bool,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            frequency,
            necessary,
        }
    }

    /// Validate the item before it is sent to the data service
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.description.trim().is_empty() {
            return Err(ItemValidationError::EmptyDescription);
        }

        if self.amount.is_negative() {
            return Err(ItemValidationError::NegativeAmount);
        }

        Ok(())
    }
}

/// The full category-to-items mapping as reported by the data service
///
/// A snapshot is fetched fresh on every read, discarded after each render,
/// and re-fetched after every mutation. Nothing is cached across
/// invocations. Categories render in sorted name order; items keep the
/// server's insertion order.
#[derive(Debug, Clone)]
pub struct BudgetSnapshot {
    categories: BTreeMap<String, Vec<BudgetItem>>,
    fetched_at: DateTime<Utc>,
}

impl BudgetSnapshot {
    /// Wrap a freshly fetched category mapping
    pub fn new(categories: BTreeMap<String, Vec<BudgetItem>>) -> Self {
        Self {
            categories,
            fetched_at: Utc::now(),
        }
    }

    /// When this snapshot was fetched
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Category names in render order
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// The items of one category, in insertion order
    pub fn items(&self, category: &str) -> Option<&[BudgetItem]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// One item by positional address
    pub fn get(&self, category: &str, index: usize) -> Option<&BudgetItem> {
        self.categories.get(category).and_then(|items| items.get(index))
    }

    /// Iterate over (category, items) pairs in render order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[BudgetItem])> {
        self.categories
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Iterate over every item across all categories
    pub fn all_items(&self) -> impl Iterator<Item = &BudgetItem> {
        self.categories.values().flatten()
    }

    /// True if no categories exist
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Validation errors for budget items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyDescription,
    NegativeAmount,
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NegativeAmount => write!(f, "Amount cannot be negative"),
        }
    }
}

impl std::error::Error for ItemValidationError {}
