//! Budget service
//!
//! One submit path handles both creating and editing: the mode is an
//! explicit value threaded through the call, not ambient state, so there
//! is never a stale "currently editing" marker to reset. Every successful
//! mutation ends with a full re-fetch; the service never patches a
//! snapshot locally.

use crate::api::ApiClient;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{BudgetItem, BudgetSnapshot};

/// Positional address of an existing item: category plus index within it
///
/// Positions are how the data service identifies items, so a target is
/// only meaningful against the snapshot it was read from. The service
/// re-checks it against a fresh snapshot immediately before mutating,
/// which narrows (but cannot close) the window in which a concurrent
/// session moves the item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    pub category: String,
    pub index: usize,
}

impl EditTarget {
    pub fn new(category: impl Into<String>, index: usize) -> Self {
        Self {
            category: category.into(),
            index,
        }
    }
}

/// What a submit means: append a new item, or replace an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Edit(EditTarget),
}

/// Service for budget reads and mutations
pub struct BudgetService<'a> {
    api: &'a ApiClient,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Fetch a fresh snapshot
    pub fn fetch(&self) -> PocketbookResult<BudgetSnapshot> {
        self.api.fetch_budget()
    }

    /// Look up the item a target points at, for prefilling an edit
    pub fn item_at(
        &self,
        snapshot: &BudgetSnapshot,
        target: &EditTarget,
    ) -> PocketbookResult<BudgetItem> {
        snapshot
            .get(&target.category, target.index)
            .cloned()
            .ok_or_else(|| PocketbookError::item_not_found(&target.category, target.index))
    }

    /// Submit an item, creating or replacing depending on `mode`, and
    /// return the re-fetched snapshot
    ///
    /// A failed mutation performs no re-fetch.
    pub fn submit(
        &self,
        category: &str,
        item: &BudgetItem,
        mode: SubmitMode,
    ) -> PocketbookResult<BudgetSnapshot> {
        if category.trim().is_empty() {
            return Err(PocketbookError::Validation(
                "Category name cannot be empty".to_string(),
            ));
        }

        item.validate()
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        match mode {
            SubmitMode::Create => {
                self.api.create_item(category, item)?;
            }
            SubmitMode::Edit(target) => {
                // Re-check the positional target right before mutating
                let current = self.api.fetch_budget()?;
                if current.get(&target.category, target.index).is_none() {
                    return Err(PocketbookError::item_not_found(
                        &target.category,
                        target.index,
                    ));
                }

                self.api
                    .update_item(category, item, &target.category, target.index)?;
            }
        }

        self.api.fetch_budget()
    }

    /// Delete the item a target points at and return the re-fetched snapshot
    pub fn delete(&self, target: &EditTarget) -> PocketbookResult<BudgetSnapshot> {
        let current = self.api.fetch_budget()?;
        if current.get(&target.category, target.index).is_none() {
            return Err(PocketbookError::item_not_found(
                &target.category,
                target.index,
            ));
        }

        self.api.delete_item(&target.category, target.index)?;

        self.api.fetch_budget()
    }
}
