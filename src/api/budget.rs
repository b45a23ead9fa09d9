//! Budget endpoints
//!
//! Read the full category mapping, and create/update/delete items. The
//! service addresses items positionally within their category; update and
//! delete carry the target position alongside the payload.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::PocketbookResult;
use crate::models::{BudgetItem, BudgetSnapshot, Frequency, Money};

use super::ApiClient;

#[derive(Serialize)]
struct SaveBudgetRequest<'a> {
    category: &'a str,
    description: &'a str,
    amount: Money,
    frequency: &'a Frequency,
    necessary: bool,
}

#[derive(Serialize)]
struct UpdateBudgetRequest<'a> {
    category: &'a str,
    description: &'a str,
    amount: Money,
    frequency: &'a Frequency,
    necessary: bool,
    target_category: &'a str,
    target_index: usize,
}

#[derive(Serialize)]
struct DeleteBudgetRequest<'a> {
    category: &'a str,
    index: usize,
}

impl ApiClient {
    /// Fetch the full budget snapshot
    pub fn fetch_budget(&self) -> PocketbookResult<BudgetSnapshot> {
        let categories: BTreeMap<String, Vec<BudgetItem>> = self.get_json("/budget_data")?;
        Ok(BudgetSnapshot::new(categories))
    }

    /// Append an item to a category
    ///
    /// A category that does not exist yet is created by the service on
    /// first save.
    pub fn create_item(&self, category: &str, item: &BudgetItem) -> PocketbookResult<()> {
        self.post_json(
            "/save_budget",
            &SaveBudgetRequest {
                category,
                description: &item.description,
                amount: item.amount,
                frequency: &item.frequency,
                necessary: item.necessary,
            },
        )
    }

    /// Replace the item at `(target_category, target_index)` with `item`,
    /// possibly moving it to a different category
    pub fn update_item(
        &self,
        category: &str,
        item: &BudgetItem,
        target_category: &str,
        target_index: usize,
    ) -> PocketbookResult<()> {
        self.post_json(
            "/update_budget",
            &UpdateBudgetRequest {
                category,
                description: &item.description,
                amount: item.amount,
                frequency: &item.frequency,
                necessary: item.necessary,
                target_category,
                target_index,
            },
        )
    }

    /// Remove the item at `(category, index)`
    pub fn delete_item(&self, category: &str, index: usize) -> PocketbookResult<()> {
        self.post_json("/delete_budget", &DeleteBudgetRequest { category, index })
    }
}
