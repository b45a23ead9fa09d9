//! Budget aggregation
//!
//! Folds a snapshot's items into per-category totals and a global spending
//! summary. Weekly totals are always derived from the accumulated monthly
//! total rather than summed per item, so display rounding never compounds.

use crate::models::{BudgetItem, BudgetSnapshot, Money};

use super::normalize::{monthly_equivalent, weekly_equivalent};

/// Monthly/weekly totals for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotals {
    /// Sum of the monthly-equivalent amounts of every item
    pub monthly_total: f64,

    /// `monthly_total / 4.33`, derived, never independently summed
    pub weekly_total: f64,

    /// True if at least one item in the category is marked necessary
    pub has_any_necessary: bool,
}

/// Fold one category's items into its totals
///
/// An empty category yields all-zero totals.
pub fn category_totals(items: &[BudgetItem]) -> CategoryTotals {
    let monthly_total: f64 = items
        .iter()
        .map(|item| monthly_equivalent(item.amount, &item.frequency))
        .sum();

    CategoryTotals {
        monthly_total,
        weekly_total: weekly_equivalent(monthly_total),
        has_any_necessary: items.iter().any(|item| item.necessary),
    }
}

/// Spending totals across every category
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalSummary {
    /// Monthly-normalized sum over every item in every category
    pub total_monthly_spending: f64,

    /// Same sum restricted to items marked necessary
    pub total_monthly_necessary: f64,
}

impl GlobalSummary {
    /// Weekly equivalent of total spending
    pub fn total_weekly_spending(&self) -> f64 {
        weekly_equivalent(self.total_monthly_spending)
    }

    /// Weekly equivalent of necessary spending
    pub fn total_weekly_necessary(&self) -> f64 {
        weekly_equivalent(self.total_monthly_necessary)
    }

    /// Weekly income left after all spending
    ///
    /// Income is a constant display input from the settings, not derived
    /// from item data.
    pub fn weekly_leftover(&self, weekly_income: Money) -> f64 {
        weekly_income.to_dollars() - self.total_weekly_spending()
    }

    /// Weekly income left after necessary spending only
    pub fn weekly_leftover_after_necessary(&self, weekly_income: Money) -> f64 {
        weekly_income.to_dollars() - self.total_weekly_necessary()
    }
}

/// Compute the global summary over a snapshot
pub fn global_summary(snapshot: &BudgetSnapshot) -> GlobalSummary {
    let mut total_monthly_spending = 0.0;
    let mut total_monthly_necessary = 0.0;

    for item in snapshot.all_items() {
        let monthly = monthly_equivalent(item.amount, &item.frequency);
        total_monthly_spending += monthly;
        if item.necessary {
            total_monthly_necessary += monthly;
        }
    }

    GlobalSummary {
        total_monthly_spending,
        total_monthly_necessary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn item(description: &str, cents: i64, frequency: &str, necessary: bool) -> BudgetItem {
        BudgetItem::new(
            description,
            Money::from_cents(cents),
            frequency.parse().unwrap(),
            necessary,
        )
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_category() {
        let totals = category_totals(&[]);
        assert_eq!(totals.monthly_total, 0.0);
        assert_eq!(totals.weekly_total, 0.0);
        assert!(!totals.has_any_necessary);
    }

    #[test]
    fn test_single_monthly_item() {
        let items = vec![item("Apartment", 10000, "1 month", true)];
        let totals = category_totals(&items);

        assert!(close(totals.monthly_total, 100.0));
        assert!((totals.weekly_total - 23.09).abs() < 0.01);
        assert!(totals.has_any_necessary);
    }

    #[test]
    fn test_mixed_frequencies() {
        // 50 every 2 weeks and 1200 yearly:
        // 50 * 2 * 4.33 + 1200 / 12 = 433 + 100 = 533
        let items = vec![
            item("Cleaner", 5000, "2 weeks", false),
            item("Insurance", 120000, "1 year", true),
        ];
        let totals = category_totals(&items);

        assert!(close(totals.monthly_total, 50.0 * 2.0 * 4.33 + 100.0));
        assert!((totals.weekly_total - 123.09).abs() < 0.01);
        assert!(totals.has_any_necessary);
    }

    #[test]
    fn test_weekly_total_is_derived_not_summed() {
        let items = vec![
            item("A", 333, "1 month", false),
            item("B", 667, "1 month", false),
        ];
        let totals = category_totals(&items);

        assert_eq!(totals.weekly_total, totals.monthly_total / 4.33);
    }

    #[test]
    fn test_global_summary() {
        let mut map = BTreeMap::new();
        map.insert(
            "Rent".to_string(),
            vec![item("Apartment", 10000, "1 month", true)],
        );
        map.insert(
            "Fun".to_string(),
            vec![item("Games", 2000, "1 month", false)],
        );

        let summary = global_summary(&BudgetSnapshot::new(map));

        assert!(close(summary.total_monthly_spending, 120.0));
        assert!(close(summary.total_monthly_necessary, 100.0));
        assert!(summary.total_monthly_necessary <= summary.total_monthly_spending);
        assert_eq!(
            summary.total_weekly_spending(),
            summary.total_monthly_spending / 4.33
        );
    }

    #[test]
    fn test_necessary_never_exceeds_total() {
        let mut map = BTreeMap::new();
        map.insert(
            "Bills".to_string(),
            vec![
                item("Power", 8000, "1 month", true),
                item("Water", 3000, "1 month", true),
                item("Streaming", 1500, "1 month", false),
            ],
        );

        let summary = global_summary(&BudgetSnapshot::new(map));
        assert!(summary.total_monthly_necessary <= summary.total_monthly_spending);
    }

    #[test]
    fn test_leftover_lines() {
        let mut map = BTreeMap::new();
        map.insert(
            "Rent".to_string(),
            vec![item("Apartment", 43300, "1 month", true)],
        );

        let summary = global_summary(&BudgetSnapshot::new(map));
        let income = Money::from_cents(50000);

        // 433 monthly -> exactly 100 weekly
        assert!(close(summary.weekly_leftover(income), 400.0));
        assert!(close(summary.weekly_leftover_after_necessary(income), 400.0));
    }
}
