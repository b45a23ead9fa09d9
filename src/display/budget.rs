//! Budget display formatting
//!
//! Renders the three budget views: per-category item tables, the category
//! totals table, and the spending summary block.

use crate::models::{BudgetItem, BudgetSnapshot, Money};
use crate::reports::{category_totals, GlobalSummary};

use super::dollars;

/// Format every category's items as a table, with positional indices
/// usable as edit/delete targets
pub fn format_budget_tables(snapshot: &BudgetSnapshot) -> String {
    if snapshot.is_empty() {
        return "No budget items found.\n\nRun 'pocketbook budget add' to create one.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Budget as of {}\n",
        snapshot.fetched_at().format("%Y-%m-%d %H:%M UTC")
    ));

    for (category, items) in snapshot.iter() {
        output.push('\n');
        output.push_str(&format!("{}\n", category));
        output.push_str(&format!(
            "  {:>3}  {:<28} {:>12}  {:<12} {}\n",
            "#", "Description", "Amount", "Frequency", "Necessary"
        ));
        output.push_str(&format!("  {}\n", "-".repeat(68)));

        for (index, item) in items.iter().enumerate() {
            output.push_str(&format!(
                "  {:>3}  {:<28} {:>12}  {:<12} {}\n",
                index,
                item.description,
                item.amount.to_string(),
                item.frequency.to_string(),
                if item.necessary { "Yes" } else { "No" }
            ));
        }
    }

    output
}

/// Format the category totals table
///
/// When `detail` names a category, its item rows are printed beneath its
/// totals line.
pub fn format_category_totals(snapshot: &BudgetSnapshot, detail: Option<&str>) -> String {
    if snapshot.is_empty() {
        return "No budget items found.".to_string();
    }

    let name_width = snapshot
        .category_names()
        .map(str::len)
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>12}  {}\n",
        "Category",
        "Monthly",
        "Weekly",
        "Necessary",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->12}  {:->12}  {:-<9}\n",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for (category, items) in snapshot.iter() {
        let totals = category_totals(items);
        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>12}  {}\n",
            category,
            dollars(totals.monthly_total),
            dollars(totals.weekly_total),
            if totals.has_any_necessary { "Yes" } else { "No" },
            width = name_width
        ));

        if detail == Some(category) {
            for item in items {
                output.push_str(&format_detail_row(item, name_width));
            }
        }
    }

    output
}

fn format_detail_row(item: &BudgetItem, name_width: usize) -> String {
    format!(
        "  {:<width$}{:>12}  {:<14} {}\n",
        item.description,
        item.amount.to_string(),
        item.frequency.to_string(),
        if item.necessary { "necessary" } else { "" },
        width = name_width
    )
}

/// Format the spending summary block
pub fn format_summary(summary: &GlobalSummary, weekly_income: Money) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Necessary Monthly Payments: {}\n",
        dollars(summary.total_monthly_necessary)
    ));
    output.push_str(&format!(
        "Necessary Weekly Payments:  {}\n",
        dollars(summary.total_weekly_necessary())
    ));
    output.push_str(&format!(
        "Total Monthly Spending:     {}\n",
        dollars(summary.total_monthly_spending)
    ));
    output.push_str(&format!(
        "Total Weekly Spending:      {}\n",
        dollars(summary.total_weekly_spending())
    ));

    if !weekly_income.is_zero() {
        output.push('\n');
        output.push_str(&format!("Weekly Income:              {}\n", weekly_income));
        output.push_str(&format!(
            "Leftover per Week:          {}\n",
            dollars(summary.weekly_leftover(weekly_income))
        ));
        output.push_str(&format!(
            "Leftover after Necessary:   {}\n",
            dollars(summary.weekly_leftover_after_necessary(weekly_income))
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::global_summary;
    use std::collections::BTreeMap;

    fn item(description: &str, cents: i64, frequency: &str, necessary: bool) -> BudgetItem {
        BudgetItem::new(
            description,
            Money::from_cents(cents),
            frequency.parse().unwrap(),
            necessary,
        )
    }

    fn snapshot() -> BudgetSnapshot {
        let mut map = BTreeMap::new();
        map.insert(
            "Rent".to_string(),
            vec![item("Apartment", 10000, "1 month", true)],
        );
        map.insert(
            "Fun".to_string(),
            vec![item("Games", 2000, "1 month", false)],
        );
        BudgetSnapshot::new(map)
    }

    #[test]
    fn test_empty_tables() {
        let empty = BudgetSnapshot::new(BTreeMap::new());
        assert!(format_budget_tables(&empty).contains("No budget items found"));
    }

    #[test]
    fn test_budget_tables() {
        let output = format_budget_tables(&snapshot());
        assert!(output.contains("Rent"));
        assert!(output.contains("Apartment"));
        assert!(output.contains("$100.00"));
        assert!(output.contains("1 months"));
        assert!(output.contains("Yes"));
    }

    #[test]
    fn test_category_totals_rounding() {
        let output = format_category_totals(&snapshot(), None);
        // 100 monthly -> 23.09 weekly at display precision
        assert!(output.contains("$100.00"));
        assert!(output.contains("$23.09"));
    }

    #[test]
    fn test_category_totals_detail() {
        let without = format_category_totals(&snapshot(), None);
        assert!(!without.contains("Apartment"));

        let with = format_category_totals(&snapshot(), Some("Rent"));
        assert!(with.contains("Apartment"));
        assert!(!with.contains("Games"));
    }

    #[test]
    fn test_summary() {
        let summary = global_summary(&snapshot());
        let output = format_summary(&summary, Money::zero());

        assert!(output.contains("Necessary Monthly Payments: $100.00"));
        assert!(output.contains("Total Monthly Spending:     $120.00"));
        assert!(!output.contains("Leftover"));

        let with_income = format_summary(&summary, Money::from_cents(50000));
        assert!(with_income.contains("Weekly Income:              $500.00"));
        assert!(with_income.contains("Leftover per Week"));
    }
}
