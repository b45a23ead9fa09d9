//! Portfolio display formatting
//!
//! Per-category holdings tables with a totals row, and the proportional
//! category distribution the pie chart becomes in a terminal.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::PocketbookResult;
use crate::models::HoldingsReport;
use crate::reports::{category_allocations, distribution};

use super::dollars;

const BAR_WIDTH: usize = 40;

#[derive(Tabled)]
struct HoldingDisplayRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Gain/Loss $")]
    gain_loss_dollar: String,
    #[tabled(rename = "Gain/Loss %")]
    gain_loss_percent: String,
    #[tabled(rename = "Recurring $/wk")]
    recurring: String,
}

/// Format every non-empty category's holdings as a table with a totals row
pub fn format_holdings(account_name: &str, report: &HoldingsReport) -> PocketbookResult<String> {
    let allocations = category_allocations(report)?;

    if allocations.is_empty() {
        return Ok(format!("No holdings found for account {}.", account_name));
    }

    let mut output = format!("Holdings for account {}\n", account_name);

    for allocation in allocations {
        let rows = report.rows(allocation.category);

        let mut display_rows = Vec::with_capacity(rows.len() + 1);
        for row in rows {
            display_rows.push(HoldingDisplayRow {
                symbol: row.symbol.clone(),
                description: row.description.clone(),
                quantity: format!("{:.2}", row.quantity),
                gain_loss_dollar: row.gain_loss_dollar_amount()?.to_string(),
                gain_loss_percent: format!("{:.2}%", row.gain_loss_percent_value()?),
                recurring: report
                    .recurring_for(&row.symbol)
                    .map(dollars)
                    .unwrap_or_default(),
            });
        }

        display_rows.push(HoldingDisplayRow {
            symbol: "Total".to_string(),
            description: String::new(),
            quantity: String::new(),
            gain_loss_dollar: allocation.gain_loss_dollar_total.to_string(),
            gain_loss_percent: format!("{:.2}%", allocation.gain_loss_percent_mean),
            recurring: dollars(allocation.recurring_total),
        });

        let mut table = Table::new(display_rows);
        table.with(Style::psql());

        output.push('\n');
        output.push_str(&format!("{}\n", allocation.category));
        output.push_str(&table.to_string());
        output.push('\n');
    }

    Ok(output)
}

/// Format the category distribution as proportional text bars
pub fn format_distribution(account_name: &str, report: &HoldingsReport) -> String {
    let slices = distribution(report);

    if slices.is_empty() {
        return format!("No holdings found for account {}.", account_name);
    }

    let name_width = slices
        .iter()
        .map(|s| s.category.display_name().len())
        .max()
        .unwrap_or(0);

    let mut output = format!("Category distribution for account {}\n\n", account_name);

    for slice in slices {
        let bar_len = ((slice.share * BAR_WIDTH as f64).round() as usize).max(1);
        output.push_str(&format!(
            "{:<width$}  {:>5.1}%  {}\n",
            slice.category.display_name(),
            slice.share * 100.0,
            "█".repeat(bar_len),
            width = name_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> HoldingsReport {
        serde_json::from_str(
            r#"{
            "chartData": {"growth": 10.0, "dividend": 30.0},
            "tableData": {
                "growth": [
                    {"Symbol": "NVDA", "Description": "NVIDIA CORP", "Quantity": 4,
                     "Total Gain/Loss Dollar": "+$200.00",
                     "Total Gain/Loss Percent": "+12.0%"}
                ]
            },
            "recurringInvestments": {"NVDA": 25}
        }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_holdings_tables() {
        let output = format_holdings("Brokerage", &report()).unwrap();
        assert!(output.contains("Growth"));
        assert!(output.contains("NVDA"));
        assert!(output.contains("$200.00"));
        assert!(output.contains("12.00%"));
        assert!(output.contains("$25.00"));
        assert!(output.contains("Total"));
    }

    #[test]
    fn test_distribution_bars() {
        let output = format_distribution("Brokerage", &report());
        assert!(output.contains("Dividend"));
        assert!(output.contains("75.0%"));
        assert!(output.contains("Growth"));
        assert!(output.contains("25.0%"));
    }

    #[test]
    fn test_empty_report() {
        let empty = HoldingsReport::default();
        assert!(format_holdings("X", &empty)
            .unwrap()
            .contains("No holdings"));
        assert!(format_distribution("X", &empty).contains("No holdings"));
    }
}
