//! Portfolio allocation breakdowns
//!
//! Per-category totals over the holdings report (gain/loss dollar sum,
//! gain/loss percent mean, recurring investment sum) and the proportional
//! category distribution that feeds the chart.

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{HoldingCategory, HoldingsReport, Money};

/// Aggregated figures for one holding category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAllocation {
    pub category: HoldingCategory,

    /// Sum of the per-row gain/loss dollar figures
    pub gain_loss_dollar_total: Money,

    /// Mean of the per-row gain/loss percent figures
    pub gain_loss_percent_mean: f64,

    /// Sum of the weekly recurring investments set on this category's rows
    pub recurring_total: f64,
}

/// Aggregate every category that has at least one row
///
/// A row whose gain/loss fields cannot be parsed fails the whole report;
/// the error names the offending symbol.
pub fn category_allocations(report: &HoldingsReport) -> PocketbookResult<Vec<CategoryAllocation>> {
    let mut allocations = Vec::new();

    for &category in HoldingCategory::all() {
        let rows = report.rows(category);
        if rows.is_empty() {
            continue;
        }

        let mut dollar_total = Money::zero();
        let mut percent_sum = 0.0;
        let mut recurring_total = 0.0;

        for row in rows {
            dollar_total += row.gain_loss_dollar_amount().map_err(|e| {
                PocketbookError::Validation(format!("holding {}: {}", row.symbol, e))
            })?;
            percent_sum += row.gain_loss_percent_value().map_err(|e| {
                PocketbookError::Validation(format!("holding {}: {}", row.symbol, e))
            })?;
            if let Some(amount) = report.recurring_for(&row.symbol) {
                recurring_total += amount;
            }
        }

        allocations.push(CategoryAllocation {
            category,
            gain_loss_dollar_total: dollar_total,
            gain_loss_percent_mean: percent_sum / rows.len() as f64,
            recurring_total,
        });
    }

    Ok(allocations)
}

/// One slice of the category distribution
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionSlice {
    pub category: HoldingCategory,

    /// The category's share quantity from the service's chart data
    pub quantity: f64,

    /// This category's fraction of the total, in (0, 1]
    pub share: f64,
}

/// The proportional category breakdown for the distribution chart
///
/// Categories with zero (or absent) quantity are omitted, matching the
/// chart this replaces. Returns an empty vec when nothing is held.
pub fn distribution(report: &HoldingsReport) -> Vec<DistributionSlice> {
    let quantities: Vec<(HoldingCategory, f64)> = HoldingCategory::all()
        .iter()
        .filter_map(|&category| {
            let quantity = report
                .chart_data
                .get(category.wire_key())
                .copied()
                .unwrap_or(0.0);
            (quantity > 0.0).then_some((category, quantity))
        })
        .collect();

    let total: f64 = quantities.iter().map(|(_, q)| q).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    quantities
        .into_iter()
        .map(|(category, quantity)| DistributionSlice {
            category,
            quantity,
            share: quantity / total,
        })
        .collect()
}
