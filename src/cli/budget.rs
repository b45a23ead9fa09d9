//! Budget CLI commands
//!
//! Implements the budget views (items, totals, summary) and the
//! add/edit/delete mutations. Every successful mutation prints the
//! re-fetched tables, never a locally patched view.

use clap::Subcommand;

use crate::api::ApiClient;
use crate::config::Settings;
use crate::display::budget::{format_budget_tables, format_category_totals, format_summary};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{BudgetItem, Frequency, Money};
use crate::reports::global_summary;
use crate::services::{BudgetService, EditTarget, SubmitMode};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show every category's items
    Show,

    /// Show per-category monthly and weekly totals
    Totals {
        /// Category whose item rows to expand beneath its totals line
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show the overall spending summary
    Summary,

    /// Add a new budget item
    Add {
        /// Category name (a new name creates the category on first save)
        category: String,
        /// Free-text description
        description: String,
        /// Amount (e.g. "15.49")
        amount: String,
        /// Recurrence (e.g. "1 month", "2 weeks")
        frequency: String,
        /// Mark as necessary spending
        #[arg(short, long)]
        necessary: bool,
    },

    /// Edit the item at a position within a category
    Edit {
        /// Category holding the item
        category: String,
        /// Item position as shown by 'budget show'
        index: usize,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(long)]
        amount: Option<String>,
        /// New recurrence
        #[arg(long)]
        frequency: Option<String>,
        /// New necessary flag (true/false)
        #[arg(long)]
        necessary: Option<bool>,
        /// Move the item to this category
        #[arg(long)]
        move_to: Option<String>,
    },

    /// Delete the item at a position within a category
    Delete {
        /// Category holding the item
        category: String,
        /// Item position as shown by 'budget show'
        index: usize,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    api: &ApiClient,
    settings: &Settings,
    cmd: BudgetCommands,
) -> PocketbookResult<()> {
    let service = BudgetService::new(api);

    match cmd {
        BudgetCommands::Show => {
            let snapshot = service.fetch()?;
            println!("{}", format_budget_tables(&snapshot));
        }

        BudgetCommands::Totals { category } => {
            let snapshot = service.fetch()?;
            if let Some(name) = &category {
                if snapshot.items(name).is_none() {
                    return Err(PocketbookError::category_not_found(name));
                }
            }
            println!("{}", format_category_totals(&snapshot, category.as_deref()));
        }

        BudgetCommands::Summary => {
            let snapshot = service.fetch()?;
            let summary = global_summary(&snapshot);
            println!("{}", format_summary(&summary, settings.weekly_income));
        }

        BudgetCommands::Add {
            category,
            description,
            amount,
            frequency,
            necessary,
        } => {
            let item = BudgetItem::new(
                description,
                parse_amount(&amount)?,
                parse_frequency(&frequency)?,
                necessary,
            );

            let snapshot = service.submit(&category, &item, SubmitMode::Create)?;
            println!("Added to {}.\n", category);
            println!("{}", format_budget_tables(&snapshot));
        }

        BudgetCommands::Edit {
            category,
            index,
            description,
            amount,
            frequency,
            necessary,
            move_to,
        } => {
            let target = EditTarget::new(category.clone(), index);

            // Prefill from the current item, then apply the overrides
            let snapshot = service.fetch()?;
            let existing = service.item_at(&snapshot, &target)?;

            let item = BudgetItem::new(
                description.unwrap_or(existing.description),
                match amount {
                    Some(s) => parse_amount(&s)?,
                    None => existing.amount,
                },
                match frequency {
                    Some(s) => parse_frequency(&s)?,
                    None => existing.frequency,
                },
                necessary.unwrap_or(existing.necessary),
            );

            let destination = move_to.unwrap_or_else(|| category.clone());
            let snapshot = service.submit(&destination, &item, SubmitMode::Edit(target))?;
            println!("Updated {} item {}.\n", category, index);
            println!("{}", format_budget_tables(&snapshot));
        }

        BudgetCommands::Delete { category, index } => {
            let snapshot = service.delete(&EditTarget::new(category.clone(), index))?;
            println!("Deleted {} item {}.\n", category, index);
            println!("{}", format_budget_tables(&snapshot));
        }
    }

    Ok(())
}

fn parse_amount(s: &str) -> PocketbookResult<Money> {
    Money::parse(s).map_err(|e| PocketbookError::Validation(e.to_string()))
}

fn parse_frequency(s: &str) -> PocketbookResult<Frequency> {
    s.parse()
        .map_err(|e: crate::models::FrequencyParseError| {
            PocketbookError::Validation(e.to_string())
        })
}
