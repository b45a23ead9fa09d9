//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod invest;
pub mod portfolio;

pub use budget::{handle_budget_command, BudgetCommands};
pub use invest::{handle_invest_command, InvestCommands};
pub use portfolio::{handle_portfolio_command, PortfolioCommands};
