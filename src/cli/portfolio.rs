//! Portfolio CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::api::ApiClient;
use crate::display::portfolio::{format_distribution, format_holdings};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::Money;
use crate::services::PortfolioService;

/// Portfolio subcommands
#[derive(Subcommand)]
pub enum PortfolioCommands {
    /// Show categorized holdings and their distribution for an account
    Show {
        /// Account name
        account: String,
    },

    /// Upload a holdings statement for server-side ingestion
    Upload {
        /// Path to the statement CSV
        file: PathBuf,
    },

    /// Set the weekly recurring investment for one holding
    SetRecurring {
        /// Account name
        account: String,
        /// Holding symbol
        symbol: String,
        /// Weekly amount (e.g. "25")
        amount: String,
    },
}

/// Handle a portfolio command
pub fn handle_portfolio_command(api: &ApiClient, cmd: PortfolioCommands) -> PocketbookResult<()> {
    let service = PortfolioService::new(api);

    match cmd {
        PortfolioCommands::Show { account } => {
            let report = service.fetch(&account)?;
            println!("{}", format_distribution(&account, &report));
            println!("{}", format_holdings(&account, &report)?);
        }

        PortfolioCommands::Upload { file } => {
            service.upload(&file)?;
            println!("Uploaded {}.", file.display());
        }

        PortfolioCommands::SetRecurring {
            account,
            symbol,
            amount,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| PocketbookError::Validation(e.to_string()))?;

            let report = service.set_recurring(&account, &symbol, amount.to_dollars())?;
            println!("Saved recurring investment for {}.\n", symbol);
            println!("{}", format_holdings(&account, &report)?);
        }
    }

    Ok(())
}
