//! Investment CLI commands

use clap::Subcommand;

use crate::api::ApiClient;
use crate::display::investment::format_accounts;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::Money;
use crate::services::InvestmentService;

/// Investment subcommands
#[derive(Subcommand)]
pub enum InvestCommands {
    /// Show the contribution schedule for every account
    Show,

    /// Set an account's weekly direct deposit
    SetDeposit {
        /// Account name
        account: String,
        /// Weekly deposit amount (e.g. "200")
        amount: String,
    },
}

/// Handle an investment command
pub fn handle_invest_command(api: &ApiClient, cmd: InvestCommands) -> PocketbookResult<()> {
    let service = InvestmentService::new(api);

    match cmd {
        InvestCommands::Show => {
            let accounts = service.fetch_accounts()?;
            println!("{}", format_accounts(&accounts));
        }

        InvestCommands::SetDeposit { account, amount } => {
            let amount = Money::parse(&amount)
                .map_err(|e| PocketbookError::Validation(e.to_string()))?;

            let accounts = service.set_weekly_deposit(&account, amount)?;
            println!("Saved weekly deposit for {}.\n", account);
            println!("{}", format_accounts(&accounts));
        }
    }

    Ok(())
}
