//! Investment account service

use crate::api::ApiClient;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{InvestmentAccount, Money};

/// Service for investment account reads and the weekly deposit mutation
pub struct InvestmentService<'a> {
    api: &'a ApiClient,
}

impl<'a> InvestmentService<'a> {
    /// Create a new investment service
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Fetch every account
    pub fn fetch_accounts(&self) -> PocketbookResult<Vec<InvestmentAccount>> {
        self.api.fetch_investment_accounts()
    }

    /// Persist one account's weekly direct deposit and return the
    /// re-fetched account list
    pub fn set_weekly_deposit(
        &self,
        account_name: &str,
        amount: Money,
    ) -> PocketbookResult<Vec<InvestmentAccount>> {
        if amount.is_negative() {
            return Err(PocketbookError::Validation(
                "Weekly deposit cannot be negative".to_string(),
            ));
        }

        // Verify the account exists before mutating
        let accounts = self.api.fetch_investment_accounts()?;
        if !accounts.iter().any(|a| a.name == account_name) {
            return Err(PocketbookError::account_not_found(account_name));
        }

        self.api.save_weekly_deposit(account_name, amount)?;

        self.api.fetch_investment_accounts()
    }
}
