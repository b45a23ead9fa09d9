//! Investment account endpoints

use serde::{Deserialize, Serialize};

use crate::error::PocketbookResult;
use crate::models::{InvestmentAccount, Money};

use super::ApiClient;

#[derive(Deserialize)]
struct InvestmentData {
    accounts: Vec<InvestmentAccount>,
}

#[derive(Serialize)]
struct SaveDepositRequest<'a> {
    account_name: &'a str,
    weekly_deposit: Money,
}

impl ApiClient {
    /// Fetch every investment account
    pub fn fetch_investment_accounts(&self) -> PocketbookResult<Vec<InvestmentAccount>> {
        let data: InvestmentData = self.get_json("/investment_data")?;
        Ok(data.accounts)
    }

    /// Persist one account's weekly direct deposit
    pub fn save_weekly_deposit(
        &self,
        account_name: &str,
        weekly_deposit: Money,
    ) -> PocketbookResult<()> {
        self.post_json(
            "/save_weekly_deposit",
            &SaveDepositRequest {
                account_name,
                weekly_deposit,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accounts_wire_shape() {
        let json = r#"{"accounts": [
            {"name": "Brokerage", "weeklyDeposit": 200, "autoInvestments": 50}
        ]}"#;

        let data: InvestmentData = serde_json::from_str(json).unwrap();
        assert_eq!(data.accounts.len(), 1);
        assert_eq!(data.accounts[0].name, "Brokerage");
    }

    #[test]
    fn test_deposit_request_shape() {
        let request = SaveDepositRequest {
            account_name: "Brokerage",
            weekly_deposit: Money::from_cents(20000),
        };

        let json: serde_json::Value = serde_json::to_value(&request).unwrap();
        assert_eq!(json["account_name"], "Brokerage");
        assert_eq!(json["weekly_deposit"], 200.0);
    }
}
