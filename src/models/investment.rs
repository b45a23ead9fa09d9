//! Investment account model
//!
//! Mirrors the data service's account records: a named account, the
//! user-editable weekly direct deposit, and the server-computed total of
//! weekly automatic investments.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// One investment account as reported by the data service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentAccount {
    /// Account name, the key used for all account-scoped operations
    pub name: String,

    /// Weekly direct deposit, user-editable and persisted on change.
    /// Accounts that have never been edited may omit the field.
    #[serde(rename = "weeklyDeposit", default)]
    pub weekly_deposit: Money,

    /// Total weekly automatic investments, server-supplied
    #[serde(rename = "autoInvestments", default)]
    pub auto_investments: Money,
}
