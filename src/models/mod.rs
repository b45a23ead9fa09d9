//! Core data models for pocketbook-cli
//!
//! Everything the client exchanges with the remote data service or renders
//! to the terminal is expressed through these types.

pub mod budget;
pub mod frequency;
pub mod holdings;
pub mod investment;
pub mod money;

pub use budget::{BudgetItem, BudgetSnapshot, ItemValidationError};
pub use frequency::{Frequency, FrequencyParseError, FrequencyUnit};
pub use holdings::{HoldingCategory, HoldingRow, HoldingsReport};
pub use investment::InvestmentAccount;
pub use money::{Money, MoneyParseError};
