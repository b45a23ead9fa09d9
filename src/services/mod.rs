//! Service layer for pocketbook-cli
//!
//! The service layer provides business logic on top of the api layer:
//! validation before a mutation leaves the machine, positional-target
//! checks against a fresh snapshot, and the unconditional full re-fetch
//! that follows every successful mutation.

pub mod budget;
pub mod investment;
pub mod portfolio;

pub use budget::{BudgetService, EditTarget, SubmitMode};
pub use investment::InvestmentService;
pub use portfolio::PortfolioService;
