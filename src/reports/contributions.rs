//! Investment contribution schedules
//!
//! Pure arithmetic over one account's weekly deposit and automatic
//! investments: what is left to invest each week, and what the deposit
//! amounts to monthly and yearly.

use crate::models::{InvestmentAccount, Money};

use super::normalize::WEEKS_PER_MONTH;

/// The derived contribution figures for one investment account
#[derive(Debug, Clone, PartialEq)]
pub struct ContributionSchedule {
    pub weekly_deposit: Money,
    pub auto_investments: Money,
}

impl ContributionSchedule {
    /// Build the schedule for an account
    pub fn for_account(account: &InvestmentAccount) -> Self {
        Self {
            weekly_deposit: account.weekly_deposit,
            auto_investments: account.auto_investments,
        }
    }

    /// Deposit left each week after automatic investments
    pub fn leftover_weekly(&self) -> Money {
        self.weekly_deposit - self.auto_investments
    }

    /// The deposit expressed monthly (`weekly * 4.33`)
    pub fn monthly_investment(&self) -> f64 {
        self.weekly_deposit.to_dollars() * WEEKS_PER_MONTH
    }

    /// The deposit expressed yearly (`weekly * 52`)
    pub fn yearly_investment(&self) -> f64 {
        self.weekly_deposit.to_dollars() * 52.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule() {
        let account = InvestmentAccount {
            name: "Brokerage".to_string(),
            weekly_deposit: Money::from_cents(20000),
            auto_investments: Money::from_cents(5000),
        };

        let schedule = ContributionSchedule::for_account(&account);

        assert_eq!(schedule.leftover_weekly(), Money::from_cents(15000));
        assert!((schedule.monthly_investment() - 866.0).abs() < 1e-9);
        assert!((schedule.yearly_investment() - 10400.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_deposit() {
        let account = InvestmentAccount {
            name: "Roth IRA".to_string(),
            weekly_deposit: Money::zero(),
            auto_investments: Money::from_cents(2500),
        };

        let schedule = ContributionSchedule::for_account(&account);

        assert_eq!(schedule.leftover_weekly(), Money::from_cents(-2500));
        assert_eq!(schedule.monthly_investment(), 0.0);
        assert_eq!(schedule.yearly_investment(), 0.0);
    }
}
