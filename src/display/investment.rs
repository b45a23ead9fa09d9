//! Investment contribution display formatting

use crate::models::InvestmentAccount;
use crate::reports::ContributionSchedule;

use super::dollars;

/// Format the per-account contribution table
pub fn format_accounts(accounts: &[InvestmentAccount]) -> String {
    if accounts.is_empty() {
        return "No investment accounts found.".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name.len())
        .max()
        .unwrap_or(7)
        .max(7);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>14}  {:>16}  {:>15}  {:>12}  {:>12}\n",
        "Account",
        "Weekly Deposit",
        "Auto Investments",
        "Leftover / Week",
        "Monthly",
        "Yearly",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->14}  {:->16}  {:->15}  {:->12}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for account in accounts {
        let schedule = ContributionSchedule::for_account(account);
        output.push_str(&format!(
            "{:<width$}  {:>14}  {:>16}  {:>15}  {:>12}  {:>12}\n",
            account.name,
            schedule.weekly_deposit.to_string(),
            schedule.auto_investments.to_string(),
            schedule.leftover_weekly().to_string(),
            dollars(schedule.monthly_investment()),
            dollars(schedule.yearly_investment()),
            width = name_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_empty_accounts() {
        assert!(format_accounts(&[]).contains("No investment accounts"));
    }

    #[test]
    fn test_account_table() {
        let accounts = vec![InvestmentAccount {
            name: "Brokerage".to_string(),
            weekly_deposit: Money::from_cents(20000),
            auto_investments: Money::from_cents(5000),
        }];

        let output = format_accounts(&accounts);
        assert!(output.contains("Brokerage"));
        assert!(output.contains("$200.00"));
        assert!(output.contains("$150.00"));
        assert!(output.contains("$866.00"));
        assert!(output.contains("$10400.00"));
    }
}
