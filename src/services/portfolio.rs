//! Portfolio service
//!
//! Statement upload with a local header preflight, the categorized
//! holdings read, and the per-symbol recurring investment mutation.

use std::path::Path;

use crate::api::ApiClient;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{HoldingCategory, HoldingsReport};

/// Columns the statement must carry for the service to ingest it
const REQUIRED_COLUMNS: &[&str] = &["Account Name", "Symbol", "Quantity"];

/// Service for holdings reads, uploads, and recurring investments
pub struct PortfolioService<'a> {
    api: &'a ApiClient,
}

impl<'a> PortfolioService<'a> {
    /// Create a new portfolio service
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Upload a holdings statement after a local header check
    ///
    /// The service does the real parsing; the preflight only catches
    /// uploading the wrong file entirely.
    pub fn upload(&self, file: &Path) -> PocketbookResult<()> {
        preflight_statement(file)?;
        self.api.upload_statement(file)
    }

    /// Fetch one account's categorized holdings report
    pub fn fetch(&self, account_name: &str) -> PocketbookResult<HoldingsReport> {
        self.api.fetch_holdings(account_name)
    }

    /// Persist the weekly recurring investment for one holding and return
    /// the re-fetched report
    pub fn set_recurring(
        &self,
        account_name: &str,
        symbol: &str,
        value: f64,
    ) -> PocketbookResult<HoldingsReport> {
        if !value.is_finite() || value < 0.0 {
            return Err(PocketbookError::Validation(
                "Recurring investment must be a non-negative amount".to_string(),
            ));
        }

        // Verify the symbol is actually held in this account
        let report = self.api.fetch_holdings(account_name)?;
        let held = HoldingCategory::all()
            .iter()
            .any(|&category| report.rows(category).iter().any(|row| row.symbol == symbol));
        if !held {
            return Err(PocketbookError::NotFound {
                entity_type: "Holding",
                identifier: format!("{} in {}", symbol, account_name),
            });
        }

        self.api
            .save_recurring_investment(account_name, symbol, value)?;

        self.api.fetch_holdings(account_name)
    }
}

/// Check that a file at least looks like a holdings statement
fn preflight_statement(file: &Path) -> PocketbookResult<()> {
    let mut reader = csv::Reader::from_path(file)
        .map_err(|e| PocketbookError::Io(format!("Failed to read {}: {}", file.display(), e)))?;

    let headers = reader.headers().map_err(|e| {
        PocketbookError::Validation(format!("{} is not a readable CSV: {}", file.display(), e))
    })?;

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h.trim() == *required) {
            return Err(PocketbookError::Validation(format!(
                "{} does not look like a holdings statement: missing column {:?}",
                file.display(),
                required
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn statement(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_preflight_accepts_statement_header() {
        let file = statement(
            "Account Name,Symbol,Description,Quantity,Total Gain/Loss Dollar\n\
             Brokerage,VOO,VANGUARD S&P 500 ETF,10.25,+$47.60\n",
        );

        assert!(preflight_statement(file.path()).is_ok());
    }

    #[test]
    fn test_preflight_rejects_wrong_file() {
        let file = statement("date,payee,amount\n2025-01-03,Grocer,12.50\n");

        let err = preflight_statement(file.path()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Account Name"));
    }

    #[test]
    fn test_preflight_missing_file() {
        let err = preflight_statement(Path::new("/nonexistent/holdings.csv")).unwrap_err();
        assert!(matches!(err, PocketbookError::Io(_)));
    }
}
