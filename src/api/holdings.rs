//! Holdings endpoints
//!
//! Upload a statement for server-side ingestion, read back one account's
//! categorized holdings report, and persist per-symbol recurring
//! investment amounts.

use std::path::Path;

use reqwest::blocking::multipart::Form;
use serde::{Deserialize, Serialize};

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::HoldingsReport;

use super::{check_status, ApiClient};

#[derive(Deserialize)]
struct UploadResponse {
    success: bool,
}

#[derive(Serialize)]
struct SaveRecurringRequest<'a> {
    account_name: &'a str,
    symbol: &'a str,
    value: f64,
}

impl ApiClient {
    /// Upload a holdings statement for server-side ingestion
    ///
    /// Any failure here (transport, status, or a `success: false` answer)
    /// blocks the command.
    pub fn upload_statement(&self, file: &Path) -> PocketbookResult<()> {
        let form = Form::new()
            .file("file", file)
            .map_err(|e| PocketbookError::Io(format!("Failed to read {}: {}", file.display(), e)))?;

        let response = self
            .http
            .post(self.url("/upload_csv"))
            .multipart(form)
            .send()?;
        let response = check_status("/upload_csv", response)?;

        let body: UploadResponse = response.json().map_err(|e| PocketbookError::Decode {
            endpoint: "/upload_csv".to_string(),
            message: e.to_string(),
        })?;

        if !body.success {
            return Err(PocketbookError::Upload(
                "service rejected the statement".to_string(),
            ));
        }

        Ok(())
    }

    /// Fetch one account's categorized holdings report
    pub fn fetch_holdings(&self, account_name: &str) -> PocketbookResult<HoldingsReport> {
        self.get_json(&format!("/data/{}", account_name))
    }

    /// Persist the weekly recurring investment for one holding
    pub fn save_recurring_investment(
        &self,
        account_name: &str,
        symbol: &str,
        value: f64,
    ) -> PocketbookResult<()> {
        self.post_json(
            "/save_recurring_investment",
            &SaveRecurringRequest {
                account_name,
                symbol,
                value,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_shape() {
        let ok: UploadResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ok.success);

        let rejected: UploadResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!rejected.success);
    }

    #[test]
    fn test_recurring_request_shape() {
        let request = SaveRecurringRequest {
            account_name: "Brokerage",
            symbol: "SCHD",
            value: 25.0,
        };

        let json: serde_json::Value = serde_json::to_value(&request).unwrap();
        assert_eq!(json["account_name"], "Brokerage");
        assert_eq!(json["symbol"], "SCHD");
        assert_eq!(json["value"], 25.0);
    }
}
