//! Remote data service client
//!
//! All budget, investment, and holdings state lives behind a small
//! JSON-over-HTTP service; this module is the only place that talks to it.
//! It sits where a storage layer otherwise would: one client struct, with
//! the endpoint groups split per entity the way a storage layer splits its
//! files.
//!
//! Requests are blocking: every user action runs to completion before the
//! next begins, and a request cannot be aborted once issued. There are no
//! retries; a failure is terminal for that one action.

pub mod budget;
pub mod holdings;
pub mod investments;

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{PocketbookError, PocketbookResult};

/// Client for the remote data service
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: impl Into<String>) -> PocketbookResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| PocketbookError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }

    /// The service base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON document from a read endpoint
    ///
    /// Read failures are logged before being surfaced.
    fn get_json<T: DeserializeOwned>(&self, path: &str) -> PocketbookResult<T> {
        debug!(endpoint = path, "fetching");

        let response = self.http.get(self.url(path)).send().map_err(|e| {
            warn!(endpoint = path, error = %e, "read failed");
            PocketbookError::Transport(e.to_string())
        })?;

        let response = check_status(path, response).map_err(|e| {
            warn!(endpoint = path, error = %e, "read failed");
            e
        })?;

        response.json().map_err(|e| PocketbookError::Decode {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }

    /// POST a JSON body to a mutation endpoint
    ///
    /// Mutations are fire-and-forget: no endpoint returns the updated
    /// record, so only the response status matters. The caller re-fetches.
    fn post_json<B: Serialize>(&self, path: &str, body: &B) -> PocketbookResult<()> {
        debug!(endpoint = path, "posting");

        let response = self.http.post(self.url(path)).json(body).send()?;
        check_status(path, response)?;

        Ok(())
    }
}

fn check_status(path: &str, response: Response) -> PocketbookResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(PocketbookError::status(path, status.as_u16()))
    }
}
