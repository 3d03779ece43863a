//! Beep Lookup - HTTP client for the barcode lookup endpoint
//!
//! One GET per scan: `{base}/api/{barcode}`. No retries, no caching,
//! no authentication. Every failure collapses to one of two kinds:
//! `InvalidBarcode` (the endpoint answered, the product is not active)
//! or `NetworkFailure` (everything else).

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

use std::time::Duration;

use beep_core::{LookupError, ProductRecord};
use tracing::{debug, warn};

/// Default lookup host
pub const DEFAULT_ENDPOINT: &str = "https://barcode.monster";

/// Default request timeout, so a dead endpoint cannot wedge the scan loop
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the product lookup endpoint
#[derive(Debug, Clone)]
pub struct LookupClient {
    http: reqwest::Client,
    base_url: String,
}

impl LookupClient {
    /// Create a client against the default endpoint.
    ///
    /// # Errors
    /// Returns `NetworkFailure` if the HTTP client cannot be built.
    pub fn new() -> Result<Self, LookupError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }

    /// Create a client against a specific endpoint with a request timeout.
    ///
    /// # Errors
    /// Returns `NetworkFailure` if the HTTP client cannot be built.
    pub fn with_endpoint(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(LookupError::network)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The endpoint this client queries
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up one barcode: a single GET, no retries.
    ///
    /// - 2xx with body `status == "active"` → the record
    /// - 2xx with any other status → `InvalidBarcode`
    /// - non-2xx, transport failure, or malformed body → `NetworkFailure`
    ///
    /// # Errors
    /// `InvalidBarcode` or `NetworkFailure`, as above.
    pub async fn lookup(&self, barcode: &str) -> Result<ProductRecord, LookupError> {
        let url = format!("{}/api/{barcode}", self.base_url);
        debug!(barcode, "looking up barcode");

        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!(error = %e, "lookup transport failure");
            LookupError::network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "lookup endpoint returned an error status");
            return Err(LookupError::network(format!("endpoint returned {status}")));
        }

        let record: ProductRecord = response.json().await.map_err(|e| {
            warn!(error = %e, "lookup body was not valid JSON");
            LookupError::network(e)
        })?;

        if !record.is_active() {
            debug!(status = %record.status, "barcode is not an active product");
            return Err(LookupError::InvalidBarcode);
        }

        Ok(record)
    }
}
