//! Error taxonomy for the scan-and-lookup flow
//!
//! Every lookup failure collapses to one of exactly two kinds. Both are
//! transient: the caller re-arms scanning and the user may rescan. The
//! `Display` text is the user-facing alert for that kind.

use thiserror::Error;

/// Errors a single barcode lookup can produce
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The endpoint answered, but the barcode is not an active product
    #[error("Invalid barcode.")]
    InvalidBarcode,

    /// Transport failure, non-2xx response, or malformed body
    #[error("Error occurred while fetching information. Please try again.")]
    NetworkFailure {
        /// Diagnostic detail, logged but never shown to the user
        reason: String,
    },
}

impl LookupError {
    /// Build a `NetworkFailure` from any displayable cause
    pub fn network(reason: impl std::fmt::Display) -> Self {
        Self::NetworkFailure {
            reason: reason.to_string(),
        }
    }
}
