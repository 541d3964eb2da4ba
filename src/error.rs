//! Canonical error taxonomy shared by every provider adapter
//!
//! Adapters never invent their own failure shapes. Anything that goes
//! wrong between argument parsing and the final JSON document is one of
//! these variants, so callers can match on the class instead of on
//! provider-specific strings.

use thiserror::Error;

/// Every failure the gateway can report.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Malformed or missing input, caught before any network traffic.
    #[error("{0}")]
    Usage(String),

    /// Missing or implausibly short API credential.
    #[error("{message}")]
    Credential {
        message: String,
        env_var: &'static str,
        signup_url: &'static str,
        how_to_fix: Vec<String>,
    },

    /// The provider answered with a non-success status.
    #[error("{message} (HTTP {status})")]
    Provider { status: u16, message: String },

    /// Connection-level failure before any response arrived.
    #[error("Network error: {0}. Check your internet connection.")]
    Network(String),

    /// The request exceeded its time budget.
    #[error("Request timed out after {budget}s. Try again or reduce max_results.")]
    Timeout { budget: u64 },
}

impl SearchError {
    /// Process exit status for this failure class.
    ///
    /// Usage mistakes exit 2, everything else exits 1. Success is 0.
    pub fn exit_code(&self) -> i32 {
        match self {
            SearchError::Usage(_) => 2,
            _ => 1,
        }
    }

    /// HTTP status attached to the failure, when one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }
}
