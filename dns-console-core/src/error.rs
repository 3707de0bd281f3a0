//! Unified error type definition

use thiserror::Error;

/// Core layer error type
///
/// Every failure of the REST boundary collapses into one of these variants,
/// so callers have a single failure path regardless of whether the server
/// answered with an error body or the transport fell over.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The API answered with a non-success status.
    ///
    /// `message` is the server-supplied `{error}` text or a generic
    /// fallback; `Display` emits only the message so the UI can show it
    /// verbatim.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Transport failure (connection refused, DNS, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Export was requested on an empty record cache
    #[error("No records to export.")]
    NothingToExport,
}

impl CoreError {
    /// Whether this is expected behavior (server-side rejection, empty
    /// export) used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::NothingToExport)
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
