//! Error types for Strand API operations.

use thiserror::Error;

/// Errors that can occur during Strand API operations.
#[derive(Debug, Error)]
pub enum StrandError {
    /// Configuration is missing or incomplete.
    #[error("Strand configuration required: {0}")]
    ConfigMissing(String),

    /// API request failed with an HTTP error status.
    #[error("Strand API error: {message} (status {status_code})")]
    ApiError { status_code: u16, message: String },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with something other than the JSON shape the API
    /// promises, whatever the status line said.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// The resource kind has no endpoint and cannot be fetched or listed.
    #[error("'{kind}' records are embedded-only: no API endpoint is defined")]
    UnsupportedOperation { kind: &'static str },

    /// The record carries no usable string `id` field.
    #[error("'{kind}' record has no 'id' field to fetch by")]
    MissingId { kind: &'static str },

    /// The server kept returning continuation cursors past the page cap.
    #[error("Pagination did not terminate after {pages} pages")]
    PaginationOverflow { pages: u32 },
}

/// Result type alias for Strand operations.
pub type Result<T> = core::result::Result<T, StrandError>;
