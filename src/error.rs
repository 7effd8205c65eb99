//! Error types for the Nomics client library.

use thiserror::Error;

/// The main error type for all Nomics client operations.
#[derive(Error, Debug)]
pub enum NomicsError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// The server answered with a non-200 status
    #[error("server returned HTTP {status}: {reason}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Canonical status text (e.g. "Not Found")
        reason: String,
    },

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Query-string encoding error
    #[error("query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A required request field was left empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Writing a CSV download to disk failed
    #[error("failed to write CSV file: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let error = NomicsError::Status {
            status: 401,
            reason: "Unauthorized".to_string(),
        };
        assert_eq!(error.to_string(), "server returned HTTP 401: Unauthorized");
    }

    #[test]
    fn test_missing_field_display() {
        let error = NomicsError::MissingField("currency");
        assert_eq!(error.to_string(), "currency is required");
    }
}
