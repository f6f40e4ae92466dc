//! Error types for DSN parsing, envelope encoding, and delivery.

use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the client
///
/// Every failure is returned to the caller; nothing is retried or
/// swallowed internally.
#[derive(Debug, Error)]
pub enum Error {
    /// The connection string is not a well-formed DSN
    #[error("invalid DSN: {0}")]
    InvalidDsn(String),

    /// The DSN names a scheme no transport handles
    #[error("unsupported DSN scheme `{0}`")]
    UnsupportedScheme(String),

    /// No DSN was configured
    #[error("no DSN configured; pass one explicitly or set SENTRY_DSN")]
    MissingDsn,

    /// Event serialization failed
    #[error("event serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The compression stage of the envelope pipeline failed
    #[error("envelope encoding failed: {0}")]
    Encoding(#[source] std::io::Error),

    /// Opening or writing the network connection failed
    #[error("transport failure: {0}")]
    Network(String),

    /// The server answered with a non-success, non-redirect status
    #[error("server returned {status}: {body}")]
    Protocol {
        /// Status line of the response
        status: String,
        /// Response body text
        body: String,
    },

    /// The redirect chain exceeded the follow limit
    #[error("gave up after {0} redirects")]
    TooManyRedirects(usize),
}
