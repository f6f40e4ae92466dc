//! X-Sentry-Auth header construction

use chrono::{DateTime, Utc};

/// Client identifier reported in the auth header
const CLIENT_ID: &str = concat!("corvus-rust/", env!("CARGO_PKG_VERSION"));

/// Compute the auth header value for one request or datagram.
///
/// Pure function of the timestamp and public key. The secret key is
/// never part of this header; protocol version 2.0 authenticates with
/// the public key alone.
pub fn auth_header(timestamp: DateTime<Utc>, public_key: &str) -> String {
    format!(
        "Sentry sentry_version=2.0, sentry_client={}, sentry_timestamp={}, sentry_key={}",
        CLIENT_ID,
        timestamp.timestamp(),
        public_key
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_deterministic() {
        let timestamp = DateTime::from_timestamp(1_234_567_890, 0).unwrap();

        let expected = format!(
            "Sentry sentry_version=2.0, sentry_client=corvus-rust/{}, \
             sentry_timestamp=1234567890, sentry_key=abcd",
            env!("CARGO_PKG_VERSION")
        );
        assert_eq!(auth_header(timestamp, "abcd"), expected);
        assert_eq!(auth_header(timestamp, "abcd"), expected);
    }

    #[test]
    fn header_never_contains_the_secret_key() {
        let timestamp = DateTime::from_timestamp(1_234_567_890, 0).unwrap();
        let header = auth_header(timestamp, "public-only");
        assert!(!header.contains("sentry_secret"));
    }
}
