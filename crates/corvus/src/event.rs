//! Event records
//!
//! One [`Event`] is built per captured message and discarded after
//! encoding. Field names are the stable wire names the server expects.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Timestamp format the server expects: ISO 8601, UTC, no offset
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A single reportable event
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub event_id: String,
    pub project: String,
    pub message: String,
    pub timestamp: String,
    pub level: String,
    pub logger: String,
}

impl Event {
    /// Build a message event with a freshly generated id.
    ///
    /// The id is a version-4 UUID from a cryptographically secure
    /// source; exhaustion of the randomness source aborts the process
    /// rather than degrading to a weaker generator.
    pub fn new(project: &str, message: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            project: project.to_string(),
            message: message.to_string(),
            timestamp: timestamp.format(TIMESTAMP_FORMAT).to_string(),
            level: "error".to_string(),
            logger: "root".to_string(),
        }
    }
}
