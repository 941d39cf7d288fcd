//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// The moment `span` before now. Spans beyond chrono's range clamp to a century.
    pub fn ago(span: Duration) -> Self {
        let span = chrono::Duration::from_std(span).unwrap_or_else(|_| chrono::Duration::days(36_500));
        Self(Utc::now() - span)
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// RFC 3339 rendering used by the HTTP layer.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}
