//! # Time Utilities
//!
//! Utilities for time manipulation using chrono.

use chrono::{DateTime, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Seconds since the Unix epoch, as used by JWT `NumericDate` claims.
pub fn unix_timestamp(time: DateTime<Utc>) -> i64 {
    time.timestamp()
}
