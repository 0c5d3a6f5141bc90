//! Shared helpers used across all domain modules.

pub mod serde_util;

use chrono::{DateTime, Utc};

/// Convert a UTC date to the unix-seconds timestamp the API expects.
pub fn unix_timestamp(date: DateTime<Utc>) -> i64 {
    date.timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_unix_timestamp() {
        let date = Utc.with_ymd_and_hms(2008, 1, 10, 0, 0, 0).unwrap();
        assert_eq!(unix_timestamp(date), 1_199_923_200);
    }
}
