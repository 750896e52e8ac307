//! Conversion between the platform epoch (2001-01-01T00:00:00Z) used by
//! `record.delivered_date` and the Unix epoch.

use chrono::{DateTime, Utc};

/// Seconds between 1970-01-01 and 2001-01-01.
pub const MAC_EPOCH_OFFSET: f64 = 978_307_200.0;

pub fn to_unix(mac_ts: f64) -> f64 {
    mac_ts + MAC_EPOCH_OFFSET
}

pub fn from_unix(unix_ts: f64) -> f64 {
    unix_ts - MAC_EPOCH_OFFSET
}

/// Convert a platform timestamp to a UTC time. `None` if out of range.
pub fn to_datetime(mac_ts: f64) -> Option<DateTime<Utc>> {
    if !mac_ts.is_finite() {
        return None;
    }
    let unix = to_unix(mac_ts);
    let secs = unix.floor();
    let nanos = ((unix - secs) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(secs as i64, nanos)
}

/// Convert a UTC time to a platform timestamp.
pub fn from_datetime(dt: DateTime<Utc>) -> f64 {
    let unix = dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1e9;
    from_unix(unix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_start_is_2001() {
        let dt = to_datetime(0.0).unwrap();
        assert_eq!(dt.to_rfc3339(), "2001-01-01T00:00:00+00:00");
        assert_eq!(from_datetime(dt), 0.0);
    }

    #[test]
    fn unix_round_trip() {
        for ts in [0.0, 1.5, 726_000_000.123_456, -86_400.25] {
            assert!((from_unix(to_unix(ts)) - ts).abs() < 1e-6);
        }
    }

    #[test]
    fn datetime_round_trip() {
        for ts in [0.0, 694_224_000.5, 726_000_000.123_456] {
            let back = from_datetime(to_datetime(ts).unwrap());
            assert!((back - ts).abs() < 1e-6, "{ts} -> {back}");
        }
    }

    #[test]
    fn non_finite_has_no_datetime() {
        assert!(to_datetime(f64::NAN).is_none());
        assert!(to_datetime(f64::INFINITY).is_none());
    }
}
