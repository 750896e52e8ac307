//! Parsing of `--start` / `--stop` arguments.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::error::CliError;

/// Which end of a range a date argument bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bound {
    Start,
    Stop,
}

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a date argument.
///
/// RFC 3339 carries its own offset; other forms are local time. A bare date
/// is the start of that day for [`Bound::Start`] and its last instant for
/// [`Bound::Stop`], so `--start D --stop D` covers all of day D.
pub(crate) fn parse_date(input: &str, bound: Bound) -> Result<DateTime<Utc>, CliError> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()?;
            let time = match bound {
                Bound::Start => NaiveTime::from_hms_opt(0, 0, 0)?,
                Bound::Stop => NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)?,
            };
            Some(date.and_time(time))
        })
        .ok_or_else(|| {
            CliError::invalid_argument(format!(
                "unrecognized date '{input}' (expected YYYY-MM-DD, YYYY-MM-DD HH:MM:SS or RFC 3339)"
            ))
        })?;

    let local = Local.from_local_datetime(&naive).earliest().ok_or_else(|| {
        CliError::invalid_argument(format!("'{input}' does not exist in the local time zone"))
    })?;
    Ok(local.with_timezone(&Utc))
}
