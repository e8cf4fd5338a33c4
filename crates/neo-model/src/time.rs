//! Calendar-date conversion for close-approach timestamps.
//!
//! The close-approach source encodes timestamps as `2021-Jan-01 00:00`,
//! occasionally omitting the time of day. Seconds do not exist in the source
//! data, so the textual form is second-less in both directions.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ModelError;

const DATETIME_FORMAT: &str = "%Y-%b-%d %H:%M";
const DATE_FORMAT: &str = "%Y-%b-%d";

/// Parse a calendar date with an optional time of day.
///
/// A date without a time component is taken to be midnight.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDateTime, ModelError> {
    let trimmed = value.trim();
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, DATETIME_FORMAT) {
        return Ok(parsed);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| ModelError::InvalidTimestamp {
            value: value.to_string(),
        })
}

/// Format a timestamp back into the second-less textual form.
pub fn format_calendar_date(time: &NaiveDateTime) -> String {
    time.format(DATETIME_FORMAT).to_string()
}
