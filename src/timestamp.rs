//! Jimi timestamp rendering
//!
//! Jimi uses two conventions:
//! - naive: UTC wall-clock time without any zone suffix (`2020-04-01T11:13:12`)
//! - offset: time converted to the channel's home zone with its offset
//!   appended (`2020-04-01T07:23:12-04:00`)
//!
//! Sub-second precision is always dropped.

use chrono::{DateTime, FixedOffset, Utc};

/// Rendered `EmbargoTime` when an article carries no embargo
pub const NO_EMBARGO: &str = "0001-01-01T00:00:00";

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Render a timestamp as naive UTC wall-clock time
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use jimi_formatter::timestamp::format_naive;
///
/// let ts = Utc.with_ymd_and_hms(2020, 4, 1, 11, 13, 12).unwrap();
/// assert_eq!(format_naive(&ts), "2020-04-01T11:13:12");
/// ```
pub fn format_naive(ts: &DateTime<Utc>) -> String {
    ts.naive_utc().format(NAIVE_FORMAT).to_string()
}

/// Render a timestamp in a fixed offset, with the offset suffix
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone, Utc};
/// use jimi_formatter::timestamp::format_with_offset;
///
/// let ts = Utc.with_ymd_and_hms(2020, 4, 1, 11, 23, 12).unwrap();
/// let home = FixedOffset::west_opt(4 * 3600).unwrap();
/// assert_eq!(format_with_offset(&ts, home), "2020-04-01T07:23:12-04:00");
/// ```
pub fn format_with_offset(ts: &DateTime<Utc>, offset: FixedOffset) -> String {
    ts.with_timezone(&offset).format(OFFSET_FORMAT).to_string()
}

/// Render an optional embargo, using the zero timestamp when absent
pub fn format_embargo(embargoed: Option<&DateTime<Utc>>) -> String {
    match embargoed {
        Some(ts) => format_naive(ts),
        None => NO_EMBARGO.to_string(),
    }
}
