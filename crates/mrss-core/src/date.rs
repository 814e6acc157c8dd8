use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{MediaError, Result};

/// A point in time as written in an MRSS feed.
///
/// Feeds mix absolute dates (scene markers, publication data) with clock
/// offsets into the media (`media:thumbnail time`, `media:text start`), so
/// both are kept without inventing a calendar date for the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Timestamp {
    /// Date and time with a UTC offset.
    Instant(DateTime<FixedOffset>),
    /// Date and time without zone information.
    Local(NaiveDateTime),
    /// Time of day / offset into the media.
    Clock(NaiveTime),
}

/// ISO-like layouts with an explicit offset that RFC 3339 rejects.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

const CLOCK_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];

/// Parse a timestamp string, trying offset-aware formats first.
pub fn parse_datetime(value: &str) -> Option<Timestamp> {
    let s = value.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(Timestamp::Instant(dt));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(Timestamp::Instant(dt));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Some(Timestamp::Instant(dt));
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Timestamp::Local(dt));
        }
    }

    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, format) {
            return Some(Timestamp::Local(d.and_hms_opt(0, 0, 0)?));
        }
    }

    for format in CLOCK_FORMATS {
        if let Ok(t) = NaiveTime::parse_from_str(s, format) {
            return Some(Timestamp::Clock(t));
        }
    }

    None
}

/// Like [`parse_datetime`], but a failure names the field it came from.
pub(crate) fn parse_timestamp(field: &'static str, value: &str) -> Result<Timestamp> {
    parse_datetime(value).ok_or_else(|| MediaError::invalid_timestamp(field, value))
}
