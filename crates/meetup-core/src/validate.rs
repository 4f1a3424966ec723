// crates/meetup-core/src/validate.rs - Field validators
//
// One pure function per primitive field. Each either returns the parsed
// value or an error naming the offending field and the parse failure.
// None of these touch the environment beyond the compiled-in tz table,
// so they are safely retestable.

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;
use url::Url;

use crate::error::{EventError, EventResult, TimeField};

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn date(s: &str) -> EventResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| EventError::InvalidDate {
        value: s.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a 24-hour time of day, with or without seconds.
///
/// `field` identifies start or end so the error message can name it.
pub fn time_of_day(s: &str, field: TimeField) -> EventResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| EventError::InvalidTime {
            field,
            value: s.to_string(),
            reason: e.to_string(),
        })
}

/// Resolve a time zone identifier against the IANA database.
pub fn time_zone(s: &str) -> EventResult<Tz> {
    s.parse::<Tz>()
        .map_err(|_| EventError::InvalidTimeZone(s.to_string()))
}

/// Require a syntactically valid absolute URL with a host.
pub fn url(s: &str) -> EventResult<Url> {
    let parsed = Url::parse(s).map_err(|e| EventError::InvalidUrl {
        value: s.to_string(),
        reason: e.to_string(),
    })?;

    // Scheme-only URLs like "mailto:x" parse fine but have no host.
    if !parsed.has_host() {
        return Err(EventError::InvalidUrl {
            value: s.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(parsed)
}

/// Bounds-check an index into the venue table.
pub fn location(index: usize, table_len: usize) -> EventResult<usize> {
    if index >= table_len {
        return Err(EventError::InvalidLocation { index, table_len });
    }
    Ok(index)
}
