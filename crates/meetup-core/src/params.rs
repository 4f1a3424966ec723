// crates/meetup-core/src/params.rs - Parameter resolution and derived fields
//
// The resolver merges three value sources per field (explicit command-line
// value, interactive prompt response, built-in default), validates whichever
// value was selected, and derives the dependent fields the template needs.
// The two effects it cannot perform itself are injected: the FieldSource
// decides how unsupplied fields get a value, and the preflight callback
// checks the output path before the user is asked any questions.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate, NaiveTime};
use serde::Serialize;
use tracing::debug;

use crate::error::{EventResult, TimeField};
use crate::locations::{Defaults, LocationRecord};
use crate::validate;

/// Calendar-style timestamp format for the article's metadata fields.
const CALENDAR_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The CLI-and-prompt-supplied values before validation.
///
/// Built once per invocation from the parsed arguments; immutable after.
#[derive(Debug, Clone, Default)]
pub struct RawInput {
    pub date: String,
    pub author: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub time_zone: Option<String>,
    pub url: Option<String>,
    pub location: Option<usize>,
    pub quiet: bool,
}

/// One seam for "get a raw value for field X".
///
/// An explicit command-line value always wins without consulting the
/// source. Otherwise the source decides: the CLI's interactive prompter
/// asks the user and treats an empty answer as the default, while
/// [`QuietSource`] takes the default directly.
pub trait FieldSource {
    fn value_for(
        &mut self,
        field: &str,
        explicit: Option<&str>,
        default: &str,
    ) -> EventResult<String>;
}

/// Non-interactive source: explicit value or built-in default.
pub struct QuietSource;

impl FieldSource for QuietSource {
    fn value_for(
        &mut self,
        _field: &str,
        explicit: Option<&str>,
        default: &str,
    ) -> EventResult<String> {
        Ok(explicit.unwrap_or(default).to_string())
    }
}

/// The fully resolved, internally consistent field set the template consumes.
///
/// Every field is validated before this struct exists; there is no partial
/// form. Field names double as the template's placeholder names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedParameters {
    /// Event-date key, ISO form; also names the output file.
    pub date: String,
    pub weekday: String,
    pub month: String,
    pub day: String,
    pub year: String,
    pub time_zone: String,
    /// 12-hour display times, e.g. "06:00 PM".
    pub start_time: String,
    pub end_time: String,
    /// Combined date + time timestamps in `YYYY-MM-DD HH:MM` form.
    pub event_start: String,
    pub event_end: String,
    /// Generation time from the local clock, same format, no zone attached.
    pub post_date: String,
    pub author: String,
    pub url: String,
    pub location_short: String,
    pub location_name: String,
    pub location_street: String,
    pub location_city: String,
    pub location_geo: String,
}

impl ValidatedParameters {
    /// Placeholder map for template rendering.
    pub fn context(&self) -> HashMap<String, String> {
        let mut context = HashMap::new();
        let fields = [
            ("date", &self.date),
            ("weekday", &self.weekday),
            ("month", &self.month),
            ("day", &self.day),
            ("year", &self.year),
            ("time_zone", &self.time_zone),
            ("start_time", &self.start_time),
            ("end_time", &self.end_time),
            ("event_start", &self.event_start),
            ("event_end", &self.event_end),
            ("post_date", &self.post_date),
            ("author", &self.author),
            ("url", &self.url),
            ("location_short", &self.location_short),
            ("location_name", &self.location_name),
            ("location_street", &self.location_street),
            ("location_city", &self.location_city),
            ("location_geo", &self.location_geo),
        ];
        for (name, value) in fields {
            context.insert(name.to_string(), value.clone());
        }
        context
    }
}

/// 12-hour display form of a validated time.
fn display_time(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// Combined event-date + time-of-day timestamp.
///
/// The calendar format carries no UTC offset, so the validated zone's role
/// is validation plus the readable zone name in the article body.
fn calendar_timestamp(date: NaiveDate, time: NaiveTime) -> String {
    date.and_time(time).format(CALENDAR_FORMAT).to_string()
}

/// Resolve and validate every field, or fail with the first error.
///
/// Fixed order: date, preflight output-path check, time zone, start time,
/// end time, author, URL, location index. The preflight runs before any
/// prompting so a doomed run fails before the user answers questions.
/// Location never prompts; it is explicit-or-default.
///
/// Start/end ordering is deliberately not checked; reversed or overnight
/// ranges pass through as entered.
pub fn resolve(
    raw: &RawInput,
    locations: &[LocationRecord],
    defaults: &Defaults,
    source: &mut dyn FieldSource,
    preflight: impl FnOnce(&str) -> EventResult<PathBuf>,
) -> EventResult<ValidatedParameters> {
    let event_date = validate::date(&raw.date)?;
    let date_key = event_date.format("%Y-%m-%d").to_string();
    preflight(&date_key)?;

    let zone_str = source.value_for("time zone", raw.time_zone.as_deref(), &defaults.time_zone)?;
    let tz = validate::time_zone(&zone_str)?;
    debug!(zone = %tz, date = %date_key, "resolved event date and zone");

    let start_str = source.value_for("start time", raw.start_time.as_deref(), &defaults.start_time)?;
    let start = validate::time_of_day(&start_str, TimeField::Start)?;
    let end_str = source.value_for("end time", raw.end_time.as_deref(), &defaults.end_time)?;
    let end = validate::time_of_day(&end_str, TimeField::End)?;

    let author = source.value_for("author", raw.author.as_deref(), &defaults.author)?;
    let url_str = source.value_for("URL", raw.url.as_deref(), &defaults.url)?;
    // Validate the selected URL but keep the user's spelling in the article.
    validate::url(&url_str)?;

    let index = validate::location(raw.location.unwrap_or(defaults.location), locations.len())?;
    let venue = &locations[index];

    Ok(ValidatedParameters {
        date: date_key,
        weekday: event_date.format("%A").to_string(),
        month: event_date.format("%B").to_string(),
        day: event_date.day().to_string(),
        year: event_date.format("%Y").to_string(),
        time_zone: tz.name().to_string(),
        start_time: display_time(start),
        end_time: display_time(end),
        event_start: calendar_timestamp(event_date, start),
        event_end: calendar_timestamp(event_date, end),
        post_date: Local::now().format(CALENDAR_FORMAT).to_string(),
        author,
        url: url_str,
        location_short: venue.short.clone(),
        location_name: venue.name.clone(),
        location_street: venue.street.clone(),
        location_city: venue.city.clone(),
        location_geo: venue.geo.clone(),
    })
}
