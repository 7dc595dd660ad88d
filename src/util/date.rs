use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::form_urlencoded;

/// Format used everywhere a date is shown or sent to the stats API.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Format of date-picker input fields.
pub const INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("malformed date: {0:?} (expected DD/MM/YYYY)")]
    Malformed(String),
    #[error("unrecognized date: {0:?}")]
    Unparseable(String),
}

/// Inclusive reporting period, both ends in `DD/MM/YYYY` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

impl DateRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// `false` only when both ends parse and `from` falls after `to`.
    pub fn is_ordered(&self) -> bool {
        match (parse_display_date(&self.from), parse_display_date(&self.to)) {
            (Ok(from), Ok(to)) => from <= to,
            _ => true,
        }
    }

    pub fn label(&self) -> String {
        format!("{} - {}", self.from, self.to)
    }
}

/// Percent-encode a display date verbatim for use as a query value.
pub fn to_query_param(date: &str) -> String {
    form_urlencoded::byte_serialize(date.as_bytes()).collect()
}

/// Convert `DD/MM/YYYY` into the `YYYY-MM-DD` value a date input expects.
///
/// Day and month are zero-padded; the year is passed through as given.
pub fn to_input_value(date: &str) -> Result<String, DateError> {
    let parts: Vec<&str> = date.split('/').collect();
    let [day, month, year] = parts[..] else {
        return Err(DateError::Malformed(date.to_string()));
    };

    let numeric = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if !(numeric(day) && numeric(month) && numeric(year)) {
        return Err(DateError::Malformed(date.to_string()));
    }

    Ok(format!("{year}-{month:0>2}-{day:0>2}"))
}

/// Parse a date-input value and reformat it as `DD/MM/YYYY`.
///
/// Accepts plain ISO dates, RFC 3339 timestamps, naive ISO timestamps and
/// US-style `MM/DD/YYYY`.
pub fn from_input_value(value: &str) -> Result<String, DateError> {
    let value = value.trim();

    let date = NaiveDate::parse_from_str(value, INPUT_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| NaiveDate::parse_from_str(value, "%m/%d/%Y").ok())
        .ok_or_else(|| DateError::Unparseable(value.to_string()))?;

    Ok(date.format(DISPLAY_FORMAT).to_string())
}

/// Strictly parse a display date into a calendar date.
pub fn parse_display_date(date: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(date, DISPLAY_FORMAT)
        .map_err(|_| DateError::Malformed(date.to_string()))
}

