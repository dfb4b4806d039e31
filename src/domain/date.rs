use crate::utils::error::{FxError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt;

const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// A calendar date in one of the shapes callers hand us.
///
/// Every variant normalizes to the canonical `YYYY-MM-DD` string used in
/// historical URLs. The compact `YYMMDD` form always lands in 2000-2099.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSpec {
    Date(NaiveDate),
    /// Only the calendar part is used; the time of day is dropped.
    DateTime(NaiveDateTime),
    Iso(String),
    Ymd(i32, u32, u32),
    Compact(String),
}

impl DateSpec {
    pub fn compact(value: impl Into<String>) -> Self {
        DateSpec::Compact(value.into())
    }

    /// Resolves to a validated calendar date.
    pub fn to_naive_date(&self) -> Result<NaiveDate> {
        match self {
            DateSpec::Date(date) => Ok(*date),
            DateSpec::DateTime(dt) => Ok(dt.date()),
            DateSpec::Iso(text) => parse_iso(text),
            DateSpec::Ymd(year, month, day) => NaiveDate::from_ymd_opt(*year, *month, *day)
                .ok_or_else(|| {
                    FxError::invalid_date(
                        format!("({}, {}, {})", year, month, day),
                        "not a valid calendar date",
                    )
                }),
            DateSpec::Compact(text) => parse_compact(text),
        }
    }

    /// Canonical `YYYY-MM-DD` form.
    pub fn canonical(&self) -> Result<String> {
        let date = self.to_naive_date()?;
        let formatted = date.format(CANONICAL_FORMAT).to_string();
        if formatted.len() != 10 {
            return Err(FxError::invalid_date(
                formatted,
                "year must have exactly four digits",
            ));
        }
        Ok(formatted)
    }
}

fn parse_iso(text: &str) -> Result<NaiveDate> {
    if text.len() != 10 {
        return Err(FxError::invalid_date(text, "expected YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(text, CANONICAL_FORMAT)
        .map_err(|e| FxError::invalid_date(text, e.to_string()))
}

fn parse_compact(text: &str) -> Result<NaiveDate> {
    if text.len() != 6 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FxError::invalid_date(text, "expected exactly 6 digits YYMMDD"));
    }

    // Slicing is safe: all six bytes are ASCII digits.
    let expanded = format!("20{}-{}-{}", &text[..2], &text[2..4], &text[4..]);
    NaiveDate::parse_from_str(&expanded, CANONICAL_FORMAT)
        .map_err(|e| FxError::invalid_date(text, e.to_string()))
}

impl fmt::Display for DateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateSpec::Date(date) => write!(f, "{}", date),
            DateSpec::DateTime(dt) => write!(f, "{}", dt),
            DateSpec::Iso(text) | DateSpec::Compact(text) => f.write_str(text),
            DateSpec::Ymd(year, month, day) => write!(f, "({}, {}, {})", year, month, day),
        }
    }
}

impl From<NaiveDate> for DateSpec {
    fn from(date: NaiveDate) -> Self {
        DateSpec::Date(date)
    }
}

impl From<NaiveDateTime> for DateSpec {
    fn from(dt: NaiveDateTime) -> Self {
        DateSpec::DateTime(dt)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateSpec {
    fn from(dt: DateTime<Tz>) -> Self {
        // Wall-clock date in the value's own zone, as its ISO string shows.
        DateSpec::DateTime(dt.naive_local())
    }
}

impl From<(i32, u32, u32)> for DateSpec {
    fn from((year, month, day): (i32, u32, u32)) -> Self {
        DateSpec::Ymd(year, month, day)
    }
}

/// Text is compact when it is six digits, ISO otherwise.
impl From<&str> for DateSpec {
    fn from(text: &str) -> Self {
        DateSpec::from(text.to_string())
    }
}

impl From<String> for DateSpec {
    fn from(text: String) -> Self {
        if text.len() == 6 && text.bytes().all(|b| b.is_ascii_digit()) {
            DateSpec::Compact(text)
        } else {
            DateSpec::Iso(text)
        }
    }
}
