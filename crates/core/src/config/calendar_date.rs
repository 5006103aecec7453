//! Serde adapter for investment dates.
//!
//! Dates are written as `YYYY-MM-DD`. Older configuration files stored full
//! RFC 3339 timestamps; those are still read and reduced to their UTC
//! calendar date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

use crate::constants::INVESTMENT_DATE_FORMAT;

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format(INVESTMENT_DATE_FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(de::Error::custom)
}

/// Parses `YYYY-MM-DD`, falling back to an RFC 3339 timestamp.
pub fn parse(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, INVESTMENT_DATE_FORMAT) {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|instant| instant.with_timezone(&Utc).date_naive())
        .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD", raw))
}
