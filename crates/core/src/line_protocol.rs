//! InfluxDB line protocol.
//!
//! ```text
//! measurement,tag1=v1,tag2=v2 field1=1.5,field2=3i 1686787200000000000
//! ```
//!
//! Tag values have their spaces escaped with a single backslash and nothing
//! else altered. Floats use Rust's default `f64` formatting (shortest
//! representation that round-trips, never exponent notation); integers
//! carry the `i` suffix.

use std::borrow::Cow;
use std::fmt;

/// A field value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue {
    Float(f64),
    Integer(i64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(value) => write!(f, "{}", value),
            Self::Integer(value) => write!(f, "{}i", value),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// Flags are written as 0/1 integers.
impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Integer(i64::from(value))
    }
}

/// One line-protocol record.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    measurement: String,
    tags: Vec<(&'static str, String)>,
    fields: Vec<(&'static str, FieldValue)>,
    timestamp: Option<i64>,
}

impl Point {
    pub fn new(measurement: impl Into<String>) -> Self {
        Self {
            measurement: measurement.into(),
            tags: Vec::new(),
            fields: Vec::new(),
            timestamp: None,
        }
    }

    /// Add a tag. Empty values are dropped, line protocol has no empty tags.
    pub fn tag(mut self, key: &'static str, value: &str) -> Self {
        if !value.is_empty() {
            self.tags.push((key, escape_tag_value(value).into_owned()));
        }
        self
    }

    pub fn field(mut self, key: &'static str, value: impl Into<FieldValue>) -> Self {
        self.fields.push((key, value.into()));
        self
    }

    /// Record timestamp in nanoseconds; `None` lets the server stamp it.
    pub fn timestamp(mut self, nanos: Option<i64>) -> Self {
        self.timestamp = nanos;
        self
    }

    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", escape_tag_value(&self.measurement))?;
        for (key, value) in &self.tags {
            write!(f, ",{}={}", key, value)?;
        }
        for (i, (key, value)) in self.fields.iter().enumerate() {
            let separator = if i == 0 { ' ' } else { ',' };
            write!(f, "{}{}={}", separator, key, value)?;
        }
        if let Some(timestamp) = self.timestamp {
            write!(f, " {}", timestamp)?;
        }
        Ok(())
    }
}

/// Escape a tag value: every space gets one backslash in front of it.
pub fn escape_tag_value(value: &str) -> Cow<'_, str> {
    if value.contains(' ') {
        Cow::Owned(value.replace(' ', "\\ "))
    } else {
        Cow::Borrowed(value)
    }
}
