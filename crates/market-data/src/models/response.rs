use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::coin::Coin;
use super::nullable::or_default;

/// Body of `GET /cryptocurrency/quotes/latest`.
///
/// `data` is keyed by the provider's numeric id. It is absent when the
/// request failed, in which case `status.error_code` explains why.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuotesLatest {
    #[serde(default, deserialize_with = "or_default")]
    pub data: BTreeMap<u64, Coin>,

    pub status: Status,
}

/// Status envelope attached to every provider response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    /// Zero on success
    #[serde(default, deserialize_with = "or_default")]
    pub error_code: i64,

    #[serde(default)]
    pub error_message: Option<String>,

    /// Server-side processing time in milliseconds
    #[serde(default, deserialize_with = "or_default")]
    pub elapsed: i64,

    /// API credits consumed by the call
    #[serde(default, deserialize_with = "or_default")]
    pub credit_count: i64,

    #[serde(default)]
    pub notice: Option<String>,
}

impl Status {
    pub fn is_ok(&self) -> bool {
        self.error_code == 0
    }
}
