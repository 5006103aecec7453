use serde::{Deserialize, Serialize};

use super::nullable::or_default;

/// Blockchain a token is issued on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    #[serde(default, deserialize_with = "or_default")]
    pub id: u64,

    #[serde(default, deserialize_with = "or_default")]
    pub name: String,

    #[serde(default, deserialize_with = "or_default")]
    pub symbol: String,

    #[serde(default, deserialize_with = "or_default")]
    pub slug: String,

    /// Contract address of the token on the platform chain
    #[serde(default, deserialize_with = "or_default")]
    pub token_address: String,
}
