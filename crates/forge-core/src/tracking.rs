//! Campaign attribution keys.
//!
//! The site recognises exactly five UTM keys. Anything else on the incoming
//! URL is ignored by capture and never merged into outbound links.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, ForgeResult};

/// Query parameter naming the card an outbound click came from.
pub const REF_CARD_PARAM: &str = "ref_card";

/// One of the recognised campaign tracking keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrackingKey {
    #[serde(rename = "utm_source")]
    Source,
    #[serde(rename = "utm_medium")]
    Medium,
    #[serde(rename = "utm_campaign")]
    Campaign,
    #[serde(rename = "utm_content")]
    Content,
    #[serde(rename = "utm_term")]
    Term,
}

impl TrackingKey {
    /// All recognised keys, in capture and merge order.
    pub const ALL: [TrackingKey; 5] = [
        TrackingKey::Source,
        TrackingKey::Medium,
        TrackingKey::Campaign,
        TrackingKey::Content,
        TrackingKey::Term,
    ];

    /// The query-string / storage key.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingKey::Source => "utm_source",
            TrackingKey::Medium => "utm_medium",
            TrackingKey::Campaign => "utm_campaign",
            TrackingKey::Content => "utm_content",
            TrackingKey::Term => "utm_term",
        }
    }
}

impl fmt::Display for TrackingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackingKey {
    type Err = ForgeError;

    fn from_str(s: &str) -> ForgeResult<Self> {
        TrackingKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ForgeError::InvalidParam(format!("unknown tracking key '{}'", s)))
    }
}

/// A tracking key paired with its captured value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedParam {
    pub key: TrackingKey,
    pub value: String,
}

impl TrackedParam {
    pub fn new(key: TrackingKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

impl fmt::Display for TrackedParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Parses `key=value`, as accepted on the command line.
impl FromStr for TrackedParam {
    type Err = ForgeError;

    fn from_str(s: &str) -> ForgeResult<Self> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| ForgeError::InvalidParam(format!("expected KEY=VALUE, got '{}'", s)))?;
        if value.is_empty() {
            return Err(ForgeError::InvalidParam(format!("empty value for '{}'", key)));
        }
        Ok(TrackedParam::new(key.parse()?, value))
    }
}
