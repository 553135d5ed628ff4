//! PRD identity: `PRD-<unix millis>-<4-digit suffix>`

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Prefix shared by every PRD identifier
pub const PREFIX: &str = "PRD";

/// Inclusive range of the random suffix
const SUFFIX_MIN: u16 = 1000;
const SUFFIX_MAX: u16 = 9999;

/// A PRD identifier
///
/// Stored in its rendered form so the manager index can be queried with a
/// plain `&str`. Uniqueness is probabilistic on its own; `PrdManager` redraws
/// on collision within a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrdId(String);

impl PrdId {
    /// Generate an id from the current time and a random suffix
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis();
        let suffix = rand::rng().random_range(SUFFIX_MIN..=SUFFIX_MAX);
        Self::from_parts(millis, suffix)
    }

    /// Build an id from its components
    pub fn from_parts(millis: i64, suffix: u16) -> Self {
        Self(format!("{}-{}-{:04}", PREFIX, millis, suffix))
    }

    /// Parse an id from a string
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        s.parse()
    }

    /// Timestamp component (unix milliseconds)
    pub fn millis(&self) -> i64 {
        self.parts().0
    }

    /// Random suffix component
    pub fn suffix(&self) -> u16 {
        self.parts().1
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn parts(&self) -> (i64, u16) {
        // Validated at construction
        let mut it = self.0.splitn(3, '-').skip(1);
        let millis = it.next().and_then(|m| m.parse().ok()).unwrap_or_default();
        let suffix = it.next().and_then(|s| s.parse().ok()).unwrap_or_default();
        (millis, suffix)
    }
}

impl fmt::Display for PrdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for PrdId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for PrdId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '-');
        let prefix = parts.next().unwrap_or_default();
        if !prefix.eq_ignore_ascii_case(PREFIX) {
            return Err(IdParseError::InvalidPrefix(s.to_string()));
        }

        let (millis_str, suffix_str) = match (parts.next(), parts.next()) {
            (Some(m), Some(r)) => (m, r),
            _ => return Err(IdParseError::MissingDelimiter(s.to_string())),
        };

        let millis: i64 = millis_str
            .parse()
            .ok()
            .filter(|m: &i64| *m >= 0 && millis_str.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| IdParseError::InvalidTimestamp(millis_str.to_string()))?;

        let suffix: u16 = suffix_str
            .parse()
            .ok()
            .filter(|r| suffix_str.len() == 4 && (SUFFIX_MIN..=SUFFIX_MAX).contains(r))
            .ok_or_else(|| IdParseError::InvalidSuffix(suffix_str.to_string()))?;

        Ok(Self::from_parts(millis, suffix))
    }
}

impl Serialize for PrdId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PrdId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing PRD ids
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdParseError {
    #[error("invalid PRD id prefix in '{0}' (expected PRD-<millis>-<NNNN>)")]
    InvalidPrefix(String),

    #[error("missing '-' delimiter in PRD id: '{0}'")]
    MissingDelimiter(String),

    #[error("invalid timestamp component '{0}'")]
    InvalidTimestamp(String),

    #[error("invalid suffix '{0}' (expected 4 digits, 1000-9999)")]
    InvalidSuffix(String),
}
