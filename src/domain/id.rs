//! Domain identifier types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// On-chain market identifier - newtype for type safety.
///
/// Markets are keyed by a uint256 on chain; the decimal string form is kept
/// verbatim so no precision is lost between listener and submitter.
/// Relays that emit the id as a JSON integer are accepted up to `u64::MAX`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MarketId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMarketId {
    Text(String),
    Number(u64),
}

impl<'de> Deserialize<'de> for MarketId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawMarketId::deserialize(deserializer)? {
            RawMarketId::Text(id) => Self(id),
            RawMarketId::Number(id) => Self(id.to_string()),
        })
    }
}

impl MarketId {
    /// Create a new `MarketId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the market ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MarketId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for MarketId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_id_display_and_accessors() {
        let id = MarketId::new("42");
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
        assert_eq!(MarketId::from("42"), id);
    }

    #[test]
    fn market_id_serializes_as_plain_string() {
        let id = MarketId::new("115792089237316195423570985008687907853");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""115792089237316195423570985008687907853""#);
    }

    #[test]
    fn market_id_accepts_string_or_integer() {
        let text: MarketId = serde_json::from_str(r#""12""#).unwrap();
        let number: MarketId = serde_json::from_str("12").unwrap();
        assert_eq!(text, number);
        assert_eq!(number.as_str(), "12");
        assert!(serde_json::from_str::<MarketId>("-1").is_err());
    }
}
