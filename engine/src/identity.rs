//! Identity keys for matching local quotes to remote quotes.
//!
//! The source data carries ids only sometimes, so identity is derived by a
//! policy rather than hardcoded. The derived key is what the reconciler
//! indexes both snapshots by.

use crate::Quote;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The value used to match a local quote to a remote quote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityKey {
    /// Matched by stable id
    Id(String),
    /// Matched by exact text
    Text(String),
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityKey::Id(id) => write!(f, "id:{}", id),
            IdentityKey::Text(text) => write!(f, "text:{}", text),
        }
    }
}

/// Policy for deriving a quote's identity key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyPolicy {
    /// Match by id when present, fall back to exact text (default)
    #[default]
    IdOrText,
    /// Always match by exact text
    TextOnly,
}

impl KeyPolicy {
    /// Derive the identity key for a quote under this policy.
    pub fn key_for(&self, quote: &Quote) -> IdentityKey {
        match self {
            KeyPolicy::IdOrText => match &quote.id {
                Some(id) => IdentityKey::Id(id.clone()),
                None => IdentityKey::Text(quote.text.clone()),
            },
            KeyPolicy::TextOnly => IdentityKey::Text(quote.text.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_or_text_prefers_id() {
        let quote = Quote::with_id("q-1", "Stay hungry.", "work");
        assert_eq!(
            KeyPolicy::IdOrText.key_for(&quote),
            IdentityKey::Id("q-1".into())
        );
    }

    #[test]
    fn id_or_text_falls_back_to_text() {
        let quote = Quote::new("Stay hungry.", "work");
        assert_eq!(
            KeyPolicy::IdOrText.key_for(&quote),
            IdentityKey::Text("Stay hungry.".into())
        );
    }

    #[test]
    fn text_only_ignores_id() {
        let quote = Quote::with_id("q-1", "Stay hungry.", "work");
        assert_eq!(
            KeyPolicy::TextOnly.key_for(&quote),
            IdentityKey::Text("Stay hungry.".into())
        );
    }

    #[test]
    fn id_key_and_text_key_are_distinct() {
        // A record with id "x" must never collide with a record whose text is "x".
        assert_ne!(IdentityKey::Id("x".into()), IdentityKey::Text("x".into()));
    }

    #[test]
    fn display_format() {
        assert_eq!(IdentityKey::Id("q-1".into()).to_string(), "id:q-1");
        assert_eq!(IdentityKey::Text("hi".into()).to_string(), "text:hi");
    }

    #[test]
    fn serialization_roundtrip() {
        let key = IdentityKey::Id("q-1".into());
        let json = serde_json::to_string(&key).unwrap();
        let parsed: IdentityKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, parsed);
    }
}
