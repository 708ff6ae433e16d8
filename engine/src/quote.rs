//! The quote record type.

use crate::error::{Error, Result};
use crate::QuoteId;
use serde::{Deserialize, Serialize};

/// A quote record being managed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Stable identifier, when one has been assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuoteId>,
    /// The quote text
    pub text: String,
    /// Category the quote belongs to
    pub category: String,
}

impl Quote {
    /// Create a quote without an id. It will be matched by exact text
    /// during reconciliation.
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            category: category.into(),
        }
    }

    /// Create a quote with a stable id.
    pub fn with_id(
        id: impl Into<QuoteId>,
        text: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            text: text.into(),
            category: category.into(),
        }
    }

    /// Check that `text` and `category` are non-empty after trimming.
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(Error::EmptyText);
        }
        if self.category.trim().is_empty() {
            return Err(Error::EmptyCategory);
        }
        Ok(())
    }

    /// Content equality used for conflict detection. Ignores `id`: two
    /// versions of the same record conflict when text or category differ.
    pub fn content_eq(&self, other: &Quote) -> bool {
        self.text == other.text && self.category == other.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_quote() {
        let quote = Quote::new("Stay hungry.", "work");
        assert_eq!(quote.id, None);
        assert_eq!(quote.text, "Stay hungry.");
        assert_eq!(quote.category, "work");
        assert!(quote.validate().is_ok());
    }

    #[test]
    fn create_quote_with_id() {
        let quote = Quote::with_id("q-1", "Stay hungry.", "work");
        assert_eq!(quote.id.as_deref(), Some("q-1"));
    }

    #[test]
    fn validate_rejects_empty_text() {
        let quote = Quote::new("", "work");
        assert_eq!(quote.validate(), Err(Error::EmptyText));

        let quote = Quote::new("   \t", "work");
        assert_eq!(quote.validate(), Err(Error::EmptyText));
    }

    #[test]
    fn validate_rejects_empty_category() {
        let quote = Quote::new("Stay hungry.", "  ");
        assert_eq!(quote.validate(), Err(Error::EmptyCategory));
    }

    #[test]
    fn content_eq_ignores_id() {
        let a = Quote::with_id("q-1", "Stay hungry.", "work");
        let b = Quote::with_id("q-2", "Stay hungry.", "work");
        assert!(a.content_eq(&b));

        let c = Quote::with_id("q-1", "Stay hungry.", "inspiration");
        assert!(!a.content_eq(&c));
    }

    #[test]
    fn serialization_roundtrip() {
        let quote = Quote::with_id("q-1", "Stay hungry.", "work");
        let json = serde_json::to_string(&quote).unwrap();
        let parsed: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(quote, parsed);
    }

    #[test]
    fn serialization_omits_missing_id() {
        let quote = Quote::new("Stay hungry.", "work");
        let json = serde_json::to_string(&quote).unwrap();
        assert!(!json.contains("\"id\""));

        // And a bare object without an id parses back
        let parsed: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, None);
    }
}
