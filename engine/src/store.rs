//! Store - owner of the authoritative quote list.
//!
//! The Store holds the committed in-memory list and persists it through an
//! injected key-value collaborator after every mutation. All reads are
//! served from memory; the collaborator is only consulted at load time and
//! for the session-scoped keys.

use crate::error::{Error, Result};
use crate::{snapshot, KeyPolicy, Quote, Snapshot};
use std::collections::{BTreeSet, HashMap};

/// Key under which the quote list is persisted.
pub const QUOTES_KEY: &str = "quotes";
/// Key under which the last-selected category filter is persisted.
pub const SELECTED_CATEGORY_KEY: &str = "selected_category";
/// Key under which the last-viewed quote is persisted.
pub const LAST_VIEWED_KEY: &str = "last_viewed";

/// External key-value persistence collaborator.
///
/// Writes are synchronous and atomic from the store's perspective: after
/// `set` returns, the value is durable as far as the collaborator can make
/// it. A collaborator that cannot persist (or does not want to) may simply
/// keep values in memory.
pub trait Storage {
    /// Read a value, if one has been stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Store a value under `key`, replacing any previous one.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory storage for hosts that do not persist, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// The store owning the committed quote list.
///
/// Invariant: no two quotes in the committed list share the same identity
/// key under the store's policy. [`Store::add`] enforces this;
/// [`Store::replace_all`] relies on the caller (normally a merge result,
/// which is identity-unique by construction).
#[derive(Debug)]
pub struct Store<S: Storage> {
    storage: S,
    policy: KeyPolicy,
    quotes: Snapshot,
}

impl<S: Storage> Store<S> {
    /// Create an empty store. Nothing is persisted until the first mutation.
    pub fn new(storage: S, policy: KeyPolicy) -> Self {
        Self {
            storage,
            policy,
            quotes: Vec::new(),
        }
    }

    /// Load the persisted quote list.
    ///
    /// Missing or corrupt persisted state falls back to the default
    /// snapshot. Never fails.
    pub fn load(storage: S, policy: KeyPolicy) -> Self {
        let quotes = storage
            .get(QUOTES_KEY)
            .and_then(|json| snapshot::from_json(&json).ok())
            .unwrap_or_else(snapshot::default_quotes);

        Self {
            storage,
            policy,
            quotes,
        }
    }

    /// The committed quote list, in insertion order.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Count of committed quotes.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Check whether the store holds no quotes.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// The identity policy this store enforces uniqueness under.
    pub fn policy(&self) -> KeyPolicy {
        self.policy
    }

    /// Validate and append a quote, then persist.
    ///
    /// Rejects empty text or category, and quotes whose identity key is
    /// already committed. On error the list is unchanged and nothing is
    /// written.
    pub fn add(&mut self, quote: Quote) -> Result<()> {
        quote.validate()?;

        let key = self.policy.key_for(&quote);
        if self.quotes.iter().any(|q| self.policy.key_for(q) == key) {
            return Err(Error::DuplicateQuote(key));
        }

        self.quotes.push(quote);
        self.persist();
        Ok(())
    }

    /// Swap the whole committed list and persist it.
    ///
    /// The caller supplies an identity-unique snapshot, normally the
    /// `merged` output of [`crate::Reconciler::reconcile`].
    pub fn replace_all(&mut self, snapshot: Snapshot) {
        self.quotes = snapshot;
        self.persist();
    }

    /// Unique categories present, order-insensitive.
    pub fn categories(&self) -> BTreeSet<String> {
        self.quotes.iter().map(|q| q.category.clone()).collect()
    }

    /// Quotes matching the category filter. `None` means all quotes.
    pub fn filtered(&self, category: Option<&str>) -> Vec<&Quote> {
        match category {
            Some(cat) => self.quotes.iter().filter(|q| q.category == cat).collect(),
            None => self.quotes.iter().collect(),
        }
    }

    /// The persisted last-selected category filter, if any.
    pub fn selected_category(&self) -> Option<String> {
        self.storage.get(SELECTED_CATEGORY_KEY)
    }

    /// Persist the last-selected category filter.
    pub fn set_selected_category(&mut self, category: &str) {
        self.storage.set(SELECTED_CATEGORY_KEY, category);
    }

    /// The persisted last-viewed quote, if any. Corrupt entries read as none.
    pub fn last_viewed(&self) -> Option<Quote> {
        self.storage
            .get(LAST_VIEWED_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
    }

    /// Persist the last-viewed quote.
    pub fn set_last_viewed(&mut self, quote: &Quote) {
        if let Ok(json) = serde_json::to_string(quote) {
            self.storage.set(LAST_VIEWED_KEY, &json);
        }
    }

    /// Serialize the committed list, for export.
    pub fn to_json(&self) -> Result<String> {
        snapshot::to_json(&self.quotes)
    }

    /// Serialize the committed list pretty-printed, for file export.
    pub fn to_json_pretty(&self) -> Result<String> {
        snapshot::to_json_pretty(&self.quotes)
    }

    fn persist(&mut self) {
        // Plain string records always serialize.
        if let Ok(json) = snapshot::to_json(&self.quotes) {
            self.storage.set(QUOTES_KEY, &json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> Store<MemoryStorage> {
        Store::new(MemoryStorage::new(), KeyPolicy::IdOrText)
    }

    #[test]
    fn load_empty_storage_yields_defaults() {
        let store = Store::load(MemoryStorage::new(), KeyPolicy::IdOrText);
        assert_eq!(store.quotes(), snapshot::default_quotes().as_slice());
    }

    #[test]
    fn load_corrupt_state_yields_defaults() {
        let mut storage = MemoryStorage::new();
        storage.set(QUOTES_KEY, "{definitely not a snapshot");

        let store = Store::load(storage, KeyPolicy::IdOrText);
        assert_eq!(store.quotes(), snapshot::default_quotes().as_slice());
    }

    #[test]
    fn load_reads_persisted_list() {
        let mut storage = MemoryStorage::new();
        let quotes = vec![Quote::with_id("q-1", "Stay hungry.", "work")];
        storage.set(QUOTES_KEY, &snapshot::to_json(&quotes).unwrap());

        let store = Store::load(storage, KeyPolicy::IdOrText);
        assert_eq!(store.quotes(), quotes.as_slice());
    }

    #[test]
    fn add_appends_and_persists() {
        let mut store = test_store();
        store
            .add(Quote::with_id("q-1", "Stay hungry.", "work"))
            .unwrap();
        assert_eq!(store.len(), 1);

        // Persisted state survives a reload through the same storage
        let Store { storage, .. } = store;
        let reloaded = Store::load(storage, KeyPolicy::IdOrText);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.quotes()[0].text, "Stay hungry.");
    }

    #[test]
    fn add_rejects_empty_text() {
        let mut store = test_store();
        let result = store.add(Quote::new("   ", "work"));
        assert_eq!(result, Err(Error::EmptyText));
        assert!(store.is_empty());
    }

    #[test]
    fn add_rejects_empty_category() {
        let mut store = test_store();
        let result = store.add(Quote::new("Stay hungry.", ""));
        assert_eq!(result, Err(Error::EmptyCategory));
        assert!(store.is_empty());
    }

    #[test]
    fn add_rejects_duplicate_identity() {
        let mut store = test_store();
        store
            .add(Quote::with_id("q-1", "Stay hungry.", "work"))
            .unwrap();

        // Same id, different content
        let result = store.add(Quote::with_id("q-1", "Less is more.", "design"));
        assert!(matches!(result, Err(Error::DuplicateQuote(_))));
        assert_eq!(store.len(), 1);

        // No id, same text as an id-less committed quote
        store.add(Quote::new("Less is more.", "design")).unwrap();
        let result = store.add(Quote::new("Less is more.", "other"));
        assert!(matches!(result, Err(Error::DuplicateQuote(_))));
    }

    #[test]
    fn replace_all_swaps_and_persists() {
        let mut store = test_store();
        store.add(Quote::new("Old.", "misc")).unwrap();

        let replacement = vec![
            Quote::with_id("q-1", "Stay hungry.", "work"),
            Quote::new("Less is more.", "design"),
        ];
        store.replace_all(replacement.clone());
        assert_eq!(store.quotes(), replacement.as_slice());

        let Store { storage, .. } = store;
        let reloaded = Store::load(storage, KeyPolicy::IdOrText);
        assert_eq!(reloaded.quotes(), replacement.as_slice());
    }

    #[test]
    fn categories_are_unique_and_sorted() {
        let mut store = test_store();
        store.add(Quote::new("a", "work")).unwrap();
        store.add(Quote::new("b", "design")).unwrap();
        store.add(Quote::new("c", "work")).unwrap();

        let categories: Vec<_> = store.categories().into_iter().collect();
        assert_eq!(categories, vec!["design".to_string(), "work".to_string()]);
    }

    #[test]
    fn filtered_by_category() {
        let mut store = test_store();
        store.add(Quote::new("a", "work")).unwrap();
        store.add(Quote::new("b", "design")).unwrap();
        store.add(Quote::new("c", "work")).unwrap();

        assert_eq!(store.filtered(None).len(), 3);
        assert_eq!(store.filtered(Some("work")).len(), 2);
        assert_eq!(store.filtered(Some("nope")).len(), 0);
    }

    #[test]
    fn selected_category_roundtrip() {
        let mut store = test_store();
        assert_eq!(store.selected_category(), None);

        store.set_selected_category("work");
        assert_eq!(store.selected_category().as_deref(), Some("work"));
    }

    #[test]
    fn last_viewed_roundtrip() {
        let mut store = test_store();
        assert_eq!(store.last_viewed(), None);

        let quote = Quote::with_id("q-1", "Stay hungry.", "work");
        store.set_last_viewed(&quote);
        assert_eq!(store.last_viewed(), Some(quote));
    }

    #[test]
    fn export_json_parses_back() {
        let mut store = test_store();
        store
            .add(Quote::with_id("q-1", "Stay hungry.", "work"))
            .unwrap();

        let json = store.to_json_pretty().unwrap();
        let parsed = snapshot::from_json(&json).unwrap();
        assert_eq!(parsed, store.quotes());
    }
}
