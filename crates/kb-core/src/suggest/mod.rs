//! Prefix autosuggest over a weighted vocabulary.
//!
//! `TermStore` is a ternary search tree holding every term with its weight.
//! `SuggestionTrie` wraps it behind the `SuggestionProvider` trait that the
//! keyboard session and the Swift bindings talk to; `ranker` turns raw
//! completions into the display order.

pub mod ranker;
mod store;

pub use store::{NodeRef, TermStore};

use std::collections::TryReserveError;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::settings::Settings;

/// One vocabulary entry. Higher weight means higher priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightedTerm {
    pub term: String,
    pub weight: u32,
}

impl WeightedTerm {
    pub fn new(term: impl Into<String>, weight: u32) -> Self {
        Self {
            term: term.into(),
            weight,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("term store allocation failed: {0}")]
    CapacityExhausted(#[from] TryReserveError),

    #[error("term store node limit reached ({0} nodes)")]
    NodeLimit(usize),
}

/// Loads weighted terms and answers prefix queries.
pub trait SuggestionProvider: Send {
    /// Terms beginning with `prefix`, highest weight first.
    /// Empty prefix or no match yields an empty vector.
    fn suggestions_for_prefix(&self, prefix: &str) -> Vec<String>;

    /// Insert `terms` in order. Existing terms keep their place and take the
    /// new weight; nothing is cleared first.
    fn load_weighted_terms(&mut self, terms: &[WeightedTerm]) -> Result<(), StoreError>;

    /// Drop every loaded term.
    fn clear(&mut self);
}

/// `SuggestionProvider` backed by a [`TermStore`].
#[derive(Debug, Default)]
pub struct SuggestionTrie {
    store: TermStore,
    max_results: Option<usize>,
}

impl SuggestionTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider returning at most `max_results` suggestions per query.
    pub fn with_max_results(max_results: Option<usize>) -> Self {
        Self {
            store: TermStore::new(),
            max_results,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_max_results(settings.suggestions.max_results)
    }

    pub fn store(&self) -> &TermStore {
        &self.store
    }

    pub fn insert(&mut self, term: &str, weight: u32) -> Result<(), StoreError> {
        self.store.insert(term, weight)
    }
}

impl SuggestionProvider for SuggestionTrie {
    fn suggestions_for_prefix(&self, prefix: &str) -> Vec<String> {
        let _span = debug_span!("suggestions_for_prefix", prefix).entered();
        let matches = self.store.completions(prefix);
        let match_count = matches.len();
        let ranked = match self.max_results {
            Some(limit) => ranker::rank_top(matches, limit),
            None => ranker::rank(matches),
        };
        debug!(match_count, returned = ranked.len());
        ranked
    }

    fn load_weighted_terms(&mut self, terms: &[WeightedTerm]) -> Result<(), StoreError> {
        let _span = debug_span!("load_weighted_terms", count = terms.len()).entered();
        for wt in terms {
            self.store.insert(&wt.term, wt.weight)?;
        }
        debug!(
            term_count = self.store.len(),
            node_count = self.store.node_count()
        );
        Ok(())
    }

    fn clear(&mut self) {
        debug!(term_count = self.store.len(), "clearing term store");
        self.store.clear();
    }
}
