use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use kb_core::settings::settings;
use kb_core::suggest::{SuggestionProvider, SuggestionTrie, WeightedTerm};

use super::{KbError, KbWeightedTerm};

/// A standalone vocabulary store. The mutex serialises host threads; the
/// store itself has no internal locking.
#[derive(uniffi::Object)]
pub struct KbSuggestionProvider {
    inner: Mutex<SuggestionTrie>,
}

impl KbSuggestionProvider {
    fn trie(&self) -> MutexGuard<'_, SuggestionTrie> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[uniffi::export]
impl KbSuggestionProvider {
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: Mutex::new(SuggestionTrie::from_settings(settings())),
        })
    }

    pub fn load(&self, terms: Vec<KbWeightedTerm>) -> Result<(), KbError> {
        let terms: Vec<WeightedTerm> = terms.into_iter().map(Into::into).collect();
        self.trie().load_weighted_terms(&terms)?;
        Ok(())
    }

    pub fn suggestions(&self, prefix: String) -> Vec<String> {
        self.trie().suggestions_for_prefix(&prefix)
    }

    pub fn clear(&self) {
        self.trie().clear();
    }

    pub fn term_count(&self) -> u64 {
        self.trie().store().len() as u64
    }
}
