//! Keyboard-side suggestion session.
//!
//! `KeyboardSession` tracks the word being typed from the text before the
//! cursor, asks the provider for completions after every edit, turns an
//! accepted suggestion into a text edit, and swaps vocabularies when the user
//! cycles languages.

mod languages;
mod types;
mod word;

#[cfg(test)]
mod tests;

use kb_core::settings::settings;
use kb_core::suggest::{SuggestionProvider, SuggestionTrie};
use tracing::{debug, debug_span};

pub use languages::{Language, LanguageRing};
pub use types::{SessionConfig, SessionError, SuggestionUpdate, TextEdit};
pub use word::{grapheme_len, last_word};

pub struct KeyboardSession {
    provider: Box<dyn SuggestionProvider>,
    languages: LanguageRing,
    config: SessionConfig,

    word: Option<String>,
    suggestions: Vec<String>,
}

impl KeyboardSession {
    /// Session over a `SuggestionTrie`, configured from the global settings.
    /// The first language (if any) is loaded immediately.
    pub fn new(languages: Vec<Language>) -> Result<Self, SessionError> {
        let s = settings();
        Self::with_provider(
            Box::new(SuggestionTrie::from_settings(s)),
            languages,
            SessionConfig::from_settings(s),
        )
    }

    pub fn with_provider(
        provider: Box<dyn SuggestionProvider>,
        languages: Vec<Language>,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        let mut session = Self {
            provider,
            languages: LanguageRing::new(languages),
            config,
            word: None,
            suggestions: Vec::new(),
        };
        session.reload()?;
        Ok(session)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn current_language(&self) -> Option<&Language> {
        self.languages.current()
    }

    pub fn language_names(&self) -> Vec<&str> {
        self.languages.names().collect()
    }

    /// Word in progress as of the last `refresh`.
    pub fn current_word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Suggestions as of the last `refresh`.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Advance to the next language (wrapping) and reload the provider.
    /// Returns the name of the now-current language.
    pub fn switch_language(&mut self) -> Result<Option<&str>, SessionError> {
        self.languages.advance();
        self.reload()?;
        Ok(self.languages.current().map(|l| l.name.as_str()))
    }

    /// Step back to the previous language (wrapping) and reload the provider.
    pub fn previous_language(&mut self) -> Result<Option<&str>, SessionError> {
        self.languages.retreat();
        self.reload()?;
        Ok(self.languages.current().map(|l| l.name.as_str()))
    }

    pub fn select_language(&mut self, name: &str) -> Result<(), SessionError> {
        if !self.languages.select(name) {
            return Err(SessionError::UnknownLanguage(name.to_string()));
        }
        self.reload()
    }

    /// Recompute suggestions for the text before the cursor. Called after
    /// every insertion or deletion.
    pub fn refresh(&mut self, context_before: &str) -> SuggestionUpdate {
        let word = last_word(context_before);
        self.suggestions = match word {
            Some(w) if grapheme_len(w) >= self.config.min_prefix_chars => {
                self.provider.suggestions_for_prefix(w)
            }
            _ => Vec::new(),
        };
        self.word = word.map(str::to_string);
        debug!(
            word = self.word.as_deref(),
            suggestion_count = self.suggestions.len()
        );
        SuggestionUpdate {
            word: self.word.clone(),
            suggestions: self.suggestions.clone(),
        }
    }

    /// Replace the word before the cursor with `suggestion`.
    /// `delete_backward` counts grapheme clusters, one per host backspace.
    ///
    /// Returns `None` when no word is in progress. Clears the current
    /// suggestions either way.
    pub fn accept(&mut self, context_before: &str, suggestion: &str) -> Option<TextEdit> {
        self.word = None;
        self.suggestions.clear();

        let word = last_word(context_before)?;
        let mut insert = String::with_capacity(suggestion.len() + 1);
        insert.push_str(suggestion);
        if self.config.append_space_on_accept {
            insert.push(' ');
        }
        let edit = TextEdit {
            delete_backward: grapheme_len(word),
            insert,
        };
        debug!(word, suggestion, delete = edit.delete_backward, "accepted");
        Some(edit)
    }

    /// Clear the provider and load the current language's vocabulary.
    /// On failure the provider is left empty.
    fn reload(&mut self) -> Result<(), SessionError> {
        let _span = debug_span!("reload_vocabulary").entered();
        self.word = None;
        self.suggestions.clear();
        self.provider.clear();

        let Some(language) = self.languages.current() else {
            debug!("no languages configured");
            return Ok(());
        };
        debug!(
            language = language.name.as_str(),
            terms = language.vocabulary.len()
        );
        if let Err(e) = self.provider.load_weighted_terms(&language.vocabulary) {
            self.provider.clear();
            return Err(e.into());
        }
        Ok(())
    }
}
