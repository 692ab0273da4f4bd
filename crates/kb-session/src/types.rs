use kb_core::settings::Settings;

/// Session behaviour knobs, usually taken from [`Settings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Words shorter than this (in chars) get no suggestions.
    pub min_prefix_chars: usize,
    pub append_space_on_accept: bool,
}

impl SessionConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            min_prefix_chars: settings.suggestions.min_prefix_chars,
            append_space_on_accept: settings.session.append_space_on_accept,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_prefix_chars: 1,
            append_space_on_accept: true,
        }
    }
}

/// Result of re-querying after a text change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionUpdate {
    /// Word in progress, `None` when the cursor follows a non-letter.
    pub word: Option<String>,
    pub suggestions: Vec<String>,
}

/// Edit the host applies to its text proxy when a suggestion is accepted:
/// delete `delete_backward` characters, then insert `insert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub delete_backward: usize,
    pub insert: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to load vocabulary: {0}")]
    Store(#[from] kb_core::suggest::StoreError),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}
