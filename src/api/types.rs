use kb_core::suggest::{StoreError, WeightedTerm};
use kb_session::{Language, SessionError, SuggestionUpdate, TextEdit};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum KbError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("out of capacity: {msg}")]
    Capacity { msg: String },
}

impl From<StoreError> for KbError {
    fn from(e: StoreError) -> Self {
        KbError::Capacity { msg: e.to_string() }
    }
}

impl From<SessionError> for KbError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Store(inner) => inner.into(),
            SessionError::UnknownLanguage(_) => KbError::InvalidData { msg: e.to_string() },
        }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, uniffi::Record)]
pub struct KbWeightedTerm {
    pub term: String,
    pub weight: u32,
}

#[derive(Clone, uniffi::Record)]
pub struct KbLanguage {
    pub name: String,
    pub vocabulary: Vec<KbWeightedTerm>,
}

#[derive(Clone, uniffi::Record)]
pub struct KbSuggestionUpdate {
    pub word: Option<String>,
    pub suggestions: Vec<String>,
}

#[derive(Clone, uniffi::Record)]
pub struct KbTextEdit {
    pub delete_backward: u64,
    pub insert: String,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

impl From<KbWeightedTerm> for WeightedTerm {
    fn from(t: KbWeightedTerm) -> Self {
        WeightedTerm::new(t.term, t.weight)
    }
}

impl From<KbLanguage> for Language {
    fn from(l: KbLanguage) -> Self {
        Language::new(l.name, l.vocabulary.into_iter().map(Into::into).collect())
    }
}

impl From<SuggestionUpdate> for KbSuggestionUpdate {
    fn from(u: SuggestionUpdate) -> Self {
        Self {
            word: u.word,
            suggestions: u.suggestions,
        }
    }
}

impl From<TextEdit> for KbTextEdit {
    fn from(e: TextEdit) -> Self {
        Self {
            delete_backward: e.delete_backward as u64,
            insert: e.insert,
        }
    }
}
