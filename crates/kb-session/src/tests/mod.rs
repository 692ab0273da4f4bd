
use kb_core::suggest::{SuggestionTrie, WeightedTerm};

use super::{KeyboardSession, Language, SessionConfig};

pub(super) fn english() -> Language {
    Language::new(
        "English",
        vec![
            WeightedTerm::new("the", 100),
            WeightedTerm::new("they", 60),
            WeightedTerm::new("then", 40),
            WeightedTerm::new("there", 70),
            WeightedTerm::new("cat", 10),
            WeightedTerm::new("car", 20),
            WeightedTerm::new("cart", 5),
        ],
    )
}

pub(super) fn spanish() -> Language {
    Language::new(
        "Español",
        vec![
            WeightedTerm::new("calle", 50),
            WeightedTerm::new("callejón", 10),
            WeightedTerm::new("casa", 80),
            WeightedTerm::new("año", 30),
        ],
    )
}

pub(super) fn make_session(config: SessionConfig) -> KeyboardSession {
    KeyboardSession::with_provider(
        Box::new(SuggestionTrie::new()),
        vec![english(), spanish()],
        config,
    )
    .unwrap()
}

pub(super) fn default_session() -> KeyboardSession {
    make_session(SessionConfig::default())
}
