//! Swift-facing entry point of the keyboard suggestion engine.
//!
//! The host app links this crate as a static library and talks to it through
//! the UniFFI-generated bindings in `api`.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use api::{
    KbError, KbKeyboardSession, KbLanguage, KbSuggestionProvider, KbSuggestionUpdate, KbTextEdit,
    KbWeightedTerm,
};
