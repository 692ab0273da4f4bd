//! UniFFI export layer — type-safe Swift bindings for the suggestion engine.
//!
//! Each public type here maps to a generated Swift class, struct, or enum.

mod provider;
mod session;
mod types;

pub use provider::KbSuggestionProvider;
pub use session::KbKeyboardSession;
pub use types::{KbError, KbLanguage, KbSuggestionUpdate, KbTextEdit, KbWeightedTerm};

use std::path::Path;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), KbError> {
    let content = std::fs::read_to_string(&path).map_err(|e| KbError::Io {
        msg: format!("{path}: {e}"),
    })?;
    kb_core::settings::init_custom(content)
        .map_err(|e| KbError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    kb_core::settings::default_toml().to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
