//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        // Custom TOML is validated in `init_custom`; the default is tested.
        parse_settings_toml(toml_str).unwrap_or_else(|_| Settings::fallback())
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub suggestions: SuggestionSettings,
    pub session: SessionSettings,
}

impl Settings {
    /// Hard-coded equivalent of the embedded defaults.
    fn fallback() -> Self {
        Self {
            suggestions: SuggestionSettings {
                max_results: None,
                min_prefix_chars: 1,
            },
            session: SessionSettings {
                append_space_on_accept: true,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionSettings {
    /// Cap on suggestions per query. `None` returns every match.
    #[serde(default)]
    pub max_results: Option<usize>,
    pub min_prefix_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub append_space_on_accept: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(suggestions.min_prefix_chars);
    if s.suggestions.max_results == Some(0) {
        return Err(SettingsError::InvalidValue {
            field: "suggestions.max_results".to_string(),
            reason: "must be positive when set".to_string(),
        });
    }

    Ok(())
}
