//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before the first
//!   `settings()` call
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
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
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
    pub matcher: MatcherSettings,
    pub browse: BrowseSettings,
    pub speech: SpeechSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatcherSettings {
    /// Minimum similarity score (1-100) to accept a fuzzy match.
    pub threshold: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrowseSettings {
    /// Cap on prefix-search results handed to the UI. 0 means unlimited.
    pub max_prefix_results: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    /// Upper bound on one blocking capture attempt, in seconds.
    pub timeout_secs: u64,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.matcher.threshold == 0 || s.matcher.threshold > 100 {
        return Err(SettingsError::InvalidValue {
            field: "matcher.threshold".into(),
            reason: format!("{} is outside 1-100", s.matcher.threshold),
        });
    }
    if s.speech.timeout_secs == 0 {
        return Err(SettingsError::InvalidValue {
            field: "speech.timeout_secs".into(),
            reason: "must be at least 1".into(),
        });
    }
    Ok(())
}
