//! The persisted light/dark display preference.

use std::collections::HashMap;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Storage key under which the preference is persisted.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Media query for the platform's ambient dark color scheme.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Class toggled on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// The opposite preference.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The persisted string form, "light" or "dark".
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Parses a persisted value. Anything other than exactly "light" or
    /// "dark" counts as no preference.
    pub fn parse_persisted(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|s| Self::from_str(s).ok())
    }

    /// Resolves the initial preference: the persisted value wins, then the
    /// ambient color-scheme signal, then `Light`.
    pub fn resolve(persisted: Option<&str>, prefers_dark: Option<bool>) -> Self {
        match Self::parse_persisted(persisted) {
            Some(pref) => pref,
            None if prefers_dark == Some(true) => Self::Dark,
            None => Self::Light,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PrefsError {
    #[error("preference storage unavailable")]
    Unavailable,
    #[error("failed to write preference `{key}`: {reason}")]
    WriteFailed { key: String, reason: String },
}

/// A synchronous key-value store for user preferences, such as the browser's
/// `localStorage`.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// An in-memory `PreferenceStore`.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Restores the theme from `store`, falling back to the ambient signal.
pub fn restore_theme(store: &impl PreferenceStore, prefers_dark: Option<bool>) -> ThemePreference {
    let persisted = store.read(THEME_STORAGE_KEY);
    ThemePreference::resolve(persisted.as_deref(), prefers_dark)
}

/// Persists `theme` for the next session.
pub fn persist_theme(
    store: &mut impl PreferenceStore,
    theme: ThemePreference,
) -> Result<(), PrefsError> {
    store.write(THEME_STORAGE_KEY, theme.as_str())
}
