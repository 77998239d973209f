//! Settings domain types and validation.
//!
//! These are pure domain types with no infrastructure dependencies. The
//! persisted form is the JSON object stored in the `settings` slot.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(SettingsError::InvalidTheme(other.to_string())),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interface language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    /// Label shown on the language switch.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Hi => "हिंदी",
        }
    }

    /// The other language.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Hi,
            Self::Hi => Self::En,
        }
    }
}

impl FromStr for Language {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "hi" | "hindi" => Ok(Self::Hi),
            other => Err(SettingsError::InvalidLanguage(other.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User preferences.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub language: Language,
}

impl Settings {
    /// Merge a partial update, only touching fields that are `Some`.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(theme) = other.theme {
            self.theme = theme;
        }
        if let Some(language) = other.language {
            self.language = language;
        }
    }
}

/// Partial settings update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub theme: Option<Theme>,
    pub language: Option<Language>,
}

impl SettingsUpdate {
    /// Build an update from optional raw strings, validating each.
    pub fn parse(theme: Option<&str>, language: Option<&str>) -> Result<Self, SettingsError> {
        Ok(Self {
            theme: theme.map(str::parse).transpose()?,
            language: language.map(str::parse).transpose()?,
        })
    }

    pub const fn is_empty(&self) -> bool {
        self.theme.is_none() && self.language.is_none()
    }
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Theme must be 'dark' or 'light', got '{0}'")]
    InvalidTheme(String),

    #[error("Language must be 'en' or 'hi', got '{0}'")]
    InvalidLanguage(String),
}
