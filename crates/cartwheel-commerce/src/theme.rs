//! Persisted theme preference.
//!
//! The theme is consumed by presentation only; this module just stores
//! and recalls it.

use crate::error::CommerceError;
use cartwheel_store::Storage;
use serde::{Deserialize, Serialize};

/// Storage key for the persisted theme.
pub const THEME_KEY: &str = "theme";

/// Color theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// Storage-backed theme preference.
pub struct ThemeStore {
    storage: Storage,
}

impl ThemeStore {
    /// Create a store over the given storage.
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// The persisted theme; absent or unreadable state falls back to
    /// dark.
    pub fn get(&self) -> Theme {
        self.storage
            .get::<Theme>(THEME_KEY)
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Persist a theme choice.
    pub fn set(&self, theme: Theme) -> Result<(), CommerceError> {
        self.storage.set(THEME_KEY, &theme)?;
        Ok(())
    }
}
