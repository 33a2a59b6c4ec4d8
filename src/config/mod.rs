//! Persisted user settings, stored separately from the transaction snapshot.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;
use crate::errors::Result;
use crate::utils::{ensure_dir, write_atomic};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// The currency all on-screen aggregates are converted into. A display
    /// preference only; stored transaction currencies are untouched.
    pub display_currency: CurrencyCode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_currency: CurrencyCode::default(),
        }
    }
}

pub struct SettingsManager {
    path: PathBuf,
}

impl SettingsManager {
    pub fn new() -> Result<Self> {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fintrack");
        Self::with_base_dir(base)
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(SETTINGS_FILE),
        })
    }

    pub fn load(&self) -> Result<Settings> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Settings::default())
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        let json = serde_json::to_string_pretty(settings)?;
        write_atomic(&self.path, &json)?;
        tracing::debug!(currency = %settings.display_currency.as_str(), "settings saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
