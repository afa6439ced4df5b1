//! User settings for the finance tracker
//!
//! Manages the current monthly budget, display preferences and the AI advice
//! provider options.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::Money;

/// Options for the AI advice provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceSettings {
    /// Model name sent to the provider
    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound on generated tokens
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Network timeout for a single advice request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Provider API root
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_model() -> String {
    "gpt-4.1-mini".to_string()
}

fn default_max_output_tokens() -> u32 {
    400
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

impl Default for AdviceSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_output_tokens: default_max_output_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            base_url: default_base_url(),
        }
    }
}

/// User settings for the finance tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Current monthly budget; zero disables budget monitoring
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: Money,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// AI advice provider options
    #[serde(default)]
    pub advice: AdviceSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_monthly_budget() -> Money {
    Money::from_units(2_000_000)
}

fn default_currency() -> String {
    "Rp".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            monthly_budget: default_monthly_budget(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            advice: AdviceSettings::default(),
        }
    }
}

/// Whether `format` is a strftime string chrono can render
fn is_valid_date_format(format: &str) -> bool {
    !format.is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let mut settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if !is_valid_date_format(&settings.date_format) {
                warn!(
                    date_format = %settings.date_format,
                    "invalid date format in settings, using the default"
                );
                settings.date_format = default_date_format();
            }

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            TrackerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}
