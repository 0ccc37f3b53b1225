//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV};
use crate::models::{BlockColumns, Price, TheaterLayout};
use crate::registry::SeatRegistry;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Theater layout and pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TheaterConfig {
    /// Venue name shown in the title bar and on receipts
    pub name: String,
    /// Rows per section, front to back
    pub section_rows: Vec<u8>,
    /// Price of one seat, e.g. "12.50"
    pub seat_price: Price,
    /// Currency symbol printed before amounts
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Fraction of seats pre-booked at startup (0.0 - 1.0)
    #[serde(default = "default_occupancy")]
    pub occupancy: f64,
    /// Fixed seed for the pre-booking draw (random when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Seats per row in each block
    pub columns: BlockColumns,
}

fn default_currency() -> String {
    "$".to_string()
}

const fn default_occupancy() -> f64 {
    0.15
}

impl Default for TheaterConfig {
    fn default() -> Self {
        let layout = TheaterLayout::default();
        Self {
            name: "Sugarland Theaters".to_string(),
            section_rows: layout.sections().to_vec(),
            seat_price: layout.seat_price(),
            currency: default_currency(),
            occupancy: default_occupancy(),
            seed: None,
            columns: layout.columns(),
        }
    }
}

impl TheaterConfig {
    /// Builds the validated theater layout described by this config.
    pub fn to_layout(&self) -> Result<TheaterLayout> {
        TheaterLayout::new(self.section_rows.clone(), self.columns, self.seat_price)
            .context("Invalid theater layout in configuration")
    }

    /// Builds the seat registry with the configured pre-booking draw.
    ///
    /// `seed_override` wins over the configured seed; without either the
    /// draw is seeded from OS entropy.
    pub fn build_registry(&self, seed_override: Option<u64>) -> Result<SeatRegistry> {
        let layout = self.to_layout()?;
        let mut rng = match seed_override.or(self.seed) {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(SeatRegistry::initialize(layout, self.occupancy, &mut rng))
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Terminal width (columns) at or below which the compact sector view is used
    #[serde(default = "default_compact_width")]
    pub compact_width: u16,
}

const fn default_compact_width() -> u16 {
    100
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            compact_width: default_compact_width(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Seatmap/config.toml`
/// - macOS: `~/Library/Application Support/Seatmap/config.toml`
/// - Windows: `%APPDATA%\Seatmap\config.toml`
/// - `$SEATMAP_CONFIG_DIR/config.toml` when that variable is set
///
/// # Validation
///
/// - Theater layout must be valid (see `TheaterLayout`)
/// - `occupancy` must be within 0.0..=1.0
/// - `currency` must not be empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Theater layout and pricing
    #[serde(default)]
    pub theater: TheaterConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// `SEATMAP_CONFIG_DIR` replaces the platform directory when set.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path, defaulting when it is missing.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid configuration in {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration using temp file + rename for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        self.theater.to_layout()?;

        if !(0.0..=1.0).contains(&self.theater.occupancy) {
            anyhow::bail!(
                "Occupancy must be between 0.0 and 1.0 (got {})",
                self.theater.occupancy
            );
        }

        if self.theater.currency.trim().is_empty() {
            anyhow::bail!("Currency symbol cannot be empty");
        }

        Ok(())
    }
}
