//! Configuration management CLI commands.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::models::Price;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Write a configuration file with default values
    Init(ConfigInitArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write a configuration file with default values
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Venue name
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// Seat price, e.g. 12.50
    #[arg(long, value_name = "AMOUNT")]
    price: Option<String>,

    /// Fraction of seats pre-booked at startup (0.0 - 1.0)
    #[arg(long, value_name = "FRACTION")]
    occupancy: Option<f64>,

    /// Terminal width at or below which the compact sector view is used
    #[arg(long, value_name = "COLUMNS")]
    compact_width: Option<u16>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    path: String,
    theater: &'a crate::config::TheaterConfig,
    seats: usize,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    compact_width: u16,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(config_path),
            ConfigCommand::Init(args) => args.execute(config_path),
            ConfigCommand::Set(args) => args.execute(config_path),
        }
    }
}

fn resolve_path(config_path: Option<&Path>) -> CliResult<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate config file: {e}"))),
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let path = resolve_path(config_path)?;
        let config = load_config(Some(&path))?;

        if self.json {
            output_json(&config, &path)?;
        } else {
            output_human_readable(&config, &path);
        }

        Ok(())
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let path = resolve_path(config_path)?;

        if path.exists() && !self.force {
            return Err(CliError::validation(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        Config::new()
            .save_to(&path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Wrote default configuration to {}", path.display());
        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        if self.name.is_none()
            && self.price.is_none()
            && self.occupancy.is_none()
            && self.compact_width.is_none()
            && self.theme.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --name, --price, --occupancy, --compact-width, or --theme",
            ));
        }

        let path = resolve_path(config_path)?;
        let mut config = load_config(Some(&path))?;

        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(CliError::validation("Venue name cannot be empty"));
            }
            config.theater.name.clone_from(name);
        }

        if let Some(raw) = &self.price {
            let price: Price = raw
                .parse()
                .map_err(|e| CliError::validation(format!("Invalid price '{raw}': {e}")))?;
            config.theater.seat_price = price;
        }

        if let Some(occupancy) = self.occupancy {
            if !(0.0..=1.0).contains(&occupancy) {
                return Err(CliError::validation(
                    "Occupancy must be between 0.0 and 1.0",
                ));
            }
            config.theater.occupancy = occupancy;
        }

        if let Some(width) = self.compact_width {
            config.ui.compact_width = width;
        }

        if let Some(theme_str) = &self.theme {
            let theme = match theme_str.to_lowercase().as_str() {
                "auto" => ThemeMode::Auto,
                "light" => ThemeMode::Light,
                "dark" => ThemeMode::Dark,
                _ => {
                    return Err(CliError::validation(
                        "Invalid theme mode. Must be 'auto', 'light', or 'dark'",
                    ))
                }
            };
            config.ui.theme_mode = theme;
        }

        config
            .save_to(&path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config, path: &Path) -> CliResult<()> {
    let seats = config
        .theater
        .to_layout()
        .map(|layout| layout.seat_count())
        .map_err(|e| CliError::io(format!("{e:#}")))?;

    let output = ConfigOutput {
        path: path.to_string_lossy().to_string(),
        theater: &config.theater,
        seats,
        ui: UiOutput {
            theme: format!("{:?}", config.ui.theme_mode).to_lowercase(),
            compact_width: config.ui.compact_width,
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, path: &Path) {
    let theater = &config.theater;
    let rows: Vec<String> = theater.section_rows.iter().map(ToString::to_string).collect();

    println!("Configuration ({})", path.display());
    println!();
    println!("Theater:");
    println!("  Name:         {}", theater.name);
    println!("  Sections:     {}", rows.join(" / "));
    println!(
        "  Columns:      left {}, center {}, right {}",
        theater.columns.left, theater.columns.center, theater.columns.right
    );
    println!("  Seat price:   {}", theater.seat_price.with_symbol(&theater.currency));
    println!("  Occupancy:    {:.0}%", theater.occupancy * 100.0);
    match theater.seed {
        Some(seed) => println!("  Seed:         {seed}"),
        None => println!("  Seed:         (random)"),
    }
    println!();
    println!("UI:");
    println!("  Theme:         {:?}", config.ui.theme_mode);
    println!("  Compact width: {}", config.ui.compact_width);
}
