//! Configuration management for textdrop.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! command-line flags. The file lives at `<config dir>/textdrop/config.toml` unless
//! `--config` points somewhere else.

use crate::error::{Result, TextDropError};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Highest frame rate the background clock accepts.
pub const MAX_FRAME_RATE: u32 = 240;

/// Command-line arguments for textdrop
#[derive(Debug, Default, Parser)]
#[command(name = "textdrop")]
#[command(about = "Paste or type text and save it as a file")]
#[command(version)]
pub struct Args {
    /// Directory downloaded files are written to
    #[arg(long, help = "Directory to save files into (defaults to the Downloads folder)")]
    pub download_dir: Option<PathBuf>,

    /// Language of the user-facing strings
    #[arg(long = "lang", value_enum, help = "Interface language")]
    pub language: Option<Language>,

    /// Frame rate of the background animation
    #[arg(long, help = "Background animation frame rate (1-240)")]
    pub fps: Option<u32>,

    /// Disable the animated background entirely
    #[arg(long, help = "Do not render the animated background")]
    pub no_background: bool,

    /// Explicit configuration file
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, help = "Log file (the terminal is busy drawing the UI)")]
    pub log_file: Option<PathBuf>,
}

/// Interface language for the built-in string catalogues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
pub enum Language {
    /// Khmer
    #[default]
    #[value(name = "km")]
    #[serde(rename = "km")]
    Khmer,
    /// English
    #[value(name = "en")]
    #[serde(rename = "en")]
    English,
}

/// Named color themes from [`crate::render::ui::ColorTheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    #[default]
    Default,
    Monochrome,
    HighContrast,
}

/// Effective application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Where files are saved; `None` falls back to the platform download directory
    pub download_dir: Option<PathBuf>,
    pub language: Language,
    /// Background frames per second
    pub frame_rate: u32,
    /// Whether the background renderer is mounted at all
    pub background: bool,
    /// Width of a terminal cell divided by its height
    pub cell_aspect: f64,
    /// How long a notification stays on screen
    pub toast_duration_ms: u64,
    /// Maximum number of notifications shown at once
    pub toast_limit: usize,
    pub theme: ThemeName,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            download_dir: None,
            language: Language::Khmer,
            frame_rate: 60,
            background: true,
            cell_aspect: 0.5,
            toast_duration_ms: 4000,
            toast_limit: 1,
            theme: ThemeName::Default,
        }
    }
}

impl AppConfig {
    /// Build the configuration from parsed arguments, reading the config file if present.
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_args(args);
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|err| {
            TextDropError::config(format!("cannot read {}: {}", path.display(), err))
        })?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text; missing keys keep their defaults
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Default location of the configuration file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("textdrop").join("config.toml"))
    }

    /// Command-line flags win over file values
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(dir) = &args.download_dir {
            self.download_dir = Some(dir.clone());
        }
        if let Some(language) = args.language {
            self.language = language;
        }
        if let Some(fps) = args.fps {
            self.frame_rate = fps;
        }
        if args.no_background {
            self.background = false;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_rate == 0 || self.frame_rate > MAX_FRAME_RATE {
            return Err(TextDropError::config(format!(
                "frame_rate must be between 1 and {}, got {}",
                MAX_FRAME_RATE, self.frame_rate
            )));
        }
        if !(self.cell_aspect.is_finite() && self.cell_aspect > 0.0) {
            return Err(TextDropError::config(format!(
                "cell_aspect must be a positive number, got {}",
                self.cell_aspect
            )));
        }
        if self.toast_limit == 0 {
            return Err(TextDropError::config("toast_limit must be at least 1"));
        }
        Ok(())
    }

    /// Time between two background frames
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Directory saved files go to: configured, platform downloads, or the working directory
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
