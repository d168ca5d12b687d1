pub mod toml_config;

use crate::core::filter::{ImportanceFilter, DEFAULT_MAX_DEPTH, DEFAULT_MIN_MAGNITUDE};
use crate::core::parser::SOURCE_TIMEZONE;
use crate::core::printer::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use toml_config::TomlConfig;

/// Kandilli observatory list of recent earthquakes.
pub const OBSERVATORY_URL: &str = "http://www.koeri.boun.edu.tr/scripts/lst4.asp";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "quake-watch")]
#[command(about = "Lists recent important earthquakes reported by the Kandilli observatory")]
pub struct CliConfig {
    /// Do not filter unimportant earthquakes
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Max depth of an important earthquake in kilometers [default: 70]
    #[arg(short = 'd', long, allow_negative_numbers = true)]
    pub max_depth: Option<f32>,

    /// Min magnitude of an important earthquake [default: 4.5]
    #[arg(short = 'm', long, allow_negative_numbers = true)]
    pub min_magnitude: Option<f32>,

    /// Bulletin page to read
    #[arg(long)]
    pub url: Option<String>,

    /// Request timeout in seconds, 0 disables it [default: 30]
    #[arg(long = "timeout")]
    pub timeout_seconds: Option<u64>,

    /// Time zone the bulletin times are written in [default: Europe/Istanbul]
    #[arg(long)]
    pub source_tz: Option<String>,

    /// Time zone to print times in [default: local time]
    #[arg(long)]
    pub display_tz: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to TOML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    #[arg(short = 'v', long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log events as JSON lines")]
    pub log_json: bool,
}

/// Settings of one run, fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub endpoint: String,
    pub timeout: Option<Duration>,
    pub filter: ImportanceFilter,
    pub source_timezone: String,
    /// `None` prints times in the process's local zone.
    pub display_timezone: Option<String>,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: OBSERVATORY_URL.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)),
            filter: ImportanceFilter::default(),
            source_timezone: SOURCE_TIMEZONE.to_string(),
            display_timezone: None,
            format: OutputFormat::Table,
        }
    }
}

impl CliConfig {
    /// Loads the optional config file and layers the flags on top of it.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path.display());
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };
        Ok(self.merge(&file))
    }

    /// Flag > file > built-in default.
    pub fn merge(&self, file: &TomlConfig) -> Settings {
        let timeout_seconds = self
            .timeout_seconds
            .or(file.source.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Settings {
            endpoint: self
                .url
                .clone()
                .or_else(|| file.source.endpoint.clone())
                .unwrap_or_else(|| OBSERVATORY_URL.to_string()),
            timeout: (timeout_seconds > 0).then(|| Duration::from_secs(timeout_seconds)),
            filter: ImportanceFilter {
                include_all: self.all || file.filter.include_all.unwrap_or(false),
                max_depth: self
                    .max_depth
                    .or(file.filter.max_depth)
                    .unwrap_or(DEFAULT_MAX_DEPTH),
                min_magnitude: self
                    .min_magnitude
                    .or(file.filter.min_magnitude)
                    .unwrap_or(DEFAULT_MIN_MAGNITUDE),
            },
            source_timezone: self
                .source_tz
                .clone()
                .or_else(|| file.time.source_timezone.clone())
                .unwrap_or_else(|| SOURCE_TIMEZONE.to_string()),
            display_timezone: self
                .display_tz
                .clone()
                .or_else(|| file.time.display_timezone.clone()),
            format: self.format.or(file.output.format).unwrap_or_default(),
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("url", &self.endpoint)?;
        validation::validate_finite("max_depth", self.filter.max_depth)?;
        validation::validate_finite("min_magnitude", self.filter.min_magnitude)?;
        if let Some(timeout) = self.timeout {
            validation::validate_range("timeout", timeout.as_secs(), 1, 3600)?;
        }
        validation::validate_timezone("source_tz", &self.source_timezone)?;
        if let Some(name) = &self.display_timezone {
            validation::validate_timezone("display_tz", name)?;
        }
        Ok(())
    }
}
