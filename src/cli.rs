//! Command-line interface parsing for the game menu
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! a validated `StartupConfig`.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use reqwest::Url;
use thiserror::Error;

use crate::cache::{CacheManager, DEFAULT_TTL_HOURS};
use crate::data::DEFAULT_DOWNLOAD_BASE;
use crate::fetch::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// A URL argument could not be parsed or is not http(s)
    #[error("Invalid URL for {flag}: '{value}'")]
    InvalidUrl { flag: &'static str, value: String },

    /// The request timeout must be at least one second
    #[error("Invalid timeout: must be at least 1 second")]
    InvalidTimeout,
}

/// Game Menu - browse the game catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "gamemenu")]
#[command(about = "Browse the game catalog by category with local caching")]
#[command(version)]
pub struct Cli {
    /// Catalog endpoint queried with `cmd` and `dat` parameters
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Base URL that file ids are appended to for download links
    #[arg(long, value_name = "URL", default_value = DEFAULT_DOWNLOAD_BASE)]
    pub download_base: String,

    /// Directory for cached payloads (defaults to the XDG cache directory)
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Hours a cached payload is served without contacting the endpoint
    #[arg(long, value_name = "HOURS", default_value_t = DEFAULT_TTL_HOURS)]
    pub ttl_hours: u64,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Disable the on-disk cache entirely
    #[arg(long)]
    pub no_cache: bool,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub endpoint: String,
    pub download_base: String,
    /// Explicit cache directory, if any
    pub cache_dir: Option<PathBuf>,
    pub use_cache: bool,
    pub ttl_hours: u64,
    pub timeout: Duration,
    pub log_file: Option<PathBuf>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            download_base: DEFAULT_DOWNLOAD_BASE.to_string(),
            cache_dir: None,
            use_cache: true,
            ttl_hours: DEFAULT_TTL_HOURS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file: None,
        }
    }
}

/// Checks that `value` is an absolute http(s) URL
fn validate_url(flag: &'static str, value: &str) -> Result<String, CliError> {
    let invalid = || CliError::InvalidUrl {
        flag,
        value: value.to_string(),
    };
    let url = Url::parse(value).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    Ok(value.to_string())
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if a URL or the timeout is invalid
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.timeout_secs == 0 {
            return Err(CliError::InvalidTimeout);
        }

        Ok(StartupConfig {
            endpoint: validate_url("--endpoint", &cli.endpoint)?,
            download_base: validate_url("--download-base", &cli.download_base)?,
            cache_dir: cli.cache_dir.clone(),
            use_cache: !cli.no_cache,
            ttl_hours: cli.ttl_hours,
            timeout: Duration::from_secs(cli.timeout_secs),
            log_file: cli.log_file.clone(),
        })
    }

    /// Builds the cache manager this configuration asks for
    ///
    /// `None` when caching is disabled or no cache directory can be found.
    pub fn cache_manager(&self) -> Option<CacheManager> {
        if !self.use_cache {
            return None;
        }
        let cache = match &self.cache_dir {
            Some(dir) => CacheManager::with_dir(dir.clone()),
            None => CacheManager::new()?,
        };
        Some(cache.with_ttl_hours(self.ttl_hours))
    }
}
