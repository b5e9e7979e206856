//! Service configuration resolution
//!
//! Each field resolves in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5780";
pub const DEFAULT_MODEL_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_THRESHOLDS_PATH: &str = "thresholds.json";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Command-line arguments; every flag falls back to its environment
/// variable when absent
#[derive(Debug, Default, Parser)]
#[command(name = "moodify-ie", about = "Moodify inference engine service")]
pub struct Cli {
    /// Socket address to listen on
    #[arg(long, env = "MOODIFY_IE_BIND")]
    pub bind: Option<String>,

    /// Base URL of the classifier model service
    #[arg(long, env = "MOODIFY_IE_MODEL_URL")]
    pub model_url: Option<String>,

    /// Path to the threshold JSON file
    #[arg(long, env = "MOODIFY_IE_THRESHOLDS")]
    pub thresholds: Option<PathBuf>,

    /// Model service request timeout in seconds
    #[arg(long, env = "MOODIFY_IE_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Path to a TOML config file
    #[arg(long, env = "MOODIFY_IE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// TOML config file contents; all keys optional
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    bind: Option<String>,
    model_url: Option<String>,
    thresholds: Option<PathBuf>,
    timeout_secs: Option<u64>,
}

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub model_url: String,
    pub thresholds_path: PathBuf,
    pub request_timeout: Duration,
}

impl Config {
    pub fn resolve(cli: Cli) -> anyhow::Result<Self> {
        let file = load_config_file(cli.config.as_deref())?;

        let bind_addr = cli
            .bind
            .or(file.bind)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let model_url = cli
            .model_url
            .or(file.model_url)
            .unwrap_or_else(|| DEFAULT_MODEL_URL.to_string());
        let thresholds_path = cli
            .thresholds
            .or(file.thresholds)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_THRESHOLDS_PATH));
        let timeout_secs = cli
            .timeout_secs
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Ok(Self {
            bind_addr,
            model_url,
            thresholds_path,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Read the config file. An explicitly given path must exist; the default
/// platform path is skipped silently when absent.
fn load_config_file(explicit: Option<&Path>) -> anyhow::Result<ConfigFile> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path().filter(|p| p.exists()),
    };
    let Some(path) = path else {
        return Ok(ConfigFile::default());
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let parsed = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(parsed)
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("moodify").join("config.toml"))
}
