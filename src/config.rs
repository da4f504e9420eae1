//! Runtime configuration
//!
//! Values come from the process environment (optionally seeded from a
//! `.env` file) and may be overridden from the command line.

use crate::{Error, Result};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL the `/generate` path is appended to.
    pub base_url: String,
    /// Request timeout. `None` waits for the endpoint indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    /// Load `.env` from the working directory (if any), then read the
    /// process environment.
    pub fn from_env() -> Result<Self> {
        skip_missing_env_file(dotenvy::dotenv())?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], with an explicit env file location.
    pub fn from_env_file(path: &Path) -> Result<Self> {
        skip_missing_env_file(dotenvy::from_path(path))?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("GENERATOR_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup("GENERATOR_TIMEOUT_SECS") {
            Some(raw) => Some(parse_timeout_secs(&raw)?),
            None => None,
        };

        Ok(Self {
            base_url: normalize_base_url(&base_url),
            timeout,
        })
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = normalize_base_url(&base_url);
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn generate_url(&self) -> String {
        format!("{}/generate", self.base_url)
    }
}

pub fn parse_timeout_secs(raw: &str) -> Result<Duration> {
    let secs: u64 = raw.trim().parse().map_err(|_| {
        Error::Config(format!(
            "GENERATOR_TIMEOUT_SECS must be a positive integer, got '{}'",
            raw
        ))
    })?;
    if secs == 0 {
        return Err(Error::Config(
            "GENERATOR_TIMEOUT_SECS must be greater than zero".to_string(),
        ));
    }
    Ok(Duration::from_secs(secs))
}

/// A missing env file is fine; one that exists but cannot be read or parsed
/// is an error.
fn skip_missing_env_file<T>(result: dotenvy::Result<T>) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => {
            tracing::error!("Failed to load env file: {}", e);
            Err(Error::EnvVar(e))
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
