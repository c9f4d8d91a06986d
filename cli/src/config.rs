//! Configuration file handling for the CLI.
//!
//! Defaults live in `$XDG_CONFIG_HOME/mentorship/config.toml` following the
//! XDG Base Directory Specification. Flags and environment variables override
//! anything read from the file.

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use mentorship_business::{BusinessConfig, ConfigError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration stored on disk
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API root, e.g. `https://api.example.com`
    pub url: Option<String>,
}

/// Admin session credentials
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// `name=value` or a bare cookie value
    pub session_cookie: Option<String>,
    pub token: Option<String>,
}

/// Values given on the command line or through the environment.
#[derive(Debug, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub session_cookie: Option<String>,
    pub token: Option<String>,
}

impl Config {
    /// Returns `$XDG_CONFIG_HOME/mentorship/config.toml` on Linux,
    /// appropriate paths on other platforms.
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("org", "mentorship", "mentorship")
            .context("Failed to determine config directory")?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Merge with command-line overrides into the business configuration.
    ///
    /// Each value comes from the override when given, else from the file.
    pub fn resolve(self, overrides: Overrides) -> Result<BusinessConfig> {
        let vars = [
            ("MENTORS_API_URL", overrides.api_url.or(self.api.url)),
            (
                "MENTORS_SESSION_COOKIE",
                overrides.session_cookie.or(self.auth.session_cookie),
            ),
            ("MENTORS_TOKEN", overrides.token.or(self.auth.token)),
        ];

        BusinessConfig::from_vars(
            vars.into_iter()
                .filter_map(|(key, value)| value.map(|value| (key, value))),
        )
        .map_err(|err| match err {
            ConfigError::MissingApiUrl => anyhow!(
                "No API URL configured. Pass --api-url, set MENTORS_API_URL, or add `[api] url` to the config file"
            ),
            ConfigError::Env(_) => anyhow::Error::new(err).context("Invalid configuration"),
        })
    }
}
