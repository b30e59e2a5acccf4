use crate::theme::PaletteType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "PACKLIST_CONFIG";
pub const DEFAULT_TOKEN_ENV: &str = "PACKLIST_SHEETS_TOKEN";
pub const DEFAULT_SHEETS_ENDPOINT: &str = "https://sheets.googleapis.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    File,
    Sheets,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: BackendKind,
    /// Local document path; `~` is expanded.
    pub path: Option<String>,
    pub spreadsheet_id: Option<String>,
    pub sheet: String,
    pub endpoint: String,
    /// Environment variable holding a Sheets access token.
    pub token_env: String,
    /// Command whose stdout is an access token, used when `token_env` is unset.
    pub token_command: Option<Vec<String>>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::File,
            path: None,
            spreadsheet_id: None,
            sheet: "Sheet1".to_string(),
            endpoint: DEFAULT_SHEETS_ENDPOINT.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            token_command: None,
        }
    }
}

impl StorageConfig {
    /// Where the file backend keeps the document.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        match &self.path {
            Some(p) => expand_tilde(p),
            None => config_dir()
                .map(|d| d.join("packlist.json"))
                .unwrap_or_else(|| PathBuf::from("packlist.json")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub theme: PaletteType,
    pub storage: StorageConfig,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid config file")
    }

    /// Reads the config file, falling back to defaults when it is missing or
    /// cannot be parsed.
    #[must_use]
    pub fn load() -> Self {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let parsed = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))
            .and_then(|content| Self::from_toml(&content));
        match parsed {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring config at {}: {e:#}", path.display());
                Self::default()
            }
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("packlist");
        path
    })
}

pub fn config_path() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var(CONFIG_ENV) {
        if !explicit.is_empty() {
            return Some(expand_tilde(&explicit));
        }
    }
    config_dir().map(|d| d.join("config.toml"))
}

pub fn log_file_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("packlist.log"))
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = home::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = home::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
