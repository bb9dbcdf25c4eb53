//! Application configuration management

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::theme::Theme;

/// Only environment variables with this prefix are visible to feature panels
pub const PUBLIC_ENV_PREFIX: &str = "DOCSGPT_PUBLIC_";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// UI settings
    pub ui: UiConfig,
    /// Backend API routing
    pub api: ApiConfig,
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme restored on startup
    pub theme: Theme,
    /// Docked sidebar width
    pub sidebar_width: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            sidebar_width: super::shell::SIDEBAR_WIDTH,
        }
    }
}

/// Backend API routing used by feature panels
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Proxy rules, first match wins
    pub proxy: Vec<ProxyRule>,
}

/// Forward requests under `prefix` to `target`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRule {
    pub prefix: String,
    pub target: String,
    /// Drop `prefix` from the forwarded path
    #[serde(default)]
    pub strip_prefix: bool,
}

impl ProxyRule {
    /// Rewrite `path` if it falls under this rule
    pub fn rewrite(&self, path: &str) -> Option<String> {
        let rest = path.strip_prefix(&self.prefix)?;
        // "/api" must not match "/apis"
        if !(rest.is_empty() || rest.starts_with('/') || self.prefix.ends_with('/')) {
            return None;
        }
        let forwarded = if self.strip_prefix { rest } else { path };
        let target = self.target.trim_end_matches('/');
        if forwarded.is_empty() || forwarded.starts_with('/') {
            Some(format!("{target}{forwarded}"))
        } else {
            Some(format!("{target}/{forwarded}"))
        }
    }
}

impl ApiConfig {
    /// Resolve a request path to a backend URL
    pub fn resolve(&self, path: &str) -> Option<String> {
        self.proxy.iter().find_map(|rule| rule.rewrite(path))
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "docsgpt", "DocsGPT")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }
}

/// Environment variables that feature panels may read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicEnv {
    vars: BTreeMap<String, String>,
}

impl PublicEnv {
    /// Keep only `DOCSGPT_PUBLIC_*` variables
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            vars: vars
                .into_iter()
                .filter(|(key, _)| key.starts_with(PUBLIC_ENV_PREFIX))
                .collect(),
        }
    }

    /// Like `from_vars`, skipping pairs that are not valid Unicode
    pub fn from_os_vars(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        Self::from_vars(vars.into_iter().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    pub fn from_process() -> Self {
        Self::from_os_vars(std::env::vars_os())
    }

    /// Look up a variable by its full name
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
