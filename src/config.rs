// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::storage::FileStore;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api-pil.site/api/auth/syllabus";
pub const DEFAULT_PDF_BASE_URL: &str = "https://api-pil.site/";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_pdf_base_url() -> String {
    DEFAULT_PDF_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("pil-syllabus/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_pdf_base_url")]
    pub pdf_base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// `None` waits for the transport to resolve on its own.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            pdf_base_url: default_pdf_base_url(),
            user_agent: default_user_agent(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = FileStore::read_locked(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Like `load`, but a missing file yields the defaults.
    /// Parse errors are still reported.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(cfg) => Ok(cfg),
            Err(e) if Self::is_missing_config_error(&e) => {
                log::debug!("No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Detects whether an error means the config file was missing, either by
    /// our explicit message or an IO `NotFound` anywhere in the chain.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        err.chain().any(|cause| {
            cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
        })
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        FileStore::with_lock(&path, || {
            let toml_str = toml::to_string_pretty(self)?;
            FileStore::atomic_write(&path, toml_str)?;
            Ok(())
        })?;
        Ok(())
    }

    pub fn get_path_string(ctx: &dyn AppContext) -> Result<String> {
        let path = ctx.get_config_file_path()?;
        Ok(path.to_string_lossy().to_string())
    }
}
