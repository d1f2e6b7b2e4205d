use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TinyCryptError};

/// Which `RemoteStore` adapter the CLI talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// The public TinyURL shortener.
    Tinyurl,
    /// A local JSON file.
    File,
}

/// Project-level configuration, loaded from `.tinycrypt.toml`.
///
/// Every field has a sensible default so TinyCrypt works out-of-the-box
/// without any config file at all.  The salt is deliberately not here:
/// it is fixed at build time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Store backend to use (default: tinyurl).
    #[serde(default = "default_backend")]
    pub backend: Backend,

    /// Base URL of the TinyURL service.
    #[serde(default = "default_tinyurl_base")]
    pub tinyurl_base: String,

    /// URL the TinyURL alias redirects to; the blob rides in its query.
    #[serde(default = "default_decoy_url")]
    pub decoy_url: String,

    /// Per-request timeout for the TinyURL backend, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Path of the JSON file used by the file backend.
    #[serde(default = "default_store_file")]
    pub store_file: PathBuf,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_backend() -> Backend {
    Backend::Tinyurl
}

fn default_tinyurl_base() -> String {
    "https://tinyurl.com".to_string()
}

fn default_decoy_url() -> String {
    "http://test.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_store_file() -> PathBuf {
    PathBuf::from(".tinycrypt").join("store.json")
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            tinyurl_base: default_tinyurl_base(),
            decoy_url: default_decoy_url(),
            timeout_secs: default_timeout_secs(),
            store_file: default_store_file(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    pub const FILE_NAME: &'static str = ".tinycrypt.toml";

    /// Load settings from `<project_dir>/.tinycrypt.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_file(&config_path)
    }

    /// Load settings from an explicit file, which must exist.
    pub fn load_file(config_path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(config_path).map_err(|e| {
            TinyCryptError::ConfigError(format!("Failed to read {}: {e}", config_path.display()))
        })?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            TinyCryptError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(TinyCryptError::ConfigError(
                "timeout_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Resolve the store file against the project directory.
    pub fn store_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.store_file)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
