//! Run configuration
//!
//! Settings merge in three layers: an optional TOML config file at
//! `~/.config/volaudit/config.toml` (XDG standard), then `VOLAUDIT_*`
//! environment variables, then CLI flags (applied by the command layer).
//! Validation happens once, before any collection begins.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default staleness threshold in days
pub const DEFAULT_MAX_BACKUP_AGE_DAYS: u32 = 7;

/// Default object name prefix for uploaded artifacts
pub const DEFAULT_PREFIX: &str = "volume-backup-posture";

/// Object storage destination triple
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectStorageConfig {
    /// Storage namespace
    #[serde(default)]
    pub namespace: String,

    /// Bucket name; required unless uploads are skipped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,

    /// Object name prefix
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl Default for ObjectStorageConfig {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            bucket: None,
            prefix: default_prefix(),
        }
    }
}

/// Audit run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Maximum acceptable age of the most recent backup, in days
    #[serde(default = "default_max_age")]
    pub max_backup_age_days: u32,

    /// Optional root compartment restricting discovery to a subtree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_compartment: Option<String>,

    /// Directory report artifacts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Upload destination
    #[serde(default)]
    pub object_storage: ObjectStorageConfig,

    /// Whether a failed upload fails the process (exit code 2)
    #[serde(default = "default_true")]
    pub fail_on_upload_error: bool,
}

const fn default_max_age() -> u32 {
    DEFAULT_MAX_BACKUP_AGE_DAYS
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

const fn default_true() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            max_backup_age_days: DEFAULT_MAX_BACKUP_AGE_DAYS,
            root_compartment: None,
            output_dir: default_output_dir(),
            object_storage: ObjectStorageConfig::default(),
            fail_on_upload_error: true,
        }
    }
}

impl AuditConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("volaudit")
            .join("config.toml")
    }

    /// Load config from the file layer and apply environment overrides
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::load_file().unwrap_or_default();
        config.apply_env();
        config
    }

    fn load_file() -> Option<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return None;
        }
        fs::read_to_string(&path).ok().and_then(|content| toml::from_str(&content).ok())
    }

    /// Overlay `VOLAUDIT_*` environment variables onto this config
    ///
    /// Unparseable values are ignored in favor of the current layer.
    pub fn apply_env(&mut self) {
        if let Some(days) = env_u32("VOLAUDIT_MAX_BACKUP_AGE_DAYS") {
            self.max_backup_age_days = days;
        }
        if let Some(root) = env_nonempty("VOLAUDIT_ROOT_COMPARTMENT") {
            self.root_compartment = Some(root);
        }
        if let Some(dir) = env_nonempty("VOLAUDIT_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(namespace) = env_nonempty("VOLAUDIT_NAMESPACE") {
            self.object_storage.namespace = namespace;
        }
        if let Some(bucket) = env_nonempty("VOLAUDIT_BUCKET") {
            self.object_storage.bucket = Some(bucket);
        }
        if let Some(prefix) = env_nonempty("VOLAUDIT_PREFIX") {
            self.object_storage.prefix = prefix.trim_matches('/').to_string();
        }
        if let Some(flag) = env_bool("VOLAUDIT_FAIL_ON_UPLOAD_ERROR") {
            self.fail_on_upload_error = flag;
        }
    }

    /// Validate settings that must hold before collection starts
    ///
    /// `skip_upload` relaxes the bucket requirement.
    pub fn validate(&self, skip_upload: bool) -> Result<(), ConfigError> {
        if self.max_backup_age_days == 0 {
            return Err(ConfigError::InvalidThreshold(0));
        }
        if !skip_upload && self.object_storage.bucket.is_none() {
            return Err(ConfigError::MissingBucket);
        }
        Ok(())
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn env_u32(key: &str) -> Option<u32> {
    env_nonempty(key)?.parse().ok()
}

fn env_bool(key: &str) -> Option<bool> {
    let value = env_nonempty(key)?;
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}
