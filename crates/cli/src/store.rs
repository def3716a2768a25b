//! Persistence for the cluster configuration snapshot
//!
//! A single JSON snapshot lives at a fixed path and is loaded on startup
//! and saved on every change. Persistence is best-effort: a corrupted
//! snapshot is discarded (and the file removed) rather than surfaced, and a
//! failed write leaves the in-memory state untouched.

use anyhow::{Context, Result};
use estimator_lib::models::{
    ClusterConfig, DeploymentType, IngestVolumeConfig, InfrastructureNodes, TierConfig, TierType,
};
use estimator_lib::serverless::ServerlessTier;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not determine home directory")]
    NoHomeDir,
}

/// Serialized form of the user's configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedConfig {
    pub deployment_type: DeploymentType,
    pub tiers: Vec<TierConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_ingest_volume: Option<IngestVolumeConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure_nodes: Option<InfrastructureNodes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ops_per_core: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serverless_tier: Option<ServerlessTier>,
}

impl SavedConfig {
    pub fn into_cluster_config(self) -> ClusterConfig {
        ClusterConfig {
            deployment_type: self.deployment_type,
            tiers: self.tiers,
            expected_ingest_volume: self.expected_ingest_volume,
            infrastructure_nodes: self.infrastructure_nodes,
            ops_per_core: self.ops_per_core,
            serverless_tier: self.serverless_tier,
        }
    }

    pub fn tier_mut(&mut self, tier_type: TierType) -> Option<&mut TierConfig> {
        self.tiers.iter_mut().find(|t| t.tier_type == tier_type)
    }
}

impl Default for SavedConfig {
    fn default() -> Self {
        let config = ClusterConfig::default();
        SavedConfig {
            deployment_type: config.deployment_type,
            tiers: config.tiers,
            expected_ingest_volume: None,
            infrastructure_nodes: None,
            ops_per_core: None,
            serverless_tier: None,
        }
    }
}

/// Handle on the snapshot file
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at the default location under the user's home directory
    pub fn default_path() -> Result<Self, StoreError> {
        let home = dirs_next::home_dir().ok_or(StoreError::NoHomeDir)?;
        Ok(Self::at(
            home.join(".config").join("cluster-tuner").join("config.json"),
        ))
    }

    /// Store at an explicit path, used by tests and the `--config` flag
    pub fn at(path: impl Into<PathBuf>) -> Self {
        ConfigStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot, falling back to defaults when it is missing or
    /// corrupted. A corrupted file is removed so it cannot fail again.
    pub fn load(&self) -> SavedConfig {
        if !self.path.exists() {
            return SavedConfig::default();
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "failed to read saved config, using defaults");
                return SavedConfig::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "discarding corrupted saved config");
                if let Err(error) = std::fs::remove_file(&self.path) {
                    debug!(%error, "could not remove corrupted config file");
                }
                SavedConfig::default()
            }
        }
    }

    /// Save the snapshot. Failures are logged and swallowed; the caller's
    /// in-memory state stays valid either way.
    pub fn save(&self, config: &SavedConfig) {
        if let Err(error) = self.try_save(config) {
            warn!(path = %self.path.display(), %error, "failed to save configuration");
        }
    }

    fn try_save(&self, config: &SavedConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content =
            serde_json::to_string_pretty(config).context("Failed to serialize config")?;
        std::fs::write(&self.path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Delete the snapshot if present
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).context("Failed to remove config file")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, ConfigStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("config.json"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let (_dir, store) = temp_store();
        assert_eq!(store.load(), SavedConfig::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_dir, store) = temp_store();
        let mut config = SavedConfig::default();
        config.deployment_type = DeploymentType::Aws;
        config.ops_per_core = Some(2400);
        config.tier_mut(TierType::Warm).unwrap().enabled = true;

        store.save(&config);
        assert_eq!(store.load(), config);
    }

    #[test]
    fn test_corrupted_file_discarded_and_removed() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), "{not valid json").unwrap();

        assert_eq!(store.load(), SavedConfig::default());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_clear_removes_file() {
        let (_dir, store) = temp_store();
        store.save(&SavedConfig::default());
        assert!(store.path().exists());
        store.clear().unwrap();
        assert!(!store.path().exists());
        // Clearing twice is fine
        store.clear().unwrap();
    }
}
