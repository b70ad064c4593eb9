//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading leave
//! policies from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{AccrualPolicy, LeavePolicyConfig, StatuteMetadata};

/// Loads and provides access to a leave policy.
///
/// # Directory Structure
///
/// ```text
/// config/korea_lsa/
/// ├── statute.yaml   # Statute metadata
/// └── accrual.yaml   # Accrual policy numbers
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_accrual_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/korea_lsa").unwrap();
/// println!("Loaded statute: {}", loader.statute().name);
/// println!("Base grant: {} days", loader.policy().base_annual_days);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: LeavePolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML or misses a field
    /// - The policy values fail [`AccrualPolicy::validate`]
    ///
    /// # Example
    ///
    /// ```no_run
    /// use leave_accrual_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/korea_lsa")?;
    /// # Ok::<(), leave_accrual_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let statute = Self::load_yaml::<StatuteMetadata>(&path.join("statute.yaml"))?;
        let policy = Self::load_yaml::<AccrualPolicy>(&path.join("accrual.yaml"))?;
        policy.validate()?;

        debug!(
            statute = %statute.code,
            version = %statute.version,
            base_annual_days = policy.base_annual_days,
            "Loaded leave policy"
        );

        Ok(Self {
            config: LeavePolicyConfig::new(statute, policy),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying policy configuration.
    pub fn config(&self) -> &LeavePolicyConfig {
        &self.config
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        self.config.statute()
    }

    /// Returns the accrual policy.
    pub fn policy(&self) -> &AccrualPolicy {
        self.config.policy()
    }
}
