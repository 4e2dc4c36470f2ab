//! Node configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use veri_types::{Address, RegistryParams};

use crate::logging::LogFormat;
use crate::NodeError;

/// Configuration for a registry node.
///
/// Can be loaded from a TOML file via [`NodeConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Custody account of the employer registry (stakes and treasury).
    #[serde(default = "default_registry_account")]
    pub registry_account: Address,

    /// Custody account of the verification ledger (fees and escrow).
    #[serde(default = "default_resume_ledger_account")]
    pub resume_ledger_account: Address,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Economic and quorum parameters shared by both engines.
    #[serde(default)]
    pub params: RegistryParams,
}

// Serde default helpers

fn default_registry_account() -> Address {
    Address::from_u64(0xE0)
}

fn default_resume_ledger_account() -> Address {
    Address::from_u64(0xE1)
}

fn default_log_format() -> LogFormat {
    LogFormat::Human
}

fn default_log_level() -> String {
    "info".to_string()
}

impl NodeConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, NodeError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| NodeError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string and validate it.
    pub fn from_toml_str(s: &str) -> Result<Self, NodeError> {
        let config: Self = toml::from_str(s).map_err(|e| NodeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, NodeError> {
        toml::to_string_pretty(self).map_err(|e| NodeError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), NodeError> {
        self.params.validate()?;
        if self.registry_account == self.resume_ledger_account {
            return Err(NodeError::Config(
                "registry and resume ledger must use distinct custody accounts".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            registry_account: default_registry_account(),
            resume_ledger_account: default_resume_ledger_account(),
            log_format: default_log_format(),
            log_level: default_log_level(),
            params: RegistryParams::default(),
        }
    }
}
