//! Model-wide configuration
//!
//! Controls the optional checks that `build()` runs on top of the structural
//! rules. Builders read the process-wide default through [`ModelConfig::global`];
//! `build_with` takes an explicit configuration instead.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::{OnceLock, PoisonError, RwLock};

static GLOBAL: OnceLock<RwLock<ModelConfig>> = OnceLock::new();

/// Optional build-time checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelConfig {
    /// Validate the resource type found in `Reference.reference` / `Reference.type`
    /// against the targets allowed for the element
    pub check_reference_types: bool,

    /// Reject control characters in string-like primitive values
    pub check_control_chars: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            check_reference_types: true,
            check_control_chars: true,
        }
    }
}

impl ModelConfig {
    /// Parse from a JSON document; missing keys keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::from)
    }

    /// Parse from JSON Value
    pub fn from_value(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone()).map_err(Error::from)
    }

    /// Process-wide configuration used by `build()`
    pub fn global() -> ModelConfig {
        *global_lock()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the process-wide configuration
    pub fn set_global(config: ModelConfig) {
        let mut guard = global_lock()
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = config;
        tracing::info!(
            check_reference_types = config.check_reference_types,
            check_control_chars = config.check_control_chars,
            "updated model configuration"
        );
    }
}

fn global_lock() -> &'static RwLock<ModelConfig> {
    GLOBAL.get_or_init(|| RwLock::new(ModelConfig::default()))
}
