//! Registry configuration

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Directories scanned for resource descriptors and CRD manifests
    pub paths: Vec<PathBuf>,
}

impl RegistryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.paths.is_empty() {
            return Err(anyhow!("At least one registry path must be configured"));
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            paths: vec![PathBuf::from("./resourcedescriptors")],
        }
    }
}
