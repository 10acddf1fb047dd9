//! Output configuration

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory charts are generated into
    pub chart_dir: PathBuf,
}

impl OutputConfig {
    pub fn validate(&self) -> Result<()> {
        if self.chart_dir.as_os_str().is_empty() {
            return Err(anyhow!("Chart directory cannot be empty"));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            chart_dir: PathBuf::from("./charts"),
        }
    }
}
