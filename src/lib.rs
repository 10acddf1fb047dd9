//! Editor Chart Generator Library
//!
//! Scaffolds a Helm "editor chart" for a single Kubernetes resource type,
//! using the resource's descriptor and OpenAPI v3 schema from a registry of
//! known resources.

pub mod cli;
pub mod config;
pub mod utils;

pub use config::{Config, OutputConfig, RegistryConfig};
pub use editor_chart_generator::{
    chart_name, generate_simple_editor_chart, is_crd, safe_group_name, ChartError,
    GeneratedChart,
};
pub use editor_chart_registry::{
    DirectoryRegistry, GroupVersionResource, InMemoryRegistry, RegistryError,
    ResourceDescriptor, ResourceId, ResourceRegistry, ResourceScope,
};

use std::path::Path;
use tracing::info;

/// Main application context: configuration plus the registry it points at
pub struct EditorChartGen {
    config: Config,
    registry: DirectoryRegistry,
}

impl EditorChartGen {
    /// Create a new instance, indexing every configured registry path
    pub fn new(config: Config) -> EditorChartGenResult<Self> {
        config
            .validate()
            .map_err(|e| EditorChartGenError::Config(e.to_string()))?;

        let registry = DirectoryRegistry::load(&config.registry.paths)?;
        info!(
            "Loaded {} resource descriptors from {:?}",
            registry.len(),
            config.registry.paths
        );

        Ok(Self { config, registry })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &DirectoryRegistry {
        &self.registry
    }

    /// Generate the editor chart for `gvr`, into `chart_dir` or the configured directory
    pub fn generate(
        &self,
        gvr: &GroupVersionResource,
        chart_dir: Option<&Path>,
    ) -> EditorChartGenResult<GeneratedChart> {
        let chart_dir = chart_dir.unwrap_or(&self.config.output.chart_dir);
        Ok(generate_simple_editor_chart(chart_dir, gvr, &self.registry)?)
    }

    /// GVRs known to the loaded registry
    pub fn resources(&self) -> Vec<GroupVersionResource> {
        self.registry.resources()
    }
}

/// Application error types
#[derive(thiserror::Error, Debug)]
pub enum EditorChartGenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Chart generation failed: {0}")]
    Chart(#[from] ChartError),
}

/// Result type for the main application
pub type EditorChartGenResult<T> = Result<T, EditorChartGenError>;
