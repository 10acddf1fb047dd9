//! Chart generation errors

use editor_chart_registry::RegistryError;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    Lookup(#[from] RegistryError),

    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to marshal {path:?}: {source}")]
    Marshal {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type ChartResult<T> = Result<T, ChartError>;
