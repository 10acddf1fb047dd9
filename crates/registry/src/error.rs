//! Registry error types

use crate::gvr::GroupVersionResource;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    #[error("resource descriptor not found for {0}")]
    NotFound(GroupVersionResource),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid resource descriptor in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
