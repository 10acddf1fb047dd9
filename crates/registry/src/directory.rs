//! Registry loaded from resource descriptor and CRD files on disk

use crate::types::RESOURCE_DESCRIPTOR_KIND;
use crate::{
    GroupVersionResource, InMemoryRegistry, RegistryError, ResourceDescriptor, ResourceRegistry,
};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

const CRD_KIND: &str = "CustomResourceDefinition";

/// Descriptors indexed from every YAML file below a set of directories
#[derive(Debug, Clone, Default)]
pub struct DirectoryRegistry {
    roots: Vec<PathBuf>,
    inner: InMemoryRegistry,
}

impl DirectoryRegistry {
    /// Index all descriptors found below `roots`. Later roots win on duplicate GVRs.
    pub fn load<P: AsRef<Path>>(roots: &[P]) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        for root in roots {
            registry.load_root(root.as_ref())?;
        }
        info!(
            "Indexed {} resource descriptors from {} path(s)",
            registry.inner.len(),
            registry.roots.len()
        );
        Ok(registry)
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn load_root(&mut self, root: &Path) -> Result<(), RegistryError> {
        if !root.exists() {
            return Err(RegistryError::Io {
                path: root.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "registry path does not exist",
                ),
            });
        }

        debug!("Scanning registry path {:?}", root);
        self.roots.push(root.to_path_buf());

        for entry in WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("yaml") | Some("yml") => self.load_file(path)?,
                _ => continue,
            }
        }

        Ok(())
    }

    fn load_file(&mut self, path: &Path) -> Result<(), RegistryError> {
        let content = std::fs::read(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        for document in serde_yaml::Deserializer::from_slice(&content) {
            let doc = match serde_yaml::Value::deserialize(document) {
                Ok(doc) => doc,
                Err(e) => {
                    debug!("Skipping unparseable YAML in {}: {}", path.display(), e);
                    break;
                }
            };

            for descriptor in Self::descriptors_from_document(doc, path)? {
                let gvr = descriptor.gvr();
                if self.inner.register(descriptor).is_some() {
                    warn!("{} redefined by {}", gvr, path.display());
                }
            }
        }

        Ok(())
    }

    fn descriptors_from_document(
        doc: serde_yaml::Value,
        path: &Path,
    ) -> Result<Vec<ResourceDescriptor>, RegistryError> {
        let kind = doc.get("kind").and_then(|k| k.as_str()).unwrap_or_default();

        match kind {
            RESOURCE_DESCRIPTOR_KIND => {
                let descriptor: ResourceDescriptor =
                    serde_yaml::from_value(doc).map_err(|source| RegistryError::Parse {
                        path: path.to_path_buf(),
                        source,
                    })?;
                Ok(vec![descriptor])
            }
            CRD_KIND => match serde_yaml::from_value::<CustomResourceDefinition>(doc) {
                Ok(crd) => Ok(ResourceDescriptor::from_crd(&crd)),
                Err(e) => {
                    // Older apiextensions versions are not indexed
                    debug!("Skipping CRD in {}: {}", path.display(), e);
                    Ok(Vec::new())
                }
            },
            _ => Ok(Vec::new()),
        }
    }
}

impl ResourceRegistry for DirectoryRegistry {
    fn load_by_gvr(&self, gvr: &GroupVersionResource) -> Result<ResourceDescriptor, RegistryError> {
        self.inner.load_by_gvr(gvr)
    }

    fn resources(&self) -> Vec<GroupVersionResource> {
        self.inner.resources()
    }
}
