//! Lookup of Kubernetes resource descriptors by Group/Version/Resource

pub mod directory;
pub mod error;
pub mod gvr;
pub mod memory;
pub mod types;

pub use directory::DirectoryRegistry;
pub use error::RegistryError;
pub use gvr::GroupVersionResource;
pub use memory::InMemoryRegistry;
pub use types::{ResourceDescriptor, ResourceId, ResourceScope};

/// Source of resource descriptors keyed by GVR
pub trait ResourceRegistry {
    /// Resolve the descriptor for `gvr`, failing with [`RegistryError::NotFound`] when unknown
    fn load_by_gvr(&self, gvr: &GroupVersionResource) -> Result<ResourceDescriptor, RegistryError>;

    /// All GVRs this registry can resolve, sorted
    fn resources(&self) -> Vec<GroupVersionResource>;
}
