//! In-memory registry

use crate::{GroupVersionResource, RegistryError, ResourceDescriptor, ResourceRegistry};
use std::collections::HashMap;

/// Registry backed by a map held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    descriptors: HashMap<GroupVersionResource, ResourceDescriptor>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor, returning the one it replaced if any
    pub fn register(&mut self, descriptor: ResourceDescriptor) -> Option<ResourceDescriptor> {
        self.descriptors.insert(descriptor.gvr(), descriptor)
    }

    pub fn with_descriptor(mut self, descriptor: ResourceDescriptor) -> Self {
        self.register(descriptor);
        self
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl ResourceRegistry for InMemoryRegistry {
    fn load_by_gvr(&self, gvr: &GroupVersionResource) -> Result<ResourceDescriptor, RegistryError> {
        self.descriptors
            .get(gvr)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(gvr.clone()))
    }

    fn resources(&self) -> Vec<GroupVersionResource> {
        let mut gvrs: Vec<_> = self.descriptors.keys().cloned().collect();
        gvrs.sort();
        gvrs
    }
}
