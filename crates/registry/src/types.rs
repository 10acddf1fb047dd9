//! Resource descriptor types

use crate::gvr::GroupVersionResource;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinition, CustomResourceValidation, JSONSchemaProps,
};
use serde::{Deserialize, Serialize};

pub const RESOURCE_DESCRIPTOR_KIND: &str = "ResourceDescriptor";
pub const RESOURCE_DESCRIPTOR_API_VERSION: &str = "meta.k8s.appscode.com/v1alpha1";

/// Whether instances of a resource live in a namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceScope {
    Namespaced,
    Cluster,
}

impl ResourceScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceScope::Namespaced => "Namespaced",
            ResourceScope::Cluster => "Cluster",
        }
    }
}

/// Names and scope of a resource type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceId {
    #[serde(default)]
    pub group: String,
    pub version: String,

    /// Plural resource name
    pub name: String,
    pub kind: String,
    pub scope: ResourceScope,
}

impl ResourceId {
    pub fn gvr(&self) -> GroupVersionResource {
        GroupVersionResource::new(&self.group, &self.version, &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptorSpec {
    pub resource: ResourceId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<CustomResourceValidation>,
}

/// Resource metadata plus its OpenAPI v3 validation schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub api_version: String,
    pub kind: String,
    pub spec: ResourceDescriptorSpec,
}

impl ResourceDescriptor {
    pub fn new(resource: ResourceId, validation: Option<CustomResourceValidation>) -> Self {
        Self {
            api_version: RESOURCE_DESCRIPTOR_API_VERSION.to_string(),
            kind: RESOURCE_DESCRIPTOR_KIND.to_string(),
            spec: ResourceDescriptorSpec {
                resource,
                validation,
            },
        }
    }

    pub fn resource(&self) -> &ResourceId {
        &self.spec.resource
    }

    pub fn gvr(&self) -> GroupVersionResource {
        self.spec.resource.gvr()
    }

    pub fn validation(&self) -> Option<&CustomResourceValidation> {
        self.spec.validation.as_ref()
    }

    pub fn openapi_v3_schema(&self) -> Option<&JSONSchemaProps> {
        self.spec
            .validation
            .as_ref()
            .and_then(|v| v.open_api_v3_schema.as_ref())
    }

    /// One descriptor per version declared by a CRD
    pub fn from_crd(crd: &CustomResourceDefinition) -> Vec<Self> {
        let scope = if crd.spec.scope == "Cluster" {
            ResourceScope::Cluster
        } else {
            ResourceScope::Namespaced
        };

        crd.spec
            .versions
            .iter()
            .map(|version| {
                Self::new(
                    ResourceId {
                        group: crd.spec.group.clone(),
                        version: version.name.clone(),
                        name: crd.spec.names.plural.clone(),
                        kind: crd.spec.names.kind.clone(),
                        scope,
                    },
                    version.schema.clone(),
                )
            })
            .collect()
    }
}
