//! Seed object written to values.yaml

use editor_chart_registry::{ResourceId, ResourceScope};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::Serialize;

const DEFAULT_NAMESPACE: &str = "default";

/// Minimal instance of a resource
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleValue {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
}

impl SimpleValue {
    pub fn for_resource(resource: &ResourceId) -> Self {
        let namespace = match resource.scope {
            ResourceScope::Namespaced => Some(DEFAULT_NAMESPACE.to_string()),
            ResourceScope::Cluster => None,
        };

        Self {
            api_version: resource.gvr().api_version(),
            kind: resource.kind.clone(),
            metadata: ObjectMeta {
                name: Some(resource.kind.to_lowercase()),
                namespace,
                ..Default::default()
            },
        }
    }
}
