//! CustomResourceDefinition classification and construction

use editor_chart_registry::{GroupVersionResource, ResourceDescriptor};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinition, CustomResourceDefinitionNames, CustomResourceDefinitionSpec,
    CustomResourceDefinitionVersion,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

const APPLICATION_GROUP: &str = "app.k8s.io";
const API_APPROVAL_ANNOTATION: &str = "api-approved.kubernetes.io";
const API_APPROVAL_URL: &str = "https://github.com/kubernetes-sigs/application/pull/2";

/// Guess whether `group` is served by a CRD rather than a built-in or aggregated API.
///
/// Imperfect: any CRD group under `.k8s.io` or `.kubernetes.io` other than
/// `app.k8s.io` is reported as built-in.
pub fn is_crd(group: &str) -> bool {
    if group == APPLICATION_GROUP {
        return true;
    }
    group.contains('.')
        && !group.is_empty()
        && !group.ends_with(".k8s.io")
        && !group.ends_with(".kubernetes.io")
}

/// Groups owned by the Kubernetes project need an approval annotation on their CRDs
pub fn needs_api_approval(group: &str) -> bool {
    group.ends_with(".k8s.io") || group.ends_with("kubernetes.io")
}

/// CRD serving `rd` as its single served and stored version
pub fn build_crd(gvr: &GroupVersionResource, rd: &ResourceDescriptor) -> CustomResourceDefinition {
    let resource = rd.resource();

    let annotations = needs_api_approval(&gvr.group).then(|| {
        BTreeMap::from([(
            API_APPROVAL_ANNOTATION.to_string(),
            API_APPROVAL_URL.to_string(),
        )])
    });

    CustomResourceDefinition {
        metadata: ObjectMeta {
            name: Some(format!("{}.{}", gvr.resource, gvr.group)),
            annotations,
            ..Default::default()
        },
        spec: CustomResourceDefinitionSpec {
            group: gvr.group.clone(),
            names: CustomResourceDefinitionNames {
                plural: resource.name.clone(),
                singular: Some(resource.kind.to_lowercase()),
                kind: resource.kind.clone(),
                list_kind: Some(format!("{}List", resource.kind)),
                ..Default::default()
            },
            scope: resource.scope.as_str().to_string(),
            versions: vec![CustomResourceDefinitionVersion {
                name: resource.version.clone(),
                served: true,
                storage: true,
                schema: rd.validation().cloned(),
                ..Default::default()
            }],
            preserve_unknown_fields: Some(false),
            ..Default::default()
        },
        status: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use editor_chart_registry::{ResourceId, ResourceScope};
    use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
        CustomResourceValidation, JSONSchemaProps,
    };

    fn descriptor(group: &str, scope: ResourceScope) -> ResourceDescriptor {
        ResourceDescriptor::new(
            ResourceId {
                group: group.to_string(),
                version: "v1beta1".to_string(),
                name: "applications".to_string(),
                kind: "Application".to_string(),
                scope,
            },
            Some(CustomResourceValidation {
                open_api_v3_schema: Some(JSONSchemaProps {
                    type_: Some("object".to_string()),
                    ..Default::default()
                }),
            }),
        )
    }

    #[test]
    fn test_is_crd() {
        assert!(is_crd("app.k8s.io"));
        assert!(is_crd("example.io"));
        assert!(is_crd("kubedb.com"));
        assert!(!is_crd("apps"));
        assert!(!is_crd(""));
        assert!(!is_crd("example.k8s.io"));
        assert!(!is_crd("networking.k8s.io"));
        assert!(!is_crd("metrics.kubernetes.io"));
    }

    #[test]
    fn test_needs_api_approval() {
        assert!(needs_api_approval("app.k8s.io"));
        assert!(needs_api_approval("node.kubernetes.io"));
        assert!(!needs_api_approval("example.io"));
    }

    #[test]
    fn test_build_crd() {
        let gvr = GroupVersionResource::new("example.io", "v1beta1", "applications");
        let crd = build_crd(&gvr, &descriptor("example.io", ResourceScope::Cluster));

        assert_eq!(crd.metadata.name.as_deref(), Some("applications.example.io"));
        assert!(crd.metadata.annotations.is_none());
        assert_eq!(crd.spec.group, "example.io");
        assert_eq!(crd.spec.scope, "Cluster");
        assert_eq!(crd.spec.names.plural, "applications");
        assert_eq!(crd.spec.names.singular.as_deref(), Some("application"));
        assert_eq!(crd.spec.names.list_kind.as_deref(), Some("ApplicationList"));
        assert_eq!(crd.spec.preserve_unknown_fields, Some(false));

        assert_eq!(crd.spec.versions.len(), 1);
        let version = &crd.spec.versions[0];
        assert_eq!(version.name, "v1beta1");
        assert!(version.served && version.storage);
        assert!(version.schema.is_some());
    }

    #[test]
    fn test_build_crd_with_api_approval() {
        let gvr = GroupVersionResource::new("app.k8s.io", "v1beta1", "applications");
        let crd = build_crd(&gvr, &descriptor("app.k8s.io", ResourceScope::Namespaced));

        let annotations = crd.metadata.annotations.unwrap();
        assert_eq!(
            annotations.get("api-approved.kubernetes.io").map(String::as_str),
            Some("https://github.com/kubernetes-sigs/application/pull/2")
        );
    }

    #[test]
    fn test_crd_yaml_has_type_meta() {
        let gvr = GroupVersionResource::new("example.io", "v1beta1", "applications");
        let crd = build_crd(&gvr, &descriptor("example.io", ResourceScope::Namespaced));

        let yaml: serde_yaml::Value =
            serde_yaml::from_str(&serde_yaml::to_string(&crd).unwrap()).unwrap();
        assert_eq!(yaml["apiVersion"].as_str(), Some("apiextensions.k8s.io/v1"));
        assert_eq!(yaml["kind"].as_str(), Some("CustomResourceDefinition"));
        assert_eq!(
            yaml["spec"]["versions"][0]["schema"]["openAPIV3Schema"]["type"].as_str(),
            Some("object")
        );
    }
}
