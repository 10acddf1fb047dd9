//! doc.yaml: metadata consumed by chart documentation tooling

use crate::CHART_VERSION;
use serde::{Deserialize, Serialize};

const PROJECT_URL: &str = "https://byte.builders";
const REPOSITORY_URL: &str = "https://bundles.bytebuilders.dev/ui/";
const REPOSITORY_NAME: &str = "bytebuilders-ui";
const VALUES_PLACEHOLDER: &str = "-- generate from values file --";
const KUBERNETES_PREREQUISITE: &str = "Kubernetes 1.14+";
const RELEASE_NAMESPACE: &str = "default";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub name: String,
    pub short_name: String,
    pub url: String,
    pub description: String,
    pub app: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInfo {
    pub name: String,
    pub version: String,
    pub values: String,
    pub values_example: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    pub name: String,
    pub namespace: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocInfo {
    pub project: ProjectInfo,
    pub repository: RepositoryInfo,
    pub chart: ChartInfo,
    pub prerequisites: Vec<String>,
    pub release: ReleaseInfo,
}

impl DocInfo {
    pub fn for_chart(chart_name: &str, kind: &str) -> Self {
        let desc = format!("{kind} Editor");

        Self {
            project: ProjectInfo {
                name: format!("{desc} by AppsCode"),
                short_name: desc.clone(),
                url: PROJECT_URL.to_string(),
                description: desc.clone(),
                app: format!("a {desc}"),
            },
            repository: RepositoryInfo {
                url: REPOSITORY_URL.to_string(),
                name: REPOSITORY_NAME.to_string(),
            },
            chart: ChartInfo {
                name: chart_name.to_string(),
                version: CHART_VERSION.to_string(),
                values: VALUES_PLACEHOLDER.to_string(),
                values_example: VALUES_PLACEHOLDER.to_string(),
            },
            prerequisites: vec![KUBERNETES_PREREQUISITE.to_string()],
            release: ReleaseInfo {
                name: chart_name.to_string(),
                namespace: RELEASE_NAMESPACE.to_string(),
            },
        }
    }
}
