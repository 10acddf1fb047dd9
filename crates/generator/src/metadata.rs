//! Chart.yaml

use crate::CHART_VERSION;
use serde::{Deserialize, Serialize};

const CHART_API_VERSION: &str = "v2";
const CHART_HOME: &str = "https://byte.builders";
const CHART_ICON: &str =
    "https://cdn.appscode.com/images/products/bytebuilders/bytebuilders-512x512.png";
const CHART_DESCRIPTION: &str = "Ui Wizard Chart";
const CHART_KUBE_VERSION: &str = ">= 1.14.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maintainer {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Helm chart metadata as written to `Chart.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMetadata {
    pub api_version: String,
    pub name: String,
    pub version: String,
    pub app_version: String,
    pub description: String,

    #[serde(rename = "type")]
    pub chart_type: String,

    pub home: String,
    pub icon: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maintainers: Vec<Maintainer>,

    pub kube_version: String,
}

impl ChartMetadata {
    pub fn for_chart(chart_name: &str) -> Self {
        Self {
            api_version: CHART_API_VERSION.to_string(),
            name: chart_name.to_string(),
            version: CHART_VERSION.to_string(),
            app_version: CHART_VERSION.to_string(),
            description: CHART_DESCRIPTION.to_string(),
            chart_type: "application".to_string(),
            home: CHART_HOME.to_string(),
            icon: CHART_ICON.to_string(),
            keywords: vec!["appscode".to_string()],
            maintainers: vec![Maintainer {
                name: "appscode".to_string(),
                email: Some("support@appscode.com".to_string()),
            }],
            kube_version: CHART_KUBE_VERSION.to_string(),
        }
    }
}
