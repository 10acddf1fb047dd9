//! Helm editor chart generation for a single Kubernetes resource type

pub mod crd;
pub mod doc;
pub mod error;
pub mod generator;
pub mod metadata;
pub mod naming;
pub mod result;
pub mod templates;
pub mod values;

pub use crd::{build_crd, is_crd, needs_api_approval};
pub use doc::DocInfo;
pub use error::ChartError;
pub use generator::generate_simple_editor_chart;
pub use metadata::ChartMetadata;
pub use naming::{chart_name, safe_group_name};
pub use result::GeneratedChart;
pub use values::SimpleValue;

/// Version stamped on every generated chart
pub const CHART_VERSION: &str = "v0.1.0";
