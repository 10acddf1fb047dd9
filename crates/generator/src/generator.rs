//! Editor chart generation pipeline

use crate::crd::{build_crd, is_crd};
use crate::doc::DocInfo;
use crate::error::{ChartError, ChartResult};
use crate::metadata::ChartMetadata;
use crate::naming::chart_name;
use crate::result::GeneratedChart;
use crate::templates::{notes, HELMIGNORE};
use crate::values::SimpleValue;
use editor_chart_registry::{GroupVersionResource, ResourceRegistry};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::JSONSchemaProps;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Scaffold the editor chart for `gvr` below `chart_dir`.
///
/// The descriptor is resolved before anything touches the file system, so an
/// unknown GVR leaves `chart_dir` untouched. Any later failure aborts the run
/// and leaves already written files in place. Reruns overwrite every file.
pub fn generate_simple_editor_chart(
    chart_dir: &Path,
    gvr: &GroupVersionResource,
    registry: &dyn ResourceRegistry,
) -> ChartResult<GeneratedChart> {
    let rd = registry.load_by_gvr(gvr)?;
    let resource = rd.resource();

    let name = chart_name(&resource.group, &resource.kind);
    let chart_path = chart_dir.join(&name);
    info!("Generating chart {} for {}", name, gvr);

    let templates_dir = chart_path.join("templates");
    create_dir(&templates_dir)?;
    let crds_dir = chart_path.join("crds");
    create_dir(&crds_dir)?;

    let mut chart = GeneratedChart {
        chart_name: name.clone(),
        chart_path: chart_path.clone(),
        files: Vec::new(),
        crd_path: None,
    };

    let filename = chart_path.join("Chart.yaml");
    write_yaml(&filename, &ChartMetadata::for_chart(&name))?;
    chart.files.push(filename);

    if is_crd(&gvr.group) {
        let filename = crds_dir.join(format!("{}_{}.yaml", gvr.group, gvr.resource));
        write_yaml(&filename, &build_crd(gvr, &rd))?;
        chart.files.push(filename.clone());
        chart.crd_path = Some(filename);
    } else {
        debug!("{} is not a CRD group, skipping CRD manifest", gvr.group);
    }

    let filename = chart_path.join(".helmignore");
    write_file(&filename, HELMIGNORE)?;
    chart.files.push(filename);

    let filename = templates_dir.join("NOTES.txt");
    write_file(&filename, &notes(gvr, &resource.kind))?;
    chart.files.push(filename);

    let filename = chart_path.join("values.openapiv3_schema.yaml");
    match rd.openapi_v3_schema() {
        Some(schema) => write_yaml(&filename, schema)?,
        None => write_yaml(&filename, &JSONSchemaProps::default())?,
    }
    chart.files.push(filename);

    let filename = chart_path.join("values.yaml");
    write_yaml(&filename, &SimpleValue::for_resource(resource))?;
    chart.files.push(filename);

    let filename = chart_path.join("doc.yaml");
    write_yaml(&filename, &DocInfo::for_chart(&name, &resource.kind))?;
    chart.files.push(filename);

    info!(
        "Wrote {} files to {}",
        chart.files_generated(),
        chart_path.display()
    );
    Ok(chart)
}

fn create_dir(path: &Path) -> ChartResult<()> {
    std::fs::create_dir_all(path).map_err(|source| ChartError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_yaml<T: Serialize + ?Sized>(path: &Path, value: &T) -> ChartResult<()> {
    let data = serde_yaml::to_string(value).map_err(|source| ChartError::Marshal {
        path: path.to_path_buf(),
        source,
    })?;
    write_file(path, &data)
}

fn write_file(path: &Path, data: &str) -> ChartResult<()> {
    debug!("Writing {}", path.display());
    std::fs::write(path, data).map_err(|source| ChartError::Io {
        path: PathBuf::from(path),
        source,
    })
}
