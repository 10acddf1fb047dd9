//! Result of a chart generation run

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GeneratedChart {
    pub chart_name: String,

    /// Root directory of the chart (`<chart-dir>/<chart-name>`)
    pub chart_path: PathBuf,

    /// Files written, in the order they were written
    pub files: Vec<PathBuf>,

    /// Path of the CRD manifest, when the resource was classified as a CRD
    pub crd_path: Option<PathBuf>,
}

impl GeneratedChart {
    pub fn files_generated(&self) -> usize {
        self.files.len()
    }
}
