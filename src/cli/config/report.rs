use serde::Deserialize;

use crate::minicover::report::ReportKind;

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(default)]
pub struct ReportConfig {
    /// Report kinds to generate
    pub types: Option<Vec<ReportKind>>,
    /// Prefix for report output files and directories
    pub prefix: Option<String>,
    /// Coverage percentage below which report generation fails
    pub threshold: Option<f32>,
    /// Log a warning instead of failing when coverage is below the threshold
    pub non_fatal_threshold: Option<bool>,
}
