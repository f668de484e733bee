use serde::Deserialize;

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(default)]
pub struct ToolConfig {
    /// Path to the minicover binary
    pub path: Option<String>,
    /// Working directory passed to minicover
    pub workdir: Option<String>,
    /// Name of the aggregated coverage data file
    pub coverage_file: Option<String>,
}
