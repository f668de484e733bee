use serde::Deserialize;

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(default)]
pub struct InstrumentConfig {
    /// Glob patterns for assemblies to instrument
    pub assemblies: Option<Vec<String>>,
    /// Glob patterns for assemblies to leave uninstrumented
    pub exclude_assemblies: Option<Vec<String>>,
    /// Glob patterns for source files to measure
    pub sources: Option<Vec<String>>,
    /// Glob patterns for source files to ignore
    pub exclude_sources: Option<Vec<String>>,
    /// Name of the coverage hits file
    pub hits_file: Option<String>,
}
