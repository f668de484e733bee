use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::minicover::coveralls::CoverallsSettings;
use crate::minicover::report::ReportTypes;

/// Settings for one full coverage cycle.
///
/// Built via chained `with_*` calls, consumed by the runner and the argument
/// builders. Fields are not validated on assignment; the failure threshold is
/// clamped only when an invocation is assembled.
#[derive(Debug, Clone)]
pub struct MiniCoverSettings {
    /// Glob patterns for assemblies to instrument
    pub assembly_include_patterns: BTreeSet<String>,
    /// Glob patterns for assemblies excluded from instrumentation
    pub assembly_exclude_patterns: BTreeSet<String>,
    /// Glob patterns for source files to measure
    pub source_include_patterns: BTreeSet<String>,
    /// Glob patterns for source files excluded from coverage
    pub source_exclude_patterns: BTreeSet<String>,
    /// File the instrumented assemblies record raw hits into; empty suppresses the flag
    pub hits_file: String,
    /// Aggregated coverage data file; empty suppresses the flag
    pub coverage_file: String,
    /// The report kinds to generate
    pub report_types: ReportTypes,
    /// Prefix for report output files and directories; empty suppresses `--output`
    pub report_prefix: String,
    /// Coverage percentage below which report generation fails
    pub failure_threshold: f32,
    /// Treat a threshold breach as a warning instead of an error
    pub non_fatal_threshold: bool,
    /// Working directory handed to minicover via `--workdir`
    pub workdir: Option<PathBuf>,
    /// Explicit path to the minicover binary
    pub tool_path: Option<PathBuf>,
    /// Settings for the coveralls report kind
    pub coveralls: Option<CoverallsSettings>,
}

impl Default for MiniCoverSettings {
    fn default() -> Self {
        Self {
            assembly_include_patterns: BTreeSet::new(),
            assembly_exclude_patterns: BTreeSet::new(),
            source_include_patterns: BTreeSet::new(),
            source_exclude_patterns: BTreeSet::new(),
            hits_file: "coverage-hits.txt".to_string(),
            coverage_file: "coverage.json".to_string(),
            report_types: ReportTypes::default(),
            report_prefix: "coverage".to_string(),
            failure_threshold: 90.0,
            non_fatal_threshold: false,
            workdir: None,
            tool_path: None,
            coveralls: None,
        }
    }
}

impl MiniCoverSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instrument assemblies matching the given glob pattern
    pub fn with_assemblies_matching(mut self, pattern: impl Into<String>) -> Self {
        self.assembly_include_patterns.insert(pattern.into());
        self
    }

    /// Exclude assemblies matching the given glob pattern from instrumentation
    pub fn without_assemblies_matching(mut self, pattern: impl Into<String>) -> Self {
        self.assembly_exclude_patterns.insert(pattern.into());
        self
    }

    /// Measure coverage on source files matching the given glob pattern
    pub fn with_sources_matching(mut self, pattern: impl Into<String>) -> Self {
        self.source_include_patterns.insert(pattern.into());
        self
    }

    /// Exclude source files matching the given glob pattern from coverage
    pub fn without_sources_matching(mut self, pattern: impl Into<String>) -> Self {
        self.source_exclude_patterns.insert(pattern.into());
        self
    }

    /// Sets the name of the hits file
    pub fn with_hits_file(mut self, hits_file: impl Into<String>) -> Self {
        self.hits_file = hits_file.into();
        self
    }

    /// Sets the name of the aggregated coverage data file
    pub fn with_coverage_file(mut self, coverage_file: impl Into<String>) -> Self {
        self.coverage_file = coverage_file.into();
        self
    }

    /// Sets the report kind or kinds to generate
    pub fn generate_report(mut self, report_types: impl Into<ReportTypes>) -> Self {
        self.report_types = report_types.into();
        self
    }

    /// Sets the prefix for report output files and directories
    pub fn with_report_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.report_prefix = prefix.into();
        self
    }

    /// Sets the coverage percentage below which report generation fails
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.failure_threshold = threshold;
        self
    }

    /// Do not fail when coverage is below the threshold
    pub fn with_non_fatal_threshold(mut self) -> Self {
        self.non_fatal_threshold = true;
        self
    }

    /// Fail when coverage is below the threshold (the default)
    pub fn with_fatal_threshold(mut self) -> Self {
        self.non_fatal_threshold = false;
        self
    }

    /// Sets the working directory passed to minicover
    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(workdir.into());
        self
    }

    /// Sets an explicit path to the minicover binary
    pub fn with_tool_path(mut self, tool_path: impl Into<PathBuf>) -> Self {
        self.tool_path = Some(tool_path.into());
        self
    }

    /// Sets the settings for the coveralls report kind
    pub fn with_coveralls(mut self, coveralls: CoverallsSettings) -> Self {
        self.coveralls = Some(coveralls);
        self
    }

    /// The failure threshold clamped into [0, 100]
    pub fn clamped_threshold(&self) -> f32 {
        self.failure_threshold.clamp(0.0, 100.0)
    }
}
