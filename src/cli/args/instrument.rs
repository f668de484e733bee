use clap::Args;

use super::CommonArgs;

/// Glob and file-name options for the instrument step
#[derive(Args, Clone, Debug, Default)]
pub struct InstrumentOpts {
    /// Glob patterns for assemblies to instrument
    #[arg(short, long = "assemblies", help = "Glob pattern for assemblies to instrument")]
    pub assemblies: Vec<String>,

    /// Glob patterns for assemblies to leave uninstrumented
    #[arg(long, help = "Glob pattern for assemblies to exclude from instrumentation")]
    pub exclude_assemblies: Vec<String>,

    /// Glob patterns for source files to measure
    #[arg(short, long = "sources", help = "Glob pattern for source files to cover")]
    pub sources: Vec<String>,

    /// Glob patterns for source files to ignore
    #[arg(long, help = "Glob pattern for source files to exclude from coverage")]
    pub exclude_sources: Vec<String>,

    /// Name of the coverage hits file
    #[arg(long, help = "Name of the coverage hits file")]
    pub hits_file: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
pub struct InstrumentArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub opts: InstrumentOpts,
}
