use clap::Args;
use std::path::PathBuf;

/// Options shared by every subcommand
#[derive(Args, Clone, Debug, Default)]
pub struct CommonArgs {
    /// Explicit path to the minicover binary
    #[arg(long, help = "Path to the minicover binary")]
    pub tool_path: Option<PathBuf>,

    /// Working directory passed to minicover
    #[arg(short, long, help = "Working directory for minicover (--workdir)")]
    pub workdir: Option<PathBuf>,

    /// Name of the aggregated coverage data file
    #[arg(long, help = "Name of the aggregated coverage data file")]
    pub coverage_file: Option<String>,

    /// Path to a TOML config file
    #[arg(long, help = "Path to TOML config file")]
    pub config: Option<PathBuf>,
}
