use clap::{Parser, Subcommand};

pub mod args;
pub mod config;
mod constants;

pub use args::{
    CommonArgs, CoverallsOpts, InstrumentArgs, InstrumentOpts, ReportArgs, ReportOpts, RunArgs,
};
pub use config::{
    Config, ConfigMerge, CoverallsConfig, InstrumentConfig, ReportConfig, TestConfig, ToolConfig,
};
pub use constants::{DEFAULT_CONFIG, MINICOVER_BIN, MINICOVER_PATH_ENV};

/// Command-line interface for the MiniCover Coverage Cycle Runner
#[derive(Parser, Debug, Clone)]
#[command(name = "MiniCover Coverage Cycle Runner")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Available subcommands
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Instrument assemblies to gather coverage data
    Instrument(InstrumentArgs),
    /// Clear coverage hits recorded by earlier runs
    Reset(CommonArgs),
    /// Restore the assemblies that were instrumented for coverage
    Uninstrument(CommonArgs),
    /// Generate one or more coverage reports
    Report(ReportArgs),
    /// Run the full coverage cycle around a test command
    Run(RunArgs),
}
