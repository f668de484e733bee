use clap::Args;

use super::{CommonArgs, CoverallsOpts, InstrumentOpts, ReportOpts};

#[derive(Args, Clone, Debug, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub instrument: InstrumentOpts,

    #[command(flatten)]
    pub report: ReportOpts,

    #[command(flatten)]
    pub coveralls: CoverallsOpts,

    /// Test command executed between reset and uninstrument
    #[arg(
        raw = true,
        help = "Test command to run inside the coverage cycle, e.g. -- dotnet test"
    )]
    pub test_command: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_args_default() {
        let args = RunArgs::default();
        assert!(args.test_command.is_none());
        assert!(args.instrument.assemblies.is_empty());
        assert!(args.report.report.is_empty());
        assert!(!args.report.non_fatal_threshold);
    }
}
