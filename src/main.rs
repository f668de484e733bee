use anyhow::Result;
use clap::Parser;
use minicover_runner::argument_aggregator::ArgumentAggregator;
use minicover_runner::cli::{Cli, Commands};
use minicover_runner::commands::{
    instrument::InstrumentCommand, report::ReportCommand, reset::ResetCommand, run::RunCommand,
    uninstrument::UninstrumentCommand, Command,
};

fn main() -> Result<()> {
    let cli_args = Cli::parse();
    let mut arg_aggregator = ArgumentAggregator::new();

    // Load config based on command
    match &cli_args.cmd {
        Commands::Instrument(args) => arg_aggregator.load(args.common.config.as_ref()),
        Commands::Reset(args) | Commands::Uninstrument(args) => {
            arg_aggregator.load(args.config.as_ref())
        }
        Commands::Report(args) => arg_aggregator.load(args.common.config.as_ref()),
        Commands::Run(args) => arg_aggregator.load(args.common.config.as_ref()),
    }?;

    // Execute command
    match &cli_args.cmd {
        Commands::Instrument(args) => InstrumentCommand::new(args, &arg_aggregator).execute(),
        Commands::Reset(args) => ResetCommand::new(args, &arg_aggregator).execute(),
        Commands::Uninstrument(args) => UninstrumentCommand::new(args, &arg_aggregator).execute(),
        Commands::Report(args) => ReportCommand::new(args, &arg_aggregator).execute(),
        Commands::Run(args) => RunCommand::new(args, &arg_aggregator).execute(),
    }
}
