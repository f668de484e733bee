use std::process::Command as ProcessCommand;

use anyhow::{bail, Context, Result};

use crate::{
    argument_aggregator::ArgumentAggregator,
    cli::RunArgs,
    commands::{settings, Command},
    minicover::runner::MiniCoverRunner,
};

pub struct RunCommand<'a> {
    args: &'a RunArgs,
    arg_aggregator: &'a ArgumentAggregator,
}

impl<'a> RunCommand<'a> {
    pub fn new(args: &'a RunArgs, arg_aggregator: &'a ArgumentAggregator) -> Self {
        Self {
            args,
            arg_aggregator,
        }
    }

    fn run_test_command(test_command: &[String]) -> Result<()> {
        println!("[*] Running test command: {}", test_command.join(" "));
        let status = ProcessCommand::new(&test_command[0])
            .args(&test_command[1..])
            .status()
            .with_context(|| format!("Failed to launch test command '{}'", test_command[0]))?;

        if !status.success() {
            bail!("Test command failed (exit: {status})");
        }
        Ok(())
    }
}

impl Command for RunCommand<'_> {
    fn execute(&self) -> Result<()> {
        let merged = self.arg_aggregator.merge_run_args(self.args)?;

        let test_command = merged
            .test_command
            .clone()
            .filter(|command| !command.is_empty());
        let Some(test_command) = test_command else {
            bail!("No test command given. Pass one after '--' or set [test] command in the config");
        };

        let cfg = settings::apply_report(
            settings::apply_instrument(settings::base_settings(&merged.common), &merged.instrument),
            &merged.report,
            &merged.coveralls,
        )?;

        let runner = MiniCoverRunner::new(cfg)?;
        runner.run(|| Self::run_test_command(&test_command))?;
        println!("[+] Coverage cycle completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_test_command_fails_before_tool_lookup() {
        let aggregator = ArgumentAggregator::new();
        let args = RunArgs::default();

        let err = RunCommand::new(&args, &aggregator).execute().unwrap_err();
        assert!(err.to_string().contains("No test command"));
    }
}
