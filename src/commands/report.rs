use crate::{
    argument_aggregator::ArgumentAggregator,
    cli::ReportArgs,
    commands::{settings, Command},
    minicover::runner::MiniCoverRunner,
};
use anyhow::Result;

pub struct ReportCommand<'a> {
    args: &'a ReportArgs,
    arg_aggregator: &'a ArgumentAggregator,
}

impl<'a> ReportCommand<'a> {
    pub fn new(args: &'a ReportArgs, arg_aggregator: &'a ArgumentAggregator) -> Self {
        Self {
            args,
            arg_aggregator,
        }
    }
}

impl Command for ReportCommand<'_> {
    fn execute(&self) -> Result<()> {
        let merged = self.arg_aggregator.merge_report_args(self.args)?;
        let cfg = settings::apply_report(
            settings::base_settings(&merged.common),
            &merged.opts,
            &merged.coveralls,
        )?;

        let runner = MiniCoverRunner::new(cfg)?;
        match &merged.provider {
            Some(provider) => runner.custom_report(provider, &merged.extra_args),
            None => runner.report(),
        }
    }
}
