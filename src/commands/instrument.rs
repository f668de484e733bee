use crate::{
    argument_aggregator::ArgumentAggregator,
    cli::InstrumentArgs,
    commands::{settings, Command},
    minicover::runner::MiniCoverRunner,
};
use anyhow::Result;

pub struct InstrumentCommand<'a> {
    args: &'a InstrumentArgs,
    arg_aggregator: &'a ArgumentAggregator,
}

impl<'a> InstrumentCommand<'a> {
    pub fn new(args: &'a InstrumentArgs, arg_aggregator: &'a ArgumentAggregator) -> Self {
        Self {
            args,
            arg_aggregator,
        }
    }
}

impl Command for InstrumentCommand<'_> {
    fn execute(&self) -> Result<()> {
        let merged = self.arg_aggregator.merge_instrument_args(self.args)?;
        let cfg = settings::apply_instrument(settings::base_settings(&merged.common), &merged.opts);
        MiniCoverRunner::new(cfg)?.instrument()
    }
}
