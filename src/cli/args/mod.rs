mod common;
mod instrument;
mod report;
mod run;

pub use common::CommonArgs;
pub use instrument::{InstrumentArgs, InstrumentOpts};
pub use report::{CoverallsOpts, ReportArgs, ReportOpts};
pub use run::RunArgs;
