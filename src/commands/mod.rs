pub mod instrument;
pub mod report;
pub mod reset;
pub mod run;
mod settings;
pub mod uninstrument;

use anyhow::Result;

pub trait Command {
    /// Execute the command
    ///
    /// # Errors
    /// * If the command could not be executed
    fn execute(&self) -> Result<()>;
}
