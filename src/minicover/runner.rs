use std::path::PathBuf;
use std::process::Command;

use anyhow::{bail, Context, Result};

use crate::minicover::cmd::ToolCmd;
use crate::minicover::cmd_gen;
use crate::minicover::settings::MiniCoverSettings;
use crate::utils::system::find_tool_binary;

/// Sequences minicover invocations for one coverage cycle.
///
/// Fully synchronous; every step blocks until its external process exits, and
/// each invocation is attempted exactly once.
pub struct MiniCoverRunner {
    tool: PathBuf,
    settings: MiniCoverSettings,
}

impl MiniCoverRunner {
    /// Creates a runner, resolving the external binary before any process is
    /// launched
    ///
    /// # Errors
    /// * If the minicover binary cannot be located
    pub fn new(settings: MiniCoverSettings) -> Result<Self> {
        let tool = find_tool_binary(settings.tool_path.as_deref())?;
        Ok(Self { tool, settings })
    }

    /// Instrument assemblies to gather coverage data
    ///
    /// # Errors
    /// * If the invocation fails to launch or exits with a non-zero status
    pub fn instrument(&self) -> Result<()> {
        self.exec(&cmd_gen::instrument(&self.settings))
    }

    /// Clear coverage hits recorded by earlier runs
    ///
    /// # Errors
    /// * If the invocation fails to launch or exits with a non-zero status
    pub fn reset(&self) -> Result<()> {
        self.exec(&cmd_gen::reset(&self.settings))
    }

    /// Restore the assemblies that were instrumented for coverage
    ///
    /// # Errors
    /// * If the invocation fails to launch or exits with a non-zero status
    pub fn uninstrument(&self) -> Result<()> {
        self.exec(&cmd_gen::uninstrument(&self.settings))
    }

    /// Generate every requested report, one invocation per kind, dispatched
    /// in declaration order
    ///
    /// # Errors
    /// * If a report invocation fails and the threshold is fatal
    pub fn report(&self) -> Result<()> {
        for kind in self.settings.report_types.iter() {
            self.exec_report(&cmd_gen::report(&self.settings, kind))?;
        }
        Ok(())
    }

    /// Generate a report through a provider without dedicated settings
    ///
    /// # Errors
    /// * If the invocation fails and the threshold is fatal
    pub fn custom_report(&self, provider: &str, extra_args: &[String]) -> Result<()> {
        self.exec_report(&cmd_gen::custom_report(&self.settings, provider, extra_args))
    }

    /// Run the full coverage cycle: instrument, reset, test, uninstrument,
    /// report.
    ///
    /// A failing test action aborts immediately; uninstrument and report
    /// generation are not attempted in that path.
    ///
    /// # Errors
    /// * If any step or the test action fails
    pub fn run<F>(&self, test_action: F) -> Result<()>
    where
        F: FnOnce() -> Result<()>,
    {
        self.instrument()?;
        self.reset()?;
        test_action()?;
        self.uninstrument()?;
        self.report()
    }

    /// Runs a report invocation under the threshold failure policy.
    ///
    /// A non-zero exit may mean coverage below the threshold or a genuine
    /// tool crash; the exit status does not distinguish the two.
    fn exec_report(&self, cmd: &ToolCmd) -> Result<()> {
        match self.exec(cmd) {
            Err(e) if self.settings.non_fatal_threshold => {
                eprintln!(
                    "[!] {} failed: {e}. Threshold is non-fatal, continuing",
                    cmd.subcommand()
                );
                Ok(())
            }
            other => other,
        }
    }

    fn exec(&self, cmd: &ToolCmd) -> Result<()> {
        println!("[*] Running: {} {}", self.tool.display(), cmd.assemble());
        let status = Command::new(&self.tool)
            .args(cmd.args())
            .status()
            .with_context(|| format!("Failed to launch {}", self.tool.display()))?;

        if !status.success() {
            bail!("minicover {} failed (exit: {status})", cmd.subcommand());
        }
        Ok(())
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use crate::minicover::report::ReportKind;
    use anyhow::bail;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    /// Writes a fake minicover that logs each invocation's argv and fails for
    /// the given subcommands
    fn fake_tool(dir: &Path, fail_subcommands: &[&str]) -> PathBuf {
        let log = dir.join("calls.log");
        let tool = dir.join("fake_minicover");

        let mut script = format!("#!/bin/sh\necho \"$@\" >> \"{}\"\n", log.display());
        for subcommand in fail_subcommands {
            script.push_str(&format!("[ \"$1\" = \"{subcommand}\" ] && exit 3\n"));
        }
        script.push_str("exit 0\n");

        fs::write(&tool, script).unwrap();
        let mut perms = fs::metadata(&tool).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&tool, perms).unwrap();
        tool
    }

    fn logged_subcommands(dir: &Path) -> Vec<String> {
        fs::read_to_string(dir.join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(|line| line.split_whitespace().next().unwrap_or_default().to_string())
            .collect()
    }

    fn make_runner(dir: &Path, settings: MiniCoverSettings, fail: &[&str]) -> MiniCoverRunner {
        MiniCoverRunner::new(settings.with_tool_path(fake_tool(dir, fail))).unwrap()
    }

    #[test]
    fn test_missing_tool_fails_before_any_invocation() {
        let settings = MiniCoverSettings::new().with_tool_path("/nonexistent/minicover");
        assert!(MiniCoverRunner::new(settings).is_err());
    }

    #[test]
    fn test_full_run_sequences_all_steps() {
        let dir = TempDir::new().unwrap();
        let runner = make_runner(dir.path(), MiniCoverSettings::new(), &[]);

        runner.run(|| Ok(())).unwrap();
        assert_eq!(
            logged_subcommands(dir.path()),
            vec!["instrument", "reset", "uninstrument", "report"]
        );
    }

    #[test]
    fn test_failing_test_action_stops_pipeline() {
        let dir = TempDir::new().unwrap();
        let runner = make_runner(dir.path(), MiniCoverSettings::new(), &[]);

        assert!(runner.run(|| bail!("tests failed")).is_err());
        assert_eq!(logged_subcommands(dir.path()), vec!["instrument", "reset"]);
    }

    #[test]
    fn test_failing_reset_aborts_run() {
        let dir = TempDir::new().unwrap();
        let runner = make_runner(dir.path(), MiniCoverSettings::new(), &["reset"]);

        assert!(runner.run(|| Ok(())).is_err());
        assert_eq!(logged_subcommands(dir.path()), vec!["instrument", "reset"]);
    }

    #[test]
    fn test_report_failure_is_fatal_by_default() {
        let dir = TempDir::new().unwrap();
        let runner = make_runner(dir.path(), MiniCoverSettings::new(), &["report"]);

        assert!(runner.report().is_err());
    }

    #[test]
    fn test_non_fatal_threshold_swallows_report_failure() {
        let dir = TempDir::new().unwrap();
        let settings = MiniCoverSettings::new()
            .generate_report(ReportKind::Console | ReportKind::Html)
            .with_non_fatal_threshold();
        let runner = make_runner(dir.path(), settings, &["report"]);

        runner.report().unwrap();
        // the failing console report does not prevent the html report
        assert_eq!(logged_subcommands(dir.path()), vec!["report", "htmlreport"]);
    }

    #[test]
    fn test_non_fatal_threshold_does_not_mask_other_steps() {
        let dir = TempDir::new().unwrap();
        let settings = MiniCoverSettings::new().with_non_fatal_threshold();
        let runner = make_runner(dir.path(), settings, &["instrument"]);

        assert!(runner.instrument().is_err());
    }

    #[test]
    fn test_each_requested_kind_invoked_independently() {
        let dir = TempDir::new().unwrap();
        let settings =
            MiniCoverSettings::new().generate_report(ReportKind::Console | ReportKind::OpenCover);
        let runner = make_runner(dir.path(), settings, &[]);

        runner.report().unwrap();
        assert_eq!(
            logged_subcommands(dir.path()),
            vec!["report", "opencoverreport"]
        );
    }

    #[test]
    fn test_custom_report_honors_threshold_policy() {
        let dir = TempDir::new().unwrap();
        let runner = make_runner(dir.path(), MiniCoverSettings::new(), &["lcovreport"]);
        assert!(runner.custom_report("lcovreport", &[]).is_err());

        let dir = TempDir::new().unwrap();
        let settings = MiniCoverSettings::new().with_non_fatal_threshold();
        let runner = make_runner(dir.path(), settings, &["lcovreport"]);
        runner.custom_report("lcovreport", &[]).unwrap();
    }
}
