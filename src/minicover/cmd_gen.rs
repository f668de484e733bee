//! Builds minicover argument lists from a settings value.
//!
//! Every builder is a pure function of its inputs: no I/O, no validation, no
//! failure paths. Emission order is fixed: subcommand, working directory,
//! command-specific flags.

use std::collections::BTreeSet;

use crate::minicover::cmd::ToolCmd;
use crate::minicover::coveralls::CoverallsSettings;
use crate::minicover::report::ReportKind;
use crate::minicover::settings::MiniCoverSettings;

/// Builds the `instrument` invocation.
///
/// Glob pairs keep includes before excludes and assemblies before sources.
pub fn instrument(settings: &MiniCoverSettings) -> ToolCmd {
    let mut cmd = common("instrument", settings);
    push_globs(&mut cmd, "--assemblies", &settings.assembly_include_patterns);
    push_globs(
        &mut cmd,
        "--exclude-assemblies",
        &settings.assembly_exclude_patterns,
    );
    push_globs(&mut cmd, "--sources", &settings.source_include_patterns);
    push_globs(
        &mut cmd,
        "--exclude-sources",
        &settings.source_exclude_patterns,
    );

    if !settings.hits_file.is_empty() {
        cmd.push_pair("--hits-file", &settings.hits_file);
    }
    push_coverage_file(&mut cmd, settings);
    cmd
}

/// Builds the `reset` invocation
pub fn reset(settings: &MiniCoverSettings) -> ToolCmd {
    let mut cmd = common("reset", settings);
    push_coverage_file(&mut cmd, settings);
    cmd
}

/// Builds the `uninstrument` invocation
pub fn uninstrument(settings: &MiniCoverSettings) -> ToolCmd {
    let mut cmd = common("uninstrument", settings);
    push_coverage_file(&mut cmd, settings);
    cmd
}

/// Builds the report invocation for one kind
pub fn report(settings: &MiniCoverSettings, kind: ReportKind) -> ToolCmd {
    let meta = kind.metadata();
    let mut cmd = common(meta.subcommand, settings);
    push_coverage_file(&mut cmd, settings);

    if meta.supports_threshold {
        push_threshold(&mut cmd, settings);
    }

    if let Some(suffix) = meta.output_suffix {
        if !settings.report_prefix.is_empty() {
            cmd.push_pair("--output", format!("{}{suffix}", settings.report_prefix));
        }
    }

    if kind == ReportKind::Coveralls {
        if let Some(coveralls) = &settings.coveralls {
            push_coveralls_fields(&mut cmd, coveralls);
        }
    }
    cmd
}

/// Builds an invocation for a report provider without dedicated settings
pub fn custom_report(
    settings: &MiniCoverSettings,
    provider: &str,
    extra_args: &[String],
) -> ToolCmd {
    let mut cmd = common(provider, settings);
    push_coverage_file(&mut cmd, settings);
    push_threshold(&mut cmd, settings);
    for arg in extra_args {
        cmd.push(arg);
    }
    cmd
}

fn common(subcommand: &str, settings: &MiniCoverSettings) -> ToolCmd {
    let mut cmd = ToolCmd::new(subcommand);
    if let Some(workdir) = &settings.workdir {
        cmd.push_pair("--workdir", workdir.display().to_string());
    }
    cmd
}

fn push_coverage_file(cmd: &mut ToolCmd, settings: &MiniCoverSettings) {
    if !settings.coverage_file.is_empty() {
        cmd.push_pair("--coverage-file", &settings.coverage_file);
    }
}

fn push_threshold(cmd: &mut ToolCmd, settings: &MiniCoverSettings) {
    cmd.push_pair(
        "--threshold",
        format!("{:.2}", settings.clamped_threshold()),
    );
}

fn push_globs(cmd: &mut ToolCmd, flag: &str, globs: &BTreeSet<String>) {
    for glob in globs {
        cmd.push_pair(flag, glob);
    }
}

fn push_coveralls_fields(cmd: &mut ToolCmd, coveralls: &CoverallsSettings) {
    push_opt(cmd, "--root-path", &coveralls.root_path);
    push_opt(cmd, "--service-job-id", &coveralls.service_job_id);
    push_opt(cmd, "--service-name", &coveralls.service_name);
    push_secret_opt(cmd, "--repo-token", &coveralls.repo_token);
    push_opt(cmd, "--commit", &coveralls.commit);
    push_opt(cmd, "--commit-message", &coveralls.commit_message);
    push_opt(cmd, "--commit-author-name", &coveralls.commit_author_name);
    push_opt(cmd, "--commit-author-email", &coveralls.commit_author_email);
    push_opt(cmd, "--committer-name", &coveralls.committer_name);
    push_opt(cmd, "--committer-email", &coveralls.committer_email);
    push_opt(cmd, "--branch", &coveralls.branch);
    push_opt(cmd, "--remote", &coveralls.remote);
    push_opt(cmd, "--remote-url", &coveralls.remote_url);
}

fn push_opt(cmd: &mut ToolCmd, flag: &str, value: &Option<String>) {
    if let Some(value) = value {
        cmd.push_pair(flag, value);
    }
}

fn push_secret_opt(cmd: &mut ToolCmd, flag: &str, value: &Option<String>) {
    if let Some(value) = value {
        cmd.push_secret_pair(flag, value);
    }
}
