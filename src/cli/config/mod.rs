mod coveralls;
mod instrument;
mod report;
mod tool;

pub use coveralls::CoverallsConfig;
pub use instrument::InstrumentConfig;
pub use report::ReportConfig;
pub use test::TestConfig;
pub use tool::ToolConfig;

use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::args::{
    CommonArgs, CoverallsOpts, InstrumentArgs, InstrumentOpts, ReportArgs, ReportOpts, RunArgs,
};

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// External tool configuration
    pub tool: ToolConfig,
    /// Instrumentation configuration
    pub instrument: InstrumentConfig,
    /// Report configuration
    pub report: ReportConfig,
    /// Coveralls configuration
    pub coveralls: CoverallsConfig,
    /// Test command configuration
    pub test: TestConfig,
}

/// Merges config-file values under CLI values; the CLI always wins
pub trait ConfigMerge<T> {
    fn merge_with_config(&self, config: &Config) -> T;
}

impl ConfigMerge<Self> for CommonArgs {
    fn merge_with_config(&self, config: &Config) -> Self {
        let merge_path = |opt: Option<PathBuf>, cfg_str: Option<String>| {
            opt.or_else(|| cfg_str.filter(|p| !p.is_empty()).map(PathBuf::from))
        };

        Self {
            tool_path: merge_path(self.tool_path.clone(), config.tool.path.clone()),
            workdir: merge_path(self.workdir.clone(), config.tool.workdir.clone()),
            coverage_file: self
                .coverage_file
                .clone()
                .or_else(|| config.tool.coverage_file.clone()),
            config: self.config.clone(),
        }
    }
}

impl ConfigMerge<Self> for InstrumentOpts {
    fn merge_with_config(&self, config: &Config) -> Self {
        let merge_globs = |args: &[String], cfg: &Option<Vec<String>>| {
            if args.is_empty() {
                cfg.clone().unwrap_or_default()
            } else {
                args.to_vec()
            }
        };

        Self {
            assemblies: merge_globs(&self.assemblies, &config.instrument.assemblies),
            exclude_assemblies: merge_globs(
                &self.exclude_assemblies,
                &config.instrument.exclude_assemblies,
            ),
            sources: merge_globs(&self.sources, &config.instrument.sources),
            exclude_sources: merge_globs(&self.exclude_sources, &config.instrument.exclude_sources),
            hits_file: self
                .hits_file
                .clone()
                .or_else(|| config.instrument.hits_file.clone()),
        }
    }
}

impl ConfigMerge<Self> for ReportOpts {
    fn merge_with_config(&self, config: &Config) -> Self {
        Self {
            report: if self.report.is_empty() {
                config.report.types.clone().unwrap_or_default()
            } else {
                self.report.clone()
            },
            report_prefix: self
                .report_prefix
                .clone()
                .or_else(|| config.report.prefix.clone()),
            threshold: self.threshold.or(config.report.threshold),
            non_fatal_threshold: self.non_fatal_threshold
                || config.report.non_fatal_threshold.unwrap_or(false),
        }
    }
}

impl ConfigMerge<Self> for CoverallsOpts {
    fn merge_with_config(&self, config: &Config) -> Self {
        let cfg = &config.coveralls;
        Self {
            root_path: self.root_path.clone().or_else(|| cfg.root_path.clone()),
            service_job_id: self
                .service_job_id
                .clone()
                .or_else(|| cfg.service_job_id.clone()),
            service_name: self
                .service_name
                .clone()
                .or_else(|| cfg.service_name.clone()),
            repo_token: self.repo_token.clone().or_else(|| cfg.repo_token.clone()),
            commit: self.commit.clone().or_else(|| cfg.commit.clone()),
            commit_message: self
                .commit_message
                .clone()
                .or_else(|| cfg.commit_message.clone()),
            commit_author_name: self
                .commit_author_name
                .clone()
                .or_else(|| cfg.commit_author_name.clone()),
            commit_author_email: self
                .commit_author_email
                .clone()
                .or_else(|| cfg.commit_author_email.clone()),
            committer_name: self
                .committer_name
                .clone()
                .or_else(|| cfg.committer_name.clone()),
            committer_email: self
                .committer_email
                .clone()
                .or_else(|| cfg.committer_email.clone()),
            branch: self.branch.clone().or_else(|| cfg.branch.clone()),
            remote: self.remote.clone().or_else(|| cfg.remote.clone()),
            remote_url: self.remote_url.clone().or_else(|| cfg.remote_url.clone()),
            travis: self.travis,
            travis_pro: self.travis_pro,
        }
    }
}

impl ConfigMerge<Self> for InstrumentArgs {
    fn merge_with_config(&self, config: &Config) -> Self {
        Self {
            common: self.common.merge_with_config(config),
            opts: self.opts.merge_with_config(config),
        }
    }
}

impl ConfigMerge<Self> for ReportArgs {
    fn merge_with_config(&self, config: &Config) -> Self {
        Self {
            common: self.common.merge_with_config(config),
            opts: self.opts.merge_with_config(config),
            coveralls: self.coveralls.merge_with_config(config),
            provider: self.provider.clone(),
            extra_args: self.extra_args.clone(),
        }
    }
}

impl ConfigMerge<Self> for RunArgs {
    fn merge_with_config(&self, config: &Config) -> Self {
        Self {
            common: self.common.merge_with_config(config),
            instrument: self.instrument.merge_with_config(config),
            report: self.report.merge_with_config(config),
            coveralls: self.coveralls.merge_with_config(config),
            test_command: self
                .test_command
                .clone()
                .or_else(|| config.test.command.clone().filter(|c| !c.is_empty())),
        }
    }
}
