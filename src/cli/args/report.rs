use clap::{ArgAction, Args};

use super::CommonArgs;
use crate::minicover::report::ReportKind;

/// Report selection and threshold options
#[derive(Args, Clone, Debug, Default)]
pub struct ReportOpts {
    /// Report kinds to generate
    #[clap(value_enum)]
    #[arg(short, long = "report", help = "Report kind to generate (repeatable)")]
    pub report: Vec<ReportKind>,

    /// Prefix for report output files and directories
    #[arg(long, help = "Prefix for report output files and directories")]
    pub report_prefix: Option<String>,

    /// Coverage percentage below which report generation fails
    #[arg(short, long, help = "Coverage percentage below which reporting fails")]
    pub threshold: Option<f32>,

    /// Log a warning instead of failing when coverage is below the threshold
    #[arg(long, help = "Do not fail when coverage is below the threshold", action = ArgAction::SetTrue)]
    pub non_fatal_threshold: bool,
}

/// Fields forwarded to the coveralls report provider
#[derive(Args, Clone, Debug, Default)]
pub struct CoverallsOpts {
    /// Git root path
    #[arg(long, help = "Git root path to send to coveralls")]
    pub root_path: Option<String>,

    /// service_job_id to send to coveralls
    #[arg(long, help = "service_job_id to send to coveralls")]
    pub service_job_id: Option<String>,

    /// service_name to send to coveralls
    #[arg(long, help = "service_name to send to coveralls")]
    pub service_name: Option<String>,

    /// Repo token used when publishing coverage
    #[arg(long, help = "Repo token for publishing to coveralls")]
    pub repo_token: Option<String>,

    /// Git commit hash
    #[arg(long, help = "Git commit hash to send to coveralls")]
    pub commit: Option<String>,

    /// Git commit message
    #[arg(long, help = "Git commit message to send to coveralls")]
    pub commit_message: Option<String>,

    /// Commit author name
    #[arg(long, help = "Commit author name to send to coveralls")]
    pub commit_author_name: Option<String>,

    /// Commit author email
    #[arg(long, help = "Commit author email to send to coveralls")]
    pub commit_author_email: Option<String>,

    /// Committer name
    #[arg(long, help = "Committer name to send to coveralls")]
    pub committer_name: Option<String>,

    /// Committer email
    #[arg(long, help = "Committer email to send to coveralls")]
    pub committer_email: Option<String>,

    /// Git branch
    #[arg(long, help = "Git branch to send to coveralls")]
    pub branch: Option<String>,

    /// Git remote name
    #[arg(long, help = "Git remote name to send to coveralls")]
    pub remote: Option<String>,

    /// Git remote URL
    #[arg(long, help = "Git remote URL to send to coveralls")]
    pub remote_url: Option<String>,

    /// Fill the service fields from the Travis CI environment
    #[arg(long, help = "Fill coveralls service fields from the Travis CI environment", action = ArgAction::SetTrue)]
    pub travis: bool,

    /// Report the Travis environment as travis-pro
    #[arg(long, help = "Treat the Travis environment as travis-pro", action = ArgAction::SetTrue)]
    pub travis_pro: bool,
}

impl CoverallsOpts {
    /// Whether any coveralls field or mode was requested
    pub fn any_set(&self) -> bool {
        self.travis
            || self.travis_pro
            || [
                &self.root_path,
                &self.service_job_id,
                &self.service_name,
                &self.repo_token,
                &self.commit,
                &self.commit_message,
                &self.commit_author_name,
                &self.commit_author_email,
                &self.committer_name,
                &self.committer_email,
                &self.branch,
                &self.remote,
                &self.remote_url,
            ]
            .iter()
            .any(|field| field.is_some())
    }
}

#[derive(Args, Clone, Debug, Default)]
pub struct ReportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub opts: ReportOpts,

    #[command(flatten)]
    pub coveralls: CoverallsOpts,

    /// Report provider without dedicated settings
    #[arg(long, help = "Generate a report via a provider without dedicated settings")]
    pub provider: Option<String>,

    /// Extra arguments appended to a --provider invocation
    #[arg(last = true, help = "Extra arguments appended to a --provider invocation")]
    pub extra_args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coveralls_any_set() {
        assert!(!CoverallsOpts::default().any_set());

        let opts = CoverallsOpts {
            repo_token: Some("tok".to_string()),
            ..CoverallsOpts::default()
        };
        assert!(opts.any_set());

        let opts = CoverallsOpts {
            travis: true,
            ..CoverallsOpts::default()
        };
        assert!(opts.any_set());
    }

    #[test]
    fn test_report_args_default() {
        let args = ReportArgs::default();
        assert!(args.opts.report.is_empty());
        assert!(!args.opts.non_fatal_threshold);
        assert!(args.provider.is_none());
        assert!(args.extra_args.is_empty());
    }
}
