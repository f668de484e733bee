use std::env;

use anyhow::{bail, Result};

/// Settings for the coveralls report kind.
///
/// Every field is optional; unset fields emit no flags at all.
#[derive(Debug, Clone, Default)]
pub struct CoverallsSettings {
    /// The git root path
    pub root_path: Option<String>,
    /// The service_job_id to send to coveralls
    pub service_job_id: Option<String>,
    /// The service_name to send to coveralls
    pub service_name: Option<String>,
    /// The repo token to use when publishing coverage; redacted in logged invocations
    pub repo_token: Option<String>,
    /// The git commit hash
    pub commit: Option<String>,
    /// The git commit message
    pub commit_message: Option<String>,
    /// Name of the commit author
    pub commit_author_name: Option<String>,
    /// Email of the commit author
    pub commit_author_email: Option<String>,
    /// Name of the committer
    pub committer_name: Option<String>,
    /// Email of the committer
    pub committer_email: Option<String>,
    /// The git branch
    pub branch: Option<String>,
    /// Name of the git remote
    pub remote: Option<String>,
    /// URL of the git remote
    pub remote_url: Option<String>,
}

impl CoverallsSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the git root path
    pub fn with_root_path(mut self, root_path: impl Into<String>) -> Self {
        self.root_path = Some(root_path.into());
        self
    }

    /// Sets the service_job_id to send to coveralls
    pub fn with_service_job_id(mut self, service_job_id: impl Into<String>) -> Self {
        self.service_job_id = Some(service_job_id.into());
        self
    }

    /// Sets the service_name to send to coveralls
    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    /// Sets the repo token to use when publishing coverage
    pub fn with_repo_token(mut self, repo_token: impl Into<String>) -> Self {
        self.repo_token = Some(repo_token.into());
        self
    }

    /// Sets the git commit hash and message
    pub fn with_commit(mut self, hash: impl Into<String>, message: impl Into<String>) -> Self {
        self.commit = Some(hash.into());
        self.commit_message = Some(message.into());
        self
    }

    /// Sets the commit author details
    pub fn with_commit_author(
        mut self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        self.commit_author_name = Some(name.into());
        self.commit_author_email = Some(email.into());
        self
    }

    /// Sets the committer details
    pub fn with_committer(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.committer_name = Some(name.into());
        self.committer_email = Some(email.into());
        self
    }

    /// Sets the git branch
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Sets the git remote details
    pub fn with_remote(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.remote = Some(name.into());
        self.remote_url = Some(url.into());
        self
    }

    /// Fills the service fields from the Travis CI environment
    ///
    /// # Errors
    /// * If the `TRAVIS` environment variable is not set to `true`
    pub fn use_travis_defaults(self, is_pro: bool) -> Result<Self> {
        if env::var("TRAVIS").as_deref() != Ok("true") {
            bail!("Not running on travis-ci");
        }

        let job_id = env::var("TRAVIS_JOB_ID").unwrap_or_default();
        Ok(self
            .with_service_name(if is_pro { "travis-pro" } else { "travis-ci" })
            .with_service_job_id(job_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paired_setters() {
        let settings = CoverallsSettings::new()
            .with_commit("abc123", "fix the build")
            .with_commit_author("Jo Doe", "jo@example.com")
            .with_committer("Sam Roe", "sam@example.com")
            .with_remote("origin", "https://example.com/repo.git");

        assert_eq!(settings.commit.as_deref(), Some("abc123"));
        assert_eq!(settings.commit_message.as_deref(), Some("fix the build"));
        assert_eq!(settings.commit_author_name.as_deref(), Some("Jo Doe"));
        assert_eq!(
            settings.commit_author_email.as_deref(),
            Some("jo@example.com")
        );
        assert_eq!(settings.committer_name.as_deref(), Some("Sam Roe"));
        assert_eq!(settings.committer_email.as_deref(), Some("sam@example.com"));
        assert_eq!(settings.remote.as_deref(), Some("origin"));
        assert_eq!(
            settings.remote_url.as_deref(),
            Some("https://example.com/repo.git")
        );
    }

    #[test]
    fn test_travis_defaults() {
        std::env::remove_var("TRAVIS");
        assert!(CoverallsSettings::new().use_travis_defaults(false).is_err());

        std::env::set_var("TRAVIS", "true");
        std::env::set_var("TRAVIS_JOB_ID", "42");
        let settings = CoverallsSettings::new().use_travis_defaults(false).unwrap();
        assert_eq!(settings.service_name.as_deref(), Some("travis-ci"));
        assert_eq!(settings.service_job_id.as_deref(), Some("42"));

        let pro = CoverallsSettings::new().use_travis_defaults(true).unwrap();
        assert_eq!(pro.service_name.as_deref(), Some("travis-pro"));
        std::env::remove_var("TRAVIS");
        std::env::remove_var("TRAVIS_JOB_ID");
    }
}
