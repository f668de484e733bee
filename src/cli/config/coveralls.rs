use serde::Deserialize;

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(default)]
pub struct CoverallsConfig {
    /// Git root path
    pub root_path: Option<String>,
    /// service_job_id to send to coveralls
    pub service_job_id: Option<String>,
    /// service_name to send to coveralls
    pub service_name: Option<String>,
    /// Repo token used when publishing coverage
    pub repo_token: Option<String>,
    /// Git commit hash
    pub commit: Option<String>,
    /// Git commit message
    pub commit_message: Option<String>,
    /// Commit author name
    pub commit_author_name: Option<String>,
    /// Commit author email
    pub commit_author_email: Option<String>,
    /// Committer name
    pub committer_name: Option<String>,
    /// Committer email
    pub committer_email: Option<String>,
    /// Git branch
    pub branch: Option<String>,
    /// Git remote name
    pub remote: Option<String>,
    /// Git remote URL
    pub remote_url: Option<String>,
}
