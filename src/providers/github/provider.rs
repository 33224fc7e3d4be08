use anyhow::{Context, Result};
use std::sync::Arc;

use crate::auth::Token;
use crate::error::CiDeltaError;

use super::client::GitHubClient;
use super::types::WorkflowJob;

/// Provider that fetches run timing data live from the GitHub Actions API.
#[derive(Debug)]
pub struct GitHubProvider {
    /// GitHub API client
    client: Arc<GitHubClient>,
    /// Repository owner
    owner: String,
    /// Repository name
    repo: String,
}

impl GitHubProvider {
    /// Create a new GitHub Actions provider.
    ///
    /// # Arguments
    ///
    /// * `base_url` - GitHub API base URL
    /// * `repo_path` - Repository path in format "owner/repo"
    /// * `token` - Optional GitHub personal access token
    pub fn new(base_url: String, repo_path: String, token: Option<Token>) -> Result<Self> {
        let parts: Vec<&str> = repo_path.split('/').collect();
        if parts.len() != 2 {
            anyhow::bail!("Repository path must be in format 'owner/repo'");
        }

        let owner = parts[0].to_string();
        let repo = parts[1].to_string();

        let client = GitHubClient::new(base_url, owner.clone(), repo.clone(), token)?;

        Ok(Self {
            client: Arc::new(client),
            owner,
            repo,
        })
    }

    /// Fetch the single job of one workflow run.
    ///
    /// Multi-job runs are out of scope; the first job is the run's job.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the run has no jobs at
    /// all (a run that never started, or a bad run id).
    pub async fn fetch_run(&self, run_id: u64) -> Result<WorkflowJob> {
        log::info!(
            "Fetching jobs for run {} of {}/{}",
            run_id,
            self.owner,
            self.repo
        );

        let jobs = self
            .client
            .fetch_jobs_for_run(run_id)
            .await
            .with_context(|| format!("Failed to fetch run {run_id}"))?;

        jobs.into_iter().next().ok_or_else(|| {
            CiDeltaError::Provider(format!("run {run_id} contains no jobs")).into()
        })
    }
}
