use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;

use crate::auth::Token;

use super::types::WorkflowJob;

/// GitHub API client for fetching workflow job data.
#[derive(Clone, Debug)]
pub struct GitHubClient {
    /// HTTP client
    client: reqwest::Client,
    /// Base URL for GitHub API
    base_url: String,
    /// Repository owner
    owner: String,
    /// Repository name
    repo: String,
}

impl GitHubClient {
    /// Create a new GitHub API client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - GitHub API base URL (e.g., "https://api.github.com")
    /// * `owner` - Repository owner/organization
    /// * `repo` - Repository name
    /// * `token` - Optional GitHub personal access token
    pub fn new(
        base_url: String,
        owner: String,
        repo: String,
        token: Option<Token>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("cidelta/0.2"));

        if let Some(token) = token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
                    .context("Token contains characters not valid in a header")?,
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            owner,
            repo,
        })
    }

    /// Fetch the jobs of a single workflow run.
    ///
    /// # Returns
    ///
    /// The jobs in the order the API lists them; completed runs in this tool's
    /// scope always contain exactly one.
    pub async fn fetch_jobs_for_run(&self, run_id: u64) -> Result<Vec<WorkflowJob>> {
        let url = format!(
            "{}/repos/{}/{}/actions/runs/{}/jobs",
            self.base_url, self.owner, self.repo, run_id
        );

        log::debug!("GET {url}");

        let response: WorkflowJobsResponse = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch workflow jobs")?
            .error_for_status()
            .context("GitHub API rejected the jobs request")?
            .json()
            .await
            .context("Failed to parse workflow jobs response")?;

        Ok(response.jobs)
    }
}

/// Response from GitHub API for workflow jobs.
#[derive(Deserialize)]
struct WorkflowJobsResponse {
    jobs: Vec<WorkflowJob>,
}
