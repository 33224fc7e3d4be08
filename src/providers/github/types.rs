use serde::Deserialize;

/// Job within a GitHub Actions workflow run.
///
/// Timestamps are kept as the raw strings the API returned; all parsing
/// happens in [`crate::timing`] so a malformed value surfaces as a
/// `MalformedTimestamp` fault instead of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowJob {
    /// When the job started
    pub started_at: String,
    /// When the job completed
    pub completed_at: String,
    /// Steps in this job
    pub steps: Vec<WorkflowStep>,
}

/// Step within a GitHub Actions job.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowStep {
    /// Name of the step
    pub name: String,
    /// When the step started
    pub started_at: String,
    /// When the step completed
    pub completed_at: String,
}

/// Links for GitHub resources.
pub mod links {
    /// Generate URL for a workflow run.
    pub fn workflow_run_url(repo_path: &str, run_id: u64) -> String {
        format!("https://github.com/{repo_path}/actions/runs/{run_id}")
    }
}
