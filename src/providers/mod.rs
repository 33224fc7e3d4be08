mod archive;
pub mod github;

pub use archive::ArchiveProvider;
pub use github::GitHubProvider;

use anyhow::Result;

use github::types::WorkflowJob;

/// Source of run timing data, selected by CLI configuration.
///
/// Both variants answer the same question — "give me the job of run N" — so
/// the extraction and reporting layers never know whether the data came from
/// the live API or an archive file.
pub enum RunDataProvider {
    GitHub(GitHubProvider),
    Archive(ArchiveProvider),
}

impl RunDataProvider {
    pub async fn fetch_run(&self, run_id: u64) -> Result<WorkflowJob> {
        match self {
            Self::GitHub(provider) => provider.fetch_run(run_id).await,
            Self::Archive(provider) => provider.fetch_run(run_id),
        }
    }
}
