use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::CiDeltaError;

use super::github::types::WorkflowJob;

/// Provider backed by archived GitHub API responses on disk.
///
/// The archive is a JSON array of entries, each holding one run's raw
/// `.../actions/runs/{id}/jobs` response:
///
/// ```json
/// [
///   { "name": "test-baseline", "run_id": 16666952853, "data": { "jobs": [ ... ] } }
/// ]
/// ```
///
/// Lookups are by run id, same as the live provider, so the two are
/// interchangeable from the extraction layer's point of view.
pub struct ArchiveProvider {
    jobs: HashMap<u64, WorkflowJob>,
}

#[derive(Deserialize)]
struct ArchiveEntry {
    run_id: u64,
    data: ArchiveRunData,
}

#[derive(Deserialize)]
struct ArchiveRunData {
    jobs: Vec<WorkflowJob>,
}

impl ArchiveProvider {
    /// Load an archive file, keeping each run's first job.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read archive file: {}", path.display()))?;

        let entries: Vec<ArchiveEntry> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse archive file: {}", path.display()))?;

        log::info!(
            "Loaded {} archived runs from {}",
            entries.len(),
            path.display()
        );

        let jobs = entries
            .into_iter()
            .filter_map(|entry| {
                let job = entry.data.jobs.into_iter().next();
                if job.is_none() {
                    log::warn!("Archived run {} contains no jobs, skipping", entry.run_id);
                }
                job.map(|job| (entry.run_id, job))
            })
            .collect();

        Ok(Self { jobs })
    }

    /// Look up the job for one archived run.
    pub fn fetch_run(&self, run_id: u64) -> Result<WorkflowJob> {
        self.jobs.get(&run_id).cloned().ok_or_else(|| {
            CiDeltaError::Provider(format!("run {run_id} is not present in the archive")).into()
        })
    }
}
