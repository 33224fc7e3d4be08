use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use std::str::FromStr;

use crate::auth::Token;
use crate::output::FetchProgress;
use crate::providers::{ArchiveProvider, GitHubProvider, RunDataProvider};
use crate::report::{self, RunTimings};
use crate::timing::DurationSet;

#[derive(Parser)]
#[command(name = "cidelta")]
#[command(author, version, about = "Workflow Timing Analysis Tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Write the report to a file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare run variants against a baseline run
    Regression {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        steps: StepArgs,

        /// Baseline run, as LABEL=RUN_ID
        #[arg(short, long, value_name = "LABEL=RUN_ID")]
        baseline: RunSpec,

        /// Comparison run, as LABEL=RUN_ID (repeatable)
        #[arg(short, long = "run", value_name = "LABEL=RUN_ID", required = true)]
        runs: Vec<RunSpec>,
    },

    /// Summarize timings for a list of runs
    Timings {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        steps: StepArgs,

        /// Run to include, as LABEL=RUN_ID (repeatable)
        #[arg(short, long = "run", value_name = "LABEL=RUN_ID", required = true)]
        runs: Vec<RunSpec>,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// GitHub personal access token
    #[arg(short, long, env = "GITHUB_TOKEN")]
    token: Option<String>,

    /// GitHub API base URL
    #[arg(long, default_value = "https://api.github.com")]
    base_url: String,

    /// Repository path in 'owner/repo' format
    #[arg(short = 'R', long)]
    repo: Option<String>,

    /// Read archived API responses from a JSON file instead of the API
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,
}

#[derive(Args)]
struct StepArgs {
    /// Name of the step that runs the test suite
    #[arg(long, default_value = "Run tests")]
    test_step: String,

    /// Name of the step that performs the release build
    #[arg(long, default_value = "Build Zed (release)")]
    build_step: String,
}

/// A run to analyze: a human-readable label plus the workflow run id.
#[derive(Debug, Clone)]
pub struct RunSpec {
    pub label: String,
    pub run_id: u64,
}

impl FromStr for RunSpec {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (label, run_id) = s
            .split_once('=')
            .ok_or_else(|| format!("expected LABEL=RUN_ID, got {s:?}"))?;
        if label.is_empty() {
            return Err(format!("run label must not be empty in {s:?}"));
        }
        let run_id = run_id
            .parse()
            .map_err(|_| format!("invalid run id {run_id:?}"))?;
        Ok(Self {
            label: label.to_owned(),
            run_id,
        })
    }
}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Regression {
                source,
                steps,
                baseline,
                runs,
            } => {
                info!(
                    "Building regression report: baseline '{}', {} comparisons",
                    baseline.label,
                    runs.len()
                );

                let provider = build_provider(source)?;
                let progress = FetchProgress::start(1 + runs.len());

                progress.on_run(&baseline.label);
                let baseline = collect_run(&provider, baseline, steps).await?;
                let mut comparisons = Vec::with_capacity(runs.len());
                for spec in runs {
                    progress.on_run(&spec.label);
                    comparisons.push(collect_run(&provider, spec, steps).await?);
                }
                progress.finish();

                let report =
                    report::regression_report(&baseline, &comparisons, source.repo.as_deref());
                self.emit(&report)
            }
            Commands::Timings {
                source,
                steps,
                runs,
            } => {
                info!("Building timing summary for {} runs", runs.len());

                let provider = build_provider(source)?;
                let progress = FetchProgress::start(runs.len());

                let mut timings = Vec::with_capacity(runs.len());
                for spec in runs {
                    progress.on_run(&spec.label);
                    timings.push(collect_run(&provider, spec, steps).await?);
                }
                progress.finish();

                let report = report::timing_report(&timings);
                self.emit(&report)
            }
        }
    }

    fn emit(&self, report: &str) -> Result<()> {
        if let Some(output_path) = &self.output {
            std::fs::write(output_path, report)?;
            info!("Report written to: {}", output_path.display());
        } else {
            println!("{report}");
        }

        Ok(())
    }
}

fn build_provider(source: &SourceArgs) -> Result<RunDataProvider> {
    if let Some(path) = &source.input {
        return Ok(RunDataProvider::Archive(ArchiveProvider::from_path(path)?));
    }

    let repo = source
        .repo
        .as_ref()
        .context("either --repo or --input is required")?;
    let token = source.token.as_deref().map(Token::from);

    Ok(RunDataProvider::GitHub(GitHubProvider::new(
        source.base_url.clone(),
        repo.clone(),
        token,
    )?))
}

async fn collect_run(
    provider: &RunDataProvider,
    spec: &RunSpec,
    steps: &StepArgs,
) -> Result<RunTimings> {
    let job = provider.fetch_run(spec.run_id).await?;
    let durations = DurationSet::from_job(&job, &steps.test_step, &steps.build_step)
        .with_context(|| format!("run '{}' ({})", spec.label, spec.run_id))?;

    Ok(RunTimings {
        label: spec.label.clone(),
        run_id: spec.run_id,
        durations,
    })
}
