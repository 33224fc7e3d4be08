use chrono::{DateTime, Utc};

use crate::error::{CiDeltaError, Result};
use crate::providers::github::types::{WorkflowJob, WorkflowStep};

/// Parses an ISO 8601 timestamp as emitted by the GitHub Actions API.
///
/// A literal `Z` zone designator is rewritten to `+00:00` before parsing, so
/// both `2025-08-01T05:16:21Z` and `2025-08-01T05:16:21+00:00` are accepted.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let normalized = s.replace('Z', "+00:00");
    DateTime::parse_from_rfc3339(&normalized)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|_| CiDeltaError::MalformedTimestamp(s.to_owned()))
}

/// Whole seconds elapsed between two timestamps.
///
/// The result is negative when `end` precedes `start`; callers must treat
/// that as a data-integrity fault rather than report it.
pub fn duration_seconds(start: &str, end: &str) -> Result<i64> {
    Ok((parse_timestamp(end)? - parse_timestamp(start)?).num_seconds())
}

/// Finds a step by exact, case-sensitive name match.
///
/// Step names are the only semantic handle the API exposes, so a renamed step
/// silently stops matching. When a name appears more than once the first
/// occurrence wins.
pub fn find_step<'a>(steps: &'a [WorkflowStep], name: &str) -> Option<&'a WorkflowStep> {
    steps.iter().find(|step| step.name == name)
}

/// Duration of the named step, or `0` when the job has no such step.
///
/// Absent steps are expected: run variants legitimately omit optional steps
/// (a caching step, an extra install step), and their totals must still sum.
pub fn step_duration(steps: &[WorkflowStep], name: &str) -> Result<i64> {
    let Some(step) = find_step(steps, name) else {
        return Ok(0);
    };
    checked_duration(&step.started_at, &step.completed_at)
}

/// Duration of the whole job, from job start to job completion.
pub fn job_duration(job: &WorkflowJob) -> Result<i64> {
    checked_duration(&job.started_at, &job.completed_at)
}

fn checked_duration(start: &str, end: &str) -> Result<i64> {
    let seconds = duration_seconds(start, end)?;
    if seconds < 0 {
        return Err(CiDeltaError::InvalidDurationOrdering {
            start: start.to_owned(),
            end: end.to_owned(),
        });
    }
    Ok(seconds)
}

/// The three durations a report cares about, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationSet {
    pub test_seconds: i64,
    pub build_seconds: i64,
    pub total_seconds: i64,
}

impl DurationSet {
    /// Derives the duration set for one job given the configured step names.
    pub fn from_job(job: &WorkflowJob, test_step: &str, build_step: &str) -> Result<Self> {
        Ok(Self {
            test_seconds: step_duration(&job.steps, test_step)?,
            build_seconds: step_duration(&job.steps, build_step)?,
            total_seconds: job_duration(job)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(name: &str, started_at: &str, completed_at: &str) -> WorkflowStep {
        WorkflowStep {
            name: name.to_owned(),
            started_at: started_at.to_owned(),
            completed_at: completed_at.to_owned(),
        }
    }

    /// Step list of the test-baseline run (16666952853).
    fn baseline_steps() -> Vec<WorkflowStep> {
        vec![
            step("Set up job", "2025-08-01T05:16:37Z", "2025-08-01T05:16:38Z"),
            step("Checkout code", "2025-08-01T05:16:38Z", "2025-08-01T05:16:56Z"),
            step("Run tests", "2025-08-01T05:18:06Z", "2025-08-01T05:33:17Z"),
            step(
                "Build Zed (release)",
                "2025-08-01T05:33:17Z",
                "2025-08-01T05:44:57Z",
            ),
        ]
    }

    fn baseline_job() -> WorkflowJob {
        WorkflowJob {
            started_at: "2025-08-01T05:16:21Z".to_owned(),
            completed_at: "2025-08-01T05:44:59Z".to_owned(),
            steps: baseline_steps(),
        }
    }

    #[cfg(test)]
    mod parse_timestamp {
        use super::*;

        #[test]
        fn accepts_zulu_suffix() {
            let instant = parse_timestamp("2025-08-01T05:16:21Z").unwrap();
            assert_eq!(instant.to_rfc3339(), "2025-08-01T05:16:21+00:00");
        }

        #[test]
        fn accepts_explicit_offset() {
            let zulu = parse_timestamp("2025-08-01T05:16:21Z").unwrap();
            let offset = parse_timestamp("2025-08-01T05:16:21+00:00").unwrap();
            assert_eq!(zulu, offset);
        }

        #[test]
        fn rejects_garbage() {
            let err = parse_timestamp("yesterday at noon").unwrap_err();
            assert!(matches!(err, CiDeltaError::MalformedTimestamp(_)));
        }

        #[test]
        fn rejects_date_without_time() {
            assert!(parse_timestamp("2025-08-01").is_err());
        }
    }

    #[cfg(test)]
    mod duration_seconds {
        use super::*;

        #[test]
        fn zero_for_identical_instants() {
            let seconds =
                duration_seconds("2025-08-01T05:16:21Z", "2025-08-01T05:16:21Z").unwrap();
            assert_eq!(seconds, 0);
        }

        #[test]
        fn counts_whole_seconds() {
            let seconds =
                duration_seconds("2025-08-01T05:18:06Z", "2025-08-01T05:33:17Z").unwrap();
            assert_eq!(seconds, 911);
        }

        #[test]
        fn negative_when_end_precedes_start() {
            let seconds =
                duration_seconds("2025-08-01T05:33:17Z", "2025-08-01T05:18:06Z").unwrap();
            assert_eq!(seconds, -911);
        }

        #[test]
        fn propagates_malformed_timestamp() {
            assert!(duration_seconds("not-a-time", "2025-08-01T05:16:21Z").is_err());
        }
    }

    #[cfg(test)]
    mod find_step {
        use super::*;

        #[test]
        fn matches_exact_name() {
            let steps = baseline_steps();
            let found = find_step(&steps, "Run tests").unwrap();
            assert_eq!(found.started_at, "2025-08-01T05:18:06Z");
        }

        #[test]
        fn match_is_case_sensitive() {
            let steps = baseline_steps();
            assert!(find_step(&steps, "run tests").is_none());
        }

        #[test]
        fn does_not_trim_whitespace() {
            let steps = baseline_steps();
            assert!(find_step(&steps, " Run tests").is_none());
        }

        #[test]
        fn first_occurrence_wins_for_duplicate_names() {
            let steps = vec![
                step("Run tests", "2025-08-01T05:00:00Z", "2025-08-01T05:01:00Z"),
                step("Run tests", "2025-08-01T06:00:00Z", "2025-08-01T06:05:00Z"),
            ];
            let found = find_step(&steps, "Run tests").unwrap();
            assert_eq!(found.started_at, "2025-08-01T05:00:00Z");
        }
    }

    #[cfg(test)]
    mod step_duration {
        use super::*;

        #[test]
        fn measures_test_step() {
            let seconds = step_duration(&baseline_steps(), "Run tests").unwrap();
            assert_eq!(seconds, 911);
        }

        #[test]
        fn measures_build_step() {
            let seconds = step_duration(&baseline_steps(), "Build Zed (release)").unwrap();
            assert_eq!(seconds, 700);
        }

        #[test]
        fn zero_for_missing_step() {
            let seconds = step_duration(&baseline_steps(), "Cache cargo dependencies").unwrap();
            assert_eq!(seconds, 0);
        }

        #[test]
        fn inverted_step_is_a_fault() {
            let steps = vec![step(
                "Run tests",
                "2025-08-01T05:33:17Z",
                "2025-08-01T05:18:06Z",
            )];
            let err = step_duration(&steps, "Run tests").unwrap_err();
            assert!(matches!(err, CiDeltaError::InvalidDurationOrdering { .. }));
        }
    }

    #[cfg(test)]
    mod job_duration {
        use super::*;

        #[test]
        fn measures_start_to_completion() {
            assert_eq!(job_duration(&baseline_job()).unwrap(), 1718);
        }

        #[test]
        fn inverted_job_is_a_fault() {
            let mut job = baseline_job();
            job.completed_at = "2025-08-01T05:00:00Z".to_owned();
            assert!(job_duration(&job).is_err());
        }
    }

    #[cfg(test)]
    mod duration_set {
        use super::*;

        #[test]
        fn derives_all_three_metrics() {
            let durations =
                DurationSet::from_job(&baseline_job(), "Run tests", "Build Zed (release)")
                    .unwrap();
            assert_eq!(
                durations,
                DurationSet {
                    test_seconds: 911,
                    build_seconds: 700,
                    total_seconds: 1718,
                }
            );
        }

        #[test]
        fn missing_named_steps_yield_zeros() {
            let durations =
                DurationSet::from_job(&baseline_job(), "Run nextest", "Build (cranelift)")
                    .unwrap();
            assert_eq!(durations.test_seconds, 0);
            assert_eq!(durations.build_seconds, 0);
            assert_eq!(durations.total_seconds, 1718);
        }
    }
}
