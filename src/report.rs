use crate::output::markdown_table;
use crate::providers::github::types::links;
use crate::timing::DurationSet;

/// Measured durations of one run, ready for reporting.
#[derive(Debug, Clone)]
pub struct RunTimings {
    /// Human-readable label, commonly the branch name
    pub label: String,
    /// Workflow run identifier
    pub run_id: u64,
    /// Derived durations
    pub durations: DurationSet,
}

/// Renders seconds as `"<minutes>m <seconds>s"`.
///
/// Pure presentation: the decomposition is integer div/mod, never a float
/// round-trip, so `minutes * 60 + secs` always equals the input.
pub fn format_duration(seconds: i64) -> String {
    format!("{}m {}s", seconds / 60, seconds % 60)
}

/// Percentage change of `value` against `baseline`, rendered for a report.
///
/// A zero baseline has no meaningful percentage; the sentinel string is
/// returned instead of letting the division produce `inf` or `NaN`.
/// Non-negative changes carry an explicit `+` sign.
pub fn percent_change(baseline: i64, value: i64) -> String {
    if baseline == 0 {
        return "not applicable".to_string();
    }
    let change = (value - baseline) as f64 / baseline as f64 * 100.0;
    if change >= 0.0 {
        format!("+{change:.1}%")
    } else {
        format!("{change:.1}%")
    }
}

/// Builds the comparative regression report.
///
/// One section per run in input order (baseline first, without change
/// annotations), then a summary table with one row per comparison. When
/// exactly two comparisons exist — two runs of the same candidate
/// configuration — a consistency check and an average-regression section are
/// appended to separate real regressions from run-to-run noise.
pub fn regression_report(
    baseline: &RunTimings,
    comparisons: &[RunTimings],
    repo_path: Option<&str>,
) -> String {
    let mut out = String::new();

    out.push_str("# GitHub Actions Workflow Performance Analysis\n\n");

    out.push_str(&format!("### {} (baseline)\n", baseline.label));
    push_duration_line(&mut out, "Test duration", baseline.durations.test_seconds);
    push_duration_line(&mut out, "Build duration", baseline.durations.build_seconds);
    push_duration_line(&mut out, "Total duration", baseline.durations.total_seconds);
    push_url_line(&mut out, repo_path, baseline.run_id);
    out.push('\n');

    for run in comparisons {
        out.push_str(&format!("### {}\n", run.label));
        push_change_line(
            &mut out,
            "Test duration",
            baseline.durations.test_seconds,
            run.durations.test_seconds,
        );
        push_change_line(
            &mut out,
            "Build duration",
            baseline.durations.build_seconds,
            run.durations.build_seconds,
        );
        push_change_line(
            &mut out,
            "Total duration",
            baseline.durations.total_seconds,
            run.durations.total_seconds,
        );
        push_url_line(&mut out, repo_path, run.run_id);
        out.push('\n');
    }

    out.push_str("## Summary Table\n\n");
    let mut table = markdown_table(vec![
        "Branch",
        "Test Duration",
        "Test Change",
        "Build Duration",
        "Build Change",
        "Total Duration",
        "Total Change",
    ]);
    for run in comparisons {
        table.add_row(vec![
            run.label.clone(),
            format_duration(run.durations.test_seconds),
            percent_change(baseline.durations.test_seconds, run.durations.test_seconds),
            format_duration(run.durations.build_seconds),
            percent_change(baseline.durations.build_seconds, run.durations.build_seconds),
            format_duration(run.durations.total_seconds),
            percent_change(baseline.durations.total_seconds, run.durations.total_seconds),
        ]);
    }
    out.push_str(&table.to_string());
    out.push('\n');

    if let [first, second] = comparisons {
        out.push('\n');
        push_consistency_check(&mut out, first, second);
        out.push('\n');
        push_average_regression(&mut out, baseline, first, second);
    }

    out
}

/// Builds the tabular timing summary for an arbitrary list of runs.
///
/// No baseline concept here: a summary table followed by a per-run detail
/// section with each duration in both formatted and raw-second form.
pub fn timing_report(runs: &[RunTimings]) -> String {
    let mut out = String::new();

    out.push_str("# GitHub Actions Workflow Timing Analysis\n\n");

    let mut table = markdown_table(vec![
        "Branch",
        "Test Duration",
        "Build Duration",
        "Total Duration",
    ]);
    for run in runs {
        table.add_row(vec![
            run.label.clone(),
            format_duration(run.durations.test_seconds),
            format_duration(run.durations.build_seconds),
            format_duration(run.durations.total_seconds),
        ]);
    }
    out.push_str(&table.to_string());
    out.push_str("\n\n## Detailed Analysis\n\n");

    for run in runs {
        let d = run.durations;
        out.push_str(&format!("### {}\n", run.label));
        out.push_str(&format!("- Run ID: {}\n", run.run_id));
        out.push_str(&format!(
            "- Test Duration: {} ({} seconds)\n",
            format_duration(d.test_seconds),
            d.test_seconds
        ));
        out.push_str(&format!(
            "- Build Duration: {} ({} seconds)\n",
            format_duration(d.build_seconds),
            d.build_seconds
        ));
        out.push_str(&format!(
            "- Total Duration: {} ({} seconds)\n",
            format_duration(d.total_seconds),
            d.total_seconds
        ));
        out.push_str(&format!(
            "- Combined: {} seconds\n\n",
            d.test_seconds + d.build_seconds
        ));
    }

    out
}

fn push_duration_line(out: &mut String, metric: &str, seconds: i64) {
    out.push_str(&format!(
        "- **{}**: {}\n",
        metric,
        format_duration(seconds)
    ));
}

fn push_change_line(out: &mut String, metric: &str, baseline: i64, value: i64) {
    out.push_str(&format!(
        "- **{}**: {} ({} from baseline)\n",
        metric,
        format_duration(value),
        percent_change(baseline, value)
    ));
}

fn push_url_line(out: &mut String, repo_path: Option<&str>, run_id: u64) {
    if let Some(repo_path) = repo_path {
        out.push_str(&format!(
            "- **Workflow URL**: {}\n",
            links::workflow_run_url(repo_path, run_id)
        ));
    }
}

fn push_consistency_check(out: &mut String, first: &RunTimings, second: &RunTimings) {
    out.push_str("## Consistency Check\n\n");
    let rows = [
        ("Test", first.durations.test_seconds, second.durations.test_seconds),
        ("Build", first.durations.build_seconds, second.durations.build_seconds),
        ("Total", first.durations.total_seconds, second.durations.total_seconds),
    ];
    for (metric, a, b) in rows {
        out.push_str(&format!(
            "- {} time difference between runs: {}\n",
            metric,
            format_duration((a - b).abs())
        ));
    }
}

fn push_average_regression(
    out: &mut String,
    baseline: &RunTimings,
    first: &RunTimings,
    second: &RunTimings,
) {
    out.push_str("## Average Regression\n\n");
    let rows = [
        (
            "test",
            baseline.durations.test_seconds,
            first.durations.test_seconds,
            second.durations.test_seconds,
        ),
        (
            "build",
            baseline.durations.build_seconds,
            first.durations.build_seconds,
            second.durations.build_seconds,
        ),
        (
            "total",
            baseline.durations.total_seconds,
            first.durations.total_seconds,
            second.durations.total_seconds,
        ),
    ];
    for (metric, base, a, b) in rows {
        // Truncating mean keeps the whole-seconds invariant
        let mean = (a + b) / 2;
        out.push_str(&format!(
            "- Average {} duration: {} ({} from baseline)\n",
            metric,
            format_duration(mean),
            percent_change(base, mean)
        ));
    }
}
