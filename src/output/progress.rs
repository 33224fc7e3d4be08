use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use super::styling::{bright_green, bright_yellow};

/// Spinner shown on stderr while run data is fetched.
pub struct FetchProgress {
    pb: ProgressBar,
    total: usize,
}

impl FetchProgress {
    pub fn start(total: usize) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("  {msg} {spinner}")
                .unwrap(),
        );
        pb.set_message(bright_yellow(format!("Fetching job data for {total} runs")).to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        Self { pb, total }
    }

    pub fn on_run(&self, label: &str) {
        self.pb
            .set_message(bright_yellow(format!("Fetching run '{label}'")).to_string());
    }

    pub fn finish(self) {
        self.pb.finish_with_message(
            bright_green(format!("Fetched job data for {} runs ✓", self.total)).to_string(),
        );
        eprintln!();
    }
}
