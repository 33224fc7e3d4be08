mod progress;
mod styling;
mod tables;

pub use progress::FetchProgress;
pub use styling::{dim, magenta_bold};
pub use tables::markdown_table;

/// Prints the `cidelta` banner to stderr.
///
/// Displays the tool name, version, and description at the start of execution.
/// The report itself goes to stdout, so the banner never ends up in a
/// redirected report file.
pub fn print_banner() {
    eprintln!(
        r"
{} {}
  {}
",
        magenta_bold("⏱ cidelta"),
        dim(env!("CARGO_PKG_VERSION")),
        dim("Workflow Timing Analysis Tool")
    );
}
