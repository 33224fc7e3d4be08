use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::Table;

/// Creates a pipe-delimited Markdown table with the given header row.
///
/// Reports are meant to be pasted into issues and PR descriptions, so tables
/// use Markdown syntax rather than the usual box-drawing presets.
pub fn markdown_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN).set_header(header);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_pipe_delimited_markdown() {
        let mut table = markdown_table(vec!["Branch", "Total Duration"]);
        table.add_row(vec!["test-baseline", "28m 38s"]);

        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with('|') && lines[0].contains("Branch"));
        // Header separator row of dashes
        assert!(lines[1].chars().all(|c| c == '|' || c == '-'));
        assert!(lines[2].contains("test-baseline"));
    }
}
