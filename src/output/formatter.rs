use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::roster::{Score, Tier};

/// Format roster entries one per line: index, score, name.
/// Scores are colored by tier when `use_colors` is set.
pub fn format_roster_table(entries: &[(String, Score)], use_colors: bool) -> String {
    if entries.is_empty() {
        return "No names found.".to_string();
    }

    let index_width = entries.len().to_string().len();

    entries
        .iter()
        .enumerate()
        .map(|(idx, (name, score))| {
            // 1-based index, right-aligned with trailing dot
            let index_str = format!("{:>width$}.", idx + 1, width = index_width);
            let score_str = format!("{:>4}", score.to_string());

            if use_colors {
                let colored = match score.tier() {
                    Tier::Low => score_str.red().to_string(),
                    Tier::Mid => score_str.yellow().to_string(),
                    Tier::High => score_str.green().to_string(),
                };
                format!("{} {}  {}", index_str.dimmed(), colored, name.bold())
            } else {
                format!("{} {}  {}", index_str, score_str, name)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format roster entries as tab-separated values for scripting
/// Columns: name, score (no headers, no colors)
pub fn format_tsv(entries: &[(String, Score)]) -> String {
    entries
        .iter()
        .map(|(name, score)| format!("{}\t{}", name, score))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}
