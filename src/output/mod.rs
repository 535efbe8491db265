pub mod formatter;

pub use formatter::{format_roster_table, format_tsv, should_use_colors};
