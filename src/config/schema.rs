use serde::{Deserialize, Serialize};

pub const DEFAULT_NAMES_SOURCE: &str = "names.txt";
pub const DEFAULT_TICK_RATE_MS: u64 = 80;

/// Application configuration.
///
/// Example YAML:
/// ```yaml
/// names_source: https://example.com/class-3b.json
/// tick_rate_ms: 80
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name list loaded at startup and by the reload key: a path or an
    /// http(s) URL. `.json` selects the JSON array format.
    #[serde(default = "default_names_source")]
    pub names_source: String,

    /// UI tick interval; bounds how long a score pulse stays visible
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_names_source() -> String {
    DEFAULT_NAMES_SOURCE.to_string()
}

fn default_tick_rate_ms() -> u64 {
    DEFAULT_TICK_RATE_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            names_source: default_names_source(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
