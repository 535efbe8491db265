pub mod config;
pub mod loader;
pub mod logging;
pub mod output;
pub mod prefs;
pub mod roster;
pub mod stderr_buffer;
pub mod tui;
