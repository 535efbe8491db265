use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Persisted theme flag. Stored as `"oscuro"` / `"claro"` so files written
/// by the browser version's `localStorage` value are understood as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    #[serde(rename = "oscuro")]
    Dark,
    #[serde(rename = "claro")]
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Label for the toggle control: names the mode it switches to
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Light mode",
            ThemeMode::Light => "Dark mode",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, rename = "tema", skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,
}

/// Get the default preferences file path (~/.config/roster-tally/prefs.json)
pub fn get_prefs_path() -> PathBuf {
    crate::config::get_config_dir().join("prefs.json")
}

/// Load preferences. A missing file yields defaults.
pub fn load_preferences(path: &Path) -> Result<Preferences> {
    if !path.exists() {
        return Ok(Preferences::default());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open preferences at {}", path.display()))?;

    let prefs: Preferences =
        serde_json::from_reader(file).context("Failed to parse preferences")?;

    Ok(prefs)
}

/// Save preferences atomically, creating the parent directory if needed
pub fn save_preferences(path: &Path, prefs: &Preferences) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, prefs).context("Failed to serialize preferences")?;

    file.commit().context("Failed to save preferences")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = load_preferences(&dir.path().join("prefs.json")).unwrap();
        assert_eq!(prefs.theme, None);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let prefs = Preferences {
            theme: Some(ThemeMode::Light),
        };
        save_preferences(&path, &prefs).unwrap();

        assert_eq!(load_preferences(&path).unwrap(), prefs);
    }

    #[test]
    fn test_theme_serialized_with_stored_flag_values() {
        let prefs = Preferences {
            theme: Some(ThemeMode::Dark),
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json, r#"{"tema":"oscuro"}"#);

        let parsed: Preferences = serde_json::from_str(r#"{"tema":"claro"}"#).unwrap();
        assert_eq!(parsed.theme, Some(ThemeMode::Light));
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(load_preferences(&path).is_err());
    }

    #[test]
    fn test_toggle_flips_mode() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle_label(), "Light mode");
    }
}
