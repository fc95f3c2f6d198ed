//! Reader for `key=value` solver settings files.
//!
//! The settings format is a plain text file of `key=value` lines, e.g.
//! the `.ini` file shared with the simulation tool:
//!
//! ```text
//! [grid]
//! ktot=64
//! zsize=5.
//! ```
//!
//! Lines without `=` (section headers, blanks) and lines starting with
//! `#` are ignored; unrecognized keys are kept but never consulted. Keys
//! and values are trimmed of surrounding whitespace, and a key appearing
//! twice keeps its last value.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

/// Error type for settings files.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required key was absent
    #[error("missing required key '{key}'")]
    MissingKey { key: String },

    /// A value failed to parse as the requested type
    #[error("invalid value for '{key}' at line {line}: {message}")]
    Parse {
        key: String,
        line: usize,
        message: String,
    },
}

/// Parsed settings: a map from key to raw value.
///
/// Values stay as strings until a typed accessor is called, so a file can
/// carry keys this crate never reads without causing errors.
#[derive(Clone, Debug, Default)]
pub struct Settings {
    /// key -> (raw value, 1-based line number for error context)
    entries: HashMap<String, (String, usize)>,
}

impl Settings {
    /// Parse settings from a string.
    ///
    /// Parsing itself never fails; type errors surface from the typed
    /// accessors, which know which key was being read.
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Key is everything left of the first '='.
            if let Some((key, value)) = line.split_once('=') {
                entries.insert(
                    key.trim().to_string(),
                    (value.trim().to_string(), line_num + 1),
                );
            }
        }

        Self { entries }
    }

    /// Raw value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|(value, _)| value.as_str())
    }

    /// Value for a required integer key.
    ///
    /// # Errors
    /// - [`SettingsError::MissingKey`] if the key is absent
    /// - [`SettingsError::Parse`] if the value is not a non-negative integer
    pub fn get_usize(&self, key: &str) -> Result<usize, SettingsError> {
        let (raw, line) = self.entry(key)?;
        raw.parse().map_err(|_| SettingsError::Parse {
            key: key.to_string(),
            line,
            message: format!("expected an integer, got '{}'", raw),
        })
    }

    /// Value for a required float key.
    ///
    /// # Errors
    /// - [`SettingsError::MissingKey`] if the key is absent
    /// - [`SettingsError::Parse`] if the value is not a float
    pub fn get_f64(&self, key: &str) -> Result<f64, SettingsError> {
        let (raw, line) = self.entry(key)?;
        raw.parse().map_err(|_| SettingsError::Parse {
            key: key.to_string(),
            line,
            message: format!("expected a number, got '{}'", raw),
        })
    }

    /// Number of parsed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries were parsed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, key: &str) -> Result<(&str, usize), SettingsError> {
        self.entries
            .get(key)
            .map(|(value, line)| (value.as_str(), *line))
            .ok_or_else(|| SettingsError::MissingKey {
                key: key.to_string(),
            })
    }
}

/// Read a settings file.
///
/// # Errors
/// [`SettingsError::Io`] if the file cannot be opened or read.
pub fn read_settings_file(path: &Path) -> Result<Settings, SettingsError> {
    let content = std::fs::read_to_string(path)?;
    Ok(Settings::parse(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_simple() {
        let settings = Settings::parse("ktot=64\nzsize=5.");
        assert_eq!(settings.get_usize("ktot").unwrap(), 64);
        assert_eq!(settings.get_f64("zsize").unwrap(), 5.0);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let settings = Settings::parse("  ktot = 64 \n zsize=  3200.0");
        assert_eq!(settings.get_usize("ktot").unwrap(), 64);
        assert_eq!(settings.get_f64("zsize").unwrap(), 3200.0);
    }

    #[test]
    fn test_parse_ignores_sections_comments_and_blanks() {
        let content = r#"
[grid]
# vertical levels
ktot=32

[fields]
zsize=100.0
"#;
        let settings = Settings::parse(content);
        assert_eq!(settings.len(), 2);
        assert_eq!(settings.get_usize("ktot").unwrap(), 32);
    }

    #[test]
    fn test_unrecognized_keys_are_kept_but_harmless() {
        let settings = Settings::parse("swspatialorder=2\nktot=16\nzsize=1.0");
        assert_eq!(settings.get("swspatialorder"), Some("2"));
        assert_eq!(settings.get_usize("ktot").unwrap(), 16);
    }

    #[test]
    fn test_last_value_wins() {
        let settings = Settings::parse("ktot=16\nktot=32");
        assert_eq!(settings.get_usize("ktot").unwrap(), 32);
    }

    #[test]
    fn test_value_keeps_embedded_equals() {
        // Only the first '=' splits key from value.
        let settings = Settings::parse("title=a=b");
        assert_eq!(settings.get("title"), Some("a=b"));
    }

    #[test]
    fn test_missing_key_error() {
        let settings = Settings::parse("zsize=5.");
        let result = settings.get_usize("ktot");
        assert!(matches!(
            result,
            Err(SettingsError::MissingKey { key }) if key == "ktot"
        ));
    }

    #[test]
    fn test_parse_error_reports_line() {
        let settings = Settings::parse("zsize=5.\nktot=twelve");
        let result = settings.get_usize("ktot");
        match result {
            Err(SettingsError::Parse { key, line, .. }) => {
                assert_eq!(key, "ktot");
                assert_eq!(line, 2);
            }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_level_count_rejected() {
        let settings = Settings::parse("ktot=-8");
        assert!(matches!(
            settings.get_usize("ktot"),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn test_read_settings_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "ktot=64").unwrap();
        writeln!(file, "zsize=5.").unwrap();

        let settings = read_settings_file(file.path()).unwrap();
        assert_eq!(settings.get_usize("ktot").unwrap(), 64);
        assert_eq!(settings.get_f64("zsize").unwrap(), 5.0);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let result = read_settings_file(Path::new("no_such_settings.ini"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }
}
