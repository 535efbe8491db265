use super::LoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameFormat {
    /// One name per line
    Text,
    /// JSON array of strings
    Json,
}

impl NameFormat {
    /// `.json` selects JSON, anything else is read as text
    pub fn from_location(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        // Ignore a URL query string when looking at the extension
        let path = lower.split(['?', '#']).next().unwrap_or(&lower);
        if path.ends_with(".json") {
            NameFormat::Json
        } else {
            NameFormat::Text
        }
    }
}

/// Extract trimmed, non-empty names from `text`.
///
/// JSON that parses but is not an array yields no names, and so does any
/// non-string element. Fails with [`LoadError::Empty`] when nothing usable
/// remains.
pub fn parse_names(text: &str, format: NameFormat) -> Result<Vec<String>, LoadError> {
    let names: Vec<String> = match format {
        NameFormat::Text => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
        NameFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(text)?;
            match value {
                serde_json::Value::Array(items) => items
                    .iter()
                    .filter_map(|item| item.as_str())
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(String::from)
                    .collect(),
                _ => Vec::new(),
            }
        }
    };

    if names.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(NameFormat::from_location("names.json"), NameFormat::Json);
        assert_eq!(NameFormat::from_location("NAMES.JSON"), NameFormat::Json);
        assert_eq!(
            NameFormat::from_location("https://host/list.json?v=2"),
            NameFormat::Json
        );
        assert_eq!(NameFormat::from_location("names.txt"), NameFormat::Text);
        assert_eq!(NameFormat::from_location("names"), NameFormat::Text);
    }

    #[test]
    fn test_text_trims_and_skips_blank_lines() {
        let names = parse_names("  Ana \r\n\r\nBerta\n   \nCarla", NameFormat::Text).unwrap();
        assert_eq!(names, vec!["Ana", "Berta", "Carla"]);
    }

    #[test]
    fn test_text_keeps_duplicates_for_the_store_to_merge() {
        let names = parse_names("Ana\nAna\n", NameFormat::Text).unwrap();
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_json_array_of_strings() {
        let names = parse_names(r#"["Ana", " Berta ", ""]"#, NameFormat::Json).unwrap();
        assert_eq!(names, vec!["Ana", "Berta"]);
    }

    #[test]
    fn test_json_skips_non_string_items() {
        let names = parse_names(r#"["Ana", 3, null, {"n": 1}]"#, NameFormat::Json).unwrap();
        assert_eq!(names, vec!["Ana"]);
    }

    #[test]
    fn test_json_non_array_is_empty() {
        let err = parse_names(r#"{"names": ["Ana"]}"#, NameFormat::Json).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = parse_names("[\"Ana\",", NameFormat::Json).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_empty_text_is_empty_error() {
        assert!(matches!(parse_names("", NameFormat::Text), Err(LoadError::Empty)));
        assert!(matches!(parse_names("\n \n", NameFormat::Text), Err(LoadError::Empty)));
    }
}
