//! The simple catalog: language name to extension list, nothing else.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::CatalogError;

/// One record of the simple catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimpleEntry {
    pub language: String,
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// The simple catalog document: a sequence of records.
pub type SimpleCatalog = Vec<SimpleEntry>;

/// Parse a simple catalog from JSON text.
pub fn parse_simple(text: &str) -> Result<SimpleCatalog, serde_json::Error> {
    serde_json::from_str(text)
}

/// Load a simple catalog from disk.
pub fn load_simple(path: &Path) -> Result<SimpleCatalog, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_simple(&text).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records() {
        let catalog = parse_simple(
            r#"[
                {"language": "C++", "extensions": [".cpp", ".cc"]},
                {"language": "Text"}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].language, "C++");
        assert_eq!(catalog[0].extensions, [".cpp", ".cc"]);
        assert!(catalog[1].extensions.is_empty());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(parse_simple(r#"{"language": "not a sequence"}"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_simple(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
