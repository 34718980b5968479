//! Artifact serialization - the contract with the scanning engine.

use std::fs;
use std::path::Path;

use lexmap_syntax::Registry;

use crate::BuildError;

/// Render the registry as the pretty-printed JSON artifact: an object keyed
/// by canonical language name, each value carrying all five fields
/// (`extensions`, `line_comment`, `multi_line`, `quotes`,
/// `complexity_checks`) even when empty.
pub fn to_artifact_json(registry: &Registry) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(registry)
}

/// Parse an artifact back into a [`Registry`]. Round-trips exactly.
pub fn parse_artifact(text: &str) -> Result<Registry, serde_json::Error> {
    serde_json::from_str(text)
}

/// Serialize and write the artifact. Encoding happens fully in memory before
/// the write, so a failed build never leaves a partial artifact behind.
pub fn write_artifact(registry: &Registry, path: &Path) -> Result<(), BuildError> {
    let json = to_artifact_json(registry)?;
    fs::write(path, json).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexmap_syntax::{COMPLEXITY_CHECKS, LanguageDef, OpenClose};

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        registry.insert(
            "Rust".to_string(),
            LanguageDef {
                extensions: vec!["rs".to_string()],
                line_comment: vec!["//".to_string()],
                multi_line: vec![OpenClose::new("/*", "*/")],
                quotes: vec![OpenClose::new("\"", "\"")],
                complexity_checks: COMPLEXITY_CHECKS.iter().map(|s| s.to_string()).collect(),
            },
        );
        registry.insert("Plain Text".to_string(), LanguageDef::default());
        registry
    }

    #[test]
    fn test_round_trip() {
        let registry = sample_registry();
        let json = to_artifact_json(&registry).unwrap();
        assert_eq!(parse_artifact(&json).unwrap(), registry);
    }

    #[test]
    fn test_empty_fields_are_present() {
        let json = to_artifact_json(&sample_registry()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let text = &value["Plain Text"];
        for field in [
            "extensions",
            "line_comment",
            "multi_line",
            "quotes",
            "complexity_checks",
        ] {
            assert!(text[field].is_array(), "missing field {field}");
        }
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("languages.json");
        write_artifact(&sample_registry(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(parse_artifact(&written).unwrap(), sample_registry());
    }

    #[test]
    fn test_write_to_bad_path_fails() {
        let err = write_artifact(&sample_registry(), Path::new("/nonexistent/dir/out.json"))
            .unwrap_err();
        assert!(matches!(err, BuildError::Write { .. }));
    }
}
