//! Base-family inheritance resolution for rich-catalog entries.

use lexmap_catalog::{RichCatalog, RichEntry};
use lexmap_syntax::{
    COMPLEXITY_CHECKS, LanguageDef, OpenClose, Registry, SyntaxFamily, normalize_extension,
};

use crate::BuildError;

/// Resolve one rich-catalog entry into `(canonical name, definition)`.
///
/// The entry's own delimiter fields always win; a declared `base` family
/// only fills the fields the entry left empty. Complexity checks are
/// assigned iff any delimiter field ends up populated.
///
/// Fails on an empty identifier or a `base` naming no known family.
pub fn resolve_entry(key: &str, entry: &RichEntry) -> Result<(String, LanguageDef), BuildError> {
    let name = entry
        .name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(key);
    if name.trim().is_empty() {
        return Err(BuildError::MissingName);
    }

    let mut def = LanguageDef {
        line_comment: entry.line_comment.clone(),
        multi_line: entry.multi_line.clone(),
        quotes: entry.quotes.iter().cloned().map(OpenClose::from).collect(),
        ..LanguageDef::default()
    };
    for ext in &entry.extensions {
        def.push_extension(normalize_extension(ext));
    }

    if let Some(base) = entry.base.as_deref() {
        let family: SyntaxFamily =
            base.parse()
                .map_err(|_| BuildError::UnknownFamily {
                    language: name.to_string(),
                    family: base.to_string(),
                })?;
        if def.line_comment.is_empty() {
            def.line_comment = family.line_comment().iter().map(|s| s.to_string()).collect();
        }
        if def.multi_line.is_empty() {
            def.multi_line = family.multi_line().iter().map(|&p| p.into()).collect();
        }
        if def.quotes.is_empty() {
            def.quotes = family.quotes().iter().map(|&p| p.into()).collect();
        }
    }

    if def.has_delimiters() {
        def.complexity_checks = COMPLEXITY_CHECKS.iter().map(|s| s.to_string()).collect();
    }

    Ok((name.to_string(), def))
}

/// Resolve a whole rich catalog into the initial [`Registry`].
pub fn resolve_catalog(catalog: &RichCatalog) -> Result<Registry, BuildError> {
    let mut registry = Registry::new();
    for (key, entry) in &catalog.languages {
        let (name, def) = resolve_entry(key, entry)?;
        if let Some(previous) = registry.insert(name.clone(), def) {
            // Two identifiers resolving to one display name is an input-data
            // defect; the later (key-ordered) entry wins.
            log::warn!(
                "duplicate canonical name {:?}, replacing earlier definition with extensions {:?}",
                name,
                previous.extensions
            );
        }
    }
    Ok(registry)
}
