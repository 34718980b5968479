//! Merging simple-catalog extension coverage into the resolved registry.

use std::collections::BTreeMap;

use lexmap_catalog::SimpleCatalog;
use lexmap_syntax::{Registry, normalize_extension};

use crate::{Diagnostics, UnmatchedEntry};

/// The key two independently-authored catalogs are matched on: Unicode
/// lowercase of the canonical name.
///
/// Deliberately nothing more aggressive. Stripping punctuation would
/// collapse "C" and "C++" into one key and silently cross-merge them, so
/// true synonyms ("C++" vs "Cpp") stay unmatched and need a manual alias —
/// the rich catalog's `name` field is the supported mechanism.
pub fn merge_key(name: &str) -> String {
    name.to_lowercase()
}

/// Union each simple-catalog entry's extensions into the registry entry with
/// the case-insensitively matching name. Existing extension order is
/// preserved and duplicates are skipped, so the merge is idempotent.
///
/// Entries with no match are recorded in `diagnostics` and left out of the
/// registry; that is informational, never an error.
pub fn merge_simple(registry: &mut Registry, simple: &SimpleCatalog, diagnostics: &mut Diagnostics) {
    // Exact case-insensitive name equality, independent of iteration order.
    let by_key: BTreeMap<String, String> = registry
        .keys()
        .map(|name| (merge_key(name), name.clone()))
        .collect();

    for entry in simple {
        match by_key.get(&merge_key(&entry.language)) {
            Some(canonical) => {
                log::debug!("merging {:?} into {:?}", entry.language, canonical);
                let def = registry
                    .get_mut(canonical)
                    .unwrap_or_else(|| unreachable!("key map built from registry keys"));
                for ext in &entry.extensions {
                    def.push_extension(normalize_extension(ext));
                }
            }
            None => diagnostics.unmatched.push(UnmatchedEntry {
                language: entry.language.clone(),
                extensions: entry.extensions.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexmap_catalog::SimpleEntry;
    use lexmap_syntax::LanguageDef;

    fn registry_with(name: &str, extensions: &[&str]) -> Registry {
        let mut registry = Registry::new();
        registry.insert(
            name.to_string(),
            LanguageDef {
                extensions: extensions.iter().map(|s| s.to_string()).collect(),
                ..LanguageDef::default()
            },
        );
        registry
    }

    fn simple(language: &str, extensions: &[&str]) -> SimpleCatalog {
        vec![SimpleEntry {
            language: language.to_string(),
            extensions: extensions.iter().map(|s| s.to_string()).collect(),
        }]
    }

    #[test]
    fn test_case_insensitive_union() {
        // Rich side already canonicalized to "C++" via its name field.
        let mut registry = registry_with("C++", &["cpp", "h"]);
        let mut diagnostics = Diagnostics::default();
        merge_simple(
            &mut registry,
            &simple("c++", &[".cpp", ".cc"]),
            &mut diagnostics,
        );
        assert_eq!(registry["C++"].extensions, ["cpp", "h", "cc"]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut registry = registry_with("Rust", &["rs"]);
        let catalog = simple("Rust", &[".rs", ".rs.in"]);
        let mut diagnostics = Diagnostics::default();
        merge_simple(&mut registry, &catalog, &mut diagnostics);
        let after_first = registry.clone();
        merge_simple(&mut registry, &catalog, &mut diagnostics);
        assert_eq!(registry, after_first);
    }

    #[test]
    fn test_unmatched_entry_is_reported_not_merged() {
        let mut registry = registry_with("Rust", &["rs"]);
        let mut diagnostics = Diagnostics::default();
        merge_simple(
            &mut registry,
            &simple("Brainfuck--", &[".bfpp"]),
            &mut diagnostics,
        );
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains_key("Brainfuck--"));
        assert_eq!(
            diagnostics.unmatched,
            [UnmatchedEntry {
                language: "Brainfuck--".to_string(),
                extensions: vec![".bfpp".to_string()],
            }]
        );
    }

    #[test]
    fn test_synonyms_do_not_match() {
        // "Cpp" vs "C++" is a documented manual-aliasing limitation.
        let mut registry = registry_with("Cpp", &["cpp"]);
        let mut diagnostics = Diagnostics::default();
        merge_simple(&mut registry, &simple("C++", &[".cc"]), &mut diagnostics);
        assert_eq!(registry["Cpp"].extensions, ["cpp"]);
        assert_eq!(diagnostics.unmatched.len(), 1);
    }
}
