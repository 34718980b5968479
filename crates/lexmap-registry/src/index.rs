//! Extension-to-language index, built last, diagnostic only.

use std::collections::BTreeMap;

use lexmap_syntax::Registry;

use crate::{Diagnostics, ExtensionConflict};

/// Inverse mapping from extension to owning canonical name. Never persisted;
/// it exists to surface conflicting extension claims.
pub type ExtensionIndex = BTreeMap<String, String>;

/// Invert the merged registry. Languages are visited in registry
/// (alphabetical) order, so the pass is reproducible run-to-run, and the
/// first-registered owner of a contested extension is kept — every later
/// claim is recorded as a conflict and rejected.
pub fn build_extension_index(registry: &Registry, diagnostics: &mut Diagnostics) -> ExtensionIndex {
    let mut index = ExtensionIndex::new();
    for (name, def) in registry {
        for ext in &def.extensions {
            match index.get(ext) {
                None => {
                    index.insert(ext.clone(), name.clone());
                }
                Some(owner) if owner == name => {}
                Some(owner) => diagnostics.extension_conflicts.push(ExtensionConflict {
                    extension: ext.clone(),
                    kept: owner.clone(),
                    rejected: name.clone(),
                }),
            }
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexmap_syntax::LanguageDef;

    fn registry(entries: &[(&str, &[&str])]) -> Registry {
        entries
            .iter()
            .map(|(name, exts)| {
                (
                    name.to_string(),
                    LanguageDef {
                        extensions: exts.iter().map(|s| s.to_string()).collect(),
                        ..LanguageDef::default()
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_unique_claims() {
        let mut diagnostics = Diagnostics::default();
        let index = build_extension_index(
            &registry(&[("Go", &["go"]), ("Rust", &["rs"])]),
            &mut diagnostics,
        );
        assert_eq!(index["go"], "Go");
        assert_eq!(index["rs"], "Rust");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_claim_names_both_and_first_wins() {
        let mut diagnostics = Diagnostics::default();
        let index = build_extension_index(
            &registry(&[("TypeScript", &["ts"]), ("Typo Script", &["ts"])]),
            &mut diagnostics,
        );
        // BTreeMap order: "TypeScript" registers first and keeps the claim.
        assert_eq!(index["ts"], "TypeScript");
        assert_eq!(
            diagnostics.extension_conflicts,
            [ExtensionConflict {
                extension: "ts".to_string(),
                kept: "TypeScript".to_string(),
                rejected: "Typo Script".to_string(),
            }]
        );
    }
}
