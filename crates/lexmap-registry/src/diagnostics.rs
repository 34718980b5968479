//! Recoverable findings accumulated across the build.

/// A simple-catalog entry with no case-insensitive name match in the rich
/// catalog. Not merged automatically; kept for manual follow-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedEntry {
    pub language: String,
    /// The entry's original extension list, as authored.
    pub extensions: Vec<String>,
}

/// Two languages claiming the same extension. The first-registered owner is
/// kept in the index; the later claimant is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionConflict {
    pub extension: String,
    pub kept: String,
    pub rejected: String,
}

/// Everything recoverable the build noticed. Findings never interrupt the
/// pass and never end up in the output artifact; they are reported once,
/// after the pass, on the diagnostics channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub unmatched: Vec<UnmatchedEntry>,
    pub extension_conflicts: Vec<ExtensionConflict>,
}

impl Diagnostics {
    pub fn is_empty(&self) -> bool {
        self.unmatched.is_empty() && self.extension_conflicts.is_empty()
    }

    /// Log one warning per finding.
    pub fn report(&self) {
        for entry in &self.unmatched {
            log::warn!(
                "no rich-catalog match for {:?}, extensions {:?} not merged",
                entry.language,
                entry.extensions
            );
        }
        for conflict in &self.extension_conflicts {
            log::warn!(
                "extension {:?} claimed by both {:?} and {:?}; keeping {:?}",
                conflict.extension,
                conflict.kept,
                conflict.rejected,
                conflict.kept
            );
        }
    }
}
