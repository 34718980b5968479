//! Resolved language definitions and the registry artifact schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A delimiter pair, serialized as a two-element array (`["/*", "*/"]`).
///
/// Both catalogs and the output artifact encode pairs this way; the scanner
/// deserializes them into its open/close token tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct OpenClose {
    pub open: String,
    pub close: String,
}

impl OpenClose {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl From<(String, String)> for OpenClose {
    fn from((open, close): (String, String)) -> Self {
        Self { open, close }
    }
}

impl From<OpenClose> for (String, String) {
    fn from(pair: OpenClose) -> Self {
        (pair.open, pair.close)
    }
}

impl From<(&str, &str)> for OpenClose {
    fn from((open, close): (&str, &str)) -> Self {
        Self::new(open, close)
    }
}

/// Tokens whose occurrence count the scanner uses as a cheap proxy for
/// cyclomatic complexity. A language gets the whole list or nothing: any
/// language with at least one comment or quote delimiter is assumed to be
/// code worth scanning, everything else (plain text, pure data) is skipped.
pub const COMPLEXITY_CHECKS: [&str; 11] = [
    "for ", "for(", "if ", "if(", "switch ", "while ", "else ", "|| ", "&& ", "!= ", "== ",
];

/// Fully-resolved lexical rules for one language.
///
/// All five fields are always serialized, as empty arrays rather than being
/// omitted — downstream tokenizers rely on field presence without existence
/// checks. The canonical name is the [`Registry`] key, not a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDef {
    /// File extensions, normalized (lowercase, no leading dot), first
    /// occurrence order preserved.
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Line-comment openers (`//`, `#`, ...).
    #[serde(default)]
    pub line_comment: Vec<String>,
    /// Multi-line comment delimiter pairs.
    #[serde(default)]
    pub multi_line: Vec<OpenClose>,
    /// String-literal delimiter pairs.
    #[serde(default)]
    pub quotes: Vec<OpenClose>,
    /// [`COMPLEXITY_CHECKS`] when any delimiter field is populated, else empty.
    #[serde(default)]
    pub complexity_checks: Vec<String>,
}

impl LanguageDef {
    /// Whether any of the three delimiter fields is populated. This is the
    /// single predicate that decides complexity scanning.
    pub fn has_delimiters(&self) -> bool {
        !self.line_comment.is_empty() || !self.multi_line.is_empty() || !self.quotes.is_empty()
    }

    /// Append an extension unless it is already present, preserving the
    /// order of first occurrence. Extensions must already be normalized.
    pub fn push_extension(&mut self, ext: String) {
        if !self.extensions.contains(&ext) {
            self.extensions.push(ext);
        }
    }
}

/// The merged, resolved mapping from canonical language name to its lexical
/// rule set. A `BTreeMap` so iteration order, and with it the merge pass,
/// the extension index, and the serialized artifact, are deterministic.
pub type Registry = BTreeMap<String, LanguageDef>;

/// Normalize a raw catalog extension: surrounding whitespace and leading
/// dots stripped, lowercased. `".CPP"`, `"cpp"` and `" .cpp "` all collapse
/// to `"cpp"`, so case-sensitive comparison of stored extensions is enough
/// for uniqueness.
pub fn normalize_extension(raw: &str) -> String {
    raw.trim().trim_start_matches('.').to_lowercase()
}
