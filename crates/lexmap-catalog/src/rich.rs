//! The rich catalog: per-language delimiters, extensions and base families.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use lexmap_syntax::OpenClose;

use crate::CatalogError;

/// A string-quote delimiter as it appears in the rich catalog.
///
/// Two encodings exist across catalog generations: the original
/// `["\"", "\""]` pairs and the converted `{"start": ..., "end": ...}`
/// objects (which carry extra per-quote flags the registry does not use).
/// The loader accepts both.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum QuoteSpec {
    Pair(OpenClose),
    Object { start: String, end: String },
}

impl From<QuoteSpec> for OpenClose {
    fn from(quote: QuoteSpec) -> Self {
        match quote {
            QuoteSpec::Pair(pair) => pair,
            QuoteSpec::Object { start, end } => OpenClose::new(start, end),
        }
    }
}

/// One rich-catalog record. Every field is optional; `name` overrides the
/// map key as the canonical display name ("Cpp" keyed entries can still be
/// named "C++").
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RichEntry {
    pub name: Option<String>,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub line_comment: Vec<String>,
    #[serde(default)]
    pub multi_line: Vec<OpenClose>,
    #[serde(default)]
    pub quotes: Vec<QuoteSpec>,
    /// Base syntax family identifier. Validated by the resolver, not here.
    pub base: Option<String>,
}

/// The rich catalog document: `{"languages": {identifier: entry}}`.
/// A `BTreeMap` so resolution order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RichCatalog {
    pub languages: BTreeMap<String, RichEntry>,
}

/// Parse a rich catalog from JSON text.
pub fn parse_rich(text: &str) -> Result<RichCatalog, serde_json::Error> {
    serde_json::from_str(text)
}

/// Load a rich catalog from disk.
pub fn load_rich(path: &Path) -> Result<RichCatalog, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rich(&text).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
