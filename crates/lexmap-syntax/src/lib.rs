//! Syntax metadata types for the lexmap registry.
//!
//! This crate holds the vocabulary shared by the catalog loaders and the
//! registry builder:
//!
//! - [`SyntaxFamily`]: the closed set of base families a rich-catalog entry
//!   can inherit default delimiters from.
//! - [`LanguageDef`]: the fully-resolved lexical rules for one language, in
//!   the exact shape the scanning engine consumes.
//! - [`Registry`]: the merged mapping from canonical language name to
//!   [`LanguageDef`] — the artifact this whole workspace exists to produce.
//!
//! # Example
//!
//! ```
//! use lexmap_syntax::SyntaxFamily;
//!
//! let family: SyntaxFamily = "hash".parse().unwrap();
//! assert_eq!(family.line_comment(), &["#"]);
//! assert!(family.quotes().is_empty());
//! ```

mod def;
mod family;

pub use def::{COMPLEXITY_CHECKS, LanguageDef, OpenClose, Registry, normalize_extension};
pub use family::{SyntaxFamily, UnknownFamily};
