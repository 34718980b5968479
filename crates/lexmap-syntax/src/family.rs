//! Base syntax families - default delimiter bundles for inheritance.

use std::fmt;
use std::str::FromStr;

/// A named bundle of default comment/quote delimiters shared by many
/// languages. Rich-catalog entries reference one via their `base` field and
/// inherit any delimiter field they leave unset.
///
/// The set is closed: the catalogs are only allowed to reference these seven
/// identifiers, and an unknown identifier is a fatal configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxFamily {
    /// C-style: `//` line comments, `/* */` blocks, double-quoted strings.
    C,
    /// ML-style functional: `(* *)` blocks, double-quoted strings.
    Func,
    /// Markup: `<!-- -->` blocks, double-quoted attribute strings.
    Html,
    /// Script-style: `#` line comments only.
    Hash,
    /// Haskell-style: `--` line comments, `{- -}` blocks.
    Haskell,
    /// Prolog/TeX-style: `%` line comments, `/* */` blocks, double quotes.
    Pro,
    /// No delimiters at all (plain text and friends).
    Blank,
}

/// Reference to a base family that is not part of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown syntax family {0:?}")]
pub struct UnknownFamily(pub String);

impl SyntaxFamily {
    /// All families, in catalog-documentation order.
    pub const ALL: [SyntaxFamily; 7] = [
        SyntaxFamily::C,
        SyntaxFamily::Func,
        SyntaxFamily::Html,
        SyntaxFamily::Hash,
        SyntaxFamily::Haskell,
        SyntaxFamily::Pro,
        SyntaxFamily::Blank,
    ];

    /// Identifier as written in the rich catalog's `base` field.
    pub fn id(self) -> &'static str {
        match self {
            SyntaxFamily::C => "c",
            SyntaxFamily::Func => "func",
            SyntaxFamily::Html => "html",
            SyntaxFamily::Hash => "hash",
            SyntaxFamily::Haskell => "haskell",
            SyntaxFamily::Pro => "pro",
            SyntaxFamily::Blank => "blank",
        }
    }

    /// Default line-comment openers, empty when the family has none.
    pub fn line_comment(self) -> &'static [&'static str] {
        match self {
            SyntaxFamily::C => &["//"],
            SyntaxFamily::Hash => &["#"],
            SyntaxFamily::Haskell => &["--"],
            SyntaxFamily::Pro => &["%"],
            SyntaxFamily::Func | SyntaxFamily::Html | SyntaxFamily::Blank => &[],
        }
    }

    /// Default multi-line comment delimiters.
    pub fn multi_line(self) -> &'static [(&'static str, &'static str)] {
        match self {
            SyntaxFamily::C | SyntaxFamily::Pro => &[("/*", "*/")],
            SyntaxFamily::Func => &[("(*", "*)")],
            SyntaxFamily::Html => &[("<!--", "-->")],
            SyntaxFamily::Haskell => &[("{-", "-}")],
            SyntaxFamily::Hash | SyntaxFamily::Blank => &[],
        }
    }

    /// Default string-quote delimiters.
    pub fn quotes(self) -> &'static [(&'static str, &'static str)] {
        match self {
            SyntaxFamily::C | SyntaxFamily::Func | SyntaxFamily::Html | SyntaxFamily::Pro => {
                &[("\"", "\"")]
            }
            SyntaxFamily::Hash | SyntaxFamily::Haskell | SyntaxFamily::Blank => &[],
        }
    }
}

impl FromStr for SyntaxFamily {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" => Ok(SyntaxFamily::C),
            "func" => Ok(SyntaxFamily::Func),
            "html" => Ok(SyntaxFamily::Html),
            "hash" => Ok(SyntaxFamily::Hash),
            "haskell" => Ok(SyntaxFamily::Haskell),
            "pro" => Ok(SyntaxFamily::Pro),
            "blank" => Ok(SyntaxFamily::Blank),
            other => Err(UnknownFamily(other.to_string())),
        }
    }
}

impl fmt::Display for SyntaxFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
