//! Input catalogs for the lexmap registry build.
//!
//! Two independently-maintained catalogs feed the build:
//!
//! - the **simple catalog**: a JSON array of `{language, extensions}`
//!   records, extensions only;
//! - the **rich catalog**: a JSON object keyed by language identifier, with
//!   optional delimiter fields and an optional `base` family reference.
//!
//! Both loaders fail fast on unreadable or malformed documents; catalog
//! content problems (unknown base families, empty identifiers) are the
//! registry builder's concern, not the loaders'.

mod error;
mod rich;
mod simple;

pub use error::CatalogError;
pub use rich::{QuoteSpec, RichCatalog, RichEntry, load_rich, parse_rich};
pub use simple::{SimpleCatalog, SimpleEntry, load_simple, parse_simple};
