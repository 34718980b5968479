//! The lexmap registry build pipeline.
//!
//! A single-pass, single-threaded batch transformation: load both catalogs
//! into memory, resolve base-family inheritance, merge extension coverage,
//! invert into the diagnostic extension index, serialize, done. All state is
//! build-scoped; the only thing that survives a run is the written artifact.
//!
//! ```text
//! rich catalog ──resolve──▶ Registry ──merge simple catalog──▶ Registry
//!                                                                │
//!                                    extension index (diagnostic) ┼─▶ artifact
//! ```
//!
//! Fatal problems (unreadable catalog, unknown base family, missing
//! identifier) abort the build with [`BuildError`] and leave no partial
//! artifact. Recoverable findings accumulate in [`Diagnostics`] and are
//! reported once at the end of the pass.

mod builder;
mod diagnostics;
mod error;
mod index;
mod merge;
mod resolve;
mod serialize;

pub use builder::{BuildOutput, build_from_catalogs, build_registry};
pub use diagnostics::{Diagnostics, ExtensionConflict, UnmatchedEntry};
pub use error::BuildError;
pub use index::{ExtensionIndex, build_extension_index};
pub use merge::{merge_key, merge_simple};
pub use resolve::{resolve_catalog, resolve_entry};
pub use serialize::{parse_artifact, to_artifact_json, write_artifact};
