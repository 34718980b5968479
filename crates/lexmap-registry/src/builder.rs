//! Build orchestration: catalogs in, artifact and diagnostics out.

use std::path::Path;

use lexmap_catalog::{RichCatalog, SimpleCatalog, load_rich, load_simple};
use lexmap_syntax::Registry;

use crate::{
    BuildError, Diagnostics, ExtensionIndex, build_extension_index, merge_simple, resolve_catalog,
    write_artifact,
};

/// Everything a successful build produces. The registry is the artifact;
/// the index and diagnostics are advisory.
#[derive(Debug)]
pub struct BuildOutput {
    pub registry: Registry,
    pub index: ExtensionIndex,
    pub diagnostics: Diagnostics,
}

/// Run the pipeline on already-loaded catalogs:
/// resolve → merge → index. Pure in-memory transformation.
pub fn build_from_catalogs(
    rich: &RichCatalog,
    simple: &SimpleCatalog,
) -> Result<BuildOutput, BuildError> {
    let mut registry = resolve_catalog(rich)?;
    let mut diagnostics = Diagnostics::default();
    merge_simple(&mut registry, simple, &mut diagnostics);
    let index = build_extension_index(&registry, &mut diagnostics);
    Ok(BuildOutput {
        registry,
        index,
        diagnostics,
    })
}

/// Full build: load both catalogs, transform, and (when `out` is given)
/// write the artifact. Fatal errors abort before anything is written.
pub fn build_registry(
    rich_path: &Path,
    simple_path: &Path,
    out: Option<&Path>,
) -> Result<BuildOutput, BuildError> {
    let rich = load_rich(rich_path)?;
    let simple = load_simple(simple_path)?;
    let output = build_from_catalogs(&rich, &simple)?;
    if let Some(path) = out {
        write_artifact(&output.registry, path)?;
    }
    Ok(output)
}
