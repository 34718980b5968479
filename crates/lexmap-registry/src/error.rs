use std::path::PathBuf;

use lexmap_catalog::CatalogError;

/// Fatal registry build error. Any of these aborts the whole build; no
/// partial artifact is written.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("language {language:?}: unknown base family {family:?}")]
    UnknownFamily { language: String, family: String },

    #[error("rich catalog entry with an empty identifier")]
    MissingName,

    #[error("failed to encode registry artifact: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write artifact {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
