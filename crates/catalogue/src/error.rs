use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogueError>;

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("failed to read directory listing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory listing is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("directory entry {index} has a blank name")]
    BlankIdentifier { index: usize },
}
