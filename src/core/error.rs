//! Errors raised while loading a document into the viewer

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a UTF-8 text document", .0.display())]
    NotText(PathBuf),

    #[error("{} is empty", .0.display())]
    EmptyFile(PathBuf),

    #[error("not a Google Docs link or document id: {0}")]
    InvalidDocLink(String),
}
