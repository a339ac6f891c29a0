use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write server entries: {0}")]
    WriteFailed(#[from] io::Error),
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
