//! Reading source files.

use std::io;
use std::path::{Path, PathBuf};

use pr_diagnostic::{Diagnostic, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("File \"{}\" doesn't exist", path.display())]
    Missing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("File \"{}\" could not be read: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    pub fn path(&self) -> &Path {
        match self {
            SourceError::Missing { path, .. } | SourceError::Unreadable { path, .. } => path,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let code = match self {
            SourceError::Missing { .. } => ErrorCode::E0001,
            SourceError::Unreadable { .. } => ErrorCode::E0002,
        };
        Diagnostic::error(code).with_message(self.to_string())
    }
}

/// Read the whole file at `path` as UTF-8.
pub(crate) fn read_source(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::IsADirectory => SourceError::Missing {
            path: path.to_path_buf(),
            source,
        },
        _ => SourceError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })
}
