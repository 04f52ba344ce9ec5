//! Error types for workspace loading.
//!
//! Only true I/O failures surface as errors; malformed declarations and
//! empty workspaces are valid (possibly empty) results by contract.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading a workspace.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// Workspace path is missing or not a directory.
    #[error("workspace directory not found: {0}")]
    WorkspaceNotFound(PathBuf),

    /// A source file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed during the fallback scan.
    #[error("failed to scan {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl WorkspaceError {
    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn scan(path: &Path, source: walkdir::Error) -> Self {
        Self::Scan {
            path: path.to_path_buf(),
            source,
        }
    }
}
