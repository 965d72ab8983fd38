// crates/engine/src/path_kind.rs
//! Path classification.
//!
//! Every query goes to the filesystem; nothing is cached between calls.

use crate::error::{EngineError, Result};
use std::path::Path;

/// What a path on disk points at.
///
/// Anything that is not a directory (sockets, fifos, devices) counts as a
/// regular file, matching how the walker treats non-directory entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Directory,
    RegularFile,
}

impl PathKind {
    #[must_use]
    pub const fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// Classify `path`, following symlinks.
///
/// # Errors
///
/// Returns [`EngineError::NotFound`] when the path does not exist and
/// [`EngineError::Metadata`] for any other failure to stat it.
pub fn classify<P: AsRef<Path>>(path: P) -> Result<PathKind> {
    let path = path.as_ref();
    let meta = std::fs::metadata(path)
        .map_err(|e| EngineError::from_metadata(path.to_path_buf(), e))?;

    Ok(if meta.is_dir() {
        PathKind::Directory
    } else {
        PathKind::RegularFile
    })
}
