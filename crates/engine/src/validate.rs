// crates/engine/src/validate.rs
use crate::error::EngineError;
use crate::path_kind::classify;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A source path and optional destination directory that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub source: PathBuf,
    pub destination: Option<PathBuf>,
}

/// Why a set of positional arguments was rejected.
///
/// `Usage` carries no message: the caller prints the usage line instead.
#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("expected a source path and an optional destination directory")]
    Usage,

    #[error("{} does not exist", .0.display())]
    SourceMissing(PathBuf),

    #[error(transparent)]
    SourceUnreadable(EngineError),

    #[error("{} must be a directory", .0.display())]
    DestinationNotDirectory(PathBuf),
}

impl ArgsError {
    /// Whether the caller should show the usage line rather than an error message.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage)
    }
}

/// Check the positional arguments that follow the program name.
///
/// Rules are applied in order: argument count, source existence, then the
/// destination (if given and present on disk) must be a directory. A
/// destination that does not exist yet is accepted.
///
/// # Errors
///
/// Returns the first rule that fails as an [`ArgsError`].
pub fn validate<P: AsRef<Path>>(positionals: &[P]) -> Result<Invocation, ArgsError> {
    let (source, destination) = match positionals {
        [source] => (source.as_ref(), None),
        [source, destination] => (source.as_ref(), Some(destination.as_ref())),
        _ => return Err(ArgsError::Usage),
    };

    match classify(source) {
        Ok(_) => {}
        Err(EngineError::NotFound { path }) => return Err(ArgsError::SourceMissing(path)),
        Err(e) => return Err(ArgsError::SourceUnreadable(e)),
    }

    // Only an existing non-directory is rejected; a destination we cannot stat
    // for other reasons surfaces later as a per-file write failure.
    if let Some(dest) = destination
        && let Ok(kind) = classify(dest)
        && !kind.is_dir()
    {
        return Err(ArgsError::DestinationNotDirectory(dest.to_path_buf()));
    }

    Ok(Invocation {
        source: source.to_path_buf(),
        destination: destination.map(Path::to_path_buf),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_argument_counts() {
        let none: [&str; 0] = [];
        assert!(validate(&none).unwrap_err().is_usage());
        assert!(validate(&["a", "b", "c"]).unwrap_err().is_usage());
    }

    #[test]
    fn missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let err = validate(&[&missing]).unwrap_err();
        assert!(matches!(err, ArgsError::SourceMissing(_)));
        assert_eq!(err.to_string(), format!("{} does not exist", missing.display()));
    }

    #[test]
    fn destination_must_be_directory() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.html");
        let dest = dir.path().join("out.txt");
        std::fs::write(&src, "x").unwrap();
        std::fs::write(&dest, "y").unwrap();

        let err = validate(&[&src, &dest]).unwrap_err();
        assert_eq!(err.to_string(), format!("{} must be a directory", dest.display()));
    }

    #[test]
    fn accepts_absent_or_existing_destination_directory() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.html");
        std::fs::write(&src, "x").unwrap();

        let fresh = dir.path().join("new/out");
        let inv = validate(&[&src, &fresh]).unwrap();
        assert_eq!(inv.source, src);
        assert_eq!(inv.destination.as_deref(), Some(fresh.as_path()));
        assert!(!fresh.exists());

        let inv = validate(&[src.as_path(), dir.path()]).unwrap();
        assert_eq!(inv.destination.as_deref(), Some(dir.path()));
    }

    #[test]
    fn source_only() {
        let dir = tempfile::tempdir().unwrap();
        let inv = validate(&[dir.path()]).unwrap();
        assert_eq!(inv.source, dir.path());
        assert_eq!(inv.destination, None);
    }
}
