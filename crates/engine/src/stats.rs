use crate::error::EngineError;
use std::path::PathBuf;

/// Outcome of a completed walk.
#[derive(Debug, Default)]
pub struct RunResult {
    pub processed: usize,
    /// Files that could not be read or written, in walk order.
    pub skipped: Vec<(PathBuf, EngineError)>,
}

impl RunResult {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}
