use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};

/// Sequential recursive walk yielding every non-directory entry under `root`.
///
/// A file root yields only itself. Entries are sorted by file name within each
/// directory; no hidden or ignore-file filtering is applied and symlinks are
/// not descended into. Entries that fail during the walk are skipped.
pub fn source_files(root: &Path) -> impl Iterator<Item = PathBuf> + use<> {
    WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("skipping walk entry: {e}");
                None
            }
        })
        .filter(|entry| !is_dir(entry))
        .map(DirEntry::into_path)
}

fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_dir())
}

/// Source of raw file bytes for the processor.
pub trait ContentReader {
    /// Read the whole file at `path`.
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

/// Reads straight from disk. The handle is closed before `read` returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl ContentReader for FsReader {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}
