use crate::error::{EngineError, Result};
use crate::escape::escape_html;
use crate::filesystem::ContentReader;
use crate::output::OutputSink;
use crate::stats::RunResult;
use std::path::{Path, PathBuf};

/// Escape every file in `paths` and hand the result to `sink`.
///
/// In best-effort mode a file that cannot be read or written is logged,
/// recorded in [`RunResult::skipped`] and the loop moves on. With `strict`
/// the first such error is returned instead.
///
/// # Errors
///
/// Only returns an error in strict mode, or when the sink fails to flush.
pub fn process_files<I, R, S>(paths: I, reader: &R, sink: &mut S, strict: bool) -> Result<RunResult>
where
    I: IntoIterator<Item = PathBuf>,
    R: ContentReader + ?Sized,
    S: OutputSink + ?Sized,
{
    let mut result = RunResult::default();

    for path in paths {
        log::debug!("escaping {}", path.display());
        match process_file(&path, reader, sink) {
            Ok(()) => result.processed += 1,
            Err(e) if strict => return Err(e),
            Err(e) => {
                log::warn!("skipped {}: {e}", path.display());
                result.skipped.push((path, e));
            }
        }
    }

    sink.finish()?;
    Ok(result)
}

/// Read, escape and emit a single file.
fn process_file<R, S>(path: &Path, reader: &R, sink: &mut S) -> Result<()>
where
    R: ContentReader + ?Sized,
    S: OutputSink + ?Sized,
{
    let raw = reader.read(path).map_err(|source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let escaped = escape_html(&raw);
    sink.emit(path, &escaped)
}
