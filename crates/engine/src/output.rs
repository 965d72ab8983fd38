// crates/engine/src/output.rs
//! Destination routing for escaped content.

use crate::config::{DEFAULT_DIR_MODE, DEFAULT_FILE_MODE};
use crate::error::{EngineError, Result};
use crate::path_kind::classify;
use std::ffi::OsString;
use std::fs::{DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Width of the `=` rules around each console banner.
pub const BANNER_WIDTH: usize = 72;

/// Where escaped content for one source file ends up.
pub trait OutputSink {
    /// Emit the escaped content of `source`.
    fn emit(&mut self, source: &Path, escaped: &[u8]) -> Result<()>;

    /// Flush anything buffered once the walk is done.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Prints each file under a banner naming its path.
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn emit(&mut self, source: &Path, escaped: &[u8]) -> Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(self.out, "{rule}").map_err(EngineError::Output)?;
        write_path_line(&mut self.out, "", source)?;
        writeln!(self.out, "{rule}").map_err(EngineError::Output)?;
        self.out.write_all(escaped).map_err(EngineError::Output)?;
        writeln!(self.out).map_err(EngineError::Output)
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush().map_err(EngineError::Output)
    }
}

/// Writes `<dir>/<file name>.txt` for each source file, creating `dir` on demand.
///
/// Progress notices go to `notices`.
#[derive(Debug)]
pub struct DirectorySink<W: Write> {
    dir: PathBuf,
    dir_mode: u32,
    file_mode: u32,
    notices: W,
}

impl<W: Write> DirectorySink<W> {
    pub const fn new(dir: PathBuf, notices: W) -> Self {
        Self {
            dir,
            dir_mode: DEFAULT_DIR_MODE,
            file_mode: DEFAULT_FILE_MODE,
            notices,
        }
    }

    #[must_use]
    pub const fn with_modes(mut self, dir_mode: u32, file_mode: u32) -> Self {
        self.dir_mode = dir_mode;
        self.file_mode = file_mode;
        self
    }

    /// Path the escaped copy of `source` is written to.
    #[must_use]
    pub fn target_for(&self, source: &Path) -> PathBuf {
        let mut name = OsString::from(source.file_name().unwrap_or(source.as_os_str()));
        name.push(".txt");
        self.dir.join(name)
    }

    /// Create the destination if it is missing.
    ///
    /// A creation failure is only logged; the following write reports it.
    fn ensure_dir(&mut self) -> Result<()> {
        if classify(&self.dir).is_ok() {
            return Ok(());
        }

        match create_dir_all(&self.dir, self.dir_mode) {
            Ok(()) => {
                log::info!("created destination {}", self.dir.display());
                write_path_line(&mut self.notices, "Creating directory: ", &self.dir)
            }
            Err(source) => {
                let err = EngineError::CreateDir {
                    path: self.dir.clone(),
                    source,
                };
                log::warn!("{err}");
                Ok(())
            }
        }
    }
}

impl<W: Write> OutputSink for DirectorySink<W> {
    fn emit(&mut self, source: &Path, escaped: &[u8]) -> Result<()> {
        self.ensure_dir()?;

        let target = self.target_for(source);
        write_path_line(&mut self.notices, "Creating ", &target)?;
        write_file(&target, escaped, self.file_mode).map_err(|source| EngineError::FileWrite {
            path: target,
            source,
        })
    }

    fn finish(&mut self) -> Result<()> {
        self.notices.flush().map_err(EngineError::Output)
    }
}

/// Write `prefix` then the raw bytes of `path`, so non-UTF-8 names print unaltered.
fn write_path_line<W: Write>(out: &mut W, prefix: &str, path: &Path) -> Result<()> {
    out.write_all(prefix.as_bytes())
        .and_then(|()| out.write_all(path.as_os_str().as_encoded_bytes()))
        .and_then(|()| out.write_all(b"\n"))
        .map_err(EngineError::Output)
}

fn create_dir_all(path: &Path, mode: u32) -> std::io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder.create(path)
}

fn write_file(path: &Path, data: &[u8], mode: u32) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    options.open(path)?.write_all(data)
}
