// crates/engine/src/lib.rs
//! Walks a file or directory and HTML-escapes every file found, printing the
//! result under a banner or writing `<name>.txt` copies into a destination
//! directory.

use std::io::Write;

pub mod config;
pub mod error;
pub mod escape;
pub mod filesystem;
pub mod output;
pub mod path_kind;
pub mod processor;
pub mod stats;
pub mod validate;

use crate::config::Config;
use crate::error::Result;
use crate::filesystem::{FsReader, source_files};
use crate::output::{ConsoleSink, DirectorySink};
use crate::stats::RunResult;

/// Run the escaper over `config.source`.
///
/// Console banners, or directory and file creation notices, are written to
/// `out`.
///
/// # Errors
///
/// In strict mode, the first per-file failure. Otherwise only a failure to
/// flush `out`; per-file errors are collected in [`RunResult::skipped`].
pub fn run<W: Write>(config: &Config, out: W) -> Result<RunResult> {
    let files = source_files(&config.source);

    match &config.destination {
        None => {
            let mut sink = ConsoleSink::new(out);
            processor::process_files(files, &FsReader, &mut sink, config.strict)
        }
        Some(dest) => {
            let mut sink = DirectorySink::new(dest.clone(), out)
                .with_modes(config.dir_mode, config.file_mode);
            processor::process_files(files, &FsReader, &mut sink, config.strict)
        }
    }
}
