// crates/cli/src/args.rs
use clap::{Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
///
/// Positional paths are collected as-is; their count and meaning are checked
/// by `escapehtml_engine::validate` so a bad count still produces the usage line.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "escapehtml",
    version = crate::VERSION,
    about = "HTML-escape every file under a path",
    long_about = "HTML-escape every file under a path.\n\n\
        With only a source, each file is printed under a banner naming its path. \
        With a destination directory, each file is written to <dest_dir>/<name>.txt; \
        the directory is created if missing.\n\n\
        Set ESCAPEHTML_LOG=warn to see files that were skipped."
)]
pub struct Args {
    /// <source_file/source_dir> [dest_dir]
    ///
    /// Paths may start with `-`; options must come before them.
    #[arg(value_name = "PATH", value_hint = ValueHint::AnyPath, allow_hyphen_values = true)]
    pub paths: Vec<PathBuf>,

    /// Stop at the first file that cannot be read or written, and exit with status 1
    #[arg(long)]
    pub strict: bool,
}
