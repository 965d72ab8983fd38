// crates/cli/src/presentation.rs
use crate::error::AppError;
use escapehtml_engine::stats::RunResult;
use std::io::Write;

/// Program name used when argv[0] is unavailable.
pub const DEFAULT_PROGRAM: &str = "escapehtml";

pub fn usage_line(program: &str) -> String {
    format!("Usage: {program} <source_file/source_dir> [dest_dir]")
}

/// Print either the usage line or an `Error: ` message for `err`.
pub fn print_failure<W: Write>(out: &mut W, program: &str, err: &AppError) {
    let line = if err.is_usage() {
        usage_line(program)
    } else {
        format!("Error: {err}")
    };
    let _ = writeln!(out, "{line}");
}

/// Log the outcome of a finished run. Skipped files were already warned about
/// one by one while walking.
pub fn log_summary(result: &RunResult) {
    if result.is_clean() {
        log::info!("escaped {} files", result.processed);
    } else {
        log::warn!(
            "escaped {} files, skipped {}",
            result.processed,
            result.skipped.len()
        );
    }
}
