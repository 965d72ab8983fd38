// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod presentation;

use crate::args::Args;
use crate::error::Result;
use escapehtml_engine::stats::RunResult;
use escapehtml_engine::validate::validate;
use std::io::Write;
use std::process::ExitCode;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Process outcome, mapped to an exit code only by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => Self::SUCCESS,
            Status::Failure => Self::FAILURE,
        }
    }
}

/// Validate `args`, run the escaper and report failures.
///
/// Escaped output and creation notices go to `stdout`; usage and error lines
/// go to `stderr`. `program` is shown in the usage line.
pub fn run<O: Write, E: Write>(program: &str, args: &Args, stdout: O, mut stderr: E) -> Status {
    match try_run(args, stdout) {
        Ok(result) => {
            presentation::log_summary(&result);
            Status::Success
        }
        Err(e) => {
            presentation::print_failure(&mut stderr, program, &e);
            Status::Failure
        }
    }
}

fn try_run<O: Write>(args: &Args, stdout: O) -> Result<RunResult> {
    let invocation = validate(args.paths.as_slice())?;
    let config = config::config_from(invocation, args)?;
    Ok(escapehtml_engine::run(&config, stdout)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn args<P: AsRef<Path>>(paths: &[P]) -> Args {
        Args {
            paths: paths.iter().map(|p| p.as_ref().to_path_buf()).collect(),
            strict: false,
        }
    }

    #[test]
    fn no_arguments_prints_usage() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let status = run("escapehtml", &Args::default(), &mut out, &mut err);

        assert_eq!(status, Status::Failure);
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Usage: escapehtml <source_file/source_dir> [dest_dir]\n"
        );
    }

    #[test]
    fn console_run_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.html");
        fs::write(&file, "a < b").unwrap();

        let (mut out, mut err) = (Vec::new(), Vec::new());
        let status = run("escapehtml", &args(&[&file]), &mut out, &mut err);

        assert_eq!(status, Status::Success);
        assert!(err.is_empty());
        assert!(String::from_utf8(out).unwrap().contains("a &lt; b"));
    }

    #[cfg(unix)]
    #[test]
    fn strict_run_fails_on_unwritable_target() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.html");
        fs::write(&file, "x").unwrap();
        let dest = dir.path().join("out");
        fs::create_dir_all(dest.join("a.html.txt")).unwrap();

        let mut strict = args(&[&file, &dest]);
        strict.strict = true;
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let status = run("escapehtml", &strict, &mut out, &mut err);

        assert_eq!(status, Status::Failure);
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("Error: Failed to write file"), "{err}");

        let lenient = args(&[&file, &dest]);
        let status = run("escapehtml", &lenient, Vec::new(), Vec::new());
        assert_eq!(status, Status::Success);
        assert!(dest.join("a.html.txt").is_dir());
    }
}
