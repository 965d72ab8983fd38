use clap::Parser;
use env_logger::Env;
use escapehtml_cli::args::Args;
use escapehtml_cli::presentation::DEFAULT_PROGRAM;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init_from_env(Env::new().filter("ESCAPEHTML_LOG"));

    let program = std::env::args_os()
        .next()
        .map_or_else(|| DEFAULT_PROGRAM.to_string(), |p| p.to_string_lossy().into_owned());
    let args = Args::parse();

    escapehtml_cli::run(&program, &args, std::io::stdout().lock(), std::io::stderr().lock()).into()
}
