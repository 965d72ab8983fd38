// crates/cli/src/config.rs
use crate::args::Args;
pub use escapehtml_engine::config::{Config, ConfigBuilder, ConfigBuilderError};
use escapehtml_engine::validate::Invocation;

/// Assemble the engine config from validated paths and the remaining flags.
pub fn config_from(invocation: Invocation, args: &Args) -> Result<Config, ConfigBuilderError> {
    ConfigBuilder::default()
        .source(invocation.source)
        .destination(invocation.destination)
        .strict(args.strict)
        .build()
}
