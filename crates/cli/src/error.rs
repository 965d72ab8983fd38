// crates/cli/src/error.rs
use escapehtml_engine::config::ConfigBuilderError;
use escapehtml_engine::error::EngineError;
use escapehtml_engine::validate::ArgsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Args(#[from] ArgsError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigBuilderError),
}

impl AppError {
    /// Whether the usage line should be shown instead of an error message.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Args(e) if e.is_usage())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
