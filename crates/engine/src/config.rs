use derive_builder::Builder;
use std::path::PathBuf;

/// Permissions applied to a destination directory created by the run.
pub const DEFAULT_DIR_MODE: u32 = 0o775;
/// Permissions applied to each escaped `.txt` file.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub source: PathBuf,
    /// Console output when `None`.
    #[builder(default)]
    pub destination: Option<PathBuf>,
    /// Abort on the first per-file error instead of skipping it.
    #[builder(default)]
    pub strict: bool,
    #[builder(default = "DEFAULT_DIR_MODE")]
    pub dir_mode: u32,
    #[builder(default = "DEFAULT_FILE_MODE")]
    pub file_mode: u32,
}
