use thiserror::Error;
use std::path::PathBuf;

/// Boxed error from the random byte source.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced while resolving settings or writing a fixture tree.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// A directory (the base or one of its subdirectories) could not be created.
    #[error("failed to create directory `{path}`: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A fixture file could not be opened, written or inspected.
    #[error("failed to write `{path}`: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The random source failed while filling a file.
    #[error("random source failed while filling `{path}`: {source}")]
    Random {
        path: PathBuf,
        source: SourceError,
    },

    /// A written file does not have the requested length.
    #[error("`{path}` is {actual} bytes after writing, expected {expected}")]
    SizeMismatch {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    /// Generation settings are unusable.
    #[error("invalid generation settings: {0}")]
    Config(String),

    /// A settings file could not be read.
    #[error("failed to read settings file `{path}`: {source}")]
    ConfigFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A settings file is not valid TOML for `GenerationConfig`.
    #[error("failed to parse settings file `{path}`: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl FixtureError {
    /// True for the variants that wrap an operating-system I/O failure.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            FixtureError::CreateDir { .. }
                | FixtureError::WriteFile { .. }
                | FixtureError::ConfigFile { .. }
        )
    }

    /// The path the failure refers to, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            FixtureError::CreateDir { path, .. }
            | FixtureError::WriteFile { path, .. }
            | FixtureError::Random { path, .. }
            | FixtureError::SizeMismatch { path, .. }
            | FixtureError::ConfigFile { path, .. }
            | FixtureError::ConfigParse { path, .. } => Some(path),
            FixtureError::Config(_) => None,
        }
    }
}
