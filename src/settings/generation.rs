use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::fs_op::FixtureError;

pub const DEFAULT_BASE_DIRECTORY: &str = "test_data";
pub const DEFAULT_SUBDIRECTORY_COUNT: usize = 5;
pub const DEFAULT_FILES_PER_SUBDIRECTORY: usize = 10;
pub const DEFAULT_FILE_SIZE_KB: u64 = 200;

/// Everything a generation run needs. Fixed for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Root under which `folder_<i>` subdirectories are created.
    pub base_directory: PathBuf,
    pub subdirectory_count: usize,
    pub files_per_subdirectory: usize,
    /// Size of each file in KiB (1024 bytes).
    pub file_size_kb: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_directory: PathBuf::from(DEFAULT_BASE_DIRECTORY),
            subdirectory_count: DEFAULT_SUBDIRECTORY_COUNT,
            files_per_subdirectory: DEFAULT_FILES_PER_SUBDIRECTORY,
            file_size_kb: DEFAULT_FILE_SIZE_KB,
        }
    }
}

impl GenerationConfig {
    pub fn new(
        base_directory: impl Into<PathBuf>,
        subdirectory_count: usize,
        files_per_subdirectory: usize,
        file_size_kb: u64,
    ) -> Self {
        Self {
            base_directory: base_directory.into(),
            subdirectory_count,
            files_per_subdirectory,
            file_size_kb,
        }
    }

    /// Parse settings from a TOML document. Missing keys keep their defaults.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Length in bytes of every generated file.
    pub fn file_size_bytes(&self) -> Result<u64, FixtureError> {
        self.file_size_kb.checked_mul(1024).ok_or_else(|| {
            FixtureError::Config(format!(
                "file size of {} KiB does not fit in 64 bits of bytes",
                self.file_size_kb
            ))
        })
    }

    /// Number of files a successful run leaves behind.
    pub fn total_files(&self) -> Result<u64, FixtureError> {
        (self.subdirectory_count as u64)
            .checked_mul(self.files_per_subdirectory as u64)
            .ok_or_else(|| {
                FixtureError::Config(format!(
                    "{} directories of {} files overflows the file count",
                    self.subdirectory_count, self.files_per_subdirectory
                ))
            })
    }

    /// Reject settings that cannot describe a run. Zero counts and a zero
    /// size are valid and simply produce nothing in that dimension.
    pub fn validate(&self) -> Result<(), FixtureError> {
        if self.base_directory.as_os_str().is_empty() {
            return Err(FixtureError::Config("base directory is empty".into()));
        }
        self.file_size_bytes()?;
        self.total_files()?;
        Ok(())
    }
}
