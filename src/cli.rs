use clap::Parser;
use std::path::PathBuf;

use crate::fs_op::FixtureError;
use crate::settings::{load_settings, GenerationConfig};

#[derive(Debug, Parser)]
#[command(
    name = "foldergen",
    version,
    about = "Populate a directory tree with fixed-size random binary files"
)]
pub struct Cli {
    /// Directory to populate (default: test_data)
    pub base_directory: Option<PathBuf>,

    /// TOML file with generation settings; flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of subdirectories to create
    #[arg(short = 'd', long = "dirs", value_name = "N")]
    pub subdirectory_count: Option<usize>,

    /// Number of files per subdirectory
    #[arg(short = 'f', long = "files", value_name = "N")]
    pub files_per_subdirectory: Option<usize>,

    /// Size of each file in KiB
    #[arg(short = 's', long = "size-kb", value_name = "KB")]
    pub file_size_kb: Option<u64>,

    /// Do not draw a progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Resolve the run settings: defaults, then the settings file, then flags.
    pub fn resolve(&self) -> Result<GenerationConfig, FixtureError> {
        let mut config = match &self.config {
            Some(path) => load_settings(path)?,
            None => GenerationConfig::default(),
        };
        if let Some(base) = &self.base_directory {
            config.base_directory = base.clone();
        }
        if let Some(n) = self.subdirectory_count {
            config.subdirectory_count = n;
        }
        if let Some(n) = self.files_per_subdirectory {
            config.files_per_subdirectory = n;
        }
        if let Some(kb) = self.file_size_kb {
            config.file_size_kb = kb;
        }
        config.validate()?;
        Ok(config)
    }
}
