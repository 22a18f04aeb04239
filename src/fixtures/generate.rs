use std::fmt;
use std::path::PathBuf;

use indicatif::ProgressBar;
use rand::rngs::OsRng;
use rand::TryRngCore;
use tracing::{debug, info};

use crate::fixtures::naming;
use crate::fs_op::{ensure_dir, write_random_file, FixtureError};
use crate::settings::GenerationConfig;

/// Outcome of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub base_directory: PathBuf,
    /// Directories that did not exist before the run (base included).
    pub directories_created: u64,
    pub files_created: u64,
    pub bytes_written: u64,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Created {} files in '{}'",
            self.files_created,
            self.base_directory.display()
        )
    }
}

/// Generate the fixture tree described by `config` using the operating
/// system's secure random source and no progress output.
pub fn generate(config: &GenerationConfig) -> Result<GenerationReport, FixtureError> {
    generate_with(config, &mut OsRng, &ProgressBar::hidden())
}

/// Generate the fixture tree drawing bytes from `rng` and counting written
/// files on `progress`.
///
/// The base directory is created first, so a base path occupied by a regular
/// file fails before any subdirectory exists. Existing directories are reused
/// and existing files are truncated and rewritten. On error, everything
/// written so far stays on disk.
pub fn generate_with<R>(
    config: &GenerationConfig,
    rng: &mut R,
    progress: &ProgressBar,
) -> Result<GenerationReport, FixtureError>
where
    R: TryRngCore,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    config.validate()?;
    let file_len = config.file_size_bytes()?;
    let base = &config.base_directory;

    info!(
        "generating {} x {} files of {} bytes under {}",
        config.subdirectory_count,
        config.files_per_subdirectory,
        file_len,
        base.display()
    );

    let mut report = GenerationReport {
        base_directory: base.clone(),
        directories_created: 0,
        files_created: 0,
        bytes_written: 0,
    };

    if ensure_dir(base)? {
        report.directories_created += 1;
    }
    progress.set_length(config.total_files()?);

    for d in 0..config.subdirectory_count {
        let folder = naming::folder_name(d);
        let dir = base.join(&folder);
        if ensure_dir(&dir)? {
            report.directories_created += 1;
        }
        debug!("populating {}", dir.display());
        progress.set_message(folder);

        for f in 0..config.files_per_subdirectory {
            let path = dir.join(naming::file_name(f));
            let n = write_random_file(&path, file_len, rng)?;
            debug!("wrote {} bytes to {}", n, path.display());
            report.files_created += 1;
            report.bytes_written = report.bytes_written.saturating_add(n);
            progress.inc(1);
        }
    }

    progress.finish_and_clear();
    info!(
        "created {} files ({} bytes) in {}",
        report.files_created,
        report.bytes_written,
        base.display()
    );
    Ok(report)
}
