use std::fs;
use std::path::Path;

use crate::fs_op::FixtureError;
use crate::settings::GenerationConfig;

/// Load generation settings from a TOML file at `path`.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<GenerationConfig, FixtureError> {
    let p = path.as_ref();
    let text = fs::read_to_string(p).map_err(|source| FixtureError::ConfigFile {
        path: p.to_path_buf(),
        source,
    })?;
    let config = GenerationConfig::from_toml(&text).map_err(|source| FixtureError::ConfigParse {
        path: p.to_path_buf(),
        source,
    })?;
    tracing::debug!("loaded generation settings from {}", p.display());
    Ok(config)
}
