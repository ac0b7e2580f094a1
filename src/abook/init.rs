use crate::api::AbookApi;
use crate::config::AbookConfig;
use crate::error::{AbookError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the per-user data directory.
pub const HOME_ENV: &str = "ABOOK_HOME";

pub struct AbookContext {
    pub api: AbookApi<FileStore>,
    pub data_file: PathBuf,
}

/// The directory holding `config.json` and, by default, the address book.
pub fn resolve_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "abook", "abook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AbookError::Store("Could not determine a data directory".to_string()))
}

/// An explicit `--file` wins; otherwise the configured name inside `home`.
pub fn data_file_path(home: &Path, config: &AbookConfig, file: Option<&Path>) -> PathBuf {
    match file {
        Some(path) => path.to_path_buf(),
        None => home.join(&config.data_file),
    }
}

pub fn initialize(home: &Path, file: Option<&Path>) -> Result<AbookContext> {
    let config = AbookConfig::load(home)?;
    let data_file = data_file_path(home, &config, file);
    debug!(home = %home.display(), data_file = %data_file.display(), "resolved paths");

    let api = AbookApi::open(FileStore::new(&data_file), &config)?;
    Ok(AbookContext { api, data_file })
}
