use std::fs;
use std::path::{Path, PathBuf};

use super::core::{VecfmtConfig, CONFIG_FILE_NAME};
use crate::errors::{Error, Result};

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read a whole config file into memory.
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    fs::read_to_string(path)
}

/// Deserialize TOML text, reporting the parser's message on failure.
pub fn parse_config(contents: &str) -> std::result::Result<VecfmtConfig, String> {
    toml::from_str::<VecfmtConfig>(contents).map_err(|e| e.message().to_string())
}

/// Load an explicitly requested config file.
///
/// Unlike [`load_config`], a missing or malformed file is an error here.
pub fn load_config_from(path: &Path) -> Result<VecfmtConfig> {
    let contents = read_config_file(path).map_err(|e| Error::io(path, e))?;
    let config = parse_config(&contents).map_err(|e| Error::config(path, e))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Lenient load used while searching: any failure yields `None` so the
/// search moves on to the next ancestor.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<VecfmtConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Absent files are the normal case during discovery; anything else is
/// worth a warning.
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start`, its parent, its grandparent and so on, capped at `max_depth`
/// paths in total.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Nearest usable `.vecfmt.toml` at or above `start`.
pub(crate) fn discover_config(start: PathBuf) -> Option<VecfmtConfig> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
}

/// Config for the working directory; an empty default when nothing usable
/// is found.
pub fn load_config() -> VecfmtConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return VecfmtConfig::default();
        }
    };

    discover_config(current).unwrap_or_else(|| {
        tracing::debug!(
            "No config found after checking {} directories. Using default config.",
            MAX_TRAVERSAL_DEPTH
        );
        VecfmtConfig::default()
    })
}
