//! Config file lookup
//!
//! The first search root holding `.cloud-storage-store.toml` wins:
//! the working directory, then the home directory.

use std::path::{Path, PathBuf};

/// Name of the config file looked up in every search root
pub const CONFIG_FILE: &str = ".cloud-storage-store.toml";

/// Default search roots: working directory, then `$HOME` if set
pub fn config_search_roots() -> Vec<PathBuf> {
    let mut roots = vec![PathBuf::from(".")];
    if let Some(home) = std::env::var_os("HOME") {
        roots.push(PathBuf::from(home));
    }
    roots
}

/// Load the config file content from the default search roots
pub fn load_config_file() -> Option<String> {
    load_config_file_from(&config_search_roots())
}

/// Load the config file content from the first root that has one
pub fn load_config_file_from(roots: &[PathBuf]) -> Option<String> {
    roots
        .iter()
        .map(|root| root.join(CONFIG_FILE))
        .find_map(|path| read_config(&path))
}

fn read_config(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(e) => {
            log::trace!("No config at {}: {}", path.display(), e);
            None
        }
    }
}
