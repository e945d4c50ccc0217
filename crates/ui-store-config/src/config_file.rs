//! Lookup of the `.ui-store.toml` config file
//!
//! A file in the working directory shadows the one in `$HOME`.

use std::path::PathBuf;

const CONFIG_FILE: &str = ".ui-store.toml";

/// Candidate config files, highest precedence first
fn candidates() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(CONFIG_FILE));
    }
    paths
}

/// Content of the first config file that can be read, if any
pub fn load_config_file() -> Option<String> {
    candidates().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}
