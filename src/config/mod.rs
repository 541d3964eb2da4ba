//! Configuration loading
//!
//! Discovery order: an explicit path, the WEBSEARCH_CONFIG environment
//! variable, ./config.json, then the per-user config directory. A
//! missing or malformed file is never fatal; resolution falls back to
//! the built-in defaults with a warning.

mod settings;

pub use settings::*;

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Resolve and load the active configuration.
///
/// Returns the parsed settings by value so callers thread them through
/// explicitly. There is no process-global configuration state.
pub fn load(explicit: Option<&Path>) -> Settings {
    let Some(path) = discover(explicit) else {
        debug!("no configuration file found, using built-in defaults");
        return Settings::default();
    };
    match Settings::from_file(&path) {
        Ok(settings) => {
            debug!(path = %path.display(), "loaded configuration");
            settings
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "ignoring unusable configuration file"
            );
            Settings::default()
        }
    }
}

/// First candidate path in override order.
fn discover(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var("WEBSEARCH_CONFIG") {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    let local = PathBuf::from("config.json");
    if local.exists() {
        return Some(local);
    }
    if let Some(dir) = dirs::config_dir() {
        let path = dir.join("websearch").join("config.json");
        if path.exists() {
            return Some(path);
        }
    }
    None
}
