//! Host config loader (strict parsing).

pub mod schema;

use std::fs;

use palindrome_labels_core::error::{PolicyError, Result};

pub use schema::{HostConfig, HostSection};

/// Used when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "palindrome-labels.yaml";

pub fn load_from_file(path: &str) -> Result<HostConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| PolicyError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<HostConfig> {
    let cfg: HostConfig = serde_yaml::from_str(s)
        .map_err(|e| PolicyError::MalformedInput(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
