use crate::error::{Result, TallyError};
use crate::types::config::TallyConfig;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "tally.toml";

/// Looks for `tally.toml` next to the snapshot: inside a snapshot directory,
/// or as a sibling of a snapshot file. Absent config is not an error.
pub fn load_config(snapshot_path: &Path) -> Result<Option<TallyConfig>> {
    let dir = if snapshot_path.is_dir() {
        snapshot_path
    } else {
        snapshot_path.parent().unwrap_or_else(|| Path::new("."))
    };
    let path = dir.join(DEFAULT_CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)?;
    let cfg: TallyConfig = toml::from_str(&content)
        .map_err(|e| TallyError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    cfg.validate()?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(Some(cfg))
}
