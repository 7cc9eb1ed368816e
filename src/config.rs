//! Configuration and data directory management.
//!
//! Segue keeps its catalog in the platform-standard data directory:
//! - Linux: `~/.local/share/segue/`
//! - macOS: `~/Library/Application Support/segue/`
//! - Windows: `%APPDATA%\segue\`

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Path to the catalog database, creating the `segue` data directory if it
/// does not exist yet.
///
/// # Errors
///
/// Fails if the platform data directory cannot be determined or the segue
/// subdirectory cannot be created.
pub fn get_db_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join("transitions.db"))
}

/// Platform-appropriate data directory for segue, created on first use.
/// Also used for snapshot exports when no explicit path is given.
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        anyhow::anyhow!("Could not determine the system data directory for this platform.")
    })?;

    let segue_dir = data_dir.join("segue");
    fs::create_dir_all(&segue_dir).with_context(|| {
        format!(
            "Failed to create the segue data directory at {}",
            segue_dir.display()
        )
    })?;

    Ok(segue_dir)
}

/// Default location for JSON snapshot exports.
pub fn default_snapshot_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join("transitions.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_path_lives_in_the_segue_directory() {
        let path = get_db_path().expect("db path");
        assert!(path.is_absolute());
        assert!(path.to_string_lossy().ends_with("transitions.db"));
        assert_eq!(path.parent().unwrap().file_name().unwrap(), "segue");
    }

    #[test]
    fn data_dir_is_created() {
        let dir = get_data_dir().expect("data dir");
        assert!(dir.exists());
        assert!(dir.is_dir());
    }

    #[test]
    fn repeated_calls_agree() {
        assert_eq!(get_db_path().unwrap(), get_db_path().unwrap());
    }

    #[test]
    fn snapshot_path_is_json() {
        let path = default_snapshot_path().unwrap();
        assert!(path.to_string_lossy().ends_with("transitions.json"));
    }
}
