//! Config file test utilities

use std::path::PathBuf;

use tempfile::TempDir;

/// Write `content` as config.json into a fresh temp dir
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}
