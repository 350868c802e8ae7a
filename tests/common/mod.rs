//! Common test utilities

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary directory with a sitepipe.yml file
pub fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("sitepipe.yml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

/// Write an executable stub script into a test directory
///
/// Stubs stand in for the external CLIs (hugo, stitch-cli) so tests never
/// need the real binaries.
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();

    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();

    path
}
