//! Common test utilities for embedgen integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Temporary directory holding assets and generated files
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new empty test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a binary asset
    pub fn write_asset(&self, name: &str, bytes: &[u8]) {
        let file_path = self.path.join(name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, bytes).expect("Failed to write asset");
    }

    /// Write a text file (manifests, stale outputs)
    pub fn write_file(&self, name: &str, content: &str) {
        self.write_asset(name, content.as_bytes());
    }

    /// Read a generated file
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path.join(name)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, name: &str) -> bool {
        self.path.join(name).exists()
    }

    /// Write a manifest with the given (stem, symbol) entries, returning its path
    pub fn write_manifest(&self, entries: &[(&str, &str)]) -> PathBuf {
        let mut yaml = String::from("assets:\n");
        for (stem, symbol) in entries {
            yaml.push_str(&format!("  - stem: {stem}\n    symbol: {symbol}\n"));
        }
        self.write_file("embed.yaml", &yaml);
        self.path.join("embed.yaml")
    }

    /// `embedgen` command running inside this workspace
    pub fn cmd(&self) -> Command {
        embedgen_cmd_in(&self.path)
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn embedgen_cmd() -> Command {
    Command::cargo_bin("embedgen").expect("embedgen binary should be built")
}

/// `embedgen` command with `dir` as current directory
pub fn embedgen_cmd_in(dir: &Path) -> Command {
    let mut cmd = embedgen_cmd();
    cmd.current_dir(dir);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
    }

    #[test]
    fn test_workspace_manifest() {
        let workspace = TestWorkspace::new();
        let manifest = workspace.write_manifest(&[("Font", "FONT")]);
        assert!(manifest.exists());
        assert_eq!(
            workspace.read_file("embed.yaml"),
            "assets:\n  - stem: Font\n    symbol: FONT\n"
        );
    }
}
