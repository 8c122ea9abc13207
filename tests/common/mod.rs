//! Shared testing utilities for naapi-launch tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated `$HOME` for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::create_dir_all(root.path().join("home")).expect("Failed to create test home");
        Self { root }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// Directory standing in for the launcher's own location.
    pub fn launcher_dir(&self) -> PathBuf {
        self.root.path().join("bin")
    }

    /// Build a command for invoking the compiled `naapi-launch` binary.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("naapi-launch").expect("Failed to locate naapi-launch binary");
        cmd.current_dir(self.root.path()).env("HOME", self.home()).env_remove("RUST_LOG");
        cmd
    }

    pub fn claude_json(&self) -> PathBuf {
        self.home().join(".claude.json")
    }

    /// Create `~/Downloads/NaAPICodex.app` as an empty bundle directory.
    pub fn install_bundle_in_downloads(&self) -> PathBuf {
        let bundle = self.home().join("Downloads").join("NaAPICodex.app");
        fs::create_dir_all(bundle.join("Contents")).expect("Failed to create bundle");
        bundle
    }

    /// Write a file relative to `$HOME`, creating parent directories.
    pub fn write_home_file(&self, relative: impl AsRef<Path>, content: &str) {
        let path = self.home().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn read_claude_json(&self) -> Option<String> {
        fs::read_to_string(self.claude_json()).ok()
    }
}
