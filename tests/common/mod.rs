//! Shared testing utilities for promptdeck CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Two-record catalog used by most scenarios.
pub const SAMPLE_CATALOG: &str = r#"[
    {"id": 1, "title": "Alpha", "body": "b", "tags": ["x"], "code": "c1"},
    {"id": 2, "title": "Beta", "body": "b", "tags": ["y"], "code": "c2"}
]"#;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Create an environment whose `prompts.json` holds the sample catalog.
    pub fn with_sample_catalog() -> Self {
        let ctx = Self::new();
        ctx.write_catalog(SAMPLE_CATALOG);
        ctx
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `promptdeck` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("promptdeck").expect("Failed to locate promptdeck binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.root.path()).env_remove("PROMPTDECK_LOG");
        cmd
    }

    /// Write `prompts.json` in the work directory.
    pub fn write_catalog(&self, content: &str) {
        self.write_file("prompts.json", content);
    }

    /// Write `promptdeck.toml` in the work directory.
    pub fn write_config(&self, content: &str) {
        self.write_file("promptdeck.toml", content);
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name)).expect("Failed to read test file")
    }
}
