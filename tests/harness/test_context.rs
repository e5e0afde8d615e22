//! Shared testing harness for `hacsgen` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variable tests use for the discovery key, so a developer's real key never leaks in.
pub(crate) const TEST_KEY_ENV: &str = "HACSGEN_TEST_GEMINI_KEY";

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `hacsgen` binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("hacsgen").expect("Failed to locate hacsgen binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env_remove("GEMINI_API_KEY")
            .env_remove(TEST_KEY_ENV)
            .env_remove("HACSGEN_LOG");
        cmd
    }

    /// Write `hacsgen.toml` into the work directory.
    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("hacsgen.toml"), content).expect("Failed to write hacsgen.toml");
    }

    /// Read a file relative to the work directory.
    pub(crate) fn read(&self, relative: impl AsRef<Path>) -> String {
        let path = self.work_dir.join(relative.as_ref());
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Initialize a git repository in the work directory with an `origin` remote.
    pub(crate) fn init_git_with_origin(&self, url: &str) {
        let repo = git2::Repository::init(&self.work_dir).expect("Failed to init git repository");
        repo.remote("origin", url).expect("Failed to add origin remote");
    }
}
