//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod git;

pub use self::git::{create_test_commit, is_git_available, setup_git_repo};

use std::fs;
use std::path::{Path, PathBuf};

/// Creates a directory containing a `.git` marker directory, so discovery
/// treats it as a repository root. `name` may contain path separators for
/// nested layouts.
pub fn make_repo(parent: &Path, name: &str) -> PathBuf {
    let repo = parent.join(name);
    fs::create_dir_all(repo.join(".git")).expect("failed to create repo fixture");
    repo
}

/// Creates a plain directory with no repository marker.
pub fn make_dir(parent: &Path, name: &str) -> PathBuf {
    let dir = parent.join(name);
    fs::create_dir_all(&dir).expect("failed to create directory fixture");
    dir
}

/// Drops a marker file into a repo fixture; test sync commands key off it.
pub fn mark_ok(repo: &Path) {
    fs::write(repo.join("ok"), "").expect("failed to write ok marker");
}

/// Writes a per-repo delay value (in seconds) read by test sync scripts.
pub fn set_delay(repo: &Path, seconds: &str) {
    fs::write(repo.join("delay"), seconds).expect("failed to write delay file");
}
