//! Git fixture helpers for tests that shell out to the real tool

use anyhow::Result;
use std::path::Path;
use std::process::Command;

/// Turns `path` into a git repository with commit identity configured, so
/// fixtures can commit without touching the user's global config.
pub fn setup_git_repo(path: &Path) -> Result<()> {
    let init = Command::new("git")
        .args(["init", "-q"])
        .current_dir(path)
        .output()?;
    if !init.status.success() {
        anyhow::bail!(
            "git init failed: {}",
            String::from_utf8_lossy(&init.stderr)
        );
    }

    for args in [
        ["config", "user.name", "Test User"],
        ["config", "user.email", "test@example.com"],
        ["config", "commit.gpgsign", "false"],
    ] {
        Command::new("git").args(args).current_dir(path).output()?;
    }

    Ok(())
}

/// Writes a file and commits it in the given repository.
pub fn create_test_commit(path: &Path, file_name: &str, content: &str, message: &str) -> Result<()> {
    std::fs::write(path.join(file_name), content)?;

    Command::new("git")
        .args(["add", file_name])
        .current_dir(path)
        .output()?;

    let commit = Command::new("git")
        .args(["commit", "-q", "-m", message])
        .current_dir(path)
        .output()?;
    if !commit.status.success() {
        anyhow::bail!(
            "git commit failed: {}",
            String::from_utf8_lossy(&commit.stderr)
        );
    }

    Ok(())
}

/// True when a usable git binary is on PATH.
pub fn is_git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
