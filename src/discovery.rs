//! Breadth-first repository discovery that prunes at repository roots

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::config::GIT_MARKER_DIR;

/// A repository root found during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoEntry {
    /// Path from the search root, used for display. Empty when the search
    /// root is itself a repository.
    pub relative_path: PathBuf,
    /// Fully-qualified path, used to invoke git.
    pub absolute_path: PathBuf,
}

impl RepoEntry {
    /// Display form of the relative path; the search root shows as ".".
    pub fn display_name(&self) -> String {
        if self.relative_path.as_os_str().is_empty() {
            ".".to_string()
        } else {
            self.relative_path.display().to_string()
        }
    }
}

/// A `.git` entry can be a plain file that points at the real git directory
/// through a `gitdir:` line (worktrees and submodule checkouts do this).
/// Peeks at the first few lines to tell those apart from stray files.
fn is_git_file(path: &Path) -> bool {
    let Ok(file) = fs::File::open(path) else {
        return false;
    };
    BufReader::new(file)
        .lines()
        .take(5)
        .filter_map(Result::ok)
        .any(|line| line.trim_start().starts_with("gitdir:"))
}

/// Walks the tree under `root` breadth-first and invokes `on_repo` for every
/// repository root found. A directory containing the `.git` marker is treated
/// as a leaf: none of its other children are enqueued, so nested checkouts
/// inside a repository's working tree are never reported separately.
///
/// The frontier holds paths relative to `root`; each directory is dequeued
/// before its children are considered, so every directory is visited at most
/// once. Any unreadable directory aborts the walk with an error rather than
/// producing a partial view.
///
/// Returns the number of repositories discovered.
pub fn walk_repos<F>(root: &Path, mut on_repo: F) -> Result<usize>
where
    F: FnMut(RepoEntry),
{
    let mut frontier: VecDeque<PathBuf> = VecDeque::new();
    frontier.push_back(PathBuf::new());
    let mut found = 0;

    while let Some(relative_path) = frontier.pop_front() {
        let absolute_path = root.join(&relative_path);
        let entries = fs::read_dir(&absolute_path)
            .with_context(|| format!("failed to read directory {}", absolute_path.display()))?;

        let mut child_dirs: Vec<PathBuf> = Vec::new();
        let mut is_repo = false;

        for entry in entries {
            let entry = entry.with_context(|| {
                format!("failed to list directory {}", absolute_path.display())
            })?;
            let file_name = entry.file_name();
            let file_type = entry.file_type().with_context(|| {
                format!("failed to stat {}", entry.path().display())
            })?;

            if file_name == GIT_MARKER_DIR {
                // Submodules and worktrees expose a .git file instead of a dir
                if file_type.is_dir() || is_git_file(&entry.path()) {
                    is_repo = true;
                    break;
                }
                continue;
            }

            // Follow symlinked directories, like the underlying git tooling does
            let is_dir = if file_type.is_symlink() {
                fs::metadata(entry.path()).map(|m| m.is_dir()).unwrap_or(false)
            } else {
                file_type.is_dir()
            };
            if is_dir {
                child_dirs.push(relative_path.join(file_name));
            }
        }

        if is_repo {
            found += 1;
            on_repo(RepoEntry {
                relative_path,
                absolute_path,
            });
            continue;
        }

        frontier.extend(child_dirs);
    }

    Ok(found)
}
