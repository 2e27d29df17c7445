//! Colored terminal reporting and final result classification

use std::io::Write;
use std::path::Path;

use crate::config::{ALL_UPDATED_MESSAGE, COMPLETE_FAILURE_MESSAGE, NO_REPOS_MESSAGE};
use crate::sync::ResultSets;

// ANSI escape sequences
const BOLD: &str = "\x1b[1m";
const CYAN: &str = "\x1b[96m";
const GREEN: &str = "\x1b[92m";
const BLUE: &str = "\x1b[94m";
const YELLOW: &str = "\x1b[93m";
const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

/// How a finished run is summarized. Exactly one case applies to any result
/// partition; the all-succeeded and all-failed cases take priority over the
/// mixed listing they are degenerate instances of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSummary {
    /// Nothing was discovered, so nothing ran.
    NoRepos,
    /// At least one repository, zero failures.
    AllSucceeded,
    /// At least one repository, zero successes.
    AllFailed,
    /// Some of each; both lists get printed.
    Mixed,
}

impl RunSummary {
    pub fn classify(results: &ResultSets) -> Self {
        if results.total() == 0 {
            RunSummary::NoRepos
        } else if results.failed.is_empty() {
            RunSummary::AllSucceeded
        } else if results.successful.is_empty() {
            RunSummary::AllFailed
        } else {
            RunSummary::Mixed
        }
    }
}

/// Writes status lines with optional ANSI color.
///
/// A clone rides along in every synchronization task, so per-repo notices and
/// the final summary share one color toggle instead of process-global state.
/// Each notice is a single write; interleaving between concurrent tasks is
/// acceptable, and the join barrier keeps the summary out of their way.
#[derive(Debug, Clone)]
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, code: &'static str) -> &'static str {
        if self.color {
            code
        } else {
            ""
        }
    }

    /// Version banner printed at startup.
    pub fn banner(&self, version: &str) {
        println!("pull-all-repos version {version}");
    }

    /// Announces the search root before discovery begins.
    pub fn search_root(&self, root: &Path) {
        println!("Searching from root directory:");
        println!(
            "{}{}/{}",
            self.paint(BOLD),
            root.display(),
            self.paint(RESET)
        );
    }

    /// Start notice for one repository's pull, emitted by its own task.
    pub fn repo_start(&self, display_name: &str) {
        println!(
            "{}Updating git repo: {}{}",
            self.paint(CYAN),
            display_name,
            self.paint(RESET)
        );
    }

    /// Prints the final summary for a completed run.
    ///
    /// Failed repository paths go to stderr so scripts can separate them from
    /// the success listing.
    pub fn results(&self, results: &ResultSets) {
        println!();
        println!("{}Results:{}", self.paint(BOLD), self.paint(RESET));

        match RunSummary::classify(results) {
            RunSummary::NoRepos => {
                println!("{}{}{}", self.paint(YELLOW), NO_REPOS_MESSAGE, self.paint(RESET));
            }
            RunSummary::AllSucceeded => {
                println!("{}{}{}", self.paint(GREEN), ALL_UPDATED_MESSAGE, self.paint(RESET));
            }
            RunSummary::AllFailed => {
                println!(
                    "{}{}{}",
                    self.paint(RED),
                    COMPLETE_FAILURE_MESSAGE,
                    self.paint(RESET)
                );
            }
            RunSummary::Mixed => {
                println!("{}Successfully updated:{}", self.paint(BLUE), self.paint(RESET));
                for entry in &results.successful {
                    println!("{}", entry.absolute_path.display());
                }

                println!();
                self.error_line("Failed to update:");
                for entry in &results.failed {
                    self.error_line(&entry.absolute_path.display().to_string());
                }
            }
        }
    }

    /// Writes a red line to stderr.
    pub fn error_line(&self, message: &str) {
        eprintln!("{}{}{}", self.paint(RED), message, self.paint(RESET));
        let _ = std::io::stderr().flush();
    }
}
