//! # pull-all-repos
//!
//! `pull-all-repos` finds every git repository beneath a root directory and
//! pulls each one concurrently, then reports which repositories updated
//! cleanly and which did not. It powers the `pull-all-repos` CLI tool.
//!
//! ## How it works
//!
//! - **Discovery**: a breadth-first walk of the directory tree that treats
//!   any directory containing a `.git` marker as a repository root and never
//!   descends into it.
//! - **Concurrent sync**: a pull task is spawned the moment a repository is
//!   found, so directory scanning overlaps with network latency. A semaphore
//!   caps how many external `git` processes run at once.
//! - **Join and report**: after every task has finished, results are
//!   partitioned into successful and failed sets and summarized.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pull_all_repos::report::Reporter;
//! use pull_all_repos::sync::{sync_all, SyncCommand};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let root = std::env::current_dir()?;
//!     let reporter = Reporter::new(false);
//!     let results = sync_all(root, SyncCommand::git(), 4, reporter.clone()).await?;
//!     reporter.results(&results);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod discovery;
pub mod report;
pub mod sync;
