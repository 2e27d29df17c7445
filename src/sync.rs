//! Per-repository synchronization tasks and the fork/join pool

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::process::Command;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::discovery::{walk_repos, RepoEntry};
use crate::report::Reporter;

/// The external command sequence run inside each repository.
///
/// Defaults to `git pull` followed by `git submodule update --init`. Each
/// step is an explicit program + argument list executed with the repository
/// as its working directory; no shell is involved. Tests substitute their
/// own programs to simulate success and failure exits.
#[derive(Debug, Clone)]
pub struct SyncCommand {
    steps: Vec<(String, Vec<String>)>,
}

impl SyncCommand {
    /// The real pull sequence: fetch and merge, then update nested submodules.
    pub fn git() -> Self {
        Self {
            steps: vec![
                ("git".to_string(), vec!["pull".to_string()]),
                (
                    "git".to_string(),
                    vec![
                        "submodule".to_string(),
                        "update".to_string(),
                        "--init".to_string(),
                    ],
                ),
            ],
        }
    }

    /// Builds a custom command sequence. Intended for tests.
    pub fn new<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        Self {
            steps: steps
                .into_iter()
                .map(|(program, args)| {
                    (
                        program.into(),
                        args.into_iter().map(Into::into).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Runs every step in order inside `repo_path`, stopping at the first
    /// nonzero exit. The child inherits stdout/stderr, so git's own output
    /// is visible to the user, interleaved with other repositories'.
    pub async fn run(&self, repo_path: &Path) -> SyncOutcome {
        for (program, args) in &self.steps {
            match Command::new(program)
                .args(args)
                .current_dir(repo_path)
                .status()
                .await
            {
                Ok(status) if status.success() => {}
                Ok(status) => return SyncOutcome::Failed { code: status.code() },
                Err(_) => return SyncOutcome::Failed { code: None },
            }
        }
        SyncOutcome::Success
    }
}

/// Final outcome of one repository's synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Every step exited zero.
    Success,
    /// A step exited nonzero (`code` is its exit code, if any) or could not
    /// be spawned at all. Failure subtypes are not distinguished further.
    Failed { code: Option<i32> },
}

impl SyncOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SyncOutcome::Success)
    }
}

/// One spawned synchronization unit. The tokio task owns the outcome
/// exclusively until the pool joins it.
struct RepoTask {
    entry: RepoEntry,
    handle: JoinHandle<SyncOutcome>,
}

/// Disjoint partition of completed tasks, populated once after the join
/// barrier. Every discovered repository lands in exactly one set, in
/// discovery order.
#[derive(Debug, Default)]
pub struct ResultSets {
    pub successful: Vec<RepoEntry>,
    pub failed: Vec<RepoEntry>,
}

impl ResultSets {
    pub fn total(&self) -> usize {
        self.successful.len() + self.failed.len()
    }
}

/// Owns the set of all started synchronization tasks.
///
/// `spawn` starts a task the instant a repository is discovered; `join_all`
/// is the full barrier that waits for every task before any summary is
/// printed. The semaphore bounds how many external processes actually run
/// at once without delaying task creation.
pub struct SyncPool {
    command: SyncCommand,
    semaphore: Arc<Semaphore>,
    reporter: Reporter,
    tasks: Vec<RepoTask>,
}

impl SyncPool {
    pub fn new(command: SyncCommand, concurrent_limit: usize, reporter: Reporter) -> Self {
        Self {
            command,
            semaphore: Arc::new(Semaphore::new(concurrent_limit.max(1))),
            reporter,
            tasks: Vec::new(),
        }
    }

    /// Starts a synchronization task for a freshly discovered repository.
    pub fn spawn(&mut self, entry: RepoEntry) {
        let command = self.command.clone();
        let semaphore = Arc::clone(&self.semaphore);
        let reporter = self.reporter.clone();
        let repo_path = entry.absolute_path.clone();
        let display_name = entry.display_name();

        let handle = tokio::spawn(async move {
            let _permit = semaphore
                .acquire()
                .await
                .expect("semaphore closed while tasks were still pending");
            reporter.repo_start(&display_name);
            command.run(&repo_path).await
        });

        self.tasks.push(RepoTask { entry, handle });
    }

    /// Waits for every started task, then partitions outcomes into the
    /// successful and failed sets. Joining in discovery order keeps the
    /// final report stable regardless of completion order. A panicked task
    /// counts as a failure for its repository.
    pub async fn join_all(self) -> ResultSets {
        let (entries, handles): (Vec<_>, Vec<_>) = self
            .tasks
            .into_iter()
            .map(|task| (task.entry, task.handle))
            .unzip();

        let outcomes = futures::future::join_all(handles).await;

        let mut results = ResultSets::default();
        for (entry, joined) in entries.into_iter().zip(outcomes) {
            match joined {
                Ok(outcome) if outcome.is_success() => results.successful.push(entry),
                Ok(_) | Err(_) => results.failed.push(entry),
            }
        }
        results
    }
}

/// Discovers repositories under `root` and synchronizes them all.
///
/// Discovery runs on a blocking thread and streams entries over a channel;
/// each entry gets its task spawned immediately, so directory scanning
/// overlaps with the network latency of earlier repositories' pulls. A
/// discovery error aborts the run before any summary is produced.
pub async fn sync_all(
    root: PathBuf,
    command: SyncCommand,
    concurrent_limit: usize,
    reporter: Reporter,
) -> Result<ResultSets> {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let walk_root = root.clone();
    let walker = tokio::task::spawn_blocking(move || {
        walk_repos(&walk_root, |entry| {
            // The receiver outlives the walk; a send can only fail if the
            // runtime is already shutting down.
            let _ = tx.send(entry);
        })
    });

    let mut pool = SyncPool::new(command, concurrent_limit, reporter);
    while let Some(entry) = rx.recv().await {
        pool.spawn(entry);
    }

    walker
        .await
        .context("repository discovery thread panicked")?
        .with_context(|| format!("discovery failed under {}", root.display()))?;

    Ok(pool.join_all().await)
}
