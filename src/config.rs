//! Configuration constants and concurrency selection

/// Directory entry whose presence marks a repository root.
pub const GIT_MARKER_DIR: &str = ".git";

// Concurrency Configuration
//
// Pull operations are I/O-bound: each task spends nearly all of its time
// waiting on an external git process talking to the network. A moderate cap
// keeps remotes happy without serializing the run.

// Default concurrency cap to avoid hammering a single remote host
pub const SYNC_CONCURRENT_CAP: usize = 12;

// User-facing messages
pub const NO_REPOS_MESSAGE: &str = "No git repos found!";
pub const ALL_UPDATED_MESSAGE: &str = "All git repos updated successfully!";
pub const COMPLETE_FAILURE_MESSAGE: &str =
    "Complete failure! No repos updated... check your internet connection maybe?";

/// Determines the concurrency limit for pull operations
///
/// Priority order:
/// 1. --sequential flag → 1
/// 2. --jobs N flag → N (floor of 1)
/// 3. Smart default → min(CPU_CORES + 2, 12)
pub fn get_sync_concurrency(jobs: Option<usize>, sequential: bool) -> usize {
    if sequential {
        return 1;
    }

    if let Some(n) = jobs {
        return n.max(1);
    }

    let cpu_count = num_cpus::get();
    (cpu_count + 2).min(SYNC_CONCURRENT_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_wins_over_jobs() {
        assert_eq!(get_sync_concurrency(Some(8), true), 1);
    }

    #[test]
    fn test_explicit_jobs() {
        assert_eq!(get_sync_concurrency(Some(3), false), 3);
    }

    #[test]
    fn test_jobs_zero_clamped_to_one() {
        assert_eq!(get_sync_concurrency(Some(0), false), 1);
    }

    #[test]
    fn test_default_respects_cap() {
        let limit = get_sync_concurrency(None, false);
        assert!(limit >= 1);
        assert!(limit <= SYNC_CONCURRENT_CAP);
    }
}
