//! pull-all-repos: finds every git repository beneath the current directory
//! and pulls each one concurrently, then reports an aggregate summary.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command as ClapCommand};

use pull_all_repos::config::get_sync_concurrency;
use pull_all_repos::report::Reporter;
use pull_all_repos::sync::{sync_all, SyncCommand};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapCommand::new("pull-all-repos")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Pulls every git repository found beneath the current directory")
        .arg(
            Arg::new("jobs")
                .long("jobs")
                .short('j')
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .help("Maximum number of repositories pulled at once"),
        )
        .arg(
            Arg::new("sequential")
                .long("sequential")
                .action(ArgAction::SetTrue)
                .help("Pull one repository at a time"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Disable colored output"),
        )
        .get_matches();

    let jobs = matches.get_one::<usize>("jobs").copied();
    let sequential = matches.get_flag("sequential");
    let reporter = Reporter::new(!matches.get_flag("no-color"));

    reporter.banner(env!("CARGO_PKG_VERSION"));

    let root = std::env::current_dir().context("failed to resolve current directory")?;
    reporter.search_root(&root);

    let concurrent_limit = get_sync_concurrency(jobs, sequential);
    let results = sync_all(root, SyncCommand::git(), concurrent_limit, reporter.clone()).await?;

    reporter.results(&results);

    // Nonzero exit when anything failed, so scripts can react
    if !results.failed.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
