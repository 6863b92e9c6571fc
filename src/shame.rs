//! Finds stale pull requests and comments on them.
//!
//! The run is strictly sequential and fail-fast: comments are posted one
//! at a time in listing order, and the first error ends the run. Comments
//! already posted at that point stay posted.

use chrono::{DateTime, Duration, Utc};
use chrono_humanize::HumanTime;
use tracing::info;

use crate::{
    config::Config,
    error::ShameError,
    github::Forge,
    types::{Comment, PullRequest},
};

/// Pull requests created strictly before `now - STALE_AFTER` are shamed.
pub const STALE_AFTER: Duration = Duration::days(7);

pub const SHAME_IMAGE_URL: &str = "https://user-images.githubusercontent.com/8014230/78236317-17403d80-74da-11ea-944a-2752e27620a8.gif";

/// Whether shameful pull requests actually receive a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Post,
    /// Log what would be posted without sending anything.
    DryRun,
}

/// One pull request that was (or, in dry-run mode, would have been) shamed.
#[derive(Debug, Clone, PartialEq)]
pub struct Shaming {
    pub number: u64,
    pub title: String,
    pub age_days: i64,
    pub comment: Comment,
}

/// Returns the pull requests older than [`STALE_AFTER`], in input order.
pub fn select_stale(prs: &[PullRequest], now: DateTime<Utc>) -> Vec<&PullRequest> {
    let cutoff = now - STALE_AFTER;
    prs.iter().filter(|pr| pr.created_at < cutoff).collect()
}

/// Whole days between `created_at` and `now`, truncated.
pub fn age_in_days(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - created_at).num_days()
}

pub fn shame_comment(age_days: i64) -> Comment {
    Comment::new(format!(
        "this PR is {age_days} days old! \n\n ![shame]({SHAME_IMAGE_URL})"
    ))
}

/// Lists the open pull requests of the configured repository and comments
/// on every stale one.
///
/// Returns the shamings in the order they were performed.
pub async fn shame_stale_pull_requests<F>(
    forge: &F,
    config: &Config,
    now: DateTime<Utc>,
    mode: Mode,
) -> Result<Vec<Shaming>, ShameError>
where
    F: Forge + Sync,
{
    info!("listing PRs for repo {}", config.repository);
    let prs = forge.list_pull_requests(&config.repository).await?;

    let mut shamings = Vec::new();
    for pr in select_stale(&prs, now) {
        let age_days = age_in_days(pr.created_at, now);
        info!(
            number = pr.number,
            age_days,
            "found a shameful PR: #{} {:?} (created {})",
            pr.number,
            pr.title,
            HumanTime::from(pr.created_at - now)
        );

        // TODO: skip PRs that already carry a shaming comment from an earlier run.
        let comment = shame_comment(age_days);
        match mode {
            Mode::Post => forge
                .post_comment(&config.repository, pr.number, &comment)
                .await?,
            Mode::DryRun => info!(number = pr.number, "dry run, not commenting"),
        }

        shamings.push(Shaming {
            number: pr.number,
            title: pr.title.clone(),
            age_days,
            comment,
        });
    }

    Ok(shamings)
}
