//! prshame: comments on open pull requests that have been waiting for more
//! than a week.
//!
//! Lists the open pull requests of one GitHub repository, picks those
//! created more than seven days ago and posts a shaming comment on each.

pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod shame;
pub mod types;

pub use cli::{RunOptions, parse_args};
pub use config::Config;
pub use error::ShameError;
pub use github::{Forge, GitHubClient};
pub use shame::{
    Mode, Shaming, age_in_days, select_stale, shame_comment, shame_stale_pull_requests,
};
pub use types::{Comment, PullRequest};
