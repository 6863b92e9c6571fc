use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An open pull request as returned by `GET /repos/{repo}/pulls`.
///
/// Only the fields the shamer looks at are decoded; everything else in
/// the response is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /repos/{repo}/issues/{number}/comments`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub body: String,
}

impl Comment {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}
