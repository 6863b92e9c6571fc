use reqwest::StatusCode;
use thiserror::Error;

/// Failures that abort a shaming run.
///
/// Nothing here is retried: the first error stops the run and is reported
/// by the caller.
#[derive(Debug, Error)]
pub enum ShameError {
    /// The request never produced a complete response.
    #[error("request to GitHub failed")]
    Transport(#[from] reqwest::Error),

    /// The pull-request listing was not a JSON array of pull requests.
    #[error("failed to decode pull request list (HTTP {status})")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode comment for PR #{number}")]
    Encode {
        number: u64,
        #[source]
        source: serde_json::Error,
    },

    /// GitHub answered the comment POST with something other than 201.
    #[error(
        "failed to comment on shameful PR #{number} (HTTP {status}), check the provided GITHUB_TOKEN"
    )]
    Authorization { number: u64, status: StatusCode },

    #[error("API URL '{0}' cannot be used as a base for endpoints")]
    Endpoint(String),
}
