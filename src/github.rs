use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, header};
use tracing::{debug, warn};
use url::Url;

use crate::{
    config::Config,
    error::ShameError,
    types::{Comment, PullRequest},
};

pub const PREVIEW_ACCEPT: &str = "application/vnd.github.shadow-cat-preview+json";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Source of pull requests and sink for comments.
///
/// [`GitHubClient`] talks to the real API; tests substitute their own.
#[async_trait]
pub trait Forge {
    /// Lists the open pull requests of `repository` (`owner/name`).
    async fn list_pull_requests(&self, repository: &str) -> Result<Vec<PullRequest>, ShameError>;

    /// Posts `comment` on pull request `number` of `repository`.
    async fn post_comment(
        &self,
        repository: &str,
        number: u64,
        comment: &Comment,
    ) -> Result<(), ShameError>;
}

/// Token-authenticated GitHub REST client.
///
/// TLS certificate verification is disabled on the underlying client.
pub struct GitHubClient {
    http: Client,
    api_url: Url,
    token: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self, ShameError> {
        warn!("TLS certificate verification is disabled for GitHub API requests");
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self::with_client(http, config))
    }

    /// Wraps an already configured HTTP client.
    pub fn with_client(http: Client, config: &Config) -> Self {
        Self {
            http,
            api_url: config.api_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Attaches the preview `Accept` header and the token.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(header::ACCEPT, PREVIEW_ACCEPT)
            .header(header::AUTHORIZATION, format!("token {}", self.token))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ShameError> {
        Ok(self.authorize(request).send().await?)
    }

    /// Builds `{api_url}/repos/{repository}/{tail...}`.
    ///
    /// The repository is split on `/` so that `owner/name` maps onto two
    /// path segments instead of an escaped slash.
    pub fn endpoint(&self, repository: &str, tail: &[&str]) -> Result<Url, ShameError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| ShameError::Endpoint(self.api_url.to_string()))?
            .pop_if_empty()
            .push("repos")
            .extend(repository.split('/'))
            .extend(tail);
        Ok(url)
    }
}

#[async_trait]
impl Forge for GitHubClient {
    async fn list_pull_requests(&self, repository: &str) -> Result<Vec<PullRequest>, ShameError> {
        let url = self.endpoint(repository, &["pulls"])?;
        debug!(%url, "listing pull requests");

        let response = self.send(self.http.get(url)).await?;
        let status = response.status();
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|source| ShameError::Decode { status, source })
    }

    async fn post_comment(
        &self,
        repository: &str,
        number: u64,
        comment: &Comment,
    ) -> Result<(), ShameError> {
        let url = self.endpoint(repository, &["issues", &number.to_string(), "comments"])?;
        let body =
            serde_json::to_vec(comment).map_err(|source| ShameError::Encode { number, source })?;
        debug!(%url, number, "posting comment");

        let request = self
            .http
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body);
        let response = self.send(request).await?;

        match response.status() {
            StatusCode::CREATED => Ok(()),
            status => Err(ShameError::Authorization { number, status }),
        }
    }
}
