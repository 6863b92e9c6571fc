use anyhow::{Context, Result};
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Process-wide settings, resolved once at startup and passed by
/// reference from then on.
#[derive(Debug, Clone)]
pub struct Config {
    /// `owner/name` of the repository whose pull requests get shamed.
    pub repository: String,
    pub token: String,
    pub api_url: Url,
}

impl Config {
    pub fn new(repository: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            token: token.into(),
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
        }
    }

    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = api_url;
        self
    }

    /// Reads `GITHUB_REPOSITORY`, `GITHUB_TOKEN` and `GITHUB_API_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration through `lookup` instead of the process
    /// environment.
    ///
    /// A missing repository or token is not an error here: the empty value
    /// is sent to GitHub as-is and rejected there.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let repository = lookup("GITHUB_REPOSITORY").unwrap_or_default();
        let token = lookup("GITHUB_TOKEN").unwrap_or_default();

        let config = Self::new(repository, token);
        match lookup("GITHUB_API_URL").filter(|url| !url.trim().is_empty()) {
            Some(raw) => {
                let api_url = Url::parse(raw.trim())
                    .with_context(|| format!("Invalid GITHUB_API_URL: '{}'", raw))?;
                Ok(config.with_api_url(api_url))
            }
            None => Ok(config),
        }
    }
}
