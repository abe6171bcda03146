//! GitHub repository enhancer.

use std::time::Duration;

use readmegen_core::{
    application::{EnhancerError, ports::Enhancer},
    domain::{Enhancement, ProjectMetadata, RepoRef},
};
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use super::{DEFAULT_TIMEOUT, check_status, http_client, map_reqwest_error};

/// Optional token; unauthenticated requests work but are rate limited.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Contributors requested per repository.
const MAX_CONTRIBUTORS: usize = 10;

#[derive(Debug, Clone)]
pub struct GithubSettings {
    pub api_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl GithubSettings {
    pub fn token_from_env() -> Option<String> {
        std::env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty())
    }
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".into(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Pulls the description, license, URL and contributors of the repository
/// named in [`ProjectMetadata::repository`].
#[derive(Debug, Clone)]
pub struct GithubEnhancer {
    settings: GithubSettings,
}

#[derive(Debug, Deserialize)]
struct RepoInfo {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    html_url: Option<String>,
    #[serde(default)]
    license: Option<RepoLicense>,
}

#[derive(Debug, Deserialize)]
struct RepoLicense {
    #[serde(default)]
    spdx_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Contributor {
    login: String,
}

impl GithubEnhancer {
    pub fn new(settings: GithubSettings) -> Self {
        Self { settings }
    }

    fn repo_url(&self, repo: &RepoRef) -> String {
        format!(
            "{}/repos/{}/{}",
            self.settings.api_url.trim_end_matches('/'),
            repo.owner(),
            repo.name()
        )
    }

    fn get(&self, client: &Client, url: &str) -> Result<reqwest::blocking::Response, EnhancerError> {
        let mut request = client
            .get(url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.settings.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().map_err(map_reqwest_error)?;
        check_status(response)
    }

    fn fetch_contributors(&self, client: &Client, repo: &RepoRef) -> Result<Vec<String>, EnhancerError> {
        let url = format!("{}/contributors?per_page={MAX_CONTRIBUTORS}", self.repo_url(repo));
        let contributors: Vec<Contributor> = self
            .get(client, &url)?
            .json()
            .map_err(|e| EnhancerError::MalformedResponse(e.to_string()))?;
        Ok(contributors.into_iter().map(|c| c.login).collect())
    }
}

impl Enhancer for GithubEnhancer {
    fn name(&self) -> &'static str {
        "github"
    }

    #[instrument(skip_all)]
    fn enhance(&self, metadata: &ProjectMetadata) -> Result<Enhancement, EnhancerError> {
        let repo = metadata.repository.as_ref().ok_or_else(|| {
            EnhancerError::MissingInput(
                "no GitHub repository; pass --repo OWNER/NAME or add an origin remote".into(),
            )
        })?;

        let client = http_client(self.settings.timeout)?;
        debug!(repository = %repo, "Fetching repository");
        let info: RepoInfo = self
            .get(&client, &self.repo_url(repo))?
            .json()
            .map_err(|e| EnhancerError::MalformedResponse(e.to_string()))?;

        // Contributors are a bonus; the repository data stands on its own.
        let contributors = self.fetch_contributors(&client, repo).unwrap_or_else(|e| {
            warn!(repository = %repo, error = %e, "Dropping contributors");
            Vec::new()
        });

        Ok(into_enhancement(info, contributors))
    }
}

fn into_enhancement(info: RepoInfo, contributors: Vec<String>) -> Enhancement {
    Enhancement {
        fallback_description: info.description,
        license_spdx: info.license.and_then(|l| l.spdx_id),
        repository_url: info.html_url,
        contributors,
        ..Enhancement::default()
    }
}
