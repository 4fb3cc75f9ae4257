use crate::config::AuditConfig;
use crate::domain::models::Repository;
use crate::services::pipeline::MaintainersSource;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_RAW_URL: &str = "https://raw.githubusercontent.com";

const PER_PAGE: usize = 100;

pub struct GithubClient {
    client: reqwest::blocking::Client,
    token: String,
    org: String,
    api_url: String,
    raw_url: String,
}

impl GithubClient {
    pub fn new(config: &AuditConfig) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            token: config.token.clone(),
            org: config.org.clone(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            raw_url: config.raw_url.trim_end_matches('/').to_string(),
        })
    }

    /// Lists every repository of the organization, archived ones included.
    pub fn list_repositories(&self) -> anyhow::Result<Vec<Repository>> {
        let url = format!("{}/orgs/{}/repos", self.api_url, self.org);
        let mut repos = Vec::new();
        let mut page = 1usize;
        loop {
            let body = self
                .client
                .get(&url)
                .bearer_auth(&self.token)
                .header(ACCEPT, "application/vnd.github+json")
                .query(&[
                    ("type", "all".to_string()),
                    ("sort", "created".to_string()),
                    ("per_page", PER_PAGE.to_string()),
                    ("page", page.to_string()),
                ])
                .send()?
                .error_for_status()?
                .text()?;
            let batch: Vec<Repository> = serde_json::from_str(&body)?;
            tracing::debug!(org = %self.org, page, count = batch.len(), "listed repositories");
            let last = batch.len() < PER_PAGE;
            repos.extend(batch);
            if last {
                break;
            }
            page += 1;
        }
        tracing::info!(org = %self.org, count = repos.len(), "listed organization repositories");
        Ok(repos)
    }

    pub fn raw_maintainers_url(&self, repo: &Repository) -> String {
        raw_maintainers_url(&self.raw_url, &self.org, repo)
    }

    /// Contents of the repository's `maintainers.txt`, or an empty string on any failure.
    pub fn fetch_maintainers_text(&self, repo: &Repository) -> String {
        let url = self.raw_maintainers_url(repo);
        let resp = match self.client.get(&url).bearer_auth(&self.token).send() {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(%url, error = %e, "failed to read URL contents");
                return String::new();
            }
        };
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(%url, "no maintainers file");
            return String::new();
        }
        if status != StatusCode::OK {
            tracing::warn!(%url, %status, "non-200 response from URL");
            return String::new();
        }
        match resp.text() {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(%url, error = %e, "failed to read URL contents");
                String::new()
            }
        }
    }
}

impl MaintainersSource for GithubClient {
    fn maintainers_text(&self, repo: &Repository) -> String {
        self.fetch_maintainers_text(repo)
    }
}

pub fn raw_maintainers_url(raw_url: &str, org: &str, repo: &Repository) -> String {
    format!(
        "{}/{}/{}/{}/maintainers.txt",
        raw_url.trim_end_matches('/'),
        org,
        repo.name,
        repo.default_branch
    )
}
