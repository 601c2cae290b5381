//! GitHub-backed implementation of `RemoteRepository`.
//! Tree listings come from the REST trees endpoint (`recursive=1`); manifest
//! and file contents come from `raw.githubusercontent.com`.

use crate::constants::{MANIFEST_FILE, USER_AGENT};
use crate::error::{Error, Result};
use crate::manifest::TemplateManifest;
use crate::registry::RepoRef;
use crate::remote::{RemoteRepository, TreeEntry};
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

/// HTTP client for the GitHub endpoints the pipeline needs.
pub struct GithubClient {
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct TreeResponse {
    tree: Vec<TreeEntry>,
}

impl GithubClient {
    /// Builds a client with the application's user agent. GitHub rejects
    /// requests without one.
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }

    /// The underlying reqwest client, shared with the registry fetch.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    fn raw_url(repo: &RepoRef, path: &str) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/{}/{}",
            repo.repo, repo.branch, path
        )
    }

    async fn get_text(&self, url: &str) -> std::result::Result<String, reqwest::Error> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        response.text().await
    }
}

#[async_trait]
impl RemoteRepository for GithubClient {
    async fn fetch_manifest(
        &self,
        repo: &RepoRef,
        template_path: &str,
    ) -> Result<TemplateManifest> {
        let url = Self::raw_url(repo, &format!("{template_path}/{MANIFEST_FILE}"));
        debug!("Fetching manifest from '{}'", url);

        let body = self.get_text(&url).await.map_err(|err| Error::ManifestFetch {
            url: url.clone(),
            reason: err.to_string(),
        })?;
        serde_json::from_str(&body).map_err(|err| Error::ManifestFetch {
            url,
            reason: err.to_string(),
        })
    }

    async fn fetch_tree(&self, repo: &RepoRef) -> Result<Vec<TreeEntry>> {
        let url = format!(
            "https://api.github.com/repos/{}/git/trees/{}?recursive=1",
            repo.repo, repo.branch
        );
        debug!("Fetching tree from '{}'", url);

        let tree_err = |err: reqwest::Error| Error::TreeFetch {
            repo: repo.repo.clone(),
            branch: repo.branch.clone(),
            reason: err.to_string(),
        };

        let response = self.http.get(&url).send().await.map_err(tree_err)?;
        let response = response.error_for_status().map_err(tree_err)?;
        let listing: TreeResponse = response.json().await.map_err(tree_err)?;
        Ok(listing.tree)
    }

    async fn fetch_raw(&self, repo: &RepoRef, path: &str) -> Result<String> {
        let url = Self::raw_url(repo, path);
        self.get_text(&url).await.map_err(|err| Error::FileFetch {
            path: path.to_string(),
            reason: err.to_string(),
        })
    }
}
