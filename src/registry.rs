//! Template registry (catalog) handling.
//! The registry is a JSON document listing the templates a repository offers,
//! together with a default repository every entry inherits unless it carries
//! its own override.

use crate::constants::DEFAULT_BRANCH;
use crate::error::{Error, Result};
use serde::Deserialize;
use url::Url;

/// The fetched template catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Registry {
    /// Repository used by entries without their own `repo`
    pub default_repo: String,

    #[serde(default)]
    pub templates: Vec<TemplateEntry>,
}

/// One catalog entry describing where a template lives.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateEntry {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Template root subpath within the repository
    pub path: String,

    /// Repository override for this entry
    #[serde(default)]
    pub repo: Option<String>,

    /// Branch override for this entry
    #[serde(default)]
    pub branch: Option<String>,
}

impl Registry {
    /// Looks up a template entry by id.
    pub fn find(&self, id: &str) -> Result<&TemplateEntry> {
        self.templates
            .iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| Error::TemplateNotFound { id: id.to_string() })
    }
}

/// A fully resolved repository reference: `owner/repo` plus a branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub repo: String,
    pub branch: String,
}

impl RepoRef {
    /// Resolves the effective repository and branch for one template:
    /// CLI override first, then the entry's own override, then the
    /// registry default (branch falls back to `main`).
    pub fn resolve(
        entry: &TemplateEntry,
        registry: &Registry,
        repo_override: Option<&str>,
        branch_override: Option<&str>,
    ) -> Self {
        let repo_url = repo_override
            .or(entry.repo.as_deref())
            .unwrap_or(&registry.default_repo);
        let branch = branch_override
            .or(entry.branch.as_deref())
            .unwrap_or(DEFAULT_BRANCH);

        RepoRef { repo: repo_path(repo_url), branch: branch.to_string() }
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.repo, self.branch)
    }
}

/// Extracts `owner/repo` from a repository URL. Inputs that are already in
/// `owner/repo` form (or anything unparseable) pass through unchanged apart
/// from a trailing `.git`.
pub fn repo_path(url: &str) -> String {
    if let Ok(parsed) = Url::parse(url) {
        let segments: Vec<&str> = parsed
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();
        if segments.len() >= 2 {
            return format!("{}/{}", segments[0], segments[1].trim_end_matches(".git"));
        }
    }
    url.trim_end_matches(".git").to_string()
}

/// Fetches and decodes the registry document. Failure here is fatal.
pub async fn fetch_registry(http: &reqwest::Client, url: &str) -> Result<Registry> {
    let fetch_err = |err: reqwest::Error| Error::RegistryFetch {
        url: url.to_string(),
        reason: err.to_string(),
    };

    let response = http.get(url).send().await.map_err(fetch_err)?;
    let response = response.error_for_status().map_err(fetch_err)?;
    response.json::<Registry>().await.map_err(fetch_err)
}
