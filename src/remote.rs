//! The seam between the materialization pipeline and the network.
//! Everything the pipeline needs from a repository host goes through the
//! `RemoteRepository` trait, so tests drive the pipeline with an in-memory
//! implementation and never touch the network.

use crate::error::Result;
use crate::manifest::TemplateManifest;
use crate::registry::RepoRef;
use async_trait::async_trait;
use serde::Deserialize;

/// One entry of a repository's recursive tree listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreeEntry {
    /// Repository-relative path
    pub path: String,

    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// Kind of a tree entry. The pipeline consumes only blobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A regular file
    Blob,
    /// A directory
    Tree,
    /// A submodule pointer; never materialized
    Commit,
}

impl TreeEntry {
    pub fn blob<S: Into<String>>(path: S) -> Self {
        TreeEntry { path: path.into(), kind: EntryKind::Blob }
    }
}

/// Read access to a remote repository hosting templates.
///
/// Manifest and tree failures are fatal for a run; a raw-content failure is
/// recoverable and only drops the one file.
#[async_trait]
pub trait RemoteRepository: Send + Sync {
    /// Fetches and decodes the manifest at `<template_path>/template.json`.
    async fn fetch_manifest(
        &self,
        repo: &RepoRef,
        template_path: &str,
    ) -> Result<TemplateManifest>;

    /// Fetches the repository's full recursive tree listing.
    async fn fetch_tree(&self, repo: &RepoRef) -> Result<Vec<TreeEntry>>;

    /// Fetches one file's text content.
    async fn fetch_raw(&self, repo: &RepoRef, path: &str) -> Result<String>;
}
