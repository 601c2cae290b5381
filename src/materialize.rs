//! Core materialization orchestration: tree fetch, file-set resolution,
//! bounded concurrent content fetch, and rule application per file.

use crate::constants::FETCH_CONCURRENCY;
use crate::error::Result;
use crate::manifest::TemplateManifest;
use crate::registry::RepoRef;
use crate::remote::RemoteRepository;
use crate::rename::apply_renames;
use crate::replace::apply_replacements;
use crate::resolver::template_files;
use crate::substitute::ValueMap;
use futures_util::{stream, StreamExt};
use log::{debug, warn};

/// One fully transformed output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedFile {
    pub destination_path: String,
    pub content: String,
}

/// Result of one materialization run. `warnings` holds one entry per file
/// that was dropped because its content could not be fetched.
#[derive(Debug, Default)]
pub struct MaterializeOutcome {
    pub files: Vec<MaterializedFile>,
    pub warnings: Vec<String>,
}

/// Runs the complete pipeline for one template: manifest fetch, value-map
/// construction, then the file pipeline.
///
/// The manifest fetch is a fatal prerequisite; if it (or `resolve_values`)
/// fails, nothing has been fetched and no output exists. `resolve_values`
/// receives the decoded manifest so the caller can prompt against its
/// declared prompts.
pub async fn materialize_template<R, F>(
    remote: &R,
    repo: &RepoRef,
    template_path: &str,
    resolve_values: F,
) -> Result<MaterializeOutcome>
where
    R: RemoteRepository + ?Sized,
    F: FnOnce(&TemplateManifest) -> Result<ValueMap>,
{
    let manifest = remote.fetch_manifest(repo, template_path).await?;
    let values = resolve_values(&manifest)?;
    materialize(remote, repo, template_path, &manifest, &values).await
}

/// Runs the file pipeline for one template with an already-fetched manifest.
///
/// The tree fetch is a fatal prerequisite. Raw-content fetches run
/// concurrently, at most `FETCH_CONCURRENCY` in flight, and preserve tree
/// order so the outcome is deterministic for a fixed (manifest, values,
/// tree) triple. A single file's fetch failure drops that file and records
/// a warning; the run continues.
pub async fn materialize<R>(
    remote: &R,
    repo: &RepoRef,
    template_path: &str,
    manifest: &TemplateManifest,
    values: &ValueMap,
) -> Result<MaterializeOutcome>
where
    R: RemoteRepository + ?Sized,
{
    let tree = remote.fetch_tree(repo).await?;
    let included = template_files(&tree, template_path);
    debug!("Materializing {} file(s) from '{}'", included.len(), template_path);

    let fetched = stream::iter(included.into_iter().map(|file| async move {
        let content = remote.fetch_raw(repo, &file.source_path).await;
        (file, content)
    }))
    .buffered(FETCH_CONCURRENCY)
    .collect::<Vec<_>>()
    .await;

    let mut outcome = MaterializeOutcome::default();
    for (file, content) in fetched {
        match content {
            Ok(content) => {
                let destination_path =
                    apply_renames(&file.relative_path, &manifest.rename, values);
                let content = apply_replacements(
                    &content,
                    &file.source_path,
                    &manifest.replace,
                    values,
                );
                debug!("Materialized '{}' as '{}'", file.source_path, destination_path);
                outcome.files.push(MaterializedFile { destination_path, content });
            }
            Err(err) => {
                warn!("{}", err);
                outcome
                    .warnings
                    .push(format!("skipped '{}': {}", file.source_path, err));
            }
        }
    }

    Ok(outcome)
}
