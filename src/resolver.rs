//! File set resolution: which tree entries belong to one template.

use crate::constants::{DOC_SENTINEL_FILE, MANIFEST_FILE};
use crate::remote::{EntryKind, TreeEntry};

/// A tree entry retained for materialization, with its destination path
/// already stripped of the template prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludedFile {
    /// Full repository-relative source path
    pub source_path: String,
    /// Path relative to the template root; the pre-rename destination
    pub relative_path: String,
}

/// Filters a repository tree down to the regular files strictly under
/// `template_path/`, dropping the manifest file and the documentation
/// sentinel wherever they appear.
pub fn template_files(tree: &[TreeEntry], template_path: &str) -> Vec<IncludedFile> {
    let prefix = format!("{}/", template_path.trim_end_matches('/'));

    tree.iter()
        .filter(|entry| entry.kind == EntryKind::Blob)
        .filter(|entry| entry.path.starts_with(&prefix))
        .filter(|entry| {
            let file_name = entry.path.rsplit('/').next().unwrap_or(&entry.path);
            file_name != MANIFEST_FILE && file_name != DOC_SENTINEL_FILE
        })
        .map(|entry| IncludedFile {
            source_path: entry.path.clone(),
            relative_path: entry.path[prefix.len()..].to_string(),
        })
        .collect()
}
