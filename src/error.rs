//! Error handling for the Stencil application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Stencil operations.
///
/// Registry, manifest and tree failures are fatal: they abort the run before
/// any output exists. Per-file content failures are deliberately absent here;
/// they are absorbed inside the materializer as warnings.
#[derive(Error, Debug)]
pub enum Error {
    /// The template registry could not be fetched or decoded
    #[error("Registry error: failed to load '{url}': {reason}.")]
    RegistryFetch { url: String, reason: String },

    /// The template manifest could not be fetched or decoded
    #[error("Manifest error: failed to load '{url}': {reason}.")]
    ManifestFetch { url: String, reason: String },

    /// The repository tree listing could not be fetched or decoded
    #[error("Tree error: failed to list '{repo}' at '{branch}': {reason}.")]
    TreeFetch { repo: String, branch: String, reason: String },

    /// A single file's raw content could not be fetched.
    /// Recoverable: the materializer drops the file and keeps going.
    #[error("Fetch error: failed to fetch '{path}': {reason}.")]
    FileFetch { path: String, reason: String },

    /// The requested template id does not exist in the registry
    #[error("Template error: no template with id '{id}' in the registry.")]
    TemplateNotFound { id: String },

    /// Represents errors that occur during HTTP client construction
    #[error("HTTP error: {0}.")]
    Http(#[from] reqwest::Error),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    Io(#[from] io::Error),

    /// Represents errors during archive assembly
    #[error("Archive error: {0}.")]
    Zip(#[from] zip::result::ZipError),

    /// Represents errors during user interaction
    #[error("Prompt error: {0}.")]
    Prompt(#[from] dialoguer::Error),

    /// Represents malformed command line input, e.g. a --set without '='
    #[error("Argument error: {0}.")]
    Argument(String),
}

/// Convenience type alias for Results with Stencil's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
