//! Stencil materializes parameterized project skeletons from remote template
//! bundles: given a template's file set, user-supplied prompt values and a
//! declarative manifest of rename/replace rules, it produces a ready-to-use
//! archive with every placeholder resolved.

/// Archive assembly from materialized files
pub mod archive;

/// Command-line interface module for the Stencil application
pub mod cli;

/// Common constants used throughout the application
pub mod constants;

/// Error types and handling for the Stencil application
pub mod error;

/// Prompt value formatting rules and archive name slugification
pub mod format;

/// GitHub-backed remote repository access
pub mod github;

/// Restricted glob matching for replace-rule scoping
pub mod glob;

/// Template manifest data model (prompts, rename and replace rules)
pub mod manifest;

/// Core materialization orchestration
/// Combines all components to generate the final archive contents
pub mod materialize;

/// User input and value map construction
pub mod prompt;

/// Template registry (catalog) fetching and repository reference resolution
pub mod registry;

/// The network seam: the `RemoteRepository` trait and tree listing model
pub mod remote;

/// Path rename rule application
pub mod rename;

/// Content replacement rule application
pub mod replace;

/// File set resolution: which tree entries belong to one template
pub mod resolver;

/// Variable substitution for `{{identifier}}` tokens
pub mod substitute;
