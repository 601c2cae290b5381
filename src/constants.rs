//! Common constants used throughout the Stencil application.

/// Manifest file name expected at a template's root
pub const MANIFEST_FILE: &str = "template.json";

/// Documentation sentinel file excluded from every archive
pub const DOC_SENTINEL_FILE: &str = "CLAUDE.md";

/// Registry consulted when no --registry flag is given
pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/stencil-cli/templates/main/templates-registry.json";

/// Branch used when neither the template entry nor the CLI names one
pub const DEFAULT_BRANCH: &str = "main";

/// Upper bound on in-flight raw-content fetches
pub const FETCH_CONCURRENCY: usize = 16;

/// User agent sent with every request (the GitHub API rejects anonymous clients)
pub const USER_AGENT: &str = concat!("stencil/", env!("CARGO_PKG_VERSION"));
