//! Restricted glob matching for replace-rule scoping.
//!
//! This is deliberately not a general glob engine. Exactly four pattern
//! shapes are understood:
//!
//! 1. `**/*` - matches every path
//! 2. `**/*.{ext1,ext2}` - matches when the path's final extension is in the set
//! 3. `**/*.ext` - matches when the path ends with `.ext`
//! 4. `*.ext` - matches when the path ends with `.ext`
//!
//! Anything else matches nothing. A rule carrying an unsupported pattern is
//! simply inert; it is not an error. Do not grow this matcher beyond the
//! four shapes without widening the manifest contract.

/// A parsed pattern, one variant per supported shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobPattern {
    /// `**/*`
    MatchAll,
    /// `**/*.{ext1,ext2,...}`
    ExtensionSet(Vec<String>),
    /// `**/*.ext` or `*.ext`
    SimpleExtension(String),
    /// Any other shape; matches nothing
    Unsupported,
}

impl GlobPattern {
    /// Parses a pattern string into its shape. Never fails: unrecognized
    /// input becomes `Unsupported`.
    pub fn parse(glob: &str) -> Self {
        if glob == "**/*" {
            return GlobPattern::MatchAll;
        }

        if let Some(exts) =
            glob.strip_prefix("**/*.{").and_then(|rest| rest.strip_suffix('}'))
        {
            return GlobPattern::ExtensionSet(
                exts.split(',').map(str::to_string).collect(),
            );
        }

        for prefix in ["**/*.", "*."] {
            if let Some(ext) = glob.strip_prefix(prefix) {
                if !ext.is_empty() && ext.chars().all(is_extension_char) {
                    return GlobPattern::SimpleExtension(ext.to_string());
                }
            }
        }

        GlobPattern::Unsupported
    }

    /// Returns whether `path` matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            GlobPattern::MatchAll => true,
            GlobPattern::ExtensionSet(exts) => {
                // Mirrors the manifest contract: the segment after the last
                // dot, which is the whole path when there is no dot at all.
                let final_ext = path.rsplit('.').next().unwrap_or(path);
                exts.iter().any(|ext| ext == final_ext)
            }
            GlobPattern::SimpleExtension(ext) => {
                path.ends_with(&format!(".{ext}"))
            }
            GlobPattern::Unsupported => false,
        }
    }
}

/// Returns whether `path` matches the restricted pattern `glob`.
pub fn matches_glob(path: &str, glob: &str) -> bool {
    GlobPattern::parse(glob).matches(path)
}

fn is_extension_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
