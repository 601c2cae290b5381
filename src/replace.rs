//! Content replacement rule application.

use crate::glob::matches_glob;
use crate::manifest::ReplaceRule;
use crate::substitute::{substitute, ValueMap};

/// Transforms file content using the manifest's replace rules.
///
/// Rules run in declaration order; later rules see earlier rules' output.
/// A rule's glob is evaluated against `source_path`, the file's original
/// repository path, never the renamed destination. Within a matching rule
/// every occurrence of each literal is replaced, unlike the rename engine's
/// first-occurrence behavior.
pub fn apply_replacements(
    content: &str,
    source_path: &str,
    rules: &[ReplaceRule],
    values: &ValueMap,
) -> String {
    let mut result = content.to_string();
    for rule in rules {
        if !matches_glob(source_path, &rule.glob) {
            continue;
        }
        for (literal, pattern) in &rule.values {
            let replacement = substitute(pattern, values);
            result = result.replace(literal.as_str(), &replacement);
        }
    }
    result
}
