//! Path rename rule application.

use crate::substitute::{substitute, ValueMap};
use indexmap::IndexMap;

/// Transforms a template-relative path using the manifest's rename rules.
///
/// Rules run in declaration order and are cumulative: each rule sees the
/// previous rule's output. A rule replaces only the first textual occurrence
/// of its literal fragment; a fragment that never occurs is a no-op.
pub fn apply_renames(
    path: &str,
    rules: &IndexMap<String, String>,
    values: &ValueMap,
) -> String {
    let mut result = path.to_string();
    for (fragment, pattern) in rules {
        let replacement = substitute(pattern, values);
        result = result.replacen(fragment.as_str(), &replacement, 1);
    }
    result
}
