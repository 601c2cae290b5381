//! Variable substitution for `{{identifier}}` tokens.
//! A token whose identifier is absent from the value map is left verbatim,
//! so substitution is total and never fails.

use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Resolved prompt values, keyed by prompt key. Order follows the manifest's
/// prompt declaration order.
pub type ValueMap = IndexMap<String, String>;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("token regex is valid"));

/// Replaces every `{{identifier}}` occurrence in `pattern` with the mapped
/// value. Unknown identifiers stay as-is.
pub fn substitute(pattern: &str, values: &ValueMap) -> String {
    TOKEN_RE
        .replace_all(pattern, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
