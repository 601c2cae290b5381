//! Prompt value formatting and archive name slugification.

use crate::manifest::FormatKind;

/// Applies a named formatting rule to a raw prompt value.
///
/// `snake_case` lower-cases the input, collapses every run of separator
/// characters (anything that is not a letter or digit) into a single
/// underscore and trims underscores from both ends, so `" A--B "` becomes
/// `"a_b"` and `"My Cool App"` becomes `"my_cool_app"`.
pub fn format_value(value: &str, kind: FormatKind) -> String {
    match kind {
        FormatKind::Text => value.to_string(),
        FormatKind::SnakeCase => collapse(&value.to_lowercase(), '_'),
    }
}

/// Turns a project name into an archive-safe file stem: lower-cased,
/// whitespace runs collapsed to a single hyphen, everything outside
/// `[a-z0-9-]` stripped.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            in_space = false;
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
                out.push(ch);
            }
        }
    }
    out
}

fn collapse(value: &str, sep: char) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_sep = false;
    for ch in value.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_sep && !out.is_empty() {
                out.push(sep);
            }
            pending_sep = false;
            out.push(ch);
        } else {
            pending_sep = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_format_is_identity() {
        assert_eq!(format_value("My Cool App", FormatKind::Text), "My Cool App");
        assert_eq!(format_value(" A--B ", FormatKind::Text), " A--B ");
    }

    #[test]
    fn test_snake_case_basic() {
        assert_eq!(format_value("My Cool App", FormatKind::SnakeCase), "my_cool_app");
    }

    #[test]
    fn test_snake_case_collapses_separator_runs() {
        assert_eq!(format_value(" A--B ", FormatKind::SnakeCase), "a_b");
        assert_eq!(format_value("a   b", FormatKind::SnakeCase), "a_b");
    }

    #[test]
    fn test_snake_case_keeps_digits() {
        assert_eq!(format_value("App 2 Go", FormatKind::SnakeCase), "app_2_go");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My Cool App"), "my-cool-app");
        assert_eq!(slugify("coolapp"), "coolapp");
        assert_eq!(slugify("Name! With? Junk"), "name-with-junk");
        assert_eq!(slugify("a   b"), "a-b");
    }
}
