//! Template manifest data model.
//! A manifest (`template.json` at the template root) declares the template's
//! configurable prompts and its rename/replace transformation rules. Rule
//! order is significant, so every mapping deserializes into an `IndexMap`.

use indexmap::IndexMap;
use serde::Deserialize;

/// Declarative description of one template's prompts and rules.
/// Immutable once fetched; owned by the orchestrator for a single run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateManifest {
    /// User-fillable configuration values, in declaration order
    #[serde(default)]
    pub prompts: IndexMap<String, PromptSpec>,

    /// Path rename rules: literal fragment -> substitution pattern.
    /// Applied cumulatively in declaration order, first occurrence only.
    #[serde(default)]
    pub rename: IndexMap<String, String>,

    /// Content replace rules, applied in declaration order
    #[serde(default)]
    pub replace: Vec<ReplaceRule>,
}

/// One named, user-fillable configuration value.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptSpec {
    /// Human-readable prompt shown to the user
    pub label: String,

    /// Value used when the user provides nothing
    #[serde(default)]
    pub default: String,

    /// Formatting rule applied to the raw value before substitution
    #[serde(default)]
    pub format: FormatKind,
}

/// Named formatting rules for prompt values. Open for extension; adding a
/// variant means adding an arm in `format::format_value`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    /// Identity; also the default when a prompt names no format
    #[default]
    Text,
    /// Lower-cased with separator runs collapsed to underscores
    SnakeCase,
}

/// A glob-scoped set of literal-text replacements for file contents.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceRule {
    /// Restricted glob deciding which files this rule applies to,
    /// evaluated against the original (pre-rename) source path
    pub glob: String,

    /// Literal text -> substitution pattern, in declaration order.
    /// Every occurrence of the literal is replaced.
    #[serde(default)]
    pub values: IndexMap<String, String>,
}
