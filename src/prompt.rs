//! User input and value map construction.
//! Raw values come from prompt defaults, `--set` overrides and interactive
//! input, in that order of precedence reversed (overrides win). They are
//! then formatted per prompt before any rule engine sees them.

use crate::error::{Error, Result};
use crate::format::format_value;
use crate::manifest::PromptSpec;
use crate::registry::{Registry, TemplateEntry};
use crate::substitute::ValueMap;
use dialoguer::{FuzzySelect, Input};
use indexmap::IndexMap;

/// Collects a raw value for every prompt, in manifest order.
///
/// An override always wins. Otherwise the user is asked (with the prompt's
/// default pre-filled) unless `interactive` is false, in which case the
/// default is taken as-is.
pub fn collect_values(
    prompts: &IndexMap<String, PromptSpec>,
    overrides: &ValueMap,
    interactive: bool,
) -> Result<ValueMap> {
    let mut raw = ValueMap::new();

    for (key, spec) in prompts {
        let value = if let Some(value) = overrides.get(key) {
            value.clone()
        } else if interactive {
            Input::<String>::new()
                .with_prompt(&spec.label)
                .default(spec.default.clone())
                .allow_empty(true)
                .interact_text()?
        } else {
            spec.default.clone()
        };
        raw.insert(key.clone(), value);
    }

    Ok(raw)
}

/// Applies each prompt's format rule to its raw value. Keys without a
/// prompt spec (possible via --set) pass through unformatted.
pub fn format_values(
    prompts: &IndexMap<String, PromptSpec>,
    raw: &ValueMap,
) -> ValueMap {
    raw.iter()
        .map(|(key, value)| {
            let kind = prompts.get(key).map(|spec| spec.format).unwrap_or_default();
            (key.clone(), format_value(value, kind))
        })
        .collect()
}

/// Parses `KEY=VALUE` pairs from repeated `--set` flags.
pub fn parse_overrides(pairs: &[String]) -> Result<ValueMap> {
    let mut overrides = ValueMap::new();
    for pair in pairs {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            Error::Argument(format!("--set expects KEY=VALUE, got '{pair}'"))
        })?;
        overrides.insert(key.to_string(), value.to_string());
    }
    Ok(overrides)
}

/// Picks the name the archive is derived from: the raw `project_name`
/// value, else `package_name`, else the template id. A blank value at one
/// level falls through to the next.
pub fn project_name<'a>(raw: &'a ValueMap, template_id: &'a str) -> &'a str {
    let non_blank = |name: &&String| !name.trim().is_empty();
    raw.get("project_name")
        .filter(non_blank)
        .or_else(|| raw.get("package_name").filter(non_blank))
        .map(String::as_str)
        .unwrap_or(template_id)
}

/// Interactive template selection over the registry's entries.
pub fn select_template(registry: &Registry) -> Result<&TemplateEntry> {
    if registry.templates.is_empty() {
        return Err(Error::Argument("the registry lists no templates".to_string()));
    }

    let items: Vec<String> = registry
        .templates
        .iter()
        .map(|entry| format!("{} ({})", entry.name, entry.id))
        .collect();

    let selection = FuzzySelect::new()
        .with_prompt("Select a template")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(&registry.templates[selection])
}
