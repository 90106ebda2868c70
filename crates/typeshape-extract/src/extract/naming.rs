//! Attribute-driven naming
//!
//! Two names are derived from attributes:
//!
//! - the export namespace of a class or enum, from any attribute whose name
//!   ends with `TypeScriptModule` (`[TypeScriptModule("Widgets")]`)
//! - the exported name of a property, from the rename table
//!   (`[DataMember(Name = "id")]`, `[JsonProperty("id")]`)

use crate::config::ExtractOptions;
use crate::symbols::{Attribute, PropertySymbol};
use tracing::warn;

/// Export namespace for a type with the given attributes.
///
/// Takes the first non-blank argument of the first module attribute that has
/// one, surrounding quotes removed. Falls back to the default module.
pub fn resolve_namespace(attributes: &[Attribute], options: &ExtractOptions) -> String {
    attributes
        .iter()
        .filter(|a| ends_with_ignore_ascii_case(&a.name, &options.module_attribute_suffix))
        .flat_map(|a| a.arguments.iter())
        .map(|arg| arg.value.trim_matches('"'))
        .find(|value| !value.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| options.default_module.clone())
}

/// Exported name for a property.
///
/// The first attribute found in the rename table decides. If it has none of
/// the listed arguments the declared name is kept, even when a later
/// attribute would match.
pub fn resolve_property_name(property: &PropertySymbol, options: &ExtractOptions) -> String {
    for attribute in &property.attributes {
        let Some(candidates) = options.rename_attributes.get(attribute.short_name()) else {
            continue;
        };

        let Some(argument) = attribute
            .arguments
            .iter()
            .find(|arg| candidates.iter().any(|c| *c == arg.name))
        else {
            break;
        };

        return unquote(&argument.value, &property.full_name);
    }

    property.name.clone()
}

/// Strip one pair of surrounding quotes from a string literal argument.
///
/// Anything that is not a quoted literal (a constant, `nameof(...)`) is used
/// as written, with a warning.
fn unquote(value: &str, property: &str) -> String {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        return value[1..value.len() - 1].to_string();
    }

    warn!(
        property = %property,
        value = %value,
        "rename argument is not a string literal, using it verbatim"
    );
    value.trim().to_string()
}

fn ends_with_ignore_ascii_case(name: &str, suffix: &str) -> bool {
    name.len()
        .checked_sub(suffix.len())
        .and_then(|start| name.get(start..))
        .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}
