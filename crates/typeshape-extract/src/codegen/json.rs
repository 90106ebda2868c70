//! JSON output

use crate::ir::TypeDescriptor;

/// Pretty JSON array of descriptors, camelCase field names
pub fn to_json(types: &[TypeDescriptor]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(types)
}
