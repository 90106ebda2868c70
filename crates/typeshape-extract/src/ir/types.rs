//! Type references for extracted properties
//!
//! A [`TypeRef`] records how a property's declared type should appear in
//! generated declarations. It keeps the declared type name and adds up to
//! two pieces of structure on top:
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `source_type_name` | Declared type name (e.g. `System.Int32`, `Shop.Item`) |
//! | `is_array` | Arrays and `System.Collections.*` types |
//! | `cross_reference_name` | `namespace.Name` of a type with its own generated file |
//! | `shape` | Inline properties of a class type not already being expanded |
//!
//! A writer prefers the cross reference, then the inline shape, then a
//! mapping of the source type name.

use crate::ir::PropertyDescriptor;
use serde::{Deserialize, Serialize};

/// Resolved type of a property
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    /// Fully qualified type name as declared
    pub source_type_name: String,

    /// Whether the type is an array or collection
    #[serde(default)]
    pub is_array: bool,

    /// Qualified name of a separately generated declaration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_reference_name: Option<String>,

    /// Inline structural expansion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Vec<PropertyDescriptor>>,
}

impl TypeRef {
    /// Create a plain type reference
    pub fn new(source_type_name: impl Into<String>) -> Self {
        Self {
            source_type_name: source_type_name.into(),
            ..Self::default()
        }
    }

    /// Mark as array
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// Set the cross reference
    pub fn with_cross_reference(mut self, name: impl Into<String>) -> Self {
        self.cross_reference_name = Some(name.into());
        self
    }

    /// Set the inline shape
    pub fn with_shape(mut self, shape: Vec<PropertyDescriptor>) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Simple name of the source type: namespace and generic arguments removed
    pub fn simple_name(&self) -> &str {
        let name = self
            .source_type_name
            .split('<')
            .next()
            .unwrap_or(&self.source_type_name);
        let name = name.trim_end_matches("[]");
        name.rsplit('.').next().unwrap_or(name)
    }
}
