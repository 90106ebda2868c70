//! Type and property descriptors
//!
//! A [`TypeDescriptor`] is emitted for every exported class or enum that has
//! at least one property (or member). Descriptors are self-contained: a
//! writer never needs the source symbol graph to render them.

use crate::ir::TypeRef;
use serde::{Deserialize, Serialize};

/// Exported property (or enum member)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    /// Exported name, after rename attributes are applied
    pub name: String,
    /// Property type, absent for enum members
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeRef>,
    /// Documentation summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl PropertyDescriptor {
    /// Create a typed property
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            summary: None,
        }
    }

    /// Create an untyped enum member
    pub fn member(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            summary: None,
        }
    }

    /// Set the summary
    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary;
        self
    }
}

/// Exported class or enum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    /// Simple name
    pub name: String,
    /// Fully qualified name
    pub full_name: String,
    /// Export namespace (module)
    pub namespace: String,
    /// Whether this describes an enum
    #[serde(default)]
    pub is_enum: bool,
    /// Documentation summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Properties in declaration order
    pub properties: Vec<PropertyDescriptor>,
}

impl TypeDescriptor {
    /// Create a class descriptor
    pub fn class(
        name: impl Into<String>,
        full_name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            namespace: namespace.into(),
            is_enum: false,
            summary: None,
            properties: Vec::new(),
        }
    }

    /// Create an enum descriptor
    pub fn enumeration(
        name: impl Into<String>,
        full_name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            is_enum: true,
            ..Self::class(name, full_name, namespace)
        }
    }

    /// Add a property
    pub fn property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// Set properties
    pub fn with_properties(mut self, properties: Vec<PropertyDescriptor>) -> Self {
        self.properties = properties;
        self
    }

    /// Set the summary
    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary;
        self
    }

    /// Qualified name used by cross references (`namespace.Name`)
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }
}
