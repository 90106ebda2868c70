//! Extraction options
//!
//! Every policy constant the extractor relies on lives here, so that a
//! project can override them from a TOML file:
//!
//! ```toml
//! default_module = "api"
//! artifact_extension = ".d.ts"
//!
//! [rename_attributes]
//! DataMember = ["Name"]
//! JsonProperty = ["", "PropertyName"]
//! JsonPropertyName = [""]
//! ```
//!
//! Omitted keys keep their defaults.

use crate::error::ConfigError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Module name used when a type carries no module override attribute
pub const DEFAULT_MODULE_NAME: &str = "server";

/// Suffix identifying the module override attribute
pub const MODULE_ATTRIBUTE_SUFFIX: &str = "TypeScriptModule";

/// Attribute that hides a property from export
pub const IGNORE_ATTRIBUTE: &str = "IgnoreDataMember";

/// Namespace prefix of types treated as collections
pub const COLLECTION_PREFIX: &str = "System.Collections";

/// Type name suffix that forces primitive classification
pub const DATE_TIME_MARKER: &str = "DateTime";

/// Extension appended to a source file path to locate its generated artifact
pub const TYPESCRIPT_EXTENSION: &str = ".d.ts";

/// Options controlling naming, filtering and classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Namespace assigned when no module attribute is present
    pub default_module: String,
    /// Attribute name suffix that overrides the namespace (ASCII case-insensitive)
    pub module_attribute_suffix: String,
    /// Attribute name that excludes a property (exact match)
    pub ignore_attribute: String,
    /// Type name prefix marking collections
    pub collection_prefix: String,
    /// Type name suffix classified as primitive
    pub date_time_marker: String,
    /// Sibling artifact extension
    pub artifact_extension: String,
    /// Attribute short name -> argument names that carry the exported name.
    /// An empty argument name is the positional argument.
    pub rename_attributes: IndexMap<String, Vec<String>>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            default_module: DEFAULT_MODULE_NAME.to_string(),
            module_attribute_suffix: MODULE_ATTRIBUTE_SUFFIX.to_string(),
            ignore_attribute: IGNORE_ATTRIBUTE.to_string(),
            collection_prefix: COLLECTION_PREFIX.to_string(),
            date_time_marker: DATE_TIME_MARKER.to_string(),
            artifact_extension: TYPESCRIPT_EXTENSION.to_string(),
            rename_attributes: default_rename_attributes(),
        }
    }
}

/// The built-in rename table: `DataMember(Name = "...")` and
/// `JsonProperty("...")` / `JsonProperty(PropertyName = "...")`.
pub fn default_rename_attributes() -> IndexMap<String, Vec<String>> {
    let mut table = IndexMap::new();
    table.insert("DataMember".to_string(), vec!["Name".to_string()]);
    table.insert(
        "JsonProperty".to_string(),
        vec![String::new(), "PropertyName".to_string()],
    );
    table
}

impl ExtractOptions {
    /// Parse options from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load options from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Set the default module name
    pub fn with_default_module(mut self, module: impl Into<String>) -> Self {
        self.default_module = module.into();
        self
    }

    /// Register an additional rename attribute
    pub fn with_rename_attribute(
        mut self,
        attribute: impl Into<String>,
        arguments: &[&str],
    ) -> Self {
        self.rename_attributes.insert(
            attribute.into(),
            arguments.iter().map(|a| a.to_string()).collect(),
        );
        self
    }
}
