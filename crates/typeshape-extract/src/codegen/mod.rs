//! Output writers for extracted type descriptors
//!
//! This module provides generators for:
//! - TypeScript declaration files (.d.ts)
//! - JSON dumps of the descriptor list

pub mod json;
pub mod typescript;

pub use json::to_json;
pub use typescript::DtsGenerator;

use crate::error::ArtifactError;
use crate::ir::TypeDescriptor;
use serde::{Deserialize, Serialize};

/// Rendered output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// TypeScript declarations
    #[default]
    Dts,
    /// Pretty-printed JSON descriptors
    Json,
}

impl OutputFormat {
    /// Pick the format matching an artifact extension (`.json` -> JSON,
    /// anything else -> declarations)
    pub fn from_extension(extension: &str) -> Self {
        if extension.to_ascii_lowercase().ends_with(".json") {
            OutputFormat::Json
        } else {
            OutputFormat::Dts
        }
    }

    /// Render descriptors in this format
    pub fn render(&self, types: &[TypeDescriptor]) -> Result<String, ArtifactError> {
        match self {
            OutputFormat::Dts => Ok(DtsGenerator::new(types).generate()),
            OutputFormat::Json => Ok(to_json(types)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(OutputFormat::from_extension(".d.ts"), OutputFormat::Dts);
        assert_eq!(OutputFormat::from_extension(".types.JSON"), OutputFormat::Json);
    }
}
