//! Sibling artifact files
//!
//! A generated artifact lives next to its source file, with the artifact
//! extension appended to the full file name (`Order.cs` -> `Order.cs.d.ts`).
//! Only sources whose artifact already exists take part: that is how a
//! project opts a file in.

use crate::codegen::OutputFormat;
use crate::error::ArtifactError;
use crate::ir::TypeDescriptor;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path of the artifact generated for `source`
pub fn artifact_path(source: &Path, extension: &str) -> PathBuf {
    let mut name = source.as_os_str().to_os_string();
    name.push(extension);
    PathBuf::from(name)
}

/// Answers whether a symbol already has a generated sibling file
pub trait ArtifactProbe {
    /// True if any of the symbol's source files has an artifact
    fn exists(&self, source_files: &[PathBuf]) -> bool;
}

/// Probe that checks the filesystem
#[derive(Debug, Clone)]
pub struct FsArtifactProbe {
    extension: String,
}

impl FsArtifactProbe {
    /// Create a probe for artifacts with the given extension
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }
}

impl ArtifactProbe for FsArtifactProbe {
    fn exists(&self, source_files: &[PathBuf]) -> bool {
        source_files
            .iter()
            .any(|f| artifact_path(f, &self.extension).is_file())
    }
}

/// Rewrites existing artifacts with freshly extracted descriptors
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    extension: String,
    format: OutputFormat,
}

impl ArtifactWriter {
    /// Create a writer; the output format follows the extension
    pub fn new(extension: impl Into<String>) -> Self {
        let extension = extension.into();
        let format = OutputFormat::from_extension(&extension);
        Self { extension, format }
    }

    /// Override the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Output format in use
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Regenerate the artifact of `source`.
    ///
    /// Returns `Ok(false)` without touching the disk when the artifact does
    /// not exist yet.
    pub fn regenerate(
        &self,
        source: &Path,
        types: &[TypeDescriptor],
    ) -> Result<bool, ArtifactError> {
        let target = artifact_path(source, &self.extension);
        if !target.is_file() {
            debug!(source = %source.display(), "no artifact, skipping");
            return Ok(false);
        }

        let content = self.format.render(types)?;
        fs::write(&target, content)?;

        debug!(
            artifact = %target.display(),
            types = types.len(),
            "regenerated artifact"
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{PropertyDescriptor, TypeRef};
    use tempfile::tempdir;

    fn order() -> Vec<TypeDescriptor> {
        vec![TypeDescriptor::class("Order", "Shop.Order", "server")
            .property(PropertyDescriptor::new("id", TypeRef::new("System.Int32")))]
    }

    #[test]
    fn test_artifact_path_appends_extension() {
        assert_eq!(
            artifact_path(Path::new("src/Order.cs"), ".d.ts"),
            PathBuf::from("src/Order.cs.d.ts")
        );
    }

    #[test]
    fn test_probe() {
        let dir = tempdir().unwrap();
        let with = dir.path().join("A.cs");
        let without = dir.path().join("B.cs");
        fs::write(artifact_path(&with, ".d.ts"), "").unwrap();

        let probe = FsArtifactProbe::new(".d.ts");
        assert!(probe.exists(&[without.clone(), with]));
        assert!(!probe.exists(&[without]));
        assert!(!probe.exists(&[]));
    }

    #[test]
    fn test_regenerate_existing_artifact() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("Order.cs");
        let target = artifact_path(&source, ".d.ts");
        fs::write(&target, "stale").unwrap();

        let written = ArtifactWriter::new(".d.ts")
            .regenerate(&source, &order())
            .unwrap();
        assert!(written);

        let content = fs::read_to_string(&target).unwrap();
        assert!(content.contains("declare module server {"));
        assert!(content.contains("interface Order {"));
    }

    #[test]
    fn test_regenerate_skips_missing_artifact() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("Order.cs");

        let written = ArtifactWriter::new(".d.ts")
            .regenerate(&source, &order())
            .unwrap();
        assert!(!written);
        assert!(!artifact_path(&source, ".d.ts").exists());
    }

    #[test]
    fn test_json_artifact() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("Order.cs");
        let target = artifact_path(&source, ".types.json");
        fs::write(&target, "[]").unwrap();

        let writer = ArtifactWriter::new(".types.json");
        assert_eq!(writer.format(), OutputFormat::Json);
        writer.regenerate(&source, &order()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
        assert_eq!(value[0]["fullName"], "Shop.Order");
    }
}
