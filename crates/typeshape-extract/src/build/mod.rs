//! Generated artifact utilities
//!
//! This module provides:
//! - `ArtifactProbe`: whether a type already has a generated sibling file
//! - `ArtifactWriter`: regeneration of existing sibling files

pub mod artifact;

pub use artifact::{artifact_path, ArtifactProbe, ArtifactWriter, FsArtifactProbe};
