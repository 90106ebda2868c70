//! Typeshape-Extract: type-graph extraction for TypeScript declaration output
//!
//! This crate walks the code model of a compilation unit (namespaces,
//! classes, enums, properties, attributes and doc comments) and produces
//! self-contained type descriptors that a serializer can turn into
//! `.d.ts` declarations.
//!
//! # Architecture
//!
//! - `symbols`: Input code model and the `SymbolProvider` lookup seam
//! - `ir`: Output descriptors (`TypeDescriptor`, `PropertyDescriptor`, `TypeRef`)
//! - `extract`: Driver, naming policy, type resolution, doc comment summaries
//! - `codegen`: TypeScript declaration and JSON writers
//! - `build`: Sibling artifact probing and regeneration
//! - `config`: Extraction options
//!
//! # Usage
//!
//! ```rust,ignore
//! use typeshape_extract::{ExtractOptions, Extractor, FsArtifactProbe, Project, ProjectIndex};
//!
//! let project: Project = serde_json::from_str(&json)?;
//! let index = ProjectIndex::build(&project)?;
//! let options = ExtractOptions::default();
//! let probe = FsArtifactProbe::new(&options.artifact_extension);
//! let extractor = Extractor::new(&index, &probe, &options);
//!
//! for unit in &project.units {
//!     if let Some(types) = extractor.extract_type_model(unit)? {
//!         println!("{}: {} types", unit.path.display(), types.len());
//!     }
//! }
//! ```

pub mod build;
pub mod codegen;
pub mod config;
pub mod error;
pub mod extract;
pub mod ir;
pub mod symbols;

// Re-export commonly used types
pub use build::{artifact_path, ArtifactProbe, ArtifactWriter, FsArtifactProbe};
pub use codegen::{to_json, DtsGenerator, OutputFormat};
pub use config::ExtractOptions;
pub use error::{ArtifactError, ConfigError, DocCommentError, ExtractError, ProviderError};
pub use extract::{Extractor, TraversalPath};
pub use ir::{PropertyDescriptor, TypeDescriptor, TypeRef};
pub use symbols::{
    Access, Accessor, Attribute, AttributeArgument, ClassSymbol, CodeElement, CompilationUnit,
    EnumMember, EnumSymbol, FileCodeModel, InfoLocation, Member, NamespaceSymbol, Project,
    ProjectIndex, PropertySymbol, SymbolProvider, SymbolRef, TypeKind, TypeReference, TypeSymbol,
};
