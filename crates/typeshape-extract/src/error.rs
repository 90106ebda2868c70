//! Error types for extraction, symbol lookup and artifact output

use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by a symbol provider
///
/// These indicate an inconsistent symbol graph. Extraction does not try to
/// recover from them.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Two symbols share one fully qualified name
    #[error("Duplicate symbol: {0}")]
    DuplicateSymbol(String),

    /// A type reference names a symbol that is not in the graph
    #[error("Type reference {reference} points at unknown symbol {target}")]
    DanglingReference { reference: String, target: String },
}

/// Malformed documentation comment
#[derive(Debug, Error)]
pub enum DocCommentError {
    /// XML syntax or escape error
    #[error("XML error at position {position}: {message}")]
    Xml { position: u64, message: String },

    /// End tag without a matching start tag
    #[error("Unmatched end tag </{0}>")]
    UnmatchedEnd(String),

    /// Element left open at end of input
    #[error("Unclosed element <{0}>")]
    UnclosedElement(String),

    /// More than one top-level element
    #[error("Multiple root elements (found <{0}> after the root closed)")]
    MultipleRoots(String),

    /// Character data outside the root element
    #[error("Text outside the root element")]
    TextOutsideRoot,

    /// No element at all
    #[error("Missing root element")]
    MissingRoot,
}

impl DocCommentError {
    /// Wrap a parser error reported at `position`
    pub fn xml(position: u64, err: impl std::fmt::Display) -> Self {
        DocCommentError::Xml {
            position,
            message: err.to_string(),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error
    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors that can occur while writing generated artifacts
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that abort extraction of a compilation unit
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The symbol provider is inconsistent
    #[error("Symbol provider error: {0}")]
    Provider(#[from] ProviderError),
}
