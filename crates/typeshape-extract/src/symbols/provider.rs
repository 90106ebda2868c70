//! Symbol lookup for type references
//!
//! The extractor never walks the whole project. It follows type references
//! one at a time through a [`SymbolProvider`], which lets a provider back the
//! lookup with an in-memory index ([`ProjectIndex`]) or anything else.

use crate::error::ProviderError;
use crate::symbols::{
    Attribute, ClassSymbol, CodeElement, EnumSymbol, InfoLocation, Project, TypeReference,
    TypeSymbol,
};
use std::collections::HashMap;
use std::path::PathBuf;

/// A resolved type symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolRef<'a> {
    Class(&'a ClassSymbol),
    Enum(&'a EnumSymbol),
    /// Struct, interface or delegate: never expanded
    Opaque(&'a TypeSymbol),
}

impl<'a> SymbolRef<'a> {
    /// Simple name
    pub fn name(&self) -> &'a str {
        match self {
            SymbolRef::Class(c) => &c.name,
            SymbolRef::Enum(e) => &e.name,
            SymbolRef::Opaque(t) => &t.name,
        }
    }

    /// Fully qualified name
    pub fn full_name(&self) -> &'a str {
        match self {
            SymbolRef::Class(c) => &c.full_name,
            SymbolRef::Enum(e) => &e.full_name,
            SymbolRef::Opaque(t) => &t.full_name,
        }
    }

    /// Definition location
    pub fn location(&self) -> InfoLocation {
        match self {
            SymbolRef::Class(c) => c.location,
            SymbolRef::Enum(e) => e.location,
            SymbolRef::Opaque(t) => t.location,
        }
    }

    /// Applied attributes
    pub fn attributes(&self) -> &'a [Attribute] {
        match self {
            SymbolRef::Class(c) => &c.attributes,
            SymbolRef::Enum(e) => &e.attributes,
            SymbolRef::Opaque(t) => &t.attributes,
        }
    }

    /// Declaring source files
    pub fn source_files(&self) -> &'a [PathBuf] {
        match self {
            SymbolRef::Class(c) => &c.source_files,
            SymbolRef::Enum(e) => &e.source_files,
            SymbolRef::Opaque(t) => &t.source_files,
        }
    }

    /// The class, if this is one
    pub fn as_class(&self) -> Option<&'a ClassSymbol> {
        match self {
            SymbolRef::Class(c) => Some(c),
            SymbolRef::Enum(_) | SymbolRef::Opaque(_) => None,
        }
    }

    /// The enum, if this is one
    pub fn as_enum(&self) -> Option<&'a EnumSymbol> {
        match self {
            SymbolRef::Enum(e) => Some(e),
            SymbolRef::Class(_) | SymbolRef::Opaque(_) => None,
        }
    }
}

/// Lookup of type symbols by fully qualified name
pub trait SymbolProvider {
    /// Find a symbol by full name
    fn lookup(&self, full_name: &str) -> Result<Option<SymbolRef<'_>>, ProviderError>;

    /// Resolve the symbol a type reference points at.
    ///
    /// References without a `code_type` (built-ins, generic parameters)
    /// resolve to nothing. A `code_type` the provider does not know is a
    /// broken graph.
    fn resolve(&self, type_ref: &TypeReference) -> Result<Option<SymbolRef<'_>>, ProviderError> {
        let Some(target) = type_ref.code_type.as_deref() else {
            return Ok(None);
        };

        match self.lookup(target)? {
            Some(symbol) => Ok(Some(symbol)),
            None => Err(ProviderError::DanglingReference {
                reference: type_ref.as_string.clone(),
                target: target.to_string(),
            }),
        }
    }
}

/// In-memory index over every type symbol of a [`Project`]
///
/// Indexes all namespace levels and the project's external references.
#[derive(Debug, Default)]
pub struct ProjectIndex<'a> {
    symbols: HashMap<&'a str, SymbolRef<'a>>,
}

impl<'a> ProjectIndex<'a> {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a whole project
    pub fn build(project: &'a Project) -> Result<Self, ProviderError> {
        let mut index = Self::new();

        for unit in &project.units {
            if let Some(model) = &unit.code_model {
                index.register_elements(&model.elements)?;
            }
        }
        index.register_elements(&project.references)?;

        Ok(index)
    }

    /// Register elements, descending into namespaces
    pub fn register_elements(&mut self, elements: &'a [CodeElement]) -> Result<(), ProviderError> {
        for element in elements {
            match element {
                CodeElement::Namespace(ns) => self.register_elements(&ns.members)?,
                CodeElement::Class(c) => self.register(SymbolRef::Class(c))?,
                CodeElement::Enum(e) => self.register(SymbolRef::Enum(e))?,
                CodeElement::Struct(t) | CodeElement::Interface(t) | CodeElement::Delegate(t) => {
                    self.register(SymbolRef::Opaque(t))?
                }
                CodeElement::Other { .. } => {}
            }
        }
        Ok(())
    }

    /// Register a single symbol
    pub fn register(&mut self, symbol: SymbolRef<'a>) -> Result<(), ProviderError> {
        let full_name = symbol.full_name();
        if self.symbols.insert(full_name, symbol).is_some() {
            return Err(ProviderError::DuplicateSymbol(full_name.to_string()));
        }
        Ok(())
    }

    /// Number of indexed symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl SymbolProvider for ProjectIndex<'_> {
    fn lookup(&self, full_name: &str) -> Result<Option<SymbolRef<'_>>, ProviderError> {
        Ok(self.symbols.get(full_name).copied())
    }
}
