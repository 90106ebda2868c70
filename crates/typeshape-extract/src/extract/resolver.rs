//! Property type resolution
//!
//! Classifies a declared type and decides how it should be exported:
//!
//! 1. Arrays unwrap to their element type and are flagged `is_array`.
//! 2. Names under `System.Collections` are flagged `is_array` too; their
//!    element type is not inspected.
//! 3. Built-in kinds, and names ending in `DateTime`, are primitive.
//!    Primitives and collections are never looked up.
//! 4. A project symbol that already has a generated sibling file gets a
//!    cross reference (`namespace.Name`).
//! 5. A non-primitive, non-collection class that is not already on the
//!    traversal path gets an inline shape of its exported properties.
//!
//! Enums, structs and interfaces are never inlined. Generic parameters
//! resolve to no symbol and end up as plain, unexpanded references.

use crate::error::ExtractError;
use crate::extract::{naming, Extractor, TraversalPath};
use crate::ir::TypeRef;
use crate::symbols::{InfoLocation, SymbolRef, TypeKind, TypeReference};
use tracing::trace;

impl Extractor<'_> {
    /// Resolve a declared type against the current traversal path
    pub fn resolve_type(
        &self,
        declared: &TypeReference,
        path: &mut TraversalPath,
    ) -> Result<TypeRef, ExtractError> {
        let mut ty = declared;
        let mut is_array = false;

        if ty.kind == TypeKind::Array {
            is_array = true;
            if let Some(element) = &ty.element_type {
                ty = element;
            }
        }

        let is_collection = ty.as_string.starts_with(&self.options.collection_prefix);

        let mut result = TypeRef::new(&ty.as_string);
        result.is_array = is_array || is_collection;

        if self.is_primitive(ty) || is_collection {
            return Ok(result);
        }

        let symbol = self.provider.resolve(ty)?;
        result.cross_reference_name = self.cross_reference(ty, symbol);

        if let Some(SymbolRef::Class(class)) = symbol {
            match path.enter(&class.full_name) {
                Some(mut guard) => {
                    result.shape = Some(self.collect_properties(class, &mut guard)?);
                }
                None => {
                    trace!(class = %class.full_name, "already on traversal path, not expanding");
                }
            }
        }

        Ok(result)
    }

    /// Built-in kinds are primitive; so is anything named like a date/time
    pub fn is_primitive(&self, ty: &TypeReference) -> bool {
        ty.kind.is_builtin() || ty.as_string.ends_with(&self.options.date_time_marker)
    }

    /// `namespace.Name` of a project symbol with a generated sibling file
    fn cross_reference(&self, ty: &TypeReference, symbol: Option<SymbolRef<'_>>) -> Option<String> {
        if ty.kind != TypeKind::CodeType {
            return None;
        }
        let symbol = symbol?;
        if symbol.location() != InfoLocation::Project {
            return None;
        }
        if !self.probe.exists(symbol.source_files()) {
            return None;
        }

        Some(format!(
            "{}.{}",
            naming::resolve_namespace(symbol.attributes(), self.options),
            symbol.name()
        ))
    }
}
