//! Exported property selection
//!
//! A property is exported when it has a public, non-static getter and no
//! ignore attribute. Declaration order is kept.

use crate::config::ExtractOptions;
use crate::error::ExtractError;
use crate::extract::{docs, naming, Extractor, TraversalPath};
use crate::ir::PropertyDescriptor;
use crate::symbols::{Access, ClassSymbol, PropertySymbol};

/// Whether a property is exported
pub fn is_exported(property: &PropertySymbol, options: &ExtractOptions) -> bool {
    let readable = property
        .getter
        .is_some_and(|g| !g.is_static && g.access == Access::Public);

    readable
        && property
            .attributes
            .iter()
            .all(|a| a.name != options.ignore_attribute)
}

impl Extractor<'_> {
    /// Descriptors for the exported properties of `class`, resolving their
    /// types against the current traversal path
    pub fn collect_properties(
        &self,
        class: &ClassSymbol,
        path: &mut TraversalPath,
    ) -> Result<Vec<PropertyDescriptor>, ExtractError> {
        let mut properties = Vec::new();

        for property in class.properties().filter(|p| is_exported(p, self.options)) {
            let ty = self.resolve_type(&property.type_ref, path)?;
            let summary = docs::summary_of(
                property.location,
                property.doc_comment.as_deref(),
                &property.full_name,
            );

            properties.push(
                PropertyDescriptor::new(naming::resolve_property_name(property, self.options), ty)
                    .with_summary(summary),
            );
        }

        Ok(properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{Accessor, Attribute, TypeReference};

    #[test]
    fn test_is_exported() {
        let options = ExtractOptions::default();
        let base = || PropertySymbol::new("P", TypeReference::int());

        assert!(is_exported(&base(), &options));
        assert!(!is_exported(&base().with_getter(None), &options));
        assert!(!is_exported(
            &base().with_getter(Some(Accessor::public().as_static())),
            &options
        ));
        assert!(!is_exported(
            &base().with_getter(Some(Accessor::with_access(Access::Internal))),
            &options
        ));
        assert!(!is_exported(
            &base().attribute(Attribute::new("IgnoreDataMember")),
            &options
        ));
    }

    #[test]
    fn test_ignore_attribute_exact_match() {
        let options = ExtractOptions::default();
        let qualified = PropertySymbol::new("P", TypeReference::int())
            .attribute(Attribute::new("System.Runtime.Serialization.IgnoreDataMember"));
        assert!(is_exported(&qualified, &options));
    }
}
