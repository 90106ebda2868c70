//! Extraction of type descriptors from a code model
//!
//! The [`Extractor`] walks the top-level elements of a compilation unit
//! (and the members of top-level namespaces, one level deep), turning every
//! class and enum that has something to export into a [`TypeDescriptor`].
//!
//! - `naming`: export namespace and property names from attributes
//! - `properties`: which properties are exported
//! - `resolver`: property types, cross references and inline shapes
//! - `docs`: summaries from XML doc comments
//! - `path`: cycle guard for shape expansion

pub mod docs;
pub mod naming;
pub mod path;
pub mod properties;
pub mod resolver;

pub use path::{PathGuard, TraversalPath};

use crate::build::ArtifactProbe;
use crate::config::ExtractOptions;
use crate::error::ExtractError;
use crate::ir::{PropertyDescriptor, TypeDescriptor};
use crate::symbols::{ClassSymbol, CodeElement, CompilationUnit, EnumSymbol, Project, SymbolProvider};
use std::path::Path;
use tracing::{debug, trace};

/// Builds type descriptors for compilation units
pub struct Extractor<'a> {
    provider: &'a dyn SymbolProvider,
    probe: &'a dyn ArtifactProbe,
    options: &'a ExtractOptions,
}

impl<'a> Extractor<'a> {
    /// Create an extractor
    ///
    /// # Arguments
    /// * `provider` - Resolves type references to class and enum symbols
    /// * `probe` - Tells whether a type already has a generated sibling file
    /// * `options` - Naming and classification policy
    pub fn new(
        provider: &'a dyn SymbolProvider,
        probe: &'a dyn ArtifactProbe,
        options: &'a ExtractOptions,
    ) -> Self {
        Self {
            provider,
            probe,
            options,
        }
    }

    /// Options in use
    pub fn options(&self) -> &ExtractOptions {
        self.options
    }

    /// Extract the type model of one compilation unit.
    ///
    /// Returns `Ok(None)` when the unit has no code model, which tells a
    /// caller "not a code file" apart from "nothing to export".
    pub fn extract_type_model(
        &self,
        unit: &CompilationUnit,
    ) -> Result<Option<Vec<TypeDescriptor>>, ExtractError> {
        let Some(model) = &unit.code_model else {
            debug!(path = %unit.path.display(), "no code model");
            return Ok(None);
        };

        let mut types = Vec::new();

        for element in &model.elements {
            match element {
                // Only the direct members of a namespace are visited
                CodeElement::Namespace(ns) => {
                    for member in &ns.members {
                        self.process_element(member, &mut types)?;
                    }
                }
                _ => self.process_element(element, &mut types)?,
            }
        }

        debug!(path = %unit.path.display(), types = types.len(), "extracted type model");
        Ok(Some(types))
    }

    /// Extract every unit of a project that has a code model
    pub fn extract_project<'p>(
        &self,
        project: &'p Project,
    ) -> Result<Vec<(&'p Path, Vec<TypeDescriptor>)>, ExtractError> {
        let mut results = Vec::new();

        for unit in &project.units {
            if let Some(types) = self.extract_type_model(unit)? {
                results.push((unit.path.as_path(), types));
            }
        }

        Ok(results)
    }

    fn process_element(
        &self,
        element: &CodeElement,
        types: &mut Vec<TypeDescriptor>,
    ) -> Result<(), ExtractError> {
        match element {
            CodeElement::Class(class) => {
                if let Some(descriptor) = self.process_class(class)? {
                    types.push(descriptor);
                }
            }
            CodeElement::Enum(e) => {
                if let Some(descriptor) = self.process_enum(e) {
                    types.push(descriptor);
                }
            }
            CodeElement::Namespace(_)
            | CodeElement::Struct(_)
            | CodeElement::Interface(_)
            | CodeElement::Delegate(_)
            | CodeElement::Other { .. } => {}
        }
        Ok(())
    }

    /// Descriptor for a class, or `None` if it exports no properties
    pub fn process_class(&self, class: &ClassSymbol) -> Result<Option<TypeDescriptor>, ExtractError> {
        let mut path = TraversalPath::new();
        let properties = self.collect_properties(class, &mut path)?;

        if properties.is_empty() {
            trace!(class = %class.full_name, "no exported properties, skipping");
            return Ok(None);
        }

        Ok(Some(
            TypeDescriptor::class(
                &class.name,
                &class.full_name,
                naming::resolve_namespace(&class.attributes, self.options),
            )
            .with_summary(docs::summary_of(
                class.location,
                class.doc_comment.as_deref(),
                &class.full_name,
            ))
            .with_properties(properties),
        ))
    }

    /// Descriptor for an enum, or `None` if it has no members
    pub fn process_enum(&self, e: &EnumSymbol) -> Option<TypeDescriptor> {
        if e.members.is_empty() {
            trace!(enum_name = %e.full_name, "no members, skipping");
            return None;
        }

        let members = e
            .members
            .iter()
            .map(|m| PropertyDescriptor::member(&m.name))
            .collect();

        Some(
            TypeDescriptor::enumeration(
                &e.name,
                &e.full_name,
                naming::resolve_namespace(&e.attributes, self.options),
            )
            .with_summary(docs::summary_of(
                e.location,
                e.doc_comment.as_deref(),
                &e.full_name,
            ))
            .with_properties(members),
        )
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::FakeProbe;
    use super::*;
    use crate::error::ProviderError;
    use crate::symbols::{
        Accessor, Access, Attribute, FileCodeModel, NamespaceSymbol, ProjectIndex, PropertySymbol,
        TypeReference,
    };
    use pretty_assertions::assert_eq;

    fn extract(project: &Project, unit: usize) -> Result<Option<Vec<TypeDescriptor>>, ExtractError> {
        let index = ProjectIndex::build(project).unwrap();
        let probe = FakeProbe::default();
        let options = ExtractOptions::default();
        Extractor::new(&index, &probe, &options).extract_type_model(&project.units[unit])
    }

    fn names(types: &[TypeDescriptor]) -> Vec<&str> {
        types.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_no_code_model() {
        let project = Project::new().unit(CompilationUnit::without_model("site.css"));
        assert_eq!(extract(&project, 0).unwrap(), None);
    }

    #[test]
    fn test_empty_model_is_empty_list() {
        let project = Project::new().unit(CompilationUnit::new("Empty.cs", FileCodeModel::new()));
        assert_eq!(extract(&project, 0).unwrap(), Some(vec![]));
    }

    #[test]
    fn test_top_level_and_one_namespace_level() {
        let model = FileCodeModel::new()
            .element(
                ClassSymbol::new("Top", "Top")
                    .property(PropertySymbol::new("Id", TypeReference::int())),
            )
            .element(CodeElement::Other {
                name: "IService".to_string(),
            })
            .element(
                NamespaceSymbol::new("Shop")
                    .member(EnumSymbol::new("Status", "Shop.Status").member("Open").member("Closed"))
                    .member(
                        NamespaceSymbol::new("Shop.Deep").member(
                            ClassSymbol::new("Hidden", "Shop.Deep.Hidden")
                                .property(PropertySymbol::new("Id", TypeReference::int())),
                        ),
                    ),
            );
        let project = Project::new().unit(CompilationUnit::new("Shop.cs", model));

        let types = extract(&project, 0).unwrap().unwrap();
        assert_eq!(names(&types), vec!["Top", "Status"]);
        assert!(types[1].is_enum);
        let members: Vec<_> = types[1].properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(members, vec!["Open", "Closed"]);
        assert!(types[1].properties.iter().all(|p| p.ty.is_none()));
    }

    #[test]
    fn test_class_without_eligible_properties_dropped() {
        let class = ClassSymbol::new("Hidden", "Shop.Hidden")
            .property(PropertySymbol::new("WriteOnly", TypeReference::int()).with_getter(None))
            .property(
                PropertySymbol::new("Private", TypeReference::int())
                    .with_getter(Some(Accessor::with_access(Access::Private))),
            )
            .property(
                PropertySymbol::new("Shared", TypeReference::int())
                    .with_getter(Some(Accessor::public().as_static())),
            )
            .property(
                PropertySymbol::new("Ignored", TypeReference::int())
                    .attribute(Attribute::new("IgnoreDataMember")),
            )
            .other_member("Save");
        let empty_enum = EnumSymbol::new("Nothing", "Shop.Nothing");
        let model = FileCodeModel::new().element(class).element(empty_enum);
        let project = Project::new().unit(CompilationUnit::new("Hidden.cs", model));

        assert_eq!(extract(&project, 0).unwrap(), Some(vec![]));
    }

    #[test]
    fn test_class_descriptor_fields() {
        let class = ClassSymbol::new("Order", "Shop.Order")
            .attribute(Attribute::new("TypeScriptModule").positional("\"Widgets\""))
            .with_doc("<doc><summary> An order. </summary></doc>")
            .property(
                PropertySymbol::new("Id", TypeReference::int())
                    .attribute(Attribute::new("DataMember").arg("Name", "\"id\""))
                    .with_doc("<doc><summary>Identifier</summary></doc>"),
            )
            .property(PropertySymbol::new("Note", TypeReference::string()).with_doc("<doc><summary>"));
        let project = Project::new().unit(CompilationUnit::new(
            "Order.cs",
            FileCodeModel::new().element(class),
        ));

        let types = extract(&project, 0).unwrap().unwrap();
        let order = &types[0];
        assert_eq!(order.namespace, "Widgets");
        assert_eq!(order.full_name, "Shop.Order");
        assert_eq!(order.summary.as_deref(), Some("An order."));
        assert!(!order.is_enum);

        assert_eq!(order.properties[0].name, "id");
        assert_eq!(order.properties[0].summary.as_deref(), Some("Identifier"));
        assert_eq!(
            order.properties[0].ty.as_ref().map(|t| t.source_type_name.as_str()),
            Some("System.Int32")
        );
        // malformed doc comment: summary absent, property still exported
        assert_eq!(order.properties[1].name, "Note");
        assert_eq!(order.properties[1].summary, None);
    }

    #[test]
    fn test_enum_default_namespace_and_summary() {
        let e = EnumSymbol::new("Color", "Paint.Color")
            .member("Red")
            .with_doc("<doc><summary>Colors</summary></doc>");
        let project = Project::new().unit(CompilationUnit::new("Color.cs", FileCodeModel::new().element(e)));

        let types = extract(&project, 0).unwrap().unwrap();
        assert_eq!(types[0].namespace, "server");
        assert_eq!(types[0].summary.as_deref(), Some("Colors"));
    }

    #[test]
    fn test_provider_failure_propagates() {
        let class = ClassSymbol::new("Order", "Shop.Order")
            .property(PropertySymbol::new("Lines", TypeReference::code_type("Shop.Missing")));
        let project = Project::new().unit(CompilationUnit::new(
            "Order.cs",
            FileCodeModel::new().element(class),
        ));

        let err = extract(&project, 0).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::Provider(ProviderError::DanglingReference { .. })
        ));
    }

    #[test]
    fn test_extract_project_skips_units_without_model() {
        let project = Project::new()
            .unit(CompilationUnit::without_model("app.js"))
            .unit(CompilationUnit::new(
                "Color.cs",
                FileCodeModel::new().element(EnumSymbol::new("Color", "Color").member("Red")),
            ));
        let index = ProjectIndex::build(&project).unwrap();
        let probe = FakeProbe::default();
        let options = ExtractOptions::default();

        let results = Extractor::new(&index, &probe, &options)
            .extract_project(&project)
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, Path::new("Color.cs"));
        assert_eq!(names(&results[0].1), vec!["Color"]);
    }
}
