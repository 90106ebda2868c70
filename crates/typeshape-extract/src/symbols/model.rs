//! Symbol model for compilation units
//!
//! These types describe what a source provider knows about one project:
//! the namespaces, classes and enums declared in each file, their members,
//! attributes and raw doc comments. The model is plain data and
//! round-trips through JSON, so any provider that can dump its code model
//! can feed the extractor.
//!
//! Symbol kinds are closed enums ([`CodeElement`], [`Member`]); anything the
//! extractor does not handle maps to an `Other` variant.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where a symbol is defined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum InfoLocation {
    /// Defined in a source file of the current project
    #[default]
    Project,
    /// Referenced from a compiled assembly or another project
    External,
}

/// Declared accessibility of an accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Access {
    #[default]
    Public,
    Protected,
    Internal,
    ProtectedInternal,
    Private,
}

/// Property accessor (getter) metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    /// Accessibility
    #[serde(default)]
    pub access: Access,
    /// Whether the accessor is static
    #[serde(default)]
    pub is_static: bool,
}

impl Accessor {
    /// Public instance accessor
    pub fn public() -> Self {
        Self::default()
    }

    /// Instance accessor with the given access
    pub fn with_access(access: Access) -> Self {
        Self {
            access,
            is_static: false,
        }
    }

    /// Mark as static
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// One argument of an attribute application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeArgument {
    /// Argument name, empty for positional arguments
    #[serde(default)]
    pub name: String,
    /// Argument source text (string literals keep their quotes)
    #[serde(default)]
    pub value: String,
}

/// Attribute applied to a symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Attribute name as written (may be namespace qualified)
    pub name: String,
    /// Arguments in declaration order
    #[serde(default)]
    pub arguments: Vec<AttributeArgument>,
}

impl Attribute {
    /// Create an attribute without arguments
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Add a named argument
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.push(AttributeArgument {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Add a positional argument
    pub fn positional(self, value: impl Into<String>) -> Self {
        self.arg("", value)
    }

    /// Attribute name with any namespace qualifier removed
    pub fn short_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// Kind of a type reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeKind {
    /// Reference to a class, struct, enum or interface symbol
    CodeType,
    /// Array of `element_type`
    Array,
    /// Anything the provider could not classify (generic parameters etc.)
    Other,
    Void,
    Pointer,
    String,
    Short,
    Int,
    Long,
    Byte,
    Char,
    Bool,
    Decimal,
    Float,
    Double,
    Object,
    Variant,
}

impl TypeKind {
    /// Whether this is a built-in kind rather than a named reference
    pub fn is_builtin(&self) -> bool {
        !matches!(self, TypeKind::CodeType | TypeKind::Other)
    }
}

/// A declared type, as seen at a property declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeReference {
    /// Reference kind
    pub kind: TypeKind,
    /// Fully qualified type name as declared (e.g. `System.Collections.Generic.List<App.Item>`)
    pub as_string: String,
    /// Element type for arrays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<Box<TypeReference>>,
    /// Full name of the class or enum symbol this reference resolves to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_type: Option<String>,
}

impl TypeReference {
    /// Built-in type (e.g. `TypeKind::Int`, `System.Int32`)
    pub fn builtin(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            as_string: name.into(),
            element_type: None,
            code_type: None,
        }
    }

    /// `System.String`
    pub fn string() -> Self {
        Self::builtin(TypeKind::String, "System.String")
    }

    /// `System.Int32`
    pub fn int() -> Self {
        Self::builtin(TypeKind::Int, "System.Int32")
    }

    /// `System.Boolean`
    pub fn bool() -> Self {
        Self::builtin(TypeKind::Bool, "System.Boolean")
    }

    /// Reference to a named class or enum symbol
    pub fn code_type(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        Self {
            kind: TypeKind::CodeType,
            as_string: full_name.clone(),
            element_type: None,
            code_type: Some(full_name),
        }
    }

    /// Reference whose declared name differs from the symbol it resolves to
    /// (e.g. a constructed generic `List<Foo>` resolving to `List<T>`)
    pub fn constructed(as_string: impl Into<String>, code_type: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::CodeType,
            as_string: as_string.into(),
            element_type: None,
            code_type: Some(code_type.into()),
        }
    }

    /// Unclassified reference (generic parameters, unresolved names)
    pub fn other(name: impl Into<String>) -> Self {
        Self::builtin(TypeKind::Other, name)
    }

    /// Array of `element`
    pub fn array_of(element: TypeReference) -> Self {
        Self {
            kind: TypeKind::Array,
            as_string: format!("{}[]", element.as_string),
            element_type: Some(Box::new(element)),
            code_type: None,
        }
    }
}

/// Property declared on a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySymbol {
    /// Declared name
    pub name: String,
    /// Fully qualified name (`Namespace.Class.Property`)
    pub full_name: String,
    /// Definition location
    #[serde(default)]
    pub location: InfoLocation,
    /// Raw doc comment XML
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_comment: Option<String>,
    /// Applied attributes in declaration order
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Getter, if the property has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub getter: Option<Accessor>,
    /// Declared type
    #[serde(rename = "type")]
    pub type_ref: TypeReference,
}

impl PropertySymbol {
    /// Create a property with a public getter
    pub fn new(name: impl Into<String>, type_ref: TypeReference) -> Self {
        let name = name.into();
        Self {
            full_name: name.clone(),
            name,
            location: InfoLocation::Project,
            doc_comment: None,
            attributes: Vec::new(),
            getter: Some(Accessor::public()),
            type_ref,
        }
    }

    /// Set the fully qualified name
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Set the getter (None for write-only properties)
    pub fn with_getter(mut self, getter: Option<Accessor>) -> Self {
        self.getter = getter;
        self
    }

    /// Add an attribute
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set the raw doc comment
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = Some(doc.into());
        self
    }

    /// Mark as externally defined
    pub fn external(mut self) -> Self {
        self.location = InfoLocation::External;
        self
    }
}

/// Class member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Member {
    Property(PropertySymbol),
    /// Fields, methods, events, nested types
    Other { name: String },
}

/// Class (or struct) declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSymbol {
    /// Simple name
    pub name: String,
    /// Fully qualified name
    pub full_name: String,
    /// Definition location
    #[serde(default)]
    pub location: InfoLocation,
    /// Raw doc comment XML
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_comment: Option<String>,
    /// Applied attributes
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Members in declaration order
    #[serde(default)]
    pub members: Vec<Member>,
    /// Source files declaring this class (several for partial classes)
    #[serde(default)]
    pub source_files: Vec<PathBuf>,
}

impl ClassSymbol {
    /// Create a project-local class
    pub fn new(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            location: InfoLocation::Project,
            doc_comment: None,
            attributes: Vec::new(),
            members: Vec::new(),
            source_files: Vec::new(),
        }
    }

    /// Add a property. An unqualified property name is qualified with the
    /// class's full name.
    pub fn property(mut self, mut property: PropertySymbol) -> Self {
        if property.full_name == property.name {
            property.full_name = format!("{}.{}", self.full_name, property.name);
        }
        self.members.push(Member::Property(property));
        self
    }

    /// Add a non-property member
    pub fn other_member(mut self, name: impl Into<String>) -> Self {
        self.members.push(Member::Other { name: name.into() });
        self
    }

    /// Add an attribute
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set the raw doc comment
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = Some(doc.into());
        self
    }

    /// Add a declaring source file
    pub fn source_file(mut self, path: impl AsRef<Path>) -> Self {
        self.source_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Mark as externally defined
    pub fn external(mut self) -> Self {
        self.location = InfoLocation::External;
        self
    }

    /// Property members in declaration order
    pub fn properties(&self) -> impl Iterator<Item = &PropertySymbol> {
        self.members.iter().filter_map(|m| match m {
            Member::Property(p) => Some(p),
            Member::Other { .. } => None,
        })
    }
}

/// Enum member
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumMember {
    pub name: String,
}

/// Enum declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumSymbol {
    /// Simple name
    pub name: String,
    /// Fully qualified name
    pub full_name: String,
    /// Definition location
    #[serde(default)]
    pub location: InfoLocation,
    /// Raw doc comment XML
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_comment: Option<String>,
    /// Applied attributes
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Members in declaration order
    #[serde(default)]
    pub members: Vec<EnumMember>,
    /// Source files declaring this enum
    #[serde(default)]
    pub source_files: Vec<PathBuf>,
}

impl EnumSymbol {
    /// Create a project-local enum
    pub fn new(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            location: InfoLocation::Project,
            doc_comment: None,
            attributes: Vec::new(),
            members: Vec::new(),
            source_files: Vec::new(),
        }
    }

    /// Add a member
    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.members.push(EnumMember { name: name.into() });
        self
    }

    /// Add an attribute
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set the raw doc comment
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = Some(doc.into());
        self
    }

    /// Add a declaring source file
    pub fn source_file(mut self, path: impl AsRef<Path>) -> Self {
        self.source_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Mark as externally defined
    pub fn external(mut self) -> Self {
        self.location = InfoLocation::External;
        self
    }
}

/// Struct, interface or delegate declaration
///
/// Referenced types that export nothing themselves. Kept only so a type
/// reference can resolve to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSymbol {
    /// Simple name
    pub name: String,
    /// Fully qualified name
    pub full_name: String,
    /// Definition location
    #[serde(default)]
    pub location: InfoLocation,
    /// Applied attributes
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Source files declaring this type
    #[serde(default)]
    pub source_files: Vec<PathBuf>,
}

impl TypeSymbol {
    /// Create a project-local type
    pub fn new(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            location: InfoLocation::Project,
            attributes: Vec::new(),
            source_files: Vec::new(),
        }
    }

    /// Add a declaring source file
    pub fn source_file(mut self, path: impl AsRef<Path>) -> Self {
        self.source_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Mark as externally defined
    pub fn external(mut self) -> Self {
        self.location = InfoLocation::External;
        self
    }
}

/// Namespace block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceSymbol {
    pub name: String,
    #[serde(default)]
    pub members: Vec<CodeElement>,
}

impl NamespaceSymbol {
    /// Create an empty namespace
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a member element
    pub fn member(mut self, element: impl Into<CodeElement>) -> Self {
        self.members.push(element.into());
        self
    }
}

/// Top-level or namespace-level code element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CodeElement {
    Namespace(NamespaceSymbol),
    Class(ClassSymbol),
    Enum(EnumSymbol),
    /// Value type
    Struct(TypeSymbol),
    Interface(TypeSymbol),
    Delegate(TypeSymbol),
    /// Using directives, attributes, ...
    Other { name: String },
}

impl From<NamespaceSymbol> for CodeElement {
    fn from(ns: NamespaceSymbol) -> Self {
        CodeElement::Namespace(ns)
    }
}

impl From<ClassSymbol> for CodeElement {
    fn from(class: ClassSymbol) -> Self {
        CodeElement::Class(class)
    }
}

impl From<EnumSymbol> for CodeElement {
    fn from(e: EnumSymbol) -> Self {
        CodeElement::Enum(e)
    }
}

/// Code model of one source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FileCodeModel {
    #[serde(default)]
    pub elements: Vec<CodeElement>,
}

impl FileCodeModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level element
    pub fn element(mut self, element: impl Into<CodeElement>) -> Self {
        self.elements.push(element.into());
        self
    }
}

/// One source file of the project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilationUnit {
    /// Source file path
    pub path: PathBuf,
    /// Code model, absent for files that are not code (resources, scripts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_model: Option<FileCodeModel>,
}

impl CompilationUnit {
    /// Create a code file
    pub fn new(path: impl AsRef<Path>, code_model: FileCodeModel) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            code_model: Some(code_model),
        }
    }

    /// Create a file without a code model
    pub fn without_model(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            code_model: None,
        }
    }
}

/// All compilation units of a project plus the external symbols they reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Source files
    #[serde(default)]
    pub units: Vec<CompilationUnit>,
    /// Symbols defined outside the project (framework types, other assemblies)
    #[serde(default)]
    pub references: Vec<CodeElement>,
}

impl Project {
    /// Create an empty project
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a compilation unit
    pub fn unit(mut self, unit: CompilationUnit) -> Self {
        self.units.push(unit);
        self
    }

    /// Add an external symbol
    pub fn reference(mut self, element: impl Into<CodeElement>) -> Self {
        self.references.push(element.into());
        self
    }

    /// Find a unit by path
    pub fn find_unit(&self, path: &Path) -> Option<&CompilationUnit> {
        self.units.iter().find(|u| u.path == path)
    }
}
