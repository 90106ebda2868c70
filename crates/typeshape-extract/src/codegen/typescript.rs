//! TypeScript declaration (.d.ts) generator
//!
//! Renders descriptors as ambient module declarations, one block per export
//! namespace in order of first appearance:
//!
//! ```typescript
//! declare module server {
//!     /** An order. */
//!     interface Order {
//!         id: number;
//!         lines: { sku: string; qty: number; }[];
//!         status: server.Status;
//!     }
//!     enum Status {
//!         Open,
//!         Closed
//!     }
//! }
//! ```

use crate::ir::{PropertyDescriptor, TypeDescriptor, TypeRef};
use indexmap::IndexMap;

/// Generator for TypeScript declaration files
pub struct DtsGenerator<'a> {
    types: &'a [TypeDescriptor],
}

impl<'a> DtsGenerator<'a> {
    /// Create a generator for a descriptor list
    pub fn new(types: &'a [TypeDescriptor]) -> Self {
        Self { types }
    }

    /// Generate the complete .d.ts source
    pub fn generate(&self) -> String {
        let mut modules: IndexMap<&str, Vec<&TypeDescriptor>> = IndexMap::new();
        for t in self.types {
            modules.entry(t.namespace.as_str()).or_default().push(t);
        }

        let mut output = String::new();
        output.push_str("// Generated by typeshape. Changes will be overwritten.\n\n");

        for (namespace, types) in modules {
            output.push_str(&format!("declare module {} {{\n", namespace));
            for t in types {
                if t.is_enum {
                    output.push_str(&self.generate_enum(t));
                } else {
                    output.push_str(&self.generate_interface(t));
                }
            }
            output.push_str("}\n");
        }

        output
    }

    /// Generate an interface block
    fn generate_interface(&self, t: &TypeDescriptor) -> String {
        let mut output = String::new();

        push_doc(&mut output, "    ", t.summary.as_deref());
        output.push_str(&format!("    interface {} {{\n", t.name));

        for p in &t.properties {
            push_doc(&mut output, "        ", p.summary.as_deref());
            output.push_str(&format!("        {};\n", member(p)));
        }

        output.push_str("    }\n");
        output
    }

    /// Generate an enum block
    fn generate_enum(&self, t: &TypeDescriptor) -> String {
        let mut output = String::new();

        push_doc(&mut output, "    ", t.summary.as_deref());
        output.push_str(&format!("    enum {} {{\n", t.name));

        let members: Vec<String> = t
            .properties
            .iter()
            .map(|m| format!("        {}", m.name))
            .collect();
        output.push_str(&members.join(",\n"));
        output.push_str("\n    }\n");

        output
    }
}

/// `name: type` for an interface member or inline shape entry
fn member(p: &PropertyDescriptor) -> String {
    let ty = p
        .ty
        .as_ref()
        .map(typescript_type)
        .unwrap_or_else(|| "any".to_string());
    format!("{}: {}", property_key(&p.name), ty)
}

/// TypeScript type for a resolved type reference.
///
/// Cross references win over inline shapes, which win over primitive
/// mapping.
pub fn typescript_type(ty: &TypeRef) -> String {
    let base = if let Some(name) = &ty.cross_reference_name {
        name.clone()
    } else if let Some(shape) = &ty.shape {
        inline_shape(shape)
    } else {
        primitive_type(&ty.source_type_name).to_string()
    };

    if ty.is_array {
        format!("{}[]", base)
    } else {
        base
    }
}

fn inline_shape(shape: &[PropertyDescriptor]) -> String {
    if shape.is_empty() {
        return "{}".to_string();
    }
    let members: Vec<String> = shape.iter().map(|p| format!("{};", member(p))).collect();
    format!("{{ {} }}", members.join(" "))
}

/// Map a source type name to a TypeScript primitive (`any` when unknown)
pub fn primitive_type(source_type_name: &str) -> &'static str {
    let name = source_type_name.trim_end_matches('?');
    let name = name
        .strip_prefix("System.Nullable<")
        .and_then(|inner| inner.strip_suffix('>'))
        .unwrap_or(name);
    let simple = TypeRef::new(name).simple_name().to_string();

    match simple.as_str() {
        "Byte" | "SByte" | "Int16" | "Int32" | "Int64" | "UInt16" | "UInt32" | "UInt64"
        | "Single" | "Double" | "Decimal" | "byte" | "sbyte" | "short" | "ushort" | "int"
        | "uint" | "long" | "ulong" | "float" | "double" | "decimal" => "number",
        "String" | "Char" | "Guid" | "string" | "char" => "string",
        "Boolean" | "bool" => "boolean",
        "DateTime" | "DateTimeOffset" => "Date",
        _ => "any",
    }
}

/// Quote member names that are not plain identifiers
fn property_key(name: &str) -> String {
    let is_identifier = name
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$');

    if is_identifier {
        name.to_string()
    } else {
        format!("\"{}\"", name.replace('"', "\\\""))
    }
}

fn push_doc(output: &mut String, indent: &str, summary: Option<&str>) {
    let Some(summary) = summary else {
        return;
    };

    let lines: Vec<&str> = summary.lines().map(str::trim).collect();
    if lines.len() == 1 {
        output.push_str(&format!("{}/** {} */\n", indent, lines[0]));
    } else {
        output.push_str(&format!("{}/**\n", indent));
        for line in lines {
            output.push_str(&format!("{} * {}\n", indent, line));
        }
        output.push_str(&format!("{} */\n", indent));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primitive_mapping() {
        assert_eq!(primitive_type("System.Int32"), "number");
        assert_eq!(primitive_type("decimal"), "number");
        assert_eq!(primitive_type("System.String"), "string");
        assert_eq!(primitive_type("System.Guid"), "string");
        assert_eq!(primitive_type("bool"), "boolean");
        assert_eq!(primitive_type("System.DateTime"), "Date");
        assert_eq!(primitive_type("System.Nullable<System.Int32>"), "number");
        assert_eq!(primitive_type("int?"), "number");
        assert_eq!(primitive_type("System.Uri"), "any");
        assert_eq!(primitive_type("T"), "any");
    }

    #[test]
    fn test_typescript_type_precedence() {
        let shaped = TypeRef::new("Shop.Item").with_shape(vec![PropertyDescriptor::new(
            "sku",
            TypeRef::new("System.String"),
        )]);
        assert_eq!(typescript_type(&shaped), "{ sku: string; }");
        assert_eq!(
            typescript_type(&shaped.clone().array()),
            "{ sku: string; }[]"
        );
        assert_eq!(
            typescript_type(&shaped.with_cross_reference("server.Item")),
            "server.Item"
        );
        assert_eq!(typescript_type(&TypeRef::new("Shop.Empty").with_shape(vec![])), "{}");
    }

    #[test]
    fn test_property_key_quoting() {
        assert_eq!(property_key("id"), "id");
        assert_eq!(property_key("$ref"), "$ref");
        assert_eq!(property_key("first-name"), "\"first-name\"");
        assert_eq!(property_key("1st"), "\"1st\"");
    }

    #[test]
    fn test_generate() {
        let types = vec![
            TypeDescriptor::class("Order", "Shop.Order", "server")
                .with_summary(Some("An order.".to_string()))
                .property(
                    PropertyDescriptor::new("id", TypeRef::new("System.Int32"))
                        .with_summary(Some("Identifier".to_string())),
                )
                .property(PropertyDescriptor::new(
                    "status",
                    TypeRef::new("Shop.Status").with_cross_reference("server.Status"),
                )),
            TypeDescriptor::enumeration("Color", "Paint.Color", "Widgets")
                .property(PropertyDescriptor::member("Red"))
                .property(PropertyDescriptor::member("Green")),
            TypeDescriptor::enumeration("Status", "Shop.Status", "server")
                .property(PropertyDescriptor::member("Open")),
        ];

        let expected = "\
// Generated by typeshape. Changes will be overwritten.

declare module server {
    /** An order. */
    interface Order {
        /** Identifier */
        id: number;
        status: server.Status;
    }
    enum Status {
        Open
    }
}
declare module Widgets {
    enum Color {
        Red,
        Green
    }
}
";
        assert_eq!(DtsGenerator::new(&types).generate(), expected);
    }

    #[test]
    fn test_multiline_summary() {
        let types = vec![TypeDescriptor::class("A", "A", "server")
            .with_summary(Some("First line.\n   Second line.".to_string()))
            .property(PropertyDescriptor::new("x", TypeRef::new("System.Boolean")))];

        let output = DtsGenerator::new(&types).generate();
        assert!(output.contains("    /**\n     * First line.\n     * Second line.\n     */\n"));
        assert!(output.contains("        x: boolean;\n"));
    }
}
