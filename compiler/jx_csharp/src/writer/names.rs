//! Java names as C# spells them.

use std::borrow::Cow;

use jx_ir::{PrimitiveType, TypeRef};

/// C# reserved words. Sorted for binary search.
const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// A Java identifier that is reserved in C# gets the verbatim `@` prefix.
pub fn escape_identifier(name: &str) -> Cow<'_, str> {
    if CSHARP_KEYWORDS.binary_search(&name).is_ok() {
        Cow::Owned(format!("@{name}"))
    } else {
        Cow::Borrowed(name)
    }
}

pub fn csharp_primitive(prim: PrimitiveType) -> &'static str {
    match prim {
        PrimitiveType::Byte => "sbyte",
        PrimitiveType::Boolean => "bool",
        PrimitiveType::Short
        | PrimitiveType::Int
        | PrimitiveType::Long
        | PrimitiveType::Char
        | PrimitiveType::Float
        | PrimitiveType::Double => prim.java_name(),
    }
}

/// The C# spelling of a declared or cast-to type.
pub fn csharp_type_name(ty: &TypeRef) -> Cow<'_, str> {
    match ty {
        TypeRef::Primitive(prim) => Cow::Borrowed(csharp_primitive(*prim)),
        TypeRef::Class(_) if ty.is_string() => Cow::Borrowed("string"),
        TypeRef::Class(name) => escape_identifier(name.as_str()),
        TypeRef::Null => Cow::Borrowed("null"),
    }
}
