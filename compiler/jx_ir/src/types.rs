//! Source-level type references.
//!
//! These are the types a Java declaration or cast can spell, plus the type
//! of `null`. Resolution (which expression has which type) lives in
//! `jx_types`; this module only names types.

use std::fmt;

use crate::Name;

/// Java primitive types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrimitiveType {
    Byte,
    Short,
    Int,
    Long,
    Char,
    Boolean,
    Float,
    Double,
}

impl PrimitiveType {
    /// The Java keyword for this type.
    pub const fn java_name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Boolean => "boolean",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// `byte`, `short`, `char`, `int`, `long`.
    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            Self::Byte | Self::Short | Self::Char | Self::Int | Self::Long
        )
    }

    /// Integral and floating-point types (everything except `boolean`).
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Boolean)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.java_name())
    }
}

/// A reference to a type as written or inferred.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeRef {
    Primitive(PrimitiveType),
    /// A class type by simple name (`String`, `Object`).
    Class(Name),
    /// The type of the `null` literal.
    Null,
}

impl TypeRef {
    pub const INT: TypeRef = TypeRef::Primitive(PrimitiveType::Int);
    pub const LONG: TypeRef = TypeRef::Primitive(PrimitiveType::Long);
    pub const BOOLEAN: TypeRef = TypeRef::Primitive(PrimitiveType::Boolean);

    pub fn string() -> TypeRef {
        TypeRef::Class(Name::new("String"))
    }

    #[inline]
    pub fn as_primitive(&self) -> Option<PrimitiveType> {
        match self {
            TypeRef::Primitive(p) => Some(*p),
            TypeRef::Class(_) | TypeRef::Null => None,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, TypeRef::Class(name) if name.as_str() == "String")
    }

    /// The name of this type as Java spells it.
    pub fn java_name(&self) -> &str {
        match self {
            TypeRef::Primitive(p) => p.java_name(),
            TypeRef::Class(name) => name.as_str(),
            TypeRef::Null => "null",
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.java_name())
    }
}

impl From<PrimitiveType> for TypeRef {
    fn from(p: PrimitiveType) -> Self {
        TypeRef::Primitive(p)
    }
}
