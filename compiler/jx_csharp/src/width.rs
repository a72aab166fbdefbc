//! Integer widths and their C# cast spellings.
//!
//! The unsigned shift rewrite needs to know how wide the left operand is and
//! which signed/unsigned C# types have that width. Width comes from the
//! static type service through [`WidthQuery`]; spellings come from a
//! [`CastTable`] so callers can retarget them.

use std::fmt;

use jx_ir::{ExprId, PrimitiveType, TypeRef};
use jx_types::ExprTypes;

/// Bit width of a Java integer primitive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrimitiveWidth {
    W8,
    W16,
    W32,
    W64,
}

impl PrimitiveWidth {
    pub const ALL: [PrimitiveWidth; 4] = [Self::W8, Self::W16, Self::W32, Self::W64];

    pub const fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    pub const fn from_bits(bits: u32) -> Option<PrimitiveWidth> {
        match bits {
            8 => Some(Self::W8),
            16 => Some(Self::W16),
            32 => Some(Self::W32),
            64 => Some(Self::W64),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Why an expression has no width.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum NotAPrimitive {
    /// The type service has no type for the expression.
    Unresolved,
    /// A type other than `byte`, `short`, `int` or `long`. `char` lands here:
    /// it is integral in Java but has no signed counterpart.
    NoIntegerWidth(TypeRef),
}

impl fmt::Display for NotAPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotAPrimitive::Unresolved => f.write_str("unresolved type"),
            NotAPrimitive::NoIntegerWidth(ty) => write!(f, "type `{ty}`"),
        }
    }
}

/// Width of a type, if it is one of the four signed integer primitives.
pub fn classify(ty: &TypeRef) -> Result<PrimitiveWidth, NotAPrimitive> {
    match ty.as_primitive() {
        Some(PrimitiveType::Byte) => Ok(PrimitiveWidth::W8),
        Some(PrimitiveType::Short) => Ok(PrimitiveWidth::W16),
        Some(PrimitiveType::Int) => Ok(PrimitiveWidth::W32),
        Some(PrimitiveType::Long) => Ok(PrimitiveWidth::W64),
        Some(
            PrimitiveType::Char
            | PrimitiveType::Boolean
            | PrimitiveType::Float
            | PrimitiveType::Double,
        )
        | None => Err(NotAPrimitive::NoIntegerWidth(ty.clone())),
    }
}

/// Static type lookup, as provided by type resolution.
pub trait WidthQuery {
    fn static_type(&self, expr: ExprId) -> Option<&TypeRef>;
}

impl WidthQuery for ExprTypes {
    fn static_type(&self, expr: ExprId) -> Option<&TypeRef> {
        self.get(expr)
    }
}

/// Width of `expr`'s static type. Types are never guessed.
pub fn resolve_primitive_width<Q: WidthQuery + ?Sized>(
    query: &Q,
    expr: ExprId,
) -> Result<PrimitiveWidth, NotAPrimitive> {
    query
        .static_type(expr)
        .ok_or(NotAPrimitive::Unresolved)
        .and_then(classify)
}

/// Signed and unsigned type names of one width.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CastPair {
    pub signed: String,
    pub unsigned: String,
}

impl CastPair {
    pub fn new(signed: impl Into<String>, unsigned: impl Into<String>) -> Self {
        CastPair {
            signed: signed.into(),
            unsigned: unsigned.into(),
        }
    }
}

/// Cast spellings for every width.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CastTable {
    pairs: [CastPair; 4],
}

impl CastTable {
    /// C# built-in types: `sbyte`/`byte`, `short`/`ushort`, `int`/`uint`,
    /// `long`/`ulong`.
    pub fn csharp() -> Self {
        CastTable {
            pairs: [
                CastPair::new("sbyte", "byte"),
                CastPair::new("short", "ushort"),
                CastPair::new("int", "uint"),
                CastPair::new("long", "ulong"),
            ],
        }
    }

    /// Replace the spellings for one width.
    #[must_use]
    pub fn with_pair(mut self, width: PrimitiveWidth, pair: CastPair) -> Self {
        self.pairs[Self::slot(width)] = pair;
        self
    }

    pub fn pair(&self, width: PrimitiveWidth) -> &CastPair {
        &self.pairs[Self::slot(width)]
    }

    const fn slot(width: PrimitiveWidth) -> usize {
        match width {
            PrimitiveWidth::W8 => 0,
            PrimitiveWidth::W16 => 1,
            PrimitiveWidth::W32 => 2,
            PrimitiveWidth::W64 => 3,
        }
    }
}

impl Default for CastTable {
    fn default() -> Self {
        Self::csharp()
    }
}
