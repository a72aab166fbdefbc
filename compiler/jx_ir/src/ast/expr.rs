//! Expression nodes.

use smallvec::SmallVec;

use crate::{ExprId, InfixOp, Name, Span, TypeRef, UnaryOp};

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Literal categories. The literal's value is its source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralKind {
    Int,
    Long,
    Float,
    Double,
    Char,
    String,
    Bool,
    Null,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Literal(LiteralKind),
    Ident(Name),
    /// `( inner )`
    Paren(ExprId),
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    /// `( ty ) operand`
    Cast {
        ty: TypeRef,
        ty_span: Span,
        operand: ExprId,
    },
    Infix(InfixExpr),
    /// `cond ? then_expr : else_expr`
    Conditional {
        cond: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
    },
    /// `target = value`, or `target op= value` when `op` is set.
    Assign {
        op: Option<InfixOp>,
        target: ExprId,
        value: ExprId,
    },
}

/// Iterator over every operand of an [`InfixExpr`], in source order.
pub type Operands<'a> = std::iter::Chain<
    std::array::IntoIter<ExprId, 2>,
    std::iter::Copied<std::slice::Iter<'a, ExprId>>,
>;

/// A left-associative operator chain:
/// `left op right op extended[0] op extended[1] ...`.
///
/// `extended` is non-empty only for chain-capable operators
/// (see [`InfixOp::is_chainable`]).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct InfixExpr {
    pub op: InfixOp,
    pub left: ExprId,
    pub right: ExprId,
    pub extended: SmallVec<[ExprId; 2]>,
}

impl InfixExpr {
    pub fn new(op: InfixOp, left: ExprId, right: ExprId) -> Self {
        InfixExpr {
            op,
            left,
            right,
            extended: SmallVec::new(),
        }
    }

    #[inline]
    pub fn has_extended_operands(&self) -> bool {
        !self.extended.is_empty()
    }

    /// `2 + extended.len()`.
    #[inline]
    pub fn operand_count(&self) -> usize {
        2 + self.extended.len()
    }

    pub fn operands(&self) -> Operands<'_> {
        [self.left, self.right]
            .into_iter()
            .chain(self.extended.iter().copied())
    }
}
