//! AST node types.
//!
//! Expressions live in an [`ExprArena`] and refer to each other by
//! [`ExprId`]. Statements hold ids into the same arena.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind, InfixExpr, LiteralKind, Operands};
pub use operators::{InfixOp, UnaryOp};
pub use stmt::{Stmt, StmtKind, Unit};

use crate::ExprId;

/// Contiguous storage for every expression of one unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression and return its id.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len()).unwrap_or(u32::MAX);
        debug_assert!(index != u32::MAX, "expression arena overflow");
        self.exprs.push(expr);
        ExprId::new(index)
    }

    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn get_expr_mut(&mut self, id: ExprId) -> &mut Expr {
        &mut self.exprs[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}
