//! Statements and translation units.

use crate::{ExprId, Name, Span, TypeRef};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    /// Covers the whole statement including the terminating `;`.
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `ty name [= init];`
    Local {
        ty: TypeRef,
        ty_span: Span,
        name: Name,
        name_span: Span,
        init: Option<ExprId>,
    },
    /// `expr;`
    Expr(ExprId),
}

/// One source file: a flat sequence of statements.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Unit {
    pub stmts: Vec<Stmt>,
}
