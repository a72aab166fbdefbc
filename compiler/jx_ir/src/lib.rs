//! jx IR - Intermediate Representation Types
//!
//! This crate contains the data structures shared by every jx phase:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - AST nodes (`Expr`, `Stmt`, `Unit`) in a flat `ExprArena`
//! - Source-level type references (`TypeRef`, `PrimitiveType`)
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: No `Box<Expr>`, use `ExprId(u32)` indices
//! - **Keep Trivia Out**: whitespace and comments are never tokenized; the
//!   byte gap between two token spans is the trivia, so later phases can copy
//!   it verbatim from the source text.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod expr_id;
mod name;
mod span;
mod token;
mod types;

pub use ast::{
    Expr, ExprArena, ExprKind, InfixExpr, InfixOp, LiteralKind, Operands, Stmt, StmtKind,
    UnaryOp, Unit,
};
pub use expr_id::ExprId;
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
pub use types::{PrimitiveType, TypeRef};
