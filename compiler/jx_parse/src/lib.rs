//! Recursive descent parser for the Java expression subset.
//!
//! Input is the lexer's [`TokenList`]; output is a [`Unit`] of statements
//! whose expressions live in an [`ExprArena`]. Errors are collected and the
//! parser resynchronizes at the next `;`, so one bad statement does not hide
//! the errors in the next.
//!
//! Operator chains follow the Eclipse JDT shape that the C# writer expects:
//! `a + b + c` is one [`InfixExpr`](jx_ir::InfixExpr) with an extended
//! operand, while `a < b == c` nests.

mod cursor;
mod error;
mod grammar;

use jx_ir::{Expr, ExprArena, ExprId, ExprKind, Span, TokenKind, TokenList, Unit};
use tracing::debug;

use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

/// Parse result: the unit, its expressions, and any errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub unit: Unit,
    pub arena: ExprArena,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    source: &'a str,
    arena: ExprArena,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        let source_len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        Parser {
            cursor: Cursor::new(tokens.as_slice(), source_len),
            source,
            arena: ExprArena::new(),
        }
    }

    /// Parse every statement up to `Eof`.
    pub fn parse_unit(mut self) -> ParseOutput {
        let mut unit = Unit::default();
        let mut errors = Vec::new();

        while !self.cursor.is_at_end() {
            match self.parse_stmt() {
                Ok(stmt) => unit.stmts.push(stmt),
                Err(error) => {
                    debug!(code = %error.code(), span = %error.span, "parse error, resynchronizing");
                    errors.push(error);
                    self.synchronize();
                }
            }
        }

        ParseOutput {
            unit,
            arena: self.arena,
            errors,
        }
    }

    /// Skip to just past the next `;`, or to `Eof`.
    fn synchronize(&mut self) {
        while !self.cursor.is_at_end() {
            if self.cursor.advance().kind == TokenKind::Semicolon {
                return;
            }
        }
    }

    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    fn span_of(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }

    /// Source text of a token span.
    fn text(&self, span: Span) -> &'a str {
        span.slice(self.source).unwrap_or("")
    }
}

/// Parse a token list produced from `source`.
pub fn parse(tokens: &TokenList, source: &str) -> ParseOutput {
    let output = Parser::new(tokens, source).parse_unit();
    debug!(
        stmts = output.unit.stmts.len(),
        exprs = output.arena.len(),
        errors = output.errors.len(),
        "parsed unit"
    );
    output
}

#[cfg(test)]
mod tests;
