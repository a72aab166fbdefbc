//! The C# writer.
//!
//! Walks the typed AST in source order and, for each token the tree owns,
//! either copies it or replaces it after checking that the source really has
//! the token the tree says it has. The trivia between tokens is copied as
//! it stands.
//!
//! - `mod.rs`: dispatch over every expression and statement kind
//! - `infix.rs`: table-mapped operators and their chains
//! - `unsigned_shift.rs`: the `>>>` rewrite
//! - `names.rs`: type names and reserved identifiers

mod infix;
mod names;
mod unsigned_shift;

use jx_diagnostic::ErrorCode;
use jx_ir::{ExprArena, ExprId, ExprKind, LiteralKind, Span, Stmt, StmtKind, TokenList, Unit};
use jx_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::operators::compound_equivalent;
use crate::source::SourceReader;
use crate::width::{CastTable, WidthQuery};
use crate::{Emitter, TranslateError};

pub use names::{csharp_type_name, escape_identifier};

/// Writes C# for statements and expressions of one unit into an [`Emitter`].
///
/// Writes must happen in source order: the reader only moves forward.
pub struct ExprWriter<'a, Q: WidthQuery + ?Sized, E: Emitter> {
    arena: &'a ExprArena,
    types: &'a Q,
    casts: &'a CastTable,
    reader: SourceReader<'a>,
    out: E,
}

impl<'a, Q: WidthQuery + ?Sized, E: Emitter> ExprWriter<'a, Q, E> {
    pub fn new(
        source: &'a str,
        tokens: &'a TokenList,
        arena: &'a ExprArena,
        types: &'a Q,
        casts: &'a CastTable,
        out: E,
    ) -> Self {
        ExprWriter {
            arena,
            types,
            casts,
            reader: SourceReader::new(source, tokens),
            out,
        }
    }

    /// Write every statement, then the trailing trivia.
    pub fn write_unit(&mut self, unit: &Unit) -> Result<(), TranslateError> {
        debug!(stmts = unit.stmts.len(), "writing unit");
        for stmt in &unit.stmts {
            self.write_stmt(stmt)?;
        }
        self.reader.copy_rest(&mut self.out);
        Ok(())
    }

    pub fn write_stmt(&mut self, stmt: &Stmt) -> Result<(), TranslateError> {
        match &stmt.kind {
            StmtKind::Local {
                ty, name, init, ..
            } => {
                self.token(ty.java_name(), &csharp_type_name(ty))?;
                self.token(name.as_str(), &escape_identifier(name.as_str()))?;
                if let Some(init) = *init {
                    self.token("=", "=")?;
                    self.write_expr(init)?;
                }
            }
            StmtKind::Expr(expr) => self.write_expr(*expr)?,
        }
        self.token(";", ";")
    }

    /// Write one expression, starting with the trivia in front of it.
    pub fn write_expr(&mut self, id: ExprId) -> Result<(), TranslateError> {
        ensure_sufficient_stack(|| self.write_expr_inner(id))
    }

    fn write_expr_inner(&mut self, id: ExprId) -> Result<(), TranslateError> {
        let arena = self.arena;
        let expr = arena.get_expr(id);
        match &expr.kind {
            ExprKind::Literal(kind) => self.write_literal(*kind, expr.span),
            ExprKind::Ident(name) => {
                self.token(name.as_str(), &escape_identifier(name.as_str()))
            }
            ExprKind::Paren(inner) => {
                self.token("(", "(")?;
                self.write_expr(*inner)?;
                self.token(")", ")")
            }
            ExprKind::Unary { op, operand } => {
                self.token(op.as_symbol(), op.as_symbol())?;
                self.write_expr(*operand)
            }
            ExprKind::Cast { ty, operand, .. } => {
                self.token("(", "(")?;
                self.token(ty.java_name(), &csharp_type_name(ty))?;
                self.token(")", ")")?;
                self.write_expr(*operand)
            }
            ExprKind::Infix(infix) => self.write_infix(infix, expr.span),
            ExprKind::Conditional {
                cond,
                then_expr,
                else_expr,
            } => {
                self.write_expr(*cond)?;
                self.token("?", "?")?;
                self.write_expr(*then_expr)?;
                self.token(":", ":")?;
                self.write_expr(*else_expr)
            }
            ExprKind::Assign { op, target, value } => {
                let (expected, emitted) = match op {
                    None => ("=".to_owned(), "="),
                    Some(op) => match compound_equivalent(*op) {
                        Some(token) => (format!("{}=", op.as_symbol()), token),
                        None => {
                            return Err(TranslateError::unsupported(
                                ErrorCode::E3004,
                                format!(
                                    "compound assignment `{}=` has no C# equivalent",
                                    op.as_symbol()
                                ),
                                expr.span,
                            ))
                        }
                    },
                };
                self.write_expr(*target)?;
                self.token(&expected, emitted)?;
                self.write_expr(*value)
            }
        }
    }

    fn write_literal(&mut self, kind: LiteralKind, span: Span) -> Result<(), TranslateError> {
        let text = self.reader.text(span);
        if matches!(kind, LiteralKind::Int | LiteralKind::Long) && is_octal(text) {
            return Err(TranslateError::unsupported(
                ErrorCode::E3001,
                format!("octal literal `{text}` would be read as decimal in C#"),
                span,
            ));
        }
        if matches!(kind, LiteralKind::Int | LiteralKind::Long) && sets_sign_bit(text, kind) {
            return Err(TranslateError::unsupported(
                ErrorCode::E3001,
                format!("literal `{text}` is negative in Java but unsigned in C#"),
                span,
            ));
        }
        self.reader.copy_space_and_comments(&mut self.out);
        self.reader.copy_token(&mut self.out)?;
        Ok(())
    }

    /// Copy the trivia up to the next token, verify it reads `expected` and
    /// write `emitted` in its place.
    fn token(&mut self, expected: &str, emitted: &str) -> Result<(), TranslateError> {
        self.reader.copy_space_and_comments(&mut self.out);
        self.reader.match_and_write(expected, emitted, &mut self.out)
    }

    /// Give back the emitter.
    pub fn finish(self) -> E {
        self.out
    }
}

/// `017`, `0_7`, `00L`: a leading zero followed by more digits.
fn is_octal(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() > 1 && bytes[0] == b'0' && (bytes[1].is_ascii_digit() || bytes[1] == b'_')
}

/// Hex or binary literal above the signed maximum of its type, like
/// `0xFFFFFFFF` or `0x8000_0000_0000_0000L`. Java wraps these to negative
/// values; C# types them as `uint`/`ulong`.
fn sets_sign_bit(text: &str, kind: LiteralKind) -> bool {
    let Some(bytes) = text.get(..2) else {
        return false;
    };
    let radix = match bytes {
        "0x" | "0X" => 16,
        "0b" | "0B" => 2,
        _ => return false,
    };
    let digits: String = text[2..]
        .chars()
        .filter(|c| *c != '_' && *c != 'l' && *c != 'L')
        .collect();
    let max = match kind {
        LiteralKind::Long => u128::from(i64::MAX.unsigned_abs()),
        _ => u128::from(i32::MAX.unsigned_abs()),
    };
    !u128::from_str_radix(&digits, radix).is_ok_and(|value| value <= max)
}

#[cfg(test)]
mod tests {
    use jx_ir::LiteralKind;

    use super::{is_octal, sets_sign_bit};

    #[test]
    fn octal_literals() {
        assert!(is_octal("017"));
        assert!(is_octal("0_7"));
        assert!(is_octal("00L"));
        assert!(!is_octal("0"));
        assert!(!is_octal("0L"));
        assert!(!is_octal("0x1F"));
        assert!(!is_octal("10"));
    }

    #[test]
    fn hex_and_binary_sign_bit() {
        assert!(!sets_sign_bit("0x7FFF_FFFF", LiteralKind::Int));
        assert!(sets_sign_bit("0x8000_0000", LiteralKind::Int));
        assert!(sets_sign_bit("0xFFFFFFFF", LiteralKind::Int));
        assert!(sets_sign_bit("0b1000_0000_0000_0000_0000_0000_0000_0000", LiteralKind::Int));
        assert!(!sets_sign_bit("0b1010", LiteralKind::Int));
        assert!(!sets_sign_bit("0xFFFFFFFFL", LiteralKind::Long));
        assert!(!sets_sign_bit("0x7FFFFFFFFFFFFFFFL", LiteralKind::Long));
        assert!(sets_sign_bit("0xFFFFFFFFFFFFFFFFL", LiteralKind::Long));
        assert!(!sets_sign_bit("4294967295L", LiteralKind::Long));
        assert!(!sets_sign_bit("0", LiteralKind::Int));
    }
}
