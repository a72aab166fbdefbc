//! Grammar productions.
//!
//! - `mod.rs`: statements (`Type name = init;`, `expr;`)
//! - `expr.rs`: assignment, conditional, the binary ladder, unary, casts
//!   and primaries

mod expr;

use jx_ir::{Name, Stmt, StmtKind, TokenKind, TypeRef};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        let current = self.cursor.current_kind();

        if let Some(prim) = current.primitive_type() {
            return self.parse_local(TypeRef::Primitive(prim));
        }
        // `String s = ...;` Two identifiers in a row can only be a declaration.
        if current == TokenKind::Ident && self.cursor.peek_kind() == TokenKind::Ident {
            let name = Name::new(self.text(self.cursor.current_span()));
            return self.parse_local(TypeRef::Class(name));
        }

        let start = self.cursor.current_span();
        let expr = self.parse_expr()?;
        let semi = self.cursor.expect(TokenKind::Semicolon, "`;`")?;
        Ok(Stmt {
            kind: StmtKind::Expr(expr),
            span: start.merge(semi.span),
        })
    }

    /// `ty name [= init];` with the cursor on the type token.
    fn parse_local(&mut self, ty: TypeRef) -> Result<Stmt, ParseError> {
        let ty_span = self.cursor.advance().span;

        let Some(name_tok) = self.cursor.eat(TokenKind::Ident) else {
            return Err(ParseError::new(
                ParseErrorKind::ExpectedIdentifier {
                    found: self.cursor.current_kind(),
                },
                self.cursor.current_span(),
            ));
        };
        let name = Name::new(self.text(name_tok.span));

        let init = if self.cursor.eat(TokenKind::Eq).is_some() {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let semi = self.cursor.expect(TokenKind::Semicolon, "`;` or `=`")?;
        Ok(Stmt {
            kind: StmtKind::Local {
                ty,
                ty_span,
                name,
                name_span: name_tok.span,
                init,
            },
            span: ty_span.merge(semi.span),
        })
    }
}
