//! Expression parsing.
//!
//! Precedence, loosest first: assignment, `?:`, then the binary ladder
//! from `||` (level 12) down to `* / %` (level 3), then prefix operators
//! and casts, then primaries. Binary levels come from
//! [`InfixOp::precedence`] so the parser and the operator table cannot
//! disagree.

use jx_ir::{ExprId, ExprKind, InfixExpr, InfixOp, LiteralKind, Name, TokenKind, TypeRef, UnaryOp};
use jx_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, Parser};

/// Loosest binary level (`||`).
const LOWEST_BINARY: u8 = InfixOp::Or.precedence();
/// Tightest binary level (`* / %`).
const HIGHEST_BINARY: u8 = InfixOp::Mul.precedence();

impl Parser<'_> {
    /// Parse a full expression, assignment included.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    fn parse_assignment(&mut self) -> Result<ExprId, ParseError> {
        let target = self.parse_conditional()?;

        let kind = self.cursor.current_kind();
        let op = match kind {
            TokenKind::Eq => None,
            _ => match kind.compound_op() {
                Some(op) => Some(op),
                None => return Ok(target),
            },
        };

        if !self.is_assignable(target) {
            return Err(ParseError::new(
                ParseErrorKind::InvalidAssignmentTarget,
                self.span_of(target),
            ));
        }
        self.cursor.advance();

        // Right associative: `a = b = c` is `a = (b = c)`.
        let value = self.parse_expr()?;
        let span = self.span_of(target).merge(self.span_of(value));
        Ok(self.alloc(ExprKind::Assign { op, target, value }, span))
    }

    /// A variable, possibly parenthesized.
    fn is_assignable(&self, mut id: ExprId) -> bool {
        loop {
            match &self.arena.get_expr(id).kind {
                ExprKind::Ident(_) => return true,
                ExprKind::Paren(inner) => id = *inner,
                _ => return false,
            }
        }
    }

    fn parse_conditional(&mut self) -> Result<ExprId, ParseError> {
        let cond = self.parse_binary(LOWEST_BINARY)?;
        if self.cursor.eat(TokenKind::Question).is_none() {
            return Ok(cond);
        }

        let then_expr = self.parse_expr()?;
        self.cursor.expect(TokenKind::Colon, "`:`")?;
        let else_expr = ensure_sufficient_stack(|| self.parse_conditional())?;

        let span = self.span_of(cond).merge(self.span_of(else_expr));
        Ok(self.alloc(
            ExprKind::Conditional {
                cond,
                then_expr,
                else_expr,
            },
            span,
        ))
    }

    /// One level of the binary ladder. Left associative.
    fn parse_binary(&mut self, level: u8) -> Result<ExprId, ParseError> {
        if level < HIGHEST_BINARY {
            return self.parse_unary();
        }

        let mut left = self.parse_binary(level - 1)?;
        while let Some(op) = self
            .cursor
            .current_kind()
            .infix_op()
            .filter(|op| op.precedence() == level)
        {
            self.cursor.advance();
            let right = self.parse_binary(level - 1)?;
            left = self.combine(op, left, right);
        }
        Ok(left)
    }

    /// Append `right` to `left` when `left` is already a chain of the same
    /// chain-capable operator, otherwise build a new binary node.
    fn combine(&mut self, op: InfixOp, left: ExprId, right: ExprId) -> ExprId {
        let right_span = self.span_of(right);
        if op.is_chainable() {
            let left_expr = self.arena.get_expr_mut(left);
            if let ExprKind::Infix(chain) = &mut left_expr.kind {
                if chain.op == op {
                    chain.extended.push(right);
                    left_expr.span = left_expr.span.merge(right_span);
                    return left;
                }
            }
        }
        let span = self.span_of(left).merge(right_span);
        self.alloc(ExprKind::Infix(InfixExpr::new(op, left, right)), span)
    }

    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_unary_inner())
    }

    fn parse_unary_inner(&mut self) -> Result<ExprId, ParseError> {
        let op = match self.cursor.current_kind() {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Plus => Some(UnaryOp::Plus),
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::Tilde => Some(UnaryOp::BitNot),
            _ => None,
        };
        if let Some(op) = op {
            let op_span = self.cursor.advance().span;
            let operand = self.parse_unary()?;
            let span = op_span.merge(self.span_of(operand));
            return Ok(self.alloc(ExprKind::Unary { op, operand }, span));
        }

        if self.at_primitive_cast() {
            return self.parse_cast();
        }

        self.parse_primary()
    }

    /// `( primitive )`
    fn at_primitive_cast(&self) -> bool {
        self.cursor.check(TokenKind::LParen)
            && self.cursor.peek_kind().primitive_type().is_some()
            && self.cursor.peek_kind_nth(2) == TokenKind::RParen
    }

    fn parse_cast(&mut self) -> Result<ExprId, ParseError> {
        let open = self.cursor.advance().span;
        let ty_tok = self.cursor.advance();
        let ty = match ty_tok.kind.primitive_type() {
            Some(prim) => TypeRef::Primitive(prim),
            None => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedToken {
                        found: ty_tok.kind,
                        expected: "primitive type",
                    },
                    ty_tok.span,
                ))
            }
        };
        self.cursor.expect(TokenKind::RParen, "`)`")?;

        let operand = self.parse_unary()?;
        let span = open.merge(self.span_of(operand));
        Ok(self.alloc(
            ExprKind::Cast {
                ty,
                ty_span: ty_tok.span,
                operand,
            },
            span,
        ))
    }

    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let token = self.cursor.current();
        let kind = match token.kind {
            TokenKind::IntLit => ExprKind::Literal(LiteralKind::Int),
            TokenKind::LongLit => ExprKind::Literal(LiteralKind::Long),
            TokenKind::FloatLit => ExprKind::Literal(LiteralKind::Float),
            TokenKind::DoubleLit => ExprKind::Literal(LiteralKind::Double),
            TokenKind::CharLit => ExprKind::Literal(LiteralKind::Char),
            TokenKind::StringLit => ExprKind::Literal(LiteralKind::String),
            TokenKind::True | TokenKind::False => ExprKind::Literal(LiteralKind::Bool),
            TokenKind::Null => ExprKind::Literal(LiteralKind::Null),
            TokenKind::Ident => ExprKind::Ident(Name::new(self.text(token.span))),
            TokenKind::LParen => return self.parse_paren(),
            found => {
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedExpression { found },
                    token.span,
                ))
            }
        };
        self.cursor.advance();
        Ok(self.alloc(kind, token.span))
    }

    fn parse_paren(&mut self) -> Result<ExprId, ParseError> {
        let open = self.cursor.advance().span;
        let inner = self.parse_expr()?;
        match self.cursor.eat(TokenKind::RParen) {
            Some(close) => Ok(self.alloc(ExprKind::Paren(inner), open.merge(close.span))),
            None => Err(ParseError::new(
                ParseErrorKind::UnclosedDelimiter {
                    open,
                    found: self.cursor.current_kind(),
                },
                self.cursor.current_span(),
            )),
        }
    }
}
