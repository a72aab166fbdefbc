//! Table-mapped infix operators.

use jx_ir::{InfixExpr, InfixOp, Span};

use super::ExprWriter;
use crate::operators::require_equivalent;
use crate::width::WidthQuery;
use crate::{Emitter, TranslateError};

impl<Q: WidthQuery + ?Sized, E: Emitter> ExprWriter<'_, Q, E> {
    pub(super) fn write_infix(
        &mut self,
        infix: &InfixExpr,
        span: Span,
    ) -> Result<(), TranslateError> {
        match infix.op {
            InfixOp::UShr => self.write_unsigned_shift(infix, span),
            InfixOp::Mul
            | InfixOp::Div
            | InfixOp::Rem
            | InfixOp::Add
            | InfixOp::Sub
            | InfixOp::Shl
            | InfixOp::Shr
            | InfixOp::Lt
            | InfixOp::Gt
            | InfixOp::LtEq
            | InfixOp::GtEq
            | InfixOp::Eq
            | InfixOp::NotEq
            | InfixOp::BitAnd
            | InfixOp::BitXor
            | InfixOp::BitOr
            | InfixOp::And
            | InfixOp::Or => self.write_mapped(infix, span),
        }
    }

    /// `left op right op extended...` with `op` replaced by its table token.
    /// No parentheses are added: C# ranks these operators as Java does.
    fn write_mapped(&mut self, infix: &InfixExpr, span: Span) -> Result<(), TranslateError> {
        let symbol = infix.op.as_symbol();
        let token = require_equivalent(infix.op, span)?;

        self.write_expr(infix.left)?;
        for operand in infix.operands().skip(1) {
            self.token(symbol, token)?;
            self.write_expr(operand)?;
        }
        Ok(())
    }
}
