//! `>>>` rewrite.
//!
//! C# has no unsigned right shift for signed operands, so
//! `left >>> right` becomes `(S)((U)(left) >> right)`, where `S` and `U` are
//! the signed and unsigned types of the left operand's width. The shift
//! count keeps its own type.

use jx_diagnostic::ErrorCode;
use jx_ir::{InfixExpr, Span};
use tracing::trace;

use super::ExprWriter;
use crate::width::{resolve_primitive_width, NotAPrimitive, PrimitiveWidth, WidthQuery};
use crate::{Emitter, TranslateError};

impl<Q: WidthQuery + ?Sized, E: Emitter> ExprWriter<'_, Q, E> {
    /// Nothing is written unless the rewrite is possible.
    pub(super) fn write_unsigned_shift(
        &mut self,
        infix: &InfixExpr,
        span: Span,
    ) -> Result<(), TranslateError> {
        if infix.has_extended_operands() {
            return Err(TranslateError::unsupported(
                ErrorCode::E3003,
                format!(
                    "chained `>>>` with {} operands is not supported; parenthesize each shift",
                    infix.operand_count()
                ),
                span,
            ));
        }
        let width = self.left_width(infix)?;

        let casts = self.casts;
        let pair = casts.pair(width);
        trace!(%width, signed = %pair.signed, unsigned = %pair.unsigned, "rewriting `>>>`");

        self.reader.copy_space_and_comments(&mut self.out);
        self.out
            .emit(&format!("({})(({})(", pair.signed, pair.unsigned));
        self.write_expr(infix.left)?;
        self.out.emit(")");
        self.token(">>>", ">>")?;
        self.write_expr(infix.right)?;
        self.out.emit(")");
        Ok(())
    }

    fn left_width(&self, infix: &InfixExpr) -> Result<PrimitiveWidth, TranslateError> {
        let left_span = self.arena.get_expr(infix.left).span;
        resolve_primitive_width(self.types, infix.left).map_err(|reason| {
            let message = match reason {
                NotAPrimitive::Unresolved => {
                    "cannot rewrite `>>>`: the type of its left operand is unknown".to_owned()
                }
                NotAPrimitive::NoIntegerWidth(ty) => format!(
                    "cannot rewrite `>>>` on a left operand of type `{ty}`; \
                     only byte, short, int and long are supported"
                ),
            };
            TranslateError::unsupported(ErrorCode::E3002, message, left_span)
        })
    }
}
