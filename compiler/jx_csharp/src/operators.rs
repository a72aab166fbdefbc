//! Java to C# operator equivalences.
//!
//! Every Java infix operator except `>>>` is spelled identically in C#. The
//! table is still written out operator by operator so that a new
//! [`InfixOp`] variant fails to compile here until someone decides what it
//! becomes.

use jx_ir::{InfixOp, Span};

use crate::TranslateError;

/// The C# token for `op`, or `None` when `op` needs a rewrite (`>>>`).
pub const fn equivalent_token(op: InfixOp) -> Option<&'static str> {
    Some(match op {
        InfixOp::Mul => "*",
        InfixOp::Div => "/",
        InfixOp::Rem => "%",
        InfixOp::Add => "+",
        InfixOp::Sub => "-",
        InfixOp::Shl => "<<",
        InfixOp::Shr => ">>",
        InfixOp::Lt => "<",
        InfixOp::Gt => ">",
        InfixOp::LtEq => "<=",
        InfixOp::GtEq => ">=",
        InfixOp::Eq => "==",
        InfixOp::NotEq => "!=",
        InfixOp::BitAnd => "&",
        InfixOp::BitXor => "^",
        InfixOp::BitOr => "|",
        InfixOp::And => "&&",
        InfixOp::Or => "||",
        InfixOp::UShr => return None,
    })
}

/// The C# compound assignment token for `op=`, or `None` for `>>>=`.
pub const fn compound_equivalent(op: InfixOp) -> Option<&'static str> {
    Some(match op {
        InfixOp::Mul => "*=",
        InfixOp::Div => "/=",
        InfixOp::Rem => "%=",
        InfixOp::Add => "+=",
        InfixOp::Sub => "-=",
        InfixOp::Shl => "<<=",
        InfixOp::Shr => ">>=",
        InfixOp::BitAnd => "&=",
        InfixOp::BitXor => "^=",
        InfixOp::BitOr => "|=",
        InfixOp::UShr
        | InfixOp::Lt
        | InfixOp::Gt
        | InfixOp::LtEq
        | InfixOp::GtEq
        | InfixOp::Eq
        | InfixOp::NotEq
        | InfixOp::And
        | InfixOp::Or => return None,
    })
}

/// Table lookup for an operator that must have a direct equivalent.
pub(crate) fn require_equivalent(op: InfixOp, span: Span) -> Result<&'static str, TranslateError> {
    equivalent_token(op).ok_or_else(|| TranslateError::unmapped_operator(op.as_symbol(), span))
}
