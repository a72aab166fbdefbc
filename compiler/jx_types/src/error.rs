//! Type errors.

use jx_diagnostic::{Diagnostic, ErrorCode};
use jx_ir::{Name, Span, TypeRef};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeErrorKind {
    /// A name used before (or without) its declaration.
    UnknownIdentifier { name: Name },
    /// A local declared twice.
    DuplicateLocal { name: Name, previous: Span },
    /// Binary operator applied to operand types Java rejects.
    BadOperands {
        op: &'static str,
        left: TypeRef,
        right: TypeRef,
    },
    /// Unary operator applied to an operand type Java rejects.
    BadOperand { op: &'static str, operand: TypeRef },
    /// A cast between types with no conversion.
    BadCast { from: TypeRef, to: TypeRef },
    /// Condition of `?:` is not `boolean`.
    NonBooleanCondition { found: TypeRef },
    /// Branches of `?:` have no common type.
    IncompatibleBranches { then_ty: TypeRef, else_ty: TypeRef },
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeError {
    pub kind: TypeErrorKind,
    pub span: Span,
}

impl TypeError {
    #[cold]
    pub fn new(kind: TypeErrorKind, span: Span) -> Self {
        TypeError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            TypeErrorKind::UnknownIdentifier { .. } => ErrorCode::E2003,
            TypeErrorKind::DuplicateLocal { .. } => ErrorCode::E2006,
            TypeErrorKind::BadOperands { .. }
            | TypeErrorKind::BadOperand { .. }
            | TypeErrorKind::BadCast { .. }
            | TypeErrorKind::NonBooleanCondition { .. }
            | TypeErrorKind::IncompatibleBranches { .. } => ErrorCode::E2020,
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            TypeErrorKind::UnknownIdentifier { name } => {
                format!("cannot find variable `{name}`")
            }
            TypeErrorKind::DuplicateLocal { name, .. } => {
                format!("variable `{name}` is already defined")
            }
            TypeErrorKind::BadOperands { op, left, right } => {
                format!("bad operand types for `{op}`: `{left}` and `{right}`")
            }
            TypeErrorKind::BadOperand { op, operand } => {
                format!("bad operand type `{operand}` for unary `{op}`")
            }
            TypeErrorKind::BadCast { from, to } => {
                format!("cannot cast `{from}` to `{to}`")
            }
            TypeErrorKind::NonBooleanCondition { found } => {
                format!("condition has type `{found}`, expected `boolean`")
            }
            TypeErrorKind::IncompatibleBranches { then_ty, else_ty } => {
                format!("incompatible branch types `{then_ty}` and `{else_ty}`")
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.message())
            .with_label(self.span, "here");
        match &self.kind {
            TypeErrorKind::DuplicateLocal { previous, .. } => {
                diag.with_secondary_label(*previous, "first declared here")
            }
            TypeErrorKind::UnknownIdentifier { .. } => {
                diag.with_note("locals must be declared before they are used")
            }
            _ => diag,
        }
    }
}
