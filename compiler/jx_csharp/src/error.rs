//! Translation errors.
//!
//! Two kinds, with different meanings for the caller:
//! [`TranslateError::UnsupportedConstruct`] is valid Java this translator
//! deliberately does not handle, while [`TranslateError::InternalConsistency`]
//! means the translator disagrees with its own input and is a bug.

use std::fmt;

use jx_diagnostic::{Diagnostic, ErrorCode};
use jx_ir::Span;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TranslateError {
    UnsupportedConstruct {
        code: ErrorCode,
        message: String,
        span: Span,
    },
    InternalConsistency {
        code: ErrorCode,
        message: String,
        span: Span,
    },
}

impl TranslateError {
    #[cold]
    pub fn unsupported(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        TranslateError::UnsupportedConstruct {
            code,
            message: message.into(),
            span,
        }
    }

    /// The source text at the read position is not the token the writer was
    /// about to replace.
    #[cold]
    pub fn token_mismatch(expected: &str, found: Option<&str>, span: Span) -> Self {
        let message = match found {
            Some(found) => format!("expected source token `{expected}`, found `{found}`"),
            None => format!("expected source token `{expected}`, found no token"),
        };
        TranslateError::InternalConsistency {
            code: ErrorCode::E9001,
            message,
            span,
        }
    }

    #[cold]
    pub fn unmapped_operator(symbol: &str, span: Span) -> Self {
        TranslateError::InternalConsistency {
            code: ErrorCode::E9002,
            message: format!("operator `{symbol}` has no C# equivalent and no rewrite"),
            span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TranslateError::UnsupportedConstruct { code, .. }
            | TranslateError::InternalConsistency { code, .. } => *code,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            TranslateError::UnsupportedConstruct { span, .. }
            | TranslateError::InternalConsistency { span, .. } => *span,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            TranslateError::UnsupportedConstruct { message, .. }
            | TranslateError::InternalConsistency { message, .. } => message,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, TranslateError::InternalConsistency { .. })
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.message())
            .with_label(self.span(), self.label());
        if self.is_internal() {
            diag.with_note("this is a bug in the translator, not in the input")
        } else {
            diag
        }
    }

    fn label(&self) -> &'static str {
        match self.code() {
            ErrorCode::E3002 => "cannot choose an unsigned type for this operand",
            ErrorCode::E3003 => "chained here",
            ErrorCode::E3004 => "compound unsigned shift",
            _ if self.is_internal() => "while translating this",
            _ => "not supported",
        }
    }
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code(), self.message())
    }
}

impl std::error::Error for TranslateError {}
