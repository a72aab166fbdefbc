//! Parse error types.

use jx_diagnostic::{Diagnostic, ErrorCode};
use jx_ir::{Span, TokenKind};

/// What went wrong while parsing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ParseErrorKind {
    /// A specific token was required.
    UnexpectedToken {
        found: TokenKind,
        expected: &'static str,
    },
    /// An expression was required.
    ExpectedExpression { found: TokenKind },
    /// `(` without its `)`.
    UnclosedDelimiter { open: Span, found: TokenKind },
    /// A variable name was required after a type.
    ExpectedIdentifier { found: TokenKind },
    /// The left side of `=` or `op=` is not a variable.
    InvalidAssignmentTarget,
}

impl ParseErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnexpectedToken { .. } => ErrorCode::E1001,
            Self::ExpectedExpression { .. } => ErrorCode::E1002,
            Self::UnclosedDelimiter { .. } => ErrorCode::E1003,
            Self::ExpectedIdentifier { .. } => ErrorCode::E1004,
            Self::InvalidAssignmentTarget => ErrorCode::E1005,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::UnexpectedToken { found, expected } => {
                format!("expected {expected}, found `{}`", found.display_name())
            }
            Self::ExpectedExpression { found } => {
                format!("expected expression, found `{}`", found.display_name())
            }
            Self::UnclosedDelimiter { found, .. } => {
                format!("unclosed `(`; expected `)`, found `{}`", found.display_name())
            }
            Self::ExpectedIdentifier { found } => {
                format!("expected variable name, found `{}`", found.display_name())
            }
            Self::InvalidAssignmentTarget => "invalid left-hand side of assignment".to_string(),
        }
    }
}

/// A parse error with its location.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.error_code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.message())
            .with_label(self.span, "here");
        match &self.kind {
            ParseErrorKind::UnclosedDelimiter { open, .. } => {
                diag.with_secondary_label(*open, "unclosed `(` opened here")
            }
            ParseErrorKind::InvalidAssignmentTarget => {
                diag.with_note("only a variable can be assigned to")
            }
            _ => diag,
        }
    }
}
