//! Lexer errors.

use jx_diagnostic::{Diagnostic, ErrorCode};
use jx_ir::Span;

/// A lexer error: where and what.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Missing closing `"`.
    UnterminatedString,
    /// Missing closing `'`.
    UnterminatedChar,
    /// `/*` without `*/`.
    UnterminatedBlockComment,
    /// Malformed numeric literal (`0x`, `1_`, `1e`, `12abc`).
    InvalidNumber,
    /// A character that starts no token.
    InvalidCharacter { found: char },
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        LexError { span, kind }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::InvalidCharacter { .. } => ErrorCode::E0002,
            LexErrorKind::InvalidNumber => ErrorCode::E0003,
            LexErrorKind::UnterminatedChar => ErrorCode::E0004,
            LexErrorKind::UnterminatedBlockComment => ErrorCode::E0005,
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            LexErrorKind::UnterminatedString => "unterminated string literal".to_string(),
            LexErrorKind::UnterminatedChar => "unterminated character literal".to_string(),
            LexErrorKind::UnterminatedBlockComment => "unterminated block comment".to_string(),
            LexErrorKind::InvalidNumber => "invalid numeric literal".to_string(),
            LexErrorKind::InvalidCharacter { found } => {
                format!("unexpected character `{}`", found.escape_default())
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.message())
            .with_label(self.span, "here");
        match self.kind {
            LexErrorKind::UnterminatedString => {
                diag.with_suggestion("add a closing `\"` before the end of the line")
            }
            LexErrorKind::UnterminatedBlockComment => {
                diag.with_note("block comments run until the first `*/`")
            }
            _ => diag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_kind() {
        let err = LexError::new(Span::new(0, 3), LexErrorKind::InvalidNumber);
        assert_eq!(err.code(), ErrorCode::E0003);
        let diag = err.to_diagnostic();
        assert_eq!(diag.code, ErrorCode::E0003);
        assert_eq!(diag.primary_span(), Some(Span::new(0, 3)));
    }

    #[test]
    fn invalid_character_message_escapes() {
        let err = LexError::new(Span::new(0, 1), LexErrorKind::InvalidCharacter { found: '\u{7}' });
        assert_eq!(err.message(), "unexpected character `\\u{7}`");
    }
}
