//! Error codes for all translator diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase.

use std::fmt;

/// Error codes for all translator diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Type errors
/// - E3xxx: Translation errors (unsupported constructs)
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Invalid number literal
    E0003,
    /// Unterminated character literal
    E0004,
    /// Unterminated block comment
    E0005,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Invalid assignment target
    E1005,

    // Type Errors (E2xxx)
    /// Unknown identifier
    E2003,
    /// Duplicate local variable
    E2006,
    /// Operator not applicable to operand types
    E2020,

    // Translation Errors (E3xxx)
    /// Unsupported construct
    E3001,
    /// Unsigned shift of a non-integer or unresolved operand
    E3002,
    /// Chained unsigned shift (`a >>> b >>> c`)
    E3003,
    /// Compound unsigned shift assignment (`a >>>= b`)
    E3004,

    // Internal Errors (E9xxx)
    /// Source token does not match the token the translator expected
    E9001,
    /// Operator with neither a direct equivalent nor a rewrite
    E9002,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E2003,
        ErrorCode::E2006,
        ErrorCode::E2020,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        ErrorCode::E3004,
        ErrorCode::E9001,
        ErrorCode::E9002,
    ];

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2020 => "E2020",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// Internal errors point at a translator defect, never at the input.
    pub fn is_internal(&self) -> bool {
        self.as_str().starts_with("E9")
    }

    /// Parse an error code from a string (e.g. for `--explain`).
    pub fn from_str_opt(code: &str) -> Option<ErrorCode> {
        let upper = code.to_ascii_uppercase();
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == upper)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_codes_unique() {
        let mut codes: Vec<_> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ErrorCode::ALL.len());
    }

    #[test]
    fn test_internal_classification() {
        assert!(ErrorCode::E9001.is_internal());
        assert!(ErrorCode::E9002.is_internal());
        assert!(!ErrorCode::E3001.is_internal());
    }

    #[test]
    fn test_from_str_opt() {
        assert_eq!(ErrorCode::from_str_opt("e3003"), Some(ErrorCode::E3003));
        assert_eq!(ErrorCode::from_str_opt("E7777"), None);
    }
}
