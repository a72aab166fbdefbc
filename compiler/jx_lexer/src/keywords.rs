//! Keyword resolution.
//!
//! Only the words the translator gives meaning to are keywords. Other Java
//! reserved words lex as identifiers and are rejected later if they matter.

use jx_ir::TokenKind;

/// Look up a keyword by spelling.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    // All keywords are 3-7 ASCII lowercase letters.
    if !(3..=7).contains(&text.len()) {
        return None;
    }
    match text {
        "byte" => Some(TokenKind::Byte),
        "short" => Some(TokenKind::Short),
        "int" => Some(TokenKind::Int),
        "long" => Some(TokenKind::Long),
        "char" => Some(TokenKind::Char),
        "boolean" => Some(TokenKind::Boolean),
        "float" => Some(TokenKind::Float),
        "double" => Some(TokenKind::Double),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        "null" => Some(TokenKind::Null),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_keywords() {
        assert_eq!(lookup("int"), Some(TokenKind::Int));
        assert_eq!(lookup("boolean"), Some(TokenKind::Boolean));
        assert_eq!(lookup("null"), Some(TokenKind::Null));
    }

    #[test]
    fn non_keywords() {
        assert_eq!(lookup("Integer"), None);
        assert_eq!(lookup("in"), None);
        assert_eq!(lookup("String"), None);
        assert_eq!(lookup("booleans"), None);
    }
}
