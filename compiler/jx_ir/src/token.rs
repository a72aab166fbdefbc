//! Token types for the jx lexer.
//!
//! Tokens carry no text. Literal values and identifier spellings are read back
//! from the source through the token span, which keeps `TokenKind` `Copy` and
//! guarantees that whatever the translator copies is byte-for-byte the input.

use std::fmt;

use crate::{InfixOp, PrimitiveType, Span};

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds for the supported Java subset.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals
    /// `42`, `0x2A`, `1_000`
    IntLit,
    /// `42L`
    LongLit,
    /// `1.5f`
    FloatLit,
    /// `1.5`, `2e10`, `3d`
    DoubleLit,
    /// `'a'`, `'\n'`
    CharLit,
    /// `"text"`
    StringLit,
    True,
    False,
    Null,

    Ident,

    // Primitive type keywords
    Byte,
    Short,
    Int,
    Long,
    Char,
    Boolean,
    Float,
    Double,

    // Punctuation
    LParen,
    RParen,
    Semicolon,
    Comma,
    Question,
    Colon,
    /// `=`
    Eq,
    /// `!`
    Bang,
    /// `~`
    Tilde,

    // Infix operators
    Star,
    Slash,
    Percent,
    Plus,
    Minus,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `>>>`
    UShr,
    Lt,
    Gt,
    LtEq,
    GtEq,
    EqEq,
    NotEq,
    Amp,
    Caret,
    Pipe,
    AmpAmp,
    PipePipe,

    // Compound assignment
    StarEq,
    SlashEq,
    PercentEq,
    PlusEq,
    MinusEq,
    ShlEq,
    ShrEq,
    UShrEq,
    AmpEq,
    CaretEq,
    PipeEq,

    /// Lexing error; the lexer reports a diagnostic and keeps going.
    Error,
    /// End of input (zero-width span at the end of the source).
    Eof,
}

impl TokenKind {
    /// Human-readable name used in diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::IntLit => "integer literal",
            Self::LongLit => "long literal",
            Self::FloatLit => "float literal",
            Self::DoubleLit => "double literal",
            Self::CharLit => "char literal",
            Self::StringLit => "string literal",
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
            Self::Ident => "identifier",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Boolean => "boolean",
            Self::Float => "float",
            Self::Double => "double",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Question => "?",
            Self::Colon => ":",
            Self::Eq => "=",
            Self::Bang => "!",
            Self::Tilde => "~",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::UShr => ">>>",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::EqEq => "==",
            Self::NotEq => "!=",
            Self::Amp => "&",
            Self::Caret => "^",
            Self::Pipe => "|",
            Self::AmpAmp => "&&",
            Self::PipePipe => "||",
            Self::StarEq => "*=",
            Self::SlashEq => "/=",
            Self::PercentEq => "%=",
            Self::PlusEq => "+=",
            Self::MinusEq => "-=",
            Self::ShlEq => "<<=",
            Self::ShrEq => ">>=",
            Self::UShrEq => ">>>=",
            Self::AmpEq => "&=",
            Self::CaretEq => "^=",
            Self::PipeEq => "|=",
            Self::Error => "invalid token",
            Self::Eof => "end of file",
        }
    }

    /// The infix operator this token spells, if any.
    pub const fn infix_op(self) -> Option<InfixOp> {
        Some(match self {
            Self::Star => InfixOp::Mul,
            Self::Slash => InfixOp::Div,
            Self::Percent => InfixOp::Rem,
            Self::Plus => InfixOp::Add,
            Self::Minus => InfixOp::Sub,
            Self::Shl => InfixOp::Shl,
            Self::Shr => InfixOp::Shr,
            Self::UShr => InfixOp::UShr,
            Self::Lt => InfixOp::Lt,
            Self::Gt => InfixOp::Gt,
            Self::LtEq => InfixOp::LtEq,
            Self::GtEq => InfixOp::GtEq,
            Self::EqEq => InfixOp::Eq,
            Self::NotEq => InfixOp::NotEq,
            Self::Amp => InfixOp::BitAnd,
            Self::Caret => InfixOp::BitXor,
            Self::Pipe => InfixOp::BitOr,
            Self::AmpAmp => InfixOp::And,
            Self::PipePipe => InfixOp::Or,
            _ => return None,
        })
    }

    /// For compound assignment tokens (`+=`, `>>>=`), the underlying operator.
    pub const fn compound_op(self) -> Option<InfixOp> {
        Some(match self {
            Self::StarEq => InfixOp::Mul,
            Self::SlashEq => InfixOp::Div,
            Self::PercentEq => InfixOp::Rem,
            Self::PlusEq => InfixOp::Add,
            Self::MinusEq => InfixOp::Sub,
            Self::ShlEq => InfixOp::Shl,
            Self::ShrEq => InfixOp::Shr,
            Self::UShrEq => InfixOp::UShr,
            Self::AmpEq => InfixOp::BitAnd,
            Self::CaretEq => InfixOp::BitXor,
            Self::PipeEq => InfixOp::BitOr,
            _ => return None,
        })
    }

    /// The primitive type this keyword names, if any.
    pub const fn primitive_type(self) -> Option<PrimitiveType> {
        Some(match self {
            Self::Byte => PrimitiveType::Byte,
            Self::Short => PrimitiveType::Short,
            Self::Int => PrimitiveType::Int,
            Self::Long => PrimitiveType::Long,
            Self::Char => PrimitiveType::Char,
            Self::Boolean => PrimitiveType::Boolean,
            Self::Float => PrimitiveType::Float,
            Self::Double => PrimitiveType::Double,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Lexer output: tokens in source order, terminated by a single `Eof`.
///
/// Token spans are strictly increasing and never overlap, which is what lets
/// [`TokenList::starting_at`] binary-search by offset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Create a new token list with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        debug_assert!(
            self.tokens
                .last()
                .is_none_or(|prev| prev.span.end <= token.span.start),
            "tokens must be pushed in source order"
        );
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Find the token whose span starts exactly at `offset`.
    pub fn starting_at(&self, offset: u32) -> Option<&Token> {
        self.tokens
            .binary_search_by_key(&offset, |t| t.span.start)
            .ok()
            .map(|i| &self.tokens[i])
    }

    /// Find the first token starting at or after `offset`.
    pub fn next_at_or_after(&self, offset: u32) -> Option<&Token> {
        let i = self.tokens.partition_point(|t| t.span.start < offset);
        self.tokens.get(i)
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(spans: &[(TokenKind, u32, u32)]) -> TokenList {
        let mut tokens = TokenList::new();
        for &(kind, start, end) in spans {
            tokens.push(Token::new(kind, Span::new(start, end)));
        }
        tokens
    }

    #[test]
    fn starting_at_finds_exact_offsets_only() {
        // "a >>> b"
        let tokens = list(&[
            (TokenKind::Ident, 0, 1),
            (TokenKind::UShr, 2, 5),
            (TokenKind::Ident, 6, 7),
            (TokenKind::Eof, 7, 7),
        ]);
        assert_eq!(tokens.starting_at(2).map(|t| t.kind), Some(TokenKind::UShr));
        assert!(tokens.starting_at(1).is_none());
        assert!(tokens.starting_at(3).is_none());
    }

    #[test]
    fn next_at_or_after_skips_gaps() {
        let tokens = list(&[
            (TokenKind::Ident, 0, 1),
            (TokenKind::Plus, 4, 5),
            (TokenKind::Eof, 5, 5),
        ]);
        assert_eq!(tokens.next_at_or_after(1).map(|t| t.span.start), Some(4));
        assert_eq!(tokens.next_at_or_after(4).map(|t| t.span.start), Some(4));
        assert_eq!(
            tokens.next_at_or_after(5).map(|t| t.kind),
            Some(TokenKind::Eof)
        );
    }

    #[test]
    fn operator_tokens_map_to_infix_ops() {
        assert_eq!(TokenKind::UShr.infix_op(), Some(InfixOp::UShr));
        assert_eq!(TokenKind::AmpAmp.infix_op(), Some(InfixOp::And));
        assert_eq!(TokenKind::Eq.infix_op(), None);
        assert_eq!(TokenKind::UShrEq.compound_op(), Some(InfixOp::UShr));
        assert_eq!(TokenKind::UShr.compound_op(), None);
    }

    #[test]
    fn compound_tokens_spell_operator_then_eq() {
        for kind in [
            TokenKind::StarEq,
            TokenKind::PlusEq,
            TokenKind::ShlEq,
            TokenKind::UShrEq,
            TokenKind::PipeEq,
        ] {
            let Some(op) = kind.compound_op() else {
                panic!("{kind:?} is a compound assignment");
            };
            assert_eq!(kind.display_name(), format!("{}=", op.as_symbol()));
        }
    }
}
