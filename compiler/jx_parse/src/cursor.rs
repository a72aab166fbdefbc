//! Token cursor for navigating the token stream.

use jx_ir::{Span, Token, TokenKind};

use crate::{ParseError, ParseErrorKind};

/// Position in a token slice. Reads past the end yield the `Eof` token.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    eof: Token,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token], source_len: u32) -> Self {
        let eof = tokens
            .last()
            .copied()
            .filter(|t| t.kind == TokenKind::Eof)
            .unwrap_or_else(|| Token::new(TokenKind::Eof, Span::point(source_len)));
        Cursor {
            tokens,
            eof,
            pos: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.tokens.get(self.pos).copied().unwrap_or(self.eof)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Kind of the token after the current one.
    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek_kind_nth(1)
    }

    /// Kind of the token `n` positions ahead (`n == 0` is the current token).
    pub fn peek_kind_nth(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consume the current token and return it. Never moves past `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume `kind` or fail with an unexpected-token error.
    pub fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, ParseError> {
        self.eat(kind).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    found: self.current_kind(),
                    expected,
                },
                self.current_span(),
            )
        })
    }
}
