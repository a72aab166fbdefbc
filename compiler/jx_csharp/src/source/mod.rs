//! Forward-only reader over the original source.
//!
//! The writer never re-lexes. Everything it outputs is either a token it
//! verified at the read position or a byte range copied from between two
//! tokens, so whitespace and comments survive untouched.

use jx_ir::{Span, Token, TokenKind, TokenList};
use tracing::trace;

use crate::{Emitter, TranslateError};

pub struct SourceReader<'a> {
    source: &'a str,
    tokens: &'a TokenList,
    /// Byte offset of the next unread byte. Only moves forward.
    pos: u32,
}

impl<'a> SourceReader<'a> {
    pub fn new(source: &'a str, tokens: &'a TokenList) -> Self {
        SourceReader {
            source,
            tokens,
            pos: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> u32 {
        self.pos
    }

    /// The token starting exactly at the read position.
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens
            .starting_at(self.pos)
            .filter(|t| t.kind != TokenKind::Eof)
    }

    /// Source text of `span`.
    pub fn text(&self, span: Span) -> &'a str {
        span.slice(self.source).unwrap_or("")
    }

    fn copy_to(&mut self, end: u32, out: &mut impl Emitter) {
        if end > self.pos {
            out.emit(self.text(Span::new(self.pos, end)));
            self.pos = end;
        }
    }

    /// Copy the trivia between the read position and the next token.
    ///
    /// A no-op when the read position is already at a token.
    pub fn copy_space_and_comments(&mut self, out: &mut impl Emitter) {
        let end = match self.tokens.next_at_or_after(self.pos) {
            Some(token) => token.span.start,
            None => self.source_len(),
        };
        self.copy_to(end, out);
    }

    /// Copy the token at the read position verbatim.
    pub fn copy_token(&mut self, out: &mut impl Emitter) -> Result<&'a str, TranslateError> {
        let Some(token) = self.current() else {
            return Err(TranslateError::token_mismatch(
                "<any token>",
                None,
                Span::point(self.pos),
            ));
        };
        let text = self.text(token.span);
        self.copy_to(token.span.end, out);
        Ok(text)
    }

    /// Check that the token at the read position reads `expected`, then
    /// emit `emitted` in its place.
    pub fn match_and_write(
        &mut self,
        expected: &str,
        emitted: &str,
        out: &mut impl Emitter,
    ) -> Result<(), TranslateError> {
        let Some(token) = self.current() else {
            return Err(TranslateError::token_mismatch(
                expected,
                None,
                Span::point(self.pos),
            ));
        };
        let found = self.text(token.span);
        if found != expected {
            return Err(TranslateError::token_mismatch(
                expected,
                Some(found),
                token.span,
            ));
        }
        trace!(offset = self.pos, expected, emitted, "token");
        out.emit(emitted);
        self.pos = token.span.end;
        Ok(())
    }

    /// Copy everything after the read position (trailing trivia).
    pub fn copy_rest(&mut self, out: &mut impl Emitter) {
        let end = self.source_len();
        self.copy_to(end, out);
    }

    fn source_len(&self) -> u32 {
        u32::try_from(self.source.len()).unwrap_or(u32::MAX)
    }
}
