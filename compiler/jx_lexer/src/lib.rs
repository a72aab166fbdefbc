//! Lexer for the Java expression subset.
//!
//! Produces a [`TokenList`] with no trivia tokens: whitespace and comments
//! live in the gaps between token spans, which is where the C# writer copies
//! them from. Errors become `Error` tokens plus a [`LexError`]; lexing always
//! runs to the end of the input.

mod cursor;
mod keywords;
mod lex_error;
mod scanner;

use jx_ir::{Span, Token, TokenKind, TokenList};
use tracing::debug;

pub use lex_error::{LexError, LexErrorKind};

use scanner::{RawScanner, RawTag};

/// Tokens and the errors found while producing them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex `source` into tokens terminated by a single `Eof`.
pub fn lex(source: &str) -> LexOutput {
    let source_len = u32::try_from(source.len())
        .unwrap_or_else(|_| panic!("source file exceeds {} bytes", u32::MAX));

    let mut output = LexOutput {
        tokens: TokenList::with_capacity(source.len() / 3 + 1),
        errors: Vec::new(),
    };
    let mut scanner = RawScanner::new(source);
    let mut start = 0u32;

    loop {
        let raw = scanner.next_token();
        let span = Span::new(start, start + raw.len);
        start = span.end;

        if raw.tag == RawTag::Eof {
            break;
        }
        if raw.tag.is_trivia() {
            continue;
        }

        let kind = cook(raw.tag, span, source, &mut output.errors);
        output.tokens.push(Token::new(kind, span));
    }

    output
        .tokens
        .push(Token::new(TokenKind::Eof, Span::point(source_len)));

    debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexed source"
    );
    output
}

/// Map a non-trivia raw tag to its token kind, recording errors.
fn cook(tag: RawTag, span: Span, source: &str, errors: &mut Vec<LexError>) -> TokenKind {
    let error = |errors: &mut Vec<LexError>, kind| {
        errors.push(LexError::new(span, kind));
        TokenKind::Error
    };

    match tag {
        RawTag::Ident => span
            .slice(source)
            .and_then(keywords::lookup)
            .unwrap_or(TokenKind::Ident),
        RawTag::Int => TokenKind::IntLit,
        RawTag::Long => TokenKind::LongLit,
        RawTag::Float => TokenKind::FloatLit,
        RawTag::Double => TokenKind::DoubleLit,
        RawTag::Char => TokenKind::CharLit,
        RawTag::String => TokenKind::StringLit,

        RawTag::LParen => TokenKind::LParen,
        RawTag::RParen => TokenKind::RParen,
        RawTag::Semicolon => TokenKind::Semicolon,
        RawTag::Comma => TokenKind::Comma,
        RawTag::Question => TokenKind::Question,
        RawTag::Colon => TokenKind::Colon,
        RawTag::Eq => TokenKind::Eq,
        RawTag::Bang => TokenKind::Bang,
        RawTag::Tilde => TokenKind::Tilde,
        RawTag::Star => TokenKind::Star,
        RawTag::Slash => TokenKind::Slash,
        RawTag::Percent => TokenKind::Percent,
        RawTag::Plus => TokenKind::Plus,
        RawTag::Minus => TokenKind::Minus,
        RawTag::Shl => TokenKind::Shl,
        RawTag::Shr => TokenKind::Shr,
        RawTag::UShr => TokenKind::UShr,
        RawTag::Lt => TokenKind::Lt,
        RawTag::Gt => TokenKind::Gt,
        RawTag::LtEq => TokenKind::LtEq,
        RawTag::GtEq => TokenKind::GtEq,
        RawTag::EqEq => TokenKind::EqEq,
        RawTag::NotEq => TokenKind::NotEq,
        RawTag::Amp => TokenKind::Amp,
        RawTag::Caret => TokenKind::Caret,
        RawTag::Pipe => TokenKind::Pipe,
        RawTag::AmpAmp => TokenKind::AmpAmp,
        RawTag::PipePipe => TokenKind::PipePipe,
        RawTag::StarEq => TokenKind::StarEq,
        RawTag::SlashEq => TokenKind::SlashEq,
        RawTag::PercentEq => TokenKind::PercentEq,
        RawTag::PlusEq => TokenKind::PlusEq,
        RawTag::MinusEq => TokenKind::MinusEq,
        RawTag::ShlEq => TokenKind::ShlEq,
        RawTag::ShrEq => TokenKind::ShrEq,
        RawTag::UShrEq => TokenKind::UShrEq,
        RawTag::AmpEq => TokenKind::AmpEq,
        RawTag::CaretEq => TokenKind::CaretEq,
        RawTag::PipeEq => TokenKind::PipeEq,

        RawTag::UnterminatedString => error(errors, LexErrorKind::UnterminatedString),
        RawTag::UnterminatedChar => error(errors, LexErrorKind::UnterminatedChar),
        RawTag::UnterminatedBlockComment => {
            error(errors, LexErrorKind::UnterminatedBlockComment)
        }
        RawTag::InvalidNumber => error(errors, LexErrorKind::InvalidNumber),
        RawTag::InvalidChar => {
            let found = source
                .get(span.start as usize..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            error(errors, LexErrorKind::InvalidCharacter { found })
        }

        RawTag::Whitespace | RawTag::LineComment | RawTag::BlockComment | RawTag::Eof => {
            unreachable!("trivia and Eof are filtered before cooking")
        }
    }
}
