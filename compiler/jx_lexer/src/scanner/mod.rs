//! Hand-written scanner producing `(RawTag, len)` pairs.
//!
//! The scanner classifies bytes but resolves nothing: keywords, error
//! reporting and trivia dropping happen in [`crate::lex`]. Operators use
//! longest match, so `>>>=` is one token and `a>>>b` never splits into
//! `>>` `>`.

use crate::cursor::Cursor;

/// Raw token classification.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RawTag {
    // Trivia
    Whitespace,
    LineComment,
    BlockComment,

    Ident,
    Int,
    Long,
    Float,
    Double,
    Char,
    String,

    LParen,
    RParen,
    Semicolon,
    Comma,
    Question,
    Colon,
    Eq,
    Bang,
    Tilde,
    Star,
    Slash,
    Percent,
    Plus,
    Minus,
    Shl,
    Shr,
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

    // Errors
    UnterminatedString,
    UnterminatedChar,
    UnterminatedBlockComment,
    InvalidNumber,
    InvalidChar,

    Eof,
}

impl RawTag {
    /// Whitespace and comments: never become tokens.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            RawTag::Whitespace | RawTag::LineComment | RawTag::BlockComment
        )
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        RawScanner {
            cursor: Cursor::new(source),
        }
    }

    /// Produce the next raw token. Returns `Eof` (len 0) forever once the
    /// input is exhausted.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }
        match self.cursor.current() {
            b' ' | b'\t' | b'\n' | b'\r' | 0x0C => self.whitespace(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'.' if self.cursor.peek().is_ascii_digit() => self.number(start),
            b'"' => self.string(start),
            b'\'' => self.char_literal(start),
            b'/' => self.slash(start),
            b'(' => self.single(start, RawTag::LParen),
            b')' => self.single(start, RawTag::RParen),
            b';' => self.single(start, RawTag::Semicolon),
            b',' => self.single(start, RawTag::Comma),
            b'?' => self.single(start, RawTag::Question),
            b':' => self.single(start, RawTag::Colon),
            b'~' => self.single(start, RawTag::Tilde),
            b'=' => self.with_eq(start, RawTag::Eq, RawTag::EqEq),
            b'!' => self.with_eq(start, RawTag::Bang, RawTag::NotEq),
            b'*' => self.with_eq(start, RawTag::Star, RawTag::StarEq),
            b'%' => self.with_eq(start, RawTag::Percent, RawTag::PercentEq),
            b'+' => self.with_eq(start, RawTag::Plus, RawTag::PlusEq),
            b'-' => self.with_eq(start, RawTag::Minus, RawTag::MinusEq),
            b'^' => self.with_eq(start, RawTag::Caret, RawTag::CaretEq),
            b'&' => self.doubled(start, b'&', RawTag::Amp, RawTag::AmpAmp, RawTag::AmpEq),
            b'|' => self.doubled(start, b'|', RawTag::Pipe, RawTag::PipePipe, RawTag::PipeEq),
            b'<' => self.less(start),
            b'>' => self.greater(start),
            0x80.. if self.cursor.current_char().is_some_and(char::is_alphabetic) => {
                self.identifier(start)
            }
            _ => self.invalid_char(start),
        }
    }

    fn finish(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor
            .eat_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0C));
        self.finish(start, RawTag::Whitespace)
    }

    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.finish(start, tag)
    }

    /// `op` or `op=`.
    fn with_eq(&mut self, start: u32, plain: RawTag, assign: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            return self.finish(start, assign);
        }
        self.finish(start, plain)
    }

    /// `&`, `&&`, `&=` and the `|` family.
    fn doubled(
        &mut self,
        start: u32,
        byte: u8,
        plain: RawTag,
        double: RawTag,
        assign: RawTag,
    ) -> RawToken {
        self.cursor.advance();
        match self.cursor.current() {
            b if b == byte => {
                self.cursor.advance();
                self.finish(start, double)
            }
            b'=' => {
                self.cursor.advance();
                self.finish(start, assign)
            }
            _ => self.finish(start, plain),
        }
    }

    fn less(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        match (self.cursor.current(), self.cursor.peek()) {
            (b'<', b'=') => {
                self.cursor.advance_n(2);
                self.finish(start, RawTag::ShlEq)
            }
            (b'<', _) => {
                self.cursor.advance();
                self.finish(start, RawTag::Shl)
            }
            (b'=', _) => {
                self.cursor.advance();
                self.finish(start, RawTag::LtEq)
            }
            _ => self.finish(start, RawTag::Lt),
        }
    }

    fn greater(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        let tag = match (
            self.cursor.current(),
            self.cursor.peek(),
            self.cursor.peek2(),
        ) {
            (b'>', b'>', b'=') => {
                self.cursor.advance_n(3);
                RawTag::UShrEq
            }
            (b'>', b'>', _) => {
                self.cursor.advance_n(2);
                RawTag::UShr
            }
            (b'>', b'=', _) => {
                self.cursor.advance_n(2);
                RawTag::ShrEq
            }
            (b'>', _, _) => {
                self.cursor.advance();
                RawTag::Shr
            }
            (b'=', _, _) => {
                self.cursor.advance();
                RawTag::GtEq
            }
            _ => RawTag::Gt,
        };
        self.finish(start, tag)
    }

    fn slash(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        match self.cursor.current() {
            b'/' => {
                self.cursor.eat_until_newline_or_eof();
                self.finish(start, RawTag::LineComment)
            }
            b'*' => {
                self.cursor.advance();
                if self.cursor.eat_block_comment_body() {
                    self.finish(start, RawTag::BlockComment)
                } else {
                    self.finish(start, RawTag::UnterminatedBlockComment)
                }
            }
            b'=' => {
                self.cursor.advance();
                self.finish(start, RawTag::SlashEq)
            }
            _ => self.finish(start, RawTag::Slash),
        }
    }

    /// Java letters are Unicode letters; C# accepts the same ones.
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        loop {
            self.cursor.eat_while(is_ident_continue);
            if self.cursor.current() < 0x80
                || !self.cursor.current_char().is_some_and(char::is_alphanumeric)
            {
                break;
            }
            self.cursor.advance_char();
        }
        self.finish(start, RawTag::Ident)
    }

    fn number(&mut self, start: u32) -> RawToken {
        let first = self.cursor.current();

        if first == b'0' && matches!(self.cursor.peek(), b'x' | b'X') {
            return self.hex_number(start);
        }
        if first == b'0' && matches!(self.cursor.peek(), b'b' | b'B') {
            return self.bin_number(start);
        }

        let mut floating = false;
        let mut valid = true;

        if first == b'.' {
            floating = true;
            self.cursor.advance();
        } else {
            valid &= self.eat_digits();
            if self.cursor.current() == b'.' {
                floating = true;
                self.cursor.advance();
            }
        }
        if floating && self.cursor.current().is_ascii_digit() {
            valid &= self.eat_digits();
        }
        if matches!(self.cursor.current(), b'e' | b'E') {
            floating = true;
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            valid &= self.cursor.current().is_ascii_digit() && self.eat_digits();
        }

        let tag = match self.cursor.current() {
            b'l' | b'L' if !floating => {
                self.cursor.advance();
                RawTag::Long
            }
            b'f' | b'F' => {
                self.cursor.advance();
                RawTag::Float
            }
            b'd' | b'D' => {
                self.cursor.advance();
                RawTag::Double
            }
            _ if floating => RawTag::Double,
            _ => RawTag::Int,
        };
        self.number_suffix_check(start, tag, valid)
    }

    fn hex_number(&mut self, start: u32) -> RawToken {
        self.cursor.advance_n(2);
        let valid = self.cursor.current().is_ascii_hexdigit()
            && self.eat_radix_digits(|b| b.is_ascii_hexdigit());
        self.integer_suffix(start, valid)
    }

    fn bin_number(&mut self, start: u32) -> RawToken {
        self.cursor.advance_n(2);
        let valid = matches!(self.cursor.current(), b'0' | b'1')
            && self.eat_radix_digits(|b| b == b'0' || b == b'1');
        self.integer_suffix(start, valid)
    }

    fn integer_suffix(&mut self, start: u32, valid: bool) -> RawToken {
        let tag = if matches!(self.cursor.current(), b'l' | b'L') {
            self.cursor.advance();
            RawTag::Long
        } else {
            RawTag::Int
        };
        self.number_suffix_check(start, tag, valid)
    }

    /// A literal running straight into identifier characters (`12abc`,
    /// `0x1G`) is one invalid number, not a number then an identifier.
    fn number_suffix_check(&mut self, start: u32, tag: RawTag, valid: bool) -> RawToken {
        if is_ident_continue(self.cursor.current()) {
            self.cursor.eat_while(is_ident_continue);
            return self.finish(start, RawTag::InvalidNumber);
        }
        if valid {
            self.finish(start, tag)
        } else {
            self.finish(start, RawTag::InvalidNumber)
        }
    }

    /// Decimal digits with `_` separators. Returns `false` on a trailing `_`.
    fn eat_digits(&mut self) -> bool {
        self.eat_radix_digits(|b| b.is_ascii_digit())
    }

    fn eat_radix_digits(&mut self, is_digit: impl Fn(u8) -> bool) -> bool {
        let mut last = 0;
        while is_digit(self.cursor.current()) || self.cursor.current() == b'_' {
            last = self.cursor.current();
            self.cursor.advance();
        }
        last != b'_'
    }

    fn string(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        loop {
            match self.cursor.skip_to_literal_delim(b'"') {
                b'"' => {
                    self.cursor.advance();
                    return self.finish(start, RawTag::String);
                }
                b'\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_eof() {
                        self.cursor.advance_char();
                    }
                }
                // Newline or end of input.
                _ => return self.finish(start, RawTag::UnterminatedString),
            }
        }
    }

    fn char_literal(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        loop {
            match self.cursor.skip_to_literal_delim(b'\'') {
                b'\'' => {
                    self.cursor.advance();
                    return self.finish(start, RawTag::Char);
                }
                b'\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_eof() {
                        self.cursor.advance_char();
                    }
                }
                _ => return self.finish(start, RawTag::UnterminatedChar),
            }
        }
    }

    fn invalid_char(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.finish(start, RawTag::InvalidChar)
    }
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

#[cfg(test)]
mod tests;
