//! Byte cursor over Java source text.
//!
//! Reads past the end of the input return `0`, which no scanner predicate
//! accepts, so loops like [`Cursor::eat_while`] terminate at end of input
//! without separate bounds checks. A `0` byte inside the source is told apart
//! from end of input with [`Cursor::is_eof`].

/// Returns the earliest of two optional positions.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Forward-only cursor over source bytes. `Copy` for cheap snapshots.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0.
    ///
    /// Sources must fit in a `u32` offset; the caller checks this once.
    pub fn new(source: &'a str) -> Self {
        Cursor {
            bytes: source.as_bytes(),
            pos: 0,
        }
    }

    #[inline]
    fn byte_at(&self, offset: u32) -> u8 {
        self.bytes.get(offset as usize).copied().unwrap_or(0)
    }

    /// Byte at the current position, `0` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one past the current position.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Byte two past the current position.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.bytes.len()
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Advance while `pred` holds for the current byte. `pred(0)` must be false.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Width in bytes of the UTF-8 character whose leading byte is `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// The whole character at the current position, `None` at end of input.
    pub fn current_char(&self) -> Option<char> {
        let start = self.pos as usize;
        let width = Self::utf8_char_width(self.current()) as usize;
        let bytes = self.bytes.get(start..start + width)?;
        std::str::from_utf8(bytes).ok()?.chars().next()
    }

    /// Advance past one whole UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    fn remaining(&self) -> &'a [u8] {
        self.bytes.get(self.pos as usize..).unwrap_or(&[])
    }

    /// Move to the next `\n` (not consumed) or to end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by the source length, which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.remaining()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.bytes.len() as u32,
        }
    }

    /// Move past the next `*/`. Returns `false` (cursor at end of input) if
    /// the comment never closes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by the source length, which fits in u32"
    )]
    pub fn eat_block_comment_body(&mut self) -> bool {
        match memchr::memmem::find(self.remaining(), b"*/") {
            Some(offset) => {
                self.pos += offset as u32 + 2;
                true
            }
            None => {
                self.pos = self.bytes.len() as u32;
                false
            }
        }
    }

    /// Skip ordinary literal content up to the next `quote`, `\`, `\n` or
    /// `\r` and return that byte, or `0` at end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by the source length, which fits in u32"
    )]
    pub fn skip_to_literal_delim(&mut self, quote: u8) -> u8 {
        let remaining = self.remaining();
        let primary = memchr::memchr3(quote, b'\\', b'\n', remaining);
        let cr = memchr::memchr(b'\r', remaining);
        match earliest_of(primary, cr) {
            Some(offset) => {
                self.pos += offset as u32;
                self.current()
            }
            None => {
                self.pos = self.bytes.len() as u32;
                0
            }
        }
    }
}

#[cfg(test)]
mod tests;
