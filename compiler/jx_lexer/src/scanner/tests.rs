use super::*;
use pretty_assertions::assert_eq;

/// All tokens up to (not including) `Eof`.
fn scan(source: &str) -> Vec<RawToken> {
    let mut scanner = RawScanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.tag == RawTag::Eof {
            break;
        }
        tokens.push(tok);
    }
    tokens
}

/// Non-trivia tags only.
fn tags(source: &str) -> Vec<RawTag> {
    scan(source)
        .iter()
        .map(|t| t.tag)
        .filter(|t| !t.is_trivia())
        .collect()
}

#[test]
fn lengths_cover_the_whole_source() {
    let source = "int x = a >>> 3; // done\n/* tail */";
    let total: u32 = scan(source).iter().map(|t| t.len).sum();
    assert_eq!(total as usize, source.len());
}

#[test]
fn shift_operators_use_longest_match() {
    assert_eq!(tags("a >>> b"), vec![RawTag::Ident, RawTag::UShr, RawTag::Ident]);
    assert_eq!(tags("a>>>b"), vec![RawTag::Ident, RawTag::UShr, RawTag::Ident]);
    assert_eq!(tags("a >>>= b"), vec![RawTag::Ident, RawTag::UShrEq, RawTag::Ident]);
    assert_eq!(tags("a >>= b"), vec![RawTag::Ident, RawTag::ShrEq, RawTag::Ident]);
    assert_eq!(tags("a >> b"), vec![RawTag::Ident, RawTag::Shr, RawTag::Ident]);
    assert_eq!(tags("a >= b"), vec![RawTag::Ident, RawTag::GtEq, RawTag::Ident]);
    assert_eq!(tags("a > b"), vec![RawTag::Ident, RawTag::Gt, RawTag::Ident]);
    assert_eq!(tags("a <<= b"), vec![RawTag::Ident, RawTag::ShlEq, RawTag::Ident]);
    assert_eq!(tags("a<<b<=c<d"), vec![
        RawTag::Ident,
        RawTag::Shl,
        RawTag::Ident,
        RawTag::LtEq,
        RawTag::Ident,
        RawTag::Lt,
        RawTag::Ident,
    ]);
}

#[test]
fn logical_and_bitwise_operators() {
    assert_eq!(
        tags("& && &= | || |= ^ ^= ! != == ="),
        vec![
            RawTag::Amp,
            RawTag::AmpAmp,
            RawTag::AmpEq,
            RawTag::Pipe,
            RawTag::PipePipe,
            RawTag::PipeEq,
            RawTag::Caret,
            RawTag::CaretEq,
            RawTag::Bang,
            RawTag::NotEq,
            RawTag::EqEq,
            RawTag::Eq,
        ]
    );
}

#[test]
fn numbers() {
    assert_eq!(tags("42"), vec![RawTag::Int]);
    assert_eq!(tags("1_000"), vec![RawTag::Int]);
    assert_eq!(tags("0x7FFF_FFFF"), vec![RawTag::Int]);
    assert_eq!(tags("0b1010"), vec![RawTag::Int]);
    assert_eq!(tags("42L"), vec![RawTag::Long]);
    assert_eq!(tags("0xFFl"), vec![RawTag::Long]);
    assert_eq!(tags("1.5"), vec![RawTag::Double]);
    assert_eq!(tags(".5"), vec![RawTag::Double]);
    assert_eq!(tags("1."), vec![RawTag::Double]);
    assert_eq!(tags("2e10"), vec![RawTag::Double]);
    assert_eq!(tags("1.5e-3"), vec![RawTag::Double]);
    assert_eq!(tags("3d"), vec![RawTag::Double]);
    assert_eq!(tags("1.5f"), vec![RawTag::Float]);
}

#[test]
fn invalid_numbers() {
    assert_eq!(tags("12abc"), vec![RawTag::InvalidNumber]);
    assert_eq!(tags("0x"), vec![RawTag::InvalidNumber]);
    assert_eq!(tags("1_"), vec![RawTag::InvalidNumber]);
    assert_eq!(tags("1e"), vec![RawTag::InvalidNumber]);
    assert_eq!(tags("1.5L"), vec![RawTag::InvalidNumber]);
}

#[test]
fn comments_are_trivia() {
    let tokens = scan("a /* x */ // y\nb");
    let trivia: Vec<RawTag> = tokens
        .iter()
        .map(|t| t.tag)
        .filter(|t| t.is_trivia())
        .collect();
    assert_eq!(
        trivia,
        vec![
            RawTag::Whitespace,
            RawTag::BlockComment,
            RawTag::Whitespace,
            RawTag::LineComment,
            RawTag::Whitespace,
        ]
    );
    assert_eq!(tags("a /* x */ b"), vec![RawTag::Ident, RawTag::Ident]);
}

#[test]
fn slash_forms() {
    assert_eq!(tags("a / b /= c"), vec![
        RawTag::Ident,
        RawTag::Slash,
        RawTag::Ident,
        RawTag::SlashEq,
        RawTag::Ident,
    ]);
}

#[test]
fn unterminated_block_comment_runs_to_end() {
    let tokens = scan("a /* open");
    assert_eq!(tokens.last().map(|t| (t.tag, t.len)), Some((RawTag::UnterminatedBlockComment, 7)));
}

#[test]
fn strings_and_chars() {
    assert_eq!(tags(r#""a\"b""#), vec![RawTag::String]);
    assert_eq!(tags(r"'\''"), vec![RawTag::Char]);
    assert_eq!(tags("'x'"), vec![RawTag::Char]);
    assert_eq!(tags("\"open\nx"), vec![RawTag::UnterminatedString, RawTag::Ident]);
    assert_eq!(tags("'x"), vec![RawTag::UnterminatedChar]);
}

#[test]
fn identifiers_allow_dollar_and_underscore() {
    assert_eq!(tags("$x _y z9"), vec![RawTag::Ident, RawTag::Ident, RawTag::Ident]);
}

#[test]
fn invalid_characters_consume_whole_utf8_char() {
    let tokens = scan("#€");
    assert_eq!(
        tokens.iter().map(|t| (t.tag, t.len)).collect::<Vec<_>>(),
        vec![(RawTag::InvalidChar, 1), (RawTag::InvalidChar, 3)]
    );
}

#[test]
fn identifiers_accept_unicode_letters() {
    let tokens = scan("é λx2 caféNoir");
    assert_eq!(
        tokens
            .iter()
            .map(|t| (t.tag, t.len))
            .filter(|(tag, _)| !tag.is_trivia())
            .collect::<Vec<_>>(),
        vec![(RawTag::Ident, 2), (RawTag::Ident, 4), (RawTag::Ident, 9)]
    );
}

#[test]
fn eof_repeats() {
    let mut scanner = RawScanner::new("");
    assert_eq!(scanner.next_token().tag, RawTag::Eof);
    assert_eq!(scanner.next_token().tag, RawTag::Eof);
}
