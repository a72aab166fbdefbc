//! Property-based tests for the C# writer.
//!
//! Expressions built only from operators that C# spells like Java must come
//! out byte-for-byte identical, whatever whitespace and comments sit between
//! their tokens.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use jx_csharp::{translate_unit, TranslateOptions};
use proptest::prelude::*;

const PRELUDE: &str = "int a = 1; int b = 2; int c = 3;\n";

fn operand_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("a".to_owned()),
        Just("b".to_owned()),
        Just("c".to_owned()),
        (1u32..1000).prop_map(|n| n.to_string()),
        Just("0x1F".to_owned()),
        Just("1_000".to_owned()),
    ]
}

fn operator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["*", "/", "%", "+", "-", "<<", ">>", "&", "^", "|"])
}

/// Trivia between two tokens. Comments start with a space so they never
/// glue onto a preceding `/` or `*`.
fn trivia_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "", " ", "  ", "\t", "\n", "\r\n  ", " /* c */ ", " /**/", " // eol\n",
    ])
}

/// `operand (trivia op trivia operand)*`, optionally parenthesized in places.
fn expr_strategy() -> impl Strategy<Value = String> {
    let leaf = operand_strategy();
    leaf.prop_recursive(3, 24, 6, |inner| {
        (
            inner.clone(),
            prop::collection::vec(
                (trivia_strategy(), operator_strategy(), trivia_strategy(), inner),
                1..5,
            ),
            any::<bool>(),
        )
            .prop_map(|(first, rest, paren)| {
                let mut out = first;
                for (before, op, after, operand) in rest {
                    out.push_str(before);
                    out.push_str(op);
                    out.push_str(after);
                    out.push_str(&operand);
                }
                if paren {
                    format!("({})", out)
                } else {
                    out
                }
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn table_operators_round_trip(
        expr in expr_strategy(),
        lead in trivia_strategy(),
        tail in trivia_strategy(),
    ) {
        let source = format!("{PRELUDE}int r ={lead}{expr}{tail};\n");
        let output = translate_unit(&source, &TranslateOptions::default());
        prop_assert_eq!(output, Ok(source));
    }
}
