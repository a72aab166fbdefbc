//! The `lex` command: dump the token stream (debugging aid).

use jx_diagnostic::emitter::ColorMode;
use jx_ir::TokenKind;

use super::{read_source, report_diagnostics};

/// Print every token of `path` with its span and text.
pub fn lex_file(path: &str) -> bool {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {msg}");
            return false;
        }
    };

    let output = jx_lexer::lex(&source);
    println!("Tokens for '{}' ({} tokens):", path, output.tokens.len());
    for tok in &output.tokens {
        if tok.kind == TokenKind::Eof {
            println!("  {:?} @ {}", tok.kind, tok.span);
        } else {
            let text = tok.span.slice(&source).unwrap_or("");
            println!("  {:?} @ {} {text:?}", tok.kind, tok.span);
        }
    }

    if output.has_errors() {
        let diagnostics: Vec<_> = output
            .errors
            .iter()
            .map(jx_lexer::LexError::to_diagnostic)
            .collect();
        report_diagnostics(path, &source, &diagnostics, ColorMode::Auto);
        return false;
    }
    true
}
