//! Java to C# translation of infix expressions.
//!
//! Most Java operators are spelled the same in C# and are copied through
//! with the source formatting intact. The exception is `>>>`, which C# lacks
//! for signed operands; it is rewritten through unsigned casts chosen from
//! the static type of the left operand.
//!
//! # Pipeline
//!
//! [`translate_unit`] runs lex, parse and type resolution, stops at the
//! first phase that reports errors, then hands the typed tree to the
//! [`ExprWriter`], which fails the whole unit on the first construct it
//! cannot translate.

mod emitter;
mod error;
pub mod operators;
mod options;
mod source;
pub mod width;
mod writer;

use jx_diagnostic::{Diagnostic, ErrorCode};
use jx_ir::{ExprArena, TokenList, Unit};
use jx_types::ExprTypes;
use tracing::debug;

pub use emitter::{Emitter, StringEmitter};
pub use error::TranslateError;
pub use options::{parse_cast_override, TranslateOptions};
pub use source::SourceReader;
pub use writer::{csharp_type_name, escape_identifier, ExprWriter};

/// A unit that lexed, parsed and type-checked cleanly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    pub tokens: TokenList,
    pub unit: Unit,
    pub arena: ExprArena,
    pub types: ExprTypes,
}

/// Diagnostics of a unit that could not be translated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslateFailure {
    pub diagnostics: Vec<Diagnostic>,
}

impl TranslateFailure {
    pub fn codes(&self) -> Vec<ErrorCode> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }
}

impl From<TranslateError> for TranslateFailure {
    fn from(err: TranslateError) -> Self {
        TranslateFailure {
            diagnostics: vec![err.to_diagnostic()],
        }
    }
}

/// Lex, parse and type-check `source`.
///
/// Lexer and parser errors are reported together; type resolution only runs
/// on a tree that parsed without errors.
pub fn analyze(source: &str) -> Result<Analysis, TranslateFailure> {
    let lexed = jx_lexer::lex(source);
    let parsed = jx_parse::parse(&lexed.tokens, source);

    let mut diagnostics: Vec<Diagnostic> = lexed
        .errors
        .iter()
        .map(jx_lexer::LexError::to_diagnostic)
        .collect();
    diagnostics.extend(parsed.errors.iter().map(jx_parse::ParseError::to_diagnostic));
    if !diagnostics.is_empty() {
        debug!(count = diagnostics.len(), "syntax errors");
        return Err(TranslateFailure { diagnostics });
    }

    let typeck = jx_types::check(&parsed.unit, &parsed.arena);
    if typeck.has_errors() {
        debug!(count = typeck.errors.len(), "type errors");
        return Err(TranslateFailure {
            diagnostics: typeck
                .errors
                .iter()
                .map(jx_types::TypeError::to_diagnostic)
                .collect(),
        });
    }

    Ok(Analysis {
        tokens: lexed.tokens,
        unit: parsed.unit,
        arena: parsed.arena,
        types: typeck.types,
    })
}

/// Translate one Java unit into C#.
pub fn translate_unit(source: &str, options: &TranslateOptions) -> Result<String, TranslateFailure> {
    let analysis = analyze(source)?;
    let mut writer = ExprWriter::new(
        source,
        &analysis.tokens,
        &analysis.arena,
        &analysis.types,
        &options.cast_table,
        StringEmitter::with_capacity(source.len() + source.len() / 8),
    );
    writer.write_unit(&analysis.unit)?;
    let output = writer.finish().output();
    debug!(
        input_len = source.len(),
        output_len = output.len(),
        "translated unit"
    );
    Ok(output)
}
