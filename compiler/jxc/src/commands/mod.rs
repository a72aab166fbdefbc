//! Command handlers for the jxc CLI.
//!
//! Each submodule implements one command. Shared helpers (reading sources,
//! rendering diagnostics) live here in the module root.

use std::io::IsTerminal;

use jx_diagnostic::emitter::{stderr_emitter, ColorMode, DiagnosticEmitter};
use jx_diagnostic::Diagnostic;

mod check;
mod lex;
mod translate;

pub use check::check_file;
pub use lex::lex_file;
pub use translate::{
    output_path, parse_translate_args, run_translate, translate_files, CliOptions, FileError,
    FileOutcome, TranslateCommand, TranslateReport,
};

/// Read a source file, turning I/O errors into a user-facing message.
pub fn read_source(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Render diagnostics for one file to stderr, with source snippets.
pub(crate) fn report_diagnostics(
    path: &str,
    source: &str,
    diagnostics: &[Diagnostic],
    color: ColorMode,
) {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = stderr_emitter(color, is_tty).with_source(path, source);
    emitter.emit_all(diagnostics);
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    emitter.emit_summary(errors, diagnostics.len() - errors);
    emitter.flush();
}

/// Parse a `--color=<mode>` flag.
pub fn parse_color_flag(arg: &str) -> Option<Result<ColorMode, String>> {
    let value = arg.strip_prefix("--color=")?;
    Some(ColorMode::parse(value).ok_or_else(|| {
        format!("invalid color mode '{value}': expected auto, always or never")
    }))
}
