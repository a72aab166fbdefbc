//! The `check` command: lex, parse and type-check without writing C#.

use jx_diagnostic::emitter::ColorMode;
use tracing::debug;

use super::{read_source, report_diagnostics};

/// Check one file. Returns `true` when it has no errors.
pub fn check_file(path: &str, color: ColorMode) -> bool {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {msg}");
            return false;
        }
    };

    match jx_csharp::analyze(&source) {
        Ok(analysis) => {
            debug!(path, resolved = analysis.types.resolved_count(), "checked");
            println!("OK: {path} ({} statements)", analysis.unit.stmts.len());
            true
        }
        Err(failure) => {
            report_diagnostics(path, &source, &failure.diagnostics, color);
            false
        }
    }
}
