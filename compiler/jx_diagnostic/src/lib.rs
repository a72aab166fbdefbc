//! Diagnostic system for error reporting.
//!
//! Every phase (lexer, parser, type resolution, translation) owns its own
//! error type and converts it into a [`Diagnostic`] for reporting:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes and suggestions

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
