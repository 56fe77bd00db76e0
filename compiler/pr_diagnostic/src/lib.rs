//! Diagnostic system for error reporting.
//!
//! Every diagnostic carries:
//! - An error code for searchability (`prc explain E2101`)
//! - A message saying what went wrong
//! - The file and line where it went wrong, plus the quoted source line
//! - Optional notes (for example the paths a failed import searched)
//!
//! # Error Guarantees
//!
//! The `ErrorGuaranteed` type provides type-level proof that at least one
//! error was emitted. The session's emission gate reads the same counter the
//! sink increments, so a function returning `ErrorGuaranteed` has provably
//! blocked code emission under the per-module policy.
//!
//! ```text
//! // Can only get ErrorGuaranteed by emitting an error
//! let guarantee = sink.emit_error(diagnostic);
//! ```

mod diagnostic;
pub mod emitter;
mod error_code;
mod guarantee;
mod sink;

pub use diagnostic::{Diagnostic, Severity};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use sink::DiagnosticSink;
