//! Proof that an error was reported.

use std::fmt;

/// Type-level proof that at least one error diagnostic was emitted.
///
/// Only [`DiagnosticSink::emit_error`](crate::DiagnosticSink::emit_error)
/// and [`ErrorGuaranteed::from_error_count`] can produce one.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    pub(crate) fn new() -> Self {
        ErrorGuaranteed(())
    }

    /// Returns `Some` if `count` proves an error was emitted.
    pub fn from_error_count(count: usize) -> Option<Self> {
        if count > 0 {
            Some(ErrorGuaranteed(()))
        } else {
            None
        }
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error(s) emitted")
    }
}

#[cfg(test)]
mod tests;
