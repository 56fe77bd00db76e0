//! Session-wide diagnostic sink.
//!
//! Every phase reports through one `DiagnosticSink`. Its error count is the
//! session error counter that gates code emission.

use crate::{Diagnostic, DiagnosticEmitter, ErrorGuaranteed, Severity};

/// Collects diagnostics, counts errors, and forwards each diagnostic to an
/// optional emitter as soon as it is reported.
#[derive(Default)]
pub struct DiagnosticSink {
    emitter: Option<Box<dyn DiagnosticEmitter>>,
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl DiagnosticSink {
    /// A sink that records diagnostics without printing them.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that also writes every diagnostic to `emitter`.
    pub fn with_emitter(emitter: Box<dyn DiagnosticEmitter>) -> Self {
        DiagnosticSink {
            emitter: Some(emitter),
            ..Self::default()
        }
    }

    /// Report a diagnostic of any severity.
    pub fn emit(&mut self, diag: Diagnostic) {
        match diag.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
            Severity::Note => {}
        }
        if let Some(emitter) = &mut self.emitter {
            emitter.emit(&diag);
        }
        self.diagnostics.push(diag);
    }

    /// Report an error, returning proof that it was reported.
    ///
    /// The diagnostic's severity is forced to `Error`.
    pub fn emit_error(&mut self, mut diag: Diagnostic) -> ErrorGuaranteed {
        diag.severity = Severity::Error;
        self.emit(diag);
        ErrorGuaranteed::new()
    }

    /// Number of errors reported so far in the session.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Returns `Some` if any error has been reported.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    /// All diagnostics reported so far, in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Write the summary line and flush the emitter, if any.
    pub fn flush(&mut self) {
        if let Some(emitter) = &mut self.emitter {
            emitter.emit_summary(self.error_count, self.warning_count);
            emitter.flush();
        }
    }
}

impl std::fmt::Debug for DiagnosticSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticSink")
            .field("has_emitter", &self.emitter.is_some())
            .field("error_count", &self.error_count)
            .field("warning_count", &self.warning_count)
            .field("diagnostics", &self.diagnostics)
            .finish()
    }
}
