//! `prc resolve <module> [-I dir]...`.

use std::io::IsTerminal;

use pr_diagnostic::{Diagnostic, DiagnosticEmitter, ErrorCode, TerminalEmitter};
use pr_ir::{ModulePath, StringInterner};

use crate::{ModuleResolver, SessionConfig};

/// Print the file `module` resolves to, or the searched candidates.
///
/// Exits with status 1 when nothing is found.
pub fn resolve_module(config: &SessionConfig, module: &str) {
    let interner = StringInterner::new();
    let path = ModulePath::parse(module, &interner);
    let resolver = ModuleResolver::new(config.include_paths.clone());

    if let Some(file) = resolver.resolve(&path, &interner) {
        println!("{}", file.display());
        return;
    }

    let mut diag =
        Diagnostic::error(ErrorCode::E1001).with_message(format!("Module {module} not found"));
    let candidates = resolver.candidates(&path, &interner);
    if candidates.is_empty() {
        diag = diag.with_note("no include paths given; add one with `-I <dir>`");
    }
    for candidate in candidates {
        diag = diag.with_note(format!("searched: {}", candidate.display()));
    }

    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(config.color, is_tty);
    emitter.emit(&diag);
    emitter.flush();
    std::process::exit(1);
}
