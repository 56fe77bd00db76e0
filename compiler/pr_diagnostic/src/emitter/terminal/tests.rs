use super::*;
use crate::ErrorCode;
use pr_ir::{Loc, SourceLines, SourceMeta};
use pretty_assertions::assert_eq;

fn render(diag: &Diagnostic, mode: ColorMode) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, mode, false);
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_plain_rendering_with_source_line() {
    let meta = SourceMeta::new("main.pr", "main", SourceLines::split("let p = 1\nprint p"));
    let diag = Diagnostic::error(ErrorCode::E2101)
        .with_message("Print type Point not supported")
        .at(&meta, Loc::new(2, 6))
        .with_note("print field by field");

    assert_eq!(
        render(&diag, ColorMode::Never),
        "main.pr:2: error[E2101]: Print type Point not supported\n\
         \x20   2 | print p\n\
         \x20 = note: print field by field\n"
    );
}

#[test]
fn test_rendering_without_location() {
    let diag = Diagnostic::error(ErrorCode::E0001).with_message("File \"a.pr\" doesn't exist");
    assert_eq!(
        render(&diag, ColorMode::Never),
        "error[E0001]: File \"a.pr\" doesn't exist\n"
    );
}

#[test]
fn test_color_mode_always_emits_ansi() {
    let diag = Diagnostic::error(ErrorCode::E1001).with_message("missing");
    let text = render(&diag, ColorMode::Always);
    assert!(text.contains("\x1b["));
    assert!(text.contains("E1001"));
}

#[test]
fn test_auto_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_color_mode_from_str() {
    assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert!("sometimes".parse::<ColorMode>().is_err());
}

#[test]
fn test_summary() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_summary(2, 0);
    emitter.emit_summary(0, 1);
    emitter.emit_summary(0, 0);
    let text = String::from_utf8(output).unwrap();
    assert_eq!(
        text,
        "error: aborting due to 2 previous errors\nwarning: 1 warning emitted\n"
    );
}

#[test]
fn stderr_emitter_resolves_color_mode() {
    let never = TerminalEmitter::stderr(ColorMode::Never, true);
    assert!(!never.colors);
    let always = TerminalEmitter::stderr(ColorMode::Always, false);
    assert!(always.colors);
    let auto = TerminalEmitter::stderr(ColorMode::Auto, true);
    assert!(auto.colors);
}
