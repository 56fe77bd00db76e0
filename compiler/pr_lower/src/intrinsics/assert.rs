//! `assert(assertion: bool)`
//!
//! ```text
//!   br cond, L1, L0
//! L0:
//!   call @__assert_fail(line_text, filename, line, function)
//!   unreachable
//! L1:
//! ```

use pr_diagnostic::{Diagnostic, ErrorCode};

use crate::ir::{Insn, Value};
use crate::materialize::charp;
use crate::{CallSite, ExprLowering, State};

pub(super) fn expand(
    site: &CallSite<'_>,
    state: &mut State<'_>,
    lowering: &mut dyn ExprLowering,
) -> Option<Value> {
    let &[condition] = site.args else {
        state.error(
            Diagnostic::error(ErrorCode::E2103)
                .with_message(format!("assert takes 1 argument, got {}", site.args.len()))
                .at(&site.ast.meta, site.loc),
        );
        return None;
    };

    state.import_function("__assert_fail");
    let cond = lowering.lower_expr(site.ast, condition, state)?;

    let if_false = state.builder.make_label();
    let pending = state.builder.reserve_branch(cond, if_false);
    state.builder.push_label(if_false);

    let meta = &site.ast.meta;
    let line_text = meta.lines.get(site.loc.line).unwrap_or_default();
    let function = match state.current_function() {
        Some(name) => state.interner.lookup(name),
        None => "main",
    };
    let int = state.defs.builtins.int;
    let args = vec![
        charp(line_text.as_bytes(), state),
        charp(meta.filename().as_bytes(), state),
        Value::int(i64::from(site.loc.line), int),
        charp(function.as_bytes(), state),
    ];
    let callee = state.interner.intern("__assert_fail");
    state.builder.push(Insn::Call {
        callee,
        ret: None,
        args,
        proto: None,
    });
    state.builder.push(Insn::Unreachable);

    let if_true = state.builder.make_label();
    state.builder.push_label(if_true);
    state.builder.resolve_branch(pending, if_true);
    None
}
