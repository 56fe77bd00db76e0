//! `print(...) -> int`
//!
//! Lowered to `printf` with a format string derived from the static type of
//! each argument.

use pr_diagnostic::{Diagnostic, ErrorCode};
use pr_ir::Name;
use pr_types::Param;

use crate::ir::{Insn, Value};
use crate::materialize::{charp, charp_static, charp_str, format_specifier};
use crate::{CallSite, ExprLowering, State};

pub(super) fn expand(
    site: &CallSite<'_>,
    state: &mut State<'_>,
    lowering: &mut dyn ExprLowering,
) -> Option<Value> {
    state.import_function("printf");
    let format = format_string(site, state)?;

    let mut args = Vec::with_capacity(site.args.len() + 1);
    args.push(charp(format.as_bytes(), state));
    for (i, &arg) in site.args.iter().enumerate() {
        let value = lowering.lower_expr(site.ast, arg, state)?;
        args.push(decay(value, site, i, state)?);
    }

    let int = state.defs.builtins.int;
    let char_ptr = state.defs.char_pointer();
    let ret = state.builder.fresh_local(int);
    let callee = state.interner.intern("printf");
    state.builder.push(Insn::Call {
        callee,
        ret: Some(ret.clone()),
        args,
        proto: Some(vec![
            Param::new(Name::EMPTY, char_ptr),
            Param::varargs(Name::EMPTY, None),
        ]),
    });
    Some(ret)
}

/// Concatenate the specifiers of every argument, reporting the first
/// argument that has none.
fn format_string(site: &CallSite<'_>, state: &mut State<'_>) -> Option<String> {
    let mut format = String::new();
    for (i, &arg) in site.args.iter().enumerate() {
        let Some(ty) = site.ast.arena.type_of(arg) else {
            state.error(
                Diagnostic::error(ErrorCode::E2102)
                    .with_message("Type of print argument could not be resolved")
                    .at(&site.ast.meta, site.arg_loc(i)),
            );
            return None;
        };
        let Some(spec) = format_specifier(ty, state.defs) else {
            let shown = state.defs.pool.display(ty, state.interner);
            state.error(
                Diagnostic::error(ErrorCode::E2101)
                    .with_message(format!("Print type {shown} not supported"))
                    .at(&site.ast.meta, site.arg_loc(i)),
            );
            return None;
        };
        format.push_str(spec);
    }
    Some(format)
}

/// Fixed char arrays decay through their storage address, `string` through
/// its buffer field. Everything else is passed as is.
fn decay(value: Value, site: &CallSite<'_>, i: usize, state: &mut State<'_>) -> Option<Value> {
    let Some(ty) = value.ty else {
        return Some(value);
    };
    let char = state.defs.builtins.char;
    if state.defs.pool.is_static_array_of(ty, char) {
        let decayed = value.addr.as_deref().and_then(|addr| charp_static(addr, state));
        if decayed.is_none() {
            state.error(
                Diagnostic::error(ErrorCode::E9001)
                    .with_message("char array passed to print has no storage address")
                    .at(&site.ast.meta, site.arg_loc(i)),
            );
        }
        return decayed;
    }
    if state.defs.pool.equals(ty, state.defs.builtins.string) {
        return Some(charp_str(value, state));
    }
    Some(value)
}
