//! Intrinsic registry and macro dispatch.
//!
//! Intrinsics are builtin functions whose call sites are generated by a
//! macro operating on the instruction stream. The tag stored on the
//! function type selects the macro.

mod assert;
mod print;

use pr_ir::{Name, StringInterner, TypeId};
use pr_types::{Definitions, Intrinsic, Param};

use crate::ir::Value;
use crate::{CallSite, ExprLowering, State};

/// Install every intrinsic into the builtin root scope.
pub fn install(defs: &mut Definitions, interner: &StringInterner) {
    let bool = defs.builtins.bool;
    let int = defs.builtins.int;
    for intrinsic in Intrinsic::ALL {
        let (params, returns) = match intrinsic {
            Intrinsic::Assert => (vec![Param::new(interner.intern("assertion"), bool)], vec![]),
            Intrinsic::Print => (vec![Param::varargs(Name::EMPTY, None)], vec![int]),
        };
        defs.create_function(
            interner.intern(intrinsic.name()),
            params,
            returns,
            Some(intrinsic),
        );
    }
}

/// Run the macro for `intrinsic` at `site`.
///
/// Returns the call's value, or `None` when the intrinsic produces none or
/// expansion failed (an error has then been reported).
#[tracing::instrument(level = "debug", skip_all, fields(intrinsic = %intrinsic, line = site.loc.line))]
pub fn expand(
    intrinsic: Intrinsic,
    site: &CallSite<'_>,
    state: &mut State<'_>,
    lowering: &mut dyn ExprLowering,
) -> Option<Value> {
    match intrinsic {
        Intrinsic::Assert => assert::expand(site, state, lowering),
        Intrinsic::Print => print::expand(site, state, lowering),
    }
}

/// Outcome of [`lower_intrinsic_call`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expansion {
    /// The callee was an intrinsic and its macro ran.
    Expanded(Option<Value>),
    /// The callee is an ordinary function; lower the call normally.
    NotIntrinsic,
}

/// Expand `site` if `callee_ty` is an intrinsic function type.
///
/// Intrinsic call sites never go through ordinary argument evaluation, so
/// callers must not lower the arguments themselves when this expands.
pub fn lower_intrinsic_call(
    site: &CallSite<'_>,
    callee_ty: TypeId,
    state: &mut State<'_>,
    lowering: &mut dyn ExprLowering,
) -> Expansion {
    match state.defs.intrinsic_of(callee_ty) {
        Some(intrinsic) => Expansion::Expanded(expand(intrinsic, site, state, lowering)),
        None => Expansion::NotIntrinsic,
    }
}
