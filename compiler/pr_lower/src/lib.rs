//! Lowering to the instruction IR, and the intrinsic macro engine.
//!
//! The compiler proper walks expressions through its own
//! [`ExprLowering`] implementation. When it reaches a call whose callee is
//! an intrinsic it hands the call site to [`lower_intrinsic_call`], which
//! runs the intrinsic's macro against the same [`State`].
//!
//! # Modules
//!
//! - [`ir`]: values, instructions, function bodies, module records
//! - [`builder`]: [`FunctionBuilder`], labels and pending branches
//! - [`materialize`]: literals to `*char`, static types to printf specifiers
//! - [`intrinsics`]: registry, `assert` and `print`

pub mod builder;
pub mod intrinsics;
pub mod ir;
mod lowering;
pub mod materialize;
mod state;

#[cfg(test)]
mod testing;

pub use builder::{FunctionBuilder, PendingBranch};
pub use intrinsics::{lower_intrinsic_call, Expansion};
pub use ir::{FunctionBody, Global, GlobalId, Insn, IrModule, Label, LocalId, Value, ValueKind};
pub use lowering::{CallSite, ExprLowering};
pub use state::State;
