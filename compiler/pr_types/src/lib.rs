//! Types, scopes and the Global Definition Table.
//!
//! - [`TypePool`] owns every type of a session; types are referenced by
//!   [`TypeId`](pr_ir::TypeId) and compared with [`TypePool::equals`].
//! - [`ScopeArena`] owns every scope; each scope links to one parent and the
//!   builtin scope is the unique root.
//! - [`Definitions`] bundles both with the well-known builtin type ids.

mod builtins;
mod intrinsic;
mod pool;
mod scope;
mod ty;

pub use builtins::{Builtins, Definitions};
pub use intrinsic::Intrinsic;
pub use pool::TypePool;
pub use scope::{Function, Scope, ScopeArena, ScopeId, ShareMarker, VarKind, Variable};
pub use ty::{FunctionType, Param, StructField, Type, TypeData};
