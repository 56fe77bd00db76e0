//! Type handle.
//!
//! `TypeId` lives here rather than in `pr_types` so the AST can record the
//! static type the checker resolved for each expression without depending
//! on the type pool itself.

use std::fmt;

/// Index of a type in the session's type pool.
///
/// Two ids compare equal only if they name the very same pooled type.
/// Structural equality is the pool's job (`TypePool::equals`).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TypeId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}
