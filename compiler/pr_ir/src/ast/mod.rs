//! Parsed module representation.
//!
//! Expressions are arena-allocated and referenced by [`ExprId`]; argument
//! lists are flattened into a side table and referenced by [`ExprRange`].
//! The type checker records each expression's resolved static type in the
//! arena, which is what intrinsic lowering dispatches on.

use std::fmt;
use std::sync::Arc;

use crate::{Loc, Name, SourceMeta, TypeId};

/// Index of an expression in an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// A contiguous run of expression ids in the arena's list table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ExprRange {
    pub start: u32,
    pub len: u32,
}

impl ExprRange {
    pub const EMPTY: ExprRange = ExprRange { start: 0, len: 0 };

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

impl fmt::Debug for ExprRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprRange({}..{})", self.start, self.start + self.len)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub loc: Loc,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    Int(i64),
    /// Bit pattern of an `f64`, so `ExprKind` stays `Eq`-friendly.
    Float(u64),
    Bool(bool),
    Char(u8),
    /// String literal; the interned text excludes quotes and the terminator.
    Str(Name),
    Ident(Name),
    Call { callee: Name, args: ExprRange },
}

/// Arena for expressions, their argument lists and their resolved types.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    types: Vec<Option<TypeId>>,
    lists: Vec<ExprId>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression, returning its id.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` expressions.
    pub fn alloc_expr(&mut self, kind: ExprKind, loc: Loc) -> ExprId {
        let idx = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded u32::MAX entries"));
        self.exprs.push(Expr { kind, loc });
        self.types.push(None);
        ExprId(idx)
    }

    /// Allocate a flattened list of expression ids.
    pub fn alloc_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = u32::try_from(self.lists.len())
            .unwrap_or_else(|_| panic!("expression list table exceeded u32::MAX entries"));
        self.lists.extend(ids);
        let len = u32::try_from(self.lists.len())
            .unwrap_or_else(|_| panic!("expression list table exceeded u32::MAX entries"))
            - start;
        ExprRange { start, len }
    }

    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn get_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.lists[start..start + range.len()]
    }

    /// Record the static type the checker resolved for `id`.
    pub fn set_type(&mut self, id: ExprId, ty: TypeId) {
        self.types[id.index()] = Some(ty);
    }

    /// Static type of `id`, or `None` if the checker never resolved it.
    #[inline]
    pub fn type_of(&self, id: ExprId) -> Option<TypeId> {
        self.types[id.index()]
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Import {
    pub path: crate::ModulePath,
    pub loc: Loc,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDef {
    /// Mangled symbol name.
    pub name: Name,
    /// Name as written in source.
    pub unmangled: Name,
    pub loc: Loc,
    pub body: Vec<ExprId>,
}

/// A parsed source file.
#[derive(Clone, Debug)]
pub struct Module {
    pub meta: Arc<SourceMeta>,
    pub arena: ExprArena,
    pub imports: Vec<Import>,
    pub functions: Vec<FunctionDef>,
    /// Top-level statements, which run in the implicit `main`.
    pub body: Vec<ExprId>,
}

impl Module {
    pub fn new(meta: Arc<SourceMeta>) -> Self {
        Module {
            meta,
            arena: ExprArena::new(),
            imports: Vec::new(),
            functions: Vec::new(),
            body: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests;
