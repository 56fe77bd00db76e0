//! Scopes.
//!
//! A scope maps names to types, variables and functions and links to a
//! single parent. Lookups walk the parent chain, so anything installed in
//! the builtin root scope is visible everywhere.

use std::fmt;

use pr_ir::{Name, TypeId};
use rustc_hash::FxHashMap;

/// Index of a scope in the [`ScopeArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ScopeId(u32);

impl ScopeId {
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScopeId({})", self.0)
    }
}

/// Whether a symbol is visible to importers of its module.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShareMarker {
    #[default]
    None,
    Export,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VarKind {
    Var,
    Const,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub name: Name,
    pub share: ShareMarker,
    pub kind: VarKind,
    pub ty: TypeId,
    /// Compile-time value of an integer or bool constant.
    pub value: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    pub name: Name,
    pub share: ShareMarker,
    /// Always a `Type::Function`.
    pub ty: TypeId,
}

#[derive(Clone, Debug, Default)]
pub struct Scope {
    parent: Option<ScopeId>,
    types: FxHashMap<Name, (ShareMarker, TypeId)>,
    variables: FxHashMap<Name, Variable>,
    functions: FxHashMap<Name, Function>,
}

impl Scope {
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Type declared directly in this scope.
    pub fn local_type(&self, name: Name) -> Option<TypeId> {
        self.types.get(&name).map(|(_, ty)| *ty)
    }

    pub fn local_variable(&self, name: Name) -> Option<&Variable> {
        self.variables.get(&name)
    }

    pub fn local_function(&self, name: Name) -> Option<&Function> {
        self.functions.get(&name)
    }

    /// Names of exported functions declared directly in this scope.
    pub fn exported_functions(&self) -> impl Iterator<Item = &Function> {
        self.functions
            .values()
            .filter(|f| f.share == ShareMarker::Export)
    }
}

/// Owns every scope of a session. Scopes are never freed individually.
#[derive(Clone, Debug, Default)]
pub struct ScopeArena {
    scopes: Vec<Scope>,
}

impl ScopeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a scope under `parent`; `None` creates a root.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` scopes.
    pub fn enter_scope(&mut self, parent: Option<ScopeId>) -> ScopeId {
        let idx = u32::try_from(self.scopes.len())
            .unwrap_or_else(|_| panic!("scope arena exceeded u32::MAX entries"));
        self.scopes.push(Scope {
            parent,
            ..Scope::default()
        });
        ScopeId(idx)
    }

    #[inline]
    pub fn get(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn create_type(&mut self, scope: ScopeId, name: Name, share: ShareMarker, ty: TypeId) {
        self.scopes[scope.index()]
            .types
            .insert(name, (share, ty));
    }

    pub fn create_variable(&mut self, scope: ScopeId, variable: Variable) {
        self.scopes[scope.index()]
            .variables
            .insert(variable.name, variable);
    }

    pub fn create_function(&mut self, scope: ScopeId, function: Function) {
        self.scopes[scope.index()]
            .functions
            .insert(function.name, function);
    }

    /// Iterate `scope` and its ancestors, innermost first.
    pub fn ancestors(&self, scope: ScopeId) -> impl Iterator<Item = &Scope> {
        let mut next = Some(scope);
        std::iter::from_fn(move || {
            let current = self.get(next?);
            next = current.parent;
            Some(current)
        })
    }

    pub fn lookup_type(&self, scope: ScopeId, name: Name) -> Option<TypeId> {
        self.ancestors(scope).find_map(|s| s.local_type(name))
    }

    pub fn lookup_variable(&self, scope: ScopeId, name: Name) -> Option<&Variable> {
        self.ancestors(scope).find_map(|s| s.local_variable(name))
    }

    pub fn lookup_function(&self, scope: ScopeId, name: Name) -> Option<&Function> {
        self.ancestors(scope).find_map(|s| s.local_function(name))
    }
}

#[cfg(test)]
mod tests;
