//! Session-wide type storage.
//!
//! Pointer and static array types are interned: asking twice for
//! `pointer(char)` yields the same id. Every other constructor allocates a
//! fresh type, which is what makes structs and functions nominal.

mod construct;

use pr_ir::{StringLookup, TypeId};
use rustc_hash::FxHashMap;

use crate::{FunctionType, Type, TypeData};

/// Pointer width of the target.
pub(crate) const POINTER_SIZE: u64 = 8;

#[derive(Clone, Debug, Default)]
pub struct TypePool {
    types: Vec<TypeData>,
    pointers: FxHashMap<Option<TypeId>, TypeId>,
    static_arrays: FxHashMap<(TypeId, u64), TypeId>,
}

impl TypePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new type. Never interned.
    ///
    /// # Panics
    /// Panics if the pool exceeds `u32::MAX` types.
    pub fn alloc(&mut self, data: TypeData) -> TypeId {
        let idx = u32::try_from(self.types.len())
            .unwrap_or_else(|_| panic!("type pool exceeded u32::MAX entries"));
        self.types.push(data);
        TypeId::from_raw(idx)
    }

    #[inline]
    pub fn get(&self, id: TypeId) -> &TypeData {
        &self.types[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: TypeId) -> &Type {
        &self.get(id).kind
    }

    #[inline]
    pub fn size_of(&self, id: TypeId) -> u64 {
        self.get(id).size
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Structural type equality.
    ///
    /// Words compare by size and signedness, floats by size, pointers and
    /// arrays by element. Structs and functions are equal only to themselves.
    pub fn equals(&self, a: TypeId, b: TypeId) -> bool {
        if a == b {
            return true;
        }
        match (self.kind(a), self.kind(b)) {
            (
                Type::Word {
                    size: sa,
                    unsigned: ua,
                },
                Type::Word {
                    size: sb,
                    unsigned: ub,
                },
            ) => sa == sb && ua == ub,
            (Type::Float { size: sa }, Type::Float { size: sb }) => sa == sb,
            (Type::Bool, Type::Bool) => true,
            (Type::Pointer { pointee: pa }, Type::Pointer { pointee: pb }) => match (pa, pb) {
                (Some(pa), Some(pb)) => self.equals(*pa, *pb),
                (None, None) => true,
                _ => false,
            },
            (
                Type::StaticArray {
                    element: ea,
                    length: la,
                },
                Type::StaticArray {
                    element: eb,
                    length: lb,
                },
            ) => la == lb && self.equals(*ea, *eb),
            (Type::Array { element: ea }, Type::Array { element: eb }) => self.equals(*ea, *eb),
            _ => false,
        }
    }

    pub fn is_pointer(&self, id: TypeId) -> bool {
        matches!(self.kind(id), Type::Pointer { .. })
    }

    /// Whether `id` is a static array whose element equals `element`.
    pub fn is_static_array_of(&self, id: TypeId, element: TypeId) -> bool {
        match self.kind(id) {
            Type::StaticArray { element: e, .. } => self.equals(*e, element),
            _ => false,
        }
    }

    pub fn as_function(&self, id: TypeId) -> Option<&FunctionType> {
        match self.kind(id) {
            Type::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Human-readable rendering used in diagnostics.
    pub fn display(&self, id: TypeId, lookup: &dyn StringLookup) -> String {
        let data = self.get(id);
        if let Some(name) = data.name {
            return lookup.lookup(name).to_owned();
        }
        match &data.kind {
            Type::Word { size, unsigned } => {
                format!("{}int{}", if *unsigned { "u" } else { "" }, size * 8)
            }
            Type::Float { size } => format!("float{}", size * 8),
            Type::Bool => "bool".to_owned(),
            Type::Array { element } => format!("[{}]", self.display(*element, lookup)),
            Type::StaticArray { element, length } => {
                format!("[{length} {}]", self.display(*element, lookup))
            }
            Type::Pointer { pointee: Some(p) } => format!("*{}", self.display(*p, lookup)),
            Type::Pointer { pointee: None } => "*".to_owned(),
            Type::Struct { .. } => "struct".to_owned(),
            Type::Function(f) => {
                let params: Vec<String> = f
                    .params
                    .iter()
                    .map(|p| {
                        let ty = p.ty.map_or_else(String::new, |t| self.display(t, lookup));
                        if p.variadic {
                            format!("{ty}...")
                        } else {
                            ty
                        }
                    })
                    .collect();
                let returns: Vec<String> =
                    f.returns.iter().map(|r| self.display(*r, lookup)).collect();
                if returns.is_empty() {
                    format!("def ({})", params.join(", "))
                } else {
                    format!("def ({}) -> {}", params.join(", "), returns.join(", "))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
