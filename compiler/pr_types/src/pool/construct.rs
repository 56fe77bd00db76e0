//! Type construction helpers for the pool.

use pr_ir::{Name, TypeId};

use super::POINTER_SIZE;
use crate::{FunctionType, StructField, Type, TypeData, TypePool};

impl TypePool {
    /// Create a named integer type of `size` bytes.
    pub fn word(&mut self, name: Name, size: u32, unsigned: bool) -> TypeId {
        self.alloc(TypeData {
            name: Some(name),
            kind: Type::Word { size, unsigned },
            size: u64::from(size),
            align: u64::from(size),
        })
    }

    /// Create a named float type of `size` bytes.
    pub fn float(&mut self, name: Name, size: u32) -> TypeId {
        self.alloc(TypeData {
            name: Some(name),
            kind: Type::Float { size },
            size: u64::from(size),
            align: u64::from(size),
        })
    }

    pub fn boolean(&mut self, name: Name) -> TypeId {
        self.alloc(TypeData {
            name: Some(name),
            kind: Type::Bool,
            size: 1,
            align: 1,
        })
    }

    /// Pointer to `pointee` (`None` = opaque). Interned.
    pub fn pointer(&mut self, pointee: Option<TypeId>) -> TypeId {
        if let Some(&id) = self.pointers.get(&pointee) {
            return id;
        }
        let id = self.alloc(TypeData {
            name: None,
            kind: Type::Pointer { pointee },
            size: POINTER_SIZE,
            align: POINTER_SIZE,
        });
        self.pointers.insert(pointee, id);
        id
    }

    /// Fixed-length array `[length element]`. Interned.
    pub fn static_array(&mut self, element: TypeId, length: u64) -> TypeId {
        if let Some(&id) = self.static_arrays.get(&(element, length)) {
            return id;
        }
        let elem = self.get(element);
        let (size, align) = (elem.size * length, elem.align);
        let id = self.alloc(TypeData {
            name: None,
            kind: Type::StaticArray { element, length },
            size,
            align,
        });
        self.static_arrays.insert((element, length), id);
        id
    }

    /// Dynamic array of `element`: a `{size, value}` pair at runtime.
    pub fn array(&mut self, name: Option<Name>, element: TypeId) -> TypeId {
        self.alloc(TypeData {
            name,
            kind: Type::Array { element },
            size: 8 + POINTER_SIZE,
            align: POINTER_SIZE,
        })
    }

    /// Nominal struct with explicit layout.
    pub fn structure(
        &mut self,
        name: Name,
        fields: Vec<StructField>,
        size: u64,
        align: u64,
    ) -> TypeId {
        self.alloc(TypeData {
            name: Some(name),
            kind: Type::Struct { fields },
            size,
            align,
        })
    }

    /// Nominal function type.
    pub fn function(&mut self, function: FunctionType) -> TypeId {
        self.alloc(TypeData {
            name: None,
            kind: Type::Function(function),
            size: POINTER_SIZE,
            align: POINTER_SIZE,
        })
    }
}
