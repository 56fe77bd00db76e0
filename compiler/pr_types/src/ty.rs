//! Type representation.

use pr_ir::{Name, TypeId};

use crate::Intrinsic;

/// The shape of a type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Type {
    /// Integer of `size` bytes. `char` is a signed one-byte word.
    Word { size: u32, unsigned: bool },
    Float { size: u32 },
    Bool,
    /// Dynamic array; runtime layout `{size: size_t, value: *element}`.
    Array { element: TypeId },
    StaticArray { element: TypeId, length: u64 },
    /// `None` is the opaque pointer.
    Pointer { pointee: Option<TypeId> },
    Struct { fields: Vec<StructField> },
    Function(FunctionType),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructField {
    pub name: Name,
    pub ty: TypeId,
    /// Byte offset within the struct.
    pub offset: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: Name,
    /// `None` only for an untyped variadic, which accepts anything.
    pub ty: Option<TypeId>,
    pub variadic: bool,
}

impl Param {
    pub fn new(name: Name, ty: TypeId) -> Self {
        Param {
            name,
            ty: Some(ty),
            variadic: false,
        }
    }

    pub fn varargs(name: Name, ty: Option<TypeId>) -> Self {
        Param {
            name,
            ty,
            variadic: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionType {
    pub params: Vec<Param>,
    pub returns: Vec<TypeId>,
    /// Set for builtins whose call sites are expanded by a macro.
    pub intrinsic: Option<Intrinsic>,
}

/// A pooled type: its shape plus name and layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeData {
    pub name: Option<Name>,
    pub kind: Type,
    pub size: u64,
    pub align: u64,
}
