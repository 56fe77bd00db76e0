//! Instruction IR.
//!
//! Each function body is a flat instruction list with labels; control flow
//! is expressed by `Br` to labels rather than by a block graph. This is the
//! shape intrinsic macros write directly.
//!
//! - [`Value`]: compile-time constant, local register or module global
//! - [`Insn`]: one instruction
//! - [`FunctionBody`]: finished instruction list of one function
//! - [`IrModule`]: everything one source file compiles to

mod display;

use std::fmt;
use std::path::PathBuf;

use pr_ir::{Name, TypeId};
use pr_types::{Param, ScopeId};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

pub use display::{repr, ModuleDump};

// ID newtypes

/// Local register within one function. Allocated sequentially from 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct LocalId(u32);

impl LocalId {
    #[inline]
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Module global. Allocated sequentially from 0 per module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct GlobalId(u32);

impl GlobalId {
    #[inline]
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Branch target within one function.
///
/// Labels are allocated in strictly increasing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Label(u32);

impl Label {
    #[inline]
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

// Values

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// Compile-time integer.
    Int(i64),
    /// Compile-time string.
    Str(Name),
    Local(LocalId),
    Global(GlobalId),
}

/// An operand, tagged with its static type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Value {
    pub kind: ValueKind,
    pub ty: Option<TypeId>,
    /// Address of the value's backing storage, used to decay fixed arrays.
    pub addr: Option<Box<Value>>,
}

impl Value {
    pub fn int(value: i64, ty: TypeId) -> Self {
        Value {
            kind: ValueKind::Int(value),
            ty: Some(ty),
            addr: None,
        }
    }

    pub fn string(text: Name, ty: TypeId) -> Self {
        Value {
            kind: ValueKind::Str(text),
            ty: Some(ty),
            addr: None,
        }
    }

    pub fn local(id: LocalId, ty: TypeId) -> Self {
        Value {
            kind: ValueKind::Local(id),
            ty: Some(ty),
            addr: None,
        }
    }

    pub fn global(id: GlobalId, ty: TypeId) -> Self {
        Value {
            kind: ValueKind::Global(id),
            ty: Some(ty),
            addr: None,
        }
    }

    #[must_use]
    pub fn with_addr(mut self, addr: Value) -> Self {
        self.addr = Some(Box::new(addr));
        self
    }

    pub fn as_local(&self) -> Option<LocalId> {
        match self.kind {
            ValueKind::Local(id) => Some(id),
            _ => None,
        }
    }
}

// Instructions

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Insn {
    /// Conditional branch. `if_true` is `None` only while the branch is
    /// pending in a [`FunctionBuilder`](crate::FunctionBuilder).
    Br {
        cond: Value,
        if_true: Option<Label>,
        if_false: Label,
    },
    Label(Label),
    /// Direct call. `proto` overrides the callee's declared signature,
    /// which is how variadic externals such as `printf` are called.
    Call {
        callee: Name,
        ret: Option<Value>,
        args: Vec<Value>,
        proto: Option<Vec<Param>>,
    },
    /// Address computation into `base`, whose pointee type is `ty`.
    Gep {
        ret: Value,
        ty: TypeId,
        base: Value,
        index: SmallVec<[Value; 2]>,
    },
    /// Read a field out of an aggregate value.
    ExtractValue {
        ret: Value,
        value: Value,
        index: SmallVec<[u32; 2]>,
    },
    Unreachable,
}

/// A module-level constant. Every materialized literal gets its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Global {
    pub id: GlobalId,
    pub name: Name,
    /// Type of the stored data (a static char array for literals).
    pub ty: TypeId,
    /// Bytes without the trailing NUL, which the array type accounts for.
    pub data: Vec<u8>,
}

/// A finished function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionBody {
    pub name: Name,
    pub insns: Vec<Insn>,
    /// Type of each local, indexed by [`LocalId`].
    pub locals: Vec<TypeId>,
}

impl FunctionBody {
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.insns.iter().filter_map(|insn| match insn {
            Insn::Label(l) => Some(*l),
            _ => None,
        })
    }
}

/// Everything one source file lowers to.
#[derive(Clone, Debug)]
pub struct IrModule {
    pub path: PathBuf,
    pub module: String,
    pub scope: ScopeId,
    imported: Vec<Name>,
    imported_set: FxHashSet<Name>,
    pub globals: Vec<Global>,
    pub functions: Vec<FunctionBody>,
}

impl IrModule {
    pub fn new(path: impl Into<PathBuf>, module: impl Into<String>, scope: ScopeId) -> Self {
        IrModule {
            path: path.into(),
            module: module.into(),
            scope,
            imported: Vec::new(),
            imported_set: FxHashSet::default(),
            globals: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// Record an external symbol the module calls. Idempotent.
    pub fn import(&mut self, name: Name) {
        if self.imported_set.insert(name) {
            self.imported.push(name);
        }
    }

    /// External symbols in first-import order.
    pub fn imported(&self) -> &[Name] {
        &self.imported
    }

    /// Add a global, returning its id.
    ///
    /// # Panics
    /// Panics if the module exceeds `u32::MAX` globals.
    pub fn add_global(&mut self, name: Name, ty: TypeId, data: Vec<u8>) -> GlobalId {
        let id = GlobalId::new(
            u32::try_from(self.globals.len())
                .unwrap_or_else(|_| panic!("module exceeded u32::MAX globals")),
        );
        self.globals.push(Global { id, name, ty, data });
        id
    }

    pub fn function(&self, name: Name) -> Option<&FunctionBody> {
        self.functions.iter().find(|f| f.name == name)
    }
}
