//! The Global Definition Table.
//!
//! One root scope per session holding the primitive types, a few libc
//! constants and handles, and the installed intrinsic functions. Every
//! module scope is a child of it.

use pr_ir::{Name, StringInterner, TypeId};

use crate::{
    Function, FunctionType, Intrinsic, Param, ScopeArena, ScopeId, ShareMarker, StructField,
    TypePool, VarKind, Variable,
};

const PATH_MAX: i64 = if cfg!(windows) { 260 } else { 4096 };

/// Well-known builtin type ids.
///
/// Several of these are structurally equal (`int` and `int32`, `char` and
/// `int8`) but distinct by identity, which intrinsic type dispatch relies on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Builtins {
    pub char: TypeId,
    pub bool: TypeId,
    pub string: TypeId,
    pub float: TypeId,
    pub double: TypeId,
    pub float32: TypeId,
    pub float64: TypeId,
    pub byte: TypeId,
    pub short: TypeId,
    pub int: TypeId,
    pub long: TypeId,
    pub ubyte: TypeId,
    pub ushort: TypeId,
    pub uint: TypeId,
    pub ulong: TypeId,
    pub int8: TypeId,
    pub int16: TypeId,
    pub int32: TypeId,
    pub int64: TypeId,
    pub uint8: TypeId,
    pub uint16: TypeId,
    pub uint32: TypeId,
    pub uint64: TypeId,
    pub size_t: TypeId,
    /// Opaque `struct._IO_FILE`.
    pub io_file: TypeId,
    /// `File`, a pointer to `struct._IO_FILE`.
    pub file: TypeId,
    /// Runtime layout of dynamic arrays: `{size: size_t, value: *}`.
    pub array: TypeId,
}

/// Types and scopes of a session, rooted at the builtin scope.
#[derive(Clone, Debug)]
pub struct Definitions {
    pub pool: TypePool,
    pub scopes: ScopeArena,
    pub builtins: Builtins,
    root: ScopeId,
}

struct Installer<'a> {
    pool: &'a mut TypePool,
    scopes: &'a mut ScopeArena,
    root: ScopeId,
    interner: &'a StringInterner,
}

impl Installer<'_> {
    fn int(&mut self, name: &str, size: u32, unsigned: bool) -> TypeId {
        let name = self.interner.intern(name);
        let ty = self.pool.word(name, size, unsigned);
        self.scopes.create_type(self.root, name, ShareMarker::None, ty);
        ty
    }

    fn float(&mut self, name: &str, size: u32) -> TypeId {
        let name = self.interner.intern(name);
        let ty = self.pool.float(name, size);
        self.scopes.create_type(self.root, name, ShareMarker::None, ty);
        ty
    }

    fn named(&mut self, name: &str, ty: TypeId) {
        let name = self.interner.intern(name);
        self.scopes.create_type(self.root, name, ShareMarker::None, ty);
    }

    fn variable(&mut self, name: &str, kind: VarKind, ty: TypeId, value: Option<i64>) {
        let variable = Variable {
            name: self.interner.intern(name),
            share: ShareMarker::None,
            kind,
            ty,
            value,
        };
        self.scopes.create_variable(self.root, variable);
    }
}

impl Definitions {
    /// Build the builtin root scope.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn new(interner: &StringInterner) -> Self {
        let mut pool = TypePool::new();
        let mut scopes = ScopeArena::new();
        let root = scopes.enter_scope(None);
        let mut inst = Installer {
            pool: &mut pool,
            scopes: &mut scopes,
            root,
            interner,
        };

        let char = inst.int("char", 1, false);
        let bool_name = interner.intern("bool");
        let bool = inst.pool.boolean(bool_name);
        inst.named("bool", bool);
        let string_name = interner.intern("string");
        let string = inst.pool.array(Some(string_name), char);
        inst.named("string", string);

        let float = inst.float("float", 4);
        let double = inst.float("double", 8);
        let float32 = inst.float("float32", 4);
        let float64 = inst.float("float64", 8);

        let byte = inst.int("byte", 1, false);
        let short = inst.int("short", 2, false);
        let int = inst.int("int", 4, false);
        let long = inst.int("long", 8, false);
        let ubyte = inst.int("ubyte", 1, true);
        let ushort = inst.int("ushort", 2, true);
        let uint = inst.int("uint", 4, true);
        let ulong = inst.int("ulong", 8, true);
        let int8 = inst.int("int8", 1, false);
        let int16 = inst.int("int16", 2, false);
        let int32 = inst.int("int32", 4, false);
        let int64 = inst.int("int64", 8, false);
        let uint8 = inst.int("uint8", 1, true);
        let uint16 = inst.int("uint16", 2, true);
        let uint32 = inst.int("uint32", 4, true);
        let uint64 = inst.int("uint64", 8, true);
        let size_t = inst.int("size_t", 8, true);

        inst.variable("SEEK_SET", VarKind::Const, int, Some(0));
        inst.variable("SEEK_CUR", VarKind::Const, int, Some(1));
        inst.variable("SEEK_END", VarKind::Const, int, Some(2));

        let io_file = inst
            .pool
            .structure(interner.intern("struct._IO_FILE"), Vec::new(), 1, 1);
        let file = inst.pool.pointer(Some(io_file));
        inst.named("File", file);
        inst.variable("stdin", VarKind::Var, file, None);
        inst.variable("stdout", VarKind::Var, file, None);
        inst.variable("stderr", VarKind::Var, file, None);

        inst.variable("PATH_MAX", VarKind::Const, int, Some(PATH_MAX));
        inst.variable("WIN32", VarKind::Const, bool, Some(i64::from(cfg!(windows))));

        let opaque = inst.pool.pointer(None);
        let array_fields = vec![
            StructField {
                name: interner.intern("size"),
                ty: size_t,
                offset: 0,
            },
            StructField {
                name: interner.intern("value"),
                ty: opaque,
                offset: 8,
            },
        ];
        let (string_size, string_align) = {
            let data = inst.pool.get(string);
            (data.size, data.align)
        };
        let array = inst.pool.structure(
            interner.intern("Array"),
            array_fields,
            string_size,
            string_align,
        );

        let builtins = Builtins {
            char,
            bool,
            string,
            float,
            double,
            float32,
            float64,
            byte,
            short,
            int,
            long,
            ubyte,
            ushort,
            uint,
            ulong,
            int8,
            int16,
            int32,
            int64,
            uint8,
            uint16,
            uint32,
            uint64,
            size_t,
            io_file,
            file,
            array,
        };

        tracing::debug!(types = pool.len(), "builtin scope ready");
        Definitions {
            pool,
            scopes,
            builtins,
            root,
        }
    }

    /// The builtin root scope.
    #[inline]
    pub fn root(&self) -> ScopeId {
        self.root
    }

    /// Open a fresh module scope under the builtin root.
    pub fn enter_module_scope(&mut self) -> ScopeId {
        self.scopes.enter_scope(Some(self.root))
    }

    /// Install an exported function into the builtin root scope.
    pub fn create_function(
        &mut self,
        name: Name,
        params: Vec<Param>,
        returns: Vec<TypeId>,
        intrinsic: Option<Intrinsic>,
    ) -> TypeId {
        debug_assert!(
            params.iter().rev().skip(1).all(|p| !p.variadic),
            "only the last parameter may be variadic"
        );
        let ty = self.pool.function(FunctionType {
            params,
            returns,
            intrinsic,
        });
        self.scopes.create_function(
            self.root,
            Function {
                name,
                share: ShareMarker::Export,
                ty,
            },
        );
        ty
    }

    /// `*char`, the type of materialized string literals.
    pub fn char_pointer(&mut self) -> TypeId {
        self.pool.pointer(Some(self.builtins.char))
    }

    /// Intrinsic tag of `ty`, if it is an intrinsic function type.
    pub fn intrinsic_of(&self, ty: TypeId) -> Option<Intrinsic> {
        self.pool.as_function(ty).and_then(|f| f.intrinsic)
    }
}
