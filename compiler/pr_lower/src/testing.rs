//! Test-only expression lowering and module fixture.

use std::sync::Arc;

use pr_diagnostic::DiagnosticSink;
use pr_ir::{ExprId, ExprKind, Loc, Module, SourceLines, SourceMeta, StringInterner, TypeId};
use pr_types::Definitions;

use crate::intrinsics::{self, lower_intrinsic_call, Expansion};
use crate::ir::{Insn, IrModule, Value};
use crate::{CallSite, ExprLowering, State};

/// Lowers literals, typed identifiers and calls; enough to drive macros.
pub(crate) struct LiteralLowering;

impl ExprLowering for LiteralLowering {
    fn lower_expr(&mut self, ast: &Module, expr: ExprId, state: &mut State<'_>) -> Option<Value> {
        let node = ast.arena.get_expr(expr);
        let ty = ast.arena.type_of(expr);
        let b = state.defs.builtins;
        match &node.kind {
            ExprKind::Int(i) => Some(Value::int(*i, ty.unwrap_or(b.int))),
            ExprKind::Bool(v) => Some(Value::int(i64::from(*v), b.bool)),
            ExprKind::Char(c) => Some(Value::int(i64::from(*c), b.char)),
            ExprKind::Float(bits) => Some(Value::int(
                i64::from_ne_bytes(bits.to_ne_bytes()),
                ty.unwrap_or(b.float64),
            )),
            ExprKind::Str(text) => {
                let bytes = state.interner.lookup(*text).as_bytes();
                let global = state.make_global(bytes);
                let array = state.defs.pool.static_array(b.char, bytes.len() as u64 + 1);
                Some(Value::string(*text, array).with_addr(global))
            }
            ExprKind::Ident(_) => ty.map(|ty| state.builder.fresh_local(ty)),
            ExprKind::Call { .. } => {
                let site = CallSite::new(ast, expr)?;
                let callee_ty = state
                    .defs
                    .scopes
                    .lookup_function(state.module.scope, site.callee)?
                    .ty;
                match lower_intrinsic_call(&site, callee_ty, state, self) {
                    Expansion::Expanded(value) => value,
                    Expansion::NotIntrinsic => {
                        let mut args = Vec::with_capacity(site.args.len());
                        for &arg in site.args {
                            args.push(self.lower_expr(ast, arg, state)?);
                        }
                        let ret_ty = state
                            .defs
                            .pool
                            .as_function(callee_ty)
                            .and_then(|f| f.returns.first().copied());
                        let ret = ret_ty.map(|ty| state.builder.fresh_local(ty));
                        state.builder.push(Insn::Call {
                            callee: site.callee,
                            ret: ret.clone(),
                            args,
                            proto: None,
                        });
                        ret
                    }
                }
            }
        }
    }
}

/// One source file plus everything needed to lower it.
pub(crate) struct Fixture {
    pub interner: StringInterner,
    pub defs: Definitions,
    pub sink: DiagnosticSink,
    pub ast: Module,
    pub ir: IrModule,
}

impl Fixture {
    pub fn new(source: &str) -> Self {
        let interner = StringInterner::new();
        let mut defs = Definitions::new(&interner);
        intrinsics::install(&mut defs, &interner);
        let scope = defs.enter_module_scope();
        let meta = SourceMeta::new("test.pr", "test", SourceLines::split(source));
        Fixture {
            interner,
            defs,
            sink: DiagnosticSink::new(),
            ast: Module::new(Arc::new(meta)),
            ir: IrModule::new("test.pr", "test", scope),
        }
    }

    pub fn expr(&mut self, kind: ExprKind, ty: Option<TypeId>, line: u32) -> ExprId {
        let id = self.ast.arena.alloc_expr(kind, Loc::new(line, 0));
        if let Some(ty) = ty {
            self.ast.arena.set_type(id, ty);
        }
        id
    }

    pub fn int(&mut self, value: i64, ty: TypeId) -> ExprId {
        self.expr(ExprKind::Int(value), Some(ty), 1)
    }

    pub fn boolean(&mut self, value: bool) -> ExprId {
        let ty = self.defs.builtins.bool;
        self.expr(ExprKind::Bool(value), Some(ty), 1)
    }

    pub fn str_lit(&mut self, text: &str) -> ExprId {
        let name = self.interner.intern(text);
        let char = self.defs.builtins.char;
        let ty = self.defs.pool.static_array(char, text.len() as u64 + 1);
        self.expr(ExprKind::Str(name), Some(ty), 1)
    }

    pub fn ident(&mut self, name: &str, ty: Option<TypeId>) -> ExprId {
        let name = self.interner.intern(name);
        self.expr(ExprKind::Ident(name), ty, 1)
    }

    pub fn call(&mut self, callee: &str, args: &[ExprId], line: u32) -> ExprId {
        let callee = self.interner.intern(callee);
        let args = self.ast.arena.alloc_list(args.iter().copied());
        self.expr(ExprKind::Call { callee, args }, None, line)
    }

    /// Lower `stmts` as top-level statements; returns each statement's value.
    pub fn lower(&mut self, stmts: &[ExprId]) -> Vec<Option<Value>> {
        self.lower_in(None, stmts)
    }

    /// Lower `stmts` inside function `name`.
    pub fn lower_in(&mut self, function: Option<&str>, stmts: &[ExprId]) -> Vec<Option<Value>> {
        let mut state = State::new(&mut self.defs, &self.interner, &mut self.sink, &mut self.ir);
        if let Some(name) = function {
            let unmangled = self.interner.intern(name);
            let mangled = self.interner.intern(&format!("test::{name}"));
            state.enter_function(mangled, unmangled);
        }
        let mut lowering = LiteralLowering;
        let values = stmts
            .iter()
            .map(|&stmt| lowering.lower_expr(&self.ast, stmt, &mut state))
            .collect();
        state.finish();
        values
    }

    /// Instructions of the first finished function.
    pub fn insns(&self) -> &[Insn] {
        self.ir.functions.first().map_or(&[], |f| f.insns.as_slice())
    }

    pub fn dump(&self) -> String {
        self.ir.dump(&self.defs.pool, &self.interner).to_string()
    }
}
