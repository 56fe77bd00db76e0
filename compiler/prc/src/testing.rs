//! A line-based toy language standing in for the real front and back ends.
//!
//! ```text
//! import a.b          # resolved during typecheck
//! print 42, "text"    # int, string and bool literals
//! assert false
//! error bad thing     # typecheck reports E2001 with this message
//! fn check            # function body until `end`
//! end
//! ```

use std::sync::Arc;

use pr_diagnostic::{Diagnostic, ErrorCode};
use pr_ir::{ExprId, ExprKind, FunctionDef, Import, Loc, Module, ModulePath, SourceMeta};
use pr_lower::{lower_intrinsic_call, CallSite, Expansion, ExprLowering, Insn, IrModule, State, Value};
use pr_types::ScopeId;

use crate::{Session, Stages};

#[derive(Default)]
pub(crate) struct ScriptStages {
    /// Number of files lexed.
    pub lexed: usize,
    /// Every import seen during typecheck, with what it resolved to.
    pub imports: Vec<(String, Option<ScopeId>)>,
    /// `(module, IR dump)` for each module handed to codegen.
    pub emitted: Vec<(String, String)>,
}

impl ScriptStages {
    pub fn emitted_modules(&self) -> Vec<&str> {
        self.emitted.iter().map(|(m, _)| m.as_str()).collect()
    }
}

fn literal(text: &str, loc: Loc, module: &mut Module, session: &Session) -> ExprId {
    let kind = if let Ok(i) = text.parse::<i64>() {
        ExprKind::Int(i)
    } else if text == "true" || text == "false" {
        ExprKind::Bool(text == "true")
    } else {
        let text = text.trim_matches('"');
        ExprKind::Str(session.interner().intern(text))
    };
    module.arena.alloc_expr(kind, loc)
}

fn call(callee: &str, args: Vec<ExprId>, loc: Loc, module: &mut Module, session: &Session) -> ExprId {
    let callee = session.interner().intern(callee);
    let args = module.arena.alloc_list(args);
    module.arena.alloc_expr(ExprKind::Call { callee, args }, loc)
}

impl Stages for ScriptStages {
    type Tokens = Vec<String>;

    fn lex(&mut self, text: &str) -> Vec<String> {
        self.lexed += 1;
        text.lines().map(str::to_owned).collect()
    }

    fn parse(&mut self, tokens: Vec<String>, meta: Arc<SourceMeta>, session: &mut Session) -> Module {
        let module_name = meta.module.clone();
        let mut module = Module::new(meta);
        let mut function: Option<FunctionDef> = None;

        for (index, line) in tokens.iter().enumerate() {
            let loc = Loc::new(index as u32 + 1, 0);
            let line = line.trim();
            let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
            let rest = rest.trim();
            let stmt = match word {
                "import" => {
                    let path = ModulePath::parse(rest, session.interner());
                    module.imports.push(Import { path, loc });
                    continue;
                }
                "fn" => {
                    let interner = session.interner();
                    function = Some(FunctionDef {
                        name: interner.intern(&format!("{module_name}::{rest}")),
                        unmangled: interner.intern(rest),
                        loc,
                        body: Vec::new(),
                    });
                    continue;
                }
                "end" => {
                    module.functions.extend(function.take());
                    continue;
                }
                "print" | "assert" => {
                    let args = rest
                        .split(',')
                        .map(str::trim)
                        .filter(|arg| !arg.is_empty())
                        .map(|arg| literal(arg, loc, &mut module, session))
                        .collect();
                    call(word, args, loc, &mut module, session)
                }
                "error" => {
                    let message = module.arena.alloc_expr(
                        ExprKind::Str(session.interner().intern(rest)),
                        loc,
                    );
                    call("error", vec![message], loc, &mut module, session)
                }
                _ => continue,
            };
            match &mut function {
                Some(f) => f.body.push(stmt),
                None => module.body.push(stmt),
            }
        }
        module
    }

    fn typecheck(&mut self, module: &mut Module, _scope: ScopeId, session: &mut Session) {
        for import in &module.imports {
            let scope = session.compile_module(self, &import.path);
            self.imports
                .push((import.path.dotted(session.interner()), scope));
            if scope.is_none() {
                session.unresolved_import(&module.meta, import);
            }
        }

        let error = session.interner().intern("error");
        let b = session.defs().builtins;
        for index in 0..module.arena.len() {
            let id = ExprId::new(index as u32);
            let node = module.arena.get_expr(id).clone();
            let ty = match node.kind {
                ExprKind::Int(_) => b.int,
                ExprKind::Bool(_) => b.bool,
                ExprKind::Str(text) => {
                    let len = session.interner().lookup(text).len() as u64 + 1;
                    session.defs_mut().pool.static_array(b.char, len)
                }
                ExprKind::Call { callee, args } if callee == error => {
                    let message = match module.arena.get_list(args).first() {
                        Some(&arg) => match module.arena.get_expr(arg).kind {
                            ExprKind::Str(text) => session.interner().lookup(text),
                            _ => "",
                        },
                        None => "",
                    };
                    let diag = Diagnostic::error(ErrorCode::E2001)
                        .with_message(message)
                        .at(&module.meta, node.loc);
                    session.diagnostics_mut().emit_error(diag);
                    continue;
                }
                _ => continue,
            };
            module.arena.set_type(id, ty);
        }
    }

    fn compile(&mut self, module: &Module, scope: ScopeId, session: &mut Session) -> IrModule {
        let mut ir = IrModule::new(module.meta.path.clone(), module.meta.module.clone(), scope);
        let mut state = session.lower_state(&mut ir);
        for function in &module.functions {
            state.enter_function(function.name, function.unmangled);
            for &stmt in &function.body {
                self.lower_expr(module, stmt, &mut state);
            }
            state.exit_function();
        }
        for &stmt in &module.body {
            self.lower_expr(module, stmt, &mut state);
        }
        state.finish();
        ir
    }

    fn codegen(&mut self, module: &IrModule, session: &mut Session) {
        let dump = module.dump(&session.defs().pool, session.interner()).to_string();
        self.emitted.push((module.module.clone(), dump));
    }
}

impl ExprLowering for ScriptStages {
    fn lower_expr(&mut self, ast: &Module, expr: ExprId, state: &mut State<'_>) -> Option<Value> {
        let node = ast.arena.get_expr(expr);
        let ty = ast.arena.type_of(expr);
        match &node.kind {
            ExprKind::Int(i) => Some(Value::int(*i, ty?)),
            ExprKind::Bool(v) => Some(Value::int(i64::from(*v), ty?)),
            ExprKind::Str(text) => {
                let ty = ty?;
                let bytes = state.interner.lookup(*text).as_bytes();
                let global = state.make_global(bytes);
                Some(Value::string(*text, ty).with_addr(global))
            }
            ExprKind::Call { .. } => lower_call(self, ast, expr, state),
            _ => None,
        }
    }
}

fn lower_call(
    lowering: &mut ScriptStages,
    ast: &Module,
    expr: ExprId,
    state: &mut State<'_>,
) -> Option<Value> {
    let site = CallSite::new(ast, expr)?;
    let callee_ty = state
        .defs
        .scopes
        .lookup_function(state.module.scope, site.callee)?
        .ty;
    match lower_intrinsic_call(&site, callee_ty, state, lowering) {
        Expansion::Expanded(value) => value,
        Expansion::NotIntrinsic => {
            state.builder.push(Insn::Call {
                callee: site.callee,
                ret: None,
                args: Vec::new(),
                proto: None,
            });
            None
        }
    }
}
