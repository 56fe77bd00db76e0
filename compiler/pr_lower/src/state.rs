//! Lowering state threaded through expression walking and macros.

use pr_diagnostic::{Diagnostic, DiagnosticSink, ErrorGuaranteed};
use pr_ir::{Name, StringInterner};
use pr_types::Definitions;

use crate::builder::FunctionBuilder;
use crate::ir::{IrModule, Value};

/// Mutable state for lowering one module.
///
/// Top-level statements are lowered into the module's implicit `main`;
/// [`State::enter_function`] switches to a named function until the
/// matching [`State::exit_function`].
pub struct State<'a> {
    pub defs: &'a mut Definitions,
    pub interner: &'a StringInterner,
    pub diagnostics: &'a mut DiagnosticSink,
    pub module: &'a mut IrModule,
    /// Builder of the function currently being lowered.
    pub builder: FunctionBuilder,
    current_function: Option<Name>,
    outer: Vec<(FunctionBuilder, Option<Name>)>,
}

impl<'a> State<'a> {
    pub fn new(
        defs: &'a mut Definitions,
        interner: &'a StringInterner,
        diagnostics: &'a mut DiagnosticSink,
        module: &'a mut IrModule,
    ) -> Self {
        let main = interner.intern("main");
        State {
            defs,
            interner,
            diagnostics,
            module,
            builder: FunctionBuilder::new(main),
            current_function: None,
            outer: Vec::new(),
        }
    }

    /// Unmangled name of the enclosing function, `None` at top level.
    pub fn current_function(&self) -> Option<Name> {
        self.current_function
    }

    /// Start lowering the body of function `name`.
    pub fn enter_function(&mut self, name: Name, unmangled: Name) {
        let outer = std::mem::replace(&mut self.builder, FunctionBuilder::new(name));
        let outer_fn = self.current_function.replace(unmangled);
        self.outer.push((outer, outer_fn));
    }

    /// Finish the current function and resume the enclosing one.
    pub fn exit_function(&mut self) {
        let Some((outer, outer_fn)) = self.outer.pop() else {
            tracing::warn!("exit_function called outside any function");
            return;
        };
        let body = std::mem::replace(&mut self.builder, outer).finish();
        self.module.functions.push(body);
        self.current_function = outer_fn;
    }

    /// Close every open function, including the implicit `main`.
    pub fn finish(mut self) {
        while !self.outer.is_empty() {
            self.exit_function();
        }
        let State {
            builder, module, ..
        } = self;
        module.functions.push(builder.finish());
    }

    /// Declare an external function the module calls. Idempotent.
    pub fn import_function(&mut self, name: &str) {
        let name = self.interner.intern(name);
        self.module.import(name);
    }

    /// Store `data` in a fresh module global of type `[len + 1 char]`.
    ///
    /// Returns a reference typed as a pointer to the array. Every call
    /// creates a new global, even for identical data.
    pub fn make_global(&mut self, data: &[u8]) -> Value {
        let length = data.len() as u64 + 1;
        let char = self.defs.builtins.char;
        let array = self.defs.pool.static_array(char, length);
        let ptr = self.defs.pool.pointer(Some(array));
        let name = self.interner.intern("str");
        let id = self.module.add_global(name, array, data.to_vec());
        Value::global(id, ptr)
    }

    /// Report an error diagnostic.
    pub fn error(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        self.diagnostics.emit_error(diag)
    }
}
