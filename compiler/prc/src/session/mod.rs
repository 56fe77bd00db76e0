//! Compilation sessions.
//!
//! A [`Session`] owns everything shared across the files of one build: the
//! interner, the global definition table, the diagnostic sink, and the
//! module cache. It is threaded by `&mut` through every stage, so the
//! compiler is single-threaded by construction.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pr_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode, ErrorGuaranteed, TerminalEmitter};
use pr_ir::{Import, ModulePath, SharedInterner, SourceLines, SourceMeta};
use pr_lower::{IrModule, State};
use pr_types::{Definitions, ScopeId};
use tracing::debug;

use crate::config::{EmissionPolicy, SessionConfig};
use crate::resolve::ModuleResolver;
use crate::source::read_source;
use crate::{ModuleCache, Stages};

/// Outcome of a session, returned by [`Session::finish`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionReport {
    /// Files handed to code generation, in emission order.
    pub emitted: Vec<PathBuf>,
    /// Files compiled but withheld from code generation because of errors.
    pub skipped: Vec<PathBuf>,
    pub error_count: usize,
}

impl SessionReport {
    pub fn succeeded(&self) -> bool {
        self.error_count == 0
    }
}

pub struct Session {
    config: SessionConfig,
    resolver: ModuleResolver,
    interner: SharedInterner,
    defs: Definitions,
    diagnostics: DiagnosticSink,
    cache: ModuleCache,
    /// Modules held back under [`EmissionPolicy::SessionEnd`].
    deferred: Vec<IrModule>,
    emitted: Vec<PathBuf>,
    skipped: Vec<PathBuf>,
}

impl Session {
    /// Create a session reporting diagnostics to stderr.
    pub fn new(config: SessionConfig) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        let emitter = TerminalEmitter::stderr(config.color, is_tty);
        Self::with_sink(config, DiagnosticSink::with_emitter(Box::new(emitter)))
    }

    /// Create a session reporting into `diagnostics`.
    pub fn with_sink(config: SessionConfig, diagnostics: DiagnosticSink) -> Self {
        let interner = SharedInterner::new();
        let mut defs = Definitions::new(&interner);
        pr_lower::intrinsics::install(&mut defs, &interner);
        Session {
            resolver: ModuleResolver::new(config.include_paths.clone()),
            config,
            interner,
            defs,
            diagnostics,
            cache: ModuleCache::new(),
            deferred: Vec::new(),
            emitted: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn resolver(&self) -> &ModuleResolver {
        &self.resolver
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn defs(&self) -> &Definitions {
        &self.defs
    }

    pub fn defs_mut(&mut self) -> &mut Definitions {
        &mut self.defs
    }

    pub fn diagnostics(&self) -> &DiagnosticSink {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut DiagnosticSink {
        &mut self.diagnostics
    }

    pub fn cache(&self) -> &ModuleCache {
        &self.cache
    }

    /// Errors reported so far, by any stage of any module.
    pub fn error_count(&self) -> usize {
        self.diagnostics.error_count()
    }

    /// Compile the module at `path` unless it already was, and return its
    /// scope.
    ///
    /// `None` if the module cannot be found or its file cannot be read.
    /// Reporting an unresolved import is left to the caller, which knows
    /// where the import was written (see [`Session::unresolved_import`]).
    #[tracing::instrument(level = "debug", skip_all, fields(module = tracing::field::Empty))]
    pub fn compile_module<S: Stages + ?Sized>(
        &mut self,
        stages: &mut S,
        path: &ModulePath,
    ) -> Option<ScopeId> {
        let dotted = path.dotted(&self.interner);
        tracing::Span::current().record("module", dotted.as_str());

        let Some(file) = self.resolver.resolve(path, &self.interner) else {
            debug!("module not found");
            return None;
        };
        if let Some(scope) = self.cache.get(&file) {
            debug!(file = %file.display(), ?scope, "cache hit");
            return Some(scope);
        }
        self.compile_file(stages, &file, &dotted);
        self.cache.get(&file)
    }

    /// Run the whole pipeline on one file, unless it was already compiled.
    ///
    /// The module's scope is cached before type checking, so imports that
    /// lead back to this file see the scope being filled. A file that
    /// cannot be read is reported and leaves no cache entry.
    #[tracing::instrument(level = "debug", skip_all, fields(file = %path.display(), module = %module))]
    pub fn compile_file<S: Stages + ?Sized>(&mut self, stages: &mut S, path: &Path, module: &str) {
        if let Some(scope) = self.cache.get(path) {
            debug!(?scope, "cache hit");
            return;
        }

        let text = match read_source(path) {
            Ok(text) => text,
            Err(err) => {
                self.diagnostics.emit_error(err.to_diagnostic());
                return;
            }
        };

        let lines = SourceLines::split(&text);
        let tokens = stages.lex(&text);
        let meta = Arc::new(SourceMeta::new(path, module, lines));
        let mut ast = stages.parse(tokens, meta, self);

        let scope = self.defs.enter_module_scope();
        self.cache.insert(path.to_path_buf(), scope);

        stages.typecheck(&mut ast, scope, self);
        let ir = stages.compile(&ast, scope, self);
        self.gate(stages, ir);
    }

    fn gate<S: Stages + ?Sized>(&mut self, stages: &mut S, ir: IrModule) {
        match self.config.emission {
            EmissionPolicy::PerModule => {
                let errors = self.error_count();
                if errors == 0 {
                    debug!(file = %ir.path.display(), "emitting");
                    stages.codegen(&ir, self);
                    self.emitted.push(ir.path);
                } else {
                    debug!(file = %ir.path.display(), errors, "skipping codegen");
                    self.skipped.push(ir.path);
                }
            }
            EmissionPolicy::SessionEnd => {
                debug!(file = %ir.path.display(), "deferring codegen");
                self.deferred.push(ir);
            }
        }
    }

    /// Report that `import` in the module described by `meta` resolved to
    /// nothing. Every searched location is listed as a note.
    pub fn unresolved_import(&mut self, meta: &SourceMeta, import: &Import) -> ErrorGuaranteed {
        let dotted = import.path.dotted(&self.interner);
        let mut diag = Diagnostic::error(ErrorCode::E1001)
            .with_message(format!("Module {dotted} not found"))
            .at(meta, import.loc);
        for candidate in self.resolver.candidates(&import.path, &self.interner) {
            diag = diag.with_note(format!("searched: {}", candidate.display()));
        }
        self.diagnostics.emit_error(diag)
    }

    /// Lowering state for compiling one module into `module`.
    pub fn lower_state<'s>(&'s mut self, module: &'s mut IrModule) -> State<'s> {
        State::new(&mut self.defs, &self.interner, &mut self.diagnostics, module)
    }

    /// End the session: release deferred modules if the build is clean, and
    /// flush diagnostics.
    pub fn finish<S: Stages + ?Sized>(mut self, stages: &mut S) -> SessionReport {
        let deferred = std::mem::take(&mut self.deferred);
        if self.error_count() == 0 {
            for ir in deferred {
                debug!(file = %ir.path.display(), "emitting deferred module");
                stages.codegen(&ir, &mut self);
                self.emitted.push(ir.path);
            }
        } else {
            debug!(count = deferred.len(), "dropping deferred modules");
            self.skipped.extend(deferred.into_iter().map(|ir| ir.path));
        }

        self.diagnostics.flush();
        SessionReport {
            emitted: self.emitted,
            skipped: self.skipped,
            error_count: self.diagnostics.error_count(),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("cache", &self.cache)
            .field("error_count", &self.error_count())
            .finish_non_exhaustive()
    }
}
