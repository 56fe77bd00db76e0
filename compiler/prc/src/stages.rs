//! The contract between the session and the language front/back ends.

use std::sync::Arc;

use pr_ir::{Module, SourceMeta};
use pr_lower::IrModule;
use pr_types::ScopeId;

use crate::Session;

/// The per-file pipeline the [`Session`] drives.
///
/// Each stage reports problems through `session.diagnostics_mut()`; a stage
/// never aborts the session. [`Stages::typecheck`] resolves imports by
/// calling back into [`Session::compile_module`], and
/// [`Stages::compile`] routes intrinsic calls through
/// [`pr_lower::lower_intrinsic_call`].
pub trait Stages {
    type Tokens;

    fn lex(&mut self, text: &str) -> Self::Tokens;

    fn parse(
        &mut self,
        tokens: Self::Tokens,
        meta: Arc<SourceMeta>,
        session: &mut Session,
    ) -> Module;

    fn typecheck(&mut self, module: &mut Module, scope: ScopeId, session: &mut Session);

    fn compile(&mut self, module: &Module, scope: ScopeId, session: &mut Session) -> IrModule;

    /// Produce the final artifact. Only called for modules the emission
    /// gate lets through.
    fn codegen(&mut self, module: &IrModule, session: &mut Session);
}
