//! The seam between intrinsic macros and the general expression walker.

use pr_ir::{ExprId, ExprKind, Loc, Module, Name};

use crate::ir::Value;
use crate::State;

/// Lowers arbitrary expressions. Implemented by the compiler proper.
///
/// Returns `None` for expressions that produce no value, or when lowering
/// failed (the implementation reports the error).
pub trait ExprLowering {
    fn lower_expr(&mut self, ast: &Module, expr: ExprId, state: &mut State<'_>) -> Option<Value>;
}

/// A call expression as seen by a macro.
#[derive(Clone, Copy, Debug)]
pub struct CallSite<'m> {
    pub ast: &'m Module,
    pub expr: ExprId,
    pub callee: Name,
    pub args: &'m [ExprId],
    pub loc: Loc,
}

impl<'m> CallSite<'m> {
    /// View `expr` as a call, or `None` if it is not one.
    pub fn new(ast: &'m Module, expr: ExprId) -> Option<Self> {
        let node = ast.arena.get_expr(expr);
        match &node.kind {
            ExprKind::Call { callee, args } => Some(CallSite {
                ast,
                expr,
                callee: *callee,
                args: ast.arena.get_list(*args),
                loc: node.loc,
            }),
            _ => None,
        }
    }

    /// Location of argument `i`.
    pub fn arg_loc(&self, i: usize) -> Loc {
        self.args
            .get(i)
            .map_or(self.loc, |id| self.ast.arena.get_expr(*id).loc)
    }
}
