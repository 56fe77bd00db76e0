use super::*;
use crate::{SourceLines, StringInterner};
use pretty_assertions::assert_eq;

#[test]
fn call_arguments_are_flattened() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let a = arena.alloc_expr(ExprKind::Int(1), Loc::new(1, 6));
    let b = arena.alloc_expr(ExprKind::Bool(true), Loc::new(1, 9));
    let args = arena.alloc_list([a, b]);
    let call = arena.alloc_expr(
        ExprKind::Call {
            callee: interner.intern("print"),
            args,
        },
        Loc::new(1, 0),
    );

    let ExprKind::Call { args, .. } = &arena.get_expr(call).kind else {
        panic!("expected a call");
    };
    assert_eq!(arena.get_list(*args), &[a, b]);
    assert_eq!(arena.len(), 3);
}

#[test]
fn empty_list_has_empty_range() {
    let mut arena = ExprArena::new();
    let range = arena.alloc_list([]);
    assert!(range.is_empty());
    assert_eq!(arena.get_list(range), &[] as &[ExprId]);
}

#[test]
fn types_start_unresolved() {
    let mut arena = ExprArena::new();
    let id = arena.alloc_expr(ExprKind::Int(3), Loc::default());
    assert_eq!(arena.type_of(id), None);
    arena.set_type(id, TypeId::from_raw(7));
    assert_eq!(arena.type_of(id), Some(TypeId::from_raw(7)));
}

#[test]
fn module_starts_empty() {
    let meta = SourceMeta::new("main.pr", "main", SourceLines::split("print 1"));
    let module = Module::new(Arc::new(meta));
    assert!(module.arena.is_empty());
    assert!(module.body.is_empty());
    assert_eq!(module.meta.filename(), "main.pr");
}
