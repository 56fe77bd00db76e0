use super::*;
use pretty_assertions::assert_eq;

fn name(raw: u32) -> Name {
    Name::from_raw(raw)
}

#[test]
fn lookup_walks_parent_chain() {
    let mut arena = ScopeArena::new();
    let root = arena.enter_scope(None);
    let child = arena.enter_scope(Some(root));
    let grandchild = arena.enter_scope(Some(child));

    arena.create_type(root, name(1), ShareMarker::None, TypeId::from_raw(10));
    arena.create_type(child, name(2), ShareMarker::Export, TypeId::from_raw(20));

    assert_eq!(arena.lookup_type(grandchild, name(1)), Some(TypeId::from_raw(10)));
    assert_eq!(arena.lookup_type(grandchild, name(2)), Some(TypeId::from_raw(20)));
    assert_eq!(arena.lookup_type(root, name(2)), None);
    assert_eq!(arena.get(grandchild).parent(), Some(child));
    assert_eq!(arena.get(root).parent(), None);
}

#[test]
fn inner_declaration_shadows_outer() {
    let mut arena = ScopeArena::new();
    let root = arena.enter_scope(None);
    let child = arena.enter_scope(Some(root));
    let var = |ty: u32| Variable {
        name: name(5),
        share: ShareMarker::None,
        kind: VarKind::Var,
        ty: TypeId::from_raw(ty),
        value: None,
    };
    arena.create_variable(root, var(1));
    arena.create_variable(child, var(2));

    assert_eq!(
        arena.lookup_variable(child, name(5)).map(|v| v.ty),
        Some(TypeId::from_raw(2))
    );
    assert_eq!(
        arena.lookup_variable(root, name(5)).map(|v| v.ty),
        Some(TypeId::from_raw(1))
    );
}

#[test]
fn exported_functions_filters_share_marker() {
    let mut arena = ScopeArena::new();
    let root = arena.enter_scope(None);
    arena.create_function(
        root,
        Function {
            name: name(1),
            share: ShareMarker::Export,
            ty: TypeId::from_raw(0),
        },
    );
    arena.create_function(
        root,
        Function {
            name: name(2),
            share: ShareMarker::None,
            ty: TypeId::from_raw(1),
        },
    );
    let exported: Vec<Name> = arena.get(root).exported_functions().map(|f| f.name).collect();
    assert_eq!(exported, vec![name(1)]);
}
