use super::*;
use pr_ir::{Name, StringInterner};
use pretty_assertions::assert_eq;

use crate::{Intrinsic, Param};

struct Fixture {
    interner: StringInterner,
    pool: TypePool,
}

impl Fixture {
    fn new() -> Self {
        Fixture {
            interner: StringInterner::new(),
            pool: TypePool::new(),
        }
    }

    fn word(&mut self, name: &str, size: u32, unsigned: bool) -> TypeId {
        let name = self.interner.intern(name);
        self.pool.word(name, size, unsigned)
    }

    fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }
}

#[test]
fn words_compare_by_size_and_signedness() {
    let mut f = Fixture::new();
    let int = f.word("int", 4, false);
    let int32 = f.word("int32", 4, false);
    let uint32 = f.word("uint32", 4, true);
    let long = f.word("long", 8, false);

    assert!(f.pool.equals(int, int32));
    assert!(!f.pool.equals(int, uint32));
    assert!(!f.pool.equals(int, long));
}

#[test]
fn pointers_and_static_arrays_are_interned() {
    let mut f = Fixture::new();
    let char = f.word("char", 1, false);
    let p1 = f.pool.pointer(Some(char));
    let p2 = f.pool.pointer(Some(char));
    assert_eq!(p1, p2);

    let a1 = f.pool.static_array(char, 6);
    let a2 = f.pool.static_array(char, 6);
    let a3 = f.pool.static_array(char, 7);
    assert_eq!(a1, a2);
    assert_ne!(a1, a3);
    assert_eq!(f.pool.size_of(a1), 6);
}

#[test]
fn pointer_equality_follows_pointee() {
    let mut f = Fixture::new();
    let char = f.word("char", 1, false);
    let int8 = f.word("int8", 1, false);
    let pc = f.pool.pointer(Some(char));
    let pi = f.pool.pointer(Some(int8));
    let opaque = f.pool.pointer(None);
    let opaque_again = f.pool.pointer(None);

    assert!(f.pool.equals(pc, pi));
    assert!(!f.pool.equals(pc, opaque));
    assert!(f.pool.equals(opaque, opaque_again));
    assert!(f.pool.is_pointer(opaque));
    assert!(!f.pool.is_pointer(char));
}

#[test]
fn static_arrays_compare_element_and_length() {
    let mut f = Fixture::new();
    let char = f.word("char", 1, false);
    let int8 = f.word("int8", 1, false);
    let a = f.pool.static_array(char, 3);
    let b = f.pool.static_array(int8, 3);
    let c = f.pool.static_array(char, 4);
    assert!(f.pool.equals(a, b));
    assert!(!f.pool.equals(a, c));
    assert!(f.pool.is_static_array_of(a, char));
    assert!(!f.pool.is_static_array_of(char, char));
}

#[test]
fn structs_and_functions_are_nominal() {
    let mut f = Fixture::new();
    let point = f.name("Point");
    let s1 = f.pool.structure(point, Vec::new(), 0, 1);
    let s2 = f.pool.structure(point, Vec::new(), 0, 1);
    assert!(f.pool.equals(s1, s1));
    assert!(!f.pool.equals(s1, s2));

    let sig = FunctionType {
        params: Vec::new(),
        returns: Vec::new(),
        intrinsic: None,
    };
    let f1 = f.pool.function(sig.clone());
    let f2 = f.pool.function(sig);
    assert!(!f.pool.equals(f1, f2));
}

#[test]
fn bool_equals_bool() {
    let mut f = Fixture::new();
    let (bool_name, flag_name) = (f.name("bool"), f.name("flag"));
    let b1 = f.pool.boolean(bool_name);
    let b2 = f.pool.boolean(flag_name);
    let char = f.word("char", 1, false);
    assert!(f.pool.equals(b1, b2));
    assert!(!f.pool.equals(b1, char));
}

#[test]
fn display_renders_names_and_shapes() {
    let mut f = Fixture::new();
    let char = f.word("char", 1, false);
    let int = f.word("int", 4, false);
    let pc = f.pool.pointer(Some(char));
    let arr = f.pool.static_array(char, 5);
    let opaque = f.pool.pointer(None);
    let print = f.pool.function(FunctionType {
        params: vec![Param::varargs(Name::EMPTY, None)],
        returns: vec![int],
        intrinsic: Some(Intrinsic::Print),
    });
    let assertion = f.name("assertion");
    let assert_fn = f.pool.function(FunctionType {
        params: vec![Param::new(assertion, char)],
        returns: Vec::new(),
        intrinsic: Some(Intrinsic::Assert),
    });

    assert_eq!(f.pool.display(pc, &f.interner), "*char");
    assert_eq!(f.pool.display(arr, &f.interner), "[5 char]");
    assert_eq!(f.pool.display(opaque, &f.interner), "*");
    assert_eq!(f.pool.display(print, &f.interner), "def (...) -> int");
    assert_eq!(f.pool.display(assert_fn, &f.interner), "def (char)");
}
