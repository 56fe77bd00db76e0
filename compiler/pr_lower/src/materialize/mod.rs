//! Literal materialization and format specifiers.
//!
//! Materialization turns compile-time text into a runtime `*char`: the
//! bytes go into a fresh module global, and a `gep [0, 0]` against that
//! global yields a pointer to the first character.

use pr_ir::TypeId;
use pr_types::{Definitions, Type};
use smallvec::smallvec;

use crate::ir::{Insn, Value};
use crate::State;

/// Materialize `text` as a NUL-terminated global and return a `*char` to it.
pub fn charp(text: &[u8], state: &mut State<'_>) -> Value {
    let global = state.make_global(text);
    let length = text.len() as u64 + 1;
    let char = state.defs.builtins.char;
    let array = state.defs.pool.static_array(char, length);
    first_element(&global, array, state)
}

/// Decay the address of a fixed char array to a `*char`.
///
/// Returns `None` if `addr` is not typed as a pointer to an array.
pub fn charp_static(addr: &Value, state: &mut State<'_>) -> Option<Value> {
    let array = match addr.ty.map(|ty| state.defs.pool.kind(ty)) {
        Some(Type::Pointer { pointee: Some(p) }) => *p,
        _ => return None,
    };
    Some(first_element(addr, array, state))
}

/// Extract the buffer pointer (field 1) of a native `string`.
pub fn charp_str(value: Value, state: &mut State<'_>) -> Value {
    let char_ptr = state.defs.char_pointer();
    let ret = state.builder.fresh_local(char_ptr);
    state.builder.push(Insn::ExtractValue {
        ret: ret.clone(),
        value,
        index: smallvec![1],
    });
    ret
}

fn first_element(base: &Value, array: TypeId, state: &mut State<'_>) -> Value {
    let char_ptr = state.defs.char_pointer();
    let int = state.defs.builtins.int;
    let ret = state.builder.fresh_local(char_ptr).with_addr(base.clone());
    state.builder.push(Insn::Gep {
        ret: ret.clone(),
        ty: array,
        base: base.clone(),
        index: smallvec![Value::int(0, int), Value::int(0, int)],
    });
    ret
}

/// printf conversion for a value of static type `ty`, or `None` if the
/// type cannot be printed.
///
/// `size_t` and `char` are matched by identity before any structural
/// comparison, since `char` is structurally `int8` and `size_t` is
/// structurally `uint64`.
pub fn format_specifier(ty: TypeId, defs: &Definitions) -> Option<&'static str> {
    let b = &defs.builtins;
    let pool = &defs.pool;

    if ty == b.size_t {
        return Some("%zu");
    }
    if ty == b.char {
        return Some("%c");
    }
    let is_char_ptr = matches!(
        pool.kind(ty),
        Type::Pointer { pointee: Some(p) } if pool.equals(*p, b.char)
    );
    if pool.equals(ty, b.string) || is_char_ptr || pool.is_static_array_of(ty, b.char) {
        return Some("%s");
    }
    if pool.is_pointer(ty) {
        return Some("%p");
    }

    let table = [
        (b.int8, "%hhd"),
        (b.uint8, "%hhu"),
        (b.int16, "%hd"),
        (b.uint16, "%hu"),
        (b.int32, "%d"),
        (b.uint32, "%u"),
        (b.int64, "%ld"),
        (b.uint64, "%lu"),
        (b.float32, "%f"),
        (b.float64, "%f"),
    ];
    table
        .iter()
        .find(|(candidate, _)| pool.equals(ty, *candidate))
        .map(|(_, spec)| *spec)
}
