//! Princess IR - shared data types for the compiler core.
//!
//! This crate contains the data structures every other compiler layer
//! agrees on:
//! - `Name` and the string interner for identifiers
//! - `TypeId` handles into the session's type pool
//! - Source locations and the per-file line array used for diagnostics
//! - Dotted module paths (`std.io`)
//! - The AST produced by the parser, with arena-allocated expressions
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32), Types → TypeId(u32)
//! - **Flatten Everything**: No Box<Expr>, use ExprId(u32) indices
//! - **Nothing is freed individually**: arenas live as long as the session

pub mod ast;
mod interner;
mod module_path;
mod name;
mod source;
mod type_id;

pub use ast::{Expr, ExprArena, ExprId, ExprKind, ExprRange, FunctionDef, Import, Module};
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use module_path::ModulePath;
pub use name::Name;
pub use source::{Loc, SourceLines, SourceMeta};
pub use type_id::TypeId;
