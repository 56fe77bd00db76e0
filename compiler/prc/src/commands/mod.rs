//! Subcommands of the `prc` binary.

mod explain;
mod resolve;

pub use explain::{explain_error, explanation};
pub use resolve::resolve_module;
