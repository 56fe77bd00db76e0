//! Princess compiler driver.
//!
//! Resolves dotted module names to files, drives each file through the
//! external stages (lex, parse, typecheck, compile, codegen) exactly once
//! per session, and gates code emission on the session error count.
//!
//! # Architecture
//!
//! - [`ModuleResolver`]: `a.b.c` → `<include root>/a/b/c.pr`, first hit wins
//! - [`ModuleCache`]: resolved path → module scope, filled before typecheck
//! - [`Session`]: the orchestrator; owns definitions, diagnostics and cache
//! - [`Stages`]: the contract the lexer/parser/checker/backend implement

mod cache;
pub mod commands;
mod config;
mod resolve;
mod session;
mod source;
mod stages;

#[cfg(test)]
mod testing;

pub use cache::ModuleCache;
pub use config::{ConfigError, EmissionPolicy, SessionConfig, INCLUDE_PATH_ENV, OPTIONS_HELP};
pub use resolve::{ModuleResolver, SOURCE_EXTENSION};
pub use session::{Session, SessionReport};
pub use source::SourceError;
pub use stages::Stages;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber once per process.
///
/// Does nothing unless `RUST_LOG` is set. With `PR_LOG_TREE=1` spans are
/// rendered as an indented tree instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var("PR_LOG_TREE").is_ok_and(|v| v == "1");
        if tree {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
