//! Compilation cache.

use std::path::{Path, PathBuf};

use pr_types::ScopeId;
use rustc_hash::FxHashMap;

/// Resolved file path → scope of that file's module.
///
/// Holds at most one entry per path. Entries are inserted before the module
/// is type checked, so a cyclic import finds the in-progress scope. Nothing
/// is ever evicted.
#[derive(Clone, Debug, Default)]
pub struct ModuleCache {
    entries: FxHashMap<PathBuf, ScopeId>,
}

impl ModuleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &Path) -> Option<ScopeId> {
        self.entries.get(path).copied()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Record the scope for `path`, replacing nothing.
    pub(crate) fn insert(&mut self, path: PathBuf, scope: ScopeId) {
        let previous = self.entries.insert(path, scope);
        debug_assert!(previous.is_none(), "module compiled twice");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
