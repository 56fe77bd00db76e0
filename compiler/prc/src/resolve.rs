//! Module resolution: dotted module paths to source files.

use std::path::PathBuf;

use pr_ir::{ModulePath, StringLookup};

/// Extension of Princess source files.
pub const SOURCE_EXTENSION: &str = "pr";

/// Maps module paths to files under an ordered list of include roots.
#[derive(Clone, Debug, Default)]
pub struct ModuleResolver {
    roots: Vec<PathBuf>,
}

impl ModuleResolver {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        ModuleResolver { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Every file `path` could live in, in search order.
    ///
    /// `a.b.c` under root `lib` is `lib/a/b/c.pr`. Empty for an empty path.
    pub fn candidates(&self, path: &ModulePath, lookup: &dyn StringLookup) -> Vec<PathBuf> {
        let Some(relative) = relative_path(path, lookup) else {
            return Vec::new();
        };
        self.roots.iter().map(|root| root.join(&relative)).collect()
    }

    /// The first candidate that exists as a regular file.
    pub fn resolve(&self, path: &ModulePath, lookup: &dyn StringLookup) -> Option<PathBuf> {
        self.candidates(path, lookup).into_iter().find(|candidate| {
            let found = candidate.is_file();
            tracing::trace!(candidate = %candidate.display(), found, "probing module file");
            found
        })
    }
}

/// `a/b/c.pr` for `a.b.c`.
fn relative_path(path: &ModulePath, lookup: &dyn StringLookup) -> Option<PathBuf> {
    let (last, dirs) = path.segments().split_last()?;
    let mut relative = PathBuf::new();
    for segment in dirs {
        relative.push(lookup.lookup(*segment));
    }
    relative.push(format!("{}.{SOURCE_EXTENSION}", lookup.lookup(*last)));
    Some(relative)
}
