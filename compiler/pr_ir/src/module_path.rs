//! Dotted module identifiers (`std.io`, `a.b.c`).

use crate::{Name, StringInterner, StringLookup};

/// An ordered list of module path segments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModulePath {
    segments: Vec<Name>,
}

impl ModulePath {
    pub fn new(segments: Vec<Name>) -> Self {
        ModulePath { segments }
    }

    /// Parse `a.b.c`, interning each segment. Empty segments are dropped.
    pub fn parse(dotted: &str, interner: &StringInterner) -> Self {
        let segments = dotted
            .split('.')
            .filter(|seg| !seg.is_empty())
            .map(|seg| interner.intern(seg))
            .collect();
        ModulePath { segments }
    }

    pub fn segments(&self) -> &[Name] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Render as `a.b.c`.
    pub fn dotted(&self, lookup: &dyn StringLookup) -> String {
        let mut out = String::new();
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push_str(lookup.lookup(*seg));
        }
        out
    }
}
