//! Intrinsic tags.

use std::fmt;

/// A builtin function whose call sites are generated by a dedicated macro
/// instead of ordinary argument-evaluation-then-call lowering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Intrinsic {
    /// `assert(assertion: bool)`
    Assert,
    /// `print(...) -> int`
    Print,
}

impl Intrinsic {
    pub const ALL: [Intrinsic; 2] = [Intrinsic::Assert, Intrinsic::Print];

    /// Source-level name the intrinsic is installed under.
    pub fn name(self) -> &'static str {
        match self {
            Intrinsic::Assert => "assert",
            Intrinsic::Print => "print",
        }
    }
}

impl fmt::Display for Intrinsic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
