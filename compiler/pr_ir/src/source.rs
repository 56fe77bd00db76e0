//! Source locations and the per-file line array.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// A position in a source file. Lines are 1-based, columns 0-based.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Loc {
    pub line: u32,
    pub column: u32,
}

impl Loc {
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Loc { line, column }
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The lines of a source file, kept for diagnostics and for intrinsics that
/// embed source text (`assert` reports the failing line verbatim).
///
/// Cheap to clone: the lines are shared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLines(Arc<[String]>);

impl SourceLines {
    /// Split `text` on `\n`, stripping one trailing `\r` from each line.
    ///
    /// The line count is always the number of newlines plus one, so a file
    /// ending in a newline has an empty last line.
    pub fn split(text: &str) -> Self {
        let lines: Vec<String> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_owned())
            .collect();
        SourceLines(lines.into())
    }

    /// Line by 1-based number.
    pub fn get(&self, line: u32) -> Option<&str> {
        let idx = usize::try_from(line).ok()?.checked_sub(1)?;
        self.0.get(idx).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// False for anything built by [`SourceLines::split`]: even empty text
    /// has one (empty) line.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Per-file metadata handed to the parser and carried by the AST.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceMeta {
    /// Resolved path of the file, as used for the compilation cache key.
    pub path: PathBuf,
    /// Dotted module name the file was requested as.
    pub module: String,
    pub lines: SourceLines,
}

impl SourceMeta {
    pub fn new(path: impl Into<PathBuf>, module: impl Into<String>, lines: SourceLines) -> Self {
        SourceMeta {
            path: path.into(),
            module: module.into(),
            lines,
        }
    }

    /// Path as displayed in diagnostics and embedded in generated code.
    pub fn filename(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests;
