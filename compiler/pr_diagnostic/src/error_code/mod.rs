//! Error codes for all compiler diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the compiler phase. Used for `prc explain` lookups.

use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Source loading errors
/// - E1xxx: Module resolution errors
/// - E2xxx: Type and intrinsic errors
/// - E9xxx: Internal compiler errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Source Errors (E0xxx)
    /// Source file does not exist
    E0001,
    /// Source file exists but could not be read
    E0002,

    // Resolution Errors (E1xxx)
    /// Imported module not found on the include path
    E1001,

    // Type Errors (E2xxx)
    /// Type mismatch
    E2001,
    /// `print` argument type has no format specifier
    E2101,
    /// Intrinsic argument has no resolved type
    E2102,
    /// Wrong number of arguments to an intrinsic
    E2103,

    // Internal Errors (E9xxx)
    /// Internal compiler error
    E9001,
}

impl ErrorCode {
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E2001,
        ErrorCode::E2101,
        ErrorCode::E2102,
        ErrorCode::E2103,
        ErrorCode::E9001,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2101 => "E2101",
            ErrorCode::E2102 => "E2102",
            ErrorCode::E2103 => "E2103",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Long-form explanation, shown by `prc explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "A source file could not be opened. The module resolver found no \
                 file at the given path, or the path named on the command line does \
                 not exist. No compilation result is cached for the file, so a later \
                 request for the same module tries again."
            }
            ErrorCode::E0002 => {
                "A source file exists but its contents could not be read, for example \
                 because it is not valid UTF-8 or permissions deny access."
            }
            ErrorCode::E1001 => {
                "An imported module was not found. Module `a.b.c` is looked up as \
                 `a/b/c.pr` under each include path in order, and the first existing \
                 file wins. Add the directory containing the module with `-I` or \
                 `PR_INCLUDE_PATH`."
            }
            ErrorCode::E2001 => "An expression's type does not match the type expected here.",
            ErrorCode::E2101 => {
                "`print` derives a printf format specifier from the static type of \
                 each argument. Supported types are the fixed-width integers, \
                 `size_t`, `char`, `float32`, `float64`, `string`, `*char`, `[N char]` \
                 and other pointers. Structs, bools and dynamic arrays must be \
                 printed field by field."
            }
            ErrorCode::E2102 => {
                "An argument passed to an intrinsic has no resolved static type, so \
                 the intrinsic cannot decide how to lower it."
            }
            ErrorCode::E2103 => "An intrinsic was called with the wrong number of arguments.",
            ErrorCode::E9001 => {
                "The compiler reached a state it should never reach. Please report \
                 this as a bug together with the source that triggered it."
            }
        }
    }

    /// Check if this is a source loading error (E0xxx range).
    pub fn is_source_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002)
    }

    /// Check if this is a module resolution error (E1xxx range).
    pub fn is_resolution_error(&self) -> bool {
        matches!(self, ErrorCode::E1001)
    }

    /// Check if this is a type or intrinsic error (E2xxx range).
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E2001 | ErrorCode::E2101 | ErrorCode::E2102 | ErrorCode::E2103
        )
    }

    /// Check if this is an internal compiler error (E9xxx range).
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2101"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
