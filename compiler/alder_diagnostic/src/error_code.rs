//! Error codes for all engine diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E2001`) with the first
//! digit indicating the phase that raises it.

use std::fmt;

/// Error codes for all engine diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E2xxx: Declaration (validation/lowering) errors
/// - E3xxx: Pattern-match errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Declaration Errors (E2xxx)
    /// Duplicate name in a sibling scope
    E2001,
    /// Unresolved `extends` target
    E2002,
    /// Leaf declared with nested subcases
    E2003,

    // Pattern Errors (E3xxx)
    /// Non-exhaustive match
    E3001,
    /// Singleton term names a Group
    E3002,
    /// Type test names a non-Group
    E3003,
    /// No such leaf in the matched frontier
    E3004,
    /// Ambiguous bare leaf name
    E3005,
    /// Unreachable pattern after a wildcard
    E3006,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3005 => "E3005",
            ErrorCode::E3006 => "E3006",
        }
    }

    /// Short human-readable category for the code's phase.
    pub const fn phase(self) -> &'static str {
        match self {
            ErrorCode::E2001 | ErrorCode::E2002 | ErrorCode::E2003 => "declaration",
            ErrorCode::E3001
            | ErrorCode::E3002
            | ErrorCode::E3003
            | ErrorCode::E3004
            | ErrorCode::E3005
            | ErrorCode::E3006 => "pattern",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
