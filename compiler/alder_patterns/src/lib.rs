//! Match exhaustiveness checking for Alder hierarchical enums.
//!
//! The pattern-match front end hands this crate an abstract [`Pattern`]
//! sequence expressed against one scrutinee Group; [`check_exhaustive`]
//! answers which leaves of that Group's frontier the patterns leave
//! uncovered.
//!
//! Exhaustiveness is per-level: a match against `Mammal` is checked
//! against `Mammal`'s own leaf frontier, never `Animal`'s. Redundant
//! overlap between patterns is legal; only completeness is checked here
//! (patterns dead behind a `Wildcard` are surfaced as warning material).
//!
//! Non-exhaustiveness is not an error: it is a successful [`Coverage`]
//! result with a non-empty `missing` set, which the driver renders via
//! [`non_exhaustive_diagnostic`].

mod check;
mod diagnostics;

pub use check::{check_exhaustive, Coverage, MatchError, Pattern};
pub use diagnostics::{non_exhaustive_diagnostic, unreachable_pattern_diagnostics};
