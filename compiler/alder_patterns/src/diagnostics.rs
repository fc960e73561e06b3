//! Rendering match-check results as structured diagnostics.
//!
//! The checker itself returns data ([`Coverage`], [`MatchError`]); these
//! helpers turn that data into [`Diagnostic`]s for the driver. Source-level
//! message rendering stays out of the engine.

use alder_diagnostic::{Diagnostic, ErrorCode};
use alder_hier::Hierarchy;
use alder_ir::{Span, StringInterner};

use crate::{Coverage, MatchError};

/// Diagnostic for a non-exhaustive match, naming every uncovered leaf by
/// fully qualified path. `None` when the match is exhaustive.
pub fn non_exhaustive_diagnostic(
    coverage: &Coverage,
    hierarchy: &Hierarchy,
    interner: &StringInterner,
    match_span: Span,
) -> Option<Diagnostic> {
    if coverage.is_exhaustive() {
        return None;
    }
    let missing = coverage.missing_paths(hierarchy, interner);
    Some(
        Diagnostic::error(
            ErrorCode::E3001,
            format!("non-exhaustive match; missing: {}", missing.join(", ")),
        )
        .with_span(match_span)
        .with_note("add the missing cases or a wildcard arm"),
    )
}

/// One warning per pattern dead behind a wildcard.
pub fn unreachable_pattern_diagnostics(
    coverage: &Coverage,
    pattern_spans: &[Span],
    match_span: Span,
) -> Vec<Diagnostic> {
    coverage
        .unreachable
        .iter()
        .map(|&position| {
            let span = pattern_spans.get(position).copied().unwrap_or(match_span);
            Diagnostic::warning(ErrorCode::E3006, "unreachable pattern after wildcard")
                .with_span(span)
        })
        .collect()
}

impl MatchError {
    /// Render as a structured diagnostic against the match's span.
    pub fn into_diagnostic(self, match_span: Span) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code(), self.to_string()).with_span(match_span);
        match self {
            MatchError::NotALeaf { .. } => {
                diagnostic.with_note("a group covers its cases only via a type test")
            }
            MatchError::AmbiguousName { .. } => {
                diagnostic.with_note("qualify the name with its subgroup path")
            }
            MatchError::NotAGroup { .. } | MatchError::NoSuchLeaf { .. } => diagnostic,
        }
    }
}
