//! Error types for validation and leaf lookup.
//!
//! Declaration errors are fatal: the whole tree is rejected and the engine
//! never proceeds to lowering. Leaf lookup errors are recoverable runtime
//! outcomes of `value_of`-style queries, not declaration defects.
//!
//! Messages carry resolved names and scope paths (captured through the
//! interner at construction time) so `Display` needs no interner and
//! `thiserror` derives work directly.

use alder_diagnostic::{Diagnostic, ErrorCode};
use alder_ir::Span;

/// Fatal problem found while validating a declaration tree.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum DeclError {
    /// Two sibling declarations (Leaf or Group, in any combination) share
    /// a name. The combined sibling namespace must be collision-free.
    #[error("duplicate name `{name}` in `{scope}`")]
    DuplicateName {
        name: String,
        /// Qualified path of the enclosing scope.
        scope: String,
        first: Span,
        second: Span,
    },

    /// An explicit `extends` target resolves to neither an enclosing node
    /// nor an externally-visible supertype.
    #[error("cannot resolve supertype `{target}` declared on `{scope}`")]
    UnresolvedSupertype {
        target: String,
        scope: String,
        span: Span,
    },

    /// A Leaf node carries nested subcases; only Groups may have children.
    #[error("case `{scope}` is a leaf but declares nested subcases")]
    LeafWithChildren { scope: String, span: Span },
}

impl DeclError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DeclError::DuplicateName { .. } => ErrorCode::E2001,
            DeclError::UnresolvedSupertype { .. } => ErrorCode::E2002,
            DeclError::LeafWithChildren { .. } => ErrorCode::E2003,
        }
    }

    /// Render as a structured diagnostic for the driver.
    pub fn into_diagnostic(self) -> Diagnostic {
        let code = self.code();
        let message = self.to_string();
        match self {
            DeclError::DuplicateName { first, second, .. } => {
                Diagnostic::error(code, message)
                    .with_span(second)
                    .with_label(first, "first declared here")
                    .with_note("sibling cases share one namespace regardless of kind")
            }
            DeclError::UnresolvedSupertype { span, .. } => Diagnostic::error(code, message)
                .with_span(span)
                .with_note("an `extends` target must be an enclosing enum or an external type"),
            DeclError::LeafWithChildren { span, .. } => {
                Diagnostic::error(code, message).with_span(span)
            }
        }
    }
}

/// Recoverable failure of a `value_of`-style leaf lookup.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum LeafLookupError {
    /// No leaf in the queried frontier bears the given name/path.
    #[error("no leaf named `{name}` in `{scope}`")]
    NoSuchLeaf { name: String, scope: String },

    /// A bare name matches leaves in more than one subgroup; callers must
    /// re-query with a fully qualified path.
    #[error(
        "leaf name `{name}` is ambiguous in `{scope}`; qualify as one of: {}",
        .candidates.join(", ")
    )]
    AmbiguousLeafName {
        name: String,
        scope: String,
        /// Qualified paths of every matching leaf, in frontier order.
        candidates: Vec<String>,
    },
}

impl LeafLookupError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LeafLookupError::NoSuchLeaf { .. } => ErrorCode::E3004,
            LeafLookupError::AmbiguousLeafName { .. } => ErrorCode::E3005,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::error(self.code(), self.to_string())
    }
}
