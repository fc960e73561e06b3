//! Hierarchical enum lowering for the Alder compiler.
//!
//! This crate turns a raw declaration tree ([`alder_ir::DeclTree`]) into the
//! immutable artifacts the rest of the compiler consumes:
//!
//! 1. **Validation** ([`validate`]): name-uniqueness per sibling scope,
//!    structural well-formedness, supertype resolution. Rejects the whole
//!    declaration on the first fatal problem.
//! 2. **Lowering** ([`lower`]): a self-contained [`Hierarchy`] of type
//!    descriptors with namespace paths and subtype edges. Total over a
//!    validated tree.
//! 3. **Leaf indexing** ([`LeafIndex`], [`LeafIndexSet`]): per-Group ordered
//!    leaf frontiers with `values`/`ordinal`/`value_of` semantics.
//!
//! # Pipeline Position
//!
//! ```text
//! Parser → DeclTree → **validate → lower → index** → codegen / match check
//! ```
//!
//! Data flows strictly forward; every step is a pure function over an
//! immutable input, so independent declarations may be processed in
//! parallel by the driver with no synchronization. Within one declaration,
//! depth-first left-to-right traversal order is a correctness requirement
//! (ordinals depend on it) and is never parallelized.
//!
//! The one-call entry point [`analyze`] runs all three steps and returns
//! the cacheable per-declaration [`EnumArtifacts`].

mod errors;
mod index;
mod lower;
mod validate;

pub use errors::{DeclError, LeafLookupError};
pub use index::{LeafIndex, LeafIndexSet};
pub use lower::{lower, DescriptorKind, Hierarchy, TypeDescriptor};
pub use validate::{validate, ResolvedSupertype, ValidatedTree};

use alder_ir::{DeclTree, Name, StringInterner};
use rustc_hash::FxHashSet;

/// The immutable lowering artifacts for one enum declaration.
///
/// Pure functions of the validated tree; safe to cache per declaration
/// (no invalidation needed, the tree is immutable after validation).
pub struct EnumArtifacts {
    pub hierarchy: Hierarchy,
    pub indices: LeafIndexSet,
}

/// Validate, lower, and index one declaration tree.
///
/// `externals` is the set of externally-visible supertype names the
/// front end accepts as opaque `extends` targets.
///
/// # Errors
///
/// Returns the first fatal [`DeclError`]; the engine never proceeds to
/// lowering or indexing on an invalid tree.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = tree.len()))]
pub fn analyze(
    tree: &DeclTree,
    externals: &FxHashSet<Name>,
    interner: &StringInterner,
) -> Result<EnumArtifacts, DeclError> {
    let validated = validate(tree, externals, interner)?;
    let hierarchy = lower(&validated);
    let indices = LeafIndexSet::build(&hierarchy);
    Ok(EnumArtifacts { hierarchy, indices })
}
