//! Declaration-tree validation.
//!
//! A single walk over the tree checks:
//! - **Name uniqueness per scope**: the direct children of one node share a
//!   single namespace; a Leaf `Mammal` next to a Group `Mammal` is as much
//!   a collision as two Leaves.
//! - **Structural well-formedness**: only Groups carry children.
//! - **Supertype resolution**: an explicit `extends` target must resolve to
//!   an enclosing node (establishing the parent/child enum subtype edge) or
//!   to an externally-visible supertype supplied by the front end.
//!
//! Validation is a pure function; it never mutates the tree and fails with
//! the first fatal [`DeclError`], rejecting the declaration as a whole.

use alder_ir::{DeclTree, Name, NodeId, StringInterner};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::DeclError;

/// Resolved supertype facts for one node.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ResolvedSupertype {
    /// Subtype-edge target within this declaration: the declared target
    /// when it resolves to an enclosing node, otherwise the immediately
    /// enclosing node. `None` only for the root.
    pub parent: Option<NodeId>,
    /// External `extends` target, when the declared target resolved to an
    /// externally-visible supertype. Carried for the code generator; does
    /// not participate in frontier computation.
    pub external: Option<Name>,
}

/// A declaration tree that passed validation, with derived back-references.
///
/// Borrows the tree read-only; parent links and supertype resolutions are
/// recomputable lookups, never a second ownership path.
#[derive(Debug)]
pub struct ValidatedTree<'t> {
    tree: &'t DeclTree,
    parents: Vec<Option<NodeId>>,
    resolved: Vec<ResolvedSupertype>,
}

impl<'t> ValidatedTree<'t> {
    pub fn tree(&self) -> &'t DeclTree {
        self.tree
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Enclosing node; `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id.index()]
    }

    pub fn resolved_supertype(&self, id: NodeId) -> ResolvedSupertype {
        self.resolved[id.index()]
    }

    /// Qualified dot-separated path from the root to `id`.
    pub fn qualified_path(&self, id: NodeId, interner: &StringInterner) -> String {
        qualified_path(self.tree, &self.parents, id, interner)
    }
}

/// Validate a declaration tree.
///
/// `externals` holds the names the front end accepts as opaque external
/// supertype targets.
///
/// # Errors
///
/// The first [`DeclError`] encountered in arena order; the tree is
/// rejected as a whole.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = tree.len()))]
pub fn validate<'t>(
    tree: &'t DeclTree,
    externals: &FxHashSet<Name>,
    interner: &StringInterner,
) -> Result<ValidatedTree<'t>, DeclError> {
    let parents = derive_parents(tree);

    for id in tree.ids() {
        let node = tree.node(id);

        if node.is_leaf() && !node.children.is_empty() {
            return Err(DeclError::LeafWithChildren {
                scope: qualified_path(tree, &parents, id, interner),
                span: node.span,
            });
        }

        // Sibling namespace check, regardless of Leaf/Group mix.
        let mut seen: FxHashMap<Name, NodeId> = FxHashMap::default();
        for &child in &node.children {
            let child_node = tree.node(child);
            if let Some(&first) = seen.get(&child_node.name) {
                return Err(DeclError::DuplicateName {
                    name: interner.lookup(child_node.name).to_string(),
                    scope: qualified_path(tree, &parents, id, interner),
                    first: tree.node(first).span,
                    second: child_node.span,
                });
            }
            seen.insert(child_node.name, child);
        }
    }

    let mut resolved = Vec::with_capacity(tree.len());
    for id in tree.ids() {
        resolved.push(resolve_supertype(tree, &parents, externals, interner, id)?);
    }

    Ok(ValidatedTree {
        tree,
        parents,
        resolved,
    })
}

/// Resolve one node's supertype edge per the declared-target rules.
fn resolve_supertype(
    tree: &DeclTree,
    parents: &[Option<NodeId>],
    externals: &FxHashSet<Name>,
    interner: &StringInterner,
    id: NodeId,
) -> Result<ResolvedSupertype, DeclError> {
    let node = tree.node(id);
    let enclosing = parents[id.index()];

    let Some(target) = node.declared_supertype else {
        return Ok(ResolvedSupertype {
            parent: enclosing,
            external: None,
        });
    };

    // Resolution walks strictly *enclosing* nodes, so a self-reference can
    // never resolve; it falls through to the unresolved failure below.
    let mut ancestor = enclosing;
    while let Some(candidate) = ancestor {
        if tree.node(candidate).name == target {
            tracing::debug!(node = ?id, ancestor = ?candidate, "extends resolved to enclosing enum");
            return Ok(ResolvedSupertype {
                parent: Some(candidate),
                external: None,
            });
        }
        ancestor = parents[candidate.index()];
    }

    if externals.contains(&target) {
        return Ok(ResolvedSupertype {
            parent: enclosing,
            external: Some(target),
        });
    }

    Err(DeclError::UnresolvedSupertype {
        target: interner.lookup(target).to_string(),
        scope: qualified_path(tree, parents, id, interner),
        span: node.span,
    })
}

/// Derive child→parent back-references from the ownership tree.
fn derive_parents(tree: &DeclTree) -> Vec<Option<NodeId>> {
    let mut parents = vec![None; tree.len()];
    for id in tree.ids() {
        for &child in &tree.node(id).children {
            parents[child.index()] = Some(id);
        }
    }
    parents
}

/// Dot-separated path from the root to `id`.
fn qualified_path(
    tree: &DeclTree,
    parents: &[Option<NodeId>],
    id: NodeId,
    interner: &StringInterner,
) -> String {
    let mut segments = vec![interner.lookup(tree.node(id).name)];
    let mut current = parents[id.index()];
    while let Some(ancestor) = current {
        segments.push(interner.lookup(tree.node(ancestor).name));
        current = parents[ancestor.index()];
    }
    segments.reverse();
    segments.join(".")
}
