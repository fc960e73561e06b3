//! Per-Group leaf frontiers with `values`/`ordinal`/`value_of` semantics.
//!
//! A [`LeafIndex`] is the ordered leaf frontier of one Group: pre-order
//! depth-first traversal of the Group's subtree, left to right by
//! `source_index`. Leaf children are appended; Group children are expanded
//! in place (their leaves spliced in at that position, the Group itself
//! never appended — a Group is a type, not a value).
//!
//! Ordinals are local to the producing Group: the same leaf owns one
//! ordinal per ancestor Group, and the builder is deterministic — the same
//! hierarchy always yields the same sequence and ordinal map.

use alder_ir::{Name, NodeId, StringInterner};
use rustc_hash::FxHashMap;

use crate::{Hierarchy, LeafLookupError};

/// Ordered leaf frontier of one Group, with ordinal lookup.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct LeafIndex {
    group: NodeId,
    leaves: Vec<NodeId>,
    ordinals: FxHashMap<NodeId, usize>,
}

impl LeafIndex {
    /// Build the frontier for `group` by pre-order depth-first traversal.
    #[tracing::instrument(level = "debug", skip_all, fields(group = group.raw()))]
    pub fn build(hierarchy: &Hierarchy, group: NodeId) -> LeafIndex {
        debug_assert!(
            hierarchy.descriptor(group).is_group(),
            "leaf index requested for non-Group {group:?}"
        );

        let mut leaves = Vec::new();
        collect_frontier(hierarchy, group, &mut leaves);

        let ordinals = leaves
            .iter()
            .enumerate()
            .map(|(ordinal, &leaf)| (leaf, ordinal))
            .collect();

        LeafIndex {
            group,
            leaves,
            ordinals,
        }
    }

    /// The Group whose frontier this is.
    pub fn group(&self) -> NodeId {
        self.group
    }

    /// The ordered leaf sequence (the `values` artifact).
    pub fn values(&self) -> &[NodeId] {
        &self.leaves
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Position of `leaf` in this frontier, if it belongs to it.
    ///
    /// Meaningful only paired with this index's Group; the same leaf has
    /// different ordinals under different ancestor Groups.
    pub fn ordinal(&self, leaf: NodeId) -> Option<usize> {
        self.ordinals.get(&leaf).copied()
    }

    pub fn contains(&self, leaf: NodeId) -> bool {
        self.ordinals.contains_key(&leaf)
    }

    /// Look up a leaf by name path relative to this Group (`valueOf`).
    ///
    /// A single bare segment resolves iff exactly one frontier leaf bears
    /// that name; when leaves in different subgroups share a bare name the
    /// lookup fails with [`LeafLookupError::AmbiguousLeafName`] and callers
    /// must re-query with the fully qualified (Group-relative) path.
    ///
    /// # Errors
    ///
    /// [`LeafLookupError::NoSuchLeaf`] when nothing matches.
    pub fn value_of(
        &self,
        hierarchy: &Hierarchy,
        interner: &StringInterner,
        path: &[Name],
    ) -> Result<NodeId, LeafLookupError> {
        let scope = || hierarchy.qualified_path(self.group, interner);

        let [bare] = path else {
            return self.value_of_qualified(hierarchy, interner, path);
        };

        let mut matches = self
            .leaves
            .iter()
            .copied()
            .filter(|&leaf| hierarchy.descriptor(leaf).name == *bare);

        match (matches.next(), matches.next()) {
            (Some(leaf), None) => Ok(leaf),
            (None, _) => Err(LeafLookupError::NoSuchLeaf {
                name: interner.lookup(*bare).to_string(),
                scope: scope(),
            }),
            (Some(first), Some(second)) => {
                let mut candidates = vec![
                    hierarchy.qualified_path(first, interner),
                    hierarchy.qualified_path(second, interner),
                ];
                candidates.extend(matches.map(|leaf| hierarchy.qualified_path(leaf, interner)));
                Err(LeafLookupError::AmbiguousLeafName {
                    name: interner.lookup(*bare).to_string(),
                    scope: scope(),
                    candidates,
                })
            }
        }
    }

    /// Multi-segment lookup: the query must equal a leaf's path relative
    /// to this Group (subgroup names, then the leaf name).
    fn value_of_qualified(
        &self,
        hierarchy: &Hierarchy,
        interner: &StringInterner,
        path: &[Name],
    ) -> Result<NodeId, LeafLookupError> {
        // Relative paths are unique by per-scope name uniqueness, so the
        // first match is the only match. Every frontier leaf's namespace
        // contains this Group's own name at `group_depth - 1`.
        let group_depth = hierarchy.descriptor(self.group).namespace.len() + 1;
        let found = self.leaves.iter().copied().find(|&leaf| {
            let descriptor = hierarchy.descriptor(leaf);
            let relative = &descriptor.namespace[group_depth..];
            path.len() == relative.len() + 1
                && path[..relative.len()] == *relative
                && path[relative.len()] == descriptor.name
        });

        found.ok_or_else(|| LeafLookupError::NoSuchLeaf {
            name: path
                .iter()
                .map(|&segment| interner.lookup(segment))
                .collect::<Vec<_>>()
                .join("."),
            scope: hierarchy.qualified_path(self.group, interner),
        })
    }
}

/// Append the leaf frontier of `node`'s subtree to `out`, in order.
fn collect_frontier(hierarchy: &Hierarchy, node: NodeId, out: &mut Vec<NodeId>) {
    for &child in &hierarchy.descriptor(node).children {
        if hierarchy.descriptor(child).is_leaf() {
            out.push(child);
        } else {
            collect_frontier(hierarchy, child, out);
        }
    }
}

/// All per-Group leaf indices of one hierarchy, keyed by Group identity.
///
/// Leaf indices are pure functions of the hierarchy, so building them all
/// once and caching is always valid; the hierarchy is immutable and no
/// invalidation is needed.
#[derive(Clone, Debug)]
pub struct LeafIndexSet {
    indices: FxHashMap<NodeId, LeafIndex>,
}

impl LeafIndexSet {
    /// Build the frontier of every Group (the root included).
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn build(hierarchy: &Hierarchy) -> LeafIndexSet {
        let indices = hierarchy
            .groups()
            .map(|descriptor| (descriptor.id, LeafIndex::build(hierarchy, descriptor.id)))
            .collect();
        LeafIndexSet { indices }
    }

    /// The cached index for `group`; `None` when `group` is not a Group
    /// of this hierarchy.
    pub fn index(&self, group: NodeId) -> Option<&LeafIndex> {
        self.indices.get(&group)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
