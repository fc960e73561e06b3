//! The exhaustiveness algorithm: subtractive coverage over a frontier.
//!
//! Start with the scrutinee Group's full leaf frontier; for each pattern
//! in order, compute its covered subset and subtract it. The match is
//! exhaustive iff nothing remains (or a `Wildcard` was seen).
//!
//! Pattern names are resolved against the scrutinee's subtree: frontier
//! leaves by bare name, descendant Groups (the scrutinee included) for
//! type tests. A type test may also name a Group *enclosing* the
//! scrutinee; every scrutinee leaf is a subtype of it, so it covers the
//! whole frontier.

use alder_diagnostic::ErrorCode;
use alder_hier::{Hierarchy, LeafIndexSet};
use alder_ir::{Name, NodeId, StringInterner};

/// An abstract match pattern, as supplied by the pattern-match front end.
///
/// A closed sum type on purpose: the checker must handle exactly these
/// four kinds, and a new kind is a breaking change to it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Pattern {
    /// Covers exactly the one leaf with this name.
    ExactLeaf(Name),
    /// Covers the entire current leaf frontier of the named Group,
    /// however deep the nesting. A Group enclosing the scrutinee is a
    /// supertype of every scrutinee leaf and covers the whole frontier.
    TypeTest(Name),
    /// Covers exactly the leaf with this name; the name must be declared
    /// as a Leaf, a Group's bare name here is a contract violation.
    SingletonTerm(Name),
    /// Covers every remaining leaf. Terminal: later patterns are dead.
    Wildcard,
}

/// Fatal problem with one specific match being checked.
///
/// Fatal to this match only, never to the declaration.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum MatchError {
    /// A `SingletonTerm` (or `ExactLeaf`) names a Group.
    #[error("`{name}` is an enum group, not a case; match it with a type test")]
    NotALeaf { name: String },

    /// A `TypeTest` names a Leaf or an unknown name.
    #[error("`{name}` does not name an enum group in `{scope}`")]
    NotAGroup { name: String, scope: String },

    /// A leaf pattern names nothing in the scrutinee's frontier.
    #[error("no case named `{name}` in `{scope}`")]
    NoSuchLeaf { name: String, scope: String },

    /// A bare name matches declarations in more than one subgroup.
    #[error(
        "`{name}` is ambiguous in `{scope}`; candidates: {}",
        .candidates.join(", ")
    )]
    AmbiguousName {
        name: String,
        scope: String,
        candidates: Vec<String>,
    },
}

impl MatchError {
    pub fn code(&self) -> ErrorCode {
        match self {
            MatchError::NotALeaf { .. } => ErrorCode::E3002,
            MatchError::NotAGroup { .. } => ErrorCode::E3003,
            MatchError::NoSuchLeaf { .. } => ErrorCode::E3004,
            MatchError::AmbiguousName { .. } => ErrorCode::E3005,
        }
    }
}

/// Result of checking one match against one scrutinee Group.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Coverage {
    /// Leaves covered by at least one pattern, in frontier order.
    pub covered: Vec<NodeId>,
    /// Leaves no pattern covers, in frontier order. Empty iff exhaustive.
    pub missing: Vec<NodeId>,
    /// Indices of patterns dead behind a `Wildcard` (warning material).
    pub unreachable: Vec<usize>,
}

impl Coverage {
    pub fn is_exhaustive(&self) -> bool {
        self.missing.is_empty()
    }

    /// Fully qualified paths of the missing leaves, for diagnostics.
    pub fn missing_paths(&self, hierarchy: &Hierarchy, interner: &StringInterner) -> Vec<String> {
        self.missing
            .iter()
            .map(|&leaf| hierarchy.qualified_path(leaf, interner))
            .collect()
    }
}

/// Check a pattern sequence against the scrutinee Group's leaf frontier.
///
/// # Errors
///
/// [`MatchError`] when a pattern misuses a name (Group as singleton, leaf
/// as type test, unknown or ambiguous name). These are fatal to this match
/// only; the declaration artifacts remain valid.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(scrutinee = scrutinee.raw(), patterns = patterns.len())
)]
pub fn check_exhaustive(
    hierarchy: &Hierarchy,
    indices: &LeafIndexSet,
    scrutinee: NodeId,
    patterns: &[Pattern],
    interner: &StringInterner,
) -> Result<Coverage, MatchError> {
    let index = indices
        .index(scrutinee)
        .ok_or_else(|| MatchError::NotAGroup {
            name: interner.lookup(hierarchy.descriptor(scrutinee).name).to_string(),
            scope: hierarchy.qualified_path(scrutinee, interner),
        })?;
    let frontier = index.values();

    let mut covered = vec![false; frontier.len()];
    let mut saw_wildcard = false;
    let mut unreachable = Vec::new();

    for (position, pattern) in patterns.iter().enumerate() {
        if saw_wildcard {
            unreachable.push(position);
            continue;
        }
        match *pattern {
            Pattern::Wildcard => {
                saw_wildcard = true;
                covered.fill(true);
            }
            Pattern::ExactLeaf(name) | Pattern::SingletonTerm(name) => {
                let leaf = resolve_leaf(hierarchy, index.values(), scrutinee, name, interner)?;
                if let Some(ordinal) = index.ordinal(leaf) {
                    covered[ordinal] = true;
                }
            }
            Pattern::TypeTest(name) => match resolve_type_test(hierarchy, scrutinee, name, interner)? {
                TypeTestTarget::Enclosing => {
                    covered.fill(true);
                }
                TypeTestTarget::Subgroup(group) => {
                    // The target sits inside the scrutinee's subtree, so
                    // its whole frontier maps into the scrutinee's ordinals.
                    if let Some(group_index) = indices.index(group) {
                        for &leaf in group_index.values() {
                            if let Some(ordinal) = index.ordinal(leaf) {
                                covered[ordinal] = true;
                            }
                        }
                    }
                }
            },
        }
    }

    let (covered, missing) = frontier
        .iter()
        .zip(&covered)
        .partition::<Vec<_>, _>(|&(_, &was_covered)| was_covered);

    Ok(Coverage {
        covered: covered.into_iter().map(|(&leaf, _)| leaf).collect(),
        missing: missing.into_iter().map(|(&leaf, _)| leaf).collect(),
        unreachable,
    })
}

/// Resolve a leaf pattern name against the scrutinee's frontier.
///
/// A Group's name here is the `NotALeaf` contract violation; an unknown
/// name is `NoSuchLeaf`; a bare name shared by leaves of several
/// subgroups is ambiguous.
fn resolve_leaf(
    hierarchy: &Hierarchy,
    frontier: &[NodeId],
    scrutinee: NodeId,
    name: Name,
    interner: &StringInterner,
) -> Result<NodeId, MatchError> {
    let matches: Vec<NodeId> = frontier
        .iter()
        .copied()
        .filter(|&leaf| hierarchy.descriptor(leaf).name == name)
        .collect();

    match matches.as_slice() {
        [leaf] => Ok(*leaf),
        [] => {
            if !collect_groups(hierarchy, scrutinee, name).is_empty() {
                return Err(MatchError::NotALeaf {
                    name: interner.lookup(name).to_string(),
                });
            }
            Err(MatchError::NoSuchLeaf {
                name: interner.lookup(name).to_string(),
                scope: hierarchy.qualified_path(scrutinee, interner),
            })
        }
        many => Err(ambiguous(hierarchy, scrutinee, name, many, interner)),
    }
}

/// Where a type-test name resolved relative to the scrutinee.
enum TypeTestTarget {
    /// A Group in the scrutinee's subtree (the scrutinee itself included).
    Subgroup(NodeId),
    /// A Group enclosing the scrutinee.
    Enclosing,
}

/// Resolve a type-test name to a Group in the scrutinee's subtree
/// (the scrutinee itself included) or to a Group enclosing it.
///
/// Subtree matches win: only when the subtree holds no Group of that
/// name is the scrutinee's ancestor chain consulted.
fn resolve_type_test(
    hierarchy: &Hierarchy,
    scrutinee: NodeId,
    name: Name,
    interner: &StringInterner,
) -> Result<TypeTestTarget, MatchError> {
    let matches = collect_groups(hierarchy, scrutinee, name);
    match matches.as_slice() {
        [group] => Ok(TypeTestTarget::Subgroup(*group)),
        [] => {
            // The namespace is exactly the enclosing Group names.
            if hierarchy.descriptor(scrutinee).namespace.contains(&name) {
                return Ok(TypeTestTarget::Enclosing);
            }
            Err(MatchError::NotAGroup {
                name: interner.lookup(name).to_string(),
                scope: hierarchy.qualified_path(scrutinee, interner),
            })
        }
        many => Err(ambiguous(hierarchy, scrutinee, name, many, interner)),
    }
}

/// Groups named `name` in the subtree rooted at `node`, pre-order.
fn collect_groups(hierarchy: &Hierarchy, node: NodeId, name: Name) -> Vec<NodeId> {
    fn walk(hierarchy: &Hierarchy, node: NodeId, name: Name, out: &mut Vec<NodeId>) {
        let descriptor = hierarchy.descriptor(node);
        if !descriptor.is_group() {
            return;
        }
        if descriptor.name == name {
            out.push(node);
        }
        for &child in &descriptor.children {
            walk(hierarchy, child, name, out);
        }
    }

    let mut out = Vec::new();
    walk(hierarchy, node, name, &mut out);
    out
}

fn ambiguous(
    hierarchy: &Hierarchy,
    scrutinee: NodeId,
    name: Name,
    matches: &[NodeId],
    interner: &StringInterner,
) -> MatchError {
    MatchError::AmbiguousName {
        name: interner.lookup(name).to_string(),
        scope: hierarchy.qualified_path(scrutinee, interner),
        candidates: matches
            .iter()
            .map(|&id| hierarchy.qualified_path(id, interner))
            .collect(),
    }
}
