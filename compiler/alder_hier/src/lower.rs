//! Lowering a validated tree into the abstract type hierarchy.
//!
//! Every node becomes a [`TypeDescriptor`]:
//! - Groups become abstract supertype descriptors owning a namespace.
//! - Parameterless Leaves become singleton descriptors.
//! - Parameterized Leaves become constructor descriptors.
//!
//! Type parameters are preserved verbatim and stay local to their
//! declaring descriptor; the engine never unifies them across levels.
//! Namespace paths (ancestor Group names from the root) are informational
//! for the code generator and carry no semantic weight here.
//!
//! Lowering is total over a validated tree: it can raise no errors beyond
//! those validation already rejected. The resulting [`Hierarchy`] is
//! self-contained, so the declaration tree may be discarded afterwards.

use alder_ir::{CtorParam, Name, NodeId, Span, StringInterner, TypeParam};
use smallvec::SmallVec;

use crate::ValidatedTree;

/// What a descriptor lowers to in the target language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DescriptorKind {
    /// Abstract supertype with an associated namespace (from a Group).
    Abstract,
    /// Concrete singleton case (parameterless Leaf).
    Singleton,
    /// Concrete parameterized case (Leaf with constructor params).
    Constructor,
}

/// Abstract type descriptor for one declaration-tree node.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TypeDescriptor {
    pub id: NodeId,
    pub name: Name,
    pub kind: DescriptorKind,
    /// Ancestor Group names from the root, excluding this node.
    pub namespace: SmallVec<[Name; 4]>,
    /// Type parameters declared at this node, verbatim.
    pub type_params: SmallVec<[TypeParam; 2]>,
    /// Constructor signature; empty for Groups and singletons.
    pub ctor_params: Vec<CtorParam>,
    /// Subtype edge target within this hierarchy; `None` for the root.
    pub supertype: Option<NodeId>,
    /// External `extends` target, recorded for the code generator only.
    pub external_supertype: Option<Name>,
    /// Children in declaration order; empty for concrete descriptors.
    pub children: Vec<NodeId>,
    pub span: Span,
}

impl TypeDescriptor {
    pub fn is_group(&self) -> bool {
        self.kind == DescriptorKind::Abstract
    }

    pub fn is_leaf(&self) -> bool {
        !self.is_group()
    }
}

/// The lowered hierarchy: one descriptor per node, indexed by [`NodeId`].
///
/// Immutable once built; safe to cache per declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Hierarchy {
    descriptors: Vec<TypeDescriptor>,
    root: NodeId,
}

impl Hierarchy {
    pub fn descriptor(&self, id: NodeId) -> &TypeDescriptor {
        &self.descriptors[id.index()]
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "descriptor indices always fit u32"
        )]
        (0..self.descriptors.len() as u32).map(NodeId::new)
    }

    /// Every Group descriptor, in arena order (the root comes first).
    pub fn groups(&self) -> impl Iterator<Item = &TypeDescriptor> + '_ {
        self.descriptors.iter().filter(|d| d.is_group())
    }

    /// Qualified dot-separated path from the root to `id`.
    pub fn qualified_path(&self, id: NodeId, interner: &StringInterner) -> String {
        let descriptor = self.descriptor(id);
        let mut path = String::new();
        for &segment in &descriptor.namespace {
            path.push_str(interner.lookup(segment));
            path.push('.');
        }
        path.push_str(interner.lookup(descriptor.name));
        path
    }

    /// Full subtype chain `id <: ... <: root`, following subtype edges.
    ///
    /// For documentation and debugging; consistent with the transitive
    /// closure of the per-node supertype edges. An edge that skips to a
    /// grandparent shortens the chain accordingly.
    pub fn subtype_chain(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = vec![id];
        let mut current = self.descriptor(id).supertype;
        while let Some(ancestor) = current {
            chain.push(ancestor);
            current = self.descriptor(ancestor).supertype;
        }
        chain
    }
}

/// Lower a validated tree into its [`Hierarchy`].
///
/// Total: all failure modes were rejected by [`crate::validate`].
#[tracing::instrument(level = "debug", skip_all, fields(nodes = validated.len()))]
pub fn lower(validated: &ValidatedTree<'_>) -> Hierarchy {
    let tree = validated.tree();
    let mut descriptors = Vec::with_capacity(tree.len());

    for id in tree.ids() {
        let node = tree.node(id);
        let resolved = validated.resolved_supertype(id);

        let kind = if node.is_group() {
            DescriptorKind::Abstract
        } else if node.ctor_params.is_empty() {
            DescriptorKind::Singleton
        } else {
            DescriptorKind::Constructor
        };

        descriptors.push(TypeDescriptor {
            id,
            name: node.name,
            kind,
            namespace: namespace_of(validated, id),
            type_params: node.type_params.clone(),
            ctor_params: node.ctor_params.clone(),
            supertype: resolved.parent,
            external_supertype: resolved.external,
            children: node.children.clone(),
            span: node.span,
        });
    }

    Hierarchy {
        descriptors,
        root: tree.root(),
    }
}

/// Ancestor Group names from the root, nearest-last, excluding `id` itself.
fn namespace_of(validated: &ValidatedTree<'_>, id: NodeId) -> SmallVec<[Name; 4]> {
    let tree = validated.tree();
    let mut namespace = SmallVec::new();
    let mut current = validated.parent(id);
    while let Some(ancestor) = current {
        namespace.push(tree.node(ancestor).name);
        current = validated.parent(ancestor);
    }
    namespace.reverse();
    namespace
}
