//! The hierarchical enum declaration tree.
//!
//! A declaration like
//!
//! ```alder
//! enum Animal:
//!     enum Mammal: Dog, Cat
//!     enum Bird: Sparrow, Pinguin
//!     Fish
//! ```
//!
//! becomes a [`DeclTree`]: a flat arena of [`Node`]s rooted at a Group node,
//! with children stored as ordered [`NodeId`] sequences. The tree is the
//! single owner of every node; consumers derive parent back-references as
//! pure lookups.
//!
//! The front-end parser constructs trees through [`TreeBuilder`], the only
//! construction surface. The engine itself treats a finished tree as
//! immutable.

use smallvec::SmallVec;

use crate::{Name, Span, StringInterner};

/// Index of a node in a [`DeclTree`] arena.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        NodeId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Debug for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// What a declaration names: a runtime case or a nested enum.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    /// A case with no nested subcases; the unit a runtime value instantiates.
    Leaf,
    /// A `case enum`: a container with its own nested cases. Represents a
    /// type/namespace, never a value.
    Group,
}

/// Declared variance of a type parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variance {
    Covariant,
    Contravariant,
    Invariant,
}

/// A type parameter declared on a node: `<+T>`, `<-T>`, `<T>`.
///
/// Parameters are local to their declaring node; the engine never unifies
/// them across nesting levels.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeParam {
    pub name: Name,
    pub variance: Variance,
}

/// A constructor parameter: `Failed(reason: str)`.
///
/// The type is carried as an opaque interned name; the engine does not
/// resolve or check constructor parameter types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CtorParam {
    pub name: Name,
    pub ty: Name,
}

/// A declaration in the tree.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Node {
    pub name: Name,
    pub kind: NodeKind,
    /// Type parameters declared at this node, in declaration order.
    pub type_params: SmallVec<[TypeParam; 2]>,
    /// Constructor parameters; empty for parameterless cases and Groups.
    pub ctor_params: Vec<CtorParam>,
    /// Explicit `extends` target, by bare name. `None` means the supertype
    /// is the immediately enclosing node.
    pub declared_supertype: Option<Name>,
    /// Children in declaration order. Non-empty only for Groups.
    pub children: Vec<NodeId>,
    /// Position among siblings; drives depth-first traversal order.
    pub source_index: u32,
    pub span: Span,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Leaf
    }

    pub fn is_group(&self) -> bool {
        self.kind == NodeKind::Group
    }
}

/// An immutable hierarchical enum declaration.
///
/// Owns all nodes in a flat arena indexed by [`NodeId`]. Constructed once
/// per declaration via [`TreeBuilder`], consumed read-only by the engine,
/// and discarded after lowering artifacts are produced.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct DeclTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl DeclTree {
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids, in arena order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "arena indices always fit u32"
        )]
        (0..self.nodes.len() as u32).map(NodeId::new)
    }
}

/// Builder used by the front-end parser (and tests) to assemble a
/// [`DeclTree`].
///
/// The builder assigns `source_index` from insertion order and interns all
/// identifiers through the supplied interner. It performs no semantic
/// checks; name clashes and malformed shapes are the validator's job.
pub struct TreeBuilder<'i> {
    interner: &'i mut StringInterner,
    nodes: Vec<Node>,
    root: NodeId,
}

impl<'i> TreeBuilder<'i> {
    /// Start a tree whose root Group is named `root_name`.
    pub fn new(interner: &'i mut StringInterner, root_name: &str) -> Self {
        let name = interner.intern(root_name);
        let root = Node {
            name,
            kind: NodeKind::Group,
            type_params: SmallVec::new(),
            ctor_params: Vec::new(),
            declared_supertype: None,
            children: Vec::new(),
            source_index: 0,
            span: Span::DUMMY,
        };
        TreeBuilder {
            interner,
            nodes: vec![root],
            root: NodeId::new(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Append a Leaf case under `parent`.
    pub fn leaf(&mut self, parent: NodeId, name: &str) -> NodeId {
        self.push(parent, name, NodeKind::Leaf)
    }

    /// Append a nested `case enum` Group under `parent`.
    pub fn group(&mut self, parent: NodeId, name: &str) -> NodeId {
        self.push(parent, name, NodeKind::Group)
    }

    pub fn set_span(&mut self, id: NodeId, span: Span) {
        self.nodes[id.index()].span = span;
    }

    /// Record an explicit `extends` target by bare name.
    pub fn set_supertype(&mut self, id: NodeId, target: &str) {
        let target = self.interner.intern(target);
        self.nodes[id.index()].declared_supertype = Some(target);
    }

    pub fn add_type_param(&mut self, id: NodeId, name: &str, variance: Variance) {
        let name = self.interner.intern(name);
        self.nodes[id.index()].type_params.push(TypeParam { name, variance });
    }

    pub fn add_ctor_param(&mut self, id: NodeId, name: &str, ty: &str) {
        let name = self.interner.intern(name);
        let ty = self.interner.intern(ty);
        self.nodes[id.index()].ctor_params.push(CtorParam { name, ty });
    }

    /// Finish building. The returned tree is immutable.
    pub fn finish(self) -> DeclTree {
        DeclTree {
            nodes: self.nodes,
            root: self.root,
        }
    }

    fn push(&mut self, parent: NodeId, name: &str, kind: NodeKind) -> NodeId {
        let name = self.interner.intern(name);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "arena indices always fit u32"
        )]
        let id = NodeId::new(self.nodes.len() as u32);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "sibling counts always fit u32"
        )]
        let source_index = self.nodes[parent.index()].children.len() as u32;
        self.nodes.push(Node {
            name,
            kind,
            type_params: SmallVec::new(),
            ctor_params: Vec::new(),
            declared_supertype: None,
            children: Vec::new(),
            source_index,
            span: Span::DUMMY,
        });
        self.nodes[parent.index()].children.push(id);
        id
    }
}

#[cfg(test)]
mod tests;
