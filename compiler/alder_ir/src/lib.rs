//! Alder IR - Declaration-Tree Types for the Hierarchical Enum Engine
//!
//! This crate contains the core data structures shared by the engine:
//! - Spans for source locations
//! - Names for interned identifiers
//! - The declaration tree (`DeclTree`, `Node`, `NodeId`)
//! - `TreeBuilder`, the construction boundary for the front-end parser
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32)
//! - **Flatten Everything**: No `Box<Node>`, use `NodeId(u32)` indices
//! - **Single Ownership**: The tree owns all nodes; parent back-references
//!   are derived by consumers, never stored as a second ownership path.

mod interner;
mod name;
mod span;
mod tree;

pub use interner::StringInterner;
pub use name::Name;
pub use span::Span;
pub use tree::{
    CtorParam, DeclTree, Node, NodeId, NodeKind, TreeBuilder, TypeParam, Variance,
};
