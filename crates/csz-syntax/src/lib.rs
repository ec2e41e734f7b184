//! Syntax tree input contract for the csz compiler front end.
//!
//! The declaration builder does not parse: it consumes trees in this
//! representation. A tree is an arena of compact `Node` headers plus typed
//! data pools, with children created before their parents and parent links
//! recorded as nodes are added.

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

// Node headers, data pools and the arena
pub mod node;
pub use node::{Node, NodeArena, NodeIndex, NodeList, node_flags};

// NodeArena construction (add_* methods)
mod node_arena;

// NodeArena typed accessors (get_* methods)
mod node_access;

pub mod tree;
pub use tree::{ParseOptions, SyntaxReference, SyntaxTree};

// Await/yield/return scans over statement subtrees
pub mod syntax_facts;

// Programmatic tree construction
pub mod factory;
pub use factory::SyntaxFactory;
