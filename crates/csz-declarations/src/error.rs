//! Internal-consistency faults that abort building a file's declaration tree.
//!
//! Declaration-legality problems are not errors: they are recorded as
//! `DeclarationDiagnostic`s on the tree. These variants mean the syntax tree
//! itself is not shaped the way any parser would produce it.

use csz_common::{Span, TreeId};
use csz_syntax::SyntaxKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    #[error("tree {tree}: root node {node} is {found:?}, expected a compilation unit")]
    RootNotCompilationUnit {
        tree: TreeId,
        node: u32,
        found: Option<SyntaxKind>,
    },

    #[error("tree {tree}: member index {node} of a {container:?} does not resolve to a node")]
    DanglingMember {
        tree: TreeId,
        node: u32,
        container: SyntaxKind,
    },

    #[error("tree {tree}: unexpected {kind:?} at {span} in the member list of a {container:?}")]
    UnexpectedMemberKind {
        tree: TreeId,
        kind: SyntaxKind,
        span: Span,
        container: SyntaxKind,
    },

    #[error("tree {tree}: {kind:?} node {node} has no {expected} data")]
    MissingNodeData {
        tree: TreeId,
        node: u32,
        kind: SyntaxKind,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, DeclarationError>;
