//! Syntax trees, parse options and syntax references.

use crate::node::{Node, NodeArena, NodeIndex};
use crate::syntax_kind::SyntaxKind;
use csz_common::{LanguageVersion, Location, SourceCodeKind, Span, TreeId};
use serde::{Deserialize, Serialize};

/// Options the parser used for a tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub kind: SourceCodeKind,
    pub language_version: LanguageVersion,
}

impl ParseOptions {
    #[must_use]
    pub fn script() -> Self {
        ParseOptions {
            kind: SourceCodeKind::Script,
            ..ParseOptions::default()
        }
    }

    #[must_use]
    pub fn with_language_version(mut self, language_version: LanguageVersion) -> Self {
        self.language_version = language_version;
        self
    }
}

/// Non-owning handle to a node: enough to re-fetch the node and its span
/// from the tree it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyntaxReference {
    pub tree: TreeId,
    pub node: NodeIndex,
    pub span: Span,
}

impl SyntaxReference {
    #[inline]
    #[must_use]
    pub const fn location(&self) -> Location {
        Location::new(self.tree, self.span)
    }
}

/// One parsed source file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxTree {
    pub id: TreeId,
    pub file_name: String,
    pub options: ParseOptions,
    pub arena: NodeArena,
    pub root: NodeIndex,
}

impl SyntaxTree {
    #[must_use]
    pub fn new(
        id: TreeId,
        file_name: impl Into<String>,
        options: ParseOptions,
        arena: NodeArena,
        root: NodeIndex,
    ) -> SyntaxTree {
        SyntaxTree {
            id,
            file_name: file_name.into(),
            options,
            arena,
            root,
        }
    }

    #[inline]
    #[must_use]
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    #[inline]
    #[must_use]
    pub fn root_node(&self) -> Option<&Node> {
        self.arena.get(self.root)
    }

    #[inline]
    #[must_use]
    pub fn is_script(&self) -> bool {
        self.options.kind == SourceCodeKind::Script
    }

    /// Span of a node, or an empty span at 0 when the index does not resolve.
    #[must_use]
    pub fn span_of(&self, index: NodeIndex) -> Span {
        self.arena.get(index).map_or(Span::at(0), Node::span)
    }

    /// Handle for a node in this tree.
    #[must_use]
    pub fn reference(&self, index: NodeIndex) -> SyntaxReference {
        SyntaxReference {
            tree: self.id,
            node: index,
            span: self.span_of(index),
        }
    }

    /// Location of a node in this tree.
    #[must_use]
    pub fn location(&self, index: NodeIndex) -> Location {
        Location::new(self.id, self.span_of(index))
    }

    /// Re-fetch the node a reference points at. Returns `None` for references
    /// into another tree, or when the node no longer has the recorded span.
    #[must_use]
    pub fn resolve(&self, reference: &SyntaxReference) -> Option<&Node> {
        if reference.tree != self.id {
            return None;
        }
        self.arena
            .get(reference.node)
            .filter(|node| node.span() == reference.span)
    }

    /// Kind of the node a reference points at.
    #[must_use]
    pub fn resolve_kind(&self, reference: &SyntaxReference) -> Option<SyntaxKind> {
        self.resolve(reference).map(|node| node.kind)
    }
}
