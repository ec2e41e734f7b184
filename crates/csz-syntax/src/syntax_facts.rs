//! Syntax facts over statement subtrees.
//!
//! These scans answer questions about a top-level statement without binding
//! it: does it suspend (`await`), is it an iterator (`yield`), does it return a
//! value. None of them look inside lambdas, anonymous methods or local
//! functions, whose bodies belong to a different function.
//!
//! The walks use an explicit stack so deeply nested statements cannot
//! exhaust the call stack.

use crate::node::{Node, NodeArena, NodeIndex, node_flags};
use crate::syntax_kind::SyntaxKind;

/// Check if a statement contains an await operation: an `await` expression,
/// `await foreach`, `await using`, or an `await using` local declaration.
#[must_use]
pub fn has_await_operations(arena: &NodeArena, statement: NodeIndex) -> bool {
    any_descendant_outside_nested_functions(arena, statement, |node| match node.kind {
        SyntaxKind::AwaitExpression => true,
        SyntaxKind::LocalDeclarationStatement
        | SyntaxKind::ForEachStatement
        | SyntaxKind::UsingStatement => node.has_flag(node_flags::AWAIT_KEYWORD),
        _ => false,
    })
}

/// Check if a statement contains `yield return` or `yield break`.
#[must_use]
pub fn has_yield_operations(arena: &NodeArena, statement: NodeIndex) -> bool {
    any_descendant_outside_nested_functions(arena, statement, |node| {
        matches!(
            node.kind,
            SyntaxKind::YieldReturnStatement | SyntaxKind::YieldBreakStatement
        )
    })
}

/// Check if a statement contains a `return` with an expression.
#[must_use]
pub fn has_return_with_expression(arena: &NodeArena, statement: NodeIndex) -> bool {
    any_descendant_outside_nested_functions(arena, statement, |node| {
        node.kind == SyntaxKind::ReturnStatement
            && arena
                .get_composite(node)
                .is_some_and(|ret| !ret.children.is_empty())
    })
}

/// Whether `statement` is an empty statement (`;`).
#[must_use]
pub fn is_empty_statement(arena: &NodeArena, statement: NodeIndex) -> bool {
    arena.kind_of(statement) == Some(SyntaxKind::EmptyStatement)
}

/// Visit `root` and its descendants (not descending into nested functions)
/// and report whether any visited node satisfies `predicate`.
fn any_descendant_outside_nested_functions(
    arena: &NodeArena,
    root: NodeIndex,
    mut predicate: impl FnMut(&Node) -> bool,
) -> bool {
    let mut stack = vec![root];
    while let Some(idx) = stack.pop() {
        let Some(node) = arena.get(idx) else {
            continue;
        };
        if predicate(node) {
            return true;
        }
        if node.kind.is_nested_function() {
            continue;
        }
        if let Some(composite) = arena.get_composite(node) {
            // Reverse so children are visited in source order.
            stack.extend(composite.children.nodes.iter().rev().copied());
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::CompositeData;

    fn composite(arena: &mut NodeArena, kind: SyntaxKind, children: Vec<NodeIndex>) -> NodeIndex {
        arena.add_composite(kind, 0, 0, CompositeData { children: children.into() })
    }

    #[test]
    fn test_missing_node_has_no_operations() {
        let arena = NodeArena::new();
        assert!(!has_await_operations(&arena, NodeIndex::NONE));
        assert!(!has_yield_operations(&arena, NodeIndex(7)));
    }

    #[test]
    fn test_bare_return_is_not_return_with_expression() {
        let mut arena = NodeArena::new();
        let ret = composite(&mut arena, SyntaxKind::ReturnStatement, vec![]);
        assert!(!has_return_with_expression(&arena, ret));

        let value = composite(&mut arena, SyntaxKind::LiteralExpression, vec![]);
        let ret = composite(&mut arena, SyntaxKind::ReturnStatement, vec![value]);
        assert!(has_return_with_expression(&arena, ret));
    }
}
