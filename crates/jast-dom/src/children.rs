//! Direct child collection.

use jast_syntax::{walk, NodeArena, NodeIndex, WalkControl};
use tracing::trace;

/// Collect the direct structural children of `index`, in source order.
///
/// Reuses the pre-order walk: the first node the walk delivers is the
/// start node itself, which arms the collector and descends one level;
/// every node after that is a direct child and its subtree is skipped.
/// An absent or invalid `index` yields an empty list.
pub fn get_children(arena: &NodeArena, index: NodeIndex) -> Vec<NodeIndex> {
    let mut result: Option<Vec<NodeIndex>> = None;
    walk(arena, index, &mut |node| {
        if let Some(children) = result.as_mut() {
            children.push(node);
            WalkControl::Skip
        } else {
            // First entry is the start node itself.
            result = Some(Vec::new());
            WalkControl::Descend
        }
    });
    let children = result.unwrap_or_default();
    trace!(node = index.0, count = children.len(), "collected children");
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use jast_syntax::node::*;
    use jast_syntax::SyntaxKind;

    #[test]
    fn absent_node_yields_empty_list() {
        let arena = NodeArena::new();
        assert!(get_children(&arena, NodeIndex::NONE).is_empty());
        assert!(get_children(&arena, NodeIndex(42)).is_empty());
    }

    #[test]
    fn leaf_yields_empty_list() {
        let mut arena = NodeArena::new();
        let name = arena.add_simple_name(0, 1, "x");
        assert!(get_children(&arena, name).is_empty());
    }

    #[test]
    fn grandchildren_are_not_included() {
        let mut arena = NodeArena::new();
        let left = arena.add_simple_name(0, 1, "a");
        let right = arena.add_literal(SyntaxKind::NumberLiteral, 4, 5, "1");
        let sum = arena.add_infix_expression(
            0,
            5,
            BinaryExprData {
                left_operand: left,
                operator: InfixOperator::Plus,
                right_operand: right,
            },
        );
        let stmt = arena.add_wrapped_expression(
            SyntaxKind::ExpressionStatement,
            0,
            6,
            WrappedExprData { expression: sum },
        );
        assert_eq!(get_children(&arena, stmt), vec![sum]);
        assert_eq!(get_children(&arena, sum), vec![left, right]);
    }
}
