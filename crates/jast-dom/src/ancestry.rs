//! Strict ancestry test.

use crate::ascend::MAX_TREE_WALK_ITERATIONS;
use jast_syntax::{NodeArena, NodeIndex};

/// True when `ancestor` lies strictly above `node` on the parent chain.
///
/// The test is not reflexive: a node is never its own ancestor. An
/// absent `node` trivially has no ancestors. An absent `ancestor` is a
/// caller contract violation.
pub fn is_ancestor(arena: &NodeArena, node: NodeIndex, ancestor: NodeIndex) -> bool {
    assert!(ancestor.is_some(), "ancestor candidate must be present");
    let mut current = arena.parent_of(node);
    let mut iterations = 0;
    while current.is_some() {
        iterations += 1;
        if iterations > MAX_TREE_WALK_ITERATIONS {
            return false;
        }
        if current == ancestor {
            return true;
        }
        current = arena.parent_of(current);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use jast_syntax::node::*;
    use jast_syntax::SyntaxKind;

    fn three_level_tree(arena: &mut NodeArena) -> (NodeIndex, NodeIndex, NodeIndex) {
        let name = arena.add_simple_name(0, 1, "x");
        let stmt = arena.add_wrapped_expression(
            SyntaxKind::ExpressionStatement,
            0,
            2,
            WrappedExprData { expression: name },
        );
        let block = arena.add_block(
            0,
            3,
            BlockData {
                statements: NodeList::new(vec![stmt]),
            },
        );
        (name, stmt, block)
    }

    #[test]
    fn transitive_ancestors_are_found() {
        let mut arena = NodeArena::new();
        let (name, stmt, block) = three_level_tree(&mut arena);
        assert!(is_ancestor(&arena, name, stmt));
        assert!(is_ancestor(&arena, name, block));
        assert!(is_ancestor(&arena, stmt, block));
    }

    #[test]
    fn not_reflexive_and_not_downward() {
        let mut arena = NodeArena::new();
        let (name, _, block) = three_level_tree(&mut arena);
        assert!(!is_ancestor(&arena, name, name));
        assert!(!is_ancestor(&arena, block, name));
    }

    #[test]
    fn unrelated_siblings_are_not_ancestors() {
        let mut arena = NodeArena::new();
        let a = arena.add_simple_name(0, 1, "a");
        let b = arena.add_simple_name(2, 3, "b");
        assert!(!is_ancestor(&arena, a, b));
    }

    #[test]
    #[should_panic(expected = "ancestor candidate must be present")]
    fn absent_ancestor_is_a_contract_violation() {
        let mut arena = NodeArena::new();
        let name = arena.add_simple_name(0, 1, "x");
        is_ancestor(&arena, name, NodeIndex::NONE);
    }
}
