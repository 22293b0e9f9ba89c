//! Upward ancestor search with kind targets and boundaries.

use jast_syntax::{NodeArena, NodeIndex, SyntaxKind};
use tracing::trace;

/// Defensive cap on parent-chain walks. Parent links are wired once at
/// construction, but a malformed tree must not hang a query.
pub const MAX_TREE_WALK_ITERATIONS: usize = 10_000;

/// Walk the parent chain from `start` looking for a target kind.
///
/// `include_self` controls whether `start` itself is examined. At each
/// node the target test runs before the boundary test, so a kind in
/// both sets is found rather than stopped at. Hitting a boundary kind
/// or running off the root ends the search with `None`.
pub fn ascend<T, B>(
    arena: &NodeArena,
    start: NodeIndex,
    include_self: bool,
    is_target: T,
    is_boundary: B,
) -> Option<NodeIndex>
where
    T: Fn(SyntaxKind) -> bool,
    B: Fn(SyntaxKind) -> bool,
{
    let mut current = if include_self {
        start
    } else {
        arena.parent_of(start)
    };
    let mut iterations = 0;
    while current.is_some() {
        iterations += 1;
        if iterations > MAX_TREE_WALK_ITERATIONS {
            trace!(start = start.0, "ancestor search exceeded iteration cap");
            return None;
        }
        let kind = arena.kind_of(current)?;
        if is_target(kind) {
            return Some(current);
        }
        if is_boundary(kind) {
            return None;
        }
        current = arena.parent_of(current);
    }
    None
}

/// Nearest lambda expression properly enclosing `start`.
///
/// The search starts at the parent, so a lambda node passed in directly
/// is not its own answer. Any body declaration or anonymous class
/// declaration between `start` and a candidate lambda ends the search.
pub fn find_enclosing_lambda(arena: &NodeArena, start: NodeIndex) -> Option<NodeIndex> {
    ascend(
        arena,
        start,
        false,
        |kind| kind == SyntaxKind::LambdaExpression,
        |kind| kind.is_body_declaration() || kind == SyntaxKind::AnonymousClassDeclaration,
    )
}

/// Nearest method declaration at or above `start`.
///
/// Unlike [`find_enclosing_lambda`] this is reflexive: a method
/// declaration node finds itself. Lambdas also act as boundaries here,
/// so code inside a lambda body resolves to no method.
pub fn find_parent_method_declaration(arena: &NodeArena, start: NodeIndex) -> Option<NodeIndex> {
    ascend(
        arena,
        start,
        true,
        |kind| kind == SyntaxKind::MethodDeclaration,
        |kind| {
            kind.is_body_declaration()
                || kind == SyntaxKind::AnonymousClassDeclaration
                || kind == SyntaxKind::LambdaExpression
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use jast_syntax::node::*;

    // x; wrapped in an expression statement inside a block.
    fn stmt_in_block(arena: &mut NodeArena) -> (NodeIndex, NodeIndex) {
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
        (name, block)
    }

    #[test]
    fn target_beats_boundary_at_the_same_node() {
        let mut arena = NodeArena::new();
        let (name, block) = stmt_in_block(&mut arena);
        let method = arena.add_method_declaration(
            0,
            10,
            MethodDeclData {
                name: NodeIndex::NONE,
                return_type: NodeIndex::NONE,
                parameters: NodeList::empty(),
                thrown_exceptions: NodeList::empty(),
                body: block,
                is_constructor: false,
            },
            ModifierFlags::empty(),
        );
        // MethodDeclaration is itself a body declaration; the target
        // test must win.
        assert_eq!(find_parent_method_declaration(&arena, name), Some(method));
    }

    #[test]
    fn include_self_asymmetry() {
        let mut arena = NodeArena::new();
        let (_, block) = stmt_in_block(&mut arena);
        let lambda = arena.add_lambda_expression(
            0,
            5,
            LambdaData {
                parameters: NodeList::empty(),
                body: block,
            },
        );
        let method_body = arena.add_block(
            0,
            6,
            BlockData {
                statements: NodeList::empty(),
            },
        );
        let method = arena.add_method_declaration(
            0,
            10,
            MethodDeclData {
                name: NodeIndex::NONE,
                return_type: NodeIndex::NONE,
                parameters: NodeList::empty(),
                thrown_exceptions: NodeList::empty(),
                body: method_body,
                is_constructor: false,
            },
            ModifierFlags::empty(),
        );
        // A lambda is not its own enclosing lambda.
        assert_eq!(find_enclosing_lambda(&arena, lambda), None);
        // A method declaration is its own parent method.
        assert_eq!(find_parent_method_declaration(&arena, method), Some(method));
    }

    #[test]
    fn search_from_absent_node_finds_nothing() {
        let arena = NodeArena::new();
        assert_eq!(find_enclosing_lambda(&arena, NodeIndex::NONE), None);
        assert_eq!(find_parent_method_declaration(&arena, NodeIndex::NONE), None);
    }
}
