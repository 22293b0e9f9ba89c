//! Structural child enumeration and pre-order tree walking.
//!
//! `for_each_child` yields every structural child of a node in source
//! appearance order. Optional slots holding `NodeIndex::NONE` are never
//! yielded, and token-level properties (operators, modifier flags,
//! varargs markers) are not children at all.

use crate::arena::NodeArena;
use crate::node::NodeIndex;
use crate::syntax_kind::SyntaxKind;

/// Visitor verdict for [`walk`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkControl {
    /// Continue into this node's children.
    Descend,
    /// Skip this node's subtree.
    Skip,
}

/// Invoke `f` once per structural child of `index`, in source order.
///
/// Unknown indices and childless kinds produce no calls.
pub fn for_each_child<F>(arena: &NodeArena, index: NodeIndex, mut f: F)
where
    F: FnMut(NodeIndex),
{
    let Some(node) = arena.get(index) else {
        return;
    };
    let mut emit = |child: NodeIndex| {
        if child.is_some() {
            f(child);
        }
    };
    match node.kind {
        SyntaxKind::CompilationUnit => {
            if let Some(data) = arena.get_compilation_unit(node) {
                emit(data.package);
                for &c in &data.imports.nodes {
                    emit(c);
                }
                for &c in &data.types.nodes {
                    emit(c);
                }
            }
        }
        SyntaxKind::PackageDeclaration => {
            if let Some(data) = arena.get_package(node) {
                emit(data.name);
            }
        }
        SyntaxKind::ImportDeclaration => {
            if let Some(data) = arena.get_import(node) {
                emit(data.name);
            }
        }
        SyntaxKind::TypeDeclaration | SyntaxKind::AnnotationTypeDeclaration => {
            if let Some(data) = arena.get_type_declaration(node) {
                emit(data.name);
                emit(data.superclass);
                for &c in &data.superinterfaces.nodes {
                    emit(c);
                }
                for &c in &data.body_declarations.nodes {
                    emit(c);
                }
            }
        }
        SyntaxKind::EnumDeclaration => {
            if let Some(data) = arena.get_enum_declaration(node) {
                emit(data.name);
                for &c in &data.enum_constants.nodes {
                    emit(c);
                }
                for &c in &data.body_declarations.nodes {
                    emit(c);
                }
            }
        }
        SyntaxKind::AnonymousClassDeclaration => {
            if let Some(data) = arena.get_anonymous_class(node) {
                for &c in &data.body_declarations.nodes {
                    emit(c);
                }
            }
        }
        SyntaxKind::EnumConstantDeclaration => {
            if let Some(data) = arena.get_enum_constant(node) {
                emit(data.name);
                for &c in &data.arguments.nodes {
                    emit(c);
                }
                emit(data.anonymous_class_declaration);
            }
        }
        SyntaxKind::FieldDeclaration | SyntaxKind::VariableDeclarationStatement => {
            if let Some(data) = arena.get_variable_declaration(node) {
                emit(data.type_node);
                for &c in &data.fragments.nodes {
                    emit(c);
                }
            }
        }
        SyntaxKind::MethodDeclaration => {
            if let Some(data) = arena.get_method_declaration(node) {
                // Constructors carry no return type slot.
                emit(data.return_type);
                emit(data.name);
                for &c in &data.parameters.nodes {
                    emit(c);
                }
                for &c in &data.thrown_exceptions.nodes {
                    emit(c);
                }
                emit(data.body);
            }
        }
        SyntaxKind::Initializer => {
            if let Some(data) = arena.get_initializer(node) {
                emit(data.body);
            }
        }
        SyntaxKind::SingleVariableDeclaration => {
            if let Some(data) = arena.get_single_variable(node) {
                emit(data.type_node);
                emit(data.name);
                emit(data.initializer);
            }
        }
        SyntaxKind::VariableDeclarationFragment => {
            if let Some(data) = arena.get_fragment(node) {
                emit(data.name);
                emit(data.initializer);
            }
        }
        SyntaxKind::Block => {
            if let Some(data) = arena.get_block(node) {
                for &c in &data.statements.nodes {
                    emit(c);
                }
            }
        }
        SyntaxKind::ExpressionStatement | SyntaxKind::ParenthesizedExpression => {
            if let Some(data) = arena.get_wrapped_expression(node) {
                emit(data.expression);
            }
        }
        SyntaxKind::IfStatement => {
            if let Some(data) = arena.get_if_statement(node) {
                emit(data.expression);
                emit(data.then_statement);
                emit(data.else_statement);
            }
        }
        SyntaxKind::ForStatement | SyntaxKind::WhileStatement => {
            if let Some(data) = arena.get_loop(node) {
                for &c in &data.initializers.nodes {
                    emit(c);
                }
                emit(data.condition);
                for &c in &data.updaters.nodes {
                    emit(c);
                }
                emit(data.body);
            }
        }
        SyntaxKind::DoStatement => {
            // Body precedes the condition in source.
            if let Some(data) = arena.get_loop(node) {
                emit(data.body);
                emit(data.condition);
            }
        }
        SyntaxKind::EnhancedForStatement => {
            if let Some(data) = arena.get_enhanced_for(node) {
                emit(data.parameter);
                emit(data.expression);
                emit(data.body);
            }
        }
        SyntaxKind::ReturnStatement | SyntaxKind::ThrowStatement => {
            if let Some(data) = arena.get_return_data(node) {
                emit(data.expression);
            }
        }
        SyntaxKind::TryStatement => {
            if let Some(data) = arena.get_try_statement(node) {
                emit(data.body);
                for &c in &data.catch_clauses.nodes {
                    emit(c);
                }
                emit(data.finally_block);
            }
        }
        SyntaxKind::CatchClause => {
            if let Some(data) = arena.get_catch_clause(node) {
                emit(data.exception);
                emit(data.body);
            }
        }
        SyntaxKind::SwitchStatement => {
            if let Some(data) = arena.get_switch_statement(node) {
                emit(data.expression);
                for &c in &data.statements.nodes {
                    emit(c);
                }
            }
        }
        SyntaxKind::SwitchCase => {
            if let Some(data) = arena.get_switch_case(node) {
                for &c in &data.expressions.nodes {
                    emit(c);
                }
            }
        }
        SyntaxKind::BreakStatement | SyntaxKind::ContinueStatement => {
            if let Some(data) = arena.get_jump_data(node) {
                emit(data.label);
            }
        }
        SyntaxKind::LabeledStatement => {
            if let Some(data) = arena.get_labeled_statement(node) {
                emit(data.label);
                emit(data.body);
            }
        }
        SyntaxKind::SynchronizedStatement => {
            if let Some(data) = arena.get_synchronized_statement(node) {
                emit(data.expression);
                emit(data.body);
            }
        }
        SyntaxKind::AssertStatement => {
            if let Some(data) = arena.get_assert_statement(node) {
                emit(data.expression);
                emit(data.message);
            }
        }
        SyntaxKind::QualifiedName => {
            if let Some(data) = arena.get_qualified_name(node) {
                emit(data.qualifier);
                emit(data.name);
            }
        }
        SyntaxKind::MethodInvocation | SyntaxKind::SuperMethodInvocation => {
            if let Some(data) = arena.get_method_invocation(node) {
                emit(data.expression);
                emit(data.name);
                for &c in &data.arguments.nodes {
                    emit(c);
                }
            }
        }
        SyntaxKind::ClassInstanceCreation => {
            if let Some(data) = arena.get_class_instance_creation(node) {
                emit(data.type_node);
                for &c in &data.arguments.nodes {
                    emit(c);
                }
                emit(data.anonymous_class_declaration);
            }
        }
        SyntaxKind::LambdaExpression => {
            if let Some(data) = arena.get_lambda(node) {
                for &c in &data.parameters.nodes {
                    emit(c);
                }
                emit(data.body);
            }
        }
        SyntaxKind::FieldAccess | SyntaxKind::ArrayAccess => {
            if let Some(data) = arena.get_access_expression(node) {
                emit(data.expression);
                emit(data.name_or_index);
            }
        }
        SyntaxKind::ArrayCreation => {
            if let Some(data) = arena.get_array_creation(node) {
                emit(data.type_node);
                for &c in &data.dimensions.nodes {
                    emit(c);
                }
                emit(data.initializer);
            }
        }
        SyntaxKind::ArrayInitializer => {
            if let Some(data) = arena.get_array_initializer(node) {
                for &c in &data.expressions.nodes {
                    emit(c);
                }
            }
        }
        SyntaxKind::InfixExpression => {
            if let Some(data) = arena.get_infix_expression(node) {
                emit(data.left_operand);
                emit(data.right_operand);
            }
        }
        SyntaxKind::PrefixExpression | SyntaxKind::PostfixExpression => {
            if let Some(data) = arena.get_unary_expression(node) {
                emit(data.operand);
            }
        }
        SyntaxKind::ConditionalExpression => {
            if let Some(data) = arena.get_conditional_expression(node) {
                emit(data.expression);
                emit(data.then_expression);
                emit(data.else_expression);
            }
        }
        SyntaxKind::CastExpression => {
            if let Some(data) = arena.get_cast_expression(node) {
                emit(data.type_node);
                emit(data.expression);
            }
        }
        SyntaxKind::InstanceofExpression => {
            if let Some(data) = arena.get_instanceof_expression(node) {
                emit(data.left_operand);
                emit(data.right_operand);
            }
        }
        SyntaxKind::Assignment => {
            if let Some(data) = arena.get_assignment(node) {
                emit(data.left_hand_side);
                emit(data.right_hand_side);
            }
        }
        SyntaxKind::SimpleType => {
            if let Some(data) = arena.get_simple_type(node) {
                emit(data.name);
            }
        }
        SyntaxKind::ArrayType => {
            if let Some(data) = arena.get_array_type(node) {
                emit(data.element_type);
            }
        }
        SyntaxKind::ParameterizedType => {
            if let Some(data) = arena.get_parameterized_type(node) {
                emit(data.type_node);
                for &c in &data.type_arguments.nodes {
                    emit(c);
                }
            }
        }
        // Leaves: names without structure, literals, this, empty
        // statement, primitive types, unknown.
        _ => {}
    }
}

/// Pre-order walk rooted at `index`. The visitor sees `index` itself
/// first and decides per node whether to descend into its subtree.
pub fn walk<F>(arena: &NodeArena, index: NodeIndex, visit: &mut F)
where
    F: FnMut(NodeIndex) -> WalkControl,
{
    if index.is_none() {
        return;
    }
    match visit(index) {
        WalkControl::Skip => {}
        WalkControl::Descend => {
            for_each_child(arena, index, |child| walk(arena, child, visit));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::*;

    fn small_method(arena: &mut NodeArena) -> (NodeIndex, Vec<NodeIndex>) {
        let ret_ty = arena.add_primitive_type(0, 3, PrimitiveTypeCode::Int);
        let name = arena.add_simple_name(4, 5, "f");
        let p_ty = arena.add_primitive_type(6, 9, PrimitiveTypeCode::Int);
        let p_name = arena.add_simple_name(10, 11, "a");
        let param = arena.add_single_variable_declaration(
            6,
            11,
            SingleVariableData {
                type_node: p_ty,
                name: p_name,
                is_varargs: false,
                initializer: NodeIndex::NONE,
            },
            ModifierFlags::empty(),
        );
        let body = arena.add_block(
            13,
            15,
            BlockData {
                statements: NodeList::empty(),
            },
        );
        let method = arena.add_method_declaration(
            0,
            15,
            MethodDeclData {
                name,
                return_type: ret_ty,
                parameters: NodeList::new(vec![param]),
                thrown_exceptions: NodeList::empty(),
                body,
                is_constructor: false,
            },
            ModifierFlags::PUBLIC,
        );
        (method, vec![ret_ty, name, param, body])
    }

    #[test]
    fn children_come_in_source_order() {
        let mut arena = NodeArena::new();
        let (method, expected) = small_method(&mut arena);
        let mut seen = Vec::new();
        for_each_child(&arena, method, |c| seen.push(c));
        assert_eq!(seen, expected);
    }

    #[test]
    fn absent_optional_slots_are_not_yielded() {
        let mut arena = NodeArena::new();
        let cond = arena.add_literal(SyntaxKind::BooleanLiteral, 4, 8, "true");
        let then = arena.add_node(SyntaxKind::EmptyStatement, 10, 11);
        let stmt = arena.add_if_statement(
            0,
            11,
            IfStatementData {
                expression: cond,
                then_statement: then,
                else_statement: NodeIndex::NONE,
            },
        );
        let mut seen = Vec::new();
        for_each_child(&arena, stmt, |c| seen.push(c));
        assert_eq!(seen, vec![cond, then]);
    }

    #[test]
    fn do_statement_body_precedes_condition() {
        let mut arena = NodeArena::new();
        let body = arena.add_block(
            3,
            5,
            BlockData {
                statements: NodeList::empty(),
            },
        );
        let cond = arena.add_literal(SyntaxKind::BooleanLiteral, 12, 16, "true");
        let stmt = arena.add_loop(
            SyntaxKind::DoStatement,
            0,
            18,
            LoopData {
                initializers: NodeList::empty(),
                condition: cond,
                updaters: NodeList::empty(),
                body,
            },
        );
        let mut seen = Vec::new();
        for_each_child(&arena, stmt, |c| seen.push(c));
        assert_eq!(seen, vec![body, cond]);
    }

    #[test]
    fn walk_visits_root_first_and_honors_skip() {
        let mut arena = NodeArena::new();
        let (method, _) = small_method(&mut arena);
        let mut order = Vec::new();
        walk(&arena, method, &mut |idx| {
            order.push(idx);
            if arena.kind_of(idx) == Some(SyntaxKind::SingleVariableDeclaration) {
                WalkControl::Skip
            } else {
                WalkControl::Descend
            }
        });
        assert_eq!(order[0], method);
        let param = order
            .iter()
            .position(|&i| arena.kind_of(i) == Some(SyntaxKind::SingleVariableDeclaration))
            .unwrap();
        // The skipped parameter's subtree does not appear; the next
        // visited node is its sibling, the method body.
        assert_eq!(arena.kind_of(order[param + 1]), Some(SyntaxKind::Block));
        assert!(order
            .iter()
            .all(|&i| arena.parent_of(i) != order[param]));
    }

    #[test]
    fn leaves_have_no_children() {
        let mut arena = NodeArena::new();
        let name = arena.add_simple_name(0, 1, "x");
        let this = arena.add_node(SyntaxKind::ThisExpression, 2, 6);
        let mut count = 0;
        for_each_child(&arena, name, |_| count += 1);
        for_each_child(&arena, this, |_| count += 1);
        assert_eq!(count, 0);
    }
}
