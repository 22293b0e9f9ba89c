//! `NodeArena`: append-only node storage with typed data pools.
//!
//! The arena is populated bottom-up by a tree builder: children are
//! created before their parents, and every `add_*` constructor wires the
//! parent back-reference of each structural child it receives. After
//! construction the tree is immutable as far as this crate's consumers
//! are concerned; queries only read.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;

#[derive(Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
    extended_info: Vec<ExtendedNodeInfo>,

    identifiers: Vec<IdentifierData>,
    qualified_names: Vec<QualifiedNameData>,
    literals: Vec<LiteralData>,
    binary_exprs: Vec<BinaryExprData>,
    assignments: Vec<AssignmentData>,
    unary_exprs: Vec<UnaryExprData>,
    call_exprs: Vec<CallExprData>,
    instance_creations: Vec<InstanceCreationData>,
    lambdas: Vec<LambdaData>,
    access_exprs: Vec<AccessExprData>,
    array_creations: Vec<ArrayCreationData>,
    array_initializers: Vec<ArrayInitializerData>,
    conditional_exprs: Vec<ConditionalExprData>,
    casts: Vec<CastExprData>,
    instanceofs: Vec<InstanceofData>,
    wrapped_exprs: Vec<WrappedExprData>,
    return_data: Vec<ReturnData>,
    blocks: Vec<BlockData>,
    if_statements: Vec<IfStatementData>,
    loops: Vec<LoopData>,
    enhanced_fors: Vec<EnhancedForData>,
    variable_decls: Vec<VariableDeclData>,
    fragments: Vec<FragmentData>,
    single_var_decls: Vec<SingleVariableData>,
    try_data: Vec<TryData>,
    catch_clauses: Vec<CatchClauseData>,
    switch_data: Vec<SwitchData>,
    case_clauses: Vec<CaseClauseData>,
    labeled_data: Vec<LabeledData>,
    synchronized_data: Vec<SynchronizedData>,
    jump_data: Vec<JumpData>,
    assert_data: Vec<AssertData>,
    type_decls: Vec<TypeDeclData>,
    enum_decls: Vec<EnumDeclData>,
    anonymous_classes: Vec<AnonymousClassData>,
    enum_constants: Vec<EnumConstantData>,
    methods: Vec<MethodDeclData>,
    initializers: Vec<InitializerData>,
    imports: Vec<ImportData>,
    packages: Vec<PackageData>,
    compilation_units: Vec<CompilationUnitData>,
    simple_types: Vec<SimpleTypeData>,
    primitive_types: Vec<PrimitiveTypeData>,
    array_types: Vec<ArrayTypeData>,
    parameterized_types: Vec<ParameterizedTypeData>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Get a thin node by index.
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get extended info for a node.
    #[inline]
    pub fn get_extended(&self, index: NodeIndex) -> Option<&ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get(index.0 as usize)
        }
    }

    /// The node's parent, or `NONE` for the root and for invalid indices.
    #[inline]
    pub fn parent_of(&self, index: NodeIndex) -> NodeIndex {
        self.get_extended(index)
            .map(|ext| ext.parent)
            .unwrap_or(NodeIndex::NONE)
    }

    /// The node's kind, if the index is valid.
    #[inline]
    pub fn kind_of(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|n| n.kind)
    }

    /// Cached modifier flags for a declaration node.
    #[inline]
    pub fn modifier_flags(&self, index: NodeIndex) -> ModifierFlags {
        self.get_extended(index)
            .map(|ext| ext.modifier_flags)
            .unwrap_or(ModifierFlags::empty())
    }

    // =========================================================================
    // Parent wiring
    // =========================================================================

    /// Set the parent for a single child node. Children are created
    /// before parents, so the child's extended info already exists.
    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if !child.is_none() {
            if let Some(info) = self.extended_info.get_mut(child.0 as usize) {
                info.parent = parent;
            }
        }
    }

    #[inline]
    fn set_parent_list(&mut self, list: &NodeList, parent: NodeIndex) {
        for &child in &list.nodes {
            self.set_parent(child, parent);
        }
    }

    /// Push a node header plus default extended info, returning its index.
    fn push_node(&mut self, kind: SyntaxKind, pos: u32, end: u32, data_index: u32) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(Node::with_data(kind, pos, end, data_index));
        self.extended_info.push(ExtendedNodeInfo {
            id: index,
            ..ExtendedNodeInfo::default()
        });
        NodeIndex(index)
    }

    // =========================================================================
    // Node creation: tokens, names, literals
    // =========================================================================

    /// Add a node with no payload (`ThisExpression`, `EmptyStatement`).
    pub fn add_node(&mut self, kind: SyntaxKind, pos: u32, end: u32) -> NodeIndex {
        self.push_node(kind, pos, end, Node::NO_DATA)
    }

    pub fn add_simple_name(&mut self, pos: u32, end: u32, text: &str) -> NodeIndex {
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(IdentifierData {
            text: text.to_string(),
        });
        self.push_node(SyntaxKind::SimpleName, pos, end, data_index)
    }

    pub fn add_qualified_name(
        &mut self,
        pos: u32,
        end: u32,
        data: QualifiedNameData,
    ) -> NodeIndex {
        let (qualifier, name) = (data.qualifier, data.name);
        let data_index = self.qualified_names.len() as u32;
        self.qualified_names.push(data);
        let parent = self.push_node(SyntaxKind::QualifiedName, pos, end, data_index);
        self.set_parent(qualifier, parent);
        self.set_parent(name, parent);
        parent
    }

    /// Add a literal node of any literal kind.
    pub fn add_literal(&mut self, kind: SyntaxKind, pos: u32, end: u32, text: &str) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::NumberLiteral
                | SyntaxKind::StringLiteral
                | SyntaxKind::CharacterLiteral
                | SyntaxKind::BooleanLiteral
                | SyntaxKind::NullLiteral
        ));
        let data_index = self.literals.len() as u32;
        self.literals.push(LiteralData {
            text: text.to_string(),
        });
        self.push_node(kind, pos, end, data_index)
    }

    // =========================================================================
    // Node creation: expressions
    // =========================================================================

    pub fn add_infix_expression(&mut self, pos: u32, end: u32, data: BinaryExprData) -> NodeIndex {
        let (left, right) = (data.left_operand, data.right_operand);
        let data_index = self.binary_exprs.len() as u32;
        self.binary_exprs.push(data);
        let parent = self.push_node(SyntaxKind::InfixExpression, pos, end, data_index);
        self.set_parent(left, parent);
        self.set_parent(right, parent);
        parent
    }

    pub fn add_assignment(&mut self, pos: u32, end: u32, data: AssignmentData) -> NodeIndex {
        let (lhs, rhs) = (data.left_hand_side, data.right_hand_side);
        let data_index = self.assignments.len() as u32;
        self.assignments.push(data);
        let parent = self.push_node(SyntaxKind::Assignment, pos, end, data_index);
        self.set_parent(lhs, parent);
        self.set_parent(rhs, parent);
        parent
    }

    /// Add a prefix or postfix expression.
    pub fn add_unary_expression(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data: UnaryExprData,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::PrefixExpression | SyntaxKind::PostfixExpression
        ));
        let operand = data.operand;
        let data_index = self.unary_exprs.len() as u32;
        self.unary_exprs.push(data);
        let parent = self.push_node(kind, pos, end, data_index);
        self.set_parent(operand, parent);
        parent
    }

    /// Add a method invocation or super method invocation.
    pub fn add_method_invocation(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data: CallExprData,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::MethodInvocation | SyntaxKind::SuperMethodInvocation
        ));
        let expression = data.expression;
        let name = data.name;
        let arguments = data.arguments.clone();
        let data_index = self.call_exprs.len() as u32;
        self.call_exprs.push(data);
        let parent = self.push_node(kind, pos, end, data_index);
        self.set_parent(expression, parent);
        self.set_parent(name, parent);
        self.set_parent_list(&arguments, parent);
        parent
    }

    pub fn add_class_instance_creation(
        &mut self,
        pos: u32,
        end: u32,
        data: InstanceCreationData,
    ) -> NodeIndex {
        let type_node = data.type_node;
        let arguments = data.arguments.clone();
        let anon = data.anonymous_class_declaration;
        let data_index = self.instance_creations.len() as u32;
        self.instance_creations.push(data);
        let parent = self.push_node(SyntaxKind::ClassInstanceCreation, pos, end, data_index);
        self.set_parent(type_node, parent);
        self.set_parent_list(&arguments, parent);
        self.set_parent(anon, parent);
        parent
    }

    pub fn add_lambda_expression(&mut self, pos: u32, end: u32, data: LambdaData) -> NodeIndex {
        let parameters = data.parameters.clone();
        let body = data.body;
        let data_index = self.lambdas.len() as u32;
        self.lambdas.push(data);
        let parent = self.push_node(SyntaxKind::LambdaExpression, pos, end, data_index);
        self.set_parent_list(&parameters, parent);
        self.set_parent(body, parent);
        parent
    }

    /// Add a field access or array access expression.
    pub fn add_access_expression(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data: AccessExprData,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::FieldAccess | SyntaxKind::ArrayAccess
        ));
        let (expression, name_or_index) = (data.expression, data.name_or_index);
        let data_index = self.access_exprs.len() as u32;
        self.access_exprs.push(data);
        let parent = self.push_node(kind, pos, end, data_index);
        self.set_parent(expression, parent);
        self.set_parent(name_or_index, parent);
        parent
    }

    pub fn add_array_creation(&mut self, pos: u32, end: u32, data: ArrayCreationData) -> NodeIndex {
        let type_node = data.type_node;
        let dimensions = data.dimensions.clone();
        let initializer = data.initializer;
        let data_index = self.array_creations.len() as u32;
        self.array_creations.push(data);
        let parent = self.push_node(SyntaxKind::ArrayCreation, pos, end, data_index);
        self.set_parent(type_node, parent);
        self.set_parent_list(&dimensions, parent);
        self.set_parent(initializer, parent);
        parent
    }

    pub fn add_array_initializer(
        &mut self,
        pos: u32,
        end: u32,
        data: ArrayInitializerData,
    ) -> NodeIndex {
        let expressions = data.expressions.clone();
        let data_index = self.array_initializers.len() as u32;
        self.array_initializers.push(data);
        let parent = self.push_node(SyntaxKind::ArrayInitializer, pos, end, data_index);
        self.set_parent_list(&expressions, parent);
        parent
    }

    pub fn add_conditional_expression(
        &mut self,
        pos: u32,
        end: u32,
        data: ConditionalExprData,
    ) -> NodeIndex {
        let (cond, then, els) = (data.expression, data.then_expression, data.else_expression);
        let data_index = self.conditional_exprs.len() as u32;
        self.conditional_exprs.push(data);
        let parent = self.push_node(SyntaxKind::ConditionalExpression, pos, end, data_index);
        self.set_parent(cond, parent);
        self.set_parent(then, parent);
        self.set_parent(els, parent);
        parent
    }

    pub fn add_cast_expression(&mut self, pos: u32, end: u32, data: CastExprData) -> NodeIndex {
        let (type_node, expression) = (data.type_node, data.expression);
        let data_index = self.casts.len() as u32;
        self.casts.push(data);
        let parent = self.push_node(SyntaxKind::CastExpression, pos, end, data_index);
        self.set_parent(type_node, parent);
        self.set_parent(expression, parent);
        parent
    }

    pub fn add_instanceof_expression(
        &mut self,
        pos: u32,
        end: u32,
        data: InstanceofData,
    ) -> NodeIndex {
        let (left, right) = (data.left_operand, data.right_operand);
        let data_index = self.instanceofs.len() as u32;
        self.instanceofs.push(data);
        let parent = self.push_node(SyntaxKind::InstanceofExpression, pos, end, data_index);
        self.set_parent(left, parent);
        self.set_parent(right, parent);
        parent
    }

    /// Add a parenthesized expression or expression statement.
    pub fn add_wrapped_expression(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data: WrappedExprData,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::ParenthesizedExpression | SyntaxKind::ExpressionStatement
        ));
        let expression = data.expression;
        let data_index = self.wrapped_exprs.len() as u32;
        self.wrapped_exprs.push(data);
        let parent = self.push_node(kind, pos, end, data_index);
        self.set_parent(expression, parent);
        parent
    }

    // =========================================================================
    // Node creation: statements
    // =========================================================================

    pub fn add_block(&mut self, pos: u32, end: u32, data: BlockData) -> NodeIndex {
        let statements = data.statements.clone();
        let data_index = self.blocks.len() as u32;
        self.blocks.push(data);
        let parent = self.push_node(SyntaxKind::Block, pos, end, data_index);
        self.set_parent_list(&statements, parent);
        parent
    }

    pub fn add_if_statement(&mut self, pos: u32, end: u32, data: IfStatementData) -> NodeIndex {
        let (expr, then, els) = (data.expression, data.then_statement, data.else_statement);
        let data_index = self.if_statements.len() as u32;
        self.if_statements.push(data);
        let parent = self.push_node(SyntaxKind::IfStatement, pos, end, data_index);
        self.set_parent(expr, parent);
        self.set_parent(then, parent);
        self.set_parent(els, parent);
        parent
    }

    /// Add a for, while, or do statement.
    pub fn add_loop(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: LoopData) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::ForStatement | SyntaxKind::WhileStatement | SyntaxKind::DoStatement
        ));
        let initializers = data.initializers.clone();
        let condition = data.condition;
        let updaters = data.updaters.clone();
        let body = data.body;
        let data_index = self.loops.len() as u32;
        self.loops.push(data);
        let parent = self.push_node(kind, pos, end, data_index);
        self.set_parent_list(&initializers, parent);
        self.set_parent(condition, parent);
        self.set_parent_list(&updaters, parent);
        self.set_parent(body, parent);
        parent
    }

    pub fn add_enhanced_for(&mut self, pos: u32, end: u32, data: EnhancedForData) -> NodeIndex {
        let (param, expr, body) = (data.parameter, data.expression, data.body);
        let data_index = self.enhanced_fors.len() as u32;
        self.enhanced_fors.push(data);
        let parent = self.push_node(SyntaxKind::EnhancedForStatement, pos, end, data_index);
        self.set_parent(param, parent);
        self.set_parent(expr, parent);
        self.set_parent(body, parent);
        parent
    }

    pub fn add_return_statement(&mut self, pos: u32, end: u32, data: ReturnData) -> NodeIndex {
        let expression = data.expression;
        let data_index = self.return_data.len() as u32;
        self.return_data.push(data);
        let parent = self.push_node(SyntaxKind::ReturnStatement, pos, end, data_index);
        self.set_parent(expression, parent);
        parent
    }

    pub fn add_throw_statement(&mut self, pos: u32, end: u32, data: ReturnData) -> NodeIndex {
        let expression = data.expression;
        let data_index = self.return_data.len() as u32;
        self.return_data.push(data);
        let parent = self.push_node(SyntaxKind::ThrowStatement, pos, end, data_index);
        self.set_parent(expression, parent);
        parent
    }

    /// Add a local variable declaration statement.
    pub fn add_variable_statement(
        &mut self,
        pos: u32,
        end: u32,
        data: VariableDeclData,
    ) -> NodeIndex {
        let type_node = data.type_node;
        let frags = data.fragments.clone();
        let data_index = self.variable_decls.len() as u32;
        self.variable_decls.push(data);
        let parent = self.push_node(SyntaxKind::VariableDeclarationStatement, pos, end, data_index);
        self.set_parent(type_node, parent);
        self.set_parent_list(&frags, parent);
        parent
    }

    pub fn add_fragment(&mut self, pos: u32, end: u32, data: FragmentData) -> NodeIndex {
        let (name, initializer) = (data.name, data.initializer);
        let data_index = self.fragments.len() as u32;
        self.fragments.push(data);
        let parent = self.push_node(SyntaxKind::VariableDeclarationFragment, pos, end, data_index);
        self.set_parent(name, parent);
        self.set_parent(initializer, parent);
        parent
    }

    pub fn add_single_variable_declaration(
        &mut self,
        pos: u32,
        end: u32,
        data: SingleVariableData,
        flags: ModifierFlags,
    ) -> NodeIndex {
        let (type_node, name, initializer) = (data.type_node, data.name, data.initializer);
        let data_index = self.single_var_decls.len() as u32;
        self.single_var_decls.push(data);
        let parent = self.push_node(SyntaxKind::SingleVariableDeclaration, pos, end, data_index);
        self.set_parent(type_node, parent);
        self.set_parent(name, parent);
        self.set_parent(initializer, parent);
        self.set_flags(parent, flags);
        parent
    }

    pub fn add_try_statement(&mut self, pos: u32, end: u32, data: TryData) -> NodeIndex {
        let body = data.body;
        let catches = data.catch_clauses.clone();
        let finally_block = data.finally_block;
        let data_index = self.try_data.len() as u32;
        self.try_data.push(data);
        let parent = self.push_node(SyntaxKind::TryStatement, pos, end, data_index);
        self.set_parent(body, parent);
        self.set_parent_list(&catches, parent);
        self.set_parent(finally_block, parent);
        parent
    }

    pub fn add_catch_clause(&mut self, pos: u32, end: u32, data: CatchClauseData) -> NodeIndex {
        let (exception, body) = (data.exception, data.body);
        let data_index = self.catch_clauses.len() as u32;
        self.catch_clauses.push(data);
        let parent = self.push_node(SyntaxKind::CatchClause, pos, end, data_index);
        self.set_parent(exception, parent);
        self.set_parent(body, parent);
        parent
    }

    pub fn add_switch_statement(&mut self, pos: u32, end: u32, data: SwitchData) -> NodeIndex {
        let expression = data.expression;
        let statements = data.statements.clone();
        let data_index = self.switch_data.len() as u32;
        self.switch_data.push(data);
        let parent = self.push_node(SyntaxKind::SwitchStatement, pos, end, data_index);
        self.set_parent(expression, parent);
        self.set_parent_list(&statements, parent);
        parent
    }

    pub fn add_switch_case(&mut self, pos: u32, end: u32, data: CaseClauseData) -> NodeIndex {
        let expressions = data.expressions.clone();
        let data_index = self.case_clauses.len() as u32;
        self.case_clauses.push(data);
        let parent = self.push_node(SyntaxKind::SwitchCase, pos, end, data_index);
        self.set_parent_list(&expressions, parent);
        parent
    }

    pub fn add_labeled_statement(&mut self, pos: u32, end: u32, data: LabeledData) -> NodeIndex {
        let (label, body) = (data.label, data.body);
        let data_index = self.labeled_data.len() as u32;
        self.labeled_data.push(data);
        let parent = self.push_node(SyntaxKind::LabeledStatement, pos, end, data_index);
        self.set_parent(label, parent);
        self.set_parent(body, parent);
        parent
    }

    pub fn add_synchronized_statement(
        &mut self,
        pos: u32,
        end: u32,
        data: SynchronizedData,
    ) -> NodeIndex {
        let (expression, body) = (data.expression, data.body);
        let data_index = self.synchronized_data.len() as u32;
        self.synchronized_data.push(data);
        let parent = self.push_node(SyntaxKind::SynchronizedStatement, pos, end, data_index);
        self.set_parent(expression, parent);
        self.set_parent(body, parent);
        parent
    }

    /// Add a break or continue statement.
    pub fn add_jump_statement(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data: JumpData,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::BreakStatement | SyntaxKind::ContinueStatement
        ));
        let label = data.label;
        let data_index = self.jump_data.len() as u32;
        self.jump_data.push(data);
        let parent = self.push_node(kind, pos, end, data_index);
        self.set_parent(label, parent);
        parent
    }

    pub fn add_assert_statement(&mut self, pos: u32, end: u32, data: AssertData) -> NodeIndex {
        let (expression, message) = (data.expression, data.message);
        let data_index = self.assert_data.len() as u32;
        self.assert_data.push(data);
        let parent = self.push_node(SyntaxKind::AssertStatement, pos, end, data_index);
        self.set_parent(expression, parent);
        self.set_parent(message, parent);
        parent
    }

    // =========================================================================
    // Node creation: declarations
    // =========================================================================

    /// Add a class/interface or annotation type declaration.
    pub fn add_type_declaration(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data: TypeDeclData,
        flags: ModifierFlags,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::TypeDeclaration | SyntaxKind::AnnotationTypeDeclaration
        ));
        let name = data.name;
        let superclass = data.superclass;
        let superinterfaces = data.superinterfaces.clone();
        let body = data.body_declarations.clone();
        let data_index = self.type_decls.len() as u32;
        self.type_decls.push(data);
        let parent = self.push_node(kind, pos, end, data_index);
        self.set_parent(name, parent);
        self.set_parent(superclass, parent);
        self.set_parent_list(&superinterfaces, parent);
        self.set_parent_list(&body, parent);
        self.set_flags(parent, flags);
        parent
    }

    pub fn add_enum_declaration(
        &mut self,
        pos: u32,
        end: u32,
        data: EnumDeclData,
        flags: ModifierFlags,
    ) -> NodeIndex {
        let name = data.name;
        let constants = data.enum_constants.clone();
        let body = data.body_declarations.clone();
        let data_index = self.enum_decls.len() as u32;
        self.enum_decls.push(data);
        let parent = self.push_node(SyntaxKind::EnumDeclaration, pos, end, data_index);
        self.set_parent(name, parent);
        self.set_parent_list(&constants, parent);
        self.set_parent_list(&body, parent);
        self.set_flags(parent, flags);
        parent
    }

    pub fn add_anonymous_class_declaration(
        &mut self,
        pos: u32,
        end: u32,
        data: AnonymousClassData,
    ) -> NodeIndex {
        let body = data.body_declarations.clone();
        let data_index = self.anonymous_classes.len() as u32;
        self.anonymous_classes.push(data);
        let parent = self.push_node(SyntaxKind::AnonymousClassDeclaration, pos, end, data_index);
        self.set_parent_list(&body, parent);
        parent
    }

    pub fn add_enum_constant(&mut self, pos: u32, end: u32, data: EnumConstantData) -> NodeIndex {
        let name = data.name;
        let arguments = data.arguments.clone();
        let anon = data.anonymous_class_declaration;
        let data_index = self.enum_constants.len() as u32;
        self.enum_constants.push(data);
        let parent = self.push_node(SyntaxKind::EnumConstantDeclaration, pos, end, data_index);
        self.set_parent(name, parent);
        self.set_parent_list(&arguments, parent);
        self.set_parent(anon, parent);
        parent
    }

    pub fn add_field_declaration(
        &mut self,
        pos: u32,
        end: u32,
        data: VariableDeclData,
        flags: ModifierFlags,
    ) -> NodeIndex {
        let type_node = data.type_node;
        let frags = data.fragments.clone();
        let data_index = self.variable_decls.len() as u32;
        self.variable_decls.push(data);
        let parent = self.push_node(SyntaxKind::FieldDeclaration, pos, end, data_index);
        self.set_parent(type_node, parent);
        self.set_parent_list(&frags, parent);
        self.set_flags(parent, flags);
        parent
    }

    pub fn add_method_declaration(
        &mut self,
        pos: u32,
        end: u32,
        data: MethodDeclData,
        flags: ModifierFlags,
    ) -> NodeIndex {
        let name = data.name;
        let return_type = data.return_type;
        let parameters = data.parameters.clone();
        let thrown = data.thrown_exceptions.clone();
        let body = data.body;
        let data_index = self.methods.len() as u32;
        self.methods.push(data);
        let parent = self.push_node(SyntaxKind::MethodDeclaration, pos, end, data_index);
        self.set_parent(return_type, parent);
        self.set_parent(name, parent);
        self.set_parent_list(&parameters, parent);
        self.set_parent_list(&thrown, parent);
        self.set_parent(body, parent);
        self.set_flags(parent, flags);
        parent
    }

    pub fn add_initializer(
        &mut self,
        pos: u32,
        end: u32,
        data: InitializerData,
        flags: ModifierFlags,
    ) -> NodeIndex {
        let body = data.body;
        let data_index = self.initializers.len() as u32;
        self.initializers.push(data);
        let parent = self.push_node(SyntaxKind::Initializer, pos, end, data_index);
        self.set_parent(body, parent);
        self.set_flags(parent, flags);
        parent
    }

    pub fn add_import_declaration(&mut self, pos: u32, end: u32, data: ImportData) -> NodeIndex {
        let name = data.name;
        let data_index = self.imports.len() as u32;
        self.imports.push(data);
        let parent = self.push_node(SyntaxKind::ImportDeclaration, pos, end, data_index);
        self.set_parent(name, parent);
        parent
    }

    pub fn add_package_declaration(&mut self, pos: u32, end: u32, data: PackageData) -> NodeIndex {
        let name = data.name;
        let data_index = self.packages.len() as u32;
        self.packages.push(data);
        let parent = self.push_node(SyntaxKind::PackageDeclaration, pos, end, data_index);
        self.set_parent(name, parent);
        parent
    }

    pub fn add_compilation_unit(
        &mut self,
        pos: u32,
        end: u32,
        data: CompilationUnitData,
    ) -> NodeIndex {
        let package = data.package;
        let imports = data.imports.clone();
        let types = data.types.clone();
        let data_index = self.compilation_units.len() as u32;
        self.compilation_units.push(data);
        let parent = self.push_node(SyntaxKind::CompilationUnit, pos, end, data_index);
        self.set_parent(package, parent);
        self.set_parent_list(&imports, parent);
        self.set_parent_list(&types, parent);
        parent
    }

    // =========================================================================
    // Node creation: type nodes
    // =========================================================================

    pub fn add_simple_type(&mut self, pos: u32, end: u32, data: SimpleTypeData) -> NodeIndex {
        let name = data.name;
        let data_index = self.simple_types.len() as u32;
        self.simple_types.push(data);
        let parent = self.push_node(SyntaxKind::SimpleType, pos, end, data_index);
        self.set_parent(name, parent);
        parent
    }

    pub fn add_primitive_type(&mut self, pos: u32, end: u32, code: PrimitiveTypeCode) -> NodeIndex {
        let data_index = self.primitive_types.len() as u32;
        self.primitive_types.push(PrimitiveTypeData { code });
        self.push_node(SyntaxKind::PrimitiveType, pos, end, data_index)
    }

    pub fn add_array_type(&mut self, pos: u32, end: u32, data: ArrayTypeData) -> NodeIndex {
        let element = data.element_type;
        let data_index = self.array_types.len() as u32;
        self.array_types.push(data);
        let parent = self.push_node(SyntaxKind::ArrayType, pos, end, data_index);
        self.set_parent(element, parent);
        parent
    }

    pub fn add_parameterized_type(
        &mut self,
        pos: u32,
        end: u32,
        data: ParameterizedTypeData,
    ) -> NodeIndex {
        let type_node = data.type_node;
        let args = data.type_arguments.clone();
        let data_index = self.parameterized_types.len() as u32;
        self.parameterized_types.push(data);
        let parent = self.push_node(SyntaxKind::ParameterizedType, pos, end, data_index);
        self.set_parent(type_node, parent);
        self.set_parent_list(&args, parent);
        parent
    }

    #[inline]
    fn set_flags(&mut self, index: NodeIndex, flags: ModifierFlags) {
        if let Some(info) = self.extended_info.get_mut(index.0 as usize) {
            info.modifier_flags = flags;
        }
    }

    // =========================================================================
    // Typed data getters
    // =========================================================================

    pub fn get_identifier(&self, node: &Node) -> Option<&IdentifierData> {
        if node.has_data() && node.kind == SyntaxKind::SimpleName {
            self.identifiers.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_qualified_name(&self, node: &Node) -> Option<&QualifiedNameData> {
        if node.has_data() && node.kind == SyntaxKind::QualifiedName {
            self.qualified_names.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_literal(&self, node: &Node) -> Option<&LiteralData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::NumberLiteral
                    | SyntaxKind::StringLiteral
                    | SyntaxKind::CharacterLiteral
                    | SyntaxKind::BooleanLiteral
                    | SyntaxKind::NullLiteral
            )
        {
            self.literals.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_infix_expression(&self, node: &Node) -> Option<&BinaryExprData> {
        if node.has_data() && node.kind == SyntaxKind::InfixExpression {
            self.binary_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_assignment(&self, node: &Node) -> Option<&AssignmentData> {
        if node.has_data() && node.kind == SyntaxKind::Assignment {
            self.assignments.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_unary_expression(&self, node: &Node) -> Option<&UnaryExprData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::PrefixExpression | SyntaxKind::PostfixExpression
            )
        {
            self.unary_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_method_invocation(&self, node: &Node) -> Option<&CallExprData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::MethodInvocation | SyntaxKind::SuperMethodInvocation
            )
        {
            self.call_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_class_instance_creation(&self, node: &Node) -> Option<&InstanceCreationData> {
        if node.has_data() && node.kind == SyntaxKind::ClassInstanceCreation {
            self.instance_creations.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_lambda(&self, node: &Node) -> Option<&LambdaData> {
        if node.has_data() && node.kind == SyntaxKind::LambdaExpression {
            self.lambdas.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_access_expression(&self, node: &Node) -> Option<&AccessExprData> {
        if node.has_data()
            && matches!(node.kind, SyntaxKind::FieldAccess | SyntaxKind::ArrayAccess)
        {
            self.access_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_array_creation(&self, node: &Node) -> Option<&ArrayCreationData> {
        if node.has_data() && node.kind == SyntaxKind::ArrayCreation {
            self.array_creations.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_array_initializer(&self, node: &Node) -> Option<&ArrayInitializerData> {
        if node.has_data() && node.kind == SyntaxKind::ArrayInitializer {
            self.array_initializers.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_conditional_expression(&self, node: &Node) -> Option<&ConditionalExprData> {
        if node.has_data() && node.kind == SyntaxKind::ConditionalExpression {
            self.conditional_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_cast_expression(&self, node: &Node) -> Option<&CastExprData> {
        if node.has_data() && node.kind == SyntaxKind::CastExpression {
            self.casts.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_instanceof_expression(&self, node: &Node) -> Option<&InstanceofData> {
        if node.has_data() && node.kind == SyntaxKind::InstanceofExpression {
            self.instanceofs.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_wrapped_expression(&self, node: &Node) -> Option<&WrappedExprData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::ParenthesizedExpression | SyntaxKind::ExpressionStatement
            )
        {
            self.wrapped_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Shared by return and throw statements.
    pub fn get_return_data(&self, node: &Node) -> Option<&ReturnData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::ReturnStatement | SyntaxKind::ThrowStatement
            )
        {
            self.return_data.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_block(&self, node: &Node) -> Option<&BlockData> {
        if node.has_data() && node.kind == SyntaxKind::Block {
            self.blocks.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_if_statement(&self, node: &Node) -> Option<&IfStatementData> {
        if node.has_data() && node.kind == SyntaxKind::IfStatement {
            self.if_statements.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_loop(&self, node: &Node) -> Option<&LoopData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::ForStatement | SyntaxKind::WhileStatement | SyntaxKind::DoStatement
            )
        {
            self.loops.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_enhanced_for(&self, node: &Node) -> Option<&EnhancedForData> {
        if node.has_data() && node.kind == SyntaxKind::EnhancedForStatement {
            self.enhanced_fors.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Shared by variable declaration statements and field declarations.
    pub fn get_variable_declaration(&self, node: &Node) -> Option<&VariableDeclData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::VariableDeclarationStatement | SyntaxKind::FieldDeclaration
            )
        {
            self.variable_decls.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_fragment(&self, node: &Node) -> Option<&FragmentData> {
        if node.has_data() && node.kind == SyntaxKind::VariableDeclarationFragment {
            self.fragments.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_single_variable(&self, node: &Node) -> Option<&SingleVariableData> {
        if node.has_data() && node.kind == SyntaxKind::SingleVariableDeclaration {
            self.single_var_decls.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_try_statement(&self, node: &Node) -> Option<&TryData> {
        if node.has_data() && node.kind == SyntaxKind::TryStatement {
            self.try_data.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_catch_clause(&self, node: &Node) -> Option<&CatchClauseData> {
        if node.has_data() && node.kind == SyntaxKind::CatchClause {
            self.catch_clauses.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_switch_statement(&self, node: &Node) -> Option<&SwitchData> {
        if node.has_data() && node.kind == SyntaxKind::SwitchStatement {
            self.switch_data.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_switch_case(&self, node: &Node) -> Option<&CaseClauseData> {
        if node.has_data() && node.kind == SyntaxKind::SwitchCase {
            self.case_clauses.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_labeled_statement(&self, node: &Node) -> Option<&LabeledData> {
        if node.has_data() && node.kind == SyntaxKind::LabeledStatement {
            self.labeled_data.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_synchronized_statement(&self, node: &Node) -> Option<&SynchronizedData> {
        if node.has_data() && node.kind == SyntaxKind::SynchronizedStatement {
            self.synchronized_data.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_jump_data(&self, node: &Node) -> Option<&JumpData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::BreakStatement | SyntaxKind::ContinueStatement
            )
        {
            self.jump_data.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_assert_statement(&self, node: &Node) -> Option<&AssertData> {
        if node.has_data() && node.kind == SyntaxKind::AssertStatement {
            self.assert_data.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_type_declaration(&self, node: &Node) -> Option<&TypeDeclData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::TypeDeclaration | SyntaxKind::AnnotationTypeDeclaration
            )
        {
            self.type_decls.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_enum_declaration(&self, node: &Node) -> Option<&EnumDeclData> {
        if node.has_data() && node.kind == SyntaxKind::EnumDeclaration {
            self.enum_decls.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_anonymous_class(&self, node: &Node) -> Option<&AnonymousClassData> {
        if node.has_data() && node.kind == SyntaxKind::AnonymousClassDeclaration {
            self.anonymous_classes.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_enum_constant(&self, node: &Node) -> Option<&EnumConstantData> {
        if node.has_data() && node.kind == SyntaxKind::EnumConstantDeclaration {
            self.enum_constants.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_method_declaration(&self, node: &Node) -> Option<&MethodDeclData> {
        if node.has_data() && node.kind == SyntaxKind::MethodDeclaration {
            self.methods.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_initializer(&self, node: &Node) -> Option<&InitializerData> {
        if node.has_data() && node.kind == SyntaxKind::Initializer {
            self.initializers.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_import(&self, node: &Node) -> Option<&ImportData> {
        if node.has_data() && node.kind == SyntaxKind::ImportDeclaration {
            self.imports.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_package(&self, node: &Node) -> Option<&PackageData> {
        if node.has_data() && node.kind == SyntaxKind::PackageDeclaration {
            self.packages.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_compilation_unit(&self, node: &Node) -> Option<&CompilationUnitData> {
        if node.has_data() && node.kind == SyntaxKind::CompilationUnit {
            self.compilation_units.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_simple_type(&self, node: &Node) -> Option<&SimpleTypeData> {
        if node.has_data() && node.kind == SyntaxKind::SimpleType {
            self.simple_types.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_primitive_type(&self, node: &Node) -> Option<&PrimitiveTypeData> {
        if node.has_data() && node.kind == SyntaxKind::PrimitiveType {
            self.primitive_types.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_array_type(&self, node: &Node) -> Option<&ArrayTypeData> {
        if node.has_data() && node.kind == SyntaxKind::ArrayType {
            self.array_types.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_parameterized_type(&self, node: &Node) -> Option<&ParameterizedTypeData> {
        if node.has_data() && node.kind == SyntaxKind::ParameterizedType {
            self.parameterized_types.get(node.data_index as usize)
        } else {
            None
        }
    }
}
