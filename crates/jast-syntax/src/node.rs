//! Thin node header and typed data pools.
//!
//! Each node is a 16-byte header; kind-specific payloads live in typed
//! pools inside the arena, addressed by `data_index`. Parent links live
//! in a parallel `ExtendedNodeInfo` vector so the hot header stays small.

use crate::syntax_kind::SyntaxKind;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Index-based, non-owning reference to a node in the arena.
///
/// `NodeIndex::NONE` is the explicit absence marker used for optional
/// child slots and absent parents (the root's parent is `NONE`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    #[inline]
    pub fn is_some(self) -> bool {
        self != Self::NONE
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        Self::NONE
    }
}

/// Ordered list of child nodes (source appearance order).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
}

impl NodeList {
    pub fn new(nodes: Vec<NodeIndex>) -> NodeList {
        NodeList { nodes }
    }

    pub fn empty() -> NodeList {
        NodeList::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl From<Vec<NodeIndex>> for NodeList {
    fn from(nodes: Vec<NodeIndex>) -> NodeList {
        NodeList { nodes }
    }
}

/// A 16-byte node header.
///
/// Layout:
/// - `kind`: 2 bytes (`SyntaxKind`)
/// - `flags`: 2 bytes (reserved node flags)
/// - `pos` / `end`: 4 + 4 bytes (source character range)
/// - `data_index`: 4 bytes (index into the kind's pool, `u32::MAX` = none)
#[repr(C)]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Node {
    pub kind: SyntaxKind,
    pub flags: u16,
    pub pos: u32,
    pub end: u32,
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    #[inline]
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index: Self::NO_DATA,
        }
    }

    #[inline]
    pub fn with_data(kind: SyntaxKind, pos: u32, end: u32, data_index: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index,
        }
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }
}

/// Cold per-node info kept out of the hot header.
///
/// `parent` is set once by the arena when the parent node is created
/// (bottom-up construction) and never mutated afterwards.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ExtendedNodeInfo {
    pub parent: NodeIndex,
    pub id: u32,
    pub modifier_flags: ModifierFlags,
}

impl Default for ExtendedNodeInfo {
    fn default() -> Self {
        ExtendedNodeInfo {
            parent: NodeIndex::NONE,
            id: 0,
            modifier_flags: ModifierFlags::empty(),
        }
    }
}

bitflags! {
    /// Java declaration modifiers, cached per node.
    ///
    /// Modifiers are flags rather than child nodes, so structural child
    /// enumeration never reports them. Serde impls come from the
    /// `bitflags/serde` feature.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ModifierFlags: u32 {
        const PUBLIC       = 1 << 0;
        const PROTECTED    = 1 << 1;
        const PRIVATE      = 1 << 2;
        const STATIC       = 1 << 3;
        const ABSTRACT     = 1 << 4;
        const FINAL        = 1 << 5;
        const NATIVE       = 1 << 6;
        const SYNCHRONIZED = 1 << 7;
        const TRANSIENT    = 1 << 8;
        const VOLATILE     = 1 << 9;
        const STRICTFP     = 1 << 10;
        const DEFAULT      = 1 << 11;
    }
}

// =============================================================================
// Operators
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfixOperator {
    Times,
    Divide,
    Remainder,
    Plus,
    Minus,
    LeftShift,
    RightShiftSigned,
    RightShiftUnsigned,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    Equals,
    NotEquals,
    Xor,
    And,
    Or,
    ConditionalAnd,
    ConditionalOr,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    Increment,
    Decrement,
    Plus,
    Minus,
    Complement,
    Not,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentOperator {
    Assign,
    PlusAssign,
    MinusAssign,
    TimesAssign,
    DivideAssign,
    RemainderAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
    LeftShiftAssign,
    RightShiftSignedAssign,
    RightShiftUnsignedAssign,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveTypeCode {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
    Void,
}

// =============================================================================
// Typed Data Pools
// =============================================================================

/// Data for `SimpleName`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentifierData {
    pub text: String,
}

/// Data for `QualifiedName` (`qualifier.name`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QualifiedNameData {
    pub qualifier: NodeIndex,
    pub name: NodeIndex,
}

/// Data for all literal kinds. Boolean and null literals carry their
/// token text too ("true", "null").
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralData {
    pub text: String,
}

/// Data for `InfixExpression`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BinaryExprData {
    pub left_operand: NodeIndex,
    pub operator: InfixOperator,
    pub right_operand: NodeIndex,
}

/// Data for `Assignment`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssignmentData {
    pub left_hand_side: NodeIndex,
    pub operator: AssignmentOperator,
    pub right_hand_side: NodeIndex,
}

/// Data for `PrefixExpression` and `PostfixExpression`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnaryExprData {
    pub operator: UnaryOperator,
    pub operand: NodeIndex,
}

/// Data for `MethodInvocation` and `SuperMethodInvocation`.
/// `expression` is the receiver; `NONE` for an implicit `this` receiver.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub name: NodeIndex,
    pub arguments: NodeList,
}

/// Data for `ClassInstanceCreation`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InstanceCreationData {
    pub type_node: NodeIndex,
    pub arguments: NodeList,
    pub anonymous_class_declaration: NodeIndex,
}

/// Data for `LambdaExpression`. The body is either a block or an
/// expression node.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LambdaData {
    pub parameters: NodeList,
    pub body: NodeIndex,
}

/// Data for `FieldAccess` (`expression.name`) and `ArrayAccess`
/// (`expression[index]`); `name_or_index` holds the name or index node.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub name_or_index: NodeIndex,
}

/// Data for `ArrayCreation`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArrayCreationData {
    pub type_node: NodeIndex,
    pub dimensions: NodeList,
    pub initializer: NodeIndex,
}

/// Data for `ArrayInitializer`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArrayInitializerData {
    pub expressions: NodeList,
}

/// Data for `ConditionalExpression`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConditionalExprData {
    pub expression: NodeIndex,
    pub then_expression: NodeIndex,
    pub else_expression: NodeIndex,
}

/// Data for `CastExpression` (`(Type) expression`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CastExprData {
    pub type_node: NodeIndex,
    pub expression: NodeIndex,
}

/// Data for `InstanceofExpression` (`left instanceof Right`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InstanceofData {
    pub left_operand: NodeIndex,
    pub right_operand: NodeIndex,
}

/// Data for `ParenthesizedExpression` and `ExpressionStatement`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WrappedExprData {
    pub expression: NodeIndex,
}

/// Data for `ReturnStatement` (expression optional) and
/// `ThrowStatement` (expression required).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReturnData {
    pub expression: NodeIndex,
}

/// Data for `Block`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockData {
    pub statements: NodeList,
}

/// Data for `IfStatement`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IfStatementData {
    pub expression: NodeIndex,
    pub then_statement: NodeIndex,
    pub else_statement: NodeIndex,
}

/// Shared data for `ForStatement`, `WhileStatement`, and `DoStatement`.
/// While/do leave `initializers` and `updaters` empty.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoopData {
    pub initializers: NodeList,
    pub condition: NodeIndex,
    pub updaters: NodeList,
    pub body: NodeIndex,
}

/// Data for `EnhancedForStatement` (`for (param : expression) body`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnhancedForData {
    pub parameter: NodeIndex,
    pub expression: NodeIndex,
    pub body: NodeIndex,
}

/// Shared data for `VariableDeclarationStatement` and
/// `FieldDeclaration`: a type followed by one or more fragments.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableDeclData {
    pub type_node: NodeIndex,
    pub fragments: NodeList,
}

/// Data for `VariableDeclarationFragment`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FragmentData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for `SingleVariableDeclaration` (parameters, catch formals).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SingleVariableData {
    pub type_node: NodeIndex,
    pub name: NodeIndex,
    pub is_varargs: bool,
    pub initializer: NodeIndex,
}

/// Data for `TryStatement`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TryData {
    pub body: NodeIndex,
    pub catch_clauses: NodeList,
    pub finally_block: NodeIndex,
}

/// Data for `CatchClause`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatchClauseData {
    pub exception: NodeIndex,
    pub body: NodeIndex,
}

/// Data for `SwitchStatement`. `statements` interleaves `SwitchCase`
/// nodes with their statements, in source order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SwitchData {
    pub expression: NodeIndex,
    pub statements: NodeList,
}

/// Data for `SwitchCase`; empty `expressions` means `default:`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseClauseData {
    pub expressions: NodeList,
}

/// Data for `LabeledStatement`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LabeledData {
    pub label: NodeIndex,
    pub body: NodeIndex,
}

/// Data for `SynchronizedStatement`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SynchronizedData {
    pub expression: NodeIndex,
    pub body: NodeIndex,
}

/// Data for `BreakStatement` and `ContinueStatement` (label optional).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JumpData {
    pub label: NodeIndex,
}

/// Data for `AssertStatement` (message optional).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssertData {
    pub expression: NodeIndex,
    pub message: NodeIndex,
}

/// Shared data for `TypeDeclaration` and `AnnotationTypeDeclaration`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeDeclData {
    pub name: NodeIndex,
    pub superclass: NodeIndex,
    pub superinterfaces: NodeList,
    pub body_declarations: NodeList,
    pub is_interface: bool,
}

/// Data for `EnumDeclaration`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnumDeclData {
    pub name: NodeIndex,
    pub enum_constants: NodeList,
    pub body_declarations: NodeList,
}

/// Data for `AnonymousClassDeclaration`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnonymousClassData {
    pub body_declarations: NodeList,
}

/// Data for `EnumConstantDeclaration`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnumConstantData {
    pub name: NodeIndex,
    pub arguments: NodeList,
    pub anonymous_class_declaration: NodeIndex,
}

/// Data for `MethodDeclaration`. Constructors have `is_constructor`
/// set and no return type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MethodDeclData {
    pub name: NodeIndex,
    pub return_type: NodeIndex,
    pub parameters: NodeList,
    pub thrown_exceptions: NodeList,
    pub body: NodeIndex,
    pub is_constructor: bool,
}

/// Data for `Initializer` (static or instance initializer block).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InitializerData {
    pub body: NodeIndex,
}

/// Data for `ImportDeclaration`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportData {
    pub name: NodeIndex,
    pub is_on_demand: bool,
    pub is_static: bool,
}

/// Data for `PackageDeclaration`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PackageData {
    pub name: NodeIndex,
}

/// Data for `CompilationUnit` (the tree root).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompilationUnitData {
    pub package: NodeIndex,
    pub imports: NodeList,
    pub types: NodeList,
}

/// Data for `SimpleType`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimpleTypeData {
    pub name: NodeIndex,
}

/// Data for `PrimitiveType`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrimitiveTypeData {
    pub code: PrimitiveTypeCode,
}

/// Data for `ArrayType`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArrayTypeData {
    pub element_type: NodeIndex,
    pub dimensions: u32,
}

/// Data for `ParameterizedType` (`Base<Args>`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParameterizedTypeData {
    pub type_node: NodeIndex,
    pub type_arguments: NodeList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_header_is_16_bytes() {
        assert_eq!(std::mem::size_of::<Node>(), 16);
    }

    #[test]
    fn none_index_is_default() {
        assert_eq!(NodeIndex::default(), NodeIndex::NONE);
        assert!(NodeIndex::NONE.is_none());
        assert!(NodeIndex(0).is_some());
    }

    #[test]
    fn node_serializes_round_trip() {
        let node = Node::with_data(SyntaxKind::Block, 3, 9, 0);
        let json = serde_json::to_string(&node).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, SyntaxKind::Block);
        assert_eq!((back.pos, back.end, back.data_index), (3, 9, 0));
    }
}
