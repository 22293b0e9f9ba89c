//! Syntax kinds for the Java AST.
//!
//! Every node carries one `SyntaxKind` discriminant. Family membership
//! (body declarations, statements, expressions, type nodes) is expressed
//! as predicate methods over the discriminant so that consumers never
//! need per-variant type tests.

use serde::{Deserialize, Serialize};

/// Closed set of Java AST node kinds.
///
/// Stored as `u16` in the thin node header. Variants are grouped the way
/// the tree builder produces them: structural kinds first, then
/// declarations, statements, names/literals, expressions, and type nodes.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    Unknown = 0,

    // Structure
    CompilationUnit,
    PackageDeclaration,
    ImportDeclaration,

    // Declarations
    TypeDeclaration,
    EnumDeclaration,
    AnnotationTypeDeclaration,
    AnonymousClassDeclaration,
    EnumConstantDeclaration,
    FieldDeclaration,
    MethodDeclaration,
    Initializer,
    SingleVariableDeclaration,
    VariableDeclarationFragment,

    // Statements
    Block,
    ExpressionStatement,
    VariableDeclarationStatement,
    IfStatement,
    ForStatement,
    EnhancedForStatement,
    WhileStatement,
    DoStatement,
    ReturnStatement,
    ThrowStatement,
    TryStatement,
    CatchClause,
    SwitchStatement,
    SwitchCase,
    BreakStatement,
    ContinueStatement,
    LabeledStatement,
    SynchronizedStatement,
    AssertStatement,
    EmptyStatement,

    // Names and literals
    SimpleName,
    QualifiedName,
    NumberLiteral,
    StringLiteral,
    CharacterLiteral,
    BooleanLiteral,
    NullLiteral,

    // Expressions
    MethodInvocation,
    SuperMethodInvocation,
    ClassInstanceCreation,
    LambdaExpression,
    FieldAccess,
    ArrayAccess,
    ArrayCreation,
    ArrayInitializer,
    InfixExpression,
    PrefixExpression,
    PostfixExpression,
    ConditionalExpression,
    CastExpression,
    InstanceofExpression,
    ParenthesizedExpression,
    Assignment,
    ThisExpression,

    // Type nodes
    SimpleType,
    PrimitiveType,
    ArrayType,
    ParameterizedType,
}

impl SyntaxKind {
    /// Kinds that declare a member inside a type body: types, enum
    /// constants, fields, methods, and instance/static initializers.
    ///
    /// This is the family ancestor searches treat as an opaque boundary.
    /// Note that `MethodDeclaration` is a member of this family *and* the
    /// target of the enclosing-method search; callers that need both must
    /// test the target before the boundary.
    pub fn is_body_declaration(self) -> bool {
        matches!(
            self,
            SyntaxKind::TypeDeclaration
                | SyntaxKind::EnumDeclaration
                | SyntaxKind::AnnotationTypeDeclaration
                | SyntaxKind::EnumConstantDeclaration
                | SyntaxKind::FieldDeclaration
                | SyntaxKind::MethodDeclaration
                | SyntaxKind::Initializer
        )
    }

    pub fn is_statement(self) -> bool {
        matches!(
            self,
            SyntaxKind::Block
                | SyntaxKind::ExpressionStatement
                | SyntaxKind::VariableDeclarationStatement
                | SyntaxKind::IfStatement
                | SyntaxKind::ForStatement
                | SyntaxKind::EnhancedForStatement
                | SyntaxKind::WhileStatement
                | SyntaxKind::DoStatement
                | SyntaxKind::ReturnStatement
                | SyntaxKind::ThrowStatement
                | SyntaxKind::TryStatement
                | SyntaxKind::SwitchStatement
                | SyntaxKind::BreakStatement
                | SyntaxKind::ContinueStatement
                | SyntaxKind::LabeledStatement
                | SyntaxKind::SynchronizedStatement
                | SyntaxKind::AssertStatement
                | SyntaxKind::EmptyStatement
        )
    }

    pub fn is_expression(self) -> bool {
        matches!(
            self,
            SyntaxKind::SimpleName
                | SyntaxKind::QualifiedName
                | SyntaxKind::NumberLiteral
                | SyntaxKind::StringLiteral
                | SyntaxKind::CharacterLiteral
                | SyntaxKind::BooleanLiteral
                | SyntaxKind::NullLiteral
                | SyntaxKind::MethodInvocation
                | SyntaxKind::SuperMethodInvocation
                | SyntaxKind::ClassInstanceCreation
                | SyntaxKind::LambdaExpression
                | SyntaxKind::FieldAccess
                | SyntaxKind::ArrayAccess
                | SyntaxKind::ArrayCreation
                | SyntaxKind::ArrayInitializer
                | SyntaxKind::InfixExpression
                | SyntaxKind::PrefixExpression
                | SyntaxKind::PostfixExpression
                | SyntaxKind::ConditionalExpression
                | SyntaxKind::CastExpression
                | SyntaxKind::InstanceofExpression
                | SyntaxKind::ParenthesizedExpression
                | SyntaxKind::Assignment
                | SyntaxKind::ThisExpression
        )
    }

    pub fn is_type_node(self) -> bool {
        matches!(
            self,
            SyntaxKind::SimpleType
                | SyntaxKind::PrimitiveType
                | SyntaxKind::ArrayType
                | SyntaxKind::ParameterizedType
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_declaration_is_also_a_body_declaration() {
        // The enclosing-method search relies on this overlap: target
        // check first, boundary check second.
        assert!(SyntaxKind::MethodDeclaration.is_body_declaration());
    }

    #[test]
    fn lambda_is_an_expression_not_a_body_declaration() {
        assert!(SyntaxKind::LambdaExpression.is_expression());
        assert!(!SyntaxKind::LambdaExpression.is_body_declaration());
    }

    #[test]
    fn anonymous_class_is_not_a_body_declaration() {
        // Anonymous class declarations boundary searches separately;
        // they are not members of the body-declaration family.
        assert!(!SyntaxKind::AnonymousClassDeclaration.is_body_declaration());
    }

    #[test]
    fn classification_families_are_disjoint_for_statements() {
        assert!(SyntaxKind::Block.is_statement());
        assert!(!SyntaxKind::Block.is_expression());
        assert!(!SyntaxKind::Block.is_type_node());
    }
}
