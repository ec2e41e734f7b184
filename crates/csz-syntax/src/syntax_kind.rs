//! Syntax node and token kinds.
//!
//! The kind set is closed: consumers dispatch with an exhaustive `match`.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum SyntaxKind {
    // Tokens
    IdentifierToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    SlashToken,
    PercentToken,
    AmpersandToken,
    BarToken,
    CaretToken,
    ExclamationToken,
    TildeToken,
    PlusPlusToken,
    MinusMinusToken,
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    GreaterThanGreaterThanGreaterThanToken,

    // Keywords
    AbstractKeyword,
    AsyncKeyword,
    CheckedKeyword,
    ConstKeyword,
    ExplicitKeyword,
    ExternKeyword,
    FalseKeyword,
    FileKeyword,
    FixedKeyword,
    GlobalKeyword,
    ImplicitKeyword,
    InKeyword,
    InternalKeyword,
    NewKeyword,
    OutKeyword,
    OverrideKeyword,
    ParamsKeyword,
    PartialKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    ReadOnlyKeyword,
    RefKeyword,
    RequiredKeyword,
    ScopedKeyword,
    SealedKeyword,
    StaticKeyword,
    ThisKeyword,
    TrueKeyword,
    UnsafeKeyword,
    VirtualKeyword,
    VolatileKeyword,
    GetKeyword,
    SetKeyword,
    InitKeyword,
    AddKeyword,
    RemoveKeyword,

    // Names
    IdentifierName,
    GenericName,
    QualifiedName,
    AliasQualifiedName,
    PredefinedType,

    // Compilation unit and directives
    CompilationUnit,
    ExternAliasDirective,
    UsingDirective,
    ReferenceDirectiveTrivia,
    AttributeList,
    Attribute,

    // Namespace and type declarations
    NamespaceDeclaration,
    FileScopedNamespaceDeclaration,
    ClassDeclaration,
    StructDeclaration,
    InterfaceDeclaration,
    RecordDeclaration,
    RecordStructDeclaration,
    EnumDeclaration,
    DelegateDeclaration,

    // Members
    EnumMemberDeclaration,
    FieldDeclaration,
    EventFieldDeclaration,
    MethodDeclaration,
    OperatorDeclaration,
    ConversionOperatorDeclaration,
    ConstructorDeclaration,
    DestructorDeclaration,
    PropertyDeclaration,
    EventDeclaration,
    IndexerDeclaration,
    GlobalStatement,
    IncompleteMember,

    // Member parts
    VariableDeclarator,
    Parameter,
    TypeParameter,
    TypeParameterConstraintClause,
    AccessorDeclaration,
    SimpleBaseType,

    // Statements
    Block,
    EmptyStatement,
    ExpressionStatement,
    LocalDeclarationStatement,
    LocalFunctionStatement,
    ReturnStatement,
    YieldReturnStatement,
    YieldBreakStatement,
    IfStatement,
    WhileStatement,
    DoStatement,
    ForStatement,
    ForEachStatement,
    UsingStatement,
    TryStatement,
    CatchClause,
    FinallyClause,
    SwitchStatement,
    SwitchSection,
    ThrowStatement,
    BreakStatement,
    ContinueStatement,
    LabeledStatement,
    LockStatement,

    // Expressions
    AwaitExpression,
    InvocationExpression,
    ArgumentList,
    Argument,
    SimpleMemberAccessExpression,
    ObjectCreationExpression,
    AssignmentExpression,
    BinaryExpression,
    ParenthesizedExpression,
    ConditionalExpression,
    LiteralExpression,
    SimpleLambdaExpression,
    ParenthesizedLambdaExpression,
    AnonymousMethodExpression,
}

impl SyntaxKind {
    /// Keywords that can appear in a declaration's modifier list.
    #[must_use]
    pub const fn is_modifier(self) -> bool {
        matches!(
            self,
            SyntaxKind::AbstractKeyword
                | SyntaxKind::AsyncKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::ExternKeyword
                | SyntaxKind::FileKeyword
                | SyntaxKind::FixedKeyword
                | SyntaxKind::InternalKeyword
                | SyntaxKind::NewKeyword
                | SyntaxKind::OverrideKeyword
                | SyntaxKind::PartialKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::ReadOnlyKeyword
                | SyntaxKind::RefKeyword
                | SyntaxKind::RequiredKeyword
                | SyntaxKind::ScopedKeyword
                | SyntaxKind::SealedKeyword
                | SyntaxKind::StaticKeyword
                | SyntaxKind::UnsafeKeyword
                | SyntaxKind::VirtualKeyword
                | SyntaxKind::VolatileKeyword
        )
    }

    /// Namespace, type, delegate and enum declarations.
    #[must_use]
    pub const fn is_namespace_or_type_declaration(self) -> bool {
        matches!(
            self,
            SyntaxKind::NamespaceDeclaration
                | SyntaxKind::FileScopedNamespaceDeclaration
                | SyntaxKind::ClassDeclaration
                | SyntaxKind::StructDeclaration
                | SyntaxKind::InterfaceDeclaration
                | SyntaxKind::RecordDeclaration
                | SyntaxKind::RecordStructDeclaration
                | SyntaxKind::EnumDeclaration
                | SyntaxKind::DelegateDeclaration
        )
    }

    /// Class, struct, interface and record declarations (the kinds that own a member list).
    #[must_use]
    pub const fn is_type_declaration(self) -> bool {
        matches!(
            self,
            SyntaxKind::ClassDeclaration
                | SyntaxKind::StructDeclaration
                | SyntaxKind::InterfaceDeclaration
                | SyntaxKind::RecordDeclaration
                | SyntaxKind::RecordStructDeclaration
        )
    }

    #[must_use]
    pub const fn is_namespace_declaration(self) -> bool {
        matches!(
            self,
            SyntaxKind::NamespaceDeclaration | SyntaxKind::FileScopedNamespaceDeclaration
        )
    }

    /// Lambdas, anonymous methods and local functions.
    #[must_use]
    pub const fn is_nested_function(self) -> bool {
        matches!(
            self,
            SyntaxKind::LocalFunctionStatement
                | SyntaxKind::AnonymousMethodExpression
                | SyntaxKind::SimpleLambdaExpression
                | SyntaxKind::ParenthesizedLambdaExpression
        )
    }

    /// Kinds whose payload is the generic child list (statements and expressions).
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(
            self,
            SyntaxKind::Block
                | SyntaxKind::EmptyStatement
                | SyntaxKind::ExpressionStatement
                | SyntaxKind::LocalDeclarationStatement
                | SyntaxKind::LocalFunctionStatement
                | SyntaxKind::ReturnStatement
                | SyntaxKind::YieldReturnStatement
                | SyntaxKind::YieldBreakStatement
                | SyntaxKind::IfStatement
                | SyntaxKind::WhileStatement
                | SyntaxKind::DoStatement
                | SyntaxKind::ForStatement
                | SyntaxKind::ForEachStatement
                | SyntaxKind::UsingStatement
                | SyntaxKind::TryStatement
                | SyntaxKind::CatchClause
                | SyntaxKind::FinallyClause
                | SyntaxKind::SwitchStatement
                | SyntaxKind::SwitchSection
                | SyntaxKind::ThrowStatement
                | SyntaxKind::BreakStatement
                | SyntaxKind::ContinueStatement
                | SyntaxKind::LabeledStatement
                | SyntaxKind::LockStatement
                | SyntaxKind::AwaitExpression
                | SyntaxKind::InvocationExpression
                | SyntaxKind::ArgumentList
                | SyntaxKind::Argument
                | SyntaxKind::SimpleMemberAccessExpression
                | SyntaxKind::ObjectCreationExpression
                | SyntaxKind::AssignmentExpression
                | SyntaxKind::BinaryExpression
                | SyntaxKind::ParenthesizedExpression
                | SyntaxKind::ConditionalExpression
                | SyntaxKind::LiteralExpression
                | SyntaxKind::SimpleLambdaExpression
                | SyntaxKind::ParenthesizedLambdaExpression
                | SyntaxKind::AnonymousMethodExpression
        )
    }

    /// Source text of a keyword token, if this kind is a keyword.
    #[must_use]
    pub const fn keyword_text(self) -> Option<&'static str> {
        let text = match self {
            SyntaxKind::AbstractKeyword => "abstract",
            SyntaxKind::AsyncKeyword => "async",
            SyntaxKind::CheckedKeyword => "checked",
            SyntaxKind::ConstKeyword => "const",
            SyntaxKind::ExplicitKeyword => "explicit",
            SyntaxKind::ExternKeyword => "extern",
            SyntaxKind::FalseKeyword => "false",
            SyntaxKind::FileKeyword => "file",
            SyntaxKind::FixedKeyword => "fixed",
            SyntaxKind::GlobalKeyword => "global",
            SyntaxKind::ImplicitKeyword => "implicit",
            SyntaxKind::InKeyword => "in",
            SyntaxKind::InternalKeyword => "internal",
            SyntaxKind::NewKeyword => "new",
            SyntaxKind::OutKeyword => "out",
            SyntaxKind::OverrideKeyword => "override",
            SyntaxKind::ParamsKeyword => "params",
            SyntaxKind::PartialKeyword => "partial",
            SyntaxKind::PrivateKeyword => "private",
            SyntaxKind::ProtectedKeyword => "protected",
            SyntaxKind::PublicKeyword => "public",
            SyntaxKind::ReadOnlyKeyword => "readonly",
            SyntaxKind::RefKeyword => "ref",
            SyntaxKind::RequiredKeyword => "required",
            SyntaxKind::ScopedKeyword => "scoped",
            SyntaxKind::SealedKeyword => "sealed",
            SyntaxKind::StaticKeyword => "static",
            SyntaxKind::ThisKeyword => "this",
            SyntaxKind::TrueKeyword => "true",
            SyntaxKind::UnsafeKeyword => "unsafe",
            SyntaxKind::VirtualKeyword => "virtual",
            SyntaxKind::VolatileKeyword => "volatile",
            SyntaxKind::GetKeyword => "get",
            SyntaxKind::SetKeyword => "set",
            SyntaxKind::InitKeyword => "init",
            SyntaxKind::AddKeyword => "add",
            SyntaxKind::RemoveKeyword => "remove",
            _ => return None,
        };
        Some(text)
    }

    /// Source text of a punctuation token, if this kind is one.
    #[must_use]
    pub const fn punctuation_text(self) -> Option<&'static str> {
        let text = match self {
            SyntaxKind::PlusToken => "+",
            SyntaxKind::MinusToken => "-",
            SyntaxKind::AsteriskToken => "*",
            SyntaxKind::SlashToken => "/",
            SyntaxKind::PercentToken => "%",
            SyntaxKind::AmpersandToken => "&",
            SyntaxKind::BarToken => "|",
            SyntaxKind::CaretToken => "^",
            SyntaxKind::ExclamationToken => "!",
            SyntaxKind::TildeToken => "~",
            SyntaxKind::PlusPlusToken => "++",
            SyntaxKind::MinusMinusToken => "--",
            SyntaxKind::LessThanToken => "<",
            SyntaxKind::GreaterThanToken => ">",
            SyntaxKind::LessThanEqualsToken => "<=",
            SyntaxKind::GreaterThanEqualsToken => ">=",
            SyntaxKind::EqualsEqualsToken => "==",
            SyntaxKind::ExclamationEqualsToken => "!=",
            SyntaxKind::LessThanLessThanToken => "<<",
            SyntaxKind::GreaterThanGreaterThanToken => ">>",
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken => ">>>",
            _ => return None,
        };
        Some(text)
    }
}
