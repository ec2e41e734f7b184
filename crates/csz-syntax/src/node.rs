//! Node storage types for the arena-based syntax tree.
//!
//! A `Node` is a thin header (kind, flags, span, data index). Kind-specific
//! payloads live in typed pools on `NodeArena`; `data_index` points into the
//! pool that matches the node's kind.

use crate::syntax_kind::SyntaxKind;
use csz_common::Span;
use serde::{Deserialize, Serialize};

/// Index of a node inside its `NodeArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    #[must_use]
    pub const fn is_some(self) -> bool {
        self.0 != u32::MAX
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        NodeIndex::NONE
    }
}

/// Ordered list of child nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
}

impl NodeList {
    #[must_use]
    pub const fn new() -> NodeList {
        NodeList { nodes: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<NodeIndex> {
        self.nodes.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes.iter().copied()
    }
}

impl From<Vec<NodeIndex>> for NodeList {
    fn from(nodes: Vec<NodeIndex>) -> Self {
        NodeList { nodes }
    }
}

impl FromIterator<NodeIndex> for NodeList {
    fn from_iter<T: IntoIterator<Item = NodeIndex>>(iter: T) -> Self {
        NodeList {
            nodes: iter.into_iter().collect(),
        }
    }
}

/// Node flags (bit set stored on the node header).
pub mod node_flags {
    pub const NONE: u16 = 0;
    /// `await foreach`, `await using`, or an `await using` local declaration.
    pub const AWAIT_KEYWORD: u16 = 1 << 0;
    /// Node was synthesized by error recovery and contains a syntax error.
    pub const CONTAINS_DIAGNOSTICS: u16 = 1 << 1;
}

/// Thin node header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
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
    #[must_use]
    pub const fn new(kind: SyntaxKind, pos: u32, end: u32) -> Node {
        Node {
            kind,
            flags: node_flags::NONE,
            pos,
            end,
            data_index: Node::NO_DATA,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_data(kind: SyntaxKind, pos: u32, end: u32, data_index: u32) -> Node {
        Node {
            kind,
            flags: node_flags::NONE,
            pos,
            end,
            data_index,
        }
    }

    #[inline]
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.data_index != Node::NO_DATA
    }

    #[inline]
    #[must_use]
    pub const fn has_flag(&self, flag: u16) -> bool {
        self.flags & flag != 0
    }

    #[inline]
    #[must_use]
    pub const fn span(&self) -> Span {
        Span::new(self.pos, self.end)
    }
}

/// Per-node information that is not part of the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedNodeInfo {
    pub parent: NodeIndex,
}

// =============================================================================
// Node data pools
// =============================================================================

/// `IdentifierToken` and `IdentifierName`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierData {
    pub text: String,
}

/// `GenericName`: `List<T>`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericNameData {
    pub identifier: NodeIndex,
    pub type_arguments: NodeList,
}

/// `QualifiedName` (`A.B`) and `AliasQualifiedName` (`global::B`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifiedNameData {
    pub left: NodeIndex,
    pub right: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationUnitData {
    pub externs: NodeList,
    pub usings: NodeList,
    pub attribute_lists: NodeList,
    pub members: NodeList,
    /// `#r "path"` directives (script files only).
    pub reference_directives: NodeList,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternAliasData {
    pub identifier: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsingDirectiveData {
    /// `global` keyword token, or NONE.
    pub global_keyword: NodeIndex,
    /// `static` keyword token, or NONE.
    pub static_keyword: NodeIndex,
    /// Alias identifier in `using X = ...;`, or NONE.
    pub alias: NodeIndex,
    pub name: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDirectiveData {
    pub file: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeListData {
    /// `assembly`, `module`, `return`, ... or None.
    pub target: Option<String>,
    pub attributes: NodeList,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeData {
    pub name: NodeIndex,
    pub arguments: NodeList,
}

/// `NamespaceDeclaration` and `FileScopedNamespaceDeclaration`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceData {
    pub attribute_lists: NodeList,
    pub modifiers: NodeList,
    pub name: NodeIndex,
    pub externs: NodeList,
    pub usings: NodeList,
    pub members: NodeList,
}

/// Class, struct, interface, record and record struct declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclarationData {
    pub attribute_lists: NodeList,
    pub modifiers: NodeList,
    pub identifier: NodeIndex,
    pub type_parameters: Option<NodeList>,
    /// Primary constructor parameter list.
    pub parameter_list: Option<NodeList>,
    pub base_list: Option<NodeList>,
    pub constraint_clauses: NodeList,
    pub members: NodeList,
}

impl TypeDeclarationData {
    #[must_use]
    pub fn arity(&self) -> u32 {
        self.type_parameters.as_ref().map_or(0, |p| p.len() as u32)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegateData {
    pub attribute_lists: NodeList,
    pub modifiers: NodeList,
    pub return_type: NodeIndex,
    pub identifier: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub constraint_clauses: NodeList,
}

impl DelegateData {
    #[must_use]
    pub fn arity(&self) -> u32 {
        self.type_parameters.as_ref().map_or(0, |p| p.len() as u32)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumData {
    pub attribute_lists: NodeList,
    pub modifiers: NodeList,
    pub identifier: NodeIndex,
    pub base_list: Option<NodeList>,
    pub members: NodeList,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMemberData {
    pub attribute_lists: NodeList,
    pub identifier: NodeIndex,
    pub value: NodeIndex,
}

/// `FieldDeclaration` and `EventFieldDeclaration`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldData {
    pub attribute_lists: NodeList,
    pub modifiers: NodeList,
    pub type_node: NodeIndex,
    pub declarators: NodeList,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclaratorData {
    pub identifier: NodeIndex,
    pub initializer: NodeIndex,
}

/// Methods, operators, conversion operators, constructors and destructors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodData {
    pub attribute_lists: NodeList,
    pub modifiers: NodeList,
    pub return_type: NodeIndex,
    /// `IFoo.` qualifier of an explicit interface implementation, or NONE.
    pub explicit_interface: NodeIndex,
    /// Method/constructor/destructor name; NONE for operators.
    pub identifier: NodeIndex,
    /// Operator token (`+`, `true`, ...) or `implicit`/`explicit` for conversions.
    pub operator_token: NodeIndex,
    /// `checked` keyword of a checked operator, or NONE.
    pub checked_keyword: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub constraint_clauses: NodeList,
    pub body: NodeIndex,
}

/// Properties, events and indexers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyData {
    pub attribute_lists: NodeList,
    pub modifiers: NodeList,
    pub type_node: NodeIndex,
    pub explicit_interface: NodeIndex,
    /// NONE for indexers.
    pub identifier: NodeIndex,
    /// Indexer parameters.
    pub parameters: NodeList,
    pub accessors: Option<NodeList>,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessorData {
    pub attribute_lists: NodeList,
    pub modifiers: NodeList,
    pub keyword: NodeIndex,
    pub body: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterData {
    pub attribute_lists: NodeList,
    pub modifiers: NodeList,
    pub type_node: NodeIndex,
    pub identifier: NodeIndex,
    pub default_value: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParameterData {
    pub attribute_lists: NodeList,
    pub identifier: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintClauseData {
    pub name: NodeIndex,
    pub constraints: NodeList,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalStatementData {
    pub attribute_lists: NodeList,
    pub modifiers: NodeList,
    pub statement: NodeIndex,
}

/// Placeholder produced by error recovery for a member that could not be parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncompleteMemberData {
    pub attribute_lists: NodeList,
    pub modifiers: NodeList,
    pub type_node: NodeIndex,
}

/// Statements and expressions: the payload is the ordered child list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeData {
    pub children: NodeList,
}

/// Arena holding every node of one syntax tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
    pub extended_info: Vec<ExtendedNodeInfo>,
    pub identifiers: Vec<IdentifierData>,
    pub generic_names: Vec<GenericNameData>,
    pub qualified_names: Vec<QualifiedNameData>,
    pub compilation_units: Vec<CompilationUnitData>,
    pub extern_aliases: Vec<ExternAliasData>,
    pub using_directives: Vec<UsingDirectiveData>,
    pub reference_directives: Vec<ReferenceDirectiveData>,
    pub attribute_lists: Vec<AttributeListData>,
    pub attributes: Vec<AttributeData>,
    pub namespaces: Vec<NamespaceData>,
    pub type_declarations: Vec<TypeDeclarationData>,
    pub delegates: Vec<DelegateData>,
    pub enums: Vec<EnumData>,
    pub enum_members: Vec<EnumMemberData>,
    pub fields: Vec<FieldData>,
    pub variable_declarators: Vec<VariableDeclaratorData>,
    pub methods: Vec<MethodData>,
    pub properties: Vec<PropertyData>,
    pub accessors: Vec<AccessorData>,
    pub parameters: Vec<ParameterData>,
    pub type_parameters: Vec<TypeParameterData>,
    pub constraint_clauses: Vec<ConstraintClauseData>,
    pub global_statements: Vec<GlobalStatementData>,
    pub incomplete_members: Vec<IncompleteMemberData>,
    pub composites: Vec<CompositeData>,
}
