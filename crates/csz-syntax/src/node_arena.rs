//! NodeArena creation methods (add_* methods).
//!
//! Nodes are created bottom-up: children exist before their parent, and each
//! add_* method records the new node as the parent of its children.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;

impl NodeArena {
    /// Maximum pre-allocation to avoid capacity overflow in huge files.
    const MAX_NODE_PREALLOC: usize = 5_000_000;

    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Create an arena with pre-allocated capacity for the node headers.
    pub fn with_capacity(capacity: usize) -> NodeArena {
        let safe_capacity = capacity.min(Self::MAX_NODE_PREALLOC);
        let mut arena = NodeArena::default();
        arena.nodes = Vec::with_capacity(safe_capacity);
        arena.extended_info = Vec::with_capacity(safe_capacity);
        arena.identifiers = Vec::with_capacity(safe_capacity / 4);
        arena.composites = Vec::with_capacity(safe_capacity / 4);
        arena
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

    // ============================================================================
    // Parent Mapping Helpers
    // ============================================================================

    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if child.is_some()
            && let Some(info) = self.extended_info.get_mut(child.0 as usize)
        {
            info.parent = parent;
        }
    }

    #[inline]
    fn set_parent_list(&mut self, list: &NodeList, parent: NodeIndex) {
        for &child in &list.nodes {
            self.set_parent(child, parent);
        }
    }

    #[inline]
    fn set_parent_opt_list(&mut self, list: &Option<NodeList>, parent: NodeIndex) {
        if let Some(l) = list {
            self.set_parent_list(l, parent);
        }
    }

    #[inline]
    fn push_node(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        self.extended_info.push(ExtendedNodeInfo::default());
        NodeIndex(index)
    }

    // ============================================================================
    // Node Creation Methods
    // ============================================================================

    /// Add a token node (keyword, punctuation); no additional data.
    pub fn add_token(&mut self, kind: SyntaxKind, pos: u32, end: u32) -> NodeIndex {
        self.push_node(Node::new(kind, pos, end))
    }

    /// Add an identifier token or identifier name.
    pub fn add_identifier(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data: IdentifierData,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::IdentifierToken | SyntaxKind::IdentifierName | SyntaxKind::PredefinedType
        ));
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(data);
        self.push_node(Node::with_data(kind, pos, end, data_index))
    }

    pub fn add_generic_name(&mut self, pos: u32, end: u32, data: GenericNameData) -> NodeIndex {
        let identifier = data.identifier;
        let type_arguments = data.type_arguments.clone();

        let data_index = self.generic_names.len() as u32;
        self.generic_names.push(data);
        let parent =
            self.push_node(Node::with_data(SyntaxKind::GenericName, pos, end, data_index));
        self.set_parent(identifier, parent);
        self.set_parent_list(&type_arguments, parent);
        parent
    }

    /// Add a qualified (`A.B`) or alias-qualified (`global::B`) name.
    pub fn add_qualified_name(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data: QualifiedNameData,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::QualifiedName | SyntaxKind::AliasQualifiedName
        ));
        let left = data.left;
        let right = data.right;

        let data_index = self.qualified_names.len() as u32;
        self.qualified_names.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(left, parent);
        self.set_parent(right, parent);
        parent
    }

    pub fn add_compilation_unit(
        &mut self,
        pos: u32,
        end: u32,
        data: CompilationUnitData,
    ) -> NodeIndex {
        let children = [
            data.externs.clone(),
            data.usings.clone(),
            data.attribute_lists.clone(),
            data.members.clone(),
            data.reference_directives.clone(),
        ];

        let data_index = self.compilation_units.len() as u32;
        self.compilation_units.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::CompilationUnit,
            pos,
            end,
            data_index,
        ));
        for list in &children {
            self.set_parent_list(list, parent);
        }
        parent
    }

    pub fn add_extern_alias(&mut self, pos: u32, end: u32, data: ExternAliasData) -> NodeIndex {
        let identifier = data.identifier;

        let data_index = self.extern_aliases.len() as u32;
        self.extern_aliases.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::ExternAliasDirective,
            pos,
            end,
            data_index,
        ));
        self.set_parent(identifier, parent);
        parent
    }

    pub fn add_using_directive(
        &mut self,
        pos: u32,
        end: u32,
        data: UsingDirectiveData,
    ) -> NodeIndex {
        let parts = [
            data.global_keyword,
            data.static_keyword,
            data.alias,
            data.name,
        ];

        let data_index = self.using_directives.len() as u32;
        self.using_directives.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::UsingDirective,
            pos,
            end,
            data_index,
        ));
        for child in parts {
            self.set_parent(child, parent);
        }
        parent
    }

    pub fn add_reference_directive(
        &mut self,
        pos: u32,
        end: u32,
        data: ReferenceDirectiveData,
    ) -> NodeIndex {
        let data_index = self.reference_directives.len() as u32;
        self.reference_directives.push(data);
        self.push_node(Node::with_data(
            SyntaxKind::ReferenceDirectiveTrivia,
            pos,
            end,
            data_index,
        ))
    }

    pub fn add_attribute_list(
        &mut self,
        pos: u32,
        end: u32,
        data: AttributeListData,
    ) -> NodeIndex {
        let attributes = data.attributes.clone();

        let data_index = self.attribute_lists.len() as u32;
        self.attribute_lists.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::AttributeList,
            pos,
            end,
            data_index,
        ));
        self.set_parent_list(&attributes, parent);
        parent
    }

    pub fn add_attribute(&mut self, pos: u32, end: u32, data: AttributeData) -> NodeIndex {
        let name = data.name;
        let arguments = data.arguments.clone();

        let data_index = self.attributes.len() as u32;
        self.attributes.push(data);
        let parent = self.push_node(Node::with_data(SyntaxKind::Attribute, pos, end, data_index));
        self.set_parent(name, parent);
        self.set_parent_list(&arguments, parent);
        parent
    }

    /// Add a braced or file-scoped namespace declaration.
    pub fn add_namespace(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data: NamespaceData,
    ) -> NodeIndex {
        debug_assert!(kind.is_namespace_declaration());
        let lists = [
            data.attribute_lists.clone(),
            data.modifiers.clone(),
            data.externs.clone(),
            data.usings.clone(),
            data.members.clone(),
        ];
        let name = data.name;

        let data_index = self.namespaces.len() as u32;
        self.namespaces.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(name, parent);
        for list in &lists {
            self.set_parent_list(list, parent);
        }
        parent
    }

    /// Add a class, struct, interface, record or record struct declaration.
    pub fn add_type_declaration(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data: TypeDeclarationData,
    ) -> NodeIndex {
        debug_assert!(kind.is_type_declaration());
        let lists = [
            data.attribute_lists.clone(),
            data.modifiers.clone(),
            data.constraint_clauses.clone(),
            data.members.clone(),
        ];
        let optional_lists = [
            data.type_parameters.clone(),
            data.parameter_list.clone(),
            data.base_list.clone(),
        ];
        let identifier = data.identifier;

        let data_index = self.type_declarations.len() as u32;
        self.type_declarations.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(identifier, parent);
        for list in &lists {
            self.set_parent_list(list, parent);
        }
        for list in &optional_lists {
            self.set_parent_opt_list(list, parent);
        }
        parent
    }

    pub fn add_delegate(&mut self, pos: u32, end: u32, data: DelegateData) -> NodeIndex {
        let lists = [
            data.attribute_lists.clone(),
            data.modifiers.clone(),
            data.parameters.clone(),
            data.constraint_clauses.clone(),
        ];
        let type_parameters = data.type_parameters.clone();
        let return_type = data.return_type;
        let identifier = data.identifier;

        let data_index = self.delegates.len() as u32;
        self.delegates.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::DelegateDeclaration,
            pos,
            end,
            data_index,
        ));
        self.set_parent(return_type, parent);
        self.set_parent(identifier, parent);
        self.set_parent_opt_list(&type_parameters, parent);
        for list in &lists {
            self.set_parent_list(list, parent);
        }
        parent
    }

    pub fn add_enum(&mut self, pos: u32, end: u32, data: EnumData) -> NodeIndex {
        let lists = [
            data.attribute_lists.clone(),
            data.modifiers.clone(),
            data.members.clone(),
        ];
        let base_list = data.base_list.clone();
        let identifier = data.identifier;

        let data_index = self.enums.len() as u32;
        self.enums.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::EnumDeclaration,
            pos,
            end,
            data_index,
        ));
        self.set_parent(identifier, parent);
        self.set_parent_opt_list(&base_list, parent);
        for list in &lists {
            self.set_parent_list(list, parent);
        }
        parent
    }

    pub fn add_enum_member(&mut self, pos: u32, end: u32, data: EnumMemberData) -> NodeIndex {
        let attribute_lists = data.attribute_lists.clone();
        let identifier = data.identifier;
        let value = data.value;

        let data_index = self.enum_members.len() as u32;
        self.enum_members.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::EnumMemberDeclaration,
            pos,
            end,
            data_index,
        ));
        self.set_parent_list(&attribute_lists, parent);
        self.set_parent(identifier, parent);
        self.set_parent(value, parent);
        parent
    }

    /// Add a field or event-field declaration.
    pub fn add_field(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: FieldData) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::FieldDeclaration | SyntaxKind::EventFieldDeclaration
        ));
        let lists = [
            data.attribute_lists.clone(),
            data.modifiers.clone(),
            data.declarators.clone(),
        ];
        let type_node = data.type_node;

        let data_index = self.fields.len() as u32;
        self.fields.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(type_node, parent);
        for list in &lists {
            self.set_parent_list(list, parent);
        }
        parent
    }

    pub fn add_variable_declarator(
        &mut self,
        pos: u32,
        end: u32,
        data: VariableDeclaratorData,
    ) -> NodeIndex {
        let identifier = data.identifier;
        let initializer = data.initializer;

        let data_index = self.variable_declarators.len() as u32;
        self.variable_declarators.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::VariableDeclarator,
            pos,
            end,
            data_index,
        ));
        self.set_parent(identifier, parent);
        self.set_parent(initializer, parent);
        parent
    }

    /// Add a method, operator, conversion operator, constructor or destructor.
    pub fn add_method(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: MethodData) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::MethodDeclaration
                | SyntaxKind::OperatorDeclaration
                | SyntaxKind::ConversionOperatorDeclaration
                | SyntaxKind::ConstructorDeclaration
                | SyntaxKind::DestructorDeclaration
        ));
        let lists = [
            data.attribute_lists.clone(),
            data.modifiers.clone(),
            data.parameters.clone(),
            data.constraint_clauses.clone(),
        ];
        let type_parameters = data.type_parameters.clone();
        let singles = [
            data.return_type,
            data.explicit_interface,
            data.identifier,
            data.operator_token,
            data.checked_keyword,
            data.body,
        ];

        let data_index = self.methods.len() as u32;
        self.methods.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        for child in singles {
            self.set_parent(child, parent);
        }
        self.set_parent_opt_list(&type_parameters, parent);
        for list in &lists {
            self.set_parent_list(list, parent);
        }
        parent
    }

    /// Add a property, event or indexer declaration.
    pub fn add_property(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data: PropertyData,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::PropertyDeclaration
                | SyntaxKind::EventDeclaration
                | SyntaxKind::IndexerDeclaration
        ));
        let lists = [
            data.attribute_lists.clone(),
            data.modifiers.clone(),
            data.parameters.clone(),
        ];
        let accessors = data.accessors.clone();
        let singles = [
            data.type_node,
            data.explicit_interface,
            data.identifier,
            data.initializer,
        ];

        let data_index = self.properties.len() as u32;
        self.properties.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        for child in singles {
            self.set_parent(child, parent);
        }
        self.set_parent_opt_list(&accessors, parent);
        for list in &lists {
            self.set_parent_list(list, parent);
        }
        parent
    }

    pub fn add_accessor(&mut self, pos: u32, end: u32, data: AccessorData) -> NodeIndex {
        let lists = [data.attribute_lists.clone(), data.modifiers.clone()];
        let keyword = data.keyword;
        let body = data.body;

        let data_index = self.accessors.len() as u32;
        self.accessors.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::AccessorDeclaration,
            pos,
            end,
            data_index,
        ));
        self.set_parent(keyword, parent);
        self.set_parent(body, parent);
        for list in &lists {
            self.set_parent_list(list, parent);
        }
        parent
    }

    pub fn add_parameter(&mut self, pos: u32, end: u32, data: ParameterData) -> NodeIndex {
        let lists = [data.attribute_lists.clone(), data.modifiers.clone()];
        let singles = [data.type_node, data.identifier, data.default_value];

        let data_index = self.parameters.len() as u32;
        self.parameters.push(data);
        let parent = self.push_node(Node::with_data(SyntaxKind::Parameter, pos, end, data_index));
        for child in singles {
            self.set_parent(child, parent);
        }
        for list in &lists {
            self.set_parent_list(list, parent);
        }
        parent
    }

    pub fn add_type_parameter(
        &mut self,
        pos: u32,
        end: u32,
        data: TypeParameterData,
    ) -> NodeIndex {
        let attribute_lists = data.attribute_lists.clone();
        let identifier = data.identifier;

        let data_index = self.type_parameters.len() as u32;
        self.type_parameters.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::TypeParameter,
            pos,
            end,
            data_index,
        ));
        self.set_parent_list(&attribute_lists, parent);
        self.set_parent(identifier, parent);
        parent
    }

    pub fn add_constraint_clause(
        &mut self,
        pos: u32,
        end: u32,
        data: ConstraintClauseData,
    ) -> NodeIndex {
        let name = data.name;
        let constraints = data.constraints.clone();

        let data_index = self.constraint_clauses.len() as u32;
        self.constraint_clauses.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::TypeParameterConstraintClause,
            pos,
            end,
            data_index,
        ));
        self.set_parent(name, parent);
        self.set_parent_list(&constraints, parent);
        parent
    }

    pub fn add_global_statement(
        &mut self,
        pos: u32,
        end: u32,
        data: GlobalStatementData,
    ) -> NodeIndex {
        let lists = [data.attribute_lists.clone(), data.modifiers.clone()];
        let statement = data.statement;

        let data_index = self.global_statements.len() as u32;
        self.global_statements.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::GlobalStatement,
            pos,
            end,
            data_index,
        ));
        self.set_parent(statement, parent);
        for list in &lists {
            self.set_parent_list(list, parent);
        }
        parent
    }

    pub fn add_incomplete_member(
        &mut self,
        pos: u32,
        end: u32,
        data: IncompleteMemberData,
    ) -> NodeIndex {
        let lists = [data.attribute_lists.clone(), data.modifiers.clone()];
        let type_node = data.type_node;

        let data_index = self.incomplete_members.len() as u32;
        self.incomplete_members.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::IncompleteMember,
            pos,
            end,
            data_index,
        ));
        self.set_parent(type_node, parent);
        for list in &lists {
            self.set_parent_list(list, parent);
        }
        parent
    }

    /// Add a statement or expression node whose payload is its child list.
    pub fn add_composite(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data: CompositeData,
    ) -> NodeIndex {
        debug_assert!(kind.is_composite(), "{kind:?} is not a composite kind");
        let children = data.children.clone();

        let data_index = self.composites.len() as u32;
        self.composites.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent_list(&children, parent);
        parent
    }

    /// Set node flags (e.g. `node_flags::AWAIT_KEYWORD`) on an existing node.
    pub fn add_flags(&mut self, index: NodeIndex, flags: u16) {
        if let Some(node) = self.get_mut(index) {
            node.flags |= flags;
        }
    }
}
