//! Programmatic construction of syntax trees.
//!
//! `SyntaxFactory` wraps a `NodeArena` and hands out synthetic but
//! well-formed spans: every node gets a span that covers its children and
//! ends at a position no other node ends at, so two nodes never share a
//! location. Front ends that already have a parser fill the arena directly;
//! the factory is for tools, tests and benchmarks that need trees without
//! source text.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use crate::tree::{ParseOptions, SyntaxTree};
use csz_common::TreeId;

#[derive(Debug, Default)]
pub struct SyntaxFactory {
    arena: NodeArena,
    cursor: u32,
}

impl SyntaxFactory {
    #[must_use]
    pub fn new() -> SyntaxFactory {
        SyntaxFactory::default()
    }

    #[must_use]
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut NodeArena {
        &mut self.arena
    }

    /// Wrap the arena into tree `#0` named `file_name`.
    #[must_use]
    pub fn finish(self, root: NodeIndex, file_name: &str, options: ParseOptions) -> SyntaxTree {
        self.finish_with_id(TreeId(0), root, file_name, options)
    }

    #[must_use]
    pub fn finish_with_id(
        self,
        id: TreeId,
        root: NodeIndex,
        file_name: &str,
        options: ParseOptions,
    ) -> SyntaxTree {
        SyntaxTree::new(id, file_name, options, self.arena, root)
    }

    // =========================================================================
    // Span bookkeeping
    // =========================================================================

    fn leaf_span(&mut self, width: usize) -> (u32, u32) {
        let pos = self.cursor;
        self.cursor += (width as u32).max(1) + 1;
        (pos, pos + (width as u32).max(1))
    }

    fn cover<I>(&mut self, children: I) -> (u32, u32)
    where
        I: IntoIterator<Item = NodeIndex>,
    {
        let pos = children
            .into_iter()
            .filter_map(|child| self.arena.get(child))
            .map(|node| node.pos)
            .min()
            .unwrap_or(self.cursor);
        self.cursor += 1;
        (pos, self.cursor)
    }

    fn cover_lists(&mut self, singles: &[NodeIndex], lists: &[&NodeList]) -> (u32, u32) {
        let children: Vec<NodeIndex> = singles
            .iter()
            .copied()
            .chain(lists.iter().flat_map(|list| list.iter()))
            .collect();
        self.cover(children)
    }

    // =========================================================================
    // Tokens and names
    // =========================================================================

    /// Keyword or punctuation token.
    pub fn token(&mut self, kind: SyntaxKind) -> NodeIndex {
        let width = kind
            .keyword_text()
            .or_else(|| kind.punctuation_text())
            .map_or(1, str::len);
        let (pos, end) = self.leaf_span(width);
        self.arena.add_token(kind, pos, end)
    }

    pub fn modifiers(&mut self, kinds: &[SyntaxKind]) -> NodeList {
        kinds.iter().map(|&kind| self.token(kind)).collect()
    }

    pub fn identifier(&mut self, text: &str) -> NodeIndex {
        self.identifier_of_kind(SyntaxKind::IdentifierToken, text)
    }

    pub fn identifier_name(&mut self, text: &str) -> NodeIndex {
        self.identifier_of_kind(SyntaxKind::IdentifierName, text)
    }

    pub fn predefined_type(&mut self, text: &str) -> NodeIndex {
        self.identifier_of_kind(SyntaxKind::PredefinedType, text)
    }

    fn identifier_of_kind(&mut self, kind: SyntaxKind, text: &str) -> NodeIndex {
        let (pos, end) = self.leaf_span(text.len());
        self.arena.add_identifier(
            kind,
            pos,
            end,
            IdentifierData {
                text: text.to_string(),
            },
        )
    }

    /// Dotted name: `"A.B.C"` becomes `QualifiedName(QualifiedName(A, B), C)`.
    pub fn name(&mut self, dotted: &str) -> NodeIndex {
        let mut segments = dotted.split('.');
        let first = segments.next().unwrap_or_default();
        let mut name = self.identifier_name(first);
        for segment in segments {
            let right = self.identifier_name(segment);
            name = self.qualified_name(name, right);
        }
        name
    }

    pub fn qualified_name(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover([left, right]);
        self.arena.add_qualified_name(
            SyntaxKind::QualifiedName,
            pos,
            end,
            QualifiedNameData { left, right },
        )
    }

    /// `alias::name`, e.g. `global::System`.
    pub fn alias_qualified_name(&mut self, alias: &str, name: &str) -> NodeIndex {
        let left = self.identifier_name(alias);
        let right = self.identifier_name(name);
        let (pos, end) = self.cover([left, right]);
        self.arena.add_qualified_name(
            SyntaxKind::AliasQualifiedName,
            pos,
            end,
            QualifiedNameData { left, right },
        )
    }

    pub fn generic_name(&mut self, text: &str, type_arguments: &[&str]) -> NodeIndex {
        let identifier = self.identifier(text);
        let type_arguments: NodeList = type_arguments
            .iter()
            .map(|arg| self.identifier_name(arg))
            .collect();
        let (pos, end) = self.cover_lists(&[identifier], &[&type_arguments]);
        self.arena.add_generic_name(
            pos,
            end,
            GenericNameData {
                identifier,
                type_arguments,
            },
        )
    }

    // =========================================================================
    // Compilation unit level
    // =========================================================================

    pub fn compilation_unit(&mut self, data: CompilationUnitData) -> NodeIndex {
        let (pos, end) = self.cover_lists(
            &[],
            &[
                &data.externs,
                &data.usings,
                &data.attribute_lists,
                &data.members,
                &data.reference_directives,
            ],
        );
        self.arena.add_compilation_unit(pos, end, data)
    }

    /// Compilation unit with only members.
    pub fn compilation_unit_of(&mut self, members: Vec<NodeIndex>) -> NodeIndex {
        self.compilation_unit(CompilationUnitData {
            members: members.into(),
            ..CompilationUnitData::default()
        })
    }

    pub fn extern_alias(&mut self, alias: &str) -> NodeIndex {
        let identifier = self.identifier(alias);
        let (pos, end) = self.cover([identifier]);
        self.arena
            .add_extern_alias(pos, end, ExternAliasData { identifier })
    }

    pub fn using(&mut self, name: &str) -> NodeIndex {
        self.using_directive(false, false, None, name)
    }

    pub fn global_using(&mut self, name: &str) -> NodeIndex {
        self.using_directive(true, false, None, name)
    }

    pub fn using_static(&mut self, name: &str) -> NodeIndex {
        self.using_directive(false, true, None, name)
    }

    /// `using alias = name;`
    pub fn using_alias(&mut self, alias: &str, name: &str) -> NodeIndex {
        self.using_directive(false, false, Some(alias), name)
    }

    /// `global using alias = name;`
    pub fn global_using_alias(&mut self, alias: &str, name: &str) -> NodeIndex {
        self.using_directive(true, false, Some(alias), name)
    }

    pub fn using_directive(
        &mut self,
        global: bool,
        is_static: bool,
        alias: Option<&str>,
        name: &str,
    ) -> NodeIndex {
        let global_keyword = if global {
            self.token(SyntaxKind::GlobalKeyword)
        } else {
            NodeIndex::NONE
        };
        let static_keyword = if is_static {
            self.token(SyntaxKind::StaticKeyword)
        } else {
            NodeIndex::NONE
        };
        let alias = alias.map_or(NodeIndex::NONE, |alias| self.identifier(alias));
        let name = self.name(name);
        let (pos, end) = self.cover([global_keyword, static_keyword, alias, name]);
        self.arena.add_using_directive(
            pos,
            end,
            UsingDirectiveData {
                global_keyword,
                static_keyword,
                alias,
                name,
            },
        )
    }

    /// `#r "file"`
    pub fn reference_directive(&mut self, file: &str) -> NodeIndex {
        let (pos, end) = self.leaf_span(file.len() + 5);
        self.arena.add_reference_directive(
            pos,
            end,
            ReferenceDirectiveData {
                file: file.to_string(),
            },
        )
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    pub fn attribute(&mut self, name: &str) -> NodeIndex {
        let name = self.name(name);
        let (pos, end) = self.cover([name]);
        self.arena.add_attribute(
            pos,
            end,
            AttributeData {
                name,
                arguments: NodeList::new(),
            },
        )
    }

    /// `[target: A, B]`
    pub fn attribute_list(&mut self, target: Option<&str>, names: &[&str]) -> NodeIndex {
        let attributes: NodeList = names.iter().map(|name| self.attribute(name)).collect();
        let (pos, end) = self.cover_lists(&[], &[&attributes]);
        self.arena.add_attribute_list(
            pos,
            end,
            AttributeListData {
                target: target.map(str::to_string),
                attributes,
            },
        )
    }

    // =========================================================================
    // Namespaces and types
    // =========================================================================

    pub fn namespace(&mut self, name: &str, members: Vec<NodeIndex>) -> NodeIndex {
        let name = self.name(name);
        self.namespace_with(
            SyntaxKind::NamespaceDeclaration,
            NamespaceData {
                name,
                members: members.into(),
                ..NamespaceData::default()
            },
        )
    }

    pub fn file_scoped_namespace(&mut self, name: &str, members: Vec<NodeIndex>) -> NodeIndex {
        let name = self.name(name);
        self.namespace_with(
            SyntaxKind::FileScopedNamespaceDeclaration,
            NamespaceData {
                name,
                members: members.into(),
                ..NamespaceData::default()
            },
        )
    }

    pub fn namespace_with(&mut self, kind: SyntaxKind, data: NamespaceData) -> NodeIndex {
        let (pos, end) = self.cover_lists(
            &[data.name],
            &[
                &data.attribute_lists,
                &data.modifiers,
                &data.externs,
                &data.usings,
                &data.members,
            ],
        );
        self.arena.add_namespace(kind, pos, end, data)
    }

    pub fn class(&mut self, name: &str, members: Vec<NodeIndex>) -> NodeIndex {
        self.simple_type(SyntaxKind::ClassDeclaration, name, members)
    }

    pub fn struct_declaration(&mut self, name: &str, members: Vec<NodeIndex>) -> NodeIndex {
        self.simple_type(SyntaxKind::StructDeclaration, name, members)
    }

    pub fn interface(&mut self, name: &str, members: Vec<NodeIndex>) -> NodeIndex {
        self.simple_type(SyntaxKind::InterfaceDeclaration, name, members)
    }

    pub fn record(&mut self, name: &str, members: Vec<NodeIndex>) -> NodeIndex {
        self.simple_type(SyntaxKind::RecordDeclaration, name, members)
    }

    pub fn simple_type(&mut self, kind: SyntaxKind, name: &str, members: Vec<NodeIndex>) -> NodeIndex {
        let identifier = self.identifier(name);
        self.type_declaration(
            kind,
            TypeDeclarationData {
                identifier,
                members: members.into(),
                ..TypeDeclarationData::default()
            },
        )
    }

    pub fn type_declaration(&mut self, kind: SyntaxKind, data: TypeDeclarationData) -> NodeIndex {
        let empty = NodeList::new();
        let (pos, end) = self.cover_lists(
            &[data.identifier],
            &[
                &data.attribute_lists,
                &data.modifiers,
                data.type_parameters.as_ref().unwrap_or(&empty),
                data.parameter_list.as_ref().unwrap_or(&empty),
                data.base_list.as_ref().unwrap_or(&empty),
                &data.constraint_clauses,
                &data.members,
            ],
        );
        self.arena.add_type_declaration(kind, pos, end, data)
    }

    pub fn type_parameters(&mut self, names: &[&str]) -> NodeList {
        names
            .iter()
            .map(|name| {
                let identifier = self.identifier(name);
                let (pos, end) = self.cover([identifier]);
                self.arena.add_type_parameter(
                    pos,
                    end,
                    TypeParameterData {
                        attribute_lists: NodeList::new(),
                        identifier,
                    },
                )
            })
            .collect()
    }

    /// `where T : constraint`
    pub fn constraint_clause(&mut self, type_parameter: &str, constraint: &str) -> NodeIndex {
        let name = self.identifier_name(type_parameter);
        let constraints: NodeList = std::iter::once(self.name(constraint)).collect();
        let (pos, end) = self.cover_lists(&[name], &[&constraints]);
        self.arena
            .add_constraint_clause(pos, end, ConstraintClauseData { name, constraints })
    }

    /// Base list of simple type names.
    pub fn base_list(&mut self, names: &[&str]) -> NodeList {
        names.iter().map(|name| self.name(name)).collect()
    }

    pub fn delegate(&mut self, name: &str) -> NodeIndex {
        let return_type = self.predefined_type("void");
        let identifier = self.identifier(name);
        self.delegate_with(DelegateData {
            return_type,
            identifier,
            ..DelegateData::default()
        })
    }

    pub fn delegate_with(&mut self, data: DelegateData) -> NodeIndex {
        let empty = NodeList::new();
        let (pos, end) = self.cover_lists(
            &[data.return_type, data.identifier],
            &[
                &data.attribute_lists,
                &data.modifiers,
                data.type_parameters.as_ref().unwrap_or(&empty),
                &data.parameters,
                &data.constraint_clauses,
            ],
        );
        self.arena.add_delegate(pos, end, data)
    }

    pub fn enum_declaration(&mut self, name: &str, members: &[&str]) -> NodeIndex {
        let identifier = self.identifier(name);
        let members: NodeList = members
            .iter()
            .map(|member| self.enum_member(member, NodeList::new()))
            .collect();
        self.enum_with(EnumData {
            identifier,
            members,
            ..EnumData::default()
        })
    }

    pub fn enum_with(&mut self, data: EnumData) -> NodeIndex {
        let empty = NodeList::new();
        let (pos, end) = self.cover_lists(
            &[data.identifier],
            &[
                &data.attribute_lists,
                &data.modifiers,
                data.base_list.as_ref().unwrap_or(&empty),
                &data.members,
            ],
        );
        self.arena.add_enum(pos, end, data)
    }

    pub fn enum_member(&mut self, name: &str, attribute_lists: NodeList) -> NodeIndex {
        let identifier = self.identifier(name);
        let (pos, end) = self.cover_lists(&[identifier], &[&attribute_lists]);
        self.arena.add_enum_member(
            pos,
            end,
            EnumMemberData {
                attribute_lists,
                identifier,
                value: NodeIndex::NONE,
            },
        )
    }

    // =========================================================================
    // Members
    // =========================================================================

    /// `int a, b;`
    pub fn field(&mut self, names: &[&str]) -> NodeIndex {
        self.field_with(SyntaxKind::FieldDeclaration, &[], names)
    }

    /// `event Action a, b;`
    pub fn event_field(&mut self, names: &[&str]) -> NodeIndex {
        self.field_with(SyntaxKind::EventFieldDeclaration, &[], names)
    }

    pub fn field_with(
        &mut self,
        kind: SyntaxKind,
        modifiers: &[SyntaxKind],
        names: &[&str],
    ) -> NodeIndex {
        let modifiers = self.modifiers(modifiers);
        let type_node = self.predefined_type("int");
        let declarators: NodeList = names
            .iter()
            .map(|name| {
                let identifier = self.identifier(name);
                let (pos, end) = self.cover([identifier]);
                self.arena.add_variable_declarator(
                    pos,
                    end,
                    VariableDeclaratorData {
                        identifier,
                        initializer: NodeIndex::NONE,
                    },
                )
            })
            .collect();
        let data = FieldData {
            attribute_lists: NodeList::new(),
            modifiers,
            type_node,
            declarators,
        };
        let (pos, end) = self.cover_lists(&[type_node], &[&data.modifiers, &data.declarators]);
        self.arena.add_field(kind, pos, end, data)
    }

    pub fn parameter(&mut self, name: &str) -> NodeIndex {
        self.parameter_with(&[], name)
    }

    pub fn parameter_with(&mut self, modifiers: &[SyntaxKind], name: &str) -> NodeIndex {
        let modifiers = self.modifiers(modifiers);
        let type_node = self.predefined_type("int");
        let identifier = self.identifier(name);
        let (pos, end) = self.cover_lists(&[type_node, identifier], &[&modifiers]);
        self.arena.add_parameter(
            pos,
            end,
            ParameterData {
                attribute_lists: NodeList::new(),
                modifiers,
                type_node,
                identifier,
                default_value: NodeIndex::NONE,
            },
        )
    }

    /// `void name(params) { }`
    pub fn method(&mut self, name: &str, parameters: Vec<NodeIndex>) -> NodeIndex {
        let return_type = self.predefined_type("void");
        let identifier = self.identifier(name);
        let body = self.block(Vec::new());
        self.method_with(
            SyntaxKind::MethodDeclaration,
            MethodData {
                return_type,
                identifier,
                parameters: parameters.into(),
                body,
                ..MethodData::default()
            },
        )
    }

    /// `void IFace.name() { }`
    pub fn explicit_interface_method(&mut self, interface: &str, name: &str) -> NodeIndex {
        let return_type = self.predefined_type("void");
        let explicit_interface = self.name(interface);
        let identifier = self.identifier(name);
        self.method_with(
            SyntaxKind::MethodDeclaration,
            MethodData {
                return_type,
                explicit_interface,
                identifier,
                ..MethodData::default()
            },
        )
    }

    pub fn constructor(&mut self, name: &str, is_static: bool) -> NodeIndex {
        let modifiers = if is_static {
            self.modifiers(&[SyntaxKind::StaticKeyword])
        } else {
            NodeList::new()
        };
        let identifier = self.identifier(name);
        self.method_with(
            SyntaxKind::ConstructorDeclaration,
            MethodData {
                modifiers,
                identifier,
                ..MethodData::default()
            },
        )
    }

    pub fn destructor(&mut self, name: &str) -> NodeIndex {
        let identifier = self.identifier(name);
        self.method_with(
            SyntaxKind::DestructorDeclaration,
            MethodData {
                identifier,
                ..MethodData::default()
            },
        )
    }

    /// `public static T operator <op>(p0, ...)`
    pub fn operator(&mut self, operator: SyntaxKind, parameter_count: usize) -> NodeIndex {
        self.operator_with(operator, parameter_count, false)
    }

    /// `public static T operator checked <op>(p0, ...)`
    pub fn checked_operator(&mut self, operator: SyntaxKind, parameter_count: usize) -> NodeIndex {
        self.operator_with(operator, parameter_count, true)
    }

    fn operator_with(
        &mut self,
        operator: SyntaxKind,
        parameter_count: usize,
        checked: bool,
    ) -> NodeIndex {
        let modifiers = self.modifiers(&[SyntaxKind::PublicKeyword, SyntaxKind::StaticKeyword]);
        let return_type = self.identifier_name("T");
        let checked_keyword = if checked {
            self.token(SyntaxKind::CheckedKeyword)
        } else {
            NodeIndex::NONE
        };
        let operator_token = self.token(operator);
        let parameters: NodeList = (0..parameter_count)
            .map(|i| self.parameter(&format!("p{i}")))
            .collect();
        self.method_with(
            SyntaxKind::OperatorDeclaration,
            MethodData {
                modifiers,
                return_type,
                operator_token,
                checked_keyword,
                parameters,
                ..MethodData::default()
            },
        )
    }

    /// `public static implicit|explicit operator T(S s)`; `keyword` is
    /// `ImplicitKeyword` or `ExplicitKeyword`.
    pub fn conversion_operator(&mut self, keyword: SyntaxKind, checked: bool) -> NodeIndex {
        let modifiers = self.modifiers(&[SyntaxKind::PublicKeyword, SyntaxKind::StaticKeyword]);
        let operator_token = self.token(keyword);
        let checked_keyword = if checked {
            self.token(SyntaxKind::CheckedKeyword)
        } else {
            NodeIndex::NONE
        };
        let return_type = self.identifier_name("T");
        let parameters: NodeList = std::iter::once(self.parameter("s")).collect();
        self.method_with(
            SyntaxKind::ConversionOperatorDeclaration,
            MethodData {
                modifiers,
                return_type,
                operator_token,
                checked_keyword,
                parameters,
                ..MethodData::default()
            },
        )
    }

    pub fn method_with(&mut self, kind: SyntaxKind, data: MethodData) -> NodeIndex {
        let empty = NodeList::new();
        let (pos, end) = self.cover_lists(
            &[
                data.return_type,
                data.explicit_interface,
                data.identifier,
                data.operator_token,
                data.checked_keyword,
                data.body,
            ],
            &[
                &data.attribute_lists,
                &data.modifiers,
                data.type_parameters.as_ref().unwrap_or(&empty),
                &data.parameters,
                &data.constraint_clauses,
            ],
        );
        self.arena.add_method(kind, pos, end, data)
    }

    /// `get;`, `set;`, `add { }`...
    pub fn accessor(&mut self, keyword: SyntaxKind, attribute_lists: NodeList) -> NodeIndex {
        let keyword = self.token(keyword);
        let (pos, end) = self.cover_lists(&[keyword], &[&attribute_lists]);
        self.arena.add_accessor(
            pos,
            end,
            AccessorData {
                attribute_lists,
                modifiers: NodeList::new(),
                keyword,
                body: NodeIndex::NONE,
            },
        )
    }

    /// `int Name { get; set; }`
    pub fn property(&mut self, name: &str) -> NodeIndex {
        let get = self.accessor(SyntaxKind::GetKeyword, NodeList::new());
        let set = self.accessor(SyntaxKind::SetKeyword, NodeList::new());
        let type_node = self.predefined_type("int");
        let identifier = self.identifier(name);
        self.property_with(
            SyntaxKind::PropertyDeclaration,
            PropertyData {
                type_node,
                identifier,
                accessors: Some(vec![get, set].into()),
                ..PropertyData::default()
            },
        )
    }

    /// `int this[int i] { get; }`
    pub fn indexer(&mut self) -> NodeIndex {
        let get = self.accessor(SyntaxKind::GetKeyword, NodeList::new());
        let type_node = self.predefined_type("int");
        let parameters: NodeList = std::iter::once(self.parameter("i")).collect();
        self.property_with(
            SyntaxKind::IndexerDeclaration,
            PropertyData {
                type_node,
                parameters,
                accessors: Some(vec![get].into()),
                ..PropertyData::default()
            },
        )
    }

    /// `event Action Name { add { } remove { } }`
    pub fn event(&mut self, name: &str) -> NodeIndex {
        let add = self.accessor(SyntaxKind::AddKeyword, NodeList::new());
        let remove = self.accessor(SyntaxKind::RemoveKeyword, NodeList::new());
        let type_node = self.identifier_name("Action");
        let identifier = self.identifier(name);
        self.property_with(
            SyntaxKind::EventDeclaration,
            PropertyData {
                type_node,
                identifier,
                accessors: Some(vec![add, remove].into()),
                ..PropertyData::default()
            },
        )
    }

    pub fn property_with(&mut self, kind: SyntaxKind, data: PropertyData) -> NodeIndex {
        let empty = NodeList::new();
        let (pos, end) = self.cover_lists(
            &[
                data.type_node,
                data.explicit_interface,
                data.identifier,
                data.initializer,
            ],
            &[
                &data.attribute_lists,
                &data.modifiers,
                &data.parameters,
                data.accessors.as_ref().unwrap_or(&empty),
            ],
        );
        self.arena.add_property(kind, pos, end, data)
    }

    /// Member the parser could not complete, e.g. a lone `public int`.
    pub fn incomplete_member(&mut self) -> NodeIndex {
        let type_node = self.predefined_type("int");
        let (pos, end) = self.cover([type_node]);
        self.arena.add_incomplete_member(
            pos,
            end,
            IncompleteMemberData {
                type_node,
                ..IncompleteMemberData::default()
            },
        )
    }

    // =========================================================================
    // Statements and expressions
    // =========================================================================

    pub fn global_statement(&mut self, statement: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover([statement]);
        self.arena.add_global_statement(
            pos,
            end,
            GlobalStatementData {
                statement,
                ..GlobalStatementData::default()
            },
        )
    }

    pub fn composite(&mut self, kind: SyntaxKind, children: Vec<NodeIndex>) -> NodeIndex {
        let (pos, end) = self.cover(children.iter().copied());
        self.arena.add_composite(
            kind,
            pos,
            end,
            CompositeData {
                children: children.into(),
            },
        )
    }

    pub fn block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.composite(SyntaxKind::Block, statements)
    }

    pub fn empty_statement(&mut self) -> NodeIndex {
        self.composite(SyntaxKind::EmptyStatement, Vec::new())
    }

    pub fn literal(&mut self) -> NodeIndex {
        self.composite(SyntaxKind::LiteralExpression, Vec::new())
    }

    /// `name();`
    pub fn call_statement(&mut self, name: &str) -> NodeIndex {
        let call = self.invocation(name);
        self.expression_statement(call)
    }

    pub fn invocation(&mut self, name: &str) -> NodeIndex {
        let callee = self.name(name);
        let arguments = self.composite(SyntaxKind::ArgumentList, Vec::new());
        self.composite(SyntaxKind::InvocationExpression, vec![callee, arguments])
    }

    pub fn expression_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        self.composite(SyntaxKind::ExpressionStatement, vec![expression])
    }

    pub fn await_expression(&mut self, operand: NodeIndex) -> NodeIndex {
        self.composite(SyntaxKind::AwaitExpression, vec![operand])
    }

    /// `return;` or `return expr;`
    pub fn return_statement(&mut self, expression: Option<NodeIndex>) -> NodeIndex {
        self.composite(SyntaxKind::ReturnStatement, expression.into_iter().collect())
    }

    pub fn yield_return(&mut self, expression: NodeIndex) -> NodeIndex {
        self.composite(SyntaxKind::YieldReturnStatement, vec![expression])
    }

    pub fn yield_break(&mut self) -> NodeIndex {
        self.composite(SyntaxKind::YieldBreakStatement, Vec::new())
    }

    /// `x => body`
    pub fn lambda(&mut self, body: NodeIndex) -> NodeIndex {
        self.composite(SyntaxKind::SimpleLambdaExpression, vec![body])
    }

    /// `void Local() { statements }`
    pub fn local_function(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        let body = self.block(statements);
        self.composite(SyntaxKind::LocalFunctionStatement, vec![body])
    }

    /// `await foreach (...) body`
    pub fn await_foreach(&mut self, body: NodeIndex) -> NodeIndex {
        let collection = self.identifier_name("items");
        let statement = self.composite(SyntaxKind::ForEachStatement, vec![collection, body]);
        self.arena.add_flags(statement, node_flags::AWAIT_KEYWORD);
        statement
    }

    /// `await using var x = ...;`
    pub fn await_using_declaration(&mut self) -> NodeIndex {
        let value = self.invocation("Open");
        let statement = self.composite(SyntaxKind::LocalDeclarationStatement, vec![value]);
        self.arena.add_flags(statement, node_flags::AWAIT_KEYWORD);
        statement
    }
}
