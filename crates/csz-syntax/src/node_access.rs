//! NodeArena access methods.
//!
//! Typed getters return `None` when the node's kind does not own the
//! requested payload, so callers can chain them with `let ... else`.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;

macro_rules! pool_getters {
    ($(#[$doc:meta])* $get:ident, $get_at:ident, $pool:ident, $ty:ty, |$k:ident| $accept:expr) => {
        $(#[$doc])*
        #[inline]
        pub fn $get(&self, node: &Node) -> Option<&$ty> {
            let $k = node.kind;
            if node.has_data() && $accept {
                self.$pool.get(node.data_index as usize)
            } else {
                None
            }
        }

        #[inline]
        pub fn $get_at(&self, index: NodeIndex) -> Option<&$ty> {
            self.get(index).and_then(|node| self.$get(node))
        }
    };
}

impl NodeArena {
    /// Get a thin node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get a mutable thin node by index
    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    /// Get extended info for a node
    #[inline]
    pub fn get_extended(&self, index: NodeIndex) -> Option<&ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get(index.0 as usize)
        }
    }

    /// Parent of a node, or NONE for the root and for unknown indices.
    #[inline]
    pub fn parent_of(&self, index: NodeIndex) -> NodeIndex {
        self.get_extended(index)
            .map_or(NodeIndex::NONE, |info| info.parent)
    }

    /// Kind of a node, if the index resolves.
    #[inline]
    pub fn kind_of(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|node| node.kind)
    }

    pool_getters!(
        /// Identifier data for identifier tokens, identifier names and predefined types.
        get_identifier, get_identifier_at, identifiers, IdentifierData,
        |k| matches!(k, SyntaxKind::IdentifierToken | SyntaxKind::IdentifierName | SyntaxKind::PredefinedType)
    );
    pool_getters!(
        get_generic_name, get_generic_name_at, generic_names, GenericNameData,
        |k| k == SyntaxKind::GenericName
    );
    pool_getters!(
        /// Qualified name data (`A.B`) or alias-qualified name data (`global::B`).
        get_qualified_name, get_qualified_name_at, qualified_names, QualifiedNameData,
        |k| matches!(k, SyntaxKind::QualifiedName | SyntaxKind::AliasQualifiedName)
    );
    pool_getters!(
        get_compilation_unit, get_compilation_unit_at, compilation_units, CompilationUnitData,
        |k| k == SyntaxKind::CompilationUnit
    );
    pool_getters!(
        get_extern_alias, get_extern_alias_at, extern_aliases, ExternAliasData,
        |k| k == SyntaxKind::ExternAliasDirective
    );
    pool_getters!(
        get_using_directive, get_using_directive_at, using_directives, UsingDirectiveData,
        |k| k == SyntaxKind::UsingDirective
    );
    pool_getters!(
        get_reference_directive, get_reference_directive_at, reference_directives, ReferenceDirectiveData,
        |k| k == SyntaxKind::ReferenceDirectiveTrivia
    );
    pool_getters!(
        get_attribute_list, get_attribute_list_at, attribute_lists, AttributeListData,
        |k| k == SyntaxKind::AttributeList
    );
    pool_getters!(
        get_attribute, get_attribute_at, attributes, AttributeData,
        |k| k == SyntaxKind::Attribute
    );
    pool_getters!(
        /// Namespace data for braced and file-scoped namespaces.
        get_namespace, get_namespace_at, namespaces, NamespaceData,
        |k| k.is_namespace_declaration()
    );
    pool_getters!(
        /// Type declaration data for class, struct, interface and record kinds.
        get_type_declaration, get_type_declaration_at, type_declarations, TypeDeclarationData,
        |k| k.is_type_declaration()
    );
    pool_getters!(
        get_delegate, get_delegate_at, delegates, DelegateData,
        |k| k == SyntaxKind::DelegateDeclaration
    );
    pool_getters!(
        get_enum, get_enum_at, enums, EnumData,
        |k| k == SyntaxKind::EnumDeclaration
    );
    pool_getters!(
        get_enum_member, get_enum_member_at, enum_members, EnumMemberData,
        |k| k == SyntaxKind::EnumMemberDeclaration
    );
    pool_getters!(
        /// Field data for field and event-field declarations.
        get_field, get_field_at, fields, FieldData,
        |k| matches!(k, SyntaxKind::FieldDeclaration | SyntaxKind::EventFieldDeclaration)
    );
    pool_getters!(
        get_variable_declarator, get_variable_declarator_at, variable_declarators, VariableDeclaratorData,
        |k| k == SyntaxKind::VariableDeclarator
    );
    pool_getters!(
        /// Method data for methods, operators, conversion operators, constructors and destructors.
        get_method, get_method_at, methods, MethodData,
        |k| matches!(
            k,
            SyntaxKind::MethodDeclaration
                | SyntaxKind::OperatorDeclaration
                | SyntaxKind::ConversionOperatorDeclaration
                | SyntaxKind::ConstructorDeclaration
                | SyntaxKind::DestructorDeclaration
        )
    );
    pool_getters!(
        /// Property data for properties, events and indexers.
        get_property, get_property_at, properties, PropertyData,
        |k| matches!(
            k,
            SyntaxKind::PropertyDeclaration | SyntaxKind::EventDeclaration | SyntaxKind::IndexerDeclaration
        )
    );
    pool_getters!(
        get_accessor, get_accessor_at, accessors, AccessorData,
        |k| k == SyntaxKind::AccessorDeclaration
    );
    pool_getters!(
        get_parameter, get_parameter_at, parameters, ParameterData,
        |k| k == SyntaxKind::Parameter
    );
    pool_getters!(
        get_type_parameter, get_type_parameter_at, type_parameters, TypeParameterData,
        |k| k == SyntaxKind::TypeParameter
    );
    pool_getters!(
        get_constraint_clause, get_constraint_clause_at, constraint_clauses, ConstraintClauseData,
        |k| k == SyntaxKind::TypeParameterConstraintClause
    );
    pool_getters!(
        get_global_statement, get_global_statement_at, global_statements, GlobalStatementData,
        |k| k == SyntaxKind::GlobalStatement
    );
    pool_getters!(
        get_incomplete_member, get_incomplete_member_at, incomplete_members, IncompleteMemberData,
        |k| k == SyntaxKind::IncompleteMember
    );
    pool_getters!(
        /// Child list of a statement or expression node.
        get_composite, get_composite_at, composites, CompositeData,
        |k| k.is_composite()
    );

    // =========================================================================
    // Convenience queries
    // =========================================================================

    /// Text of an identifier token or identifier name.
    #[inline]
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        self.get_identifier_at(index).map(|data| data.text.as_str())
    }

    /// Kinds of the modifier tokens in a modifier list, in source order.
    pub fn modifier_kinds<'a>(&'a self, modifiers: &'a NodeList) -> impl Iterator<Item = SyntaxKind> + 'a {
        modifiers.iter().filter_map(|idx| self.kind_of(idx))
    }

    /// Whether a modifier list contains a token of `kind`.
    pub fn has_modifier(&self, modifiers: &NodeList, kind: SyntaxKind) -> bool {
        self.modifier_kinds(modifiers).any(|k| k == kind)
    }

    /// The member list owned by a compilation unit, namespace or type declaration.
    pub fn member_list(&self, index: NodeIndex) -> Option<&NodeList> {
        let node = self.get(index)?;
        match node.kind {
            SyntaxKind::CompilationUnit => self.get_compilation_unit(node).map(|cu| &cu.members),
            SyntaxKind::NamespaceDeclaration | SyntaxKind::FileScopedNamespaceDeclaration => {
                self.get_namespace(node).map(|ns| &ns.members)
            }
            SyntaxKind::ClassDeclaration
            | SyntaxKind::StructDeclaration
            | SyntaxKind::InterfaceDeclaration
            | SyntaxKind::RecordDeclaration
            | SyntaxKind::RecordStructDeclaration => {
                self.get_type_declaration(node).map(|ty| &ty.members)
            }
            SyntaxKind::EnumDeclaration => self.get_enum(node).map(|en| &en.members),
            _ => None,
        }
    }

    /// Rightmost simple identifier of a name (`C` for `A.B.C`, `B` for `global::B`,
    /// `List` for `List<T>`).
    pub fn unqualified_name_text(&self, name: NodeIndex) -> Option<&str> {
        let node = self.get(name)?;
        match node.kind {
            SyntaxKind::IdentifierName | SyntaxKind::IdentifierToken => {
                self.get_identifier(node).map(|id| id.text.as_str())
            }
            SyntaxKind::GenericName => {
                let generic = self.get_generic_name(node)?;
                self.identifier_text(generic.identifier)
            }
            SyntaxKind::QualifiedName | SyntaxKind::AliasQualifiedName => {
                let qualified = self.get_qualified_name(node)?;
                self.unqualified_name_text(qualified.right)
            }
            _ => None,
        }
    }

    /// Dotted display text of a name (`A.B<T>.C`, `global::System`).
    pub fn name_text(&self, name: NodeIndex) -> Option<String> {
        let node = self.get(name)?;
        match node.kind {
            SyntaxKind::IdentifierName | SyntaxKind::IdentifierToken | SyntaxKind::PredefinedType => {
                self.get_identifier(node).map(|id| id.text.clone())
            }
            SyntaxKind::GenericName => {
                let generic = self.get_generic_name(node)?;
                let args: Vec<String> = generic
                    .type_arguments
                    .iter()
                    .filter_map(|arg| self.name_text(arg))
                    .collect();
                Some(format!(
                    "{}<{}>",
                    self.identifier_text(generic.identifier)?,
                    args.join(", ")
                ))
            }
            SyntaxKind::QualifiedName => {
                let qualified = self.get_qualified_name(node)?;
                Some(format!(
                    "{}.{}",
                    self.name_text(qualified.left)?,
                    self.name_text(qualified.right)?
                ))
            }
            SyntaxKind::AliasQualifiedName => {
                let qualified = self.get_qualified_name(node)?;
                Some(format!(
                    "{}::{}",
                    self.name_text(qualified.left)?,
                    self.name_text(qualified.right)?
                ))
            }
            _ => None,
        }
    }
}
