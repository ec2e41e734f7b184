//! Type, delegate and enum declarations.

use crate::attribute_hints::attribute_list_hints;
use crate::builder::{DeclarationTreeBuilder, MemberClass, PendingType};
use crate::declaration::{DeclarationDiagnostic, DeclarationKind, TypeDeclaration};
use crate::error::Result;
use crate::flags::TypeDeclarationFlags;
use crate::member_names::{collect_enum_member_names, collect_member_names};
use crate::modifiers::convert_type_modifiers;
use csz_common::diagnostics::diagnostic_codes;
use csz_syntax::{Node, NodeIndex, NodeList, SyntaxKind};
use rustc_hash::FxHashSet;

/// Declaration kind of a class-like syntax kind.
#[must_use]
pub fn declaration_kind(kind: SyntaxKind) -> Option<DeclarationKind> {
    let declaration_kind = match kind {
        SyntaxKind::ClassDeclaration => DeclarationKind::Class,
        SyntaxKind::StructDeclaration => DeclarationKind::Struct,
        SyntaxKind::InterfaceDeclaration => DeclarationKind::Interface,
        SyntaxKind::RecordDeclaration => DeclarationKind::Record,
        SyntaxKind::RecordStructDeclaration => DeclarationKind::RecordStruct,
        SyntaxKind::DelegateDeclaration => DeclarationKind::Delegate,
        SyntaxKind::EnumDeclaration => DeclarationKind::Enum,
        _ => return None,
    };
    Some(declaration_kind)
}

impl<'a> DeclarationTreeBuilder<'a> {
    /// Start a class, struct, interface, record or record struct. Returns the
    /// pending frame plus the nested type declarations still to build.
    pub(crate) fn enter_type(
        &self,
        index: NodeIndex,
        node: &Node,
    ) -> Result<(PendingType, Vec<NodeIndex>)> {
        let data = self
            .arena
            .get_type_declaration(node)
            .ok_or_else(|| self.missing_data(index, node.kind, "type declaration"))?;
        let kind = declaration_kind(node.kind)
            .ok_or_else(|| self.missing_data(index, node.kind, "type declaration"))?;

        let mut diagnostics = Vec::new();
        let arity = data.arity();
        if arity == 0 {
            self.report_constraints_on_non_generic(&data.constraint_clauses, &mut diagnostics);
        }

        let summary = collect_member_names(
            self.arena,
            &data.members,
            false,
            data.parameter_list.is_some(),
        );
        let mut flags = summary.flags;
        if !data.attribute_lists.is_empty() {
            flags |= TypeDeclarationFlags::HAS_ANY_ATTRIBUTES;
        }
        if data.base_list.is_some() {
            flags |= TypeDeclarationFlags::HAS_BASE_DECLARATIONS;
        }

        let modifiers = convert_type_modifiers(self.tree, &data.modifiers, kind, &mut diagnostics);

        // Namespaces written inside a type are dropped; other nested
        // declarations become children.
        let mut nested = Vec::new();
        for member in data.members.iter() {
            if self.classify_member(member, node.kind)? == MemberClass::Declaration
                && !matches!(
                    self.arena.kind_of(member),
                    Some(SyntaxKind::NamespaceDeclaration | SyntaxKind::FileScopedNamespaceDeclaration)
                )
            {
                nested.push(member);
            }
        }

        let declaration = TypeDeclaration {
            syntax_reference: self.tree.reference(index),
            name_location: self.tree.location(data.identifier),
            diagnostics,
            kind,
            name: self.identifier_or_empty(data.identifier),
            arity,
            modifiers,
            flags,
            member_names: summary.names,
            children: Vec::new(),
            attribute_hints: attribute_list_hints(self.arena, &data.attribute_lists)
                | self.non_global_alias_hints,
        };
        Ok((PendingType { declaration }, nested))
    }

    /// Delegates have no members or nested types; they always report
    /// `HAS_ANY_NONTYPE_MEMBERS` for their implicit `Invoke` members.
    pub(crate) fn build_delegate(&self, index: NodeIndex) -> Result<TypeDeclaration> {
        let node = self.node(index, SyntaxKind::CompilationUnit)?;
        let data = self
            .arena
            .get_delegate(node)
            .ok_or_else(|| self.missing_data(index, node.kind, "delegate"))?;

        let mut diagnostics = Vec::new();
        let arity = data.arity();
        if arity == 0 {
            self.report_constraints_on_non_generic(&data.constraint_clauses, &mut diagnostics);
        }

        let mut flags = TypeDeclarationFlags::HAS_ANY_NONTYPE_MEMBERS;
        if !data.attribute_lists.is_empty() {
            flags |= TypeDeclarationFlags::HAS_ANY_ATTRIBUTES;
        }
        let modifiers = convert_type_modifiers(
            self.tree,
            &data.modifiers,
            DeclarationKind::Delegate,
            &mut diagnostics,
        );

        Ok(TypeDeclaration {
            syntax_reference: self.tree.reference(index),
            name_location: self.tree.location(data.identifier),
            diagnostics,
            kind: DeclarationKind::Delegate,
            name: self.identifier_or_empty(data.identifier),
            arity,
            modifiers,
            flags,
            member_names: FxHashSet::default(),
            children: Vec::new(),
            attribute_hints: attribute_list_hints(self.arena, &data.attribute_lists)
                | self.non_global_alias_hints,
        })
    }

    pub(crate) fn build_enum(&self, index: NodeIndex) -> Result<TypeDeclaration> {
        let node = self.node(index, SyntaxKind::CompilationUnit)?;
        let data = self
            .arena
            .get_enum(node)
            .ok_or_else(|| self.missing_data(index, node.kind, "enum"))?;

        let summary = collect_enum_member_names(self.arena, &data.members);
        let mut flags = summary.flags;
        if !data.attribute_lists.is_empty() {
            flags |= TypeDeclarationFlags::HAS_ANY_ATTRIBUTES;
        }
        if data.base_list.is_some() {
            flags |= TypeDeclarationFlags::HAS_BASE_DECLARATIONS;
        }

        let mut diagnostics = Vec::new();
        let modifiers = convert_type_modifiers(
            self.tree,
            &data.modifiers,
            DeclarationKind::Enum,
            &mut diagnostics,
        );

        Ok(TypeDeclaration {
            syntax_reference: self.tree.reference(index),
            name_location: self.tree.location(data.identifier),
            diagnostics,
            kind: DeclarationKind::Enum,
            name: self.identifier_or_empty(data.identifier),
            arity: 0,
            modifiers,
            flags,
            member_names: summary.names,
            children: Vec::new(),
            attribute_hints: attribute_list_hints(self.arena, &data.attribute_lists)
                | self.non_global_alias_hints,
        })
    }

    /// `where` clauses on a declaration without type parameters.
    fn report_constraints_on_non_generic(
        &self,
        constraint_clauses: &NodeList,
        diagnostics: &mut Vec<DeclarationDiagnostic>,
    ) {
        if let Some(first) = constraint_clauses.first() {
            diagnostics.push(DeclarationDiagnostic::new(
                diagnostic_codes::CONSTRAINT_ONLY_ALLOWED_ON_GENERIC_DECL,
                self.tree.location(first),
            ));
        }
    }

    fn identifier_or_empty(&self, identifier: NodeIndex) -> String {
        self.arena
            .identifier_text(identifier)
            .unwrap_or_default()
            .to_string()
    }
}
