//! The root declaration of a file, for regular and script compilation units.

use crate::attribute_hints::alias_hints;
use crate::builder::{DeclarationTreeBuilder, MemberClass};
use crate::declaration::{
    Declaration, DeclarationDiagnostic, DeclarationKind, NamespaceDeclaration, ReferenceDirective,
    RootNamespaceDeclaration, TypeDeclaration,
};
use crate::error::Result;
use crate::flags::{AttributeHints, DeclarationModifiers};
use crate::member_names::collect_member_names;
use csz_common::diagnostics::diagnostic_codes;
use csz_syntax::node::{CompilationUnitData, node_flags};
use csz_syntax::{NodeIndex, NodeList, SyntaxKind};
use tracing::debug;

impl<'a> DeclarationTreeBuilder<'a> {
    pub(crate) fn build_regular_root(&self, root: NodeIndex) -> Result<RootNamespaceDeclaration> {
        let unit = self.compilation_unit(root)?;
        let scanned = self.scan_namespace_members(root, &unit.members, true)?;
        let mut children = self.build_declarations(&scanned.declarations)?;
        children.extend(scanned.wrappers.into_iter().map(Declaration::Type));
        Ok(self.finish_root(root, unit, children, false))
    }

    /// Script files put every top-level member into one script class.
    /// Namespaces are not legal there, but they are kept as root children so
    /// later phases can report them.
    pub(crate) fn build_script_root(&self, root: NodeIndex) -> Result<RootNamespaceDeclaration> {
        let unit = self.compilation_unit(root)?;

        let mut declarations = Vec::new();
        for member in unit.members.iter() {
            if self.classify_member(member, SyntaxKind::CompilationUnit)? == MemberClass::Declaration {
                declarations.push(member);
            }
        }

        let mut children = Vec::new();
        let mut script_children = Vec::new();
        for declaration in self.build_declarations(&declarations)? {
            match declaration {
                Declaration::Type(ty) => script_children.push(ty),
                other => {
                    debug!(name = other.name(), "hoisting namespace out of script class");
                    children.push(other);
                }
            }
        }

        children.push(self.script_class(root, &unit.members, script_children));
        Ok(self.finish_root(root, unit, children, true))
    }

    /// The script class, wrapped in one namespace per leading segment of the
    /// configured class name.
    fn script_class(
        &self,
        root: NodeIndex,
        members: &NodeList,
        children: Vec<TypeDeclaration>,
    ) -> Declaration {
        let kind = if self.options.is_submission {
            DeclarationKind::Submission
        } else {
            DeclarationKind::Script
        };
        let mut segments = self.options.script_class_name.rsplit('.');
        let name = segments.next().unwrap_or_default();
        let summary = collect_member_names(self.arena, members, false, false);
        debug!(
            ?kind,
            name,
            members = summary.names.len(),
            nested = children.len(),
            "synthesizing script class"
        );

        let syntax_reference = self.tree.reference(root);
        let name_location = self.tree.location(root);
        let mut declaration = Declaration::Type(TypeDeclaration {
            syntax_reference,
            name_location,
            diagnostics: Vec::new(),
            kind,
            name: name.to_string(),
            arity: 0,
            modifiers: DeclarationModifiers::INTERNAL
                | DeclarationModifiers::PARTIAL
                | DeclarationModifiers::SEALED,
            flags: summary.flags,
            member_names: summary.names,
            children,
            attribute_hints: AttributeHints::empty(),
        });
        for segment in segments {
            declaration = Declaration::Namespace(NamespaceDeclaration {
                syntax_reference,
                name_location,
                diagnostics: Vec::new(),
                name: segment.to_string(),
                has_usings: false,
                has_extern_aliases: false,
                children: vec![declaration],
            });
        }
        declaration
    }

    fn finish_root(
        &self,
        root: NodeIndex,
        unit: &CompilationUnitData,
        children: Vec<Declaration>,
        is_script: bool,
    ) -> RootNamespaceDeclaration {
        let mut diagnostics = Vec::new();
        let mut has_usings = false;
        let mut has_global_usings = false;
        let mut reported_out_of_order = false;
        for using in unit
            .usings
            .iter()
            .filter_map(|using| self.arena.get_using_directive_at(using))
        {
            if using.global_keyword.is_none() {
                has_usings = true;
                continue;
            }
            has_global_usings = true;
            if has_usings && !reported_out_of_order {
                reported_out_of_order = true;
                diagnostics.push(DeclarationDiagnostic::new(
                    diagnostic_codes::GLOBAL_USING_OUT_OF_ORDER,
                    self.tree.location(using.global_keyword),
                ));
            }
        }

        let reference_directives = if is_script {
            self.reference_directives(&unit.reference_directives)
        } else {
            Vec::new()
        };

        RootNamespaceDeclaration {
            syntax_reference: self.tree.reference(root),
            name_location: self.tree.location(root),
            diagnostics,
            has_global_usings,
            has_usings,
            has_extern_aliases: !unit.externs.is_empty(),
            children,
            reference_directives,
            has_assembly_attributes: !unit.attribute_lists.is_empty(),
            global_aliased_attribute_hints: alias_hints(self.arena, &unit.usings, true),
        }
    }

    /// `#r` directives with a usable file name.
    fn reference_directives(&self, directives: &NodeList) -> Vec<ReferenceDirective> {
        directives
            .iter()
            .filter(|&index| {
                self.arena
                    .get(index)
                    .is_some_and(|node| !node.has_flag(node_flags::CONTAINS_DIAGNOSTICS))
            })
            .filter_map(|index| {
                let directive = self.arena.get_reference_directive_at(index)?;
                if directive.file.is_empty() {
                    return None;
                }
                Some(ReferenceDirective {
                    file: directive.file.clone(),
                    location: self.tree.location(index),
                })
            })
            .collect()
    }

    fn compilation_unit(&self, root: NodeIndex) -> Result<&'a CompilationUnitData> {
        let node = self.node(root, SyntaxKind::CompilationUnit)?;
        self.arena
            .get_compilation_unit(node)
            .ok_or_else(|| self.missing_data(root, node.kind, "compilation unit"))
    }
}
