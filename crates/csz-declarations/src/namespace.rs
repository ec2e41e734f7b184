//! Namespace declarations and namespace-level member scanning.

use crate::builder::{DeclarationTreeBuilder, MemberClass, PendingNamespace};
use crate::declaration::{
    Declaration, DeclarationDiagnostic, DeclarationKind, NamespaceDeclaration, TypeDeclaration,
};
use crate::error::Result;
use crate::flags::{AttributeHints, DeclarationModifiers, TypeDeclarationFlags};
use crate::member_names::collect_member_names;
use csz_common::diagnostics::diagnostic_codes;
use csz_syntax::syntax_facts::{
    has_await_operations, has_return_with_expression, has_yield_operations, is_empty_statement,
};
use csz_syntax::{NodeIndex, NodeList, SyntaxKind};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, trace};

/// Name of the class that holds top-level statements.
pub const SIMPLE_PROGRAM_NAME: &str = "Program";
/// Name of the class that holds members written directly in a namespace or file.
pub const IMPLICIT_CLASS_NAME: &str = "<invalid-global-code>";

/// Result of scanning a namespace-level member list.
pub(crate) struct NamespaceMembers {
    /// Members that produce child declarations, in source order.
    pub declarations: Vec<NodeIndex>,
    /// Synthesized top-level program and implicit class, in that order.
    pub wrappers: Vec<TypeDeclaration>,
}

/// Facts gathered over the top-level statements of a file.
#[derive(Default)]
struct GlobalStatementFacts {
    first: Option<NodeIndex>,
    has_non_empty: bool,
    flags: TypeDeclarationFlags,
}

impl<'a> DeclarationTreeBuilder<'a> {
    /// Classify the members of a compilation unit or namespace and synthesize
    /// the wrapper types for top-level statements and misplaced members.
    ///
    /// Top-level statements are only accepted when `accept_simple_program`
    /// (a regular-mode compilation unit); elsewhere they count as misplaced
    /// members like any other non-type member.
    pub(crate) fn scan_namespace_members(
        &self,
        container: NodeIndex,
        members: &NodeList,
        accept_simple_program: bool,
    ) -> Result<NamespaceMembers> {
        let container_kind = self.arena.kind_of(container).unwrap_or(SyntaxKind::CompilationUnit);
        let mut declarations = Vec::new();
        let mut statements = GlobalStatementFacts::default();
        let mut has_global_members = false;

        for member in members.iter() {
            match self.classify_member(member, container_kind)? {
                MemberClass::Declaration => declarations.push(member),
                MemberClass::GlobalStatement if accept_simple_program => {
                    self.add_global_statement(member, &mut statements);
                }
                MemberClass::Incomplete => {
                    trace!(member = member.0, "skipping incomplete member");
                }
                MemberClass::GlobalStatement | MemberClass::NonType => has_global_members = true,
            }
        }

        let mut wrappers = Vec::new();
        if let Some(first) = statements.first {
            wrappers.push(self.simple_program(container, first, &statements));
        }
        if has_global_members {
            wrappers.push(self.implicit_class(container, members, accept_simple_program));
        }

        Ok(NamespaceMembers {
            declarations,
            wrappers,
        })
    }

    fn add_global_statement(&self, member: NodeIndex, facts: &mut GlobalStatementFacts) {
        if facts.first.is_none() {
            facts.first = Some(member);
        }
        let Some(global) = self.arena.get_global_statement_at(member) else {
            return;
        };
        let statement = global.statement;
        if !is_empty_statement(self.arena, statement) {
            facts.has_non_empty = true;
        }
        if !facts.flags.contains(TypeDeclarationFlags::HAS_AWAIT_EXPRESSIONS)
            && has_await_operations(self.arena, statement)
        {
            facts.flags |= TypeDeclarationFlags::HAS_AWAIT_EXPRESSIONS;
        }
        if !facts.flags.contains(TypeDeclarationFlags::IS_ITERATOR)
            && has_yield_operations(self.arena, statement)
        {
            facts.flags |= TypeDeclarationFlags::IS_ITERATOR;
        }
        if !facts.flags.contains(TypeDeclarationFlags::HAS_RETURN_WITH_EXPRESSION)
            && has_return_with_expression(self.arena, statement)
        {
            facts.flags |= TypeDeclarationFlags::HAS_RETURN_WITH_EXPRESSION;
        }
    }

    fn simple_program(
        &self,
        container: NodeIndex,
        first_statement: NodeIndex,
        facts: &GlobalStatementFacts,
    ) -> TypeDeclaration {
        let name_location = self.tree.location(first_statement);
        let mut diagnostics = Vec::new();
        if !facts.has_non_empty {
            diagnostics.push(DeclarationDiagnostic::new(
                diagnostic_codes::SIMPLE_PROGRAM_IS_EMPTY,
                name_location,
            ));
        }
        debug!(flags = ?facts.flags, empty = !facts.has_non_empty, "synthesizing top-level program");

        TypeDeclaration {
            syntax_reference: self.tree.reference(container),
            name_location,
            diagnostics,
            kind: DeclarationKind::SimpleProgram,
            name: SIMPLE_PROGRAM_NAME.to_string(),
            arity: 0,
            modifiers: DeclarationModifiers::PARTIAL,
            flags: TypeDeclarationFlags::IS_SIMPLE_PROGRAM | facts.flags,
            member_names: FxHashSet::default(),
            children: Vec::new(),
            attribute_hints: AttributeHints::empty(),
        }
    }

    fn implicit_class(
        &self,
        container: NodeIndex,
        members: &NodeList,
        skip_global_statements: bool,
    ) -> TypeDeclaration {
        let summary = collect_member_names(self.arena, members, skip_global_statements, false);
        debug!(
            container = container.0,
            members = summary.names.len(),
            "synthesizing implicit class for misplaced members"
        );

        TypeDeclaration {
            syntax_reference: self.tree.reference(container),
            name_location: self.tree.location(container),
            diagnostics: Vec::new(),
            kind: DeclarationKind::ImplicitClass,
            name: IMPLICIT_CLASS_NAME.to_string(),
            arity: 0,
            modifiers: DeclarationModifiers::INTERNAL
                | DeclarationModifiers::PARTIAL
                | DeclarationModifiers::SEALED,
            flags: summary.flags,
            member_names: summary.names,
            children: Vec::new(),
            attribute_hints: AttributeHints::empty(),
        }
    }

    // =========================================================================
    // Namespace declarations
    // =========================================================================

    /// Start a namespace by scanning its members.
    /// Returns the pending frame plus the members that produce children.
    pub(crate) fn enter_namespace(
        &self,
        index: NodeIndex,
    ) -> Result<(PendingNamespace, Vec<NodeIndex>)> {
        let node = self.node(index, SyntaxKind::CompilationUnit)?;
        let namespace = self
            .arena
            .get_namespace(node)
            .ok_or_else(|| self.missing_data(index, node.kind, "namespace"))?;

        let scanned = self.scan_namespace_members(index, &namespace.members, false)?;
        Ok((
            PendingNamespace {
                node: index,
                wrappers: scanned.wrappers,
            },
            scanned.declarations,
        ))
    }

    /// Finish a namespace once its children are built: decompose the dotted
    /// name into nested single-segment declarations.
    pub(crate) fn finish_namespace(
        &self,
        pending: PendingNamespace,
        mut children: Vec<Declaration>,
    ) -> Result<Declaration> {
        let index = pending.node;
        let node = self.node(index, SyntaxKind::CompilationUnit)?;
        let namespace = self
            .arena
            .get_namespace(node)
            .ok_or_else(|| self.missing_data(index, node.kind, "namespace"))?;

        children.extend(pending.wrappers.into_iter().map(Declaration::Type));

        let diagnostics = self.namespace_diagnostics(index, node.kind);
        let syntax_reference = self.tree.reference(index);
        let segments = self.name_segments(namespace.name);
        let prefixes = self.name_prefixes(namespace.name);

        // Innermost segment owns the real children and using/extern facts.
        let mut segment_iter = segments.iter().rev();
        let innermost = segment_iter.next().copied().unwrap_or(namespace.name);
        let mut declaration = NamespaceDeclaration {
            syntax_reference,
            name_location: self.tree.location(self.simple_name_of(innermost)),
            diagnostics: Vec::new(),
            name: self.segment_text(innermost),
            has_usings: !namespace.usings.is_empty(),
            has_extern_aliases: !namespace.externs.is_empty(),
            children,
        };
        // Outer segments point at the name prefix they close: `A.B` for `B`.
        for (&segment, &prefix) in segment_iter.zip(prefixes.iter().rev().skip(1)) {
            declaration = NamespaceDeclaration {
                syntax_reference: self.tree.reference(prefix),
                name_location: self.tree.location(self.simple_name_of(segment)),
                diagnostics: Vec::new(),
                name: self.segment_text(segment),
                has_usings: false,
                has_extern_aliases: false,
                children: vec![Declaration::Namespace(declaration)],
            };
        }
        declaration.diagnostics = diagnostics;
        Ok(Declaration::Namespace(declaration))
    }

    /// Legality diagnostics of one namespace declaration, in reporting order.
    fn namespace_diagnostics(&self, index: NodeIndex, kind: SyntaxKind) -> Vec<DeclarationDiagnostic> {
        let mut diagnostics = Vec::new();
        let Some(namespace) = self.arena.get_namespace_at(index) else {
            return diagnostics;
        };
        let name_location = self.tree.location(namespace.name);
        let parent = self.arena.parent_of(index);
        let parent_kind = self.arena.kind_of(parent);

        let placement = if kind == SyntaxKind::FileScopedNamespaceDeclaration {
            match parent_kind {
                Some(SyntaxKind::FileScopedNamespaceDeclaration) => {
                    Some(diagnostic_codes::MULTIPLE_FILE_SCOPED_NAMESPACE)
                }
                Some(SyntaxKind::NamespaceDeclaration) => {
                    Some(diagnostic_codes::FILE_SCOPED_AND_NORMAL_NAMESPACE)
                }
                Some(SyntaxKind::CompilationUnit) => self
                    .arena
                    .get_compilation_unit_at(parent)
                    .and_then(|unit| unit.members.first())
                    .filter(|&first| first != index)
                    .map(|_| diagnostic_codes::FILE_SCOPED_NAMESPACE_NOT_BEFORE_ALL_MEMBERS),
                _ => None,
            }
        } else if parent_kind == Some(SyntaxKind::FileScopedNamespaceDeclaration) {
            Some(diagnostic_codes::FILE_SCOPED_AND_NORMAL_NAMESPACE)
        } else {
            None
        };
        if let Some(code) = placement {
            diagnostics.push(DeclarationDiagnostic::new(code, name_location));
        }

        let segments = self.name_segments(namespace.name);
        if segments.iter().any(|&segment| self.is_generic_segment(segment)) {
            diagnostics.push(DeclarationDiagnostic::new(
                diagnostic_codes::UNEXPECTED_GENERIC_NAME,
                name_location,
            ));
        }
        if segments
            .iter()
            .any(|&segment| self.arena.kind_of(segment) == Some(SyntaxKind::AliasQualifiedName))
        {
            diagnostics.push(DeclarationDiagnostic::new(
                diagnostic_codes::UNEXPECTED_ALIASED_NAME,
                name_location,
            ));
        }

        if let Some(first) = namespace.attribute_lists.first() {
            diagnostics.push(DeclarationDiagnostic::new(
                diagnostic_codes::BAD_MODIFIERS_ON_NAMESPACE,
                self.tree.location(first),
            ));
        }
        if let Some(first) = namespace.modifiers.first() {
            diagnostics.push(DeclarationDiagnostic::new(
                diagnostic_codes::BAD_MODIFIERS_ON_NAMESPACE,
                self.tree.location(first),
            ));
        }

        if let Some(global_keyword) = namespace
            .usings
            .iter()
            .filter_map(|using| self.arena.get_using_directive_at(using))
            .map(|using| using.global_keyword)
            .find(|keyword| keyword.is_some())
        {
            diagnostics.push(DeclarationDiagnostic::new(
                diagnostic_codes::GLOBAL_USING_IN_NAMESPACE,
                self.tree.location(global_keyword),
            ));
        }

        diagnostics
    }

    /// Segments of a namespace name, outermost first. `A.B.C` yields the
    /// nodes for `A`, `B` and `C`; `global::A.B` yields `global::A` and `B`.
    fn name_segments(&self, name: NodeIndex) -> SmallVec<[NodeIndex; 4]> {
        let mut segments = SmallVec::new();
        let mut current = name;
        while self.arena.kind_of(current) == Some(SyntaxKind::QualifiedName) {
            let Some(qualified) = self.arena.get_qualified_name_at(current) else {
                break;
            };
            segments.push(qualified.right);
            current = qualified.left;
        }
        segments.push(current);
        segments.reverse();
        segments
    }

    /// Name nodes ending at each segment, outermost first: `A`, `A.B`, `A.B.C`.
    fn name_prefixes(&self, name: NodeIndex) -> SmallVec<[NodeIndex; 4]> {
        let mut prefixes = SmallVec::new();
        let mut current = name;
        prefixes.push(current);
        while self.arena.kind_of(current) == Some(SyntaxKind::QualifiedName) {
            let Some(qualified) = self.arena.get_qualified_name_at(current) else {
                break;
            };
            current = qualified.left;
            prefixes.push(current);
        }
        prefixes.reverse();
        prefixes
    }

    /// The simple name node of a segment: the right side of `alias::Name`.
    fn simple_name_of(&self, segment: NodeIndex) -> NodeIndex {
        if self.arena.kind_of(segment) == Some(SyntaxKind::AliasQualifiedName)
            && let Some(qualified) = self.arena.get_qualified_name_at(segment)
        {
            return qualified.right;
        }
        segment
    }

    fn is_generic_segment(&self, segment: NodeIndex) -> bool {
        self.arena.kind_of(self.simple_name_of(segment)) == Some(SyntaxKind::GenericName)
    }

    /// Identifier text of a segment; empty for a missing name.
    fn segment_text(&self, segment: NodeIndex) -> String {
        self.arena
            .unqualified_name_text(segment)
            .unwrap_or_default()
            .to_string()
    }
}
