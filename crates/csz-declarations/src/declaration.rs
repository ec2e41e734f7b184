//! Declaration tree data model.
//!
//! A declaration tree is built once per syntax tree and never changes
//! afterwards. Every node keeps a `SyntaxReference` back into the tree it was
//! built from so later phases can re-fetch the syntax without holding a
//! pointer into it.

use crate::flags::{AttributeHints, DeclarationModifiers, TypeDeclarationFlags};
use csz_common::Location;
use csz_common::diagnostics::{
    DiagnosticCategory, display_code, format_message, get_diagnostic_category,
    get_message_template,
};
use csz_syntax::SyntaxReference;
use rustc_hash::FxHashSet;
use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;

/// Kind of a namespace or type declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DeclarationKind {
    Namespace,
    Class,
    Struct,
    Interface,
    Record,
    RecordStruct,
    Delegate,
    Enum,
    /// Synthetic class holding the top-level members of a script file.
    Script,
    /// Like `Script`, for one interactive submission.
    Submission,
    /// Synthetic class holding members illegally written at namespace or file scope.
    ImplicitClass,
    /// Synthetic `Program` class holding top-level statements.
    SimpleProgram,
}

impl DeclarationKind {
    /// Source keyword, or a descriptive name for synthetic kinds.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DeclarationKind::Namespace => "namespace",
            DeclarationKind::Class => "class",
            DeclarationKind::Struct => "struct",
            DeclarationKind::Interface => "interface",
            DeclarationKind::Record => "record",
            DeclarationKind::RecordStruct => "record struct",
            DeclarationKind::Delegate => "delegate",
            DeclarationKind::Enum => "enum",
            DeclarationKind::Script => "script",
            DeclarationKind::Submission => "submission",
            DeclarationKind::ImplicitClass => "implicit class",
            DeclarationKind::SimpleProgram => "top-level program",
        }
    }

    /// Kinds the builder synthesizes rather than reading from source.
    #[must_use]
    pub const fn is_synthetic(self) -> bool {
        matches!(
            self,
            DeclarationKind::Script
                | DeclarationKind::Submission
                | DeclarationKind::ImplicitClass
                | DeclarationKind::SimpleProgram
        )
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declaration-legality diagnostic.
///
/// `args` only fills the placeholders of the message template; two
/// diagnostics with the same code and location describe the same problem.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DeclarationDiagnostic {
    pub code: u32,
    pub location: Location,
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub args: SmallVec<[String; 3]>,
}

impl DeclarationDiagnostic {
    #[must_use]
    pub fn new(code: u32, location: Location) -> Self {
        DeclarationDiagnostic {
            code,
            location,
            args: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_args(code: u32, location: Location, args: &[&str]) -> Self {
        DeclarationDiagnostic {
            code,
            location,
            args: args.iter().map(|arg| (*arg).to_string()).collect(),
        }
    }

    /// Severity implied by the code. Unknown codes are errors.
    #[must_use]
    pub fn category(&self) -> DiagnosticCategory {
        get_diagnostic_category(self.code).unwrap_or(DiagnosticCategory::Error)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.category() == DiagnosticCategory::Error
    }

    /// Rendered message text.
    #[must_use]
    pub fn message(&self) -> String {
        let Some(template) = get_message_template(self.code) else {
            return format!("unknown diagnostic {}", display_code(self.code));
        };
        let args: SmallVec<[&str; 3]> = self.args.iter().map(String::as_str).collect();
        format_message(template, &args)
    }
}

impl fmt::Display for DeclarationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.location,
            display_code(self.code),
            self.message()
        )
    }
}

/// `#r "file"` directive of a script file.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ReferenceDirective {
    pub file: String,
    pub location: Location,
}

/// Root of one file's declaration tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RootNamespaceDeclaration {
    pub syntax_reference: SyntaxReference,
    pub name_location: Location,
    pub diagnostics: Vec<DeclarationDiagnostic>,
    pub has_global_usings: bool,
    pub has_usings: bool,
    pub has_extern_aliases: bool,
    pub children: Vec<Declaration>,
    /// Only populated for script files.
    pub reference_directives: Vec<ReferenceDirective>,
    pub has_assembly_attributes: bool,
    pub global_aliased_attribute_hints: AttributeHints,
}

/// One segment of a namespace declaration. `namespace A.B { }` produces
/// `A` containing `B`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NamespaceDeclaration {
    pub syntax_reference: SyntaxReference,
    pub name_location: Location,
    pub diagnostics: Vec<DeclarationDiagnostic>,
    pub name: String,
    pub has_usings: bool,
    pub has_extern_aliases: bool,
    pub children: Vec<Declaration>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeDeclaration {
    pub syntax_reference: SyntaxReference,
    pub name_location: Location,
    pub diagnostics: Vec<DeclarationDiagnostic>,
    pub kind: DeclarationKind,
    pub name: String,
    pub arity: u32,
    pub modifiers: DeclarationModifiers,
    pub flags: TypeDeclarationFlags,
    #[serde(serialize_with = "serialize_sorted")]
    pub member_names: FxHashSet<String>,
    pub children: Vec<TypeDeclaration>,
    pub attribute_hints: AttributeHints,
}

impl TypeDeclaration {
    #[must_use]
    pub fn has_member_named(&self, name: &str) -> bool {
        self.member_names.contains(name)
    }

    #[must_use]
    pub fn has_flag(&self, flag: TypeDeclarationFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Member names in sorted order, for stable display.
    #[must_use]
    pub fn sorted_member_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.member_names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn serialize_sorted<S: Serializer>(
    names: &FxHashSet<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut sorted: Vec<&String> = names.iter().collect();
    sorted.sort_unstable();
    serializer.collect_seq(sorted)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "declaration")]
pub enum Declaration {
    RootNamespace(RootNamespaceDeclaration),
    Namespace(NamespaceDeclaration),
    Type(TypeDeclaration),
}

// Nesting depth is bounded only by the input, so dropping must not recurse
// once per level. Each `Drop` moves its children onto a heap stack and
// empties them there before they are released.
impl Drop for RootNamespaceDeclaration {
    fn drop(&mut self) {
        release_iteratively(std::mem::take(&mut self.children));
    }
}

impl Drop for NamespaceDeclaration {
    fn drop(&mut self) {
        release_iteratively(std::mem::take(&mut self.children));
    }
}

impl Drop for TypeDeclaration {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        release_iteratively(self.children.drain(..).map(Declaration::Type).collect());
    }
}

fn release_iteratively(mut stack: Vec<Declaration>) {
    while let Some(declaration) = stack.pop() {
        match declaration {
            Declaration::RootNamespace(mut root) => stack.append(&mut root.children),
            Declaration::Namespace(mut ns) => stack.append(&mut ns.children),
            Declaration::Type(mut ty) => {
                stack.extend(ty.children.drain(..).map(Declaration::Type));
            }
        }
    }
}

/// Borrowed view of a namespace or type declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclarationRef<'a> {
    Namespace(&'a NamespaceDeclaration),
    Type(&'a TypeDeclaration),
}

impl<'a> DeclarationRef<'a> {
    #[must_use]
    pub fn name(self) -> &'a str {
        match self {
            DeclarationRef::Namespace(ns) => &ns.name,
            DeclarationRef::Type(ty) => &ty.name,
        }
    }

    #[must_use]
    pub fn kind(self) -> DeclarationKind {
        match self {
            DeclarationRef::Namespace(_) => DeclarationKind::Namespace,
            DeclarationRef::Type(ty) => ty.kind,
        }
    }

    #[must_use]
    pub fn diagnostics(self) -> &'a [DeclarationDiagnostic] {
        match self {
            DeclarationRef::Namespace(ns) => &ns.diagnostics,
            DeclarationRef::Type(ty) => &ty.diagnostics,
        }
    }

    #[must_use]
    pub fn children(self) -> Vec<DeclarationRef<'a>> {
        match self {
            DeclarationRef::Namespace(ns) => ns.children.iter().filter_map(Declaration::as_ref).collect(),
            DeclarationRef::Type(ty) => ty.children.iter().map(DeclarationRef::Type).collect(),
        }
    }

    #[must_use]
    pub fn as_type(self) -> Option<&'a TypeDeclaration> {
        match self {
            DeclarationRef::Type(ty) => Some(ty),
            DeclarationRef::Namespace(_) => None,
        }
    }
}

impl Declaration {
    /// Declared name; empty for the root.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Declaration::RootNamespace(_) => "",
            Declaration::Namespace(ns) => &ns.name,
            Declaration::Type(ty) => &ty.name,
        }
    }

    #[must_use]
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::RootNamespace(_) | Declaration::Namespace(_) => DeclarationKind::Namespace,
            Declaration::Type(ty) => ty.kind,
        }
    }

    #[must_use]
    pub fn syntax_reference(&self) -> SyntaxReference {
        match self {
            Declaration::RootNamespace(root) => root.syntax_reference,
            Declaration::Namespace(ns) => ns.syntax_reference,
            Declaration::Type(ty) => ty.syntax_reference,
        }
    }

    #[must_use]
    pub fn name_location(&self) -> Location {
        match self {
            Declaration::RootNamespace(root) => root.name_location,
            Declaration::Namespace(ns) => ns.name_location,
            Declaration::Type(ty) => ty.name_location,
        }
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[DeclarationDiagnostic] {
        match self {
            Declaration::RootNamespace(root) => &root.diagnostics,
            Declaration::Namespace(ns) => &ns.diagnostics,
            Declaration::Type(ty) => &ty.diagnostics,
        }
    }

    /// Direct children. A type's children are always types.
    #[must_use]
    pub fn children(&self) -> Vec<DeclarationRef<'_>> {
        match self {
            Declaration::RootNamespace(root) => {
                root.children.iter().filter_map(Declaration::as_ref).collect()
            }
            Declaration::Namespace(ns) => DeclarationRef::Namespace(ns).children(),
            Declaration::Type(ty) => DeclarationRef::Type(ty).children(),
        }
    }

    /// Borrowed view of a namespace or type; `None` for the root.
    #[must_use]
    pub fn as_ref(&self) -> Option<DeclarationRef<'_>> {
        match self {
            Declaration::RootNamespace(_) => None,
            Declaration::Namespace(ns) => Some(DeclarationRef::Namespace(ns)),
            Declaration::Type(ty) => Some(DeclarationRef::Type(ty)),
        }
    }

    #[must_use]
    pub fn as_type(&self) -> Option<&TypeDeclaration> {
        match self {
            Declaration::Type(ty) => Some(ty),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_namespace(&self) -> Option<&NamespaceDeclaration> {
        match self {
            Declaration::Namespace(ns) => Some(ns),
            _ => None,
        }
    }
}

impl RootNamespaceDeclaration {
    /// First type declaration reachable by the dotted `path` (`"N.Outer.Inner"`),
    /// searching children in source order. Intermediate segments may name
    /// namespaces or enclosing types.
    #[must_use]
    pub fn find_type(&self, path: &str) -> Option<&TypeDeclaration> {
        let segments: Vec<&str> = path.split('.').collect();
        let (last, prefix) = segments.split_last()?;

        let mut frontier: Vec<DeclarationRef<'_>> =
            self.children.iter().filter_map(Declaration::as_ref).collect();
        for segment in prefix {
            frontier = frontier
                .into_iter()
                .filter(|decl| decl.name() == *segment)
                .flat_map(DeclarationRef::children)
                .collect();
        }
        frontier
            .into_iter()
            .filter(|decl| decl.name() == *last)
            .find_map(DeclarationRef::as_type)
    }

    /// Every diagnostic in the tree: the root's own, then each declaration's
    /// in pre-order.
    #[must_use]
    pub fn all_diagnostics(&self) -> Vec<&DeclarationDiagnostic> {
        let mut result: Vec<&DeclarationDiagnostic> = self.diagnostics.iter().collect();
        let mut stack: Vec<DeclarationRef<'_>> = self
            .children
            .iter()
            .rev()
            .filter_map(Declaration::as_ref)
            .collect();
        while let Some(decl) = stack.pop() {
            result.extend(decl.diagnostics());
            stack.extend(decl.children().into_iter().rev());
        }
        result
    }

    /// Number of namespace and type declarations in the tree.
    #[must_use]
    pub fn declaration_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<DeclarationRef<'_>> =
            self.children.iter().filter_map(Declaration::as_ref).collect();
        while let Some(decl) = stack.pop() {
            count += 1;
            stack.extend(decl.children());
        }
        count
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.all_diagnostics().iter().any(|diag| diag.is_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csz_common::diagnostics::diagnostic_codes;
    use csz_common::{Span, TreeId};

    #[test]
    fn test_declarations_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Declaration>();
        assert_send_sync::<RootNamespaceDeclaration>();
    }

    #[test]
    fn test_diagnostic_message_fills_arguments() {
        let location = Location::new(TreeId(0), Span::new(4, 10));
        let diag = DeclarationDiagnostic::with_args(
            diagnostic_codes::FEATURE_NOT_AVAILABLE_IN_VERSION,
            location,
            &["static classes", "1", "2"],
        );
        assert_eq!(
            diag.message(),
            "Feature 'static classes' is not available in C# 1. Please use language version 2 or greater."
        );
        assert!(diag.is_error());
        assert!(diag.to_string().starts_with("#0@4..10 CS8107: "));
    }

    #[test]
    fn test_unknown_code_renders_placeholder() {
        let diag = DeclarationDiagnostic::new(1, Location::default());
        assert_eq!(diag.message(), "unknown diagnostic CS0001");
        assert_eq!(diag.category(), DiagnosticCategory::Error);
    }
}
