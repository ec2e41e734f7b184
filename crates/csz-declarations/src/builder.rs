//! Declaration tree builder entry point and the traversal driver.
//!
//! The builder is split across several files:
//! - `builder.rs`: options, entry point, work-stack driver, member classification
//! - `namespace.rs`: namespace declarations and namespace-level member scanning
//! - `types.rs`: class/struct/interface/record, delegate and enum declarations
//! - `root.rs`: the root declaration for regular and script files
//!
//! Namespaces and types nest arbitrarily deep in source, so the traversal
//! keeps its own stack of frames instead of recursing. Each container pushes a
//! `Finish*` frame plus one `Visit` frame per child declaration; finished
//! declarations are appended to the bucket of the container being built.

use crate::attribute_hints::file_non_global_alias_hints;
use crate::declaration::{Declaration, RootNamespaceDeclaration, TypeDeclaration};
use crate::error::{DeclarationError, Result};
use crate::flags::AttributeHints;
use csz_syntax::{Node, NodeArena, NodeIndex, SyntaxKind, SyntaxTree};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default name of the class that holds a script's top-level members.
pub const DEFAULT_SCRIPT_CLASS_NAME: &str = "Script";

/// Settings that are not part of the syntax tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeclarationOptions {
    /// Possibly dotted name of the script class (`"Script"`, `"Host.Submission#0"`).
    pub script_class_name: String,
    /// Script files are interactive submissions rather than standalone scripts.
    pub is_submission: bool,
}

impl Default for DeclarationOptions {
    fn default() -> Self {
        DeclarationOptions {
            script_class_name: DEFAULT_SCRIPT_CLASS_NAME.to_string(),
            is_submission: false,
        }
    }
}

/// How a container treats one of its members.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MemberClass {
    /// Namespace, type, delegate or enum: produces a child declaration.
    Declaration,
    GlobalStatement,
    /// Parser placeholder for a member that could not be completed.
    Incomplete,
    /// Field, method, property or another non-type member.
    NonType,
}

/// Unit of work on the traversal stack.
pub(crate) enum Frame {
    Visit(NodeIndex),
    FinishNamespace(PendingNamespace),
    FinishType(PendingType),
}

/// A namespace whose children are still being built.
pub(crate) struct PendingNamespace {
    pub node: NodeIndex,
    /// Top-level program / implicit class wrappers, appended after the children.
    pub wrappers: Vec<TypeDeclaration>,
}

/// A type whose nested types are still being built. `declaration.children`
/// is filled in when the frame finishes.
pub(crate) struct PendingType {
    pub declaration: TypeDeclaration,
}

/// Builds the declaration tree of one syntax tree.
pub struct DeclarationTreeBuilder<'a> {
    pub(crate) tree: &'a SyntaxTree,
    pub(crate) arena: &'a NodeArena,
    pub(crate) options: &'a DeclarationOptions,
    /// Non-global alias hints of the whole file, OR'd into every type.
    pub(crate) non_global_alias_hints: AttributeHints,
}

impl<'a> DeclarationTreeBuilder<'a> {
    /// Build the declaration tree of `tree`.
    ///
    /// Legality problems become diagnostics on the returned tree. An `Err`
    /// means the syntax tree is malformed (for example a statement node in a
    /// member list) and no tree could be built.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(tree = %tree.id, file = %tree.file_name, script = tree.is_script())
    )]
    pub fn for_tree(
        tree: &'a SyntaxTree,
        options: &'a DeclarationOptions,
    ) -> Result<RootNamespaceDeclaration> {
        let arena = tree.arena();
        let root = tree.root;
        let Some(root_node) = arena.get(root) else {
            return Err(DeclarationError::RootNotCompilationUnit {
                tree: tree.id,
                node: root.0,
                found: None,
            });
        };
        if root_node.kind != SyntaxKind::CompilationUnit {
            return Err(DeclarationError::RootNotCompilationUnit {
                tree: tree.id,
                node: root.0,
                found: Some(root_node.kind),
            });
        }

        let builder = DeclarationTreeBuilder {
            tree,
            arena,
            options,
            non_global_alias_hints: file_non_global_alias_hints(arena, root),
        };

        let result = if tree.is_script() {
            builder.build_script_root(root)
        } else {
            builder.build_regular_root(root)
        }?;
        debug!(
            declarations = result.declaration_count(),
            diagnostics = result.all_diagnostics().len(),
            "declaration tree built"
        );
        Ok(result)
    }

    /// Build the declarations for `members` (in order), draining the work stack.
    pub(crate) fn build_declarations(&self, members: &[NodeIndex]) -> Result<Vec<Declaration>> {
        let mut buckets: Vec<Vec<Declaration>> = vec![Vec::with_capacity(members.len())];
        let mut stack: Vec<Frame> = members.iter().rev().copied().map(Frame::Visit).collect();

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Visit(member) => self.visit(member, &mut stack, &mut buckets)?,
                Frame::FinishNamespace(pending) => {
                    let children = buckets.pop().unwrap_or_default();
                    let declaration = self.finish_namespace(pending, children)?;
                    push_declaration(&mut buckets, declaration);
                }
                Frame::FinishType(pending) => {
                    let children = buckets.pop().unwrap_or_default();
                    let declaration = finish_type(pending, children);
                    push_declaration(&mut buckets, declaration);
                }
            }
        }

        Ok(buckets.pop().unwrap_or_default())
    }

    fn visit(
        &self,
        member: NodeIndex,
        stack: &mut Vec<Frame>,
        buckets: &mut Vec<Vec<Declaration>>,
    ) -> Result<()> {
        let node = self.node(member, self.container_kind(member))?;
        match node.kind {
            SyntaxKind::NamespaceDeclaration | SyntaxKind::FileScopedNamespaceDeclaration => {
                let (pending, children) = self.enter_namespace(member)?;
                stack.push(Frame::FinishNamespace(pending));
                stack.extend(children.into_iter().rev().map(Frame::Visit));
                buckets.push(Vec::new());
            }
            SyntaxKind::ClassDeclaration
            | SyntaxKind::StructDeclaration
            | SyntaxKind::InterfaceDeclaration
            | SyntaxKind::RecordDeclaration
            | SyntaxKind::RecordStructDeclaration => {
                let (pending, children) = self.enter_type(member, node)?;
                stack.push(Frame::FinishType(pending));
                stack.extend(children.into_iter().rev().map(Frame::Visit));
                buckets.push(Vec::new());
            }
            SyntaxKind::DelegateDeclaration => {
                let declaration = self.build_delegate(member)?;
                push_declaration(buckets, Declaration::Type(declaration));
            }
            SyntaxKind::EnumDeclaration => {
                let declaration = self.build_enum(member)?;
                push_declaration(buckets, Declaration::Type(declaration));
            }
            kind => {
                return Err(DeclarationError::UnexpectedMemberKind {
                    tree: self.tree.id,
                    kind,
                    span: node.span(),
                    container: self.container_kind(member),
                });
            }
        }
        Ok(())
    }

    /// Classify a member of a compilation unit, namespace or type.
    pub(crate) fn classify_member(&self, member: NodeIndex, container: SyntaxKind) -> Result<MemberClass> {
        let node = self.node(member, container)?;
        let class = match node.kind {
            SyntaxKind::NamespaceDeclaration
            | SyntaxKind::FileScopedNamespaceDeclaration
            | SyntaxKind::ClassDeclaration
            | SyntaxKind::StructDeclaration
            | SyntaxKind::InterfaceDeclaration
            | SyntaxKind::RecordDeclaration
            | SyntaxKind::RecordStructDeclaration
            | SyntaxKind::DelegateDeclaration
            | SyntaxKind::EnumDeclaration => MemberClass::Declaration,
            SyntaxKind::GlobalStatement => MemberClass::GlobalStatement,
            SyntaxKind::IncompleteMember => MemberClass::Incomplete,
            SyntaxKind::FieldDeclaration
            | SyntaxKind::EventFieldDeclaration
            | SyntaxKind::MethodDeclaration
            | SyntaxKind::OperatorDeclaration
            | SyntaxKind::ConversionOperatorDeclaration
            | SyntaxKind::ConstructorDeclaration
            | SyntaxKind::DestructorDeclaration
            | SyntaxKind::PropertyDeclaration
            | SyntaxKind::EventDeclaration
            | SyntaxKind::IndexerDeclaration => MemberClass::NonType,
            kind => {
                return Err(DeclarationError::UnexpectedMemberKind {
                    tree: self.tree.id,
                    kind,
                    span: node.span(),
                    container,
                });
            }
        };
        Ok(class)
    }

    /// Resolve a member index, failing when it dangles.
    pub(crate) fn node(&self, index: NodeIndex, container: SyntaxKind) -> Result<&'a Node> {
        self.arena
            .get(index)
            .ok_or(DeclarationError::DanglingMember {
                tree: self.tree.id,
                node: index.0,
                container,
            })
    }

    pub(crate) fn missing_data(&self, index: NodeIndex, kind: SyntaxKind, expected: &'static str) -> DeclarationError {
        DeclarationError::MissingNodeData {
            tree: self.tree.id,
            node: index.0,
            kind,
            expected,
        }
    }

    fn container_kind(&self, member: NodeIndex) -> SyntaxKind {
        self.arena
            .kind_of(self.arena.parent_of(member))
            .unwrap_or(SyntaxKind::CompilationUnit)
    }
}

fn push_declaration(buckets: &mut Vec<Vec<Declaration>>, declaration: Declaration) {
    if let Some(bucket) = buckets.last_mut() {
        bucket.push(declaration);
    }
}

/// A type's children are its nested types; namespaces written inside a type
/// are not part of the declaration tree.
fn finish_type(pending: PendingType, children: Vec<Declaration>) -> Declaration {
    let mut declaration = pending.declaration;
    declaration.children = children
        .into_iter()
        .filter_map(|child| match child {
            Declaration::Type(ty) => Some(ty),
            _ => None,
        })
        .collect();
    Declaration::Type(declaration)
}
