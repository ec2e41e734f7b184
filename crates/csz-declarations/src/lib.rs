//! Declaration discovery for the csz compiler front end.
//!
//! Turns one syntax tree into an immutable tree of namespace and type
//! declarations, annotated with the facts later phases query without
//! rebinding:
//! - member names and structural flags per type (`member_names`)
//! - converted modifiers with version-gate diagnostics (`modifiers`)
//! - well-known attribute hints (`attribute_hints`)
//! - declaration-legality diagnostics on the node they concern
//!
//! Entry point: [`DeclarationTreeBuilder::for_tree`]. Many files at once:
//! [`parallel::build_trees_parallel`].

// Flag catalogs: type flags, modifiers, attribute hints
pub mod flags;
pub use flags::{AttributeHints, DeclarationModifiers, TypeDeclarationFlags};

// Output tree
pub mod declaration;
pub use declaration::{
    Declaration, DeclarationDiagnostic, DeclarationKind, DeclarationRef, NamespaceDeclaration,
    ReferenceDirective, RootNamespaceDeclaration, TypeDeclaration,
};

pub mod error;
pub use error::{DeclarationError, Result};

// Syntactic pre-filter for well-known attributes
pub mod attribute_hints;

// Member names and structural flags
pub mod member_names;

// Modifier conversion and checks
pub mod modifiers;

// Builder entry point and traversal driver; namespace/types/root extend it
pub mod builder;
pub use builder::{DEFAULT_SCRIPT_CLASS_NAME, DeclarationOptions, DeclarationTreeBuilder};
mod namespace;
pub use namespace::{IMPLICIT_CLASS_NAME, SIMPLE_PROGRAM_NAME};
mod root;
mod types;
pub use types::declaration_kind;

// Batch building on the rayon pool
pub mod parallel;
