//! Syntactic pre-filter for well-known attributes.
//!
//! Names are matched by text only. An attribute, or a `using` alias whose
//! target or own name matches a catalog entry, sets that entry's bit whether
//! or not it would bind to the well-known attribute.

use crate::flags::AttributeHints;
use csz_syntax::{NodeArena, NodeIndex, NodeList, SyntaxKind};

const ATTRIBUTE_SUFFIX: &str = "Attribute";

const CATALOG: &[(&str, AttributeHints)] = &[
    ("TypeIdentifier", AttributeHints::TYPE_IDENTIFIER),
    ("TypeForwardedTo", AttributeHints::TYPE_FORWARDED_TO),
    ("AssemblyKeyName", AttributeHints::ASSEMBLY_KEY_NAME),
    ("AssemblyKeyFile", AttributeHints::ASSEMBLY_KEY_FILE),
    ("AssemblySignatureKey", AttributeHints::ASSEMBLY_SIGNATURE_KEY),
];

/// Hint bit for a simple name, ignoring one trailing `Attribute` suffix.
#[must_use]
pub fn hint_for_name(name: &str) -> AttributeHints {
    let short = name.strip_suffix(ATTRIBUTE_SUFFIX).unwrap_or(name);
    CATALOG
        .iter()
        .find(|(catalog_name, _)| *catalog_name == short)
        .map_or(AttributeHints::empty(), |(_, hint)| *hint)
}

/// Hints from the attributes written in `attribute_lists`.
#[must_use]
pub fn attribute_list_hints(arena: &NodeArena, attribute_lists: &NodeList) -> AttributeHints {
    let mut hints = AttributeHints::empty();
    for list_idx in attribute_lists.iter() {
        let Some(list) = arena.get_attribute_list_at(list_idx) else {
            continue;
        };
        for attribute_idx in list.attributes.iter() {
            if let Some(attribute) = arena.get_attribute_at(attribute_idx)
                && let Some(name) = arena.unqualified_name_text(attribute.name)
            {
                hints |= hint_for_name(name);
            }
        }
    }
    hints
}

/// Hints from `using X = A.B;` directives whose `global` keyword presence
/// equals `global`. Both the target's simple name (`B`) and the alias (`X`)
/// are matched, so `[X]` is covered when `B` is a catalog attribute.
#[must_use]
pub fn alias_hints(arena: &NodeArena, usings: &NodeList, global: bool) -> AttributeHints {
    let mut hints = AttributeHints::empty();
    for using_idx in usings.iter() {
        let Some(using) = arena.get_using_directive_at(using_idx) else {
            continue;
        };
        if using.global_keyword.is_some() != global {
            continue;
        }
        let Some(alias) = arena.identifier_text(using.alias) else {
            continue;
        };
        hints |= hint_for_name(alias);
        if let Some(target) = arena.unqualified_name_text(using.name) {
            hints |= hint_for_name(target);
        }
    }
    hints
}

/// Non-global alias hints of a whole file: the compilation unit's usings plus
/// the usings of every namespace at any depth.
#[must_use]
pub fn file_non_global_alias_hints(arena: &NodeArena, compilation_unit: NodeIndex) -> AttributeHints {
    let Some(unit) = arena.get_compilation_unit_at(compilation_unit) else {
        return AttributeHints::empty();
    };
    let mut hints = alias_hints(arena, &unit.usings, false);

    let mut stack: Vec<NodeIndex> = unit.members.iter().collect();
    while let Some(member) = stack.pop() {
        let Some(node) = arena.get(member) else {
            continue;
        };
        if !matches!(
            node.kind,
            SyntaxKind::NamespaceDeclaration | SyntaxKind::FileScopedNamespaceDeclaration
        ) {
            continue;
        }
        if let Some(namespace) = arena.get_namespace(node) {
            hints |= alias_hints(arena, &namespace.usings, false);
            stack.extend(namespace.members.iter());
        }
    }
    hints
}
