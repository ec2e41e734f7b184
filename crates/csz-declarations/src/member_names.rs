//! Member-name and structural-flag collection.
//!
//! One pass over a container's direct members yields the set of names later
//! lookups will ask about plus the flags that let the binder skip work
//! (no attributes anywhere, no extension methods, no required members).
//! Nested type declarations are not members here; they become child
//! declarations instead.

use crate::flags::TypeDeclarationFlags;
use csz_syntax::node::{MethodData, PropertyData};
use csz_syntax::{NodeArena, NodeIndex, NodeList, SyntaxKind};
use rustc_hash::FxHashSet;

/// Instance constructor member name.
pub const CONSTRUCTOR_NAME: &str = ".ctor";
/// Static constructor member name.
pub const STATIC_CONSTRUCTOR_NAME: &str = ".cctor";
pub const DESTRUCTOR_NAME: &str = "Finalize";
pub const INDEXER_NAME: &str = "this[]";

/// Names and flags collected from one member list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberSummary {
    pub names: FxHashSet<String>,
    pub flags: TypeDeclarationFlags,
}

impl MemberSummary {
    fn add_name(&mut self, name: Option<&str>) {
        if let Some(name) = name
            && !self.names.contains(name)
        {
            self.names.insert(name.to_string());
        }
    }
}

/// Collect member names and flags of a class, struct, interface, record,
/// script class or implicit class.
///
/// `skip_global_statements` stops top-level statements from counting as
/// non-type members; they belong to the top-level program instead.
/// `has_primary_constructor` forces `HAS_ANY_NONTYPE_MEMBERS`, since the
/// primary constructor is an implicit member.
#[must_use]
pub fn collect_member_names(
    arena: &NodeArena,
    members: &NodeList,
    skip_global_statements: bool,
    has_primary_constructor: bool,
) -> MemberSummary {
    let mut summary = MemberSummary::default();
    if has_primary_constructor {
        summary.flags |= TypeDeclarationFlags::HAS_ANY_NONTYPE_MEMBERS;
    }

    for member in members.iter() {
        add_non_type_member_names(arena, member, &mut summary, skip_global_statements);

        if !summary.flags.contains(TypeDeclarationFlags::HAS_EXTENSION_METHOD_SYNTAX)
            && has_extension_method_syntax(arena, member)
        {
            summary.flags |= TypeDeclarationFlags::HAS_EXTENSION_METHOD_SYNTAX;
        }
        if !summary.flags.contains(TypeDeclarationFlags::ANY_MEMBER_HAS_ATTRIBUTES)
            && member_has_attributes(arena, member)
        {
            summary.flags |= TypeDeclarationFlags::ANY_MEMBER_HAS_ATTRIBUTES;
        }
        if !summary.flags.contains(TypeDeclarationFlags::HAS_REQUIRED_MEMBERS)
            && has_required_modifier(arena, member)
        {
            summary.flags |= TypeDeclarationFlags::HAS_REQUIRED_MEMBERS;
        }
    }

    summary
}

/// Enum variant: every member adds its simple name.
#[must_use]
pub fn collect_enum_member_names(arena: &NodeArena, members: &NodeList) -> MemberSummary {
    let mut summary = MemberSummary::default();
    if !members.is_empty() {
        summary.flags |= TypeDeclarationFlags::HAS_ANY_NONTYPE_MEMBERS;
    }
    for member in members.iter() {
        let Some(data) = arena.get_enum_member_at(member) else {
            continue;
        };
        summary.add_name(arena.identifier_text(data.identifier));
        if !data.attribute_lists.is_empty() {
            summary.flags |= TypeDeclarationFlags::ANY_MEMBER_HAS_ATTRIBUTES;
        }
    }
    summary
}

fn add_non_type_member_names(
    arena: &NodeArena,
    member: NodeIndex,
    summary: &mut MemberSummary,
    skip_global_statements: bool,
) {
    let Some(node) = arena.get(member) else {
        return;
    };
    match node.kind {
        SyntaxKind::FieldDeclaration | SyntaxKind::EventFieldDeclaration => {
            summary.flags |= TypeDeclarationFlags::HAS_ANY_NONTYPE_MEMBERS;
            let Some(field) = arena.get_field(node) else {
                return;
            };
            for declarator in field.declarators.iter() {
                if let Some(declarator) = arena.get_variable_declarator_at(declarator) {
                    summary.add_name(arena.identifier_text(declarator.identifier));
                }
            }
        }
        SyntaxKind::MethodDeclaration => {
            summary.flags |= TypeDeclarationFlags::HAS_ANY_NONTYPE_MEMBERS;
            if let Some(method) = arena.get_method(node)
                && method.explicit_interface.is_none()
            {
                summary.add_name(arena.identifier_text(method.identifier));
            }
        }
        SyntaxKind::PropertyDeclaration | SyntaxKind::EventDeclaration => {
            summary.flags |= TypeDeclarationFlags::HAS_ANY_NONTYPE_MEMBERS;
            if let Some(property) = arena.get_property(node)
                && property.explicit_interface.is_none()
            {
                summary.add_name(arena.identifier_text(property.identifier));
            }
        }
        SyntaxKind::ConstructorDeclaration => {
            summary.flags |= TypeDeclarationFlags::HAS_ANY_NONTYPE_MEMBERS;
            let is_static = arena
                .get_method(node)
                .is_some_and(|ctor| arena.has_modifier(&ctor.modifiers, SyntaxKind::StaticKeyword));
            summary.add_name(Some(if is_static {
                STATIC_CONSTRUCTOR_NAME
            } else {
                CONSTRUCTOR_NAME
            }));
        }
        SyntaxKind::DestructorDeclaration => {
            summary.flags |= TypeDeclarationFlags::HAS_ANY_NONTYPE_MEMBERS;
            summary.add_name(Some(DESTRUCTOR_NAME));
        }
        SyntaxKind::IndexerDeclaration => {
            summary.flags |= TypeDeclarationFlags::HAS_ANY_NONTYPE_MEMBERS;
            summary.add_name(Some(INDEXER_NAME));
        }
        SyntaxKind::OperatorDeclaration | SyntaxKind::ConversionOperatorDeclaration => {
            summary.flags |= TypeDeclarationFlags::HAS_ANY_NONTYPE_MEMBERS;
            if let Some(operator) = arena.get_method(node)
                && operator.explicit_interface.is_none()
            {
                summary.add_name(operator_member_name(arena, node.kind, operator));
            }
        }
        SyntaxKind::GlobalStatement => {
            if !skip_global_statements {
                summary.flags |= TypeDeclarationFlags::HAS_ANY_NONTYPE_MEMBERS;
            }
        }
        _ => {}
    }
}

/// A method whose first parameter carries `this`.
fn has_extension_method_syntax(arena: &NodeArena, member: NodeIndex) -> bool {
    if arena.kind_of(member) != Some(SyntaxKind::MethodDeclaration) {
        return false;
    }
    arena
        .get_method_at(member)
        .and_then(|method| method.parameters.first())
        .and_then(|first| arena.get_parameter_at(first))
        .is_some_and(|parameter| arena.has_modifier(&parameter.modifiers, SyntaxKind::ThisKeyword))
}

fn member_has_attributes(arena: &NodeArena, member: NodeIndex) -> bool {
    let Some(node) = arena.get(member) else {
        return false;
    };
    match node.kind {
        SyntaxKind::FieldDeclaration | SyntaxKind::EventFieldDeclaration => arena
            .get_field(node)
            .is_some_and(|field| !field.attribute_lists.is_empty()),
        SyntaxKind::MethodDeclaration
        | SyntaxKind::OperatorDeclaration
        | SyntaxKind::ConversionOperatorDeclaration
        | SyntaxKind::ConstructorDeclaration
        | SyntaxKind::DestructorDeclaration => arena
            .get_method(node)
            .is_some_and(|method| !method.attribute_lists.is_empty()),
        SyntaxKind::PropertyDeclaration
        | SyntaxKind::EventDeclaration
        | SyntaxKind::IndexerDeclaration => arena
            .get_property(node)
            .is_some_and(|property| property_has_attributes(arena, property)),
        _ => false,
    }
}

/// Attributes on the property itself or on any of its accessors.
fn property_has_attributes(arena: &NodeArena, property: &PropertyData) -> bool {
    if !property.attribute_lists.is_empty() {
        return true;
    }
    property.accessors.as_ref().is_some_and(|accessors| {
        accessors.iter().any(|accessor| {
            arena
                .get_accessor_at(accessor)
                .is_some_and(|accessor| !accessor.attribute_lists.is_empty())
        })
    })
}

fn has_required_modifier(arena: &NodeArena, member: NodeIndex) -> bool {
    let Some(node) = arena.get(member) else {
        return false;
    };
    let modifiers = match node.kind {
        SyntaxKind::FieldDeclaration => arena.get_field(node).map(|field| &field.modifiers),
        SyntaxKind::PropertyDeclaration => {
            arena.get_property(node).map(|property| &property.modifiers)
        }
        _ => None,
    };
    modifiers.is_some_and(|modifiers| arena.has_modifier(modifiers, SyntaxKind::RequiredKeyword))
}

// =============================================================================
// Operator names
// =============================================================================

fn operator_member_name(
    arena: &NodeArena,
    kind: SyntaxKind,
    operator: &MethodData,
) -> Option<&'static str> {
    let token = arena.kind_of(operator.operator_token)?;
    let checked = operator.checked_keyword.is_some();
    if kind == SyntaxKind::ConversionOperatorDeclaration {
        return Some(conversion_operator_name(token, checked));
    }
    Some(operator_name(token, operator.parameters.len(), checked))
}

/// Metadata name of a user-defined conversion.
#[must_use]
pub fn conversion_operator_name(keyword: SyntaxKind, checked: bool) -> &'static str {
    match (keyword, checked) {
        (SyntaxKind::ImplicitKeyword, _) => "op_Implicit",
        (_, true) => "op_CheckedExplicit",
        (_, false) => "op_Explicit",
    }
}

/// Metadata name of a user-defined operator.
///
/// `+` and `-` are binary with two parameters and unary otherwise. Tokens
/// that are not overloadable operators fall back to `op_UnaryPlus`.
#[must_use]
pub fn operator_name(token: SyntaxKind, parameter_count: usize, checked: bool) -> &'static str {
    let is_binary = parameter_count == 2;
    if checked && let Some(name) = checked_operator_name(token, is_binary) {
        return name;
    }
    match token {
        SyntaxKind::PlusToken if is_binary => "op_Addition",
        SyntaxKind::MinusToken if is_binary => "op_Subtraction",
        SyntaxKind::PlusToken => "op_UnaryPlus",
        SyntaxKind::MinusToken => "op_UnaryNegation",
        SyntaxKind::ExclamationToken => "op_LogicalNot",
        SyntaxKind::TildeToken => "op_OnesComplement",
        SyntaxKind::PlusPlusToken => "op_Increment",
        SyntaxKind::MinusMinusToken => "op_Decrement",
        SyntaxKind::TrueKeyword => "op_True",
        SyntaxKind::FalseKeyword => "op_False",
        SyntaxKind::AsteriskToken => "op_Multiply",
        SyntaxKind::SlashToken => "op_Division",
        SyntaxKind::PercentToken => "op_Modulus",
        SyntaxKind::AmpersandToken => "op_BitwiseAnd",
        SyntaxKind::BarToken => "op_BitwiseOr",
        SyntaxKind::CaretToken => "op_ExclusiveOr",
        SyntaxKind::LessThanLessThanToken => "op_LeftShift",
        SyntaxKind::GreaterThanGreaterThanToken => "op_RightShift",
        SyntaxKind::GreaterThanGreaterThanGreaterThanToken => "op_UnsignedRightShift",
        SyntaxKind::EqualsEqualsToken => "op_Equality",
        SyntaxKind::ExclamationEqualsToken => "op_Inequality",
        SyntaxKind::LessThanToken => "op_LessThan",
        SyntaxKind::GreaterThanToken => "op_GreaterThan",
        SyntaxKind::LessThanEqualsToken => "op_LessThanOrEqual",
        SyntaxKind::GreaterThanEqualsToken => "op_GreaterThanOrEqual",
        _ => "op_UnaryPlus",
    }
}

fn checked_operator_name(token: SyntaxKind, is_binary: bool) -> Option<&'static str> {
    let name = match token {
        SyntaxKind::PlusToken if is_binary => "op_CheckedAddition",
        SyntaxKind::MinusToken if is_binary => "op_CheckedSubtraction",
        SyntaxKind::MinusToken => "op_CheckedUnaryNegation",
        SyntaxKind::AsteriskToken => "op_CheckedMultiply",
        SyntaxKind::SlashToken => "op_CheckedDivision",
        SyntaxKind::PlusPlusToken => "op_CheckedIncrement",
        SyntaxKind::MinusMinusToken => "op_CheckedDecrement",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_minus_arity() {
        assert_eq!(operator_name(SyntaxKind::PlusToken, 2, false), "op_Addition");
        assert_eq!(operator_name(SyntaxKind::PlusToken, 1, false), "op_UnaryPlus");
        assert_eq!(operator_name(SyntaxKind::MinusToken, 1, false), "op_UnaryNegation");
        assert_eq!(operator_name(SyntaxKind::MinusToken, 2, false), "op_Subtraction");
    }

    #[test]
    fn test_checked_operators() {
        assert_eq!(operator_name(SyntaxKind::PlusToken, 2, true), "op_CheckedAddition");
        assert_eq!(
            operator_name(SyntaxKind::MinusToken, 1, true),
            "op_CheckedUnaryNegation"
        );
        // `checked` has no variant for equality; the plain name is used.
        assert_eq!(operator_name(SyntaxKind::EqualsEqualsToken, 2, true), "op_Equality");
        assert_eq!(
            conversion_operator_name(SyntaxKind::ExplicitKeyword, true),
            "op_CheckedExplicit"
        );
        assert_eq!(
            conversion_operator_name(SyntaxKind::ImplicitKeyword, false),
            "op_Implicit"
        );
    }

    #[test]
    fn test_non_operator_token_falls_back() {
        assert_eq!(operator_name(SyntaxKind::IdentifierToken, 1, false), "op_UnaryPlus");
    }
}
