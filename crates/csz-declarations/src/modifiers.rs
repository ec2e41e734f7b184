//! Modifier tokens to `DeclarationModifiers`, with the checks that only need
//! the modifier list: duplicates, `partial` placement and language-version
//! gates.

use crate::declaration::{DeclarationDiagnostic, DeclarationKind};
use crate::flags::DeclarationModifiers;
use csz_common::LanguageFeature;
use csz_common::diagnostics::diagnostic_codes;
use csz_syntax::{NodeIndex, NodeList, SyntaxKind, SyntaxTree};

/// Flag for a modifier keyword; `None` for tokens that are not modifiers.
#[must_use]
pub const fn modifier_flag(kind: SyntaxKind) -> Option<DeclarationModifiers> {
    let flag = match kind {
        SyntaxKind::AbstractKeyword => DeclarationModifiers::ABSTRACT,
        SyntaxKind::AsyncKeyword => DeclarationModifiers::ASYNC,
        SyntaxKind::ConstKeyword => DeclarationModifiers::CONST,
        SyntaxKind::ExternKeyword => DeclarationModifiers::EXTERN,
        SyntaxKind::FileKeyword => DeclarationModifiers::FILE,
        SyntaxKind::FixedKeyword => DeclarationModifiers::FIXED,
        SyntaxKind::InternalKeyword => DeclarationModifiers::INTERNAL,
        SyntaxKind::NewKeyword => DeclarationModifiers::NEW,
        SyntaxKind::OverrideKeyword => DeclarationModifiers::OVERRIDE,
        SyntaxKind::PartialKeyword => DeclarationModifiers::PARTIAL,
        SyntaxKind::PrivateKeyword => DeclarationModifiers::PRIVATE,
        SyntaxKind::ProtectedKeyword => DeclarationModifiers::PROTECTED,
        SyntaxKind::PublicKeyword => DeclarationModifiers::PUBLIC,
        SyntaxKind::ReadOnlyKeyword => DeclarationModifiers::READONLY,
        SyntaxKind::RefKeyword => DeclarationModifiers::REF,
        SyntaxKind::RequiredKeyword => DeclarationModifiers::REQUIRED,
        SyntaxKind::ScopedKeyword => DeclarationModifiers::SCOPED,
        SyntaxKind::SealedKeyword => DeclarationModifiers::SEALED,
        SyntaxKind::StaticKeyword => DeclarationModifiers::STATIC,
        SyntaxKind::UnsafeKeyword => DeclarationModifiers::UNSAFE,
        SyntaxKind::VirtualKeyword => DeclarationModifiers::VIRTUAL,
        SyntaxKind::VolatileKeyword => DeclarationModifiers::VOLATILE,
        _ => return None,
    };
    Some(flag)
}

/// Convert the modifier list of a type, delegate or enum declaration of
/// `declaration_kind`, appending any diagnostics.
pub fn convert_type_modifiers(
    tree: &SyntaxTree,
    modifiers: &NodeList,
    declaration_kind: DeclarationKind,
    diagnostics: &mut Vec<DeclarationDiagnostic>,
) -> DeclarationModifiers {
    let arena = tree.arena();
    let last = modifiers.len().saturating_sub(1);
    let mut result = DeclarationModifiers::empty();
    let mut reported_duplicate = false;

    for (position, token) in modifiers.iter().enumerate() {
        let Some(kind) = arena.kind_of(token) else {
            continue;
        };
        let Some(flag) = modifier_flag(kind) else {
            continue;
        };

        let first_occurrence = !result.contains(flag);
        if flag == DeclarationModifiers::PARTIAL {
            if first_occurrence {
                check_feature(tree, LanguageFeature::PartialTypes, token, diagnostics);
            }
            if position != last {
                diagnostics.push(DeclarationDiagnostic::new(
                    diagnostic_codes::PARTIAL_MISPLACED,
                    tree.location(token),
                ));
            }
        } else if flag == DeclarationModifiers::FILE && first_occurrence {
            check_feature(tree, LanguageFeature::FileTypes, token, diagnostics);
        }

        if !first_occurrence {
            if !reported_duplicate {
                reported_duplicate = true;
                diagnostics.push(DeclarationDiagnostic::with_args(
                    diagnostic_codes::DUPLICATE_MODIFIER,
                    tree.location(token),
                    &[kind.keyword_text().unwrap_or_default()],
                ));
            }
            continue;
        }
        result |= flag;
    }

    match declaration_kind {
        DeclarationKind::Class if result.contains(DeclarationModifiers::STATIC) => {
            gate_modifier(
                tree,
                modifiers,
                SyntaxKind::StaticKeyword,
                LanguageFeature::StaticClasses,
                diagnostics,
            );
        }
        DeclarationKind::Struct | DeclarationKind::RecordStruct => {
            if result.contains(DeclarationModifiers::READONLY) {
                gate_modifier(
                    tree,
                    modifiers,
                    SyntaxKind::ReadOnlyKeyword,
                    LanguageFeature::ReadOnlyStructs,
                    diagnostics,
                );
            }
            if result.contains(DeclarationModifiers::REF) {
                gate_modifier(
                    tree,
                    modifiers,
                    SyntaxKind::RefKeyword,
                    LanguageFeature::RefStructs,
                    diagnostics,
                );
            }
        }
        _ => {}
    }

    combine_accessibility(result)
}

/// `protected internal` and `private protected` are accessibilities of their own.
#[must_use]
pub fn combine_accessibility(modifiers: DeclarationModifiers) -> DeclarationModifiers {
    let access = modifiers & DeclarationModifiers::ACCESSIBILITY_MASK;
    let rest = modifiers - DeclarationModifiers::ACCESSIBILITY_MASK;
    if access == DeclarationModifiers::PROTECTED | DeclarationModifiers::INTERNAL {
        rest | DeclarationModifiers::PROTECTED_INTERNAL
    } else if access == DeclarationModifiers::PRIVATE | DeclarationModifiers::PROTECTED {
        rest | DeclarationModifiers::PRIVATE_PROTECTED
    } else {
        modifiers
    }
}

/// Check `feature` at the first `keyword` token of `modifiers`.
fn gate_modifier(
    tree: &SyntaxTree,
    modifiers: &NodeList,
    keyword: SyntaxKind,
    feature: LanguageFeature,
    diagnostics: &mut Vec<DeclarationDiagnostic>,
) {
    if let Some(token) = modifiers
        .iter()
        .find(|&token| tree.arena().kind_of(token) == Some(keyword))
    {
        check_feature(tree, feature, token, diagnostics);
    }
}

fn check_feature(
    tree: &SyntaxTree,
    feature: LanguageFeature,
    at: NodeIndex,
    diagnostics: &mut Vec<DeclarationDiagnostic>,
) {
    let version = tree.options.language_version;
    if version.supports(feature) {
        return;
    }
    diagnostics.push(DeclarationDiagnostic::with_args(
        diagnostic_codes::FEATURE_NOT_AVAILABLE_IN_VERSION,
        tree.location(at),
        &[
            feature.display_name(),
            version.as_str(),
            feature.required_version().as_str(),
        ],
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_accessibility() {
        let pi = combine_accessibility(
            DeclarationModifiers::PROTECTED | DeclarationModifiers::INTERNAL | DeclarationModifiers::STATIC,
        );
        assert_eq!(
            pi,
            DeclarationModifiers::PROTECTED_INTERNAL | DeclarationModifiers::STATIC
        );

        let pp = combine_accessibility(DeclarationModifiers::PRIVATE | DeclarationModifiers::PROTECTED);
        assert_eq!(pp, DeclarationModifiers::PRIVATE_PROTECTED);

        let public = combine_accessibility(DeclarationModifiers::PUBLIC | DeclarationModifiers::SEALED);
        assert_eq!(public, DeclarationModifiers::PUBLIC | DeclarationModifiers::SEALED);
    }

    #[test]
    fn test_modifier_flag_rejects_non_modifiers() {
        assert_eq!(modifier_flag(SyntaxKind::ThisKeyword), None);
        assert_eq!(modifier_flag(SyntaxKind::IdentifierToken), None);
        assert_eq!(
            modifier_flag(SyntaxKind::PartialKeyword),
            Some(DeclarationModifiers::PARTIAL)
        );
    }
}
