//! Bitset catalogs carried by declarations.

use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// Structural facts about a type declaration, computed without binding.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct TypeDeclarationFlags: u16 {
        /// Some member (or accessor) carries an attribute list.
        const ANY_MEMBER_HAS_ATTRIBUTES = 1 << 0;
        /// The declaration itself carries an attribute list.
        const HAS_ANY_ATTRIBUTES = 1 << 1;
        const HAS_BASE_DECLARATIONS = 1 << 2;
        const HAS_ANY_NONTYPE_MEMBERS = 1 << 3;
        /// A method's first parameter has the `this` modifier.
        const HAS_EXTENSION_METHOD_SYNTAX = 1 << 4;
        const HAS_REQUIRED_MEMBERS = 1 << 5;
        const HAS_AWAIT_EXPRESSIONS = 1 << 6;
        const IS_ITERATOR = 1 << 7;
        const HAS_RETURN_WITH_EXPRESSION = 1 << 8;
        const IS_SIMPLE_PROGRAM = 1 << 9;
    }
}

bitflags! {
    /// Declaration modifiers as written in source.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct DeclarationModifiers: u32 {
        const ABSTRACT = 1 << 0;
        const SEALED = 1 << 1;
        const STATIC = 1 << 2;
        const NEW = 1 << 3;
        const PUBLIC = 1 << 4;
        const PROTECTED = 1 << 5;
        const INTERNAL = 1 << 6;
        const PROTECTED_INTERNAL = 1 << 7;
        const PRIVATE = 1 << 8;
        const PRIVATE_PROTECTED = 1 << 9;
        const READONLY = 1 << 10;
        const CONST = 1 << 11;
        const VOLATILE = 1 << 12;
        const EXTERN = 1 << 13;
        const PARTIAL = 1 << 14;
        const UNSAFE = 1 << 15;
        const FIXED = 1 << 16;
        const VIRTUAL = 1 << 17;
        const OVERRIDE = 1 << 18;
        const ASYNC = 1 << 19;
        const REF = 1 << 20;
        const REQUIRED = 1 << 21;
        const SCOPED = 1 << 22;
        const FILE = 1 << 23;

        const ACCESSIBILITY_MASK = Self::PUBLIC.bits()
            | Self::PROTECTED.bits()
            | Self::INTERNAL.bits()
            | Self::PROTECTED_INTERNAL.bits()
            | Self::PRIVATE.bits()
            | Self::PRIVATE_PROTECTED.bits()
            | Self::FILE.bits();
    }
}

bitflags! {
    /// Well-known attributes that may apply to a declaration.
    ///
    /// Set from a purely syntactic match, so a bit may be set for an attribute
    /// that later binds to something else. A bit is never missing for a name
    /// that does match.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct AttributeHints: u8 {
        const TYPE_IDENTIFIER = 1 << 0;
        const TYPE_FORWARDED_TO = 1 << 1;
        const ASSEMBLY_KEY_NAME = 1 << 2;
        const ASSEMBLY_KEY_FILE = 1 << 3;
        const ASSEMBLY_SIGNATURE_KEY = 1 << 4;
    }
}

impl DeclarationModifiers {
    /// Source keywords of the set modifiers, in declaration-modifier order.
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        const KEYWORDS: &[(DeclarationModifiers, &str)] = &[
            (DeclarationModifiers::PUBLIC, "public"),
            (DeclarationModifiers::PROTECTED_INTERNAL, "protected internal"),
            (DeclarationModifiers::PRIVATE_PROTECTED, "private protected"),
            (DeclarationModifiers::PROTECTED, "protected"),
            (DeclarationModifiers::INTERNAL, "internal"),
            (DeclarationModifiers::PRIVATE, "private"),
            (DeclarationModifiers::FILE, "file"),
            (DeclarationModifiers::NEW, "new"),
            (DeclarationModifiers::STATIC, "static"),
            (DeclarationModifiers::ABSTRACT, "abstract"),
            (DeclarationModifiers::SEALED, "sealed"),
            (DeclarationModifiers::VIRTUAL, "virtual"),
            (DeclarationModifiers::OVERRIDE, "override"),
            (DeclarationModifiers::EXTERN, "extern"),
            (DeclarationModifiers::UNSAFE, "unsafe"),
            (DeclarationModifiers::READONLY, "readonly"),
            (DeclarationModifiers::VOLATILE, "volatile"),
            (DeclarationModifiers::CONST, "const"),
            (DeclarationModifiers::FIXED, "fixed"),
            (DeclarationModifiers::REQUIRED, "required"),
            (DeclarationModifiers::SCOPED, "scoped"),
            (DeclarationModifiers::ASYNC, "async"),
            (DeclarationModifiers::REF, "ref"),
            (DeclarationModifiers::PARTIAL, "partial"),
        ];
        KEYWORDS
            .iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, keyword)| *keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_default_empty() {
        assert!(TypeDeclarationFlags::default().is_empty());
        assert!(DeclarationModifiers::default().is_empty());
        assert!(AttributeHints::default().is_empty());
    }

    #[test]
    fn test_modifier_keywords_order() {
        let modifiers = DeclarationModifiers::PARTIAL
            | DeclarationModifiers::STATIC
            | DeclarationModifiers::PUBLIC;
        let keywords: Vec<_> = modifiers.keywords().collect();
        assert_eq!(keywords, vec!["public", "static", "partial"]);
    }

    #[test]
    fn test_accessibility_mask_excludes_partial() {
        assert!(!DeclarationModifiers::ACCESSIBILITY_MASK.contains(DeclarationModifiers::PARTIAL));
        assert!(
            DeclarationModifiers::ACCESSIBILITY_MASK.contains(DeclarationModifiers::PRIVATE_PROTECTED)
        );
    }
}
