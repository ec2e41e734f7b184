//! Diagnostic message data for declaration building.

use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const PARTIAL_MISPLACED: u32 = 267;
    pub const CONSTRAINT_ONLY_ALLOWED_ON_GENERIC_DECL: u32 = 80;
    pub const DUPLICATE_MODIFIER: u32 = 1004;
    pub const BAD_MODIFIERS_ON_NAMESPACE: u32 = 1671;
    pub const UNEXPECTED_ALIASED_NAME: u32 = 7000;
    pub const UNEXPECTED_GENERIC_NAME: u32 = 7002;
    pub const FEATURE_NOT_AVAILABLE_IN_VERSION: u32 = 8107;
    pub const GLOBAL_USING_IN_NAMESPACE: u32 = 8914;
    pub const GLOBAL_USING_OUT_OF_ORDER: u32 = 8915;
    pub const SIMPLE_PROGRAM_IS_EMPTY: u32 = 8937;
    pub const MULTIPLE_FILE_SCOPED_NAMESPACE: u32 = 8954;
    pub const FILE_SCOPED_AND_NORMAL_NAMESPACE: u32 = 8955;
    pub const FILE_SCOPED_NAMESPACE_NOT_BEFORE_ALL_MEMBERS: u32 = 8956;
}

pub mod diagnostic_messages {
    pub const PARTIAL_MISPLACED: &str = "The 'partial' modifier can only appear immediately before 'class', 'record', 'struct', 'interface', or a method return type.";
    pub const CONSTRAINT_ONLY_ALLOWED_ON_GENERIC_DECL: &str =
        "Constraints are not allowed on non-generic declarations";
    pub const DUPLICATE_MODIFIER: &str = "Duplicate '{0}' modifier";
    pub const BAD_MODIFIERS_ON_NAMESPACE: &str =
        "A namespace declaration cannot have modifiers or attributes";
    pub const UNEXPECTED_ALIASED_NAME: &str = "Unexpected use of an aliased name";
    pub const UNEXPECTED_GENERIC_NAME: &str = "Unexpected use of a generic name";
    pub const FEATURE_NOT_AVAILABLE_IN_VERSION: &str = "Feature '{0}' is not available in C# {1}. Please use language version {2} or greater.";
    pub const GLOBAL_USING_IN_NAMESPACE: &str =
        "A global using directive cannot be used in a namespace declaration.";
    pub const GLOBAL_USING_OUT_OF_ORDER: &str =
        "A global using directive must precede all non-global using directives.";
    pub const SIMPLE_PROGRAM_IS_EMPTY: &str = "At least one top-level statement must be non-empty.";
    pub const MULTIPLE_FILE_SCOPED_NAMESPACE: &str =
        "Source file can only contain one file-scoped namespace declaration.";
    pub const FILE_SCOPED_AND_NORMAL_NAMESPACE: &str =
        "Source file can not contain both file-scoped and normal namespace declarations.";
    pub const FILE_SCOPED_NAMESPACE_NOT_BEFORE_ALL_MEMBERS: &str =
        "File-scoped namespace must precede all other members in a file.";
}

macro_rules! error_message {
    ($name:ident) => {
        DiagnosticMessage {
            code: diagnostic_codes::$name,
            category: DiagnosticCategory::Error,
            message: diagnostic_messages::$name,
        }
    };
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    error_message!(CONSTRAINT_ONLY_ALLOWED_ON_GENERIC_DECL),
    error_message!(PARTIAL_MISPLACED),
    error_message!(DUPLICATE_MODIFIER),
    error_message!(BAD_MODIFIERS_ON_NAMESPACE),
    error_message!(UNEXPECTED_ALIASED_NAME),
    error_message!(UNEXPECTED_GENERIC_NAME),
    error_message!(FEATURE_NOT_AVAILABLE_IN_VERSION),
    error_message!(GLOBAL_USING_IN_NAMESPACE),
    error_message!(GLOBAL_USING_OUT_OF_ORDER),
    error_message!(SIMPLE_PROGRAM_IS_EMPTY),
    error_message!(MULTIPLE_FILE_SCOPED_NAMESPACE),
    error_message!(FILE_SCOPED_AND_NORMAL_NAMESPACE),
    error_message!(FILE_SCOPED_NAMESPACE_NOT_BEFORE_ALL_MEMBERS),
];
