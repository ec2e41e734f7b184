//! Diagnostic codes, categories and message lookup.
//!
//! Declaration-building diagnostics carry only a code and a location; the
//! category (severity) and the message template are looked up here by code.
//! Message data lives in `data.rs`.

use serde::Serialize;

mod data;
pub use data::{DIAGNOSTIC_MESSAGES, diagnostic_codes, diagnostic_messages};

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

impl DiagnosticCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Suggestion => "suggestion",
            DiagnosticCategory::Message => "message",
        }
    }
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

/// Get the message template for a diagnostic code.
///
/// Returns the template string with `{0}`, `{1}`, etc. placeholders.
/// Use `format_message()` to fill in the placeholders.
#[must_use]
pub fn get_message_template(code: u32) -> Option<&'static str> {
    get_diagnostic_message(code).map(|m| m.message)
}

/// Get the category for a diagnostic code.
#[must_use]
pub fn get_diagnostic_category(code: u32) -> Option<DiagnosticCategory> {
    get_diagnostic_message(code).map(|m| m.category)
}

/// `CS0080` style display form of a code.
#[must_use]
pub fn display_code(code: u32) -> String {
    format!("CS{code:04}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_has_a_unique_message() {
        let mut codes: Vec<u32> = DIAGNOSTIC_MESSAGES.iter().map(|m| m.code).collect();
        codes.sort_unstable();
        let before = codes.len();
        codes.dedup();
        assert_eq!(before, codes.len(), "duplicate code in DIAGNOSTIC_MESSAGES");
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(
            get_diagnostic_category(diagnostic_codes::GLOBAL_USING_OUT_OF_ORDER),
            Some(DiagnosticCategory::Error)
        );
        assert_eq!(get_diagnostic_category(1), None);
    }

    #[test]
    fn test_format_message_fills_placeholders() {
        let template = get_message_template(diagnostic_codes::FEATURE_NOT_AVAILABLE_IN_VERSION)
            .expect("template exists");
        let text = format_message(template, &["ref structs", "7.1", "7.2"]);
        assert!(text.contains("ref structs"), "got: {text}");
        assert!(text.contains("7.2"), "got: {text}");
    }

    #[test]
    fn test_category_serializes_by_name() {
        assert_eq!(
            serde_json::to_string(&DiagnosticCategory::Error).expect("serialize"),
            "\"Error\""
        );
    }

    #[test]
    fn test_display_code_pads() {
        assert_eq!(display_code(80), "CS0080");
        assert_eq!(display_code(8937), "CS8937");
    }
}
