//! Diagnostic types and message lookup for the signature checker.
//!
//! Message data lives in `data.rs`.

use serde::Serialize;

mod data;
pub use data::{DIAGNOSTIC_MESSAGES, diagnostic_codes, diagnostic_messages};

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

/// Elaboration attached to a diagnostic (e.g. "Types of parameters ... are incompatible").
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticRelatedInformation {
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

/// A rendered compatibility diagnostic with its chain of elaborations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_information: Vec<DiagnosticRelatedInformation>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub const fn error(message: String, code: u32) -> Self {
        Self {
            message_text: message,
            category: DiagnosticCategory::Error,
            code,
            related_information: Vec::new(),
        }
    }

    /// Create an error diagnostic from a message code and its arguments.
    ///
    /// Unknown codes render as an empty message rather than failing.
    #[must_use]
    pub fn from_code(code: u32, args: &[&str]) -> Self {
        let template = get_message_template(code).unwrap_or("");
        Self::error(format_message(template, args), code)
    }

    /// Add an elaboration to this diagnostic.
    #[must_use]
    pub fn with_related(mut self, code: u32, message: String) -> Self {
        self.related_information.push(DiagnosticRelatedInformation {
            message_text: message,
            category: DiagnosticCategory::Message,
            code,
        });
        self
    }

    /// Append every line of another diagnostic (head and elaborations) as related info.
    #[must_use]
    pub fn with_chain(mut self, nested: Diagnostic) -> Self {
        self.related_information.push(DiagnosticRelatedInformation {
            message_text: nested.message_text,
            category: DiagnosticCategory::Message,
            code: nested.code,
        });
        self.related_information.extend(nested.related_information);
        self
    }

    /// Render in tsc's indented chain style.
    pub fn render(&self) -> String {
        let mut out = format!("error TS{}: {}", self.code, self.message_text);
        for (depth, related) in self.related_information.iter().enumerate() {
            out.push('\n');
            out.push_str(&"  ".repeat(depth + 1));
            out.push_str(&related.message_text);
        }
        out
    }
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

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
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

#[cfg(test)]
#[path = "../../tests/diagnostics_tests.rs"]
mod tests;
