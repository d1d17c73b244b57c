//! Diagnostic types and message lookup for the resolver.
//!
//! Diagnostics are values. The resolver never prints them; it hands each one
//! to a [`DiagnosticSink`] owned by the caller and mirrors it as a `tracing`
//! event so that a configured subscriber can observe it as well.

use serde::Serialize;
use std::sync::mpsc::Sender;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

/// Numeric codes for every diagnostic the core can emit.
pub mod diagnostic_codes {
    pub const UNDEFINED_VARIABLE: u32 = 1001;
    pub const MALFORMED_NAME_CHAIN: u32 = 1002;
}

/// The kinds of observation the resolution core reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticKind {
    /// A variable reference to an unbound, non-superglobal name.
    UndefinedVariable,
    /// A variable-name node chain that exceeded the walk bound.
    MalformedNameChain,
}

impl DiagnosticKind {
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::UndefinedVariable => diagnostic_codes::UNDEFINED_VARIABLE,
            Self::MalformedNameChain => diagnostic_codes::MALFORMED_NAME_CHAIN,
        }
    }
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::UNDEFINED_VARIABLE,
        category: DiagnosticCategory::Warning,
        message: "Variable ${0} is undeclared",
    },
    DiagnosticMessage {
        code: diagnostic_codes::MALFORMED_NAME_CHAIN,
        category: DiagnosticCategory::Error,
        message: "Variable name chain exceeds {0} nested nodes",
    },
];

/// A structured observation produced while resolving one compilation unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub category: DiagnosticCategory,
    pub code: u32,
    pub file: String,
    pub line: u32,
    pub message_text: String,
}

impl Diagnostic {
    /// Create a diagnostic of `kind`, filling the kind's template with `args`.
    #[must_use]
    pub fn new(kind: DiagnosticKind, file: impl Into<String>, line: u32, args: &[&str]) -> Self {
        let code = kind.code();
        let (category, message_text) = match get_diagnostic_message(code) {
            Some(def) => (def.category, format_message(def.message, args)),
            None => (DiagnosticCategory::Error, args.join(" ")),
        };
        Self {
            kind,
            category,
            code,
            file: file.into(),
            line,
            message_text,
        }
    }

    /// Convenience constructor for [`DiagnosticKind::UndefinedVariable`].
    #[must_use]
    pub fn undefined_variable(file: impl Into<String>, line: u32, name: &str) -> Self {
        Self::new(DiagnosticKind::UndefinedVariable, file, line, &[name])
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

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

// =============================================================================
// Sinks
// =============================================================================

/// Destination for diagnostics reported during resolution.
///
/// Reporting is infallible from the resolver's point of view: a sink that
/// can no longer accept records drops them.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl DiagnosticSink for Sender<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        if let Err(err) = self.send(diagnostic) {
            tracing::warn!(code = err.0.code, "diagnostic receiver dropped");
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod tests;
