//! Soft-failure diagnostics.

use std::fmt;

/// What went wrong with a field that decode skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The JSON value did not convert to the field's scalar kind.
    ScalarTypeMismatch { expected: String, found: &'static str },
}

/// A recovered problem: the field at `path` was left unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: String,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::ScalarTypeMismatch { expected, found } => {
                write!(f, "{}: expected {expected}, found {found}; field skipped", self.path)
            }
        }
    }
}

/// Outcome of a successful decode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeReport {
    diagnostics: Vec<Diagnostic>,
}

impl DecodeReport {
    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Diagnostics in the order the fields were visited.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// True if every present field was decoded.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
