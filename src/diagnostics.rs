//! Diagnostic Infrastructure
//!
//! This module provides infrastructure for collecting and formatting lint
//! findings. It works with byte-offset spans rather than line/column
//! positions; position conversion is the host's concern.
//!
//! # Components
//!
//! - `Diagnostic` - A single finding with location, severity, and code
//! - `DiagnosticBag` - The reporting sink rules emit into
//! - `DiagnosticSeverity` - Error, Warning, Info, or Hint
//!
//! # Example
//!
//! ```ignore
//! let mut bag = DiagnosticBag::with_file("input.ts");
//! bag.error(span, "You cannot increment or decrement an enum type.", 9101);
//!
//! for diag in bag.iter() {
//!     println!("{diag}");
//! }
//! ```

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Diagnostic Severity
// =============================================================================

/// The severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// A hint (lowest severity)
    Hint = 4,
    /// Informational message
    Info = 3,
    /// A warning
    Warning = 2,
    /// An error (highest severity)
    Error = 1,
}

impl DiagnosticSeverity {
    /// Get the severity name for display.
    pub fn name(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Info => "info",
            DiagnosticSeverity::Hint => "hint",
        }
    }

    /// Check if this is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, DiagnosticSeverity::Error)
    }

    /// Check if this is a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, DiagnosticSeverity::Warning)
    }
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for DiagnosticSeverity {
    fn default() -> Self {
        DiagnosticSeverity::Error
    }
}

// =============================================================================
// Diagnostic
// =============================================================================

/// A single lint finding with location, severity, and code.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The file containing the diagnostic
    pub file_name: String,
    /// The source span (byte offsets)
    pub span: Span,
    /// The diagnostic message
    pub message: String,
    /// The severity level
    pub severity: DiagnosticSeverity,
    /// The diagnostic code (e.g. 9102)
    pub code: u32,
    /// The rule that produced this finding (e.g. "strict-enums")
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rule: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(
        file_name: impl Into<String>,
        span: Span,
        message: impl Into<String>,
        severity: DiagnosticSeverity,
        code: u32,
    ) -> Self {
        Diagnostic {
            file_name: file_name.into(),
            span,
            message: message.into(),
            severity,
            code,
            rule: None,
        }
    }

    /// Create an error diagnostic.
    pub fn error(
        file_name: impl Into<String>,
        span: Span,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self::new(file_name, span, message, DiagnosticSeverity::Error, code)
    }

    /// Create a warning diagnostic.
    pub fn warning(
        file_name: impl Into<String>,
        span: Span,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self::new(file_name, span, message, DiagnosticSeverity::Warning, code)
    }

    /// Set the originating rule name.
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Check if this is an error.
    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }

    /// Get the start position (byte offset).
    pub fn start(&self) -> u32 {
        self.span.start
    }

    /// Get the length.
    pub fn length(&self) -> u32 {
        self.span.len()
    }

    /// Format the diagnostic in a simple format.
    ///
    /// Returns a string like: `error[TSEL9101]: You cannot increment or
    /// decrement an enum type.`
    pub fn format_simple(&self) -> String {
        format!("{}[TSEL{}]: {}", self.severity, self.code, self.message)
    }

    /// Serialize to a JSON string (for machine-readable output).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

// =============================================================================
// DiagnosticBag
// =============================================================================

/// A collection of diagnostics for one analysis run.
///
/// DiagnosticBag is the reporting sink the rule engine emits into. It
/// tracks error counts and provides filtering and sorting.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticBag {
    /// The collected diagnostics
    diagnostics: Vec<Diagnostic>,
    /// The file name for diagnostics added without explicit file
    default_file: String,
    /// Error count
    error_count: usize,
    /// Warning count
    warning_count: usize,
}

impl DiagnosticBag {
    /// Create a new empty diagnostic bag.
    pub fn new() -> Self {
        DiagnosticBag::default()
    }

    /// Create a new diagnostic bag with a default file name.
    pub fn with_file(file_name: impl Into<String>) -> Self {
        DiagnosticBag {
            default_file: file_name.into(),
            ..DiagnosticBag::default()
        }
    }

    /// Get the default file name.
    pub fn default_file(&self) -> &str {
        &self.default_file
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            DiagnosticSeverity::Error => self.error_count += 1,
            DiagnosticSeverity::Warning => self.warning_count += 1,
            _ => {}
        }
        self.diagnostics.push(diagnostic);
    }

    /// Add an error diagnostic in the default file.
    pub fn error(&mut self, span: Span, message: impl Into<String>, code: u32) {
        self.add(Diagnostic::error(&self.default_file, span, message, code));
    }

    /// Add a warning diagnostic in the default file.
    pub fn warning(&mut self, span: Span, message: impl Into<String>, code: u32) {
        self.add(Diagnostic::warning(&self.default_file, span, message, code));
    }

    /// Check if there are any diagnostics.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Get the number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get the error count.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Get the warning count.
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Get all diagnostics as a slice.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Iterate over diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Filter diagnostics by code.
    pub fn by_code(&self, code: u32) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.code == code)
    }

    /// Get error codes as a vector (for testing).
    pub fn codes(&self) -> Vec<u32> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }

    /// Sort diagnostics by file, then by position.
    pub fn sort(&mut self) {
        self.diagnostics
            .sort_by(|a, b| match a.file_name.cmp(&b.file_name) {
                std::cmp::Ordering::Equal => a.span.start.cmp(&b.span.start),
                other => other,
            });
    }

    /// Clear all diagnostics.
    pub fn clear(&mut self) {
        self.diagnostics.clear();
        self.error_count = 0;
        self.warning_count = 0;
    }

    /// Take all diagnostics, leaving the bag empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        self.error_count = 0;
        self.warning_count = 0;
        std::mem::take(&mut self.diagnostics)
    }

    /// Merge another DiagnosticBag into this one.
    pub fn merge(&mut self, other: DiagnosticBag) {
        for diag in other.diagnostics {
            self.add(diag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bag_counts_errors_and_warnings() {
        let mut bag = DiagnosticBag::with_file("a.ts");
        bag.error(Span::new(0, 1), "first", 9102);
        bag.warning(Span::new(2, 3), "second", 9105);
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.error_count(), 1);
        assert_eq!(bag.warning_count(), 1);
        assert!(bag.has_errors());
        assert_eq!(bag.codes(), vec![9102, 9105]);
    }

    #[test]
    fn bag_take_resets_counts() {
        let mut bag = DiagnosticBag::with_file("a.ts");
        bag.error(Span::new(0, 1), "boom", 9101);
        let taken = bag.take();
        assert_eq!(taken.len(), 1);
        assert!(bag.is_empty());
        assert_eq!(bag.error_count(), 0);
    }

    #[test]
    fn diagnostic_display_and_json() {
        let diag = Diagnostic::error("a.ts", Span::new(5, 6), "bad enum", 9103)
            .with_rule("strict-enums");
        assert_eq!(diag.format_simple(), "error[TSEL9103]: bad enum");
        let json = diag.to_json().unwrap();
        assert!(json.contains("\"code\":9103"));
        assert!(json.contains("strict-enums"));
    }

    #[test]
    fn bag_sort_orders_by_position() {
        let mut bag = DiagnosticBag::with_file("a.ts");
        bag.error(Span::new(10, 12), "later", 9102);
        bag.error(Span::new(0, 2), "earlier", 9102);
        bag.sort();
        assert_eq!(bag.diagnostics()[0].message, "earlier");
    }
}
