//! Failure classification types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::ContextMap;

/// Failure categories surfaced by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCategory {
    /// Missing OS permission (accessibility, automation)
    Permission,

    /// Target element could not be located
    ElementDetection,

    /// Timeout or slow search
    Performance,

    /// Framework/API level breakage
    System,

    /// Nothing matched
    Unknown,
}

impl FailureCategory {
    /// Get category name as used in serialized reports
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureCategory::Permission => "permission",
            FailureCategory::ElementDetection => "element_detection",
            FailureCategory::Performance => "performance",
            FailureCategory::System => "system",
            FailureCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Get severity rank (higher = more severe)
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 4,
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
        }
    }

    /// Get severity name
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected cause of failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureReason {
    /// Failure category
    pub category: FailureCategory,

    /// Machine-readable identifier
    pub code: String,

    /// Human-readable explanation
    pub message: String,

    /// Failure severity
    pub severity: Severity,

    /// Free-form details (error type, raw message, matched pattern)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_details: Option<ContextMap>,

    /// Suggested fix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_suggestion: Option<String>,
}

impl FailureReason {
    /// Create a new failure reason without details
    pub fn new(
        category: FailureCategory,
        code: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            category,
            code: code.into(),
            message: message.into(),
            severity,
            technical_details: None,
            recovery_suggestion: None,
        }
    }

    /// Attach technical details
    pub fn with_details(mut self, details: ContextMap) -> Self {
        self.technical_details = Some(details);
        self
    }

    /// Attach a recovery suggestion
    pub fn with_recovery(mut self, suggestion: impl Into<String>) -> Self {
        self.recovery_suggestion = Some(suggestion.into());
        self
    }

    /// Check if this reason is critical
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

/// The error that caused a failed attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedError {
    /// Error type name
    pub type_name: String,

    /// Error message text
    pub message: String,

    /// Captured trace, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
}

impl ObservedError {
    /// Create an observed error from a type name and message
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            stack_trace: None,
        }
    }

    /// Capture a Rust error, rendering its `source()` chain as the trace
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        let type_name = short_type_name(std::any::type_name::<E>());

        let mut chain = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            chain.push(format!("caused by: {}", cause));
            source = cause.source();
        }

        Self {
            type_name,
            message: err.to_string(),
            stack_trace: if chain.is_empty() { None } else { Some(chain.join("\n")) },
        }
    }

    /// Attach a stack trace
    pub fn with_stack_trace(mut self, trace: impl Into<String>) -> Self {
        self.stack_trace = Some(trace.into());
        self
    }
}

/// Strip module paths from every path in a type name, keeping generic arguments
///
/// `app::Wrapped<std::io::error::ErrorKind>` becomes `Wrapped<ErrorKind>`.
fn short_type_name(full: &str) -> String {
    fn push_last_segment(out: &mut String, path: &mut String) {
        if let Some(last) = path.rsplit("::").next() {
            out.push_str(last);
        }
        path.clear();
    }

    let mut out = String::with_capacity(full.len());
    let mut path = String::new();
    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            path.push(c);
        } else {
            push_last_segment(&mut out, &mut path);
            out.push(c);
        }
    }
    push_last_segment(&mut out, &mut path);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Outer(std::io::Error);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "outer failure")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[derive(Debug)]
    struct Wrapped<T>(T);

    impl<T: fmt::Debug> fmt::Display for Wrapped<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "wrapped {:?}", self.0)
        }
    }

    impl<T: fmt::Debug> std::error::Error for Wrapped<T> {}

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&FailureCategory::ElementDetection).unwrap();
        assert_eq!(json, "\"element_detection\"");
        assert_eq!(FailureCategory::Performance.to_string(), "performance");
    }

    #[test]
    fn test_severity_rank() {
        assert!(Severity::Critical.rank() > Severity::High.rank());
        assert!(Severity::Medium.rank() > Severity::Low.rank());
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
    }

    #[test]
    fn test_reason_builder() {
        let reason = FailureReason::new(
            FailureCategory::Permission,
            "permission_denied",
            "Permission denied",
            Severity::Critical,
        )
        .with_recovery("Grant access");

        assert!(reason.is_critical());
        assert_eq!(reason.recovery_suggestion.as_deref(), Some("Grant access"));
        assert!(reason.technical_details.is_none());
    }

    #[test]
    fn test_observed_error_from_error_chain() {
        let err = Outer(std::io::Error::new(std::io::ErrorKind::NotFound, "missing file"));
        let observed = ObservedError::from_error(&err);

        assert_eq!(observed.type_name, "Outer");
        assert_eq!(observed.message, "outer failure");
        assert!(observed.stack_trace.unwrap().contains("missing file"));
    }

    #[test]
    fn test_observed_error_without_source() {
        let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let observed = ObservedError::from_error(&err);

        assert_eq!(observed.type_name, "Error");
        assert!(observed.stack_trace.is_none());
    }

    #[test]
    fn test_observed_error_generic_type_name() {
        let observed = ObservedError::from_error(&Wrapped(std::io::ErrorKind::Other));
        assert_eq!(observed.type_name, "Wrapped<ErrorKind>");
        assert_eq!(observed.message, "wrapped Other");
    }

    #[test]
    fn test_observed_error_from_trait_object() {
        let boxed: Box<dyn std::error::Error> = Box::new(Outer(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        )));
        let observed = ObservedError::from_error(boxed.as_ref());

        assert!(!observed.type_name.contains("::"));
        assert!(observed.type_name.starts_with("dyn "));
        assert_eq!(observed.message, "outer failure");
        assert!(observed.stack_trace.unwrap().contains("access denied"));
    }

    #[test]
    fn test_short_type_name_paths() {
        assert_eq!(short_type_name("std::io::error::Error"), "Error");
        assert_eq!(
            short_type_name("app::Pair<core::num::ParseIntError, alloc::string::String>"),
            "Pair<ParseIntError, String>"
        );
        assert_eq!(short_type_name("Plain"), "Plain");
    }
}
