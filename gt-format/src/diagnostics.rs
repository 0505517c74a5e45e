//! Non-fatal decode diagnostics

use serde::Serialize;
use std::fmt;

/// Category of a non-fatal condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A property used a value type that is read but not decoded; it was dropped.
    UnsupportedFeature,
    /// The header version is not one this decoder was written against.
    UnknownVersion,
    /// Bytes remained after the last property map and were ignored.
    TrailingBytes,
}

/// A condition reported alongside a successful decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// What happened
    pub kind: DiagnosticKind,
    /// Byte offset the condition was detected at
    pub offset: usize,
    /// Property map name, when the condition concerns one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    /// Human-readable detail
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic not tied to a property.
    pub fn new(kind: DiagnosticKind, offset: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            offset,
            property: None,
            message: message.into(),
        }
    }

    /// Attach the property map name.
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.property {
            Some(property) => write!(
                f,
                "{:?} at offset {} (property '{}'): {}",
                self.kind, self.offset, property, self.message
            ),
            None => write!(f, "{:?} at offset {}: {}", self.kind, self.offset, self.message),
        }
    }
}
