//! Validation issue types
//!
//! An [`Issue`] is one finding produced by a validator: a human-readable
//! message plus the path to the offending field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One segment of a path into a JSON value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Object field name
    Key(String),
    /// Array index
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{key}"),
            Self::Index(idx) => write!(f, "{idx}"),
        }
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Human-readable description of the violation
    pub message: String,
    /// Path to the offending field (empty for whole-value issues)
    pub path: Vec<PathSegment>,
}

impl Issue {
    /// Create an issue with no path (refers to the whole value)
    #[inline]
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Vec::new(),
        }
    }

    /// Create an issue at a specific path
    #[inline]
    #[must_use]
    pub fn at(message: impl Into<String>, path: Vec<PathSegment>) -> Self {
        Self {
            message: message.into(),
            path,
        }
    }

    /// Render the path as a JSON pointer (`/a/0/b`); empty path yields `""`
    #[must_use]
    pub fn pointer(&self) -> String {
        self.path
            .iter()
            .map(|segment| format!("/{segment}"))
            .collect()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} (at {})", self.message, self.pointer())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_rendering() {
        let issue = Issue::at(
            "expected string",
            vec![
                PathSegment::Key("items".to_string()),
                PathSegment::Index(2),
                PathSegment::Key("name".to_string()),
            ],
        );
        assert_eq!(issue.pointer(), "/items/2/name");
        assert_eq!(issue.to_string(), "expected string (at /items/2/name)");
    }

    #[test]
    fn whole_value_issue() {
        let issue = Issue::new("expected object");
        assert_eq!(issue.pointer(), "");
        assert_eq!(issue.to_string(), "expected object");
    }

    #[test]
    fn issue_serializes_path_segments_untagged() {
        let issue = Issue::at(
            "bad",
            vec![PathSegment::Key("a".to_string()), PathSegment::Index(0)],
        );
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["path"], serde_json::json!(["a", 0]));
    }
}
