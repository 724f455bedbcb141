//! Validator combinators
//!
//! [`AllOf`] conjoins two validators; [`FieldLiteral`] pins a single object
//! field to an exact value. Together they let a caller attach a version-stamp
//! requirement to an arbitrary schema.

use crate::issue::{Issue, PathSegment};
use crate::validator::Validator;
use serde_json::Value;

/// Conjunction of two validators
///
/// Both validators run against the *same* input. Canonical outputs are
/// merged: two object outputs are unioned with the right side winning on
/// key conflicts; for anything else the right side's output is taken.
/// When both sides reject, the issue lists are concatenated.
#[derive(Debug, Clone)]
pub struct AllOf<A, B> {
    first: A,
    second: B,
}

impl<A, B> AllOf<A, B> {
    /// Create a conjunction of `first` and `second`
    #[inline]
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Validator, B: Validator> Validator for AllOf<A, B> {
    fn validate(&self, value: &Value) -> Result<Value, Vec<Issue>> {
        match (self.first.validate(value), self.second.validate(value)) {
            (Ok(left), Ok(right)) => Ok(merge(left, right)),
            (Err(mut left), Err(right)) => {
                left.extend(right);
                Err(left)
            }
            (Err(issues), Ok(_)) | (Ok(_), Err(issues)) => Err(issues),
        }
    }
}

/// Union two canonical outputs, right side taking precedence
fn merge(left: Value, right: Value) -> Value {
    match (left, right) {
        (Value::Object(mut left), Value::Object(right)) => {
            left.extend(right);
            Value::Object(left)
        }
        (_, right) => right,
    }
}

/// Exact-field-match validator
///
/// Accepts only an object whose `key` field equals the expected literal.
/// The canonical output contains that single field, so conjoining via
/// [`AllOf`] adds the field to the other side's canonical output without
/// resurrecting anything the other side stripped.
#[derive(Debug, Clone)]
pub struct FieldLiteral {
    key: String,
    expected: Value,
}

impl FieldLiteral {
    /// Require `key` to equal `expected`
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>, expected: Value) -> Self {
        Self {
            key: key.into(),
            expected,
        }
    }

    /// Require `key` to equal the integer `version`
    #[inline]
    #[must_use]
    pub fn for_version(key: impl Into<String>, version: u64) -> Self {
        Self::new(key, Value::from(version))
    }

    /// The pinned field name
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Validator for FieldLiteral {
    fn validate(&self, value: &Value) -> Result<Value, Vec<Issue>> {
        let Value::Object(map) = value else {
            return Err(vec![Issue::new(format!(
                "expected object with '{}' field",
                self.key
            ))]);
        };

        match map.get(&self.key) {
            Some(actual) if *actual == self.expected => {
                let mut out = serde_json::Map::new();
                out.insert(self.key.clone(), self.expected.clone());
                Ok(Value::Object(out))
            }
            Some(actual) => Err(vec![Issue::at(
                format!("expected {}, got {}", self.expected, actual),
                vec![PathSegment::Key(self.key.clone())],
            )]),
            None => Err(vec![Issue::at(
                format!("missing required field '{}'", self.key),
                vec![PathSegment::Key(self.key.clone())],
            )]),
        }
    }
}
