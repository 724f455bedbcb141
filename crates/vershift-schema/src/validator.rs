//! Validator capability trait
//!
//! Decouples migration machinery from any one schema engine. A validator is
//! a predicate plus a coercion: it either accepts a value and returns the
//! canonical form of it, or rejects it with the full list of issues.

use crate::combinators::AllOf;
use crate::issue::Issue;
use serde_json::Value;
use std::sync::Arc;

/// Validator capability
///
/// # Contract
/// - `validate` must be pure and deterministic.
/// - On success the returned value is the *canonical* output: adapters may
///   coerce (apply defaults, drop unknown fields) per their own rules, and
///   callers must carry the canonical value forward, not the raw input.
/// - On failure every detected issue is reported, not just the first.
pub trait Validator: Send + Sync + std::fmt::Debug {
    /// Validate `value`, returning the canonical output or all issues
    ///
    /// # Errors
    /// Returns the full list of validation issues when `value` is rejected.
    fn validate(&self, value: &Value) -> Result<Value, Vec<Issue>>;
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    #[inline]
    fn validate(&self, value: &Value) -> Result<Value, Vec<Issue>> {
        (**self).validate(value)
    }
}

/// Combinator methods for validators
pub trait ValidatorExt: Validator + Sized {
    /// Require both `self` and `other` to pass against the same input
    ///
    /// See [`AllOf`] for the canonical-output merge rules.
    fn and<O: Validator>(self, other: O) -> AllOf<Self, O> {
        AllOf::new(self, other)
    }
}

impl<V: Validator> ValidatorExt for V {}
