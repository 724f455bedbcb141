//! Serde-roundtrip validator adapter
//!
//! Deserializing into `T` is the predicate; re-serializing is the coercion.
//! Unknown fields are dropped and serde defaults applied, so the canonical
//! output is the typed shape, not the raw input.

use crate::issue::Issue;
use crate::validator::Validator;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// Validator that parses values through a typed representation
pub struct TypedValidator<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypedValidator<T> {
    /// Create a validator for `T`
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for TypedValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TypedValidator<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TypedValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypedValidator<{}>", std::any::type_name::<T>())
    }
}

impl<T> Validator for TypedValidator<T>
where
    T: DeserializeOwned + Serialize,
{
    fn validate(&self, value: &Value) -> Result<Value, Vec<Issue>> {
        let parsed: T = serde_json::from_value(value.clone())
            .map_err(|err| vec![Issue::new(err.to_string())])?;
        serde_json::to_value(&parsed).map_err(|err| vec![Issue::new(err.to_string())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;

    fn default_retries() -> u32 {
        3
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Config {
        name: String,
        #[serde(default = "default_retries")]
        retries: u32,
    }

    #[test]
    fn applies_defaults() {
        let validator = TypedValidator::<Config>::new();
        let out = validator.validate(&json!({"name": "a"})).unwrap();
        assert_eq!(out, json!({"name": "a", "retries": 3}));
    }

    #[test]
    fn drops_unknown_fields() {
        let validator = TypedValidator::<Config>::new();
        let out = validator
            .validate(&json!({"name": "a", "retries": 1, "stale": true}))
            .unwrap();
        assert_eq!(out, json!({"name": "a", "retries": 1}));
    }

    #[test]
    fn rejects_wrong_shape() {
        let validator = TypedValidator::<Config>::new();
        let issues = validator.validate(&json!({"retries": 1})).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("name"));
    }

    #[test]
    fn debug_names_the_type() {
        let validator = TypedValidator::<Config>::new();
        assert!(format!("{validator:?}").contains("Config"));
    }
}
