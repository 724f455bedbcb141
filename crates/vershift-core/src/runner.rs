//! Migration runner
//!
//! Walks an ordered step sequence, applying every step whose version
//! exceeds the state's current version. Each applied step's output is
//! stamped with the step version (object-shaped outputs only) and validated
//! against the step schema conjoined with an exact version-literal check.
//! The accumulated value after each step is the validator's canonical
//! output, so adapter coercions carry forward.

use crate::error::{MigrateError, MigrationError, ValidationError, VersionError};
use serde_json::Value;
use std::sync::Arc;
use vershift_chain::Step;
use vershift_schema::{FieldLiteral, Validator, ValidatorExt};

/// Default version-marker field on object-shaped state
pub const DEFAULT_VERSION_KEY: &str = "_version";

/// Migrate `state` through `steps` using the default version key
///
/// # Errors
/// Fails with [`VersionError`] for a malformed sequence,
/// [`MigrationError`](crate::MigrationError) when a transformation fails,
/// or [`ValidationError`](crate::ValidationError) when a step's output is
/// rejected by its schema.
pub fn migrate(state: Value, steps: &[Step]) -> Result<Value, MigrateError> {
    migrate_with_key(state, steps, DEFAULT_VERSION_KEY)
}

/// Migrate `state` through `steps`, tracking versions under `key`
///
/// # Errors
/// See [`migrate`].
pub fn migrate_with_key(state: Value, steps: &[Step], key: &str) -> Result<Value, MigrateError> {
    validate_order(steps)?;

    let current = current_version(&state, key);
    let pending: Vec<&Step> = steps
        .iter()
        .filter(|step| to_f64(step.version()) > current)
        .collect();

    // Already current (or ahead): the state goes back untouched, with no
    // stamping and no validation.
    if pending.is_empty() {
        tracing::debug!(current, "no migrations to apply");
        return Ok(state);
    }

    tracing::debug!(current, pending = pending.len(), key, "applying migrations");

    let mut value = state;
    for step in pending {
        value = apply_step(value, step, key)?;
    }
    Ok(value)
}

/// Reject empty or non-strictly-ascending sequences
fn validate_order(steps: &[Step]) -> Result<(), VersionError> {
    if steps.is_empty() {
        return Err(VersionError::EmptyChain);
    }
    for pair in steps.windows(2) {
        if pair[0].version() >= pair[1].version() {
            return Err(VersionError::NotAscending {
                prev: pair[0].version(),
                next: pair[1].version(),
            });
        }
    }
    Ok(())
}

/// Version recorded on the incoming state, or 0
///
/// Permissive fallback: non-object state, a missing key, or a non-numeric
/// marker all mean "nothing applied yet", never an error. Any JSON number
/// participates in the comparison.
fn current_version(state: &Value, key: &str) -> f64 {
    match state.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn apply_step(value: Value, step: &Step, key: &str) -> Result<Value, MigrateError> {
    let version = step.version();

    let mut result = step
        .apply(value)
        .map_err(|cause| MigrationError::new(version, cause))?;

    // Stamp object-shaped results only; primitives and arrays are validated
    // as-is and a schema that requires the marker will reject them.
    if let Value::Object(map) = &mut result {
        map.insert(key.to_owned(), Value::from(version));
    }

    let stamped = Arc::clone(step.schema()).and(FieldLiteral::for_version(key, version));
    match stamped.validate(&result) {
        Ok(canonical) => {
            tracing::debug!(version, "migration applied");
            Ok(canonical)
        }
        Err(issues) => Err(ValidationError::new(version, issues).into()),
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_f64(version: u64) -> f64 {
    version as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn current_version_reads_numeric_marker() {
        assert_eq!(current_version(&json!({"_version": 2}), "_version"), 2.0);
        assert_eq!(
            current_version(&json!({"schemaVersion": 7}), "schemaVersion"),
            7.0
        );
    }

    #[test]
    fn current_version_accepts_fractional_markers() {
        assert_eq!(
            current_version(&json!({"_version": 1.5}), "_version"),
            1.5
        );
    }

    #[test]
    fn current_version_defaults_to_zero() {
        assert_eq!(current_version(&Value::Null, "_version"), 0.0);
        assert_eq!(current_version(&json!(42), "_version"), 0.0);
        assert_eq!(current_version(&json!({}), "_version"), 0.0);
        assert_eq!(
            current_version(&json!({"_version": "not-a-number"}), "_version"),
            0.0
        );
        assert_eq!(
            current_version(&json!({"_version": null}), "_version"),
            0.0
        );
    }
}
