//! Migration step
//!
//! A [`Step`] is one versioned transformation plus the schema its output
//! must satisfy. Steps are stored type-erased (`Value -> Value`) so chains
//! of heterogeneous state shapes stay a plain ordered sequence; [`Step::new`]
//! bridges typed transformations into the erased form via serde.

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use vershift_schema::Validator;

type UpFn = dyn Fn(Value) -> Result<Value> + Send + Sync;

/// One versioned transformation plus its output schema
///
/// Cheap to clone: the schema and transformation are shared behind `Arc`s.
#[derive(Clone)]
pub struct Step {
    version: u64,
    schema: Arc<dyn Validator>,
    up: Arc<UpFn>,
}

impl Step {
    /// Create a step from a typed transformation
    ///
    /// The input value is deserialized into `I` before `up` runs and the
    /// output is serialized back; a shape mismatch on the way in surfaces
    /// as a transformation failure, not a panic.
    pub fn new<I, O, F>(version: u64, schema: impl Validator + 'static, up: F) -> Self
    where
        I: DeserializeOwned,
        O: Serialize,
        F: Fn(I) -> Result<O> + Send + Sync + 'static,
    {
        Self::raw(version, schema, move |value| {
            let input: I = serde_json::from_value(value)?;
            let output = up(input)?;
            Ok(serde_json::to_value(output)?)
        })
    }

    /// Create a step from an erased `Value -> Value` transformation
    pub fn raw<F>(version: u64, schema: impl Validator + 'static, up: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            version,
            schema: Arc::new(schema),
            up: Arc::new(up),
        }
    }

    /// The version this step produces
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The validator for this step's output
    #[must_use]
    pub fn schema(&self) -> &Arc<dyn Validator> {
        &self.schema
    }

    /// Run the transformation
    ///
    /// # Errors
    /// Propagates whatever failure the transformation reports.
    pub fn apply(&self, value: Value) -> Result<Value> {
        (self.up)(value)
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("version", &self.version)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}
