//! JSON Schema validator adapter
//!
//! Compiles a JSON Schema document once and validates values against it.
//! Validation is pure predicate checking; the canonical output is the input
//! unchanged, since JSON Schema does not coerce.

use crate::error::SchemaError;
use crate::issue::{Issue, PathSegment};
use crate::validator::Validator;
use jsonschema::paths::PathChunk;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fmt;

/// Validator backed by a compiled JSON Schema
pub struct JsonSchemaValidator {
    schema: Value,
    compiled: JSONSchema,
}

impl JsonSchemaValidator {
    /// Compile `schema` into a reusable validator
    ///
    /// # Errors
    /// Returns [`SchemaError::Compile`] if the document is not a valid
    /// schema.
    pub fn compile(schema: &Value) -> Result<Self, SchemaError> {
        let compiled =
            JSONSchema::compile(schema).map_err(|err| SchemaError::Compile(err.to_string()))?;
        Ok(Self {
            schema: schema.clone(),
            compiled,
        })
    }

    /// Derive the schema for `T` and compile it
    ///
    /// # Errors
    /// Returns [`SchemaError`] if derivation or compilation fails.
    pub fn for_type<T: schemars::JsonSchema>() -> Result<Self, SchemaError> {
        Self::compile(&schema_of::<T>()?)
    }

    /// The source schema document
    #[must_use]
    pub fn schema(&self) -> &Value {
        &self.schema
    }
}

impl fmt::Debug for JsonSchemaValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSchemaValidator")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl Validator for JsonSchemaValidator {
    fn validate(&self, value: &Value) -> Result<Value, Vec<Issue>> {
        match self.compiled.validate(value) {
            Ok(()) => Ok(value.clone()),
            Err(errors) => Err(errors
                .map(|err| {
                    let path = err
                        .instance_path
                        .iter()
                        .filter_map(|chunk| match chunk {
                            PathChunk::Property(name) => {
                                Some(PathSegment::Key(name.to_string()))
                            }
                            PathChunk::Index(idx) => Some(PathSegment::Index(*idx)),
                            _ => None,
                        })
                        .collect();
                    Issue::at(err.to_string(), path)
                })
                .collect()),
        }
    }
}

/// Derive a JSON Schema document from a Rust type
///
/// # Errors
/// Returns [`SchemaError::Derive`] if the generated schema cannot be
/// rendered as a JSON value.
pub fn schema_of<T: schemars::JsonSchema>() -> Result<Value, SchemaError> {
    let schema = schemars::gen::SchemaGenerator::default().into_root_schema_for::<T>();
    serde_json::to_value(schema).map_err(|err| SchemaError::Derive(err.to_string()))
}
