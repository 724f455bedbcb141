//! Testing utilities for the vershift workspace
//!
//! Shared step factories and canned validators.

#![allow(missing_docs)]

use serde_json::{json, Map, Value};
use vershift_chain::{Chain, Step};
use vershift_schema::JsonSchemaValidator;

/// Compile a JSON Schema document, panicking on bad fixtures
pub fn schema(document: Value) -> JsonSchemaValidator {
    JsonSchemaValidator::compile(&document).unwrap()
}

/// Validator accepting any object
pub fn any_object() -> JsonSchemaValidator {
    schema(json!({"type": "object"}))
}

/// Validator requiring an object with the given string fields present
pub fn object_with_strings(fields: &[&str]) -> JsonSchemaValidator {
    let properties: Map<String, Value> = fields
        .iter()
        .map(|field| ((*field).to_string(), json!({"type": "string"})))
        .collect();
    schema(json!({
        "type": "object",
        "properties": properties,
        "required": fields,
    }))
}

/// Step that discards its input and produces an empty object
pub fn stamp_only_step(version: u64) -> Step {
    Step::raw(version, any_object(), |_| Ok(json!({})))
}

/// Step that carries object fields forward and sets `field` to `value`
pub fn set_field_step(version: u64, field: &str, value: Value) -> Step {
    let field = field.to_string();
    Step::raw(version, any_object(), move |state| {
        let mut map = match state {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        map.insert(field.clone(), value.clone());
        Ok(Value::Object(map))
    })
}

/// Step whose transformation always fails with `message`
pub fn failing_step(version: u64, message: &str) -> Step {
    let message = message.to_string();
    Step::raw(version, any_object(), move |_| {
        Err(anyhow::anyhow!("{message}"))
    })
}

/// Chain of pass-through steps for the given versions, in order
pub fn chain_of(versions: &[u64]) -> Chain {
    versions
        .iter()
        .fold(Chain::empty(), |chain, &version| {
            chain.append(stamp_only_step(version))
        })
}
