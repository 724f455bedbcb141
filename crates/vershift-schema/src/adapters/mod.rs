//! Concrete validator adapters
//!
//! Thin wrappers bridging the [`Validator`](crate::Validator) capability to
//! the host ecosystem's schema tooling.

mod json_schema;
mod typed;

pub use json_schema::{schema_of, JsonSchemaValidator};
pub use typed::TypedValidator;
