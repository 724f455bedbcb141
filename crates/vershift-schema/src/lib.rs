//! Vershift Schema System
//!
//! Minimal validator capability for schema-checked state migrations.
//!
//! # Core Concepts
//!
//! - [`Validator`]: predicate + coercion over `serde_json::Value`
//! - [`Issue`] / [`PathSegment`]: structured validation findings
//! - [`AllOf`]: conjunction with canonical-output merging
//! - [`FieldLiteral`]: exact-field-match requirement
//! - [`JsonSchemaValidator`]: compiled JSON Schema adapter
//! - [`TypedValidator`]: serde-roundtrip adapter (defaults, stripping)
//!
//! # Example
//!
//! ```rust,ignore
//! use vershift_schema::{FieldLiteral, JsonSchemaValidator, ValidatorExt};
//!
//! let schema = JsonSchemaValidator::compile(&schema_doc)?;
//! let stamped = schema.and(FieldLiteral::for_version("_version", 2));
//! let canonical = stamped.validate(&value)?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod adapters;
mod combinators;
mod error;
mod issue;
mod validator;

pub use adapters::{schema_of, JsonSchemaValidator, TypedValidator};
pub use combinators::{AllOf, FieldLiteral};
pub use error::SchemaError;
pub use issue::{Issue, PathSegment};
pub use validator::{Validator, ValidatorExt};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
