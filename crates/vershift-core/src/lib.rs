//! Vershift Core
//!
//! Sequential state-migration runner with schema validation.
//!
//! # Core Concepts
//!
//! - [`migrate`] / [`migrate_with_key`]: apply every step whose version
//!   exceeds the state's current version, validating each output
//! - [`MigrateError`]: three disjoint failure kinds ([`VersionError`],
//!   [`MigrationError`], [`ValidationError`])
//! - Re-exported chain and schema surface, so hosts need one dependency
//!
//! # Example
//!
//! ```rust,ignore
//! use vershift_core::{migrate, JsonSchemaValidator, TypedChain};
//!
//! let chain = TypedChain::new()
//!     .step(1, name_schema, |_: Value| Ok(Named { name: "default".into() }))
//!     .build();
//!
//! let migrated = migrate(state, &chain.finalize())?;
//! ```
//!
//! The runner is pure: fixed chain, state, and key produce a fixed output,
//! with no I/O and no shared mutable state, so independent runs may execute
//! concurrently without coordination.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod runner;

pub use error::{MigrateError, MigrationError, ValidationError, VersionError};
pub use runner::{migrate, migrate_with_key, DEFAULT_VERSION_KEY};

// One-stop surface for hosts
pub use vershift_chain::{Chain, Step, TypedChain};
pub use vershift_schema::{
    schema_of, AllOf, FieldLiteral, Issue, JsonSchemaValidator, PathSegment, SchemaError,
    TypedValidator, Validator, ValidatorExt,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
