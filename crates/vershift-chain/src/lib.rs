//! Vershift Chain System
//!
//! Migration steps and immutable chains.
//!
//! # Core Concepts
//!
//! - [`Step`]: one versioned transformation plus its output schema
//! - [`Chain`]: ordered immutable sequence with persistent append
//! - [`TypedChain`]: compile-time type continuity between adjacent steps
//!
//! The chain layer is deliberately check-free: version ordering and
//! uniqueness are validated by the consumer, since a `&[Step]` can be
//! assembled without going through a builder at all.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod chain;
mod step;
mod typed;

pub use chain::Chain;
pub use step::Step;
pub use typed::TypedChain;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
