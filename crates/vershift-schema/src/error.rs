//! Error types for schema construction

/// Errors building a validator (not validation failures)
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Schema document failed to compile
    #[error("schema compilation failed: {0}")]
    Compile(String),

    /// Schema derivation from a Rust type failed
    #[error("schema derivation failed: {0}")]
    Derive(String),
}
