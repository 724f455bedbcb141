//! Type-checked chain construction
//!
//! [`TypedChain`] carries the previous step's output type in a phantom
//! parameter, so each appended transformation must accept exactly what the
//! step before it produced. The first step's input is unconstrained
//! (`serde_json::Value` accepts any shape). `build` lowers to the erased
//! [`Chain`] consumed by the runner.

use crate::chain::Chain;
use crate::step::Step;
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use vershift_schema::Validator;

/// Chain builder with compile-time type continuity
///
/// # Example
///
/// ```rust,ignore
/// let chain = TypedChain::new()
///     .step(1, name_schema, |_: Value| Ok(Named { name: "default".into() }))
///     .step(2, title_schema, |state: Named| Ok(Titled { title: state.name }))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct TypedChain<S> {
    chain: Chain,
    _state: PhantomData<fn() -> S>,
}

impl TypedChain<Value> {
    /// Start a chain; the first step accepts any input shape
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            chain: Chain::empty(),
            _state: PhantomData,
        }
    }
}

impl Default for TypedChain<Value> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> TypedChain<S>
where
    S: DeserializeOwned + 'static,
{
    /// Append a step whose transformation consumes the previous output type
    #[must_use]
    pub fn step<T, F>(self, version: u64, schema: impl Validator + 'static, up: F) -> TypedChain<T>
    where
        T: Serialize + 'static,
        F: Fn(S) -> Result<T> + Send + Sync + 'static,
    {
        TypedChain {
            chain: self.chain.append(Step::new(version, schema, up)),
            _state: PhantomData,
        }
    }
}

impl<S> TypedChain<S> {
    /// Lower to the erased chain
    #[must_use]
    pub fn build(self) -> Chain {
        self.chain
    }
}
