//! Built-in transformers that ignore or echo their input.

use std::sync::Arc;

use crate::ports::{Transformer, TransformerRef};

/// Always returns a clone of the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantTransformer<O> {
    value: O,
}

impl<O> ConstantTransformer<O> {
    pub fn new(value: O) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &O {
        &self.value
    }
}

impl<I, O> Transformer<I, O> for ConstantTransformer<O>
where
    O: Clone + Send + Sync,
{
    fn transform(&self, _input: &I) -> O {
        self.value.clone()
    }
}

/// The null-identity transformer: ignores the input and yields `O::default()`.
///
/// For `Option<T>` outputs this is `None`, for `serde_json::Value` it is
/// `Value::Null`. Dispatchers fall back to it when no default is supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullTransformer;

impl<I, O: Default> Transformer<I, O> for NullTransformer {
    fn transform(&self, _input: &I) -> O {
        O::default()
    }
}

/// [`NullTransformer`] as a shared reference.
pub fn null_transformer<I, O: Default>() -> TransformerRef<I, O> {
    Arc::new(NullTransformer)
}

/// Returns a clone of the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityTransformer;

impl<T: Clone> Transformer<T, T> for IdentityTransformer {
    fn transform(&self, input: &T) -> T {
        input.clone()
    }
}
