//! Fault type and callback contracts shared by every operator.
//!
//! Callbacks are plain closures:
//! - predicates: `FnMut(&T) -> Result<bool, OpError>`
//! - projectors: `FnMut(&T) -> Result<U, OpError>`
//! - equality comparers: `FnMut(&T, &T) -> Result<bool, OpError>`
//! - less-than comparators: `FnMut(&T, &T) -> bool` (no fault channel)
//!
//! An `Err` returned from a callback becomes the pipeline fault verbatim.

use std::sync::Arc;

use thiserror::Error;

/// Caller-supplied error carried as a pipeline fault.
pub type BoxedFault = Arc<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Clone, Error)]
pub enum OpError {
    #[error("linq: nil input passed to from_option")]
    NilInput,

    #[error("linq: element satisfying the conditions does not exist")]
    NoElement,

    #[error("linq: {op} parameter cannot be negative (got {value})")]
    NegativeParam { op: &'static str, value: i64 },

    #[error("linq: sorting {kind} values with order is not supported, use order_by")]
    UnsupportedType { kind: String },

    #[error("{0}")]
    Callback(BoxedFault),

    #[error("{0}")]
    Message(String),
}

impl OpError {
    /// Wrap any caller error so it can be returned from a callback.
    pub fn callback<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        OpError::Callback(Arc::new(err))
    }

    pub fn msg(msg: impl Into<String>) -> Self {
        OpError::Message(msg.into())
    }

    /// Recover the caller's concrete error from a `Callback` fault.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            OpError::Callback(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// True when both values are the very same `Callback` fault object.
    pub fn is_same_fault(&self, other: &OpError) -> bool {
        match (self, other) {
            (OpError::Callback(a), OpError::Callback(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
