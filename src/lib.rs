#![forbid(unsafe_code)]
//! linq: LINQ-style eager query pipelines over in-memory sequences.
//!
//! Re-exports the value model (`linq-core`) and the operators
//! (`linq-operators`) behind one dependency.

pub use linq_core::{
    config::{PipelineConfig, WindowPolicy},
    scalars_from_json, OrderKind, Orderable, Scalar,
};
pub use linq_operators::{BoxedFault, OpError, Queryable};

pub mod prelude {
    pub use linq_core::prelude::*;
    pub use linq_operators::{OpError, Queryable};
}
