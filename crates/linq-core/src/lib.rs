#![forbid(unsafe_code)]
//! linq-core: value model, natural-order capability, and configuration.
//!
//! Pure data only. Operators live in `linq-operators` and depend on this
//! crate for `Scalar`, `Orderable`, and `PipelineConfig`.

pub mod config;
pub mod error;
pub mod prelude;
pub mod types;

pub use config::{PipelineConfig, WindowPolicy};
pub use error::{Error, Result};
pub use types::{scalars_from_json, OrderKind, Orderable, Scalar};
