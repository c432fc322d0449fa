//! Convenient re-exports for downstream crates.

pub use crate::config::{PipelineConfig, WindowPolicy};
pub use crate::error::{Error, Result};
pub use crate::types::{scalars_from_json, OrderKind, Orderable, Scalar};
