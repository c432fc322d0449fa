#![forbid(unsafe_code)]
//! linq-operators: eager query operators over an owned sequence.
//!
//! Design intent:
//! - Every operator evaluates eagerly and materializes its output.
//! - The pipeline state is `Result<Vec<T>, OpError>`; the first fault wins
//!   and every later operator passes it through untouched.
//! - Callbacks are required arguments, so there is no "missing callback"
//!   failure mode.
//!
//! ```
//! use linq_operators::Queryable;
//!
//! let top = Queryable::new(vec![5i64, 3, 8, 1, 9, 2])
//!     .filter(|v| Ok(*v > 2))
//!     .order()
//!     .take(2)
//!     .results()
//!     .unwrap();
//! assert_eq!(top, vec![3, 5]);
//! ```

mod metrics;
pub mod queryable;
pub mod traits;

pub mod filter;
pub mod map;
pub mod search;
pub mod set;
pub mod sort;
pub mod window;

pub use queryable::Queryable;
pub use traits::{BoxedFault, OpError};
