//! Where: keep the elements a predicate accepts.

use crate::queryable::Queryable;
use crate::traits::OpError;

impl<T> Queryable<T> {
    /// Keep every element for which `predicate` returns `true`, in input
    /// order. The first predicate failure aborts the scan and becomes the
    /// fault; elements kept so far are dropped.
    #[doc(alias = "where")]
    pub fn filter<F>(self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> Result<bool, OpError>,
    {
        self.apply("where", move |values, _| {
            let mut kept = Vec::with_capacity(values.len());
            for v in values {
                if predicate(&v)? {
                    kept.push(v);
                }
            }
            Ok(kept)
        })
    }
}
