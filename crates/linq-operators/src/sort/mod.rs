//! Ordering: natural order for `Orderable` values, caller order otherwise.
//!
//! `order_by` drives a merge sort with the caller's strict less-than. The
//! merge only ever asks "is b before a?", so an inconsistent predicate
//! yields some permutation of the input, never a panic.

mod merge;
mod natural;

pub(crate) use merge::merge_sort_by;

use linq_core::types::Orderable;

use crate::queryable::Queryable;

impl<T> Queryable<T> {
    /// Sort with `less(a, b)` meaning "a sorts before b". Equal elements
    /// keep their input order.
    pub fn order_by<F>(self, mut less: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.apply("order_by", move |values, _| Ok(merge_sort_by(values, &mut less)))
    }

    /// Sort by a naturally ordered key projected from each element. Equal
    /// keys keep their input order.
    pub fn order_by_key<K, F>(self, mut key: F) -> Self
    where
        K: Orderable,
        F: FnMut(&T) -> K,
    {
        self.apply("order_by_key", move |values, _| {
            let keyed: Vec<(K, T)> = values.into_iter().map(|v| (key(&v), v)).collect();
            let keyed = merge_sort_by(keyed, &mut |a: &(K, T), b: &(K, T)| {
                a.0.natural_cmp(&b.0).is_lt()
            });
            Ok(keyed.into_iter().map(|(_, v)| v).collect())
        })
    }
}
