//! Set algebra: Distinct, DistinctBy, Union, Intersect, Except.
//!
//! The hash-backed operators need `T: Eq + Hash` and return their results in
//! unspecified (hash iteration) order. `distinct_by` is the only
//! comparer-driven dedup: O(n^2) comparisons, leftmost representative kept,
//! original relative order preserved.

use std::collections::HashSet;
use std::hash::Hash;

use crate::queryable::Queryable;
use crate::traits::OpError;

impl<T> Queryable<T>
where
    T: Eq + Hash,
{
    /// Collapse duplicates by raw equality. Result order is unspecified.
    pub fn distinct(self) -> Self {
        self.apply("distinct", |values, _| {
            let set: HashSet<T> = values.into_iter().collect();
            Ok(set.into_iter().collect())
        })
    }

    /// Every element found in either sequence, once. Order is unspecified.
    pub fn union<I>(self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.apply("union", move |values, _| {
            let mut set: HashSet<T> = values.into_iter().collect();
            set.extend(other);
            Ok(set.into_iter().collect())
        })
    }

    /// Elements present in both sequences, once each. Order is unspecified.
    pub fn intersect<I>(self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.apply("intersect", move |values, _| {
            let mut left: HashSet<T> = values.into_iter().collect();
            let mut both = Vec::new();
            for v in other {
                // removing on first hit keeps later duplicates of `other` out
                if let Some(hit) = left.take(&v) {
                    both.push(hit);
                }
            }
            Ok(both)
        })
    }

    /// Distinct elements of this sequence that are absent from `other`.
    /// Order is unspecified.
    pub fn except<I>(self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.apply("except", move |values, _| {
            let mut set: HashSet<T> = values.into_iter().collect();
            for v in other {
                set.remove(&v);
            }
            Ok(set.into_iter().collect())
        })
    }
}

impl<T> Queryable<T> {
    /// Dedup with a caller equality. For each element not yet excluded, every
    /// later element it `equals` is excluded; the leftmost representative of
    /// each group survives in its original position. A comparer failure on
    /// any pair aborts and becomes the fault.
    pub fn distinct_by<F>(self, mut equals: F) -> Self
    where
        F: FnMut(&T, &T) -> Result<bool, OpError>,
    {
        self.apply("distinct_by", move |values, _| {
            let len = values.len();
            let mut excluded = vec![false; len];
            for i in 0..len {
                if excluded[i] {
                    continue;
                }
                for j in (i + 1)..len {
                    if equals(&values[i], &values[j])? {
                        excluded[j] = true;
                    }
                }
            }
            Ok(values
                .into_iter()
                .zip(excluded)
                .filter_map(|(v, skip)| (!skip).then_some(v))
                .collect())
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{OpError, Queryable};

    fn sorted(mut v: Vec<i64>) -> Vec<i64> {
        v.sort_unstable();
        v
    }

    #[test]
    fn distinct_collapses_duplicates() {
        let out = Queryable::new(vec![1, 2, 2, 3, 1]).distinct().results().unwrap();
        assert_eq!(sorted(out), vec![1, 2, 3]);
    }

    #[test]
    fn distinct_by_keeps_leftmost_in_order() {
        let out = Queryable::new(vec![13, 21, 3, 11, 22, 4])
            .distinct_by(|a, b| Ok(a % 10 == b % 10))
            .results()
            .unwrap();
        assert_eq!(out, vec![13, 21, 22, 4]);
    }

    #[test]
    fn distinct_by_skips_already_excluded_rows() {
        // 1 excludes both later 1s; the excluded ones never drive comparisons
        let mut pairs = Vec::new();
        let out = Queryable::new(vec![1, 1, 1])
            .distinct_by(|a, b| {
                pairs.push((*a, *b));
                Ok(a == b)
            })
            .results()
            .unwrap();
        assert_eq!(out, vec![1]);
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn distinct_by_comparer_failure_faults() {
        let out = Queryable::new(vec![1, 2, 3])
            .distinct_by(|_, b| if *b == 3 { Err(OpError::msg("cmp")) } else { Ok(false) })
            .results();
        assert!(matches!(out, Err(OpError::Message(m)) if m == "cmp"));
    }

    #[test]
    fn union_intersect_except() {
        let union = Queryable::new(vec![1, 2, 3]).union(vec![3, 4]).results().unwrap();
        assert_eq!(sorted(union), vec![1, 2, 3, 4]);

        let both = Queryable::new(vec![1, 2, 2, 3])
            .intersect(vec![2, 2, 3, 5])
            .results()
            .unwrap();
        assert_eq!(sorted(both), vec![2, 3]);

        let diff = Queryable::new(vec![1, 2, 2, 3]).except(vec![2, 9]).results().unwrap();
        assert_eq!(sorted(diff), vec![1, 3]);
    }

    #[test]
    fn set_ops_propagate_carried_fault() {
        let out = Queryable::<i64>::from_option(None).union(vec![1]).results();
        assert!(matches!(out, Err(OpError::NilInput)));
    }
}
