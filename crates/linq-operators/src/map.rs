//! Select: project every element through a callback.

use crate::queryable::Queryable;
use crate::traits::OpError;

impl<T> Queryable<T> {
    /// Replace each element with `projector(element)`, one-to-one and in
    /// order. The first projector failure aborts and becomes the fault.
    pub fn select<U, F>(self, mut projector: F) -> Queryable<U>
    where
        F: FnMut(&T) -> Result<U, OpError>,
    {
        self.apply("select", move |values, _| {
            values.iter().map(|v| projector(v)).collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{OpError, Queryable};

    #[test]
    fn projection_preserves_cardinality() {
        let out = Queryable::new(vec![1, 2, 3])
            .select(|v| Ok(format!("#{}", v)))
            .results()
            .unwrap();
        assert_eq!(out, vec!["#1", "#2", "#3"]);
    }

    #[test]
    fn projector_failure_discards_partial_output() {
        let mut calls = 0;
        let out = Queryable::new(vec![1, 2, 3]).select(|v| {
            calls += 1;
            if *v == 2 {
                Err(OpError::msg("cannot project 2"))
            } else {
                Ok(v * 10)
            }
        });
        assert!(out.is_faulted());
        assert_eq!(calls, 2);
    }

    #[test]
    fn carried_fault_skips_projector() {
        let out = Queryable::<i64>::from_option(None).select(|_| -> Result<i64, OpError> {
            panic!("projector must not run on a faulted pipeline")
        });
        assert!(matches!(out.results(), Err(OpError::NilInput)));
    }
}
