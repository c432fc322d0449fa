//! Windowing: Take, Skip, Reverse.
//!
//! Counts above the length clamp to the length. Negative counts clamp to
//! zero under `WindowPolicy::Clamp` and fault with `NegativeParam` under
//! `WindowPolicy::Strict`.

use linq_core::config::{PipelineConfig, WindowPolicy};

use crate::queryable::Queryable;
use crate::traits::OpError;

impl<T> Queryable<T> {
    /// The first `n` elements.
    pub fn take(self, n: i64) -> Self {
        self.apply("take", move |mut values, cfg| {
            let n = clamp_count("take", n, values.len(), cfg)?;
            values.truncate(n);
            Ok(values)
        })
    }

    /// Everything after the first `n` elements.
    pub fn skip(self, n: i64) -> Self {
        self.apply("skip", move |mut values, cfg| {
            let n = clamp_count("skip", n, values.len(), cfg)?;
            Ok(values.split_off(n))
        })
    }

    /// The elements in reverse order.
    pub fn reverse(self) -> Self {
        self.apply("reverse", |mut values, _| {
            values.reverse();
            Ok(values)
        })
    }
}

fn clamp_count(
    op: &'static str,
    n: i64,
    len: usize,
    cfg: &PipelineConfig,
) -> Result<usize, OpError> {
    if n < 0 {
        return match cfg.window_policy {
            WindowPolicy::Clamp => Ok(0),
            WindowPolicy::Strict => Err(OpError::NegativeParam { op, value: n }),
        };
    }
    Ok(usize::try_from(n).map_or(len, |n| n.min(len)))
}

#[cfg(test)]
mod tests {
    use linq_core::config::PipelineConfig;

    use crate::{OpError, Queryable};

    fn q() -> Queryable<i64> {
        Queryable::new(vec![1, 2, 3, 4, 5])
    }

    #[test]
    fn take_and_skip_clamp() {
        assert_eq!(q().take(2).results().unwrap(), vec![1, 2]);
        assert_eq!(q().take(-3).results().unwrap(), Vec::<i64>::new());
        assert_eq!(q().take(99).results().unwrap(), vec![1, 2, 3, 4, 5]);

        assert_eq!(q().skip(2).results().unwrap(), vec![3, 4, 5]);
        assert_eq!(q().skip(-1).results().unwrap(), vec![1, 2, 3, 4, 5]);
        assert_eq!(q().skip(99).results().unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn take_then_skip_reconstructs_input() {
        for n in -2..8 {
            let mut joined = q().take(n).results().unwrap();
            joined.extend(q().skip(n).results().unwrap());
            assert_eq!(joined, vec![1, 2, 3, 4, 5], "n = {}", n);
        }
    }

    #[test]
    fn strict_policy_rejects_negative_counts() {
        let strict = || Queryable::with_config(Some(vec![1, 2, 3]), PipelineConfig::strict());

        match strict().take(-1).results() {
            Err(OpError::NegativeParam { op, value }) => {
                assert_eq!(op, "take");
                assert_eq!(value, -1);
            }
            other => panic!("expected NegativeParam, got {:?}", other),
        }
        assert!(matches!(
            strict().skip(-4).results(),
            Err(OpError::NegativeParam { op: "skip", .. })
        ));
        assert_eq!(strict().take(10).results().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn reverse_reverses() {
        assert_eq!(q().reverse().results().unwrap(), vec![5, 4, 3, 2, 1]);
        assert!(Queryable::new(Vec::<i64>::new()).reverse().results().unwrap().is_empty());
    }
}
