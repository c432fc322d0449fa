//! Top-down merge sort over an owned vector, driven by a less-than predicate.

pub(crate) fn merge_sort_by<T, F>(mut values: Vec<T>, less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    if values.len() <= 1 {
        return values;
    }

    let right = values.split_off(values.len() / 2);
    let left = merge_sort_by(values, less);
    let right = merge_sort_by(right, less);
    merge(left, right, less)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => less(r, l),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        out.extend(next);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_ascending_with_strict_less() {
        let out = merge_sort_by(vec![5, 3, 9, 1, 3, 0], &mut |a: &i32, b: &i32| a < b);
        assert_eq!(out, vec![0, 1, 3, 3, 5, 9]);
    }

    #[test]
    fn trivial_inputs() {
        assert!(merge_sort_by(Vec::<i32>::new(), &mut |a: &i32, b: &i32| a < b).is_empty());
        assert_eq!(merge_sort_by(vec![7], &mut |a: &i32, b: &i32| a < b), vec![7]);
    }
}
