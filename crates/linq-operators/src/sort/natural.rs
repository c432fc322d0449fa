//! Natural (comparator-free) order for the int/text/float kinds.

use linq_core::types::{OrderKind, Orderable};

use crate::queryable::Queryable;
use crate::traits::OpError;

impl<T> Queryable<T>
where
    T: Orderable,
{
    /// Ascending natural sort. The first element picks the kind and every
    /// other element must share it; otherwise the pipeline faults with
    /// `UnsupportedType`. Empty input is returned untouched.
    pub fn order(self) -> Self {
        self.apply("order", |values, _| sort_natural(values, false))
    }

    /// Descending natural sort, same kind rules as `order`.
    pub fn order_descending(self) -> Self {
        self.apply("order_descending", |values, _| {
            sort_natural(values, true)
        })
    }
}

fn sort_natural<T: Orderable>(mut values: Vec<T>, descending: bool) -> Result<Vec<T>, OpError> {
    let kind = match values.first() {
        None => return Ok(values),
        Some(v) => v.order_kind().ok_or_else(|| OpError::UnsupportedType {
            kind: "non-scalar".to_string(),
        })?,
    };
    check_uniform(&values, kind)?;

    if descending {
        values.sort_unstable_by(|a, b| b.natural_cmp(a));
    } else {
        values.sort_unstable_by(|a, b| a.natural_cmp(b));
    }
    Ok(values)
}

fn check_uniform<T: Orderable>(values: &[T], kind: OrderKind) -> Result<(), OpError> {
    match values.iter().find_map(|v| match v.order_kind() {
        Some(k) if k == kind => None,
        Some(k) => Some(format!("mixed {}/{}", kind, k)),
        None => Some(format!("mixed {}/non-scalar", kind)),
    }) {
        Some(kind) => Err(OpError::UnsupportedType { kind }),
        None => Ok(()),
    }
}
