//! Terminal operators: quantifiers and positional/predicate search.
//!
//! All of these consume the pipeline and return `Result<_, OpError>`; a
//! carried fault comes back unchanged without any callback running.

use crate::queryable::Queryable;
use crate::traits::OpError;

impl<T> Queryable<T> {
    pub fn count(self) -> Result<usize, OpError> {
        self.terminal("count", |values| Ok(values.len()))
    }

    /// Number of elements the predicate accepts. A predicate failure
    /// discards the partial count.
    pub fn count_by<F>(self, mut predicate: F) -> Result<usize, OpError>
    where
        F: FnMut(&T) -> Result<bool, OpError>,
    {
        self.terminal("count_by", move |values| {
            let mut n = 0;
            for v in &values {
                if predicate(v)? {
                    n += 1;
                }
            }
            Ok(n)
        })
    }

    pub fn any(self) -> Result<bool, OpError> {
        self.terminal("any", |values| Ok(!values.is_empty()))
    }

    /// True at the first accepted element; the rest is not scanned.
    pub fn any_with<F>(self, mut predicate: F) -> Result<bool, OpError>
    where
        F: FnMut(&T) -> Result<bool, OpError>,
    {
        self.terminal("any_with", move |values| {
            for v in &values {
                if predicate(v)? {
                    return Ok(true);
                }
            }
            Ok(false)
        })
    }

    /// True iff the predicate holds for every element (vacuously true when
    /// empty). A `false` does not stop the scan: every element is still
    /// visited so a later predicate failure surfaces as the fault.
    pub fn all<F>(self, mut predicate: F) -> Result<bool, OpError>
    where
        F: FnMut(&T) -> Result<bool, OpError>,
    {
        self.terminal("all", move |values| {
            let mut all = true;
            for v in &values {
                all &= predicate(v)?;
            }
            Ok(all)
        })
    }

    /// True iff exactly one element satisfies the predicate.
    pub fn single<F>(self, predicate: F) -> Result<bool, OpError>
    where
        F: FnMut(&T) -> Result<bool, OpError>,
    {
        Ok(self.count_by(predicate)? == 1)
    }

    pub fn first(self) -> Result<T, OpError> {
        self.terminal("first", |values| {
            values.into_iter().next().ok_or(OpError::NoElement)
        })
    }

    /// First element, or `None` when the sequence is empty.
    pub fn first_or_none(self) -> Result<Option<T>, OpError> {
        self.terminal("first_or_none", |values| Ok(values.into_iter().next()))
    }

    pub fn first_by<F>(self, predicate: F) -> Result<T, OpError>
    where
        F: FnMut(&T) -> Result<bool, OpError>,
    {
        self.first_or_none_by(predicate)?.ok_or(OpError::NoElement)
    }

    /// First element the predicate accepts, scanning from the front.
    pub fn first_or_none_by<F>(self, predicate: F) -> Result<Option<T>, OpError>
    where
        F: FnMut(&T) -> Result<bool, OpError>,
    {
        self.terminal("first_by", move |values| scan(values.into_iter(), predicate))
    }

    pub fn last(self) -> Result<T, OpError> {
        self.terminal("last", |mut values| values.pop().ok_or(OpError::NoElement))
    }

    pub fn last_or_none(self) -> Result<Option<T>, OpError> {
        self.terminal("last_or_none", |mut values| Ok(values.pop()))
    }

    pub fn last_by<F>(self, predicate: F) -> Result<T, OpError>
    where
        F: FnMut(&T) -> Result<bool, OpError>,
    {
        self.last_or_none_by(predicate)?.ok_or(OpError::NoElement)
    }

    /// Last element the predicate accepts, scanning from the back.
    pub fn last_or_none_by<F>(self, predicate: F) -> Result<Option<T>, OpError>
    where
        F: FnMut(&T) -> Result<bool, OpError>,
    {
        self.terminal("last_by", move |values| scan(values.into_iter().rev(), predicate))
    }

    /// Element at `index`, `NoElement` when out of range.
    pub fn element_at(self, index: usize) -> Result<T, OpError> {
        self.element_at_or_none(index)?.ok_or(OpError::NoElement)
    }

    pub fn element_at_or_none(self, index: usize) -> Result<Option<T>, OpError> {
        self.terminal("element_at", move |values| Ok(values.into_iter().nth(index)))
    }

    pub fn contains(self, needle: &T) -> Result<bool, OpError>
    where
        T: PartialEq,
    {
        self.terminal("contains", |values| Ok(values.contains(needle)))
    }
}

/// First match in iteration order; a predicate failure before a match wins.
fn scan<T, I, F>(iter: I, mut predicate: F) -> Result<Option<T>, OpError>
where
    I: Iterator<Item = T>,
    F: FnMut(&T) -> Result<bool, OpError>,
{
    for v in iter {
        if predicate(&v)? {
            return Ok(Some(v));
        }
    }
    Ok(None)
}
