use alloc::string::String;
use core::fmt;

use crate::{AccessError, Value};

// -----------------------------------------------------------------------------
// Slice

/// A `start:stop:step` subscript key.
///
/// Missing bounds default the usual way: `start` and `stop` to the
/// ends of the sequence, `step` to `1`. Negative bounds count from the end.
///
/// # Examples
///
/// ```
/// use vc_value::{Slice, Value};
///
/// let list = Value::list([0, 1, 2, 3, 4]);
///
/// let key = Value::from(Slice::new(Some(1), Some(-1), None));
/// assert_eq!(list.get_item(&key).unwrap(), Value::list([1, 2, 3]));
///
/// let key = Value::from(Slice::new(None, None, Some(-2)));
/// assert_eq!(list.get_item(&key).unwrap(), Value::list([4, 2, 0]));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Slice {
    pub start: Option<i64>,
    pub stop: Option<i64>,
    pub step: Option<i64>,
}

/// Concrete positions selected by a [`Slice`] on a sequence of known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SliceIndices {
    start: i64,
    step: i64,
    len: usize,
}

impl Slice {
    #[inline]
    pub const fn new(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Self {
        Self { start, stop, step }
    }

    /// Resolves the slice against a sequence of `len` elements.
    ///
    /// Fails only when `step` is zero, which is not a subscript failure.
    pub(crate) fn indices(&self, len: usize) -> Result<SliceIndices, AccessError> {
        let step = match self.step {
            None => 1,
            Some(0) => return Err(AccessError::InvalidValue("slice step cannot be zero".into())),
            // keep `-step` representable
            Some(step) => step.max(-i64::MAX),
        };

        let len = i64::try_from(len).unwrap_or(i64::MAX);

        let clamp = |bound: i64| -> i64 {
            if bound < 0 {
                let bound = bound.saturating_add(len);
                if bound < 0 {
                    if step < 0 { -1 } else { 0 }
                } else {
                    bound
                }
            } else if bound >= len {
                if step < 0 { len - 1 } else { len }
            } else {
                bound
            }
        };

        let (start, stop) = if step > 0 {
            (
                self.start.map_or(0, clamp),
                self.stop.map_or(len, clamp),
            )
        } else {
            (
                self.start.map_or(len - 1, clamp),
                self.stop.map_or(-1, clamp),
            )
        };

        let count = if step > 0 {
            if start < stop {
                (stop - start - 1) / step + 1
            } else {
                0
            }
        } else if stop < start {
            (start - stop - 1) / (-step) + 1
        } else {
            0
        };

        Ok(SliceIndices {
            start,
            step,
            len: usize::try_from(count).unwrap_or(0),
        })
    }

    /// Resolves the built-in `start`, `stop` and `step` attributes.
    pub(crate) fn attr(&self, name: &str) -> Result<Value, AccessError> {
        let bound = match name {
            "start" => self.start,
            "stop" => self.stop,
            "step" => self.step,
            _ => return Err(AccessError::missing_attribute("slice", name)),
        };
        Ok(bound.into())
    }
}

impl SliceIndices {
    /// Number of selected positions.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Iterates over the selected positions, in order.
    pub(crate) fn iter(self) -> impl Iterator<Item = usize> {
        (0..self.len).map(move |n| {
            // every position lies in `0..len` by construction
            (self.start + self.step * n as i64) as usize
        })
    }
}

fn write_bound(f: &mut fmt::Formatter<'_>, bound: Option<i64>) -> fmt::Result {
    match bound {
        Some(bound) => write!(f, "{bound}"),
        None => f.write_str("None"),
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("slice(")?;
        write_bound(f, self.start)?;
        f.write_str(", ")?;
        write_bound(f, self.stop)?;
        f.write_str(", ")?;
        write_bound(f, self.step)?;
        f.write_str(")")
    }
}

/// Applies `slice` to `items`, producing the selected elements.
pub(crate) fn select<T: Clone>(items: &[T], slice: &Slice) -> Result<alloc::vec::Vec<T>, AccessError> {
    let indices = slice.indices(items.len())?;
    let mut out = alloc::vec::Vec::with_capacity(indices.len());
    out.extend(indices.iter().map(|index| items[index].clone()));
    Ok(out)
}

/// Applies `slice` to the characters of `s`.
pub(crate) fn select_chars(s: &str, slice: &Slice) -> Result<String, AccessError> {
    let chars: alloc::vec::Vec<char> = s.chars().collect();
    Ok(select(&chars, slice)?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::{Slice, select};
    use crate::ErrorKind;
    use alloc::vec;
    use alloc::vec::Vec;

    fn run(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Vec<i32> {
        select(&[0, 1, 2, 3, 4, 5], &Slice::new(start, stop, step)).unwrap()
    }

    #[test]
    fn forward() {
        assert_eq!(run(None, None, None), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(run(Some(2), None, None), vec![2, 3, 4, 5]);
        assert_eq!(run(Some(-2), None, None), vec![4, 5]);
        assert_eq!(run(Some(1), Some(100), Some(2)), vec![1, 3, 5]);
        assert_eq!(run(Some(-100), Some(2), None), vec![0, 1]);
        assert_eq!(run(Some(4), Some(2), None), Vec::<i32>::new());
    }

    #[test]
    fn backward() {
        assert_eq!(run(None, None, Some(-1)), vec![5, 4, 3, 2, 1, 0]);
        assert_eq!(run(Some(4), Some(1), Some(-2)), vec![4, 2]);
        assert_eq!(run(Some(100), None, Some(-3)), vec![5, 2]);
        assert_eq!(run(None, Some(-100), Some(-1)), vec![5, 4, 3, 2, 1, 0]);
        assert_eq!(run(Some(1), Some(4), Some(-1)), Vec::<i32>::new());
        assert_eq!(run(None, None, Some(i64::MIN)), vec![5]);
    }

    #[test]
    fn zero_step() {
        let err = select(&[1, 2], &Slice::new(None, None, Some(0))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }

    #[test]
    fn empty_sequence() {
        let empty: [i32; 0] = [];
        assert!(select(&empty, &Slice::new(None, None, Some(-1))).unwrap().is_empty());
        assert!(select(&empty, &Slice::default()).unwrap().is_empty());
    }
}
