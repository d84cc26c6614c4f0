use alloc::vec::Vec;

use vc_value::{AccessError, ErrorKind, Value};

// -----------------------------------------------------------------------------
// Getter

/// The call contract shared by [`AttrGetter`] and [`ItemGetter`].
///
/// A getter is immutable; calling it never changes it, so the same getter
/// can be used from many threads at once.
///
/// [`AttrGetter`]: crate::AttrGetter
/// [`ItemGetter`]: crate::ItemGetter
pub trait Getter {
    /// Resolves every target against `target`.
    ///
    /// Returns the single resolved value for a getter with one target,
    /// and a [`Value::Tuple`] with one element per target otherwise.
    fn get(&self, target: &Value) -> Result<Value, AccessError>;

    /// Applies the getter to each value in turn, stopping at the first error.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_getter::{Getter, ItemGetter, Value};
    ///
    /// let rows = [Value::tuple(["a", "x"]), Value::tuple(["b", "y"])];
    /// let second = ItemGetter::new([1]).unwrap();
    ///
    /// assert_eq!(
    ///     second.get_all(&rows).unwrap(),
    ///     vec![Value::from("x"), Value::from("y")],
    /// );
    /// ```
    fn get_all<'v, I>(&self, targets: I) -> Result<Vec<Value>, AccessError>
    where
        I: IntoIterator<Item = &'v Value>,
        Self: Sized,
    {
        targets.into_iter().map(|target| self.get(target)).collect()
    }
}

impl<G: Getter + ?Sized> Getter for &G {
    #[inline]
    fn get(&self, target: &Value) -> Result<Value, AccessError> {
        (**self).get(target)
    }
}

// -----------------------------------------------------------------------------
// Shared helpers

/// Resolves each target and shapes the result.
///
/// One target yields its value as is, several yield a tuple.
/// The first error stops the pass.
#[inline]
pub(crate) fn assemble<T>(
    targets: &[T],
    mut resolve: impl FnMut(&T) -> Result<Value, AccessError>,
) -> Result<Value, AccessError> {
    if let [single] = targets {
        return resolve(single);
    }
    let mut values = Vec::with_capacity(targets.len());
    for target in targets {
        values.push(resolve(target)?);
    }
    Ok(Value::Tuple(values.into()))
}

/// Replaces an error of kind `absorbed` with `fallback`.
#[inline]
pub(crate) fn absorb(
    result: Result<Value, AccessError>,
    absorbed: ErrorKind,
    fallback: &Value,
) -> Result<Value, AccessError> {
    match result {
        Err(err) if err.kind() == absorbed => {
            log::trace!("using fallback {fallback} in place of: {err}");
            Ok(fallback.clone())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::{absorb, assemble};
    use alloc::vec;
    use vc_value::{AccessError, ErrorKind, Value};

    #[test]
    fn shape() {
        let one = assemble(&[1], |n| Ok(Value::Int(*n))).unwrap();
        assert_eq!(one, Value::Int(1));

        let many = assemble(&[1, 2], |n| Ok(Value::Int(*n))).unwrap();
        assert_eq!(many, Value::tuple([1, 2]));
    }

    #[test]
    fn first_error_stops() {
        let mut seen = vec![];
        let res = assemble(&[1, 2, 3], |n| {
            seen.push(*n);
            if *n == 2 {
                Err(AccessError::not_subscriptable("int"))
            } else {
                Ok(Value::Int(*n))
            }
        });
        assert!(res.is_err());
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn absorb_only_matching_kind() {
        let fallback = Value::from("F");
        let missing = Err(AccessError::missing_attribute("C", "x"));
        assert_eq!(
            absorb(missing.clone(), ErrorKind::MissingAttribute, &fallback).unwrap(),
            fallback
        );
        assert!(absorb(missing, ErrorKind::InvalidSubscript, &fallback).is_err());
        assert_eq!(
            absorb(Ok(Value::Int(1)), ErrorKind::MissingAttribute, &fallback).unwrap(),
            Value::Int(1)
        );
    }
}
