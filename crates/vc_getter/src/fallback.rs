use vc_value::Value;

/// The optional fallback of a getter.
///
/// `Unset` is distinct from every value, [`Value::None`] included:
///
/// ```
/// use vc_getter::{AttrGetter, Fallback, Getter, Value};
/// use vc_value::object::Namespace;
///
/// let target = Namespace::new("C").into_value();
///
/// // No fallback: the failure propagates.
/// let strict = AttrGetter::new(["x"]).unwrap();
/// assert!(strict.get(&target).is_err());
///
/// // A `None` fallback is still a fallback.
/// let lenient = strict.with_fallback(Fallback::Value(Value::None));
/// assert_eq!(lenient.get(&target).unwrap(), Value::None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Fallback {
    /// Failures propagate as errors.
    #[default]
    Unset,
    /// Failures are replaced by this value.
    Value(Value),
}

impl Fallback {
    #[inline]
    pub fn is_set(&self) -> bool {
        matches!(self, Fallback::Value(_))
    }

    #[inline]
    pub fn value(&self) -> Option<&Value> {
        match self {
            Fallback::Unset => None,
            Fallback::Value(value) => Some(value),
        }
    }
}

impl From<Option<Value>> for Fallback {
    #[inline]
    fn from(value: Option<Value>) -> Self {
        value.map_or(Fallback::Unset, Fallback::Value)
    }
}

#[cfg(test)]
mod tests {
    use super::Fallback;
    use vc_value::Value;

    #[test]
    fn unset_is_not_none() {
        assert_ne!(Fallback::Unset, Fallback::Value(Value::None));
        assert!(!Fallback::default().is_set());
        assert_eq!(Fallback::from(Some(Value::None)).value(), Some(&Value::None));
        assert_eq!(Fallback::from(None), Fallback::Unset);
    }
}
