//! Subscript getters.

use alloc::boxed::Box;
use core::fmt;

use vc_value::{AccessError, ErrorKind, Mapping, Value};

use crate::getter::{absorb, assemble};
use crate::{BuildError, Fallback, Getter};

// -----------------------------------------------------------------------------
// FastPath

/// Which targets an [`ItemGetter`] with a fallback queries through their
/// native [`Mapping`] lookup instead of subscripting and absorbing the error.
///
/// The choice never changes results, only how a miss is computed.
/// Without a fallback the policy is never consulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FastPath {
    /// Always subscript.
    Disabled,
    /// Only built-in [`Value::Dict`] targets.
    Builtin,
    /// Any target whose [`Value::as_mapping`] is `Some`.
    #[default]
    Capability,
}

impl FastPath {
    /// Returns the mapping lookup to use for `target`, if any.
    #[inline]
    pub fn probe(self, target: &Value) -> Option<&dyn Mapping> {
        match self {
            FastPath::Disabled => None,
            FastPath::Builtin => match target {
                Value::Dict(dict) => Some(&**dict as &dyn Mapping),
                _ => None,
            },
            FastPath::Capability => target.as_mapping(),
        }
    }
}

// -----------------------------------------------------------------------------
// ItemGetter

/// Resolves one or more subscript keys.
///
/// Without a fallback, the first failing key's error is returned as is,
/// exactly as a direct [`Value::get_item`] would report it.
/// With a fallback, an invalid subscript (missing key, index out of range,
/// wrong key type, unsubscriptable target) replaces that key's result with
/// the fallback; the other keys are unaffected. Errors of any other kind
/// always propagate.
///
/// # Examples
///
/// ```
/// use vc_getter::{Getter, ItemGetter, Value};
///
/// let list = Value::list(["foo", "bar", "baz"]);
///
/// let getter = ItemGetter::new([5]).unwrap().with_default("XYZ");
/// assert_eq!(getter.get(&list).unwrap(), Value::from("XYZ"));
///
/// let getter = ItemGetter::new([1, 5]).unwrap().with_default("XYZ");
/// assert_eq!(getter.get(&list).unwrap(), Value::tuple(["bar", "XYZ"]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ItemGetter {
    keys: Box<[Value]>,
    fallback: Fallback,
    fast_path: FastPath,
}

impl ItemGetter {
    /// Builds a getter with no fallback.
    pub fn new<I>(keys: I) -> Result<Self, BuildError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let keys: Box<[Value]> = keys.into_iter().map(Into::into).collect();

        if keys.is_empty() {
            return Err(BuildError::NoTargets("itemgetter"));
        }

        log::debug!("built itemgetter over {} key(s)", keys.len());
        Ok(Self {
            keys,
            fallback: Fallback::Unset,
            fast_path: FastPath::default(),
        })
    }

    /// Sets `value` as the fallback.
    #[inline]
    pub fn with_default(self, value: impl Into<Value>) -> Self {
        self.with_fallback(Fallback::Value(value.into()))
    }

    #[inline]
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    #[inline]
    pub fn with_fast_path(mut self, fast_path: FastPath) -> Self {
        self.fast_path = fast_path;
        self
    }

    #[inline]
    pub fn keys(&self) -> &[Value] {
        &self.keys
    }

    #[inline]
    pub fn fallback(&self) -> &Fallback {
        &self.fallback
    }

    #[inline]
    pub fn fast_path(&self) -> FastPath {
        self.fast_path
    }
}

impl Getter for ItemGetter {
    fn get(&self, target: &Value) -> Result<Value, AccessError> {
        let Fallback::Value(fallback) = &self.fallback else {
            return assemble(&self.keys, |key| target.get_item(key));
        };

        match self.fast_path.probe(target) {
            Some(mapping) => assemble(&self.keys, |key| {
                absorb(
                    mapping.get_or(key, fallback),
                    ErrorKind::InvalidSubscript,
                    fallback,
                )
            }),
            None => assemble(&self.keys, |key| {
                absorb(target.get_item(key), ErrorKind::InvalidSubscript, fallback)
            }),
        }
    }
}

impl fmt::Display for ItemGetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("itemgetter(")?;
        for (index, key) in self.keys.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(key, f)?;
        }
        if let Fallback::Value(fallback) = &self.fallback {
            write!(f, ", default={fallback}")?;
        }
        f.write_str(")")
    }
}

/// Builds an [`ItemGetter`] over `keys` with the given fallback.
///
/// # Examples
///
/// ```
/// use vc_getter::{Fallback, Getter, Value, itemgetter};
/// use vc_value::Dict;
///
/// let getter = itemgetter(["a", "b"], Fallback::Value(Value::tuple([1, 2]))).unwrap();
/// let empty = Value::from(Dict::new());
///
/// let pair = Value::tuple([1, 2]);
/// assert_eq!(getter.get(&empty).unwrap(), Value::tuple([pair.clone(), pair]));
/// ```
pub fn itemgetter<I>(keys: I, fallback: Fallback) -> Result<ItemGetter, BuildError>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Ok(ItemGetter::new(keys)?.with_fallback(fallback))
}
