use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::value::{write_float, write_str_repr};
use crate::{AccessError, Value};

// -----------------------------------------------------------------------------
// Key

/// The hashable subset of [`Value`], used as [`Dict`](crate::Dict) keys.
///
/// Lists, dicts, slices and objects are not hashable,
/// neither is a tuple containing one of them.
///
/// # Examples
///
/// ```
/// use vc_value::{Key, Value};
///
/// let key = Key::try_from(&Value::tuple([1, 2])).unwrap();
/// assert_eq!(key.to_string(), "(1, 2)");
///
/// let err = Key::try_from(&Value::list([1, 2])).unwrap_err();
/// assert_eq!(err.to_string(), "unhashable type: 'list'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    None,
    Bool(bool),
    Int(i64),
    /// Bit pattern of a float, see [`Key::float`].
    Float(u64),
    Str(Arc<str>),
    Tuple(Arc<[Key]>),
}

impl Key {
    /// Creates a float key.
    ///
    /// `-0.0` and `0.0` map to the same key, and so do all NaNs.
    pub fn float(value: f64) -> Self {
        let value = if value == 0.0 {
            0.0
        } else if value.is_nan() {
            f64::NAN
        } else {
            value
        };
        Self::Float(value.to_bits())
    }
}

impl TryFrom<&Value> for Key {
    type Error = AccessError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::None => Key::None,
            Value::Bool(b) => Key::Bool(*b),
            Value::Int(i) => Key::Int(*i),
            Value::Float(x) => Key::float(*x),
            Value::Str(s) => Key::Str(s.clone()),
            Value::Tuple(items) => Key::Tuple(
                items
                    .iter()
                    .map(Key::try_from)
                    .collect::<Result<Vec<_>, _>>()?
                    .into(),
            ),
            other => return Err(AccessError::unhashable(other.type_name())),
        })
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::None => Value::None,
            Key::Bool(b) => Value::Bool(b),
            Key::Int(i) => Value::Int(i),
            Key::Float(bits) => Value::Float(f64::from_bits(bits)),
            Key::Str(s) => Value::Str(s),
            Key::Tuple(items) => Value::Tuple(items.iter().cloned().map(Value::from).collect()),
        }
    }
}

impl From<&str> for Key {
    #[inline]
    fn from(value: &str) -> Self {
        Key::Str(value.into())
    }
}

impl From<String> for Key {
    #[inline]
    fn from(value: String) -> Self {
        Key::Str(value.into())
    }
}

impl From<i64> for Key {
    #[inline]
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    #[inline]
    fn from(value: i32) -> Self {
        Key::Int(value.into())
    }
}

impl From<bool> for Key {
    #[inline]
    fn from(value: bool) -> Self {
        Key::Bool(value)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::None => f.write_str("None"),
            Key::Bool(true) => f.write_str("True"),
            Key::Bool(false) => f.write_str("False"),
            Key::Int(i) => write!(f, "{i}"),
            Key::Float(bits) => write_float(f, f64::from_bits(*bits)),
            Key::Str(s) => write_str_repr(f, s),
            Key::Tuple(items) => {
                f.write_str("(")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
        }
    }
}
