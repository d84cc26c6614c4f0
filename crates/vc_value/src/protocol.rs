//! Built-in attribute and subscript resolution for [`Value`].

use alloc::string::ToString;

use crate::slice::{select, select_chars};
use crate::{AccessError, Value};

// -----------------------------------------------------------------------------
// Index helpers

/// Wraps a negative index around `len`, `None` when out of range.
fn normalize_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let index = if index < 0 { index.checked_add(len)? } else { index };
    if (0..len).contains(&index) {
        usize::try_from(index).ok()
    } else {
        None
    }
}

/// Integer value of an index key; `bool` counts as `0`/`1`.
fn index_of(key: &Value) -> Option<i64> {
    match key {
        Value::Int(i) => Some(*i),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

fn out_of_range(type_name: &str) -> AccessError {
    AccessError::IndexOutOfRange {
        type_name: type_name.to_string(),
    }
}

fn invalid_index(type_name: &str, key: &Value) -> AccessError {
    AccessError::InvalidIndexType {
        type_name: type_name.to_string(),
        key_type: key.type_name().to_string(),
    }
}

// -----------------------------------------------------------------------------
// Protocols

impl Value {
    /// Resolves the attribute `name`.
    ///
    /// User objects decide through [`Object::get_attr`]; slices expose
    /// `start`, `stop` and `step`; every other built-in has no attributes.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_value::{Slice, Value};
    ///
    /// let s = Value::from(Slice::new(Some(1), None, None));
    /// assert_eq!(s.get_attr("start").unwrap(), Value::Int(1));
    /// assert_eq!(s.get_attr("stop").unwrap(), Value::None);
    ///
    /// let err = Value::Int(3).get_attr("real").unwrap_err();
    /// assert_eq!(err.to_string(), "'int' object has no attribute 'real'");
    /// ```
    ///
    /// [`Object::get_attr`]: crate::Object::get_attr
    pub fn get_attr(&self, name: &str) -> Result<Value, AccessError> {
        match self {
            Value::Object(object) => object.get_attr(name),
            Value::Slice(slice) => slice.attr(name),
            other => Err(AccessError::missing_attribute(other.type_name(), name)),
        }
    }

    /// Resolves the subscript `self[key]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_value::Value;
    ///
    /// let list = Value::list(["foo", "bar", "baz"]);
    /// assert_eq!(list.get_item(&Value::Int(-1)).unwrap(), Value::from("baz"));
    ///
    /// let err = list.get_item(&Value::Int(5)).unwrap_err();
    /// assert_eq!(err.to_string(), "list index out of range");
    ///
    /// let err = list.get_item(&Value::from("a")).unwrap_err();
    /// assert_eq!(err.to_string(), "list indices must be integers or slices, not str");
    /// ```
    pub fn get_item(&self, key: &Value) -> Result<Value, AccessError> {
        match (self, key) {
            (Value::List(items), Value::Slice(slice)) => Ok(Value::List(select(items, slice)?.into())),
            (Value::Tuple(items), Value::Slice(slice)) => Ok(Value::Tuple(select(items, slice)?.into())),
            (Value::Str(s), Value::Slice(slice)) => Ok(Value::Str(select_chars(s, slice)?.into())),
            (Value::List(items) | Value::Tuple(items), key) => {
                let type_name = self.type_name();
                let index = index_of(key).ok_or_else(|| invalid_index(type_name, key))?;
                normalize_index(index, items.len())
                    .map(|index| items[index].clone())
                    .ok_or_else(|| out_of_range(type_name))
            }
            (Value::Str(s), key) => {
                let Some(index) = index_of(key) else {
                    return Err(AccessError::InvalidIndexType {
                        type_name: "string".to_string(),
                        key_type: key.type_name().to_string(),
                    });
                };
                normalize_index(index, s.chars().count())
                    .and_then(|index| s.chars().nth(index))
                    .map(|c| Value::from(c.to_string()))
                    .ok_or_else(|| out_of_range("string"))
            }
            (Value::Dict(dict), key) => dict.get_item(key),
            (Value::Object(object), key) => object.get_item(key),
            (other, _) => Err(AccessError::not_subscriptable(other.type_name())),
        }
    }
}
