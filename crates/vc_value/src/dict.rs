use core::fmt;

use foldhash::fast::FixedState;
use hashbrown::HashMap;

use crate::{AccessError, Key, Mapping, Value};

/// A fixed hash seed, so iteration order only depends on the contents.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x95EE04C4F326B271);

// -----------------------------------------------------------------------------
// Dict

/// A hash map from [`Key`] to [`Value`].
///
/// The only built-in value with a native get-with-default capability,
/// see [`Mapping`].
///
/// # Examples
///
/// ```
/// use vc_value::{Dict, Mapping, Value};
///
/// let dict: Dict = [("a", 1), ("b", 2)].into_iter().collect();
/// let target = Value::from(dict);
///
/// assert_eq!(target.get_item(&"a".into()).unwrap(), Value::Int(1));
/// assert!(target.get_item(&"z".into()).is_err());
///
/// let mapping = target.as_mapping().unwrap();
/// assert_eq!(mapping.get_or(&"z".into(), &Value::Int(0)).unwrap(), Value::Int(0));
/// ```
#[derive(Clone, PartialEq)]
pub struct Dict {
    entries: HashMap<Key, Value, FixedState>,
}

impl Default for Dict {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Dict {
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(FIXED_HASH_STATE),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity_and_hasher(capacity, FIXED_HASH_STATE),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts an entry, returning the previous value for the key.
    #[inline]
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Inserts an entry keyed by an arbitrary value.
    ///
    /// Fails if `key` is not hashable.
    pub fn try_insert(&mut self, key: &Value, value: impl Into<Value>) -> Result<Option<Value>, AccessError> {
        let key = Key::try_from(key)?;
        Ok(self.entries.insert(key, value.into()))
    }

    #[inline]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Looks up an arbitrary value used as a key.
    ///
    /// Fails if `key` is not hashable.
    pub fn lookup(&self, key: &Value) -> Result<Option<&Value>, AccessError> {
        let key = Key::try_from(key)?;
        Ok(self.entries.get(&key))
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// Subscript semantics: a missing key is an error.
    pub(crate) fn get_item(&self, key: &Value) -> Result<Value, AccessError> {
        match self.lookup(key)? {
            Some(value) => Ok(value.clone()),
            None => Err(AccessError::MissingKey {
                key: alloc::format!("{key}"),
            }),
        }
    }
}

impl Mapping for Dict {
    fn get_or(&self, key: &Value, default: &Value) -> Result<Value, AccessError> {
        // An unhashable key fails the subscript, so it yields `default` too.
        Ok(match self.lookup(key) {
            Ok(Some(value)) => value.clone(),
            Ok(None) | Err(_) => default.clone(),
        })
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Dict {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut dict = Dict::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            dict.insert(key, value);
        }
        dict
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for Dict {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl fmt::Display for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for Dict {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::Dict;
    use crate::{ErrorKind, Key, Mapping, Value};
    use alloc::string::ToString;

    #[test]
    fn missing_key_message() {
        let dict: Dict = [("a", 1)].into_iter().collect();
        let err = dict.get_item(&"b".into()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubscript);
        assert_eq!(err.to_string(), "key 'b' not found");
    }

    #[test]
    fn unhashable_key() {
        let dict = Dict::new();
        let key = Value::list([1]);
        let err = dict.get_item(&key).unwrap_err();
        assert_eq!(err.to_string(), "unhashable type: 'list'");
        assert_eq!(dict.get_or(&key, &Value::Int(7)).unwrap(), Value::Int(7));
    }

    #[test]
    fn tuple_keys() {
        let mut dict = Dict::new();
        dict.try_insert(&Value::tuple([1, 2]), "pair").unwrap();
        assert!(dict.contains_key(&Key::Tuple([Key::Int(1), Key::Int(2)].into())));
        assert_eq!(dict.get_item(&Value::tuple([1, 2])).unwrap(), Value::from("pair"));
    }

    #[test]
    fn get_or_agrees_with_get_item() {
        let dict: Dict = [("a", Value::None)].into_iter().collect();
        let default = Value::from("d");
        for key in [Value::from("a"), Value::from("b"), Value::list([0])] {
            let generic = dict.get_item(&key).unwrap_or_else(|_| default.clone());
            assert_eq!(dict.get_or(&key, &default).unwrap(), generic);
        }
    }
}
