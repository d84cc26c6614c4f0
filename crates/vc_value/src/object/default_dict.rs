use alloc::sync::Arc;
use core::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{AccessError, Dict, Key, Object, Value};

type Factory = Arc<dyn Fn() -> Value + Send + Sync>;

// -----------------------------------------------------------------------------
// DefaultDict

/// A dictionary that fills in missing keys on subscript.
///
/// Subscripting a missing (hashable) key stores and returns a fresh value
/// from the factory, so a subscript only ever fails for unhashable keys.
///
/// It deliberately exposes no [`Mapping`](crate::Mapping) capability:
/// a get-with-default lookup would skip the factory and change what
/// callers observe.
///
/// # Examples
///
/// ```
/// use vc_value::{Value, object::DefaultDict};
///
/// let counts = DefaultDict::new(|| Value::Int(0)).into_value();
///
/// assert_eq!(counts.get_item(&"seen".into()).unwrap(), Value::Int(0));
/// assert!(counts.as_mapping().is_none());
/// ```
pub struct DefaultDict {
    entries: Mutex<Dict>,
    factory: Factory,
}

impl DefaultDict {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self::from_dict(Dict::new(), factory)
    }

    pub fn from_dict<F>(dict: Dict, factory: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self {
            entries: Mutex::new(dict),
            factory: Arc::new(factory),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns a copy of the current entries.
    pub fn snapshot(&self) -> Dict {
        self.lock().clone()
    }

    #[inline]
    pub fn into_value(self) -> Value {
        Value::object(self)
    }

    fn lock(&self) -> MutexGuard<'_, Dict> {
        // A panicking factory leaves the table untouched.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Object for DefaultDict {
    fn type_name(&self) -> &str {
        "defaultdict"
    }

    fn get_item(&self, key: &Value) -> Result<Value, AccessError> {
        let key = Key::try_from(key)?;
        let mut entries = self.lock();
        if let Some(value) = entries.get(&key) {
            return Ok(value.clone());
        }
        let value = (self.factory)();
        entries.insert(key, value.clone());
        Ok(value)
    }

    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "defaultdict({})", &*self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::DefaultDict;
    use crate::{ErrorKind, Key, Object, Value};

    #[test]
    fn populates_missing_keys() {
        let dd = DefaultDict::new(|| Value::list::<[Value; 0]>([]));
        let value = Value::object(dd);
        let first = value.get_item(&"a".into()).unwrap();
        let second = value.get_item(&"a".into()).unwrap();
        assert!(first.is(&second));
    }

    #[test]
    fn snapshot_sees_populated_keys() {
        let dd = DefaultDict::new(|| Value::Int(0));
        let _ = dd.get_item(&Value::Int(3));
        assert_eq!(dd.len(), 1);
        assert!(dd.snapshot().contains_key(&Key::Int(3)));
    }

    #[test]
    fn unhashable_still_fails() {
        let dd = DefaultDict::new(|| Value::Int(0));
        let err = dd.get_item(&Value::list([1])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubscript);
        assert_eq!(dd.len(), 0);
    }
}
