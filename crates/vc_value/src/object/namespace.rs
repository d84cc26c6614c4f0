use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;

use foldhash::fast::FixedState;
use hashbrown::HashMap;

use crate::{AccessError, Object, Value};

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x6A09E667F3BCC908);

/// Resolves attributes a [`Namespace`] does not hold.
pub type MissingAttrHook = Arc<dyn Fn(&str) -> Result<Value, AccessError> + Send + Sync>;

// -----------------------------------------------------------------------------
// Namespace

/// A named bag of attributes.
///
/// Attribute lookup checks the stored attributes first, then the
/// missing-attribute hook if one is installed, and fails with
/// [`AccessError::MissingAttribute`] otherwise.
///
/// # Examples
///
/// ```
/// use vc_value::object::Namespace;
///
/// let inner = Namespace::new("D").into_value();
/// let outer = Namespace::new("C").with("D", inner.clone()).into_value();
///
/// assert!(outer.get_attr("D").unwrap().is(&inner));
/// assert!(outer.get_attr("E").is_err());
/// ```
///
/// An object with its own fallback logic never fails a lookup:
///
/// ```
/// use vc_value::{Value, object::Namespace};
///
/// let lenient = Namespace::new("Lenient")
///     .with_missing_hook(|name| Ok(Value::from(format!("<{name}>"))))
///     .into_value();
///
/// assert_eq!(lenient.get_attr("anything").unwrap(), Value::from("<anything>"));
/// ```
#[derive(Clone)]
pub struct Namespace {
    type_name: Box<str>,
    attrs: HashMap<Box<str>, Value, FixedState>,
    missing: Option<MissingAttrHook>,
}

impl Namespace {
    pub fn new(type_name: impl Into<Box<str>>) -> Self {
        Self {
            type_name: type_name.into(),
            attrs: HashMap::with_hasher(FIXED_HASH_STATE),
            missing: None,
        }
    }

    /// Adds (or replaces) an attribute.
    pub fn with(mut self, name: impl Into<Box<str>>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Installs a hook resolving attributes that are not stored.
    pub fn with_missing_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) -> Result<Value, AccessError> + Send + Sync + 'static,
    {
        self.missing = Some(Arc::new(hook));
        self
    }

    #[inline]
    pub fn set(&mut self, name: impl Into<Box<str>>, value: impl Into<Value>) -> Option<Value> {
        self.attrs.insert(name.into(), value.into())
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    #[inline]
    pub fn into_value(self) -> Value {
        Value::object(self)
    }
}

impl Object for Namespace {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn get_attr(&self, name: &str) -> Result<Value, AccessError> {
        if let Some(value) = self.attrs.get(name) {
            return Ok(value.clone());
        }
        match &self.missing {
            Some(hook) => hook(name),
            None => Err(AccessError::missing_attribute(&self.type_name, name)),
        }
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Namespace")
            .field("type_name", &self.type_name)
            .field("attrs", &self.attrs)
            .field("missing", &self.missing.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Namespace;
    use crate::{AccessError, ErrorKind, Value};

    #[test]
    fn stored_attrs_win_over_hook() {
        let ns = Namespace::new("C")
            .with("a", 1)
            .with_missing_hook(|_| Ok(Value::Int(0)))
            .into_value();
        assert_eq!(ns.get_attr("a").unwrap(), Value::Int(1));
        assert_eq!(ns.get_attr("b").unwrap(), Value::Int(0));
    }

    #[test]
    fn hook_errors_pass_through() {
        let ns = Namespace::new("C")
            .with_missing_hook(|name| Err(AccessError::InvalidValue(alloc::format!("no {name}"))))
            .into_value();
        let err = ns.get_attr("x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }

    #[test]
    fn not_subscriptable() {
        let ns = Namespace::new("C").into_value();
        let err = ns.get_item(&Value::Int(0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubscript);
        assert!(ns.as_mapping().is_none());
    }
}
