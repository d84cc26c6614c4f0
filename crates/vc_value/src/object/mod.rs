//! User-defined objects and the lookup capabilities they can expose.
//!
//! A [`Value::Object`](crate::Value::Object) delegates attribute and
//! subscript resolution to its [`Object`] implementation. Everything an
//! object does not override behaves like a plain object: no attributes,
//! not subscriptable, no [`Mapping`] capability.
//!
//! Two ready-made objects are provided:
//!
//! - [`Namespace`]: a named bag of attributes, optionally with a hook
//!   that resolves missing attributes.
//! - [`DefaultDict`]: a dictionary that populates missing keys on subscript.

use core::fmt;

use crate::{AccessError, Value};

// -----------------------------------------------------------------------------
// Modules

mod namespace;

#[cfg(feature = "std")]
mod default_dict;

// -----------------------------------------------------------------------------
// Exports

pub use namespace::{MissingAttrHook, Namespace};

#[cfg(feature = "std")]
pub use default_dict::DefaultDict;

// -----------------------------------------------------------------------------
// Object

/// The attribute and subscript protocols of a user-defined value.
///
/// Implementations may run arbitrary logic; they decide which
/// [`AccessError`] a failed lookup produces, and getters only absorb
/// the kinds they are documented to absorb.
///
/// # Examples
///
/// ```
/// use vc_value::{AccessError, Object, Value};
///
/// struct Point { x: i64, y: i64 }
///
/// impl Object for Point {
///     fn type_name(&self) -> &str {
///         "Point"
///     }
///
///     fn get_attr(&self, name: &str) -> Result<Value, AccessError> {
///         match name {
///             "x" => Ok(self.x.into()),
///             "y" => Ok(self.y.into()),
///             _ => Err(AccessError::missing_attribute(self.type_name(), name)),
///         }
///     }
/// }
///
/// let p = Value::object(Point { x: 1, y: 2 });
/// assert_eq!(p.get_attr("y").unwrap(), Value::Int(2));
/// assert_eq!(
///     p.get_attr("z").unwrap_err().to_string(),
///     "'Point' object has no attribute 'z'",
/// );
/// ```
pub trait Object: Send + Sync + 'static {
    /// The type name used in reprs and error messages.
    fn type_name(&self) -> &str;

    /// Resolves one attribute name.
    fn get_attr(&self, name: &str) -> Result<Value, AccessError> {
        Err(AccessError::missing_attribute(self.type_name(), name))
    }

    /// Resolves one subscript key.
    fn get_item(&self, key: &Value) -> Result<Value, AccessError> {
        let _ = key;
        Err(AccessError::not_subscriptable(self.type_name()))
    }

    /// Exposes a native get-with-default lookup.
    ///
    /// Only return `Some` when [`Mapping::get_or`] agrees with
    /// [`get_item`](Object::get_item). Objects whose subscript never fails
    /// because it fills in missing keys must keep the default `None`.
    fn as_mapping(&self) -> Option<&dyn Mapping> {
        None
    }

    /// Writes the repr of this object.
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} object>", self.type_name())
    }
}

// -----------------------------------------------------------------------------
// Mapping

/// A native get-with-default lookup.
///
/// `get_or(key, default)` must yield `default` exactly where subscripting
/// with `key` fails with an [`InvalidSubscript`] error, and the subscript
/// result everywhere else. It exists so that callers with a fallback in
/// hand can skip building and discarding an error on every miss.
///
/// [`InvalidSubscript`]: crate::ErrorKind::InvalidSubscript
pub trait Mapping {
    fn get_or(&self, key: &Value, default: &Value) -> Result<Value, AccessError>;
}
