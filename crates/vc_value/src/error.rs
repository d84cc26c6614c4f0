use alloc::string::{String, ToString};
use alloc::sync::Arc;
use core::error::Error;

// -----------------------------------------------------------------------------
// Kind

/// Coarse classification of an [`AccessError`].
///
/// Getters with a fallback decide what to absorb by kind,
/// never by the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An attribute name could not be resolved.
    MissingAttribute,
    /// A key or index is absent, out of range, or of the wrong type.
    InvalidSubscript,
    /// Anything else, e.g. an error raised by user lookup logic.
    Other,
}

// -----------------------------------------------------------------------------
// Error

/// An error produced while resolving an attribute or a subscript on a [`Value`].
///
/// [`Value`]: crate::Value
#[derive(Debug, Clone, thiserror::Error)]
pub enum AccessError {
    #[error("'{type_name}' object has no attribute '{name}'")]
    MissingAttribute { type_name: String, name: String },
    /// `key` holds the repr of the missing key.
    #[error("key {key} not found")]
    MissingKey { key: String },
    #[error("{type_name} index out of range")]
    IndexOutOfRange { type_name: String },
    #[error("{type_name} indices must be integers or slices, not {key_type}")]
    InvalidIndexType { type_name: String, key_type: String },
    #[error("unhashable type: '{type_name}'")]
    Unhashable { type_name: String },
    #[error("'{type_name}' object is not subscriptable")]
    NotSubscriptable { type_name: String },
    #[error("{0}")]
    InvalidValue(String),
    #[error("{0}")]
    Custom(Arc<dyn Error + Send + Sync>),
}

impl AccessError {
    /// Returns the [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingAttribute { .. } => ErrorKind::MissingAttribute,
            Self::MissingKey { .. }
            | Self::IndexOutOfRange { .. }
            | Self::InvalidIndexType { .. }
            | Self::Unhashable { .. }
            | Self::NotSubscriptable { .. } => ErrorKind::InvalidSubscript,
            Self::InvalidValue(_) | Self::Custom(_) => ErrorKind::Other,
        }
    }

    #[inline]
    pub fn missing_attribute(type_name: &str, name: &str) -> Self {
        Self::MissingAttribute {
            type_name: type_name.to_string(),
            name: name.to_string(),
        }
    }

    #[inline]
    pub fn not_subscriptable(type_name: &str) -> Self {
        Self::NotSubscriptable {
            type_name: type_name.to_string(),
        }
    }

    #[inline]
    pub fn unhashable(type_name: &str) -> Self {
        Self::Unhashable {
            type_name: type_name.to_string(),
        }
    }

    /// Wraps an arbitrary error raised by user lookup logic.
    ///
    /// The result is always classified as [`ErrorKind::Other`],
    /// so getters never absorb it.
    #[inline]
    pub fn custom(error: impl Error + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(error))
    }
}
