//! Store cell values.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A single cell as seen by a store driver.
///
/// A cell is either [`Value::Null`] or one scalar. [`Value::Raw`] carries a
/// value the default converter does not understand; what happens to it is
/// up to the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL `NULL`.
    Null,
    /// A signed 64-bit integer.
    Integer(i64),
    /// A 64-bit float.
    Real(f64),
    /// A boolean.
    Bool(bool),
    /// UTF-8 text.
    Text(String),
    /// Raw bytes.
    Blob(Vec<u8>),
    /// An unconverted value handed through to the driver.
    Raw(RawValue),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// A short name of the cell kind, used in error messages.
    ///
    /// For [`Value::Raw`] this is the name of the wrapped type.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Integer(_) => "INTEGER",
            Self::Real(_) => "REAL",
            Self::Bool(_) => "BOOL",
            Self::Text(_) => "TEXT",
            Self::Blob(_) => "BLOB",
            Self::Raw(raw) => raw.type_name(),
        }
    }

    /// Moves the scalar into a type-erased box.
    ///
    /// Returns `None` for [`Value::Null`] and [`Value::Raw`].
    pub(crate) fn into_scalar_any(self) -> Option<Box<dyn Any>> {
        match self {
            Self::Integer(value) => Some(Box::new(value)),
            Self::Real(value) => Some(Box::new(value)),
            Self::Bool(value) => Some(Box::new(value)),
            Self::Text(value) => Some(Box::new(value)),
            Self::Blob(value) => Some(Box::new(value)),
            Self::Null | Self::Raw(_) => None,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Blob(value)
    }
}

/// A shared, type-erased value that bypassed scalar conversion.
///
/// Two raw values are equal only if they share the same allocation.
#[derive(Clone)]
pub struct RawValue {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl RawValue {
    /// Wraps `value`.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// The name of the wrapped type.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the wrapped value is a `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        (*self.value).is::<T>()
    }

    /// Returns the wrapped value if it is a `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.value).downcast_ref::<T>()
    }
}

impl fmt::Debug for RawValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RawValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for RawValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);
