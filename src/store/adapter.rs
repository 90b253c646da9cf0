//! Reading and writing [`Opt`] store cells.

use std::any::type_name;

use super::column::{Column, Null, Scanner};
use super::convert::convert_value;
use super::error::{BoxError, ScanError};
use super::value::{RawValue, Value};
use crate::Opt;

impl<T: Column> Opt<T> {
    /// Converts the option into a store cell.
    ///
    /// An empty option becomes [`Value::Null`]. A present value is converted
    /// with [`Column::to_scalar`]; if that fails, a clone of the value is
    /// handed to the driver as [`Value::Raw`]. Drivers that only accept
    /// scalars will reject such a cell when it is bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    /// use tristate::store::Value;
    ///
    /// assert_eq!(Opt::<String>::none().to_store_value(), Value::Null);
    /// assert_eq!(Opt::some("apple".to_string()).to_store_value(), Value::Text("apple".to_string()));
    /// ```
    pub fn to_store_value(&self) -> Value {
        match self {
            Self::Some(value) => value.to_scalar().unwrap_or_else(|error| {
                tracing::debug!(
                    type_name = type_name::<T>(),
                    %error,
                    "scalar conversion failed, passing the raw value to the driver"
                );
                Value::Raw(RawValue::new(value.clone()))
            }),
            Self::Unset | Self::None => Value::Null,
        }
    }

    /// Reads an option from a store cell.
    ///
    /// The strategies are tried in order:
    ///
    /// 1. `NULL` is an explicit `None`.
    /// 2. If `T` has a [`Scanner`], it reads the cell.
    /// 3. The cell is normalized with [`convert_value`]; a scalar that is
    ///    exactly a `T` is taken as is.
    /// 4. [`Null::scan`] applies the generic conversions.
    ///
    /// The result is always explicit.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Scanner`] if the scanner of step 2 fails, and the
    /// error of [`Null::scan`] if step 4 fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    /// use tristate::store::Value;
    ///
    /// assert_eq!(Opt::<i64>::from_store_value(&Value::Null).unwrap(), Opt::none());
    /// assert_eq!(Opt::<i64>::from_store_value(&Value::Integer(3)).unwrap(), Opt::some(3));
    /// assert_eq!(Opt::<i32>::from_store_value(&Value::from("3")).unwrap(), Opt::some(3));
    /// ```
    pub fn from_store_value(src: &Value) -> Result<Self, ScanError> {
        if src.is_null() {
            return Ok(Self::None);
        }

        let mut value = T::default();
        if let Some(scanner) = value.as_scanner() {
            tracing::trace!(type_name = type_name::<T>(), "scanning with the type's own scanner");
            scanner.scan(src).map_err(|source| ScanError::Scanner {
                type_name: type_name::<T>(),
                source,
            })?;
            return Ok(Self::Some(value));
        }

        match convert_value(src) {
            Ok(converted) => {
                if let Some(exact) = converted
                    .into_scalar_any()
                    .and_then(|scalar| scalar.downcast::<T>().ok())
                {
                    tracing::trace!(type_name = type_name::<T>(), "converted cell matches exactly");
                    return Ok(Self::Some(*exact));
                }
            }
            Err(error) => {
                tracing::trace!(type_name = type_name::<T>(), %error, "default conversion failed");
            }
        }

        tracing::trace!(
            type_name = type_name::<T>(),
            kind = src.kind(),
            "falling back to the nullable scan"
        );
        let nullable = Null::<T>::scan(src)?;
        if nullable.valid {
            Ok(Self::Some(nullable.value))
        } else {
            Ok(Self::None)
        }
    }

    /// Replaces `self` with the option read from `src`.
    ///
    /// On error `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// See [`Opt::from_store_value`].
    pub fn scan(&mut self, src: &Value) -> Result<(), ScanError> {
        *self = Self::from_store_value(src)?;
        Ok(())
    }
}

impl<T: Column> Scanner for Opt<T> {
    fn scan(&mut self, src: &Value) -> Result<(), BoxError> {
        *self = Self::from_store_value(src)?;
        Ok(())
    }
}
