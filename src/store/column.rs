//! Capabilities a contained type offers to the store adapter.

use std::any::type_name;

use super::convert;
use super::error::{BoxError, ConversionError, ScanError};
use super::value::Value;

/// A type that reads itself from any store cell.
///
/// A [`Column`] exposing a scanner through [`Column::as_scanner`] takes
/// priority over every built-in conversion.
pub trait Scanner {
    /// Overwrites `self` with the contents of `src`.
    ///
    /// `src` is never [`Value::Null`] when called by the adapter.
    ///
    /// # Errors
    ///
    /// Returns the implementation's error if `src` cannot be interpreted.
    fn scan(&mut self, src: &Value) -> Result<(), BoxError>;
}

/// A type that can be stored inside an [`Opt`](crate::Opt) column.
///
/// Every method has a default, so `impl Column for MyType {}` is enough for
/// a type the store knows nothing about: it is written as a
/// [`Value::Raw`] and read back only from a raw value of the same type.
///
/// # Examples
///
/// ```rust
/// use tristate::Opt;
/// use tristate::store::{BoxError, Column, ConversionError, Scanner, Value};
///
/// #[derive(Debug, Default, Clone, PartialEq)]
/// struct Celsius(f64);
///
/// impl Scanner for Celsius {
///     fn scan(&mut self, src: &Value) -> Result<(), BoxError> {
///         match src {
///             Value::Text(text) => {
///                 self.0 = text.trim_end_matches("°C").parse()?;
///                 Ok(())
///             }
///             other => Err(format!("cannot read {} as Celsius", other.kind()).into()),
///         }
///     }
/// }
///
/// impl Column for Celsius {
///     fn to_scalar(&self) -> Result<Value, ConversionError> {
///         Ok(Value::Text(format!("{}°C", self.0)))
///     }
///
///     fn as_scanner(&mut self) -> Option<&mut dyn Scanner> {
///         Some(self)
///     }
/// }
///
/// let stored = Opt::some(Celsius(21.5)).to_store_value();
/// assert_eq!(stored, Value::Text("21.5°C".to_string()));
/// assert_eq!(Opt::<Celsius>::from_store_value(&stored).unwrap(), Opt::some(Celsius(21.5)));
/// ```
pub trait Column: Default + Clone + Send + Sync + 'static {
    /// Converts the value to a store scalar.
    ///
    /// # Errors
    ///
    /// The default reports [`ConversionError::Unsupported`].
    fn to_scalar(&self) -> Result<Value, ConversionError> {
        Err(ConversionError::Unsupported {
            type_name: type_name::<Self>(),
        })
    }

    /// Exposes the type's own [`Scanner`], if it has one.
    fn as_scanner(&mut self) -> Option<&mut dyn Scanner> {
        None
    }

    /// Converts a non-null cell with the store's generic conversions.
    ///
    /// # Errors
    ///
    /// The default reports [`ScanError::Unsupported`].
    fn assign(src: &Value) -> Result<Self, ScanError> {
        Err(convert::unsupported::<Self>(src))
    }
}

macro_rules! integer_column {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Column for $integer {
                #[allow(clippy::useless_conversion, clippy::unnecessary_fallible_conversions)]
                fn to_scalar(&self) -> Result<Value, ConversionError> {
                    i64::try_from(*self)
                        .map(Value::Integer)
                        .map_err(|_| ConversionError::OutOfRange {
                            type_name: type_name::<Self>(),
                            value: self.to_string(),
                        })
                }

                fn assign(src: &Value) -> Result<Self, ScanError> {
                    convert::assign_integer(src)
                }
            }
        )*
    };
}

integer_column!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Column for f64 {
    fn to_scalar(&self) -> Result<Value, ConversionError> {
        Ok(Value::Real(*self))
    }

    fn assign(src: &Value) -> Result<Self, ScanError> {
        convert::assign_f64(src)
    }
}

impl Column for f32 {
    fn to_scalar(&self) -> Result<Value, ConversionError> {
        Ok(Value::Real(f64::from(*self)))
    }

    fn assign(src: &Value) -> Result<Self, ScanError> {
        convert::assign_f32(src)
    }
}

impl Column for bool {
    fn to_scalar(&self) -> Result<Value, ConversionError> {
        Ok(Value::Bool(*self))
    }

    fn assign(src: &Value) -> Result<Self, ScanError> {
        convert::assign_bool(src)
    }
}

impl Column for String {
    fn to_scalar(&self) -> Result<Value, ConversionError> {
        Ok(Value::Text(self.clone()))
    }

    fn assign(src: &Value) -> Result<Self, ScanError> {
        convert::assign_string(src)
    }
}

impl Column for Vec<u8> {
    fn to_scalar(&self) -> Result<Value, ConversionError> {
        Ok(Value::Blob(self.clone()))
    }

    fn assign(src: &Value) -> Result<Self, ScanError> {
        convert::assign_bytes(src)
    }
}

/// A nullable cell read with the store's generic conversions.
///
/// `valid` is `false` for a `NULL` cell, in which case `value` is
/// `T::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Null<T> {
    /// The scanned value.
    pub value: T,
    /// Whether the cell was not `NULL`.
    pub valid: bool,
}

impl<T: Column> Null<T> {
    /// Scans `src`.
    ///
    /// A [`Value::Raw`] holding exactly a `T` is taken as is; every other cell
    /// goes through [`Column::assign`].
    ///
    /// # Errors
    ///
    /// Returns the error of [`Column::assign`].
    pub fn scan(src: &Value) -> Result<Self, ScanError> {
        let value = match src {
            Value::Null => {
                return Ok(Self {
                    value: T::default(),
                    valid: false,
                });
            }
            Value::Raw(raw) => match raw.downcast_ref::<T>() {
                Some(value) => value.clone(),
                None => T::assign(src)?,
            },
            _ => T::assign(src)?,
        };

        Ok(Self { value, valid: true })
    }
}
