//! The store's built-in conversions.
//!
//! [`convert_value`] is the driver-side default converter. The `assign_*`
//! functions are the element conversions behind [`Null::scan`](super::Null::scan):
//! integers narrow with range checks, and any scalar can be read through its
//! textual form.

use std::any::type_name;
use std::borrow::Cow;
use std::str::FromStr;

use super::error::{ConversionError, ScanError};
use super::value::Value;

/// Normalizes a cell with the store's default converter.
///
/// Scalars and `NULL` convert to themselves.
///
/// # Errors
///
/// Returns [`ConversionError::Unsupported`] for [`Value::Raw`].
pub fn convert_value(value: &Value) -> Result<Value, ConversionError> {
    match value {
        Value::Raw(raw) => Err(ConversionError::Unsupported {
            type_name: raw.type_name(),
        }),
        scalar => Ok(scalar.clone()),
    }
}

/// The textual form of a scalar cell.
pub(crate) fn as_text<'a, T>(src: &'a Value) -> Result<Cow<'a, str>, ScanError> {
    match src {
        Value::Text(text) => Ok(Cow::Borrowed(text)),
        Value::Blob(bytes) => std::str::from_utf8(bytes)
            .map(Cow::Borrowed)
            .map_err(|error| parse_error::<T>(src, error)),
        Value::Integer(value) => Ok(Cow::Owned(value.to_string())),
        Value::Real(value) => Ok(Cow::Owned(value.to_string())),
        Value::Bool(value) => Ok(Cow::Owned(value.to_string())),
        Value::Null | Value::Raw(_) => Err(unsupported::<T>(src)),
    }
}

pub(crate) fn unsupported<T>(src: &Value) -> ScanError {
    ScanError::Unsupported {
        from: src.kind(),
        to: type_name::<T>(),
    }
}

fn parse_error<T>(src: &Value, error: impl std::error::Error + Send + Sync + 'static) -> ScanError {
    ScanError::Parse {
        from: src.kind(),
        to: type_name::<T>(),
        source: Box::new(error),
    }
}

fn parse_text<T>(src: &Value) -> Result<T, ScanError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    as_text::<T>(src)?
        .parse::<T>()
        .map_err(|error| parse_error::<T>(src, error))
}

pub(crate) fn assign_integer<T>(src: &Value) -> Result<T, ScanError>
where
    T: TryFrom<i64> + FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match src {
        Value::Integer(value) => T::try_from(*value).map_err(|_| ScanError::OutOfRange {
            from: src.kind(),
            value: value.to_string(),
            to: type_name::<T>(),
        }),
        other => parse_text(other),
    }
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn assign_f64(src: &Value) -> Result<f64, ScanError> {
    match src {
        Value::Real(value) => Ok(*value),
        Value::Integer(value) => Ok(*value as f64),
        other => parse_text(other),
    }
}

/// Narrows to `f32`, rejecting finite sources that overflow to infinity.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub(crate) fn assign_f32(src: &Value) -> Result<f32, ScanError> {
    let out_of_range = |value: String| ScanError::OutOfRange {
        from: src.kind(),
        value,
        to: "f32",
    };
    match src {
        Value::Real(value) => {
            let narrowed = *value as f32;
            if narrowed.is_infinite() && value.is_finite() {
                Err(out_of_range(value.to_string()))
            } else {
                Ok(narrowed)
            }
        }
        Value::Integer(value) => Ok(*value as f32),
        other => {
            let text = as_text::<f32>(other)?;
            let parsed = text
                .parse::<f32>()
                .map_err(|error| parse_error::<f32>(other, error))?;
            if parsed.is_infinite() && !is_infinity_literal(&text) {
                Err(out_of_range(text.into_owned()))
            } else {
                Ok(parsed)
            }
        }
    }
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

pub(crate) fn assign_bool(src: &Value) -> Result<bool, ScanError> {
    match src {
        Value::Bool(value) => Ok(*value),
        Value::Integer(1) => Ok(true),
        Value::Integer(0) => Ok(false),
        Value::Integer(value) => Err(ScanError::OutOfRange {
            from: src.kind(),
            value: value.to_string(),
            to: "bool",
        }),
        other => match as_text::<bool>(other)?.as_ref() {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            text => text
                .parse::<bool>()
                .map_err(|error| parse_error::<bool>(other, error)),
        },
    }
}

pub(crate) fn assign_string(src: &Value) -> Result<String, ScanError> {
    as_text::<String>(src).map(Cow::into_owned)
}

pub(crate) fn assign_bytes(src: &Value) -> Result<Vec<u8>, ScanError> {
    match src {
        Value::Blob(bytes) => Ok(bytes.clone()),
        other => as_text::<Vec<u8>>(other).map(|text| text.into_owned().into_bytes()),
    }
}
