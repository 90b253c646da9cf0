//! Text encoding for [`Opt`].
//!
//! The text form is the JSON document form: `null` for an empty option and
//! the JSON encoding of the value otherwise. This makes `Opt` usable where a
//! plain string representation is required (configuration values, query
//! parameters, [`FromStr`] parsing).

use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::Opt;

/// Errors produced by the text adapter.
///
/// The underlying `serde_json` error is kept as the source.
#[derive(Debug, Error)]
pub enum TextError {
    /// The contained value could not be encoded.
    #[error("Opt::to_text: failed to encode value")]
    Encode(#[source] serde_json::Error),
    /// The input was not valid for the contained type.
    #[error("Opt::from_text: failed to decode value")]
    Decode(#[source] serde_json::Error),
}

impl<T: Serialize> Opt<T> {
    /// Encodes the option as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Encode`] if the value's `Serialize` impl fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    ///
    /// assert_eq!(Opt::some("apple").to_text().unwrap(), r#""apple""#);
    /// assert_eq!(Opt::<&str>::none().to_text().unwrap(), "null");
    /// ```
    pub fn to_text(&self) -> Result<String, TextError> {
        serde_json::to_string(self).map_err(TextError::Encode)
    }
}

impl<T: DeserializeOwned> Opt<T> {
    /// Decodes an option from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Decode`] for malformed input or a value of the
    /// wrong type. `null` is not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    ///
    /// assert_eq!(Opt::<String>::from_text(r#""apple""#).unwrap(), Opt::some("apple".to_string()));
    /// assert_eq!(Opt::<String>::from_text("null").unwrap(), Opt::none());
    /// ```
    pub fn from_text(text: &str) -> Result<Self, TextError> {
        Self::from_text_bytes(text.as_bytes())
    }

    /// Decodes an option from JSON text given as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Decode`] for malformed input, including invalid
    /// UTF-8.
    pub fn from_text_bytes(bytes: &[u8]) -> Result<Self, TextError> {
        serde_json::from_slice(bytes).map_err(TextError::Decode)
    }
}

impl<T: DeserializeOwned> FromStr for Opt<T> {
    type Err = TextError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_text(text)
    }
}
