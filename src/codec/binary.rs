//! Binary encoding for [`Opt`].
//!
//! The layout is a single tag byte followed by an optional payload:
//!
//! | state | bytes |
//! | --- | --- |
//! | empty | `[0x00]` |
//! | present | `[0x01, payload...]` |
//!
//! The payload is produced by a [`BinaryCodec`]; [`Bincode`] is used by
//! [`Opt::to_binary`] and [`Opt::from_binary`]. The format has no framing of
//! its own beyond the tag: a decoder must be given exactly the bytes of one
//! encoded option.
//!
//! Bincode encodes `Option` with the same tag byte, so an `Opt` nested inside
//! a bincode-serialized struct has the same layout as the standalone form.

use std::error::Error as StdError;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::Opt;

/// Tag byte of an empty option.
pub const NONE_TAG: u8 = 0x00;

/// Tag byte of a present option.
pub const SOME_TAG: u8 = 0x01;

/// A codec for the payload of a present option.
pub trait BinaryCodec {
    /// The error reported by the codec.
    type Error: StdError + Send + Sync + 'static;

    /// Encodes `value` into bytes.
    ///
    /// # Errors
    ///
    /// Returns the codec's error if `value` cannot be represented.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, Self::Error>;

    /// Decodes a value from `bytes`.
    ///
    /// # Errors
    ///
    /// Returns the codec's error for malformed or truncated input.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, Self::Error>;
}

/// The [`bincode`] 1.x codec with its default configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bincode;

impl BinaryCodec for Bincode {
    type Error = bincode::Error;

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, Self::Error> {
        bincode::serialize(value)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, Self::Error> {
        bincode::deserialize(bytes)
    }
}

/// Errors produced by the binary adapter.
#[derive(Debug, Error)]
pub enum BinaryError {
    /// The input was empty.
    #[error("Opt::from_binary: no data")]
    NoData,
    /// The payload codec failed to encode the value.
    #[error("Opt::to_binary: failed to encode value")]
    Encode(#[source] Box<dyn StdError + Send + Sync>),
    /// The payload codec failed to decode the value.
    #[error("Opt::from_binary: failed to decode value")]
    Decode(#[source] Box<dyn StdError + Send + Sync>),
}

impl<T: Serialize> Opt<T> {
    /// Encodes the option with [`Bincode`] as the payload codec.
    ///
    /// # Errors
    ///
    /// Returns [`BinaryError::Encode`] if the payload cannot be encoded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    ///
    /// assert_eq!(Opt::<String>::none().to_binary().unwrap(), vec![0x00]);
    /// assert_eq!(Opt::some(7u8).to_binary().unwrap(), vec![0x01, 0x07]);
    /// ```
    pub fn to_binary(&self) -> Result<Vec<u8>, BinaryError> {
        self.to_binary_with(&Bincode)
    }

    /// Encodes the option with the given payload codec.
    ///
    /// # Errors
    ///
    /// Returns [`BinaryError::Encode`] wrapping the codec's error.
    pub fn to_binary_with<C: BinaryCodec>(&self, codec: &C) -> Result<Vec<u8>, BinaryError> {
        match self {
            Self::Some(value) => {
                let payload = codec
                    .encode(value)
                    .map_err(|error| BinaryError::Encode(Box::new(error)))?;
                let mut bytes = Vec::with_capacity(payload.len() + 1);
                bytes.push(SOME_TAG);
                bytes.extend_from_slice(&payload);
                Ok(bytes)
            }
            Self::Unset | Self::None => Ok(vec![NONE_TAG]),
        }
    }
}

impl<T: DeserializeOwned> Opt<T> {
    /// Decodes an option with [`Bincode`] as the payload codec.
    ///
    /// # Errors
    ///
    /// Returns [`BinaryError::NoData`] for empty input and
    /// [`BinaryError::Decode`] if the payload is malformed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::{BinaryError, Opt};
    ///
    /// assert_eq!(Opt::<u8>::from_binary(&[0x01, 0x07]).unwrap(), Opt::some(7));
    /// assert_eq!(Opt::<u8>::from_binary(&[0x00]).unwrap(), Opt::none());
    /// assert!(matches!(Opt::<u8>::from_binary(&[]), Err(BinaryError::NoData)));
    /// ```
    pub fn from_binary(bytes: &[u8]) -> Result<Self, BinaryError> {
        Self::from_binary_with(bytes, &Bincode)
    }

    /// Decodes an option with the given payload codec.
    ///
    /// Any non-zero tag is treated as present.
    ///
    /// # Errors
    ///
    /// Returns [`BinaryError::NoData`] for empty input and
    /// [`BinaryError::Decode`] wrapping the codec's error.
    pub fn from_binary_with<C: BinaryCodec>(bytes: &[u8], codec: &C) -> Result<Self, BinaryError> {
        let (&tag, payload) = bytes.split_first().ok_or(BinaryError::NoData)?;

        if tag == NONE_TAG {
            return Ok(Self::None);
        }

        codec
            .decode(payload)
            .map(Self::Some)
            .map_err(|error| BinaryError::Decode(Box::new(error)))
    }
}
