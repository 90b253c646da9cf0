//! Encoding adapters for [`Opt`](crate::Opt).
//!
//! - [`document`]: `serde` support. Absent values encode as the format's
//!   `null`, present values as the bare inner value.
//! - [`text`]: a JSON text representation built on the document adapter.
//! - [`binary`]: a one-byte tag followed by the payload of a pluggable
//!   [`BinaryCodec`].
//!
//! Decoding always produces an explicit state.

pub mod document;
pub mod text;

#[cfg(feature = "binary")]
pub mod binary;

pub use text::TextError;

#[cfg(feature = "binary")]
pub use binary::{BinaryCodec, BinaryError, Bincode};
