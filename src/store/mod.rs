//! Value-store support for [`Opt`](crate::Opt).
//!
//! A store cell is either `NULL` or a single scalar, so there is no room for
//! the unset state: writing maps both empty states to `NULL`, and reading
//! always produces an explicit option.
//!
//! Reading must support arbitrary contained types without runtime
//! reflection. Each type states its capabilities through [`Column`], and
//! [`Opt::from_store_value`](crate::Opt::from_store_value) tries them in a
//! fixed order:
//!
//! 1. `NULL` becomes `None`.
//! 2. The type's own [`Scanner`], when [`Column::as_scanner`] provides one.
//! 3. The store's default conversion ([`convert_value`]), accepted only when
//!    the converted scalar is exactly the contained type.
//! 4. The nullable scan ([`Null::scan`]), which applies
//!    [`Column::assign`]: integer narrowing, parsing of textual forms and
//!    byte/text interchange.
//!
//! Later steps are more permissive, so the order is significant.
//!
//! # Examples
//!
//! ```rust
//! use tristate::Opt;
//! use tristate::store::Value;
//!
//! let cell = Opt::some(42u16).to_store_value();
//! assert_eq!(cell, Value::Integer(42));
//!
//! let read: Opt<u16> = Opt::from_store_value(&cell).unwrap();
//! assert_eq!(read, Opt::some(42));
//! ```

mod adapter;
mod column;
mod convert;
mod error;
mod value;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use column::{Column, Null, Scanner};
pub use convert::convert_value;
pub use error::{BoxError, ConversionError, ScanError};
pub use value::{RawValue, Value};
