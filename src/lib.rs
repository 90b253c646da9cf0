//! # tristate
//!
//! A tri-state optional value for Rust.
//!
//! ## Overview
//!
//! [`Opt<T>`] is an optional value that also records whether its state was
//! set on purpose. It is either **unset** (the default), **explicitly
//! empty**, or **explicitly present**. The difference between the first two
//! survives decoding, so a caller can tell a missing document key from a key
//! given as `null`.
//!
//! On top of the container the crate provides:
//!
//! - **Combinators**: `map`, `and_then`, `filter`, `or_else` and friends
//! - **Document and text codecs**: `serde` support and a JSON text form
//! - **Binary codec**: a tagged layout with a pluggable payload codec
//! - **Value store**: conversion to and from nullable store cells, with an
//!   optional `rusqlite` integration
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` and the text codec
//! - `binary`: the binary codec, backed by `bincode`
//! - `store`: the value-store adapter
//! - `sqlite`: `rusqlite` `ToSql`/`FromSql` implementations
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use tristate::prelude::*;
//!
//! let unset: Opt<i32> = Opt::default();
//! let none: Opt<i32> = Opt::none();
//!
//! assert_eq!(unset, none);
//! assert!(!unset.is_explicit());
//! assert!(none.is_explicit());
//!
//! let value = Opt::some(4).filter(|n| n % 2 == 0).map(|n| n * 10);
//! assert_eq!(value.get_or_zero(), 40);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use tristate::prelude::*;
/// ```
pub mod prelude {
    pub use crate::opt::*;

    #[cfg(feature = "serde")]
    pub use crate::codec::*;

    #[cfg(feature = "store")]
    pub use crate::store::{Column, Scanner};
}

mod opt;

pub use opt::{Opt, Validity, and_then, index_map, index_slice, map};

#[cfg(feature = "serde")]
pub mod codec;

#[cfg(feature = "serde")]
pub use codec::TextError;

#[cfg(feature = "binary")]
pub use codec::{BinaryCodec, BinaryError, Bincode};

#[cfg(feature = "store")]
pub mod store;
