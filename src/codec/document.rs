//! `serde` support for [`Opt`].
//!
//! An empty option serializes through [`Serializer::serialize_none`] and a
//! present one through [`Serializer::serialize_some`], so self-describing
//! formats such as JSON see either `null` or the bare value. Deserializing
//! goes through `Option<T>` and always yields an explicit state.
//!
//! To keep "key absent" apart from "key is `null`", declare the field with
//! `#[serde(default)]`. A missing key then leaves the field [`Opt::Unset`]:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use tristate::Opt;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Person {
//!     name: String,
//!     #[serde(default, skip_serializing_if = "Opt::is_unset")]
//!     age: Opt<u32>,
//! }
//!
//! let null_age: Person = serde_json::from_str(r#"{"name":"bar","age":null}"#).unwrap();
//! assert!(null_age.age.is_explicit());
//! assert!(null_age.age.is_none());
//!
//! let no_age: Person = serde_json::from_str(r#"{"name":"bar"}"#).unwrap();
//! assert!(!no_age.age.is_explicit());
//! assert_eq!(serde_json::to_string(&no_age).unwrap(), r#"{"name":"bar"}"#);
//! ```
//!
//! Without `#[serde(default)]` serde treats a missing `Opt` field like a
//! missing `Option` field and the result is an explicit [`Opt::None`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Opt;

impl<T: Serialize> Serialize for Opt<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Some(value) => serializer.serialize_some(value),
            Self::Unset | Self::None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Opt<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
