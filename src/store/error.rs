//! Error types for the value-store adapter.

use thiserror::Error;

/// A boxed error reported by a [`Scanner`](super::Scanner) implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A value has no representation as a store scalar.
///
/// Conversion errors are recovered inside the adapter: on the write path the
/// value is passed through raw, on the read path the next tier is tried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The type is not one of the store's scalar kinds.
    #[error("unsupported type {type_name}, a {type_name} value is not a store scalar")]
    Unsupported {
        /// The name of the rejected type.
        type_name: &'static str,
    },
    /// The value does not fit into a store integer.
    #[error("{type_name} value {value} is out of range for a store integer")]
    OutOfRange {
        /// The name of the rejected type.
        type_name: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Reading a store cell into an [`Opt`](crate::Opt) failed.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The contained type's own scanner rejected the cell.
    #[error("failed to scan: {type_name} scanner rejected the value")]
    Scanner {
        /// The name of the scanning type.
        type_name: &'static str,
        /// The scanner's error.
        #[source]
        source: BoxError,
    },
    /// The cell kind cannot be converted to the target type.
    #[error("converting {from} to {to} is unsupported")]
    Unsupported {
        /// The kind of the source cell.
        from: &'static str,
        /// The name of the target type.
        to: &'static str,
    },
    /// The cell holds a number the target type cannot represent.
    #[error("converting {from} value {value} to {to}: value out of range")]
    OutOfRange {
        /// The kind of the source cell.
        from: &'static str,
        /// The rejected value.
        value: String,
        /// The name of the target type.
        to: &'static str,
    },
    /// The cell's textual form does not parse as the target type.
    #[error("converting {from} to {to}: invalid syntax")]
    Parse {
        /// The kind of the source cell.
        from: &'static str,
        /// The name of the target type.
        to: &'static str,
        /// The parser's error.
        #[source]
        source: BoxError,
    },
}
