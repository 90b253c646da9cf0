//! `rusqlite` integration.
//!
//! [`Opt<T>`](crate::Opt) implements [`ToSql`] and [`FromSql`] for every
//! [`Column`] type, so it can be bound as a parameter and read from a row
//! directly. SQLite has no boolean type: [`Value::Bool`] is bound as `0`/`1`
//! and read back through the integer conversion.
//!
//! ```rust
//! use rusqlite::Connection;
//! use tristate::Opt;
//!
//! let connection = Connection::open_in_memory().unwrap();
//! connection.execute("CREATE TABLE person (age INTEGER)", ()).unwrap();
//! connection
//!     .execute("INSERT INTO person (age) VALUES (?1), (?2)", (Opt::some(30u8), Opt::<u8>::none()))
//!     .unwrap();
//!
//! let ages: Vec<Opt<u8>> = connection
//!     .prepare("SELECT age FROM person ORDER BY rowid")
//!     .unwrap()
//!     .query_map((), |row| row.get(0))
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(ages, vec![Opt::some(30), Opt::none()]);
//! ```

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

use super::column::Column;
use super::error::ConversionError;
use super::value::Value;
use crate::Opt;

impl<T: Column> ToSql for Opt<T> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let value = match self.to_store_value() {
            Value::Null => rusqlite::types::Value::Null,
            Value::Integer(value) => rusqlite::types::Value::Integer(value),
            Value::Real(value) => rusqlite::types::Value::Real(value),
            Value::Bool(value) => rusqlite::types::Value::Integer(i64::from(value)),
            Value::Text(value) => rusqlite::types::Value::Text(value),
            Value::Blob(value) => rusqlite::types::Value::Blob(value),
            Value::Raw(raw) => {
                return Err(rusqlite::Error::ToSqlConversionFailure(Box::new(
                    ConversionError::Unsupported {
                        type_name: raw.type_name(),
                    },
                )));
            }
        };
        Ok(ToSqlOutput::Owned(value))
    }
}

impl<T: Column> FromSql for Opt<T> {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let src = match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(value) => Value::Integer(value),
            ValueRef::Real(value) => Value::Real(value),
            ValueRef::Text(bytes) => Value::Text(
                std::str::from_utf8(bytes)
                    .map_err(|error| FromSqlError::Other(Box::new(error)))?
                    .to_owned(),
            ),
            ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
        };

        Self::from_store_value(&src).map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}
