#![cfg(feature = "store")]

//! Integration tests for the value-store adapter.
//!
//! Reading a cell tries, in order: `NULL`, the contained type's own scanner,
//! an exact-type default conversion, and the generic nullable scan.

use rstest::rstest;
use tristate::Opt;
use tristate::store::{BoxError, Column, ConversionError, RawValue, ScanError, Scanner, Value};

// =============================================================================
// Fixtures
// =============================================================================

/// A type with its own scanner that records which path produced it.
#[derive(Debug, Default, Clone, PartialEq)]
struct Tagged {
    via: &'static str,
    text: String,
}

impl Scanner for Tagged {
    fn scan(&mut self, src: &Value) -> Result<(), BoxError> {
        match src {
            Value::Text(text) => {
                self.via = "scanner";
                self.text.clone_from(text);
                Ok(())
            }
            other => Err(format!("Tagged cannot read {}", other.kind()).into()),
        }
    }
}

impl Column for Tagged {
    fn to_scalar(&self) -> Result<Value, ConversionError> {
        Ok(Value::Text(self.text.clone()))
    }

    fn as_scanner(&mut self) -> Option<&mut dyn Scanner> {
        Some(self)
    }

    fn assign(src: &Value) -> Result<Self, ScanError> {
        Ok(Self {
            via: "assign",
            text: src.kind().to_string(),
        })
    }
}

/// A type the store knows nothing about.
#[derive(Debug, Default, Clone, PartialEq)]
struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Column for Coordinates {}

// =============================================================================
// Write Path
// =============================================================================

#[rstest]
fn test_none_writes_null() {
    assert_eq!(Opt::<String>::none().to_store_value(), Value::Null);
    assert_eq!(Opt::<String>::default().to_store_value(), Value::Null);
}

#[rstest]
#[case(Opt::some(5i8).to_store_value(), Value::Integer(5))]
#[case(Opt::some(5u32).to_store_value(), Value::Integer(5))]
#[case(Opt::some(1.5f64).to_store_value(), Value::Real(1.5))]
#[case(Opt::some(true).to_store_value(), Value::Bool(true))]
#[case(Opt::some("apple".to_string()).to_store_value(), Value::Text("apple".to_string()))]
#[case(Opt::some(vec![1u8, 2]).to_store_value(), Value::Blob(vec![1, 2]))]
fn test_scalar_writes(#[case] actual: Value, #[case] expected: Value) {
    assert_eq!(actual, expected);
}

#[rstest]
fn test_unsupported_scalar_writes_raw() {
    let coordinates = Coordinates {
        latitude: 52.37,
        longitude: 4.89,
    };

    match Opt::some(coordinates.clone()).to_store_value() {
        Value::Raw(raw) => assert_eq!(raw.downcast_ref::<Coordinates>(), Some(&coordinates)),
        other => panic!("expected a raw value, got {other:?}"),
    }
}

#[rstest]
fn test_out_of_range_unsigned_writes_raw() {
    let Value::Raw(raw) = Opt::some(u64::MAX).to_store_value() else {
        panic!("expected a raw value");
    };
    assert_eq!(raw.downcast_ref::<u64>(), Some(&u64::MAX));
}

// =============================================================================
// Read Path
// =============================================================================

#[rstest]
fn test_null_reads_none() {
    let option = Opt::<String>::from_store_value(&Value::Null).unwrap();
    assert!(option.is_none());
    assert!(option.is_explicit());
}

#[rstest]
fn test_null_reads_none_even_with_scanner() {
    assert_eq!(Opt::<Tagged>::from_store_value(&Value::Null).unwrap(), Opt::none());
}

#[rstest]
#[case(Value::from("go"), Opt::some("go".to_string()))]
#[case(Value::Integer(7), Opt::some("7".to_string()))]
#[case(Value::Blob(b"bytes".to_vec()), Opt::some("bytes".to_string()))]
fn test_read_string(#[case] src: Value, #[case] expected: Opt<String>) {
    assert_eq!(Opt::<String>::from_store_value(&src).unwrap(), expected);
}

#[rstest]
fn test_exact_type_conversion() {
    assert_eq!(Opt::<i64>::from_store_value(&Value::Integer(-3)).unwrap(), Opt::some(-3));
    assert_eq!(Opt::<f64>::from_store_value(&Value::Real(0.5)).unwrap(), Opt::some(0.5));
    assert_eq!(Opt::<bool>::from_store_value(&Value::Bool(false)).unwrap(), Opt::some(false));
    assert_eq!(
        Opt::<Vec<u8>>::from_store_value(&Value::Blob(vec![9])).unwrap(),
        Opt::some(vec![9])
    );
}

#[rstest]
fn test_scanner_has_priority() {
    let option = Opt::<Tagged>::from_store_value(&Value::from("hello")).unwrap();
    assert_eq!(
        option,
        Opt::some(Tagged {
            via: "scanner",
            text: "hello".to_string(),
        })
    );
}

#[rstest]
fn test_scanner_failure_is_scan_error() {
    use std::error::Error as _;

    let error = Opt::<Tagged>::from_store_value(&Value::Integer(1)).unwrap_err();
    assert!(matches!(error, ScanError::Scanner { .. }));
    assert_eq!(
        error.source().map(ToString::to_string),
        Some("Tagged cannot read INTEGER".to_string())
    );
}

#[rstest]
#[case(Value::Integer(200), Opt::some(200u8))]
#[case(Value::from("17"), Opt::some(17u8))]
#[case(Value::Real(4.0), Opt::some(4u8))]
fn test_nullable_scan_narrows(#[case] src: Value, #[case] expected: Opt<u8>) {
    assert_eq!(Opt::<u8>::from_store_value(&src).unwrap(), expected);
}

#[rstest]
#[case(Value::Integer(256))]
#[case(Value::Integer(-1))]
fn test_nullable_scan_out_of_range(#[case] src: Value) {
    let error = Opt::<u8>::from_store_value(&src).unwrap_err();
    assert!(matches!(error, ScanError::OutOfRange { to: "u8", .. }));
}

#[rstest]
#[case(Value::Real(f64::MAX), "REAL")]
#[case(Value::from("1e300"), "TEXT")]
fn test_nullable_scan_f32_overflow(#[case] src: Value, #[case] kind: &str) {
    let error = Opt::<f32>::from_store_value(&src).unwrap_err();
    assert!(matches!(error, ScanError::OutOfRange { from, to: "f32", .. } if from == kind));
}

#[rstest]
fn test_nullable_scan_parse_error() {
    let error = Opt::<i32>::from_store_value(&Value::from("seven")).unwrap_err();
    assert!(matches!(error, ScanError::Parse { from: "TEXT", to: "i32", .. }));
}

#[rstest]
fn test_bool_from_integer_cell() {
    assert_eq!(Opt::<bool>::from_store_value(&Value::Integer(1)).unwrap(), Opt::some(true));
    assert_eq!(Opt::<bool>::from_store_value(&Value::from("f")).unwrap(), Opt::some(false));
}

#[rstest]
fn test_raw_round_trip_for_unknown_type() {
    let original = Opt::some(Coordinates {
        latitude: 1.0,
        longitude: 2.0,
    });
    let restored = Opt::<Coordinates>::from_store_value(&original.to_store_value()).unwrap();
    assert_eq!(restored, original);
}

#[rstest]
fn test_raw_of_other_type_is_unsupported() {
    let src = Value::Raw(RawValue::new("not coordinates".to_string()));
    let error = Opt::<Coordinates>::from_store_value(&src).unwrap_err();
    assert!(matches!(error, ScanError::Unsupported { .. }));
}

#[rstest]
fn test_unknown_type_from_scalar_is_unsupported() {
    let error = Opt::<Coordinates>::from_store_value(&Value::Real(1.0)).unwrap_err();
    assert!(matches!(error, ScanError::Unsupported { from: "REAL", .. }));
}

// =============================================================================
// Scanning in Place
// =============================================================================

#[rstest]
fn test_scan_sets_explicit_state() {
    let mut option: Opt<String> = Opt::default();
    option.scan(&Value::Null).unwrap();
    assert!(option.is_explicit());

    option.scan(&Value::from("go")).unwrap();
    assert_eq!(option, Opt::some("go".to_string()));
}

#[rstest]
fn test_opt_is_a_scanner() {
    fn scan_into(target: &mut dyn Scanner, src: &Value) -> Result<(), BoxError> {
        target.scan(src)
    }

    let mut option: Opt<i32> = Opt::default();
    scan_into(&mut option, &Value::Integer(12)).unwrap();
    assert_eq!(option, Opt::some(12));
    assert!(scan_into(&mut option, &Value::from("x")).is_err());
    assert_eq!(option, Opt::some(12));
}
