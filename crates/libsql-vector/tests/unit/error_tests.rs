//! Unit tests for error types

use libsql_vector::Error;

#[test]
fn test_parse_error() {
    let error = Error::parse("bad token");
    match &error {
        Error::Parse { message } => assert_eq!(message, "bad token"),
        _ => panic!("Expected Parse error"),
    }
    assert!(error.is_parse());
    assert_eq!(error.to_string(), "Parse error: bad token");
}

#[test]
fn test_binary_length_error() {
    let error = Error::binary_length(7);
    assert!(error.is_binary_length());
    assert_eq!(
        error.to_string(),
        "Binary length error: 7 bytes is not a multiple of 4"
    );
}

#[test]
fn test_scan_type_error() {
    let error = Error::scan_type("integer");
    assert!(error.is_scan_type());
    assert_eq!(
        error.to_string(),
        "Scan type error: unsupported data type: integer"
    );
}

#[test]
fn test_json_error_from_serde() {
    let source = serde_json::from_str::<Vec<f32>>("[1,2,a]").unwrap_err();
    let error: Error = source.into();
    assert!(error.is_json());
    assert!(error.to_string().starts_with("JSON error:"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_error_kinds_are_exclusive() {
    let error = Error::parse("x");
    assert!(!error.is_binary_length());
    assert!(!error.is_scan_type());
    assert!(!error.is_json());
}
