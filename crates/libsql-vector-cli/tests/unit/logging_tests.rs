//! Logging Tests

use libsql_vector_cli::ConfigError;
use libsql_vector_cli::logging::parse_log_level;
use tracing::Level;

#[test]
fn test_parse_log_level() {
    let cases = [
        ("trace", Level::TRACE),
        ("debug", Level::DEBUG),
        ("INFO", Level::INFO),
        ("warn", Level::WARN),
        ("warning", Level::WARN),
        ("Error", Level::ERROR),
    ];

    for (input, expected) in cases {
        assert_eq!(parse_log_level(input).unwrap(), expected, "parsing {input}");
    }
}

#[test]
fn test_parse_log_level_rejects_unknown() {
    let err = parse_log_level("verbose").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert!(err.to_string().contains("verbose"));
}
