//! Unit tests for the textual literal codec

use libsql_vector::codec::{format_float, format_floats, format_literal, parse_brackets};
use libsql_vector::{TextCodec, Vector};

#[test]
fn test_format_floats() {
    let cases: [(&[f32], &str); 5] = [
        (&[], "[]"),
        (&[1.5], "[1.5]"),
        (&[1.5, 2.75, -3.25, 0.0], "[1.5,2.75,-3.25,0]"),
        (&[1e-7], "[0.0000001]"),
        (&[1e7], "[10000000]"),
    ];

    for (values, expected) in cases {
        assert_eq!(format_floats(values), expected, "formatting {values:?}");
    }
}

#[test]
fn test_format_trims_trailing_zero() {
    let vector = Vector::new(vec![1.5, -2.75, 3.0]);
    assert_eq!(vector.format_floats(), "[1.5,-2.75,3]");
}

#[test]
fn test_format_float_sign() {
    assert_eq!(format_float(-1.25), "-1.25");
    assert_eq!(format_float(1.25), "1.25");
    assert_eq!(format_float(-0.0), "-0");
}

#[test]
fn test_literal_wraps_brackets() {
    let cases: [(&[f32], &str); 4] = [
        (&[], "vector('[]')"),
        (&[1.0], "vector('[1]')"),
        (&[1.0, 2.0, 3.0], "vector('[1,2,3]')"),
        (&[1.1, 2.2, 3.3], "vector('[1.1,2.2,3.3]')"),
    ];

    for (values, expected) in cases {
        assert_eq!(format_literal(values), expected);
        let vector = Vector::from(values);
        assert_eq!(vector.to_literal(), expected);
        assert_eq!(vector.to_string(), expected);
        assert_eq!(
            vector.to_string(),
            format!("vector('{}')", vector.format_floats())
        );
    }
}

#[test]
fn test_parse_valid_literals() {
    let cases: [(&str, Vec<f32>); 4] = [
        ("vector('[]')", vec![]),
        ("vector('[1]')", vec![1.0]),
        ("vector('[1,2,3]')", vec![1.0, 2.0, 3.0]),
        ("vector('[1.1,2.2,3.3]')", vec![1.1, 2.2, 3.3]),
    ];

    for (input, expected) in cases {
        let mut vector = Vector::default();
        vector.parse(input).unwrap();
        assert_eq!(vector, Vector::new(expected), "parsing {input}");
    }
}

#[test]
fn test_parse_rejects_bad_element() {
    let mut vector = Vector::default();
    let err = vector.parse("vector('[1,2,a]')").unwrap_err();
    assert!(err.is_parse());
    assert!(err.to_string().contains("\"a\""));
    assert!(err.to_string().contains("index 2"));
}

#[test]
fn test_parse_rejects_out_of_range_element() {
    for input in ["vector('[1e39]')", "vector('[1,-3.5e38]')", "vector('[1e400]')"] {
        let mut vector = Vector::new(vec![7.0]);
        let err = vector.parse(input).unwrap_err();
        assert!(err.is_parse(), "{input} should fail with a parse error");
        assert_eq!(vector.as_slice(), &[7.0]);
    }

    let err = parse_brackets("[0,1e39]").unwrap_err();
    assert!(err.to_string().contains("out of range"));
    assert!(err.to_string().contains("index 1"));
}

#[test]
fn test_parse_accepts_non_finite_spellings() {
    let values = parse_brackets("[inf,-inf,NaN,3.4028235e38]").unwrap();
    assert_eq!(values[0], f32::INFINITY);
    assert_eq!(values[1], f32::NEG_INFINITY);
    assert!(values[2].is_nan());
    assert_eq!(values[3], f32::MAX);
}

#[test]
fn test_nan_keeps_only_nan_through_literal() {
    let payload_nan = f32::from_bits(0xffc0_0001);
    let vector = Vector::new(vec![payload_nan]);
    assert_eq!(vector.to_literal(), "vector('[NaN]')");

    let back: Vector = vector.to_literal().parse().unwrap();
    assert!(back.as_slice()[0].is_nan());
    assert_ne!(back, vector);
    assert_eq!(Vector::from_bytes(&vector.to_bytes()).unwrap(), vector);
}

#[test]
fn test_parse_rejects_bad_wrapper() {
    let inputs = [
        "[1,2,3]",
        "vector([1,2,3])",
        "vector('[1,2,3]'",
        "vector('1,2,3')",
        "vector('[1,2,3')",
        "vector('1,2,3]')",
        "vector('')",
        "",
        "VECTOR('[1]')",
    ];

    for input in inputs {
        let err = input.parse::<Vector>().unwrap_err();
        assert!(err.is_parse(), "{input} should fail with a parse error");
    }
}

#[test]
fn test_parse_is_strict_about_tokens() {
    for input in [
        "vector('[1,,2]')",
        "vector('[1,]')",
        "vector('[,1]')",
        "vector('[ 1,2]')",
        "vector('[1, 2]')",
        "vector('[1;2]')",
    ] {
        assert!(input.parse::<Vector>().is_err(), "{input} should be rejected");
    }
}

#[test]
fn test_parse_failure_leaves_vector_unchanged() {
    let mut vector = Vector::new(vec![4.0, 5.0]);
    assert!(vector.parse("vector('[1,2,a]')").is_err());
    assert_eq!(vector, Vector::new(vec![4.0, 5.0]));
}

#[test]
fn test_parse_replaces_contents() {
    let mut vector = Vector::new(vec![4.0, 5.0, 6.0, 7.0]);
    vector.parse("vector('[1]')").unwrap();
    assert_eq!(vector.as_slice(), &[1.0]);
}

#[test]
fn test_text_round_trip_preserves_bits() {
    let values = vec![
        0.1,
        -0.0,
        f32::MAX,
        f32::MIN_POSITIVE,
        f32::from_bits(1),
        123_456.79,
        f32::INFINITY,
        f32::NEG_INFINITY,
    ];
    let vector = Vector::new(values);
    let parsed: Vector = vector.to_literal().parse().unwrap();
    assert_eq!(parsed, vector);
}

#[test]
fn test_parse_brackets_alone() {
    assert_eq!(parse_brackets("[1.5,-2.75,3]").unwrap(), vec![1.5, -2.75, 3.0]);
    assert!(parse_brackets("[]").unwrap().is_empty());
    assert!(parse_brackets("vector('[1]')").is_err());

    let vector = Vector::from_brackets("[0.5]").unwrap();
    assert_eq!(vector.as_slice(), &[0.5]);
}
