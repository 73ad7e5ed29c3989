//! Conversion Command Tests

use libsql_vector_cli::Format;
use libsql_vector_cli::convert::{
    ConvertRequest, convert_bytes, query_expr_bytes, read_input, run_convert, write_output,
};
use tempfile::TempDir;

#[test]
fn test_convert_literal_to_json() {
    let out = convert_bytes(b"vector('[1,2,3]')", Format::Literal, Format::Json).unwrap();
    assert_eq!(out, b"[1,2,3]\n");
}

#[test]
fn test_convert_chain_reproduces_input() {
    let literal = b"vector('[1.5,-2.75,3]')\n";
    let json = convert_bytes(literal, Format::Literal, Format::Json).unwrap();
    let binary = convert_bytes(&json, Format::Json, Format::Binary).unwrap();
    let base64 = convert_bytes(&binary, Format::Binary, Format::Base64).unwrap();
    let back = convert_bytes(&base64, Format::Base64, Format::Literal).unwrap();
    assert_eq!(back, literal);
}

#[test]
fn test_convert_error_names_input_format() {
    let err = convert_bytes(b"[1,2,a]", Format::Json, Format::Literal).unwrap_err();
    assert!(err.to_string().contains("json"));
    assert!(err.chain().count() > 1);
}

#[test]
fn test_query_expr_bytes() {
    let out = query_expr_bytes(b"[1.5,-2.75,3]", Format::Json).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{\"sql\":\"vector(?)\",\"vars\":[\"[1.5,-2.75,3]\"]}\n"
    );
}

#[test]
fn test_run_convert_with_files() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.txt");
    let output = temp_dir.path().join("out.bin");
    std::fs::write(&input, "vector('[1,2]')\n").unwrap();

    run_convert(&ConvertRequest {
        from: Format::Literal,
        to: Format::Binary,
        input: Some(input),
        output: Some(output.clone()),
    })
    .unwrap();

    let bytes = read_input(Some(&output)).unwrap();
    assert_eq!(bytes, [1.0_f32.to_le_bytes(), 2.0_f32.to_le_bytes()].concat());
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");
    let err = read_input(Some(&missing)).unwrap_err();
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_write_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.txt");
    write_output(Some(&path), b"[1]\n").unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"[1]\n");
}
