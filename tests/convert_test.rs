//! Tests for file and stream conversion.

use std::fs;

use marklink::{ConvertOptions, Error, linkify_file, linkify_reader};

#[test]
fn test_linkify_file_roundtrip() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let input = dir.path().join("message.txt");
    let output = dir.path().join("message.html");
    fs::write(&input, "# Hello\r\nsee www.example.com!\r\n").unwrap();

    let written = linkify_file(&input, &output, &ConvertOptions::new()).expect("Should convert");

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(written, html.len());
    assert_eq!(
        html,
        "<h1>Hello</h1><br>see <a href=\"https://www.example.com\" target=\"_blank\" \
         rel=\"noopener noreferrer\">https://www.example.com</a>!<br>"
    );
}

#[test]
fn test_linkify_file_legacy_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cp1251.txt");
    let output = dir.path().join("cp1251.html");
    // "- Привет" in Windows-1251
    fs::write(&input, b"- \xCF\xF0\xE8\xE2\xE5\xF2").unwrap();

    let options = ConvertOptions::new().with_encoding("windows-1251").unwrap();
    linkify_file(&input, &output, &options).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "<ul><li>Привет</li></ul>"
    );
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = linkify_file(
        dir.path().join("missing.txt"),
        dir.path().join("out.html"),
        &ConvertOptions::new(),
    );
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_linkify_reader_to_vec() {
    let mut output = Vec::new();
    linkify_reader(
        "```\nlet x = *p;\n```".as_bytes(),
        &mut output,
        &ConvertOptions::new(),
    )
    .unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "<pre><code>\nlet x = *p;\n</code></pre>"
    );
}
