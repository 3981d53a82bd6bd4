#![allow(clippy::unwrap_used)]

use std::fs;

use htmlindent::{format_file, ErrorKind, IndentOptions, Result};

#[test]
fn format_file_reads_and_indents() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("page.html");
    fs::write(&path, "\n<section><h2>t</h2><p>x</p></section>\n")?;

    let out = format_file(&path, &IndentOptions::default())?;
    assert_eq!(out, "<section>\n  <h2>t</h2>\n  <p>x</p>\n</section>");
    Ok(())
}

#[test]
fn format_file_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.html");

    let err = format_file(&path, &IndentOptions::default()).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Io(_)));
    assert!(err.to_string().contains("missing.html"));
}
