//! CLI smoke tests
//!
//! Only the paths that need no LaTeX installation or viewer are exercised:
//! printing the markup, the native renderer writing to a file, and the error
//! exits.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn mklabels(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mklabels"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("failed to execute mklabels")
}

#[test]
fn test_latex_output() {
    let output = mklabels(&["-t", "Flour", "Sugar"]);
    assert!(output.status.success(), "mklabels -t should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(r"\documentclass"));
    assert!(stdout.contains(r"\node at (43, 21.5) {Flour};"));
    assert!(stdout.contains(r"\node at (105, 21.5) {Sugar};"));
    assert!(stdout.trim_end().ends_with(r"\end{document}"));
}

#[test]
fn test_latex_output_with_options() {
    let output = mklabels(&[
        "-t", "-W", "100", "-H", "40", "-m", "10", "-l", "3", "-s", "2", "--style", "rounded",
        "-d", "jam",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r"\newcommand{\lblwidth}{100}"));
    assert!(stdout.contains(r"\newcommand{\lblmarkerlength}{3}"));
    assert!(stdout.contains(r"arc (90:360:\lblmarkerlength)"));
    assert!(stdout.contains("\n\\draw[help lines] (10, 10) rectangle"));
    assert!(stdout.contains(r"\node at (60, 30) {jam};"));
}

#[test]
fn test_labels_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mklabels"))
        .arg("-t")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn mklabels");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"Flour\n\nSalt\n")
        .expect("failed to write labels");
    let output = child.wait_with_output().expect("mklabels runs");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches(r"\node at").count(), 2);
}

#[test]
fn test_impossible_layout_fails() {
    let output = mklabels(&["-t", "-W", "262", "-H", "174", "one"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not enough space"),
        "unexpected stderr: {stderr}"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_too_many_labels_fails() {
    let output = mklabels(&["-t", "-W", "261", "-H", "174", "one", "two"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("2 requested"), "unexpected stderr: {stderr}");
    assert!(stderr.contains("only 1 fit"), "unexpected stderr: {stderr}");
}

#[test]
fn test_no_labels_fails() {
    let output = mklabels(&["-t"]);
    assert!(!output.status.success());
}

#[test]
fn test_native_pdf_to_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("sheet.pdf");
    let output = mklabels(&[
        "-r",
        "native",
        "--style",
        "rounded",
        "--title",
        "Pantry",
        "-o",
        path.to_str().expect("utf-8 path"),
        "Flour",
        "Sugar",
    ]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let pdf = std::fs::read(&path).expect("pdf was written");
    assert!(pdf.starts_with(b"%PDF-"));
    assert!(pdf.windows(9).any(|w| w == b"Helvetica"));
}

#[test]
fn test_missing_compiler_fails_cleanly() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("sheet.pdf");
    let output = mklabels(&[
        "--compiler",
        "mklabels-no-such-compiler",
        "-o",
        path.to_str().expect("utf-8 path"),
        "Flour",
    ]);
    assert!(!output.status.success());
    assert!(!path.exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("mklabels-no-such-compiler"), "unexpected stderr: {stderr}");
}

#[test]
fn test_title_without_native_renderer_warns() {
    let output = mklabels(&["-t", "--title", "Pantry", "Flour"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--title"), "unexpected stderr: {stderr}");
}

#[test]
fn test_unknown_style_is_rejected() {
    let output = mklabels(&["-t", "--style", "wavy", "Flour"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("wavy"), "unexpected stderr: {stderr}");
}
