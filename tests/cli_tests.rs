//! Tests for the `hdist` binary
//!
//! Runs the built executable and checks stdout, stderr and exit status.

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn hdist(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hdist"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run hdist")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_number_mode_prints_distance() {
    let output = hdist(&["-n", "ff", "00"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "8\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_file_mode_is_default() {
    let dir = TempDir::new().unwrap();
    let pa = dir.path().join("a.bin");
    let pb = dir.path().join("b.bin");
    fs::write(&pa, [0x0fu8, 0x00]).unwrap();
    fs::write(&pb, [0x00u8, 0x01]).unwrap();

    let output = hdist(&[pa.to_str().unwrap(), pb.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "5\n");
}

#[test]
fn test_invalid_hex_character() {
    let output = hdist(&["--number", "AG", "AB"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        stderr(&output),
        "error: non-hex character at position 2 in the argument 1\n"
    );
}

#[test]
fn test_length_mismatch() {
    let output = hdist(&["-n", "AB", "A"]);

    assert!(!output.status.success());
    assert_eq!(stderr(&output), "error: lengths of the arguments are different.\n");
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.bin");
    let missing = missing.to_str().unwrap();

    let output = hdist(&["-f", missing, missing]);

    assert!(!output.status.success());
    assert!(stderr(&output).starts_with(&format!("error: {}: ", missing)));
}

#[test]
fn test_argument_count_errors() {
    let output = hdist(&["-n", "ff"]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.starts_with("error: missing required arguments\n"));
    assert!(err.contains("--help' for more information"));

    let output = hdist(&["a", "b", "c"]);
    assert!(!output.status.success());
    assert!(stderr(&output).starts_with("error: too many arguments\n"));
}

#[test]
fn test_help_and_version() {
    let output = hdist(&["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("usage: "));

    let output = hdist(&["-v"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{}\n", env!("CARGO_PKG_VERSION")));
}

#[cfg(unix)]
#[test]
fn test_non_unicode_file_name() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join(OsStr::from_bytes(b"a\xff.bin"));
    fs::write(&path, [0x5au8]).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_hdist"))
        .arg(&path)
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run hdist");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "0\n");
}

#[cfg(unix)]
#[test]
fn test_non_unicode_hex_number() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let output = Command::new(env!("CARGO_BIN_EXE_hdist"))
        .arg("-n")
        .arg(OsStr::from_bytes(b"f\xff"))
        .arg("ff")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run hdist");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).starts_with("error: non-unicode hex number in the argument 1\n"));
}
