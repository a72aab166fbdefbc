//! Tests for the `translate` command driver.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::fs;
use std::path::{Path, PathBuf};

use jx_diagnostic::emitter::ColorMode;
use jx_diagnostic::ErrorCode;
use jxc::commands::{
    output_path, parse_translate_args, translate_files, FileError, TranslateCommand,
};
use pretty_assertions::assert_eq;

const GOOD: &str = "int x = -1;\nint y = x >>> 28; // top nibble\n";
const GOOD_CS: &str = "int x = -1;\nint y = (int)((uint)(x) >> 28); // top nibble\n";
const BAD: &str = "int x = 1;\nint y = x >>> 1 >>> 2;\n";

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

fn command(inputs: Vec<PathBuf>, keep_going: bool, out: Option<&Path>) -> TranslateCommand {
    let mut command = TranslateCommand {
        inputs,
        ..TranslateCommand::default()
    };
    command.cli.keep_going = keep_going;
    command.cli.output_dir = out.map(Path::to_path_buf);
    command
}

#[test]
fn parses_all_options() {
    let command = parse_translate_args(&args(&[
        "a.java",
        "-o",
        "out",
        "--keep-going",
        "--cast=64:Int64:UInt64",
        "--color=never",
        "b.java",
    ]))
    .unwrap();
    assert_eq!(command.inputs, [PathBuf::from("a.java"), PathBuf::from("b.java")]);
    assert_eq!(command.cli.output_dir, Some(PathBuf::from("out")));
    assert!(command.cli.keep_going);
    assert_eq!(command.cli.color, ColorMode::Never);
    let pair = command
        .options
        .cast_table
        .pair(jx_csharp::width::PrimitiveWidth::W64);
    assert_eq!(pair.unsigned, "UInt64");
}

#[test]
fn rejects_bad_arguments() {
    assert!(parse_translate_args(&args(&["--keep-going"])).is_err());
    assert!(parse_translate_args(&args(&["a.java", "-o"])).is_err());
    assert!(parse_translate_args(&args(&["a.java", "--cast=7:a:b"])).is_err());
    assert!(parse_translate_args(&args(&["a.java", "--color=rainbow"])).is_err());
    assert!(parse_translate_args(&args(&["a.java", "--frobnicate"])).is_err());
}

#[test]
fn output_goes_next_to_input_or_into_dir() {
    assert_eq!(
        output_path(Path::new("src/Foo.java"), None),
        PathBuf::from("src/Foo.cs")
    );
    assert_eq!(
        output_path(Path::new("src/Foo.java"), Some(Path::new("gen"))),
        PathBuf::from("gen/Foo.cs")
    );
}

#[test]
fn translates_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "Good.java", GOOD);

    let report = translate_files(&command(vec![input], false, None));

    assert!(report.succeeded());
    let out = dir.path().join("Good.cs");
    assert_eq!(report.written, [out.clone()]);
    assert_eq!(fs::read_to_string(out).unwrap(), GOOD_CS);
}

#[test]
fn one_failure_aborts_every_file() {
    let dir = tempfile::tempdir().unwrap();
    let good = write(dir.path(), "Good.java", GOOD);
    let bad = write(dir.path(), "Bad.java", BAD);

    let report = translate_files(&command(vec![good, bad], false, None));

    assert_eq!(report.failed(), 1);
    assert!(report.written.is_empty());
    assert!(!dir.path().join("Good.cs").exists());
    let Err(FileError::Translate(failure)) = &report.outcomes[1].result else {
        panic!("Bad.java must fail to translate");
    };
    assert_eq!(failure.codes(), [ErrorCode::E3003]);
}

#[test]
fn keep_going_writes_what_translated() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("gen");
    let good = write(dir.path(), "Good.java", GOOD);
    let bad = write(dir.path(), "Bad.java", BAD);

    let report = translate_files(&command(vec![bad, good], true, Some(&out)));

    assert_eq!(report.failed(), 1);
    assert_eq!(report.written, [out.join("Good.cs")]);
    assert_eq!(fs::read_to_string(out.join("Good.cs")).unwrap(), GOOD_CS);
    assert!(!out.join("Bad.cs").exists());
}

#[test]
fn missing_input_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let report = translate_files(&command(vec![dir.path().join("Nope.java")], true, None));
    assert!(matches!(
        &report.outcomes[0].result,
        Err(FileError::Read(msg)) if msg.contains("cannot find file")
    ));
}

#[test]
fn inputs_sharing_an_output_path_fail_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    fs::create_dir(dir.path().join("a")).unwrap();
    fs::create_dir(dir.path().join("b")).unwrap();
    let first = write(dir.path(), "a/X.java", "int a = 1;");
    let second = write(dir.path(), "b/X.java", "int b = 2;");

    let inputs = vec![first.clone(), second.clone()];
    let report = translate_files(&command(inputs, false, Some(&out)));

    assert!(!report.succeeded());
    assert_eq!(report.failed(), 2);
    assert!(report.written.is_empty());
    assert!(!out.join("X.cs").exists());
    for (outcome, other) in report.outcomes.iter().zip([&second, &first]) {
        let Err(FileError::Write(msg)) = &outcome.result else {
            panic!("{} must fail with a write error", outcome.input.display());
        };
        assert!(msg.contains(&other.display().to_string()), "{msg}");
    }
}

#[test]
fn keep_going_still_skips_shared_output_paths() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    fs::create_dir(dir.path().join("a")).unwrap();
    fs::create_dir(dir.path().join("b")).unwrap();
    let first = write(dir.path(), "a/X.java", "int a = 1;");
    let second = write(dir.path(), "b/X.java", "int b = 2;");
    let good = write(dir.path(), "Good.java", GOOD);

    let report = translate_files(&command(vec![first, second, good], true, Some(&out)));

    assert_eq!(report.failed(), 2);
    assert_eq!(report.written, [out.join("Good.cs")]);
    assert!(!out.join("X.cs").exists());
}
