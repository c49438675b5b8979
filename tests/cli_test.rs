use clap::Parser;
use discforge::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("discforge")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_defaults() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.manifest, None);
    assert_eq!(parsed.output_dir, PathBuf::from("."));
    assert_eq!(parsed.name, None);
    assert_eq!(parsed.offset, None);
    assert!(!parsed.zip);
    assert!(!parsed.verbose);
}

#[test]
fn test_manifest_argument() {
    let parsed = Args::try_parse_from(make_args(&["my-discs.yaml"])).unwrap();
    assert_eq!(parsed.manifest, Some(PathBuf::from("my-discs.yaml")));
}

#[test]
fn test_all_flags() {
    let parsed = Args::try_parse_from(make_args(&[
        "--output-dir",
        "./out",
        "--name",
        "Other Pack",
        "--offset",
        "40",
        "--zip",
        "--verbose",
        "discs.json",
    ]))
    .unwrap();

    assert_eq!(parsed.output_dir, PathBuf::from("./out"));
    assert_eq!(parsed.name.as_deref(), Some("Other Pack"));
    assert_eq!(parsed.offset, Some(40));
    assert!(parsed.zip);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let parsed = Args::try_parse_from(make_args(&["-z", "-v", "-o", "out"])).unwrap();

    assert!(parsed.zip);
    assert!(parsed.verbose);
    assert_eq!(parsed.output_dir, PathBuf::from("out"));
}

#[test]
fn test_invalid_offset() {
    assert!(Args::try_parse_from(make_args(&["--offset", "many"])).is_err());
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["discs.json", "extra"])).is_err());
}
