// crates/cli/tests/commands.rs

use clap::Parser;
use pkgprune_cli::{Cli, CliError, ExitCode, run_with_output};
use std::fs;
use tempfile::tempdir;

fn run(args: &[&str]) -> (pkgprune_cli::Result<ExitCode>, String) {
    let cli = Cli::try_parse_from(std::iter::once("pkgprune").chain(args.iter().copied())).unwrap();
    let mut out = Vec::new();
    let code = run_with_output(cli, &mut out);
    (code, String::from_utf8(out).unwrap())
}

#[test]
fn select_prints_matching_lines_in_input_order() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("versions.txt");
    fs::write(&input, "1.0.0\n1.0.0-beta1\n\n2.0.0\n1.1.0\n").unwrap();
    let (code, out) = run(&[
        "select",
        "--include",
        "1.*",
        "--exclude",
        "1.0.0-beta*",
        "--input",
        input.to_str().unwrap(),
    ]);
    assert_eq!(code.unwrap(), ExitCode::Ok);
    assert_eq!(out, "1.0.0\n1.1.0\n");
}

#[test]
fn select_json_plan_with_paths() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("versions.json");
    fs::write(
        &input,
        r#"[{"id": 5, "name": "0.1.0"}, {"id": 6, "name": "0.2.0-preview"}]"#,
    )
    .unwrap();
    let (code, out) = run(&[
        "select",
        "-i",
        "*-PREVIEW",
        "--input",
        input.to_str().unwrap(),
        "--input-format",
        "json",
        "--output",
        "json",
        "--org",
        "acme",
        "--package-name",
        "Demo",
    ]);
    assert_eq!(code.unwrap(), ExitCode::Ok);
    let plan: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(plan["considered"], 2);
    assert_eq!(plan["deletions"][0]["id"], 6);
    assert_eq!(
        plan["deletions"][0]["path"],
        "orgs/acme/packages/nuget/Demo/versions/6"
    );
}

#[test]
fn select_missing_input_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let (code, out) = run(&["select", "--input", missing.to_str().unwrap()]);
    let err = code.unwrap_err();
    assert!(matches!(err, CliError::Input { .. }));
    assert_eq!(err.exit_code(), ExitCode::Input);
    assert!(out.is_empty());
}

#[test]
fn select_rejects_ambiguous_owner() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("versions.txt");
    fs::write(&input, "1.0\n").unwrap();
    let (code, _) = run(&[
        "select",
        "--user",
        "octo",
        "--org",
        "acme",
        "--package-name",
        "Demo",
        "--input",
        input.to_str().unwrap(),
    ]);
    assert_eq!(code.unwrap_err().exit_code(), ExitCode::Config);
}

#[test]
fn match_exit_codes() {
    let (code, _) = run(&["match", "V1.2.3", "v1.*"]);
    assert_eq!(code.unwrap(), ExitCode::Ok);
    let (code, _) = run(&["match", "V1.2.3", "v1.*", "--case-sensitive"]);
    assert_eq!(code.unwrap(), ExitCode::NoMatch);
}

#[test]
fn translate_prints_anchored_regex() {
    let (code, out) = run(&["translate", "v*.{1,2}"]);
    assert_eq!(code.unwrap(), ExitCode::Ok);
    assert_eq!(out, "^v.*\\.(?:1|2)$\n");
}

#[test]
fn unwritable_log_file_is_reported() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("missing").join("log.txt");
    let (code, _) = run(&["--log-file", log.to_str().unwrap(), "translate", "a"]);
    let err = code.unwrap_err();
    assert!(matches!(err, CliError::LogFile(_)));
    assert_eq!(err.exit_code(), ExitCode::Io);
}
