// crates/cli/tests/options.rs

use clap::Parser;
use logging::LogFormat;
use pkgprune_cli::options::{InputFormatArg, OutputFormat};
use pkgprune_cli::{Cli, Command};
use std::time::Duration;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("pkgprune").chain(args.iter().copied())).unwrap()
}

#[test]
fn select_defaults() {
    let cli = parse(&["select", "--include", "1.*"]);
    let Command::Select(opts) = cli.command else {
        panic!("expected select");
    };
    assert_eq!(opts.include, ["1.*"]);
    assert!(opts.exclude.is_empty());
    assert_eq!(opts.input_format, InputFormatArg::Lines);
    assert_eq!(opts.output, OutputFormat::Lines);
    let match_opts = opts.patterns.match_options();
    assert!(match_opts.case_insensitive);
    assert_eq!(match_opts.timeout, Duration::from_secs(5));
}

#[test]
fn repeated_pattern_flags_accumulate() {
    let cli = parse(&[
        "select", "-i", "1.*", "-i", "2.*,3.*", "-e", "*-rc*", "--case-sensitive", "--timeout-ms",
        "250",
    ]);
    let Command::Select(opts) = cli.command else {
        panic!("expected select");
    };
    assert_eq!(opts.include, ["1.*", "2.*,3.*"]);
    assert_eq!(opts.exclude, ["*-rc*"]);
    let match_opts = opts.patterns.match_options();
    assert!(!match_opts.case_insensitive);
    assert_eq!(match_opts.timeout, Duration::from_millis(250));
}

#[test]
fn global_logging_flags_after_subcommand() {
    let cli = parse(&["translate", "v*", "-vv", "--log-format", "actions", "--no-color"]);
    assert_eq!(cli.log.verbose, 2);
    assert_eq!(cli.log.log_format, LogFormat::Actions);
    let cfg = cli.log.subscriber_config();
    assert!(!cfg.colored);
    assert_eq!(cfg.verbose, 2);
}

#[test]
fn registry_inputs_detected_only_when_non_blank() {
    let cli = parse(&["select", "--user", "  "]);
    let Command::Select(opts) = cli.command else {
        panic!("expected select");
    };
    assert!(!opts.has_registry_inputs());

    let cli = parse(&["select", "--org", "acme", "--package-name", "Demo"]);
    let Command::Select(opts) = cli.command else {
        panic!("expected select");
    };
    assert!(opts.has_registry_inputs());
}

#[test]
fn match_requires_identifier_and_pattern() {
    let err = Cli::try_parse_from(["pkgprune", "match", "1.0"]).unwrap_err();
    assert_eq!(
        err.kind(),
        clap::error::ErrorKind::MissingRequiredArgument
    );
}

#[test]
fn unknown_log_format_rejected() {
    assert!(Cli::try_parse_from(["pkgprune", "--log-format", "xml", "translate", "a"]).is_err());
}
