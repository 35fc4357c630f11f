// crates/cli/src/select.rs

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use globber::{GlobError, Matcher, anchored_regex, is_match};
use registry::{RegistryInputs, parse_versions, plan_deletions};
use tracing::{debug, warn};

use crate::error::{CliError, ExitCode, Result};
use crate::options::{MatchOpts, OutputFormat, SelectOpts, TranslateOpts};

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        None => Ok(Box::new(io::stdin().lock())),
        Some(p) if p == Path::new("-") => Ok(Box::new(io::stdin().lock())),
        Some(p) => {
            let file = File::open(p).map_err(|source| CliError::Input {
                path: p.to_path_buf(),
                source,
            })?;
            Ok(Box::new(file))
        }
    }
}

pub fn run_select<W: Write>(opts: &SelectOpts, out: &mut W) -> Result<ExitCode> {
    let inputs = if opts.has_registry_inputs() {
        Some(RegistryInputs::new(
            opts.user.as_deref(),
            opts.org.as_deref(),
            opts.package_type.as_deref(),
            opts.package_name.as_deref(),
        )?)
    } else {
        None
    };
    let matcher = Matcher::new(&opts.include, &opts.exclude, opts.patterns.match_options())?;
    debug!(
        target: "pkgprune::select",
        include = matcher.include().len(),
        exclude = matcher.exclude().len(),
        "compiled patterns"
    );

    let reader = open_input(opts.input.as_deref())?;
    let versions = parse_versions(reader, opts.input_format.into())?;
    let plan = plan_deletions(&versions, &matcher, inputs.as_ref());

    match opts.output {
        OutputFormat::Lines => {
            for name in plan.names() {
                writeln!(out, "{name}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &plan)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(ExitCode::Ok)
}

pub fn run_match(opts: &MatchOpts) -> Result<ExitCode> {
    match is_match(&opts.identifier, &opts.pattern, opts.patterns.match_options()) {
        Ok(true) => Ok(ExitCode::Ok),
        Ok(false) => Ok(ExitCode::NoMatch),
        Err(err @ GlobError::MatchTimeout { .. }) => {
            warn!(target: "pkgprune::select", identifier = %opts.identifier, error = %err, "treating as non-match");
            Ok(ExitCode::NoMatch)
        }
        Err(err) => Err(err.into()),
    }
}

pub fn run_translate<W: Write>(opts: &TranslateOpts, out: &mut W) -> Result<ExitCode> {
    writeln!(out, "{}", anchored_regex(&opts.pattern))?;
    Ok(ExitCode::Ok)
}
