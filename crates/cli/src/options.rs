// crates/cli/src/options.rs

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use globber::MatchOptions;
use logging::{LogFormat, SubscriberConfig};
use registry::InputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "pkgprune",
    version,
    about = "Select package versions for deletion with glob patterns"
)]
pub struct Cli {
    #[command(flatten)]
    pub log: LogOpts,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the versions selected for deletion
    Select(SelectOpts),
    /// Check one identifier against one pattern; exits 1 when it does not match
    Match(MatchOpts),
    /// Print the anchored regular expression a pattern compiles to
    Translate(TranslateOpts),
}

#[derive(Args, Debug, Clone, Default)]
pub struct LogOpts {
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Output")]
    pub verbose: u8,
    #[arg(short, long, global = true, help_heading = "Output")]
    pub quiet: bool,
    #[arg(
        long = "log-format",
        value_enum,
        value_name = "FMT",
        default_value_t = LogFormat::Text,
        global = true,
        help_heading = "Output"
    )]
    pub log_format: LogFormat,
    #[arg(long = "log-file", value_name = "FILE", global = true, help_heading = "Output")]
    pub log_file: Option<PathBuf>,
    #[arg(long = "no-color", global = true, help_heading = "Output")]
    pub no_color: bool,
    #[arg(long, global = true, help_heading = "Output")]
    pub timestamps: bool,
}

impl LogOpts {
    pub fn subscriber_config(&self) -> SubscriberConfig {
        SubscriberConfig::builder()
            .format(self.log_format)
            .verbose(self.verbose)
            .quiet(self.quiet)
            .log_file(self.log_file.clone())
            .colored(!self.no_color)
            .timestamps(self.timestamps)
            .build()
    }
}

#[derive(Args, Debug, Clone)]
pub struct PatternOpts {
    /// match case exactly instead of ignoring it
    #[arg(long = "case-sensitive", help_heading = "Matching")]
    pub case_sensitive: bool,
    /// upper bound for one match evaluation, in milliseconds
    #[arg(
        long = "timeout-ms",
        value_name = "MS",
        default_value_t = 5000,
        help_heading = "Matching"
    )]
    pub timeout_ms: u64,
}

impl PatternOpts {
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions::default()
            .with_case_insensitive(!self.case_sensitive)
            .with_timeout(Duration::from_millis(self.timeout_ms))
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum InputFormatArg {
    #[default]
    Lines,
    Json,
}

impl From<InputFormatArg> for InputFormat {
    fn from(arg: InputFormatArg) -> Self {
        match arg {
            InputFormatArg::Lines => InputFormat::Lines,
            InputFormatArg::Json => InputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// selected identifiers, one per line
    #[default]
    Lines,
    /// the deletion plan as JSON
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct SelectOpts {
    /// patterns selecting versions; a value may hold several comma separated globs
    #[arg(
        short,
        long = "include",
        value_name = "PATTERNS",
        env = "INPUT_VERSION_FILTER",
        help_heading = "Selection"
    )]
    pub include: Vec<String>,
    /// patterns protecting versions from selection
    #[arg(
        short,
        long = "exclude",
        value_name = "PATTERNS",
        env = "INPUT_EXCLUDE_FILTER",
        help_heading = "Selection"
    )]
    pub exclude: Vec<String>,
    #[command(flatten)]
    pub patterns: PatternOpts,
    /// read candidate versions from FILE; `-` or no value reads stdin
    #[arg(long, value_name = "FILE", help_heading = "Input")]
    pub input: Option<PathBuf>,
    #[arg(
        long = "input-format",
        value_enum,
        default_value_t = InputFormatArg::Lines,
        help_heading = "Input"
    )]
    pub input_format: InputFormatArg,
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines, help_heading = "Output")]
    pub output: OutputFormat,
    #[arg(long, value_name = "USER", env = "INPUT_USERNAME", help_heading = "Registry")]
    pub user: Option<String>,
    #[arg(long, value_name = "ORG", env = "INPUT_ORGNAME", help_heading = "Registry")]
    pub org: Option<String>,
    #[arg(
        long = "package-type",
        value_name = "TYPE",
        env = "INPUT_PACKAGE_TYPE",
        help_heading = "Registry"
    )]
    pub package_type: Option<String>,
    #[arg(
        long = "package-name",
        value_name = "NAME",
        env = "INPUT_PACKAGE_NAME",
        help_heading = "Registry"
    )]
    pub package_name: Option<String>,
}

impl SelectOpts {
    /// Whether any registry location input was given.
    pub fn has_registry_inputs(&self) -> bool {
        [&self.user, &self.org, &self.package_name]
            .into_iter()
            .flatten()
            .any(|v| !v.trim().is_empty())
    }
}

#[derive(Args, Debug, Clone)]
pub struct MatchOpts {
    pub identifier: String,
    pub pattern: String,
    #[command(flatten)]
    pub patterns: PatternOpts,
}

#[derive(Args, Debug, Clone)]
pub struct TranslateOpts {
    pub pattern: String,
}
