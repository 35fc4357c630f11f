// crates/logging/src/subscriber.rs
#![allow(missing_docs)]

use crate::flags::{LogFormat, SubscriberConfig};
use crate::formatter::{ActionsFormatter, PlainFormatter};
use crate::json_format::JsonFormatter;
use crate::sink::LogWriter;
use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt as tracing_fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else if verbose > 2 {
        LevelFilter::TRACE
    } else if verbose > 1 {
        LevelFilter::DEBUG
    } else if verbose > 0 {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}

/// Build a [`tracing`] subscriber from `cfg`. `RUST_LOG` directives are
/// layered on top of the level derived from `verbose`/`quiet`.
pub fn subscriber(cfg: SubscriberConfig) -> io::Result<Box<dyn tracing::Subscriber + Send + Sync>> {
    let SubscriberConfig {
        format,
        verbose,
        quiet,
        log_file,
        colored,
        timestamps,
    } = cfg;

    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose, quiet).into())
        .from_env_lossy();

    let writer = match format {
        LogFormat::Actions => LogWriter::Stdout,
        LogFormat::Text | LogFormat::Json => LogWriter::Stderr,
    };
    let ansi = colored && format == LogFormat::Text && io::stderr().is_terminal();
    let base = tracing_fmt::layer().with_writer(writer).with_ansi(ansi);
    let fmt_layer = match format {
        LogFormat::Text => base.event_format(PlainFormatter::new(timestamps)).boxed(),
        LogFormat::Json => base.event_format(JsonFormatter).boxed(),
        LogFormat::Actions => base.event_format(ActionsFormatter).boxed(),
    };

    let file_layer = if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let base = tracing_fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false);
        let layer = match format {
            LogFormat::Json => base.event_format(JsonFormatter).boxed(),
            LogFormat::Text | LogFormat::Actions => {
                base.event_format(PlainFormatter::new(true)).boxed()
            }
        };
        Some(layer)
    } else {
        None
    };

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(file_layer);
    Ok(Box::new(registry))
}

/// Initialise the global [`tracing`] subscriber.
pub fn init(cfg: SubscriberConfig) -> io::Result<()> {
    subscriber(cfg)?.init();
    Ok(())
}
