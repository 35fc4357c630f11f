// crates/logging/src/formatter.rs
use nu_ansi_term::Color;
use std::fmt;
use time::{OffsetDateTime, macros::format_description};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, format::Writer};
use tracing_subscriber::registry::LookupSpan;

/// Human readable `message key=value ...` lines.
///
/// Warnings and errors carry a `warn: ` / `error: ` prefix, painted yellow or
/// red when the writer accepts ANSI escapes.
pub struct PlainFormatter {
    timestamps: bool,
}

impl PlainFormatter {
    pub fn new(timestamps: bool) -> Self {
        Self { timestamps }
    }
}

/// GitHub Actions workflow commands, one per event.
///
/// `INFO` becomes `::notice::`, `WARN` `::warning::`, `ERROR` `::error::`
/// and everything below `INFO` `::debug::`.
#[derive(Default)]
pub struct ActionsFormatter;

impl ActionsFormatter {
    pub fn command(level: Level) -> &'static str {
        match level {
            Level::ERROR => "error",
            Level::WARN => "warning",
            Level::INFO => "notice",
            Level::DEBUG | Level::TRACE => "debug",
        }
    }
}

/// Escape a workflow command payload so the runner does not split or
/// reinterpret it.
pub fn escape_workflow_data(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '%' => out.push_str("%25"),
            '\r' => out.push_str("%0D"),
            '\n' => out.push_str("%0A"),
            ']' => out.push_str("%5D"),
            ':' => out.push_str("%3A"),
            _ => out.push(c),
        }
    }
    out
}

struct MsgVisitor {
    msg: String,
    fields: Vec<(String, String)>,
}

impl MsgVisitor {
    fn new() -> Self {
        Self {
            msg: String::new(),
            fields: Vec::new(),
        }
    }

    fn line(&self, fallback: &str) -> String {
        let mut out = if self.msg.is_empty() {
            fallback.to_string()
        } else {
            self.msg.clone()
        };
        for (name, value) in &self.fields {
            out.push(' ');
            out.push_str(name);
            out.push('=');
            out.push_str(value);
        }
        out
    }
}

impl Visit for MsgVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            if !self.msg.is_empty() {
                self.msg.push(' ');
            }
            self.msg.push_str(value);
        } else {
            self.fields
                .push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            if !self.msg.is_empty() {
                self.msg.push(' ');
            }
            self.msg.push_str(&format!("{value:?}"));
        } else {
            self.fields
                .push((field.name().to_string(), format!("{value:?}")));
        }
    }
}

fn format_time() -> Result<String, fmt::Error> {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let fmt = format_description!("[year]/[month]/[day] [hour]:[minute]:[second]");
    now.format(&fmt).map_err(|_| fmt::Error)
}

fn level_label(level: Level) -> Option<&'static str> {
    match level {
        Level::ERROR => Some("error"),
        Level::WARN => Some("warn"),
        _ => None,
    }
}

fn label_color(level: Level) -> Color {
    if level == Level::ERROR {
        Color::Red
    } else {
        Color::Yellow
    }
}

impl<S, N> FormatEvent<S, N> for PlainFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = MsgVisitor::new();
        event.record(&mut visitor);
        if self.timestamps {
            write!(writer, "{} ", format_time()?)?;
        }
        let level = *event.metadata().level();
        if let Some(label) = level_label(level) {
            if writer.has_ansi_escapes() {
                write!(writer, "{}: ", label_color(level).bold().paint(label))?;
            } else {
                write!(writer, "{label}: ")?;
            }
        }
        writer.write_str(&visitor.line(event.metadata().target()))?;
        writer.write_char('\n')
    }
}

impl<S, N> FormatEvent<S, N> for ActionsFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = MsgVisitor::new();
        event.record(&mut visitor);
        let command = Self::command(*event.metadata().level());
        let line = visitor.line(event.metadata().target());
        writeln!(writer, "::{command}::{}", escape_workflow_data(&line))
    }
}
