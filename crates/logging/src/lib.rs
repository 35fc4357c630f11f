// crates/logging/src/lib.rs
//! Tracing setup shared by the pkgprune binaries.

mod flags;
mod formatter;
mod json_format;
mod sink;
mod subscriber;

pub use flags::{LogFormat, SubscriberConfig, SubscriberConfigBuilder};
pub use formatter::{ActionsFormatter, PlainFormatter, escape_workflow_data};
pub use json_format::JsonFormatter;
pub use subscriber::{init, level_for, subscriber};
