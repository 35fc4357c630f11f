// crates/globber/src/error.rs
//! Error type shared by the compile and match entry points.

use std::time::Duration;
use thiserror::Error;

/// Errors raised while compiling or evaluating glob patterns.
///
/// Glob syntax itself never produces an error: unterminated classes and
/// alternations are matched literally.
#[derive(Debug, Error)]
pub enum GlobError {
    /// The translated expression exceeded a compile bound: the 10 MiB program
    /// size limit or [`NEST_LIMIT`](crate::pattern::NEST_LIMIT) levels of
    /// nesting (braces deeper than 256 levels can reach it). This is the only
    /// error glob text can produce.
    #[error("failed to compile pattern `{pattern}`: {source}")]
    Compile {
        /// Raw glob that failed.
        pattern: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
    /// A single match attempt ran longer than the configured bound.
    #[error("matching `{pattern}` took {elapsed:?}, limit is {limit:?}")]
    MatchTimeout {
        /// Raw glob being evaluated.
        pattern: String,
        /// Configured bound.
        limit: Duration,
        /// Measured evaluation time.
        elapsed: Duration,
    },
}

/// Result type for glob operations.
pub type Result<T> = std::result::Result<T, GlobError>;
