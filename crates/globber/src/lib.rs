// crates/globber/src/lib.rs
//! Glob matching engine for version identifiers.
//!
//! Globs are translated into regular expressions, anchored, and compiled with
//! the [`regex`] crate. Supported syntax: `*`, `?`, `[...]`, `[!...]`,
//! `{a,b,c}` (nested) and `\` escapes. Malformed constructs never fail; they
//! fall back to matching their characters literally.
//!
//! ```
//! use globber::{MatchOptions, filter};
//!
//! let versions = ["1.0.0", "1.0.0-beta1", "2.0.0"];
//! let selected = filter(versions, &["1.*"], &["1.0.0-beta*"], MatchOptions::default()).unwrap();
//! assert_eq!(selected, ["1.0.0"]);
//! ```
#![deny(unsafe_op_in_unsafe_fn, rust_2018_idioms)]
#![warn(missing_docs)]

pub mod error;
pub mod matcher;
pub mod pattern;
pub mod split;
pub mod translate;

pub use error::{GlobError, Result};
pub use matcher::{Matcher, filter, is_match};
pub use pattern::{
    CompiledPattern, DEFAULT_CASE_INSENSITIVE, DEFAULT_TIMEOUT, MatchOptions, NEST_LIMIT, PatternSet,
};
pub use split::split_patterns;
pub use translate::{anchored_regex, glob_to_regex};
