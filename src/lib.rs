// src/lib.rs
//! Glob based selection of package versions.
//!
//! ```
//! use pkgprune::select;
//!
//! let versions = ["1.0.0", "1.0.0-beta1", "1.1.0", "2.0.0"];
//! let doomed = select(versions, ["1.*"], ["*-beta*"]).unwrap();
//! assert_eq!(doomed, ["1.0.0", "1.1.0"]);
//! ```

pub mod config;
pub mod run;

pub use config::{PruneConfig, PruneConfigBuilder};
pub use globber::{
    GlobError, MatchOptions, Matcher, PatternSet, anchored_regex, filter, glob_to_regex, is_match,
    split_patterns,
};
pub use run::{RunError, select, select_with_config};
