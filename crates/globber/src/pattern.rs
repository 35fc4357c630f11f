// crates/globber/src/pattern.rs
//! Compiled glob patterns and pattern sets.

use crate::error::{GlobError, Result};
use crate::split::split_patterns;
use crate::translate::anchored_regex;
use regex::{Regex, RegexBuilder};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Bound on a single match evaluation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Patterns ignore case unless told otherwise.
pub const DEFAULT_CASE_INSENSITIVE: bool = true;

const COMPILED_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Parser nesting bound. Each `{...}` level costs up to three levels (group,
/// alternation, concatenation), so braces nest at least 256 deep.
pub const NEST_LIMIT: u32 = 1024;

/// Options threaded through every compile and match entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Match without regard to case.
    pub case_insensitive: bool,
    /// Longest a single match evaluation may take before it is reported as
    /// [`GlobError::MatchTimeout`].
    pub timeout: Duration,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            case_insensitive: DEFAULT_CASE_INSENSITIVE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl MatchOptions {
    /// Case sensitive matching with the default timeout.
    pub fn case_sensitive() -> Self {
        Self {
            case_insensitive: false,
            ..Self::default()
        }
    }

    /// Replace the evaluation bound.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the case sensitivity.
    #[must_use]
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }
}

/// One glob compiled into an anchored regular expression.
///
/// The `regex` engines run in time linear in the input, so a pattern can not
/// backtrack catastrophically; the timeout only flags unexpectedly slow
/// evaluations.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    glob: String,
    regex: Regex,
    case_insensitive: bool,
    timeout: Duration,
}

impl CompiledPattern {
    /// Compile a single glob. The glob is used as given; list splitting and
    /// trimming happen in [`PatternSet::compile`].
    pub fn new(glob: &str, opts: MatchOptions) -> Result<Self> {
        let expr = anchored_regex(glob);
        let regex = RegexBuilder::new(&expr)
            .case_insensitive(opts.case_insensitive)
            .dot_matches_new_line(true)
            .size_limit(COMPILED_SIZE_LIMIT)
            .nest_limit(NEST_LIMIT)
            .build()
            .map_err(|source| GlobError::Compile {
                pattern: glob.to_string(),
                source,
            })?;
        debug!(target: "globber::compile", glob, regex = %expr, "compiled pattern");
        Ok(Self {
            glob: glob.to_string(),
            regex,
            case_insensitive: opts.case_insensitive,
            timeout: opts.timeout,
        })
    }

    /// The glob this pattern was compiled from.
    pub fn glob(&self) -> &str {
        &self.glob
    }

    /// The anchored regular expression.
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    /// Whether the pattern ignores case.
    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// The evaluation bound.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Match `input` against the whole pattern.
    ///
    /// # Errors
    ///
    /// Returns [`GlobError::MatchTimeout`] when the evaluation took longer
    /// than the configured bound. Callers treat this as a non-match.
    pub fn try_matches(&self, input: &str) -> Result<bool> {
        let started = Instant::now();
        let matched = self.regex.is_match(input);
        let elapsed = started.elapsed();
        if elapsed > self.timeout {
            return Err(GlobError::MatchTimeout {
                pattern: self.glob.clone(),
                limit: self.timeout,
                elapsed,
            });
        }
        trace!(target: "globber::match", glob = %self.glob, input, matched);
        Ok(matched)
    }
}

/// Ordered collection of compiled patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
}

impl PatternSet {
    /// Compile raw pattern configuration.
    ///
    /// Each raw string may hold several comma separated globs. Segments are
    /// trimmed and empty or whitespace-only ones are dropped, so they never
    /// turn into a pattern matching the empty string.
    ///
    /// # Errors
    ///
    /// Fails with [`GlobError::Compile`] if any glob exceeds the compiled
    /// size or nesting bounds; the whole set is rejected.
    pub fn compile<I, S>(raw: I, opts: MatchOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        for item in raw {
            for part in split_patterns(item.as_ref()) {
                let glob = part.trim();
                if glob.is_empty() {
                    continue;
                }
                patterns.push(CompiledPattern::new(glob, opts)?);
            }
        }
        Ok(Self { patterns })
    }

    /// True when no pattern survived compilation.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of compiled patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Iterate over the compiled patterns in configuration order.
    pub fn iter(&self) -> std::slice::Iter<'_, CompiledPattern> {
        self.patterns.iter()
    }

    /// Whether any pattern matches `input`. The first timeout aborts the
    /// evaluation for this input.
    pub fn try_any(&self, input: &str) -> Result<bool> {
        for pattern in &self.patterns {
            if pattern.try_matches(input)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a CompiledPattern;
    type IntoIter = std::slice::Iter<'a, CompiledPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
