// crates/globber/src/matcher.rs
//! Include/exclude decisions over version identifiers.

use crate::error::Result;
use crate::pattern::{CompiledPattern, MatchOptions, PatternSet};
use tracing::warn;

/// Combined include and exclude pattern sets.
///
/// An identifier is selected when it matches at least one include pattern
/// (or the include set is empty) and matches no exclude pattern. Exclusion
/// always wins over inclusion.
///
/// ```
/// use globber::{MatchOptions, Matcher};
///
/// let m = Matcher::new(&["test-*"], &["test-backup", "test-temp"], MatchOptions::default()).unwrap();
/// assert!(m.is_selected("test-v1"));
/// assert!(!m.is_selected("test-backup"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    include: PatternSet,
    exclude: PatternSet,
}

impl Matcher {
    /// Compile both pattern lists once.
    pub fn new<I, E, S, T>(include: I, exclude: E, opts: MatchOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        E: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Ok(Self {
            include: PatternSet::compile(include, opts)?,
            exclude: PatternSet::compile(exclude, opts)?,
        })
    }

    /// Combine already compiled sets.
    pub fn from_sets(include: PatternSet, exclude: PatternSet) -> Self {
        Self { include, exclude }
    }

    /// The include set.
    pub fn include(&self) -> &PatternSet {
        &self.include
    }

    /// The exclude set.
    pub fn exclude(&self) -> &PatternSet {
        &self.exclude
    }

    /// Decide whether `identifier` is selected, surfacing timeouts.
    pub fn try_is_selected(&self, identifier: &str) -> Result<bool> {
        let included = self.include.is_empty() || self.include.try_any(identifier)?;
        if !included {
            return Ok(false);
        }
        Ok(self.exclude.is_empty() || !self.exclude.try_any(identifier)?)
    }

    /// Decide whether `identifier` is selected. A timeout is logged and the
    /// identifier is treated as not selected.
    pub fn is_selected(&self, identifier: &str) -> bool {
        match self.try_is_selected(identifier) {
            Ok(selected) => selected,
            Err(err) => {
                warn!(target: "globber::match", identifier, error = %err, "treating as non-match");
                false
            }
        }
    }

    /// Borrow the matcher as a plain predicate.
    pub fn as_predicate(&self) -> impl Fn(&str) -> bool + '_ {
        move |identifier: &str| self.is_selected(identifier)
    }

    /// Keep the selected identifiers, in their original order. Duplicates are
    /// preserved.
    pub fn filter<I, S>(&self, identifiers: I) -> Vec<S>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        identifiers
            .into_iter()
            .filter(|id| self.is_selected(id.as_ref()))
            .collect()
    }
}

/// Match one identifier against one glob.
///
/// The glob is compiled as given, without list splitting.
pub fn is_match(identifier: &str, pattern: &str, opts: MatchOptions) -> Result<bool> {
    CompiledPattern::new(pattern, opts)?.try_matches(identifier)
}

/// Compile `include` and `exclude` and filter `identifiers` with them.
pub fn filter<I, S, P, Q, E, T>(
    identifiers: I,
    include: P,
    exclude: E,
    opts: MatchOptions,
) -> Result<Vec<S>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: IntoIterator<Item = Q>,
    Q: AsRef<str>,
    E: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    Ok(Matcher::new(include, exclude, opts)?.filter(identifiers))
}
