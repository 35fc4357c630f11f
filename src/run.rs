// src/run.rs

use globber::{GlobError, Matcher};
use std::io;
use thiserror::Error;
use tracing::subscriber::with_default;
use tracing::info;

use crate::config::PruneConfig;
use logging::subscriber;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Glob(#[from] GlobError),
    #[error("failed to set up logging: {0}")]
    Logging(#[from] io::Error),
}

/// Filter `identifiers` with `include` and `exclude` under the logging and
/// matching settings of `cfg`.
pub fn select_with_config<I, S, P, Q, E, T>(
    identifiers: I,
    include: P,
    exclude: E,
    cfg: &PruneConfig,
) -> Result<Vec<S>, RunError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: IntoIterator<Item = Q>,
    Q: AsRef<str>,
    E: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let sub = subscriber(cfg.subscriber_config())?;
    with_default(sub, || -> Result<Vec<S>, RunError> {
        let matcher = Matcher::new(include, exclude, cfg.match_options)?;
        let selected = matcher.filter(identifiers);
        info!(target: "pkgprune::select", selected = selected.len(), "filtered identifiers");
        Ok(selected)
    })
}

pub fn select<I, S, P, Q, E, T>(identifiers: I, include: P, exclude: E) -> Result<Vec<S>, RunError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: IntoIterator<Item = Q>,
    Q: AsRef<str>,
    E: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    select_with_config(identifiers, include, exclude, &PruneConfig::default())
}
