// src/config.rs

use globber::MatchOptions;
use logging::{LogFormat, SubscriberConfig};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for a selection run.
#[derive(Clone, Debug)]
pub struct PruneConfig {
    pub log_format: LogFormat,
    pub verbose: u8,
    pub quiet: bool,
    pub log_file: Option<PathBuf>,
    pub colored: bool,
    pub timestamps: bool,
    pub match_options: MatchOptions,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Text,
            verbose: 0,
            quiet: false,
            log_file: None,
            colored: true,
            timestamps: false,
            match_options: MatchOptions::default(),
        }
    }
}

impl PruneConfig {
    /// Create a new builder for [`PruneConfig`].
    pub fn builder() -> PruneConfigBuilder {
        PruneConfigBuilder::default()
    }

    pub(crate) fn subscriber_config(&self) -> SubscriberConfig {
        SubscriberConfig::builder()
            .format(self.log_format)
            .verbose(self.verbose)
            .quiet(self.quiet)
            .log_file(self.log_file.clone())
            .colored(self.colored)
            .timestamps(self.timestamps)
            .build()
    }
}

/// Builder for [`PruneConfig`].
#[derive(Debug, Default)]
#[must_use]
pub struct PruneConfigBuilder {
    cfg: PruneConfig,
}

impl PruneConfigBuilder {
    pub fn log_format(mut self, log_format: LogFormat) -> Self {
        self.cfg.log_format = log_format;
        self
    }

    pub fn verbose(mut self, verbose: u8) -> Self {
        self.cfg.verbose = verbose;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.cfg.quiet = quiet;
        self
    }

    pub fn log_file(mut self, log_file: Option<PathBuf>) -> Self {
        self.cfg.log_file = log_file;
        self
    }

    pub fn colored(mut self, enable: bool) -> Self {
        self.cfg.colored = enable;
        self
    }

    pub fn timestamps(mut self, enable: bool) -> Self {
        self.cfg.timestamps = enable;
        self
    }

    pub fn case_insensitive(mut self, enable: bool) -> Self {
        self.cfg.match_options = self.cfg.match_options.with_case_insensitive(enable);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.cfg.match_options = self.cfg.match_options.with_timeout(timeout);
        self
    }

    pub fn build(self) -> PruneConfig {
        self.cfg
    }
}
