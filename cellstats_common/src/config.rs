//! Run configuration.
//!
//! ```ignore
//! use cellstats_common::ScanConfig;
//! let cfg = ScanConfig::builder().verbose(true).parallel(false).build();
//! ```

/// Options controlling a statistics run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanConfig {
    /// Emit one diagnostic line per matched cell on the diagnostic stream.
    pub verbose: bool,
    /// Scan input files concurrently. Output order is unaffected.
    pub parallel: bool,
}

impl ScanConfig {
    /// Start building a configuration from the defaults.
    #[must_use]
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }
}

/// Builder for [`ScanConfig`].
#[derive(Clone, Debug, Default)]
pub struct ScanConfigBuilder {
    config: ScanConfig,
}

impl ScanConfigBuilder {
    /// Set per-match diagnostics.
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Set concurrent scanning.
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Finish the configuration.
    #[must_use]
    pub const fn build(self) -> ScanConfig {
        self.config
    }
}
