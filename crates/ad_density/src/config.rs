//! Scoring policy for the density audit.
//!
//! The only tunable is the coverage threshold above which a page fails. It
//! defaults to a quarter of the viewport and can be overridden from the
//! environment.

use std::env;

/// Environment variable that overrides [`DensityConfig::threshold`].
pub const THRESHOLD_ENV: &str = "AD_DENSITY_THRESHOLD";

/// Coverage ratio above which the audit fails.
pub const DEFAULT_THRESHOLD: f64 = 0.25;

/// Scoring policy applied by [`crate::evaluate_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensityConfig {
    /// A ratio strictly greater than this fails. Within `[0, 1]`.
    threshold: f64,
}

impl Default for DensityConfig {
    #[inline]
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl DensityConfig {
    /// Create a policy with the given threshold.
    ///
    /// Returns `None` unless `threshold` is a number within `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn with_threshold(threshold: f64) -> Option<Self> {
        (0.0..=1.0)
            .contains(&threshold)
            .then_some(Self { threshold })
    }

    /// Coverage ratio above which a page fails.
    #[inline]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Load configuration from the process environment.
    ///
    /// Reads `AD_DENSITY_THRESHOLD`. Values that do not parse, are not finite,
    /// or fall outside `[0, 1]` are ignored in favour of the default.
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(THRESHOLD_ENV)
            .and_then(|val| val.trim().parse::<f64>().ok())
            .and_then(Self::with_threshold)
            .unwrap_or_default()
    }
}
