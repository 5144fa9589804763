//! Adapter between the density evaluator and the host audit runner.
//!
//! The runner hands every audit the artifacts it asked for and expects a
//! product back in its own JSON shape. Nothing here scores anything; see
//! [`crate::density`] for that.

use crate::config::DensityConfig;
use crate::density::{DensityScore, Outcome, evaluate_with};
use crate::error::DensityError;
use crate::geometry::{AdSlotBox, Viewport};
use serde::{Deserialize, Serialize};

/// Static description of an audit, as listed by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditMeta {
    /// Stable identifier.
    pub id: &'static str,
    /// Short title shown in reports.
    pub title: &'static str,
    /// Longer explanation of why the audit matters.
    pub description: &'static str,
    /// Names of the artifacts the audit reads.
    pub required_artifacts: &'static [&'static str],
}

/// Page artifacts gathered before the audit runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Artifacts {
    /// Viewport at measurement time.
    pub viewport_dimensions: Viewport,
    /// One entry per ad slot; `None` for slots that did not render visibly.
    pub rendered_ad_slots: Vec<Option<AdSlotBox>>,
}

/// Result shape consumed by the report builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum AuditProduct {
    /// Audit skipped for this page.
    NotApplicable {
        /// Always `true`.
        not_applicable: bool,
        /// Always `true`, so aggregators treat the audit as passing.
        raw_value: bool,
        /// Why the audit was skipped.
        explanation: String,
    },
    /// Audit scored.
    Scored(DensityScore),
}

impl From<Outcome> for AuditProduct {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::NotApplicable { reason } => Self::NotApplicable {
                not_applicable: true,
                raw_value: true,
                explanation: reason,
            },
            Outcome::Scored(score) => Self::Scored(score),
        }
    }
}

/// An audit the host runner can schedule.
pub trait Audit: Send + Sync {
    /// Metadata describing this audit.
    fn meta(&self) -> &'static AuditMeta;

    /// Run the audit over collected artifacts.
    ///
    /// # Errors
    /// Returns an error when the artifacts violate the audit's preconditions.
    fn audit(&self, artifacts: &Artifacts) -> Result<AuditProduct, DensityError>;
}

static VIEWPORT_AD_DENSITY_META: AuditMeta = AuditMeta {
    id: "viewport-ad-density",
    title: "Ad density inside the viewport",
    description: "The ads-to-content ratio inside the viewport can have an impact on user \
                  experience and ultimately user retention.",
    required_artifacts: &["ViewportDimensions", "RenderedAdSlots"],
};

/// Fraction of the viewport covered by ad slots.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportAdDensity {
    config: DensityConfig,
}

impl ViewportAdDensity {
    /// Create the audit with an explicit scoring policy.
    #[inline]
    pub const fn new(config: DensityConfig) -> Self {
        Self { config }
    }
}

impl Audit for ViewportAdDensity {
    #[inline]
    fn meta(&self) -> &'static AuditMeta {
        &VIEWPORT_AD_DENSITY_META
    }

    fn audit(&self, artifacts: &Artifacts) -> Result<AuditProduct, DensityError> {
        evaluate_with(
            &self.config,
            &artifacts.viewport_dimensions,
            &artifacts.rendered_ad_slots,
        )
        .map(AuditProduct::from)
    }
}

/// Every audit provided by this crate, configured from the environment.
pub fn all_audits() -> Vec<Box<dyn Audit>> {
    vec![Box::new(ViewportAdDensity::new(DensityConfig::from_env()))]
}
