//! Ad density scoring.
//!
//! Sums the viewable area of every rendered slot, divides by the viewport
//! area, and maps the ratio onto a binary score. Overlapping slots are summed
//! as-is; the ratio is only clamped when reported.

use crate::config::DensityConfig;
use crate::error::DensityError;
use crate::geometry::{AdSlotBox, Viewport, viewable_area};
use log::{debug, trace};
use serde::Serialize;

/// Reason reported when the page has no ad slots at all.
pub const NO_SLOTS: &str = "No slots on page.";
/// Reason reported when every ad slot failed to render visibly.
pub const NO_VISIBLE_SLOTS: &str = "No visible slots on page.";

/// Score given to pages at or below the threshold.
pub const SCORE_PASS: u8 = 1;
/// Score given to pages above the threshold.
pub const SCORE_FAIL: u8 = 0;

/// Scored result of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityScore {
    /// [`SCORE_PASS`] or [`SCORE_FAIL`].
    pub score: u8,
    /// Coverage ratio clamped to `[0, 1]`.
    pub raw_value: f64,
    /// `"<n>% covered by ads"`, or empty when nothing is covered.
    pub display_value: String,
}

/// Terminal outcome of one evaluation that did not fail.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum Outcome {
    /// The audit does not apply to this page.
    NotApplicable {
        /// Human-readable explanation.
        reason: String,
    },
    /// The page was scored.
    Scored(DensityScore),
}

impl Outcome {
    fn not_applicable(reason: &str) -> Self {
        Self::NotApplicable {
            reason: reason.to_owned(),
        }
    }
}

/// Evaluate ad density with the default policy.
///
/// # Errors
/// Returns [`DensityError::InvalidInput`] when slots are present but the
/// viewport has no usable area.
#[inline]
pub fn evaluate(
    viewport: &Viewport,
    slots: &[Option<AdSlotBox>],
) -> Result<Outcome, DensityError> {
    evaluate_with(&DensityConfig::default(), viewport, slots)
}

/// Evaluate ad density with an explicit policy.
///
/// An empty slot list and a list with only missing slots are not applicable.
/// Otherwise the viewport must be valid and the page is scored.
///
/// # Errors
/// Returns [`DensityError::InvalidInput`] when slots are present but the
/// viewport has no usable area.
pub fn evaluate_with(
    config: &DensityConfig,
    viewport: &Viewport,
    slots: &[Option<AdSlotBox>],
) -> Result<Outcome, DensityError> {
    if slots.is_empty() {
        return Ok(Outcome::not_applicable(NO_SLOTS));
    }
    // Must run before any area math: all-missing differs from all-zero-area.
    if slots.iter().all(Option::is_none) {
        return Ok(Outcome::not_applicable(NO_VISIBLE_SLOTS));
    }

    let ad_area = slots.iter().enumerate().fold(0.0, |sum, (index, slot)| {
        let area = viewable_area(slot.as_ref(), viewport);
        trace!(target: "ad_density", "slot {index}: viewable area {area}");
        sum + area
    });
    let view_area = validated_area(viewport)?;

    let ratio = ad_area / view_area;
    let score = if ratio > config.threshold() {
        SCORE_FAIL
    } else {
        SCORE_PASS
    };
    let display_value = if ad_area == 0.0 {
        String::new()
    } else {
        format!("{}% covered by ads", (100.0 * ad_area / view_area).floor())
    };
    debug!(
        target: "ad_density",
        "{} slots, ad area {ad_area}, viewport area {view_area}, ratio {ratio}, score {score}",
        slots.len()
    );

    Ok(Outcome::Scored(DensityScore {
        score,
        raw_value: ratio.min(1.0),
        display_value,
    }))
}

/// Viewport area, or the error describing why it cannot be used.
fn validated_area(viewport: &Viewport) -> Result<f64, DensityError> {
    let Viewport {
        inner_width,
        inner_height,
    } = *viewport;
    let area = viewport.area();
    let usable = inner_width.is_finite()
        && inner_height.is_finite()
        && inner_width >= 0.0
        && inner_height >= 0.0
        && area.is_finite()
        && area > 0.0;
    if usable {
        Ok(area)
    } else {
        Err(DensityError::InvalidInput {
            width: inner_width,
            height: inner_height,
        })
    }
}
