//! Viewport and ad slot rectangles, and clipping of one against the other.
//!
//! All coordinates are CSS pixels with the origin at the top-left corner of
//! the viewport and y growing downward.

use log::warn;
use serde::{Deserialize, Serialize};

/// Visible browser viewport at measurement time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Width of the visible area.
    pub inner_width: f64,
    /// Height of the visible area.
    pub inner_height: f64,
}

impl Viewport {
    /// Create a viewport from its inner dimensions.
    #[inline]
    pub const fn new(inner_width: f64, inner_height: f64) -> Self {
        Self {
            inner_width,
            inner_height,
        }
    }

    /// Total viewport area. Not validated.
    #[inline]
    pub fn area(&self) -> f64 {
        self.inner_width * self.inner_height
    }
}

/// Bounding rectangle of one rendered ad slot.
///
/// Collected boxes usually carry extra fields (`width`, `height`, `x`, `y`);
/// only the four edges are read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdSlotBox {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl AdSlotBox {
    /// Create a box from its four edges.
    #[inline]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Unclipped area of the box. Inverted edges give zero.
    #[inline]
    pub fn area(&self) -> f64 {
        (self.right - self.left).max(0.0) * (self.bottom - self.top).max(0.0)
    }

    /// Whether every edge is a finite number.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }
}

/// Area of `slot` that lies inside `[0, inner_width] x [0, inner_height]`.
///
/// A missing slot rendered nothing and contributes zero. Boxes outside the
/// viewport, with inverted edges, or with non-finite edges also contribute
/// zero. The result is never negative and never exceeds the viewport area.
pub fn viewable_area(slot: Option<&AdSlotBox>, viewport: &Viewport) -> f64 {
    let Some(slot) = slot else {
        return 0.0;
    };
    if !slot.is_finite() {
        warn!(target: "ad_density", "ignoring ad slot with non-finite edges: {slot:?}");
        return 0.0;
    }

    let left = slot.left.max(0.0);
    let top = slot.top.max(0.0);
    let right = slot.right.min(viewport.inner_width);
    let bottom = slot.bottom.min(viewport.inner_height);

    // Clamp the dimensions, not the product: two negative spans would
    // otherwise multiply into a positive area.
    let width = (right - left).max(0.0);
    let height = (bottom - top).max(0.0);
    width * height
}
