//! Viewport ad density audit.
//!
//! Measures how much of the visible viewport is covered by rendered ad slots
//! and turns that coverage into a pass/fail score. The viewport dimensions and
//! slot rectangles are collected elsewhere; this crate only consumes them.

pub mod audit;
pub mod config;
pub mod density;
pub mod error;
pub mod geometry;

pub use audit::{Artifacts, Audit, AuditMeta, AuditProduct, ViewportAdDensity, all_audits};
pub use config::DensityConfig;
pub use density::{DensityScore, Outcome, evaluate, evaluate_with};
pub use error::DensityError;
pub use geometry::{AdSlotBox, Viewport, viewable_area};
