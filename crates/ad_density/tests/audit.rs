#![allow(clippy::unwrap_used, reason = "tests")]

use ad_density::{
    AdSlotBox, Artifacts, Audit, AuditProduct, DensityConfig, DensityError, Viewport,
    ViewportAdDensity, all_audits,
};
use serde_json::{Value, from_value, json, to_value};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn run(artifacts: &Value) -> Result<AuditProduct, DensityError> {
    let artifacts: Artifacts = from_value(artifacts.clone()).unwrap();
    ViewportAdDensity::default().audit(&artifacts)
}

#[test]
fn metadata_describes_viewport_ad_density() {
    let audit = ViewportAdDensity::default();
    let meta = audit.meta();
    assert_eq!(meta.id, "viewport-ad-density");
    assert_eq!(meta.title, "Ad density inside the viewport");
    assert!(meta.description.starts_with("The ads-to-content ratio"));
    assert_eq!(
        to_value(meta).unwrap()["requiredArtifacts"],
        json!(["ViewportDimensions", "RenderedAdSlots"])
    );
}

#[test]
fn registry_lists_the_audit() {
    let audits = all_audits();
    let ids: Vec<&str> = audits.iter().map(|audit| audit.meta().id).collect();
    assert_eq!(ids, ["viewport-ad-density"]);
}

#[test]
fn artifacts_parse_collected_json() {
    let raw = json!({
        "ViewportDimensions": { "innerWidth": 1280, "innerHeight": 720 },
        "RenderedAdSlots": [
            { "left": 0, "top": 0, "right": 728, "bottom": 90, "width": 728, "height": 90 },
            null
        ]
    });
    let artifacts: Artifacts = from_value(raw).unwrap();
    assert_eq!(artifacts.viewport_dimensions, Viewport::new(1280.0, 720.0));
    assert_eq!(
        artifacts.rendered_ad_slots,
        vec![Some(AdSlotBox::new(0.0, 0.0, 728.0, 90.0)), None]
    );
}

#[test]
fn scored_product_uses_report_field_names() {
    init_logging();
    let product = run(&json!({
        "ViewportDimensions": { "innerWidth": 1000, "innerHeight": 1000 },
        "RenderedAdSlots": [{ "left": 0, "top": 0, "right": 600, "bottom": 600 }]
    }))
    .unwrap();
    assert_eq!(
        to_value(&product).unwrap(),
        json!({ "score": 0, "rawValue": 0.36, "displayValue": "36% covered by ads" })
    );
}

#[test]
fn not_applicable_product_follows_builder_convention() {
    init_logging();
    let product = run(&json!({
        "ViewportDimensions": { "innerWidth": 1000, "innerHeight": 1000 },
        "RenderedAdSlots": [null]
    }))
    .unwrap();
    assert_eq!(
        to_value(&product).unwrap(),
        json!({
            "notApplicable": true,
            "rawValue": true,
            "explanation": "No visible slots on page."
        })
    );
}

#[test]
fn broken_viewport_propagates_error() {
    init_logging();
    let result = run(&json!({
        "ViewportDimensions": { "innerWidth": 0, "innerHeight": 0 },
        "RenderedAdSlots": [{ "left": 0, "top": 0, "right": 10, "bottom": 10 }]
    }));
    assert!(matches!(result, Err(DensityError::InvalidInput { .. })));
}

#[test]
fn configured_threshold_is_applied() {
    init_logging();
    let artifacts = Artifacts {
        viewport_dimensions: Viewport::new(1000.0, 1000.0),
        rendered_ad_slots: vec![Some(AdSlotBox::new(0.0, 0.0, 400.0, 400.0))],
    };
    let lenient = ViewportAdDensity::default().audit(&artifacts).unwrap();
    let strict = ViewportAdDensity::new(DensityConfig::with_threshold(0.1).unwrap())
        .audit(&artifacts)
        .unwrap();
    assert_eq!(to_value(&lenient).unwrap()["score"], json!(1));
    assert_eq!(to_value(&strict).unwrap()["score"], json!(0));
}
