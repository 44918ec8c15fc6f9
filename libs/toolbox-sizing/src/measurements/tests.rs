//! Tests for body measurements and hints.

use approx::assert_relative_eq;
use config::constants::{EYES_CORRECT_TEXT, HEAD_CORRECT_TEXT};

use super::*;
use crate::SizingError;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn test_defaults() {
    let body = BodyMeasurements::default();
    assert_eq!(body.head_height, 240.0);
    assert_eq!(body.head_width, 180.0);
    assert_eq!(body.head_circumference, 580.0);
    assert_eq!(body.eyes_height, 120.0);
    assert_eq!(body.eyes_spacing, 70.0);
    assert_eq!(body.body_height, 1680.0);
    assert_eq!(body.shoulder_width, 390.0);
    assert_eq!(body.padding_thickness, 35.0);
    assert_eq!(body.scale_by, ScaleBy::Height);
    assert_eq!(body.head_type, HeadType::A2);
}

#[test]
fn test_defaults_are_all_correct() {
    let body = BodyMeasurements::default();
    assert!(body.head_hint().is_correct());
    assert!(body.eyes_hint().is_correct());
    assert!(body.shoulder_hint().is_correct());
}

// =============================================================================
// HEAD HINT
// =============================================================================

#[test]
fn test_head_hint_boundaries_are_inclusive() {
    let body = BodyMeasurements {
        head_width: 120.0,
        head_height: 150.0,
        head_circumference: 500.0,
        ..Default::default()
    };
    assert_eq!(body.head_hint(), MeasurementHint::Correct);

    let body = BodyMeasurements {
        head_circumference: 650.0,
        ..Default::default()
    };
    assert_eq!(body.head_hint(), MeasurementHint::Correct);
}

#[test]
fn test_head_hint_out_of_range() {
    let cases = [
        BodyMeasurements {
            head_width: 119.9,
            ..Default::default()
        },
        BodyMeasurements {
            head_width: 140.0,
            head_height: 149.0,
            ..Default::default()
        },
        BodyMeasurements {
            head_circumference: 650.5,
            ..Default::default()
        },
        BodyMeasurements {
            head_circumference: 499.0,
            ..Default::default()
        },
    ];
    for body in cases {
        assert_eq!(body.head_hint(), MeasurementHint::Warning, "{body:?}");
    }
}

#[test]
fn test_head_hint_requires_width_below_height() {
    let body = BodyMeasurements {
        head_width: 240.0,
        head_height: 240.0,
        ..Default::default()
    };
    assert_eq!(body.head_hint(), MeasurementHint::Warning);
}

// =============================================================================
// EYES & SHOULDER HINTS
// =============================================================================

#[test]
fn test_eyes_hint_is_exclusive() {
    // head width 180: open range (18, 135)
    let mut body = BodyMeasurements::default();
    body.eyes_spacing = 18.0;
    assert_eq!(body.eyes_hint(), MeasurementHint::Warning);
    body.eyes_spacing = 18.5;
    assert_eq!(body.eyes_hint(), MeasurementHint::Correct);
    body.eyes_spacing = 135.0;
    assert_eq!(body.eyes_hint(), MeasurementHint::Warning);
}

#[test]
fn test_shoulder_hint_is_exclusive() {
    let mut body = BodyMeasurements::default();
    body.shoulder_width = 320.0;
    assert_eq!(body.shoulder_hint(), MeasurementHint::Warning);
    body.shoulder_width = 549.0;
    assert_eq!(body.shoulder_hint(), MeasurementHint::Correct);
    body.shoulder_width = 550.0;
    assert_eq!(body.shoulder_hint(), MeasurementHint::Warning);
}

#[test]
fn test_hint_text() {
    assert_eq!(MeasurementHint::Correct.text(HEAD_CORRECT_TEXT), "DATA CORRECT");
    assert_eq!(
        MeasurementHint::Warning.text(EYES_CORRECT_TEXT),
        "WARNING DATA MAYBE INCORRECT"
    );
}

// =============================================================================
// GENERATORS
// =============================================================================

#[test]
fn test_reference_head_scale_by_height() {
    let body = BodyMeasurements::default();
    assert_relative_eq!(body.reference_head_scale(240.0).unwrap(), 1.0);
    assert_relative_eq!(body.reference_head_scale(120.0).unwrap(), 2.0);
}

#[test]
fn test_reference_head_scale_by_width() {
    let body = BodyMeasurements {
        scale_by: ScaleBy::Width,
        ..Default::default()
    };
    assert_eq!(body.reference_head_target(), 180.0);
    assert_relative_eq!(body.reference_head_scale(240.0).unwrap(), 0.75);
}

#[test]
fn test_reference_head_scale_rejects_flat_model() {
    let body = BodyMeasurements::default();
    assert_eq!(
        body.reference_head_scale(0.0),
        Err(SizingError::NonPositive {
            name: "reference head height",
            value: 0.0
        })
    );
    assert!(body.reference_head_scale(-3.0).is_err());
}

#[test]
fn test_eye_hole_offset_is_half_spacing() {
    let body = BodyMeasurements {
        eyes_spacing: 64.0,
        ..Default::default()
    };
    assert_eq!(body.eye_hole_offset(), 32.0);
}

// =============================================================================
// SERIALIZATION
// =============================================================================

#[test]
fn test_head_type_labels() {
    assert_eq!(HeadType::ALL.len(), 7);
    assert_eq!(HeadType::ALL[0].tag(), "A2");
    assert_eq!(HeadType::A8.to_string(), "GB/T Std A8");
}

#[test]
fn test_serde_defaults_and_tags() {
    let body: BodyMeasurements =
        serde_json::from_str(r#"{"head_width": 160.0, "scale_by": "SCALE_BY_WIDTH"}"#).unwrap();
    assert_eq!(body.head_width, 160.0);
    assert_eq!(body.scale_by, ScaleBy::Width);
    assert_eq!(body.body_height, 1680.0);

    let json = serde_json::to_string(&BodyMeasurements::default()).unwrap();
    assert!(json.contains("\"SCALE_BY_HEIGHT\""));
    assert!(json.contains("\"A2\""));
}
