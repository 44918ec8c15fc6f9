//! Sizing a prop for a wearer from stored measurements.

use approx::assert_relative_eq;
use config::constants::{HEAD_CORRECT_TEXT, SHOULDER_CORRECT_TEXT};
use glam::DMat4;
use toolbox_geometry::{Aabb, Vec3};
use toolbox_sizing::{check_objects, BodyMeasurements, MeasurementHint, OrderLabel, ScaleBy};

#[test]
fn stored_measurements_drive_the_whole_panel() {
    let json = r#"{
        "head_height": 230.0,
        "head_width": 170.0,
        "head_circumference": 560.0,
        "eyes_spacing": 62.0,
        "body_height": 1600.0,
        "shoulder_width": 360.0,
        "scale_by": "SCALE_BY_WIDTH"
    }"#;
    let body: BodyMeasurements = serde_json::from_str(json).unwrap();

    assert_eq!(body.head_hint().text(HEAD_CORRECT_TEXT), "DATA CORRECT");
    assert_eq!(body.eyes_hint(), MeasurementHint::Correct);
    assert_eq!(body.shoulder_hint().text(SHOULDER_CORRECT_TEXT), "SHOULDER CORRECT");

    assert_eq!(body.scale_by, ScaleBy::Width);
    assert_relative_eq!(body.reference_head_scale(200.0).unwrap(), 0.85);
    assert_eq!(body.eye_hole_offset(), 31.0);

    // width range (190.8, 205.2), height range (246.15, 290.91)
    let shell = Aabb::new(Vec3::ZERO, Vec3::new(200.0, 230.0, 270.0));
    let check = check_objects(&body, &[(DMat4::IDENTITY, shell)]).unwrap();
    assert!(check.is_correct());
    assert_eq!(check.height.to_string(), "Height(Z): 270.00 mm");

    let json = serde_json::to_value(&check).unwrap();
    assert_eq!(json["width"]["hint"], "CORRECT");
    assert!(json["depth"]["hint"].is_null());
}

#[test]
fn label_for_an_order() {
    let label = OrderLabel::new("A12-0420", true);
    let scale = label.scale_for(12.5).unwrap();
    assert_relative_eq!(scale, 0.8);
    assert!(label.body().unwrap().ends_with("\nA12-0420"));
}
