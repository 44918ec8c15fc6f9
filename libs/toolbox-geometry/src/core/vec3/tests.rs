//! Tests for the Vec3 helpers.

use super::*;

#[test]
fn format_location_uses_two_digits() {
    assert_eq!(format_location(Vec3::ZERO), "X:0.00, Y:0.00, Z:0.00");
    assert_eq!(
        format_location(Vec3::new(10.0, 20.004, -0.006)),
        "X:10.00, Y:20.00, Z:-0.01"
    );
}
