//! Cubic Bezier evaluation
//!
//! Shared by hazard trajectory sampling and the celebration particles.
//! The polynomial is evaluated as-is for any t; trajectory segments
//! deliberately sample past t = 1, so no clamping here.

use glam::{Vec2, Vec3};

/// Evaluate a cubic Bezier curve at parameter t.
///
/// `B(t) = (1-t)^3 P0 + 3t(1-t)^2 P1 + 3t^2(1-t) P2 + t^3 P3`
#[inline]
pub fn sample_curve(control: &[Vec2; 4], t: f32) -> Vec2 {
    let u = 1.0 - t;
    control[0] * (u * u * u)
        + control[1] * (3.0 * t * u * u)
        + control[2] * (3.0 * t * t * u)
        + control[3] * (t * t * t)
}

/// Same polynomial over 3D control points.
#[inline]
pub fn sample_curve3(control: &[Vec3; 4], t: f32) -> Vec3 {
    let u = 1.0 - t;
    control[0] * (u * u * u)
        + control[1] * (3.0 * t * u * u)
        + control[2] * (3.0 * t * t * u)
        + control[3] * (t * t * t)
}
