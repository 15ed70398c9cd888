//! Angle arithmetic on bearings (radians, defined modulo 2π) and on
//! undirected axes (defined modulo π).

use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Wrap an angle into `[-π, π)`.
#[inline]
pub fn bound_half(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU);
    // `rem_euclid` may round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        -PI
    } else {
        wrapped - PI
    }
}

#[inline]
fn wrap_full(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Counter-clockwise angular distance from `from` to `to`, in `[0, 2π)`.
#[inline]
pub fn distance_ccw(from: f32, to: f32) -> f32 {
    wrap_full(to - from)
}

/// Clockwise angular distance from `from` to `to`, in `[0, 2π)`.
#[inline]
pub fn distance_cw(from: f32, to: f32) -> f32 {
    wrap_full(from - to)
}

/// Compute the absolute difference between two angles (radians),
/// normalized into `[0, π]`.
pub fn angle_diff_abs(a: f32, b: f32) -> f32 {
    // Normalize angle difference to [-π, π).
    let mut diff = (b - a).rem_euclid(TAU);
    if diff >= PI {
        diff -= TAU;
    }
    diff.abs()
}

/// Acute difference between two undirected axes: θ and θ+π describe the same
/// line. Returns a value in `[0, π/2]`.
pub fn line_angle_diff(a: f32, b: f32) -> f32 {
    let diff = angle_diff_abs(a, b);
    diff.min(PI - diff).clamp(0.0, FRAC_PI_2)
}

/// Bisector of two bearings, taking the short way around the circle.
/// Result is in `[-π, π)`.
pub fn bisector(a: f32, b: f32) -> f32 {
    let delta = bound_half(b - a);
    bound_half(a + 0.5 * delta)
}
