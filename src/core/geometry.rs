use crate::constants::FULL_TURN_DEG;
use glam::{Quat, Vec2, Vec3};

/// Angular spacing between adjacent cells, in degrees.
#[inline]
pub fn slot_angle(cell_count: usize) -> f32 {
    FULL_TURN_DEG / cell_count as f32
}

/// Index of the slot nearest to `angle_deg`.
///
/// Exact half-slot boundaries round up (toward +∞), for negative angles too.
#[inline]
pub fn nearest_slot(angle_deg: f32, slot_deg: f32) -> i64 {
    (angle_deg / slot_deg + 0.5).floor() as i64
}

/// Angle of the slot nearest to `angle_deg`.
#[inline]
pub fn snap_target(angle_deg: f32, slot_deg: f32) -> f32 {
    nearest_slot(angle_deg, slot_deg) as f32 * slot_deg
}

/// Normalize into \[0, 360).
#[inline]
pub fn wrap_degrees(angle_deg: f32) -> f32 {
    let wrapped = angle_deg.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}

/// Convert a displacement along the cylinder wall into a rotation in degrees.
#[inline]
pub fn arc_to_degrees(arc: f32, radius: f32) -> f32 {
    (arc / radius).to_degrees()
}

/// Local translation and outward-facing rotation for a point on the cylinder
/// wall at `angle_deg` around the +Y axis. Angle 0 faces +Z.
pub fn place_on_cylinder(radius: f32, angle_deg: f32) -> (Vec3, Quat) {
    let theta = angle_deg.to_radians();
    let (sin, cos) = theta.sin_cos();
    (
        Vec3::new(radius * sin, 0.0, radius * cos),
        Quat::from_rotation_y(theta),
    )
}

/// Angle in degrees of a local-space point around the +Y axis, in \[0, 360).
#[inline]
pub fn angle_around_y(point: Vec3) -> f32 {
    wrap_degrees(point.x.atan2(point.z).to_degrees())
}

/// Signed distance from `point` to a capped cylinder of `radius` and
/// `height` centred on the origin with its axis along +Y. Negative inside.
pub fn cylinder_signed_distance(point: Vec3, radius: f32, height: f32) -> f32 {
    let d = Vec2::new(
        Vec2::new(point.x, point.z).length() - radius,
        point.y.abs() - height * 0.5,
    );
    d.x.max(d.y).min(0.0) + d.max(Vec2::ZERO).length()
}

/// Linearly remap `value` from `from` onto `to`. Ranges may be descending.
#[inline]
pub fn map_range(value: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    let span = from.1 - from.0;
    if span.abs() <= f32::EPSILON {
        return to.0;
    }
    to.0 + (value - from.0) / span * (to.1 - to.0)
}
