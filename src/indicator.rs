use crate::constants::{INDICATOR_FADE_FAR, INDICATOR_FADE_NEAR, INDICATOR_MAX_SCALE};
use crate::core::map_range;
use glam::{Affine3A, Quat, Vec2, Vec3};

/// Local-space pose of the ring that follows an actor around the wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorPose {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl IndicatorPose {
    pub fn to_world(&self, parent: &Affine3A) -> Affine3A {
        *parent
            * Affine3A::from_scale_rotation_translation(
                Vec3::splat(self.scale),
                self.rotation,
                self.translation,
            )
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GrabIndicator {
    radius: f32,
}

impl GrabIndicator {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Project `local_point` onto the cylinder wall at its own height.
    ///
    /// The ring is full size while grabbing; otherwise it grows as the actor
    /// closes from `INDICATOR_FADE_FAR` to `INDICATOR_FADE_NEAR`.
    pub fn pose(&self, local_point: Vec3, distance: f32, grabbing: bool) -> IndicatorPose {
        let direction = Vec2::new(local_point.x, local_point.z).normalize_or_zero();
        let on_wall = direction * self.radius;
        let yaw = if direction == Vec2::ZERO {
            0.0
        } else {
            direction.x.atan2(direction.y)
        };
        let scale = if grabbing {
            INDICATOR_MAX_SCALE
        } else {
            map_range(
                distance.abs(),
                (INDICATOR_FADE_FAR, INDICATOR_FADE_NEAR),
                (0.0, INDICATOR_MAX_SCALE),
            )
            .clamp(0.0, INDICATOR_MAX_SCALE)
        };
        IndicatorPose {
            translation: Vec3::new(on_wall.x, local_point.y, on_wall.y),
            rotation: Quat::from_rotation_y(yaw),
            scale,
        }
    }
}
