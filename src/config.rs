use crate::constants::*;
use crate::core::Easing;
use crate::error::CarouselError;

#[derive(Clone, Debug)]
pub struct CarouselConfig {
    pub cell_count: usize,
    pub radius: f32,
    pub height: f32,
    pub hover_distance: f32,
    pub snap_duration: f32,
    pub snap_easing: Easing,
    pub rez_duration: f32,
    pub scroll_arc_per_unit: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            cell_count: DEFAULT_CELL_COUNT,
            radius: DEFAULT_RADIUS,
            height: DEFAULT_HEIGHT,
            hover_distance: HOVER_DISTANCE,
            snap_duration: SNAP_DURATION_SEC,
            snap_easing: Easing::QuadOut,
            rez_duration: REZ_DURATION_SEC,
            scroll_arc_per_unit: SCROLL_ARC_PER_UNIT,
        }
    }
}

impl CarouselConfig {
    pub fn new(cell_count: usize, radius: f32) -> Self {
        Self {
            cell_count,
            radius,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.cell_count == 0 {
            return Err(CarouselError::NoCells);
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(CarouselError::InvalidRadius(self.radius));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(CarouselError::InvalidHeight(self.height));
        }
        // A zero duration would let update(0) jump straight to the target.
        if !(self.snap_duration.is_finite() && self.snap_duration > 0.0) {
            return Err(CarouselError::InvalidSnapDuration(self.snap_duration));
        }
        if !(self.hover_distance.is_finite() && self.hover_distance >= 0.0) {
            return Err(CarouselError::InvalidHoverDistance(self.hover_distance));
        }
        if !(self.rez_duration.is_finite() && self.rez_duration >= 0.0) {
            return Err(CarouselError::InvalidRezDuration(self.rez_duration));
        }
        Ok(())
    }
}
