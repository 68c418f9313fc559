//! Release animation: ease the carousel onto the nearest slot.

use crate::core::{snap_target, Easing, Tween};

/// An in-flight snap from the release angle to a slot angle.
#[derive(Clone, Debug)]
pub struct SnapTransition {
    tween: Tween,
}

impl SnapTransition {
    pub fn start_angle(&self) -> f32 {
        self.tween.start()
    }

    pub fn target_angle(&self) -> f32 {
        self.tween.end()
    }

    pub fn elapsed(&self) -> f32 {
        self.tween.elapsed()
    }

    pub fn progress(&self) -> f32 {
        self.tween.progress()
    }

    /// Interpolated angle at the current elapsed time.
    pub fn angle(&self) -> f32 {
        self.tween.value()
    }
}

#[derive(Clone, Debug)]
pub struct SnapAnimator {
    duration: f32,
    easing: Easing,
    transition: Option<SnapTransition>,
}

impl SnapAnimator {
    pub fn new(duration: f32, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            transition: None,
        }
    }

    /// Start snapping from `current` to the nearest multiple of `slot_deg`,
    /// replacing any transition already running. Returns the target angle.
    pub fn begin(&mut self, current: f32, slot_deg: f32) -> f32 {
        let target = snap_target(current, slot_deg);
        log::debug!("[snap] {:.2}° -> {:.2}° over {}s", current, target, self.duration);
        self.transition = Some(SnapTransition {
            tween: Tween::new(current, target, self.duration, self.easing),
        });
        target
    }

    /// Advance by `delta` seconds. Returns the new angle while animating;
    /// the final tick returns the target exactly and ends the transition.
    pub fn step(&mut self, delta: f32) -> Option<f32> {
        let transition = self.transition.as_mut()?;
        let angle = transition.tween.update(delta);
        if transition.tween.is_finished() {
            log::debug!("[snap] settled at {:.2}°", transition.target_angle());
            self.transition = None;
        }
        angle
    }

    /// Drop the running transition, if any.
    pub fn cancel(&mut self) -> Option<SnapTransition> {
        self.transition.take()
    }

    pub fn is_active(&self) -> bool {
        self.transition.is_some()
    }

    pub fn transition(&self) -> Option<&SnapTransition> {
        self.transition.as_ref()
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}
