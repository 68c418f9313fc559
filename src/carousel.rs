//! Top-level carousel controller.
//!
//! `update` is the single per-frame driver. Within one tick the order is
//! fixed: hover and grab state first, then rotation (integrator while
//! grabbed, otherwise scroll and the snap animation), then cell transforms.

use crate::cell::WorkspaceCell;
use crate::config::CarouselConfig;
use crate::core::{arc_to_degrees, nearest_slot, slot_angle};
use crate::error::CarouselError;
use crate::grab::{GrabEvent, GrabInputState, GrabPhase};
use crate::hover::HoverField;
use crate::indicator::{GrabIndicator, IndicatorPose};
use crate::input::{ActorFrame, ActorSample, InputSource};
use crate::integrator::RotationIntegrator;
use crate::snap::{SnapAnimator, SnapTransition};
use glam::{Affine3A, Vec3};

#[derive(Debug)]
pub struct Carousel {
    parent: Affine3A,
    to_local: Affine3A,
    config: CarouselConfig,
    slot_angle: f32,
    current_angle: f32,
    cells: Vec<WorkspaceCell>,
    hover: HoverField,
    grab: GrabInputState,
    integrator: RotationIntegrator,
    snap: SnapAnimator,
    indicator: GrabIndicator,
    indicator_pose: Option<IndicatorPose>,
}

impl Carousel {
    /// Build a carousel attached under `parent`. Cells start at angle 0.
    pub fn new(parent: Affine3A, config: CarouselConfig) -> Result<Self, CarouselError> {
        config.validate()?;
        let cells = (0..config.cell_count)
            .map(|slot| WorkspaceCell::new(slot, config.rez_duration))
            .collect();
        let mut carousel = Self {
            parent,
            to_local: parent.inverse(),
            slot_angle: slot_angle(config.cell_count),
            current_angle: 0.0,
            cells,
            hover: HoverField::new(config.radius, config.height, config.hover_distance),
            grab: GrabInputState::new(),
            integrator: RotationIntegrator::new(config.radius),
            snap: SnapAnimator::new(config.snap_duration, config.snap_easing),
            indicator: GrabIndicator::new(config.radius),
            indicator_pose: None,
            config,
        };
        carousel.place_cells();
        log::debug!(
            "[cell] carousel with {} cells, radius {}",
            carousel.cells.len(),
            carousel.config.radius
        );
        Ok(carousel)
    }

    /// Convenience constructor: default tuning at a world position.
    pub fn at(position: Vec3, cell_count: usize, radius: f32) -> Result<Self, CarouselError> {
        Self::new(
            Affine3A::from_translation(position),
            CarouselConfig::new(cell_count, radius),
        )
    }

    /// Advance one frame by `delta` seconds. Call at most once per frame.
    pub fn update(&mut self, delta: f32, input: &mut dyn InputSource) {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        let frame = input.poll();

        let hover_events = self.hover.poll(&frame, &self.to_local);
        match self
            .grab
            .advance(&frame, &self.hover, &hover_events, &self.to_local)
        {
            GrabEvent::Started { .. } => {
                if let Some(interrupted) = self.snap.cancel() {
                    log::debug!(
                        "[snap] interrupted at {:.2}° ({:.0}% done)",
                        self.current_angle,
                        interrupted.progress() * 100.0
                    );
                }
            }
            GrabEvent::Released { .. } => {
                self.snap.begin(self.current_angle, self.slot_angle);
            }
            GrabEvent::None => {}
        }

        if let Some(session) = self.grab.session_mut() {
            if let Some(sample) = frame.get(session.actor) {
                let y = self.to_local.transform_point3(sample.point).y;
                self.integrator
                    .integrate(session, y, &mut self.current_angle);
            }
        } else {
            self.apply_scroll(&frame);
            if let Some(angle) = self.snap.step(delta) {
                self.current_angle = angle;
            }
        }
        log::trace!("[snap] angle {:.3}°", self.current_angle);

        self.indicator_pose = self.relevant_actor(&frame).map(|sample| {
            let local = self.to_local.transform_point3(sample.point);
            self.indicator
                .pose(local, self.hover.distance(local), self.grab.is_grabbing())
        });

        let settled = self.is_settled();
        for cell in &mut self.cells {
            cell.rez_step(delta);
            cell.set_active(settled);
        }
        self.place_cells();
    }

    /// Move the carousel under a new parent transform.
    pub fn set_parent(&mut self, parent: Affine3A) {
        self.parent = parent;
        self.to_local = parent.inverse();
        self.place_cells();
    }

    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    pub fn slot_angle(&self) -> f32 {
        self.slot_angle
    }

    pub fn radius(&self) -> f32 {
        self.config.radius
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn parent(&self) -> &Affine3A {
        &self.parent
    }

    pub fn cells(&self) -> &[WorkspaceCell] {
        &self.cells
    }

    pub fn cell_mut(&mut self, index: usize) -> Option<&mut WorkspaceCell> {
        self.cells.get_mut(index)
    }

    pub fn phase(&self) -> &GrabPhase {
        self.grab.phase()
    }

    pub fn hover(&self) -> &HoverField {
        &self.hover
    }

    pub fn snap_transition(&self) -> Option<&SnapTransition> {
        self.snap.transition()
    }

    pub fn snap_target(&self) -> Option<f32> {
        self.snap.transition().map(SnapTransition::target_angle)
    }

    /// Neither grabbed nor snapping.
    pub fn is_settled(&self) -> bool {
        !self.grab.is_grabbing() && !self.snap.is_active()
    }

    /// Index of the cell nearest the front (world angle congruent to 0°).
    pub fn focused_index(&self) -> usize {
        let k = nearest_slot(self.current_angle, self.slot_angle);
        (-k).rem_euclid(self.cells.len() as i64) as usize
    }

    /// World transform of the grab ring, when an actor is near or grabbing.
    pub fn indicator(&self) -> Option<Affine3A> {
        self.indicator_pose
            .map(|pose| pose.to_world(&self.parent))
    }

    pub fn indicator_pose(&self) -> Option<&IndicatorPose> {
        self.indicator_pose.as_ref()
    }

    fn apply_scroll(&mut self, frame: &ActorFrame) {
        let scroll: f32 = frame
            .iter()
            .filter(|s| self.hover.is_present(s.id))
            .map(|s| s.scroll)
            .filter(|s| s.abs() > f32::EPSILON)
            .sum();
        if scroll.abs() <= f32::EPSILON {
            return;
        }
        let delta = arc_to_degrees(scroll * self.config.scroll_arc_per_unit, self.config.radius);
        if !(self.current_angle + delta).is_finite() {
            return;
        }
        self.current_angle += delta;
        log::debug!("[scroll] {:+.3} -> {:.2}°", scroll, self.current_angle);
        self.snap.begin(self.current_angle, self.slot_angle);
    }

    /// The grabbing actor, else the present actor closest to the field.
    fn relevant_actor<'a>(&self, frame: &'a ActorFrame) -> Option<&'a ActorSample> {
        if let Some(session) = self.grab.session() {
            return frame.get(session.actor);
        }
        frame
            .iter()
            .filter(|s| self.hover.is_present(s.id))
            .map(|s| {
                let local = self.to_local.transform_point3(s.point);
                (s, self.hover.distance(local))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(s, _)| s)
    }

    fn place_cells(&mut self) {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            let angle = self.current_angle + i as f32 * self.slot_angle;
            cell.place(&self.parent, self.config.radius, angle);
        }
    }
}
