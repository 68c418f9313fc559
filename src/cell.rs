use crate::constants::{REZ_END_SCALE, REZ_START_SCALE};
use crate::core::{place_on_cylinder, Easing, Tween};
use fnv::FnvHashSet;
use glam::{Affine3A, Quat, Vec3};

/// One workspace panel mounted at a fixed slot on the carousel.
///
/// The carousel owns every cell and is the only writer of its transform.
/// Content entering a cell is captured only while the cell is active;
/// otherwise it waits in a queue until the carousel settles.
#[derive(Clone, Debug)]
pub struct WorkspaceCell {
    slot_index: usize,
    angle: f32,
    transform: Affine3A,
    scale: f32,
    rez: Option<Tween>,
    active: bool,
    queued: FnvHashSet<String>,
    captured: FnvHashSet<String>,
}

impl WorkspaceCell {
    pub(crate) fn new(slot_index: usize, rez_duration: f32) -> Self {
        let rez = (rez_duration > 0.0).then(|| {
            Tween::new(REZ_START_SCALE, REZ_END_SCALE, rez_duration, Easing::QuadOut)
        });
        Self {
            slot_index,
            angle: 0.0,
            transform: Affine3A::IDENTITY,
            scale: if rez.is_some() {
                REZ_START_SCALE
            } else {
                REZ_END_SCALE
            },
            rez,
            active: false,
            queued: FnvHashSet::default(),
            captured: FnvHashSet::default(),
        }
    }

    pub fn slot_index(&self) -> usize {
        self.slot_index
    }

    /// World angle in degrees, unwrapped (may exceed a full turn).
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn transform(&self) -> &Affine3A {
        &self.transform
    }

    pub fn translation(&self) -> Vec3 {
        self.transform.translation.into()
    }

    pub fn rotation(&self) -> Quat {
        let (_, rotation, _) = self.transform.to_scale_rotation_translation();
        rotation
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_rezzed(&self) -> bool {
        self.rez.is_none()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Offer content to the cell. Returns true if captured immediately.
    pub fn enter(&mut self, uid: &str) -> bool {
        if self.active {
            self.captured.insert(uid.to_string());
            true
        } else {
            self.queued.insert(uid.to_string());
            false
        }
    }

    /// Content left the cell before it could be captured.
    pub fn leave(&mut self, uid: &str) {
        self.queued.remove(uid);
    }

    /// Let go of captured content. Returns false if it was not captured.
    pub fn release(&mut self, uid: &str) -> bool {
        self.captured.remove(uid)
    }

    pub fn is_captured(&self, uid: &str) -> bool {
        self.captured.contains(uid)
    }

    pub fn is_queued(&self, uid: &str) -> bool {
        self.queued.contains(uid)
    }

    pub fn captured_count(&self) -> usize {
        self.captured.len()
    }

    pub(crate) fn rez_step(&mut self, delta: f32) {
        let Some(rez) = self.rez.as_mut() else {
            return;
        };
        if let Some(scale) = rez.update(delta) {
            self.scale = scale;
        }
        if rez.is_finished() {
            log::debug!("[cell] slot {} rezzed", self.slot_index);
            self.rez = None;
        }
    }

    pub(crate) fn place(&mut self, parent: &Affine3A, radius: f32, angle: f32) {
        let (translation, rotation) = place_on_cylinder(radius, angle);
        self.angle = angle;
        self.transform = *parent
            * Affine3A::from_scale_rotation_translation(
                Vec3::splat(self.scale),
                rotation,
                translation,
            );
    }

    /// Cells only become active once rezzed; activation drains the queue.
    pub(crate) fn set_active(&mut self, active: bool) {
        let active = active && self.is_rezzed();
        if active && !self.active && !self.queued.is_empty() {
            log::debug!(
                "[cell] slot {} capturing {} queued item(s)",
                self.slot_index,
                self.queued.len()
            );
            self.captured.extend(self.queued.drain());
        }
        self.active = active;
    }
}
