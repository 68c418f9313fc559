use crate::core::cylinder_signed_distance;
use crate::input::{ActorFrame, ActorId};
use fnv::FnvHashSet;
use glam::{Affine3A, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    Enter(ActorId),
    Exit(ActorId),
}

pub type HoverEvents = SmallVec<[HoverEvent; 4]>;

/// Cylindrical presence volume around the carousel, in carousel-local space.
#[derive(Clone, Debug)]
pub struct HoverField {
    radius: f32,
    height: f32,
    hover_distance: f32,
    present: FnvHashSet<ActorId>,
}

impl HoverField {
    pub fn new(radius: f32, height: f32, hover_distance: f32) -> Self {
        Self {
            radius,
            height,
            hover_distance,
            present: FnvHashSet::default(),
        }
    }

    /// Signed distance from a local-space point to the field surface.
    #[inline]
    pub fn distance(&self, local_point: Vec3) -> f32 {
        cylinder_signed_distance(local_point, self.radius, self.height)
    }

    #[inline]
    pub fn contains(&self, local_point: Vec3) -> bool {
        self.distance(local_point) <= self.hover_distance
    }

    /// Re-evaluate presence for every tracked actor and report transitions.
    ///
    /// Actors that were present but are missing from `frame` exit.
    pub fn poll(&mut self, frame: &ActorFrame, to_local: &Affine3A) -> HoverEvents {
        let mut events = HoverEvents::new();
        for sample in frame.iter() {
            let inside = self.contains(to_local.transform_point3(sample.point));
            if inside && self.present.insert(sample.id) {
                log::trace!("[hover] enter {}", sample.id);
                events.push(HoverEvent::Enter(sample.id));
            } else if !inside && self.present.remove(&sample.id) {
                log::trace!("[hover] exit {}", sample.id);
                events.push(HoverEvent::Exit(sample.id));
            }
        }

        let mut lost: SmallVec<[ActorId; 4]> = self
            .present
            .iter()
            .copied()
            .filter(|id| frame.get(*id).is_none())
            .collect();
        lost.sort_unstable();
        for id in lost {
            self.present.remove(&id);
            log::trace!("[hover] lost {}", id);
            events.push(HoverEvent::Exit(id));
        }
        events
    }

    #[inline]
    pub fn is_present(&self, id: ActorId) -> bool {
        self.present.contains(&id)
    }

    pub fn present_count(&self) -> usize {
        self.present.len()
    }

    /// Lowest present actor id, for deterministic candidate selection.
    pub fn first_present(&self) -> Option<ActorId> {
        self.present.iter().copied().min()
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}
