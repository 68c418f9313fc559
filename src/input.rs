//! Per-tick actor input.
//!
//! The host's hand / pointer callbacks are collapsed into an [`ActorFrame`]
//! snapshot that the carousel polls once per tick through [`InputSource`].
//! An actor missing from a frame is treated as disconnected.

use crate::constants::{AXIS_GRAB_THRESHOLD, HAND_GRAB_THRESHOLD};
use glam::Vec3;
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorKind {
    Hand,
    Pointer,
    Tip,
}

impl ActorKind {
    /// Grab value above which the actor counts as holding its grab.
    #[inline]
    pub fn grab_threshold(self) -> f32 {
        match self {
            ActorKind::Hand => HAND_GRAB_THRESHOLD,
            ActorKind::Pointer | ActorKind::Tip => AXIS_GRAB_THRESHOLD,
        }
    }
}

/// One actor's state for a single tick.
///
/// `point` is the interaction point in world space: palm for hands, deepest
/// point for pointers, origin for tips. `grab` is grab strength (hands) or
/// the grab axis (pointers, tips) in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActorSample {
    pub id: ActorId,
    pub kind: ActorKind,
    pub point: Vec3,
    pub grab: f32,
    pub scroll: f32,
}

impl ActorSample {
    pub fn new(id: u64, kind: ActorKind, point: Vec3) -> Self {
        Self {
            id: ActorId(id),
            kind,
            point,
            grab: 0.0,
            scroll: 0.0,
        }
    }

    pub fn hand(id: u64, point: Vec3) -> Self {
        Self::new(id, ActorKind::Hand, point)
    }

    pub fn pointer(id: u64, point: Vec3) -> Self {
        Self::new(id, ActorKind::Pointer, point)
    }

    pub fn with_grab(mut self, grab: f32) -> Self {
        self.grab = grab;
        self
    }

    pub fn with_scroll(mut self, scroll: f32) -> Self {
        self.scroll = scroll;
        self
    }

    /// Shorthand for a fully closed grab.
    pub fn grabbing(self) -> Self {
        self.with_grab(1.0)
    }

    #[inline]
    pub fn is_grab_held(&self) -> bool {
        self.grab > self.kind.grab_threshold()
    }
}

#[derive(Clone, Debug, Default)]
pub struct ActorFrame {
    actors: SmallVec<[ActorSample; 4]>,
}

impl ActorFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sample: ActorSample) -> Self {
        self.upsert(sample);
        self
    }

    /// Insert a sample, replacing any existing sample for the same actor.
    pub fn upsert(&mut self, sample: ActorSample) {
        match self.actors.iter_mut().find(|a| a.id == sample.id) {
            Some(existing) => *existing = sample,
            None => self.actors.push(sample),
        }
    }

    pub fn remove(&mut self, id: ActorId) -> Option<ActorSample> {
        let idx = self.actors.iter().position(|a| a.id == id)?;
        Some(self.actors.remove(idx))
    }

    pub fn get(&self, id: ActorId) -> Option<&ActorSample> {
        self.actors.iter().find(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActorSample> {
        self.actors.iter()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn clear(&mut self) {
        self.actors.clear();
    }
}

impl FromIterator<ActorSample> for ActorFrame {
    fn from_iter<T: IntoIterator<Item = ActorSample>>(iter: T) -> Self {
        let mut frame = ActorFrame::new();
        for sample in iter {
            frame.upsert(sample);
        }
        frame
    }
}

/// Source of actor input, polled exactly once per carousel tick.
pub trait InputSource {
    fn poll(&mut self) -> ActorFrame;
}

/// A fixed frame reports the same actors every tick.
impl InputSource for ActorFrame {
    fn poll(&mut self) -> ActorFrame {
        self.clone()
    }
}

/// Replays a queue of frames, repeating the last one once exhausted.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<ActorFrame>,
    last: ActorFrame,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = ActorFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            last: ActorFrame::new(),
        }
    }

    pub fn push(&mut self, frame: ActorFrame) {
        self.frames.push_back(frame);
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> ActorFrame {
        if let Some(next) = self.frames.pop_front() {
            self.last = next;
        }
        self.last.clone()
    }
}
