//! Single-grabber state machine: `Idle -> InRange -> Grabbing -> Idle`.

use crate::hover::{HoverEvent, HoverField};
use crate::input::{ActorFrame, ActorId};
use fnv::FnvHashSet;
use glam::Affine3A;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrabSession {
    pub actor: ActorId,
    pub last_sample_y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GrabPhase {
    #[default]
    Idle,
    InRange(ActorId),
    Grabbing(GrabSession),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GrabEvent {
    None,
    Started { actor: ActorId, y: f32 },
    Released { actor: ActorId, disconnected: bool },
}

#[derive(Clone, Debug, Default)]
pub struct GrabInputState {
    phase: GrabPhase,
    // actors whose grab signal was held on the previous tick
    held: FnvHashSet<ActorId>,
}

impl GrabInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &GrabPhase {
        &self.phase
    }

    pub fn session(&self) -> Option<&GrabSession> {
        match &self.phase {
            GrabPhase::Grabbing(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut GrabSession> {
        match &mut self.phase {
            GrabPhase::Grabbing(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_grabbing(&self) -> bool {
        matches!(self.phase, GrabPhase::Grabbing(_))
    }

    /// Advance one tick. `hover` must already reflect `frame`.
    pub fn advance(
        &mut self,
        frame: &ActorFrame,
        hover: &HoverField,
        hover_events: &[HoverEvent],
        to_local: &Affine3A,
    ) -> GrabEvent {
        // Grabs are edge-triggered: only a not-held -> held change counts.
        let issued: SmallVec<[ActorId; 4]> = frame
            .iter()
            .filter(|s| s.is_grab_held() && !self.held.contains(&s.id))
            .map(|s| s.id)
            .collect();
        self.held = frame
            .iter()
            .filter(|s| s.is_grab_held())
            .map(|s| s.id)
            .collect();

        if let GrabPhase::Grabbing(session) = self.phase {
            return self.advance_grabbing(session, frame, &issued);
        }

        let candidate = match self.phase {
            GrabPhase::InRange(id) if hover.is_present(id) => Some(id),
            _ => pick_candidate(hover, hover_events),
        };

        let grabber = issued
            .iter()
            .copied()
            .filter(|id| hover.is_present(*id))
            .min_by_key(|id| (Some(*id) != candidate, *id));

        match grabber.and_then(|id| frame.get(id)) {
            Some(sample) => {
                let y = to_local.transform_point3(sample.point).y;
                self.phase = GrabPhase::Grabbing(GrabSession {
                    actor: sample.id,
                    last_sample_y: y,
                });
                log::debug!("[grab] {} started at y={:.3}", sample.id, y);
                GrabEvent::Started { actor: sample.id, y }
            }
            None => {
                let next = candidate.map_or(GrabPhase::Idle, GrabPhase::InRange);
                if next != self.phase {
                    log::trace!("[grab] {:?} -> {:?}", self.phase, next);
                }
                self.phase = next;
                GrabEvent::None
            }
        }
    }

    fn advance_grabbing(
        &mut self,
        session: GrabSession,
        frame: &ActorFrame,
        issued: &[ActorId],
    ) -> GrabEvent {
        let disconnected = match frame.get(session.actor) {
            None => true,
            Some(sample) if !sample.is_grab_held() => false,
            Some(_) => {
                for other in issued.iter().filter(|id| **id != session.actor) {
                    log::debug!(
                        "[grab] ignoring grab from {}, carousel held by {}",
                        other,
                        session.actor
                    );
                }
                return GrabEvent::None;
            }
        };
        self.phase = GrabPhase::Idle;
        log::debug!(
            "[grab] {} released{}",
            session.actor,
            if disconnected { " (lost tracking)" } else { "" }
        );
        GrabEvent::Released {
            actor: session.actor,
            disconnected,
        }
    }
}

fn pick_candidate(hover: &HoverField, hover_events: &[HoverEvent]) -> Option<ActorId> {
    hover_events
        .iter()
        .find_map(|ev| match ev {
            HoverEvent::Enter(id) if hover.is_present(*id) => Some(*id),
            _ => None,
        })
        .or_else(|| hover.first_present())
}
