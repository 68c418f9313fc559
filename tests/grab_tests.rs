// Hover field, grab state machine and rotation integration.

use glam::{Affine3A, Vec3};
use magnetar::*;

const INSIDE: Vec3 = Vec3::new(0.0, 0.0, 1.0);
const OUTSIDE: Vec3 = Vec3::new(0.0, 0.0, 2.0);

struct Rig {
    hover: HoverField,
    grab: GrabInputState,
}

impl Rig {
    fn new() -> Self {
        Self {
            hover: HoverField::new(1.0, 2.0, 0.05),
            grab: GrabInputState::new(),
        }
    }

    fn step(&mut self, frame: &ActorFrame) -> GrabEvent {
        let events = self.hover.poll(frame, &Affine3A::IDENTITY);
        self.grab
            .advance(frame, &self.hover, &events, &Affine3A::IDENTITY)
    }
}

fn hand(id: u64, point: Vec3) -> ActorSample {
    ActorSample::hand(id, point)
}

#[test]
fn hover_field_contains_near_wall() {
    let field = HoverField::new(1.0, 2.0, 0.05);
    assert!(field.contains(Vec3::new(0.0, 0.0, 1.04)));
    assert!(field.contains(Vec3::new(0.3, 0.5, 0.2)));
    assert!(!field.contains(Vec3::new(0.0, 0.0, 1.06)));
    // above the top cap
    assert!(!field.contains(Vec3::new(0.0, 1.2, 0.5)));
}

#[test]
fn hover_reports_enter_exit_and_lost_tracking() {
    let mut field = HoverField::new(1.0, 2.0, 0.05);
    let id = ActorId(1);

    let inside = ActorFrame::new().with(hand(1, INSIDE));
    assert_eq!(
        field.poll(&inside, &Affine3A::IDENTITY).as_slice(),
        &[HoverEvent::Enter(id)]
    );
    assert!(field.poll(&inside, &Affine3A::IDENTITY).is_empty());

    let outside = ActorFrame::new().with(hand(1, OUTSIDE));
    assert_eq!(
        field.poll(&outside, &Affine3A::IDENTITY).as_slice(),
        &[HoverEvent::Exit(id)]
    );

    field.poll(&inside, &Affine3A::IDENTITY);
    assert_eq!(
        field.poll(&ActorFrame::new(), &Affine3A::IDENTITY).as_slice(),
        &[HoverEvent::Exit(id)]
    );
    assert_eq!(field.present_count(), 0);
}

#[test]
fn hover_uses_local_space() {
    let mut field = HoverField::new(1.0, 2.0, 0.05);
    let parent = Affine3A::from_translation(Vec3::new(10.0, 0.0, 0.0));
    let to_local = parent.inverse();
    let frame = ActorFrame::new().with(hand(1, Vec3::new(10.0, 0.0, 1.0)));
    assert_eq!(field.poll(&frame, &to_local).len(), 1);
    assert!(field.is_present(ActorId(1)));
}

#[test]
fn grab_thresholds_depend_on_actor_kind() {
    assert!(hand(1, INSIDE).with_grab(0.85).is_grab_held());
    assert!(!hand(1, INSIDE).with_grab(0.8).is_grab_held());
    assert!(!ActorSample::pointer(1, INSIDE).with_grab(0.85).is_grab_held());
    assert!(ActorSample::pointer(1, INSIDE).with_grab(0.95).is_grab_held());
    assert!(ActorSample::new(1, ActorKind::Tip, INSIDE).grabbing().is_grab_held());
}

#[test]
fn idle_in_range_grabbing_idle() {
    let mut rig = Rig::new();
    assert_eq!(rig.grab.phase(), &GrabPhase::Idle);

    assert_eq!(rig.step(&ActorFrame::new().with(hand(1, INSIDE))), GrabEvent::None);
    assert_eq!(rig.grab.phase(), &GrabPhase::InRange(ActorId(1)));

    let grabbing = ActorFrame::new().with(hand(1, Vec3::new(0.0, 0.25, 1.0)).grabbing());
    assert_eq!(
        rig.step(&grabbing),
        GrabEvent::Started {
            actor: ActorId(1),
            y: 0.25
        }
    );
    let session = rig.grab.session().expect("session");
    assert_eq!(session.actor, ActorId(1));
    assert_eq!(session.last_sample_y, 0.25);

    assert_eq!(
        rig.step(&ActorFrame::new().with(hand(1, INSIDE))),
        GrabEvent::Released {
            actor: ActorId(1),
            disconnected: false
        }
    );
    assert_eq!(rig.grab.phase(), &GrabPhase::Idle);
    assert!(rig.grab.session().is_none());
}

#[test]
fn leaving_the_field_returns_to_idle() {
    let mut rig = Rig::new();
    rig.step(&ActorFrame::new().with(hand(1, INSIDE)));
    assert!(matches!(rig.grab.phase(), GrabPhase::InRange(_)));
    rig.step(&ActorFrame::new().with(hand(1, OUTSIDE)));
    assert_eq!(rig.grab.phase(), &GrabPhase::Idle);
}

#[test]
fn grab_survives_leaving_the_field() {
    let mut rig = Rig::new();
    rig.step(&ActorFrame::new().with(hand(1, INSIDE)));
    rig.step(&ActorFrame::new().with(hand(1, INSIDE).grabbing()));
    assert_eq!(
        rig.step(&ActorFrame::new().with(hand(1, OUTSIDE).grabbing())),
        GrabEvent::None
    );
    assert!(rig.grab.is_grabbing());
}

#[test]
fn lost_tracking_releases_the_grab() {
    let mut rig = Rig::new();
    rig.step(&ActorFrame::new().with(hand(1, INSIDE)));
    rig.step(&ActorFrame::new().with(hand(1, INSIDE).grabbing()));
    assert_eq!(
        rig.step(&ActorFrame::new()),
        GrabEvent::Released {
            actor: ActorId(1),
            disconnected: true
        }
    );
    assert_eq!(rig.grab.phase(), &GrabPhase::Idle);
}

#[test]
fn second_grabber_is_ignored() {
    let mut rig = Rig::new();
    rig.step(&ActorFrame::new().with(hand(1, INSIDE)));
    rig.step(&ActorFrame::new().with(hand(1, INSIDE).grabbing()));

    let both = ActorFrame::new()
        .with(hand(1, INSIDE).grabbing())
        .with(hand(2, Vec3::new(1.0, 0.0, 0.0)).grabbing());
    assert_eq!(rig.step(&both), GrabEvent::None);
    assert_eq!(rig.grab.session().map(|s| s.actor), Some(ActorId(1)));

    // B keeps holding after A lets go, but that is not a new grab
    let a_released = ActorFrame::new()
        .with(hand(1, INSIDE))
        .with(hand(2, Vec3::new(1.0, 0.0, 0.0)).grabbing());
    assert!(matches!(rig.step(&a_released), GrabEvent::Released { .. }));
    assert_eq!(rig.step(&a_released), GrabEvent::None);
    assert!(!rig.grab.is_grabbing());
}

#[test]
fn closed_fist_entering_does_not_grab() {
    let mut rig = Rig::new();
    rig.step(&ActorFrame::new().with(hand(1, OUTSIDE).grabbing()));
    assert_eq!(rig.grab.phase(), &GrabPhase::Idle);

    assert_eq!(
        rig.step(&ActorFrame::new().with(hand(1, INSIDE).grabbing())),
        GrabEvent::None
    );
    assert_eq!(rig.grab.phase(), &GrabPhase::InRange(ActorId(1)));

    rig.step(&ActorFrame::new().with(hand(1, INSIDE)));
    assert!(matches!(
        rig.step(&ActorFrame::new().with(hand(1, INSIDE).grabbing())),
        GrabEvent::Started { .. }
    ));
}

#[test]
fn in_range_actor_wins_simultaneous_grabs() {
    let mut rig = Rig::new();
    rig.step(&ActorFrame::new().with(hand(5, INSIDE)));
    assert_eq!(rig.grab.phase(), &GrabPhase::InRange(ActorId(5)));

    let both = ActorFrame::new()
        .with(hand(2, Vec3::new(1.0, 0.0, 0.0)).grabbing())
        .with(hand(5, INSIDE).grabbing());
    assert!(matches!(
        rig.step(&both),
        GrabEvent::Started {
            actor: ActorId(5),
            ..
        }
    ));
}

#[test]
fn integrator_converts_arc_to_rotation() {
    let integrator = RotationIntegrator::new(1.0);
    let mut session = GrabSession {
        actor: ActorId(1),
        last_sample_y: 0.0,
    };
    let mut angle = 0.0;
    let delta = integrator.integrate(&mut session, 0.3, &mut angle);
    assert!((delta - 17.188734).abs() < 1e-3);
    assert!((angle - 17.188734).abs() < 1e-3);
    assert_eq!(session.last_sample_y, 0.3);

    // moving back returns to the start
    integrator.integrate(&mut session, 0.0, &mut angle);
    assert!(angle.abs() < 1e-4);
}

#[test]
fn integrator_spins_past_full_turns() {
    let integrator = RotationIntegrator::new(0.5);
    let mut session = GrabSession {
        actor: ActorId(1),
        last_sample_y: 0.0,
    };
    let mut angle = 0.0;
    let turn = std::f32::consts::TAU * 0.5;
    for i in 1..=10 {
        integrator.integrate(&mut session, turn * 0.25 * i as f32, &mut angle);
    }
    assert!((angle - 900.0).abs() < 1e-2, "angle {angle}");
}

#[test]
fn integrator_drops_non_finite_samples() {
    let integrator = RotationIntegrator::new(1.0);
    let mut session = GrabSession {
        actor: ActorId(1),
        last_sample_y: 0.1,
    };
    let mut angle = 12.0;
    assert_eq!(integrator.integrate(&mut session, f32::NAN, &mut angle), 0.0);
    assert_eq!(angle, 12.0);
    assert_eq!(session.last_sample_y, 0.1);
}

#[test]
fn scripted_input_repeats_last_frame() {
    let mut input = ScriptedInput::new([
        ActorFrame::new().with(hand(1, INSIDE)),
        ActorFrame::new().with(hand(2, INSIDE)),
    ]);
    assert!(input.poll().get(ActorId(1)).is_some());
    assert!(input.poll().get(ActorId(2)).is_some());
    assert_eq!(input.remaining(), 0);
    assert!(input.poll().get(ActorId(2)).is_some());
}

#[test]
fn frame_upsert_replaces_same_actor() {
    let mut frame = ActorFrame::new().with(hand(1, INSIDE));
    frame.upsert(hand(1, OUTSIDE).grabbing());
    assert_eq!(frame.len(), 1);
    assert_eq!(frame.get(ActorId(1)).map(|s| s.point), Some(OUTSIDE));
    assert!(frame.remove(ActorId(1)).is_some());
    assert!(frame.is_empty());
}
