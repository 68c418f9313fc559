use anyhow::Context;
use glam::{Affine3A, Vec3};
use instant::Instant;
use rand::prelude::*;

use magnetar::{ActorFrame, ActorSample, Carousel, CarouselConfig, ScriptedInput};

const TICK_SEC: f32 = 1.0 / 60.0;
const HAND: u64 = 1;
const TREMOR: f32 = 0.002; // metres of hand jitter per sample

// world position of the carousel; script offsets are relative to it
const ORIGIN: [f32; 3] = [0.0, 1.2, -1.5];

fn hand_at(offset: Vec3, grab: f32, scroll: f32) -> ActorFrame {
    ActorFrame::new().with(
        ActorSample::hand(HAND, Vec3::from(ORIGIN) + offset)
            .with_grab(grab)
            .with_scroll(scroll),
    )
}

/// Approach, grab, drag up along the wall, release, then scroll one notch.
fn build_script(rng: &mut StdRng) -> ScriptedInput {
    let mut script = ScriptedInput::default();
    let wall = Vec3::new(0.0, 0.0, 1.0);

    // approach from outside the field
    for i in 0..30 {
        let t = i as f32 / 29.0;
        script.push(hand_at(wall * (1.5 - 0.5 * t), 0.0, 0.0));
    }
    // close the fist
    script.push(hand_at(wall, 1.0, 0.0));
    // drag 0.7 m along the wall over one second
    for i in 0..60 {
        let t = (i + 1) as f32 / 60.0;
        let jitter = Vec3::new(0.0, rng.gen_range(-TREMOR..TREMOR), 0.0);
        script.push(hand_at(wall + Vec3::Y * (0.7 * t) + jitter, 1.0, 0.0));
    }
    // let go and wait for the snap
    for _ in 0..30 {
        script.push(hand_at(wall + Vec3::Y * 0.7, 0.0, 0.0));
    }
    // scroll while hovering at the wall
    script.push(hand_at(wall, 0.0, 10.0));
    for _ in 0..30 {
        script.push(hand_at(wall, 0.0, 0.0));
    }
    // hand leaves tracking
    script.push(ActorFrame::new());
    script
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = CarouselConfig {
        cell_count: 6,
        ..CarouselConfig::default()
    };
    let mut carousel = Carousel::new(Affine3A::from_translation(Vec3::from(ORIGIN)), config)
        .context("building carousel")?;

    let mut rng = StdRng::seed_from_u64(42);
    let mut input = build_script(&mut rng);
    let ticks = input.remaining();
    log::info!("magnetar-native: {} cells, {} ticks", carousel.cells().len(), ticks);

    let start = Instant::now();
    let mut last_focus = carousel.focused_index();
    let mut was_settled = carousel.is_settled();
    for tick in 0..ticks {
        carousel.update(TICK_SEC, &mut input);

        let focus = carousel.focused_index();
        if focus != last_focus {
            log::info!("[tick {tick}] focus moved {last_focus} -> {focus}");
            last_focus = focus;
        }
        let settled = carousel.is_settled();
        if settled != was_settled {
            log::info!(
                "[tick {tick}] {} at {:.2}° ({:?})",
                if settled { "settled" } else { "moving" },
                carousel.current_angle(),
                carousel.phase()
            );
            was_settled = settled;
        }
    }

    log::info!(
        "finished: angle {:.2}°, focused cell {}, simulated in {:?}",
        carousel.current_angle(),
        carousel.focused_index(),
        start.elapsed()
    );
    Ok(())
}
