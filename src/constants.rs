/// Carousel layout and interaction tuning constants.
///
/// These keep the magic numbers of the interaction (thresholds, durations,
/// scale ranges) in one place; `CarouselConfig::default` is built from them.
// Layout
pub const DEFAULT_CELL_COUNT: usize = 4;
pub const DEFAULT_RADIUS: f32 = 1.0; // cylinder radius in metres
pub const DEFAULT_HEIGHT: f32 = 1.0; // hover field height

// Hover
pub const HOVER_DISTANCE: f32 = 0.05; // signed distance to field surface counted as present

// Grab thresholds per input kind
pub const HAND_GRAB_THRESHOLD: f32 = 0.8; // grab strength
pub const AXIS_GRAB_THRESHOLD: f32 = 0.9; // pointer / tip grab axis

// Snap animation
pub const SNAP_DURATION_SEC: f32 = 0.25;

// Cell rez-in
pub const REZ_DURATION_SEC: f32 = 0.25;
pub const REZ_START_SCALE: f32 = 0.02;
pub const REZ_END_SCALE: f32 = 1.0;

// Scroll wheel: arc length (metres along the wall) per scroll unit
pub const SCROLL_ARC_PER_UNIT: f32 = 0.1;

// Grab indicator ring
pub const INDICATOR_MAX_SCALE: f32 = 0.1;
pub const INDICATOR_FADE_FAR: f32 = 0.1; // distance at which the ring is invisible
pub const INDICATOR_FADE_NEAR: f32 = 0.05; // distance at which the ring is full size

pub const FULL_TURN_DEG: f32 = 360.0;
