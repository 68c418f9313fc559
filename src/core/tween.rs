//! Time-based tweening used by the snap animation and cell rez-in.
//!
//! A [`Tween`] is driven by explicit frame deltas rather than wall-clock
//! time, so a stalled frame loop freezes it instead of letting it jump.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    QuadIn,
    #[default]
    QuadOut,
    QuadInOut,
}

impl Easing {
    /// Map normalized progress `t` in \[0, 1\] onto the eased curve.
    /// Inputs outside the range are clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
    finished: bool,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
            finished: false,
        }
    }

    /// Advance by `delta` seconds.
    ///
    /// Returns `Some(value)` while running; the tick that reaches the
    /// duration yields exactly `to`. Every later call returns `None`.
    pub fn update(&mut self, delta: f32) -> Option<f32> {
        if self.finished {
            return None;
        }
        self.elapsed += delta.max(0.0);
        if self.elapsed >= self.duration {
            self.finished = true;
            return Some(self.to);
        }
        Some(self.sample())
    }

    /// Current value without advancing.
    pub fn value(&self) -> f32 {
        if self.finished {
            self.to
        } else {
            self.sample()
        }
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn start(&self) -> f32 {
        self.from
    }

    pub fn end(&self) -> f32 {
        self.to
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    fn sample(&self) -> f32 {
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }
}
