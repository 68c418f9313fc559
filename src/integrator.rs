use crate::core::arc_to_degrees;
use crate::grab::GrabSession;

/// Turns tangential hand travel into carousel rotation while grabbed.
#[derive(Clone, Copy, Debug)]
pub struct RotationIntegrator {
    radius: f32,
}

impl RotationIntegrator {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Accumulate the travel since the session's last sample into `angle`
    /// (degrees) and return the applied delta. No clamping: the carousel may
    /// spin through any number of turns.
    pub fn integrate(&self, session: &mut GrabSession, y: f32, angle: &mut f32) -> f32 {
        let delta = arc_to_degrees(y - session.last_sample_y, self.radius);
        if !delta.is_finite() || !(*angle + delta).is_finite() {
            log::trace!("[grab] dropping non-finite sample y={}", y);
            return 0.0;
        }
        *angle += delta;
        session.last_sample_y = y;
        delta
    }
}
