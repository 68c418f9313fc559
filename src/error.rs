use thiserror::Error;

/// Construction-time precondition violations. Runtime updates never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    #[error("carousel needs at least one cell")]
    NoCells,
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("field height must be positive and finite, got {0}")]
    InvalidHeight(f32),
    #[error("snap duration must be positive and finite, got {0}")]
    InvalidSnapDuration(f32),
    #[error("hover distance must be finite and non-negative, got {0}")]
    InvalidHoverDistance(f32),
    #[error("rez duration must be finite and non-negative, got {0}")]
    InvalidRezDuration(f32),
}
