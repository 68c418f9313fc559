//! Cylindrical workspace carousel.
//!
//! Workspace cells sit at fixed slots around a vertical cylinder. One actor
//! at a time can grab the carousel and drag it round; on release it eases
//! onto the nearest slot. Everything runs synchronously inside
//! [`Carousel::update`], once per host frame.

pub mod carousel;
pub mod cell;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod grab;
pub mod hover;
pub mod indicator;
pub mod input;
pub mod integrator;
pub mod snap;

pub use carousel::*;
pub use cell::*;
pub use config::*;
pub use constants::*;
pub use self::core::*;
pub use error::*;
pub use grab::*;
pub use hover::*;
pub use indicator::*;
pub use input::*;
pub use integrator::*;
pub use snap::*;
