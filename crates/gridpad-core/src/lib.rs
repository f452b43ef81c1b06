#![forbid(unsafe_code)]

//! Foundation types for the gridpad window-buffer engine: coordinates,
//! the error/status taxonomy, and logging shims.

pub mod error;
pub mod geometry;
pub mod logging;

pub use error::{GridError, Status};
pub use geometry::Position;
