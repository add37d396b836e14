//! Models module for the score document
//!
//! This module contains the score structures the polisher reads and
//! rewrites: systems, staves, voices, positions, barlines and the
//! slot-anchored annotations.

pub mod score;
pub mod barlines;
pub mod annotations;
pub mod duration;
pub mod validation;

// Re-export commonly used types
pub use score::*;
pub use barlines::*;
pub use annotations::*;
pub use duration::{duration_time, DurationType, Rational};
