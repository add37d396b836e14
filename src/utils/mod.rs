//! Utility modules for score layout
//!
//! This module contains slot-range helpers shared by the model and the
//! polisher.

pub mod range;

// Re-export commonly used helpers
pub use range::*;
