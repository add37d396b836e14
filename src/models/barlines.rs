//! Barlines
//!
//! A barline occupies its own slot. The interval between two consecutive
//! barlines of a system is a bar.

use serde::{Deserialize, Serialize};

use super::score::Slot;

/// Barline types
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BarlineType {
    #[default]
    Single,      // |
    Double,      // ||
    StartRepeat, // |:
    EndRepeat,   // :|
    Final,       // |||
}

/// Barline position and metadata
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Barline {
    pub slot: Slot,
    #[serde(default)]
    pub barline_type: BarlineType,
    /// Number of repeats for an end-repeat barline
    #[serde(default)]
    pub repeat_count: u8,
}

impl Barline {
    pub fn new(slot: Slot, barline_type: BarlineType) -> Self {
        Self {
            slot,
            barline_type,
            repeat_count: 0,
        }
    }

    pub fn single(slot: Slot) -> Self {
        Self::new(slot, BarlineType::Single)
    }
}
