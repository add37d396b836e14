//! Error types for loading and validating scores
//!
//! The polisher itself never fails. These errors describe documents that
//! break the structural rules the polisher relies on, and I/O problems at
//! the API boundary.

use thiserror::Error;

use crate::models::{AnnotationKind, Slot};

#[derive(Debug, Error)]
pub enum ScoreError {
    /// Barlines of a system are not strictly increasing
    #[error("System {system}: barline at slot {slot} does not follow slot {previous}")]
    UnsortedBarlines { system: usize, previous: Slot, slot: Slot },

    /// Systems must occupy increasing, disjoint slot ranges
    #[error("System {system} starts at slot {slot}, before the previous system ends at {previous}")]
    OverlappingSystems { system: usize, previous: Slot, slot: Slot },

    /// Two positions of a voice share a slot or are out of order
    #[error("System {system}, staff {staff}, voice {voice}: position at slot {slot} does not follow slot {previous}")]
    UnsortedPositions {
        system: usize,
        staff: usize,
        voice: usize,
        previous: Slot,
        slot: Slot,
    },

    /// An item was placed before the start of the score
    #[error("System {system}: {item} has negative slot {slot}")]
    NegativeSlot { system: usize, item: String, slot: Slot },

    /// Tuplet that would give positions a zero or undefined duration
    #[error("System {system}, staff {staff}, voice {voice}: invalid irregular grouping at slot {slot}")]
    InvalidIrregularGrouping {
        system: usize,
        staff: usize,
        voice: usize,
        slot: Slot,
    },

    #[error("Invalid score JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No score loaded")]
    NoDocument,
}

impl ScoreError {
    pub(crate) fn negative_annotation(system: usize, kind: AnnotationKind, slot: Slot) -> Self {
        ScoreError::NegativeSlot {
            system,
            item: format!("{:?}", kind),
            slot,
        }
    }
}
