//! Spacing configuration for the polisher

use serde::{Deserialize, Serialize};

use crate::models::{Rational, Slot};

/// Controls how many slots each event receives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolishSettings {
    /// Slots per whole quarter note of duration (fractional part dropped)
    pub spacing_per_beat: Slot,

    /// Smallest width any event may receive
    pub min_spacing: Slot,
}

impl Default for PolishSettings {
    fn default() -> Self {
        Self {
            spacing_per_beat: 2,
            min_spacing: 1,
        }
    }
}

impl PolishSettings {
    /// Default width of an event lasting `duration` quarter notes.
    ///
    /// The duration is truncated before scaling, so anything shorter than a
    /// quarter note gets `min_spacing`.
    pub fn note_spacing(&self, duration: Rational) -> Slot {
        (self.spacing_per_beat * duration.to_integer()).max(self.min_spacing)
    }
}
