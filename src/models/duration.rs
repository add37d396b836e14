//! Notated durations and their exact musical length
//!
//! Durations are measured in quarter notes and kept as exact fractions.
//! Floating point would drift when many short notes are summed across a bar,
//! and layout depends on exact timestamp equality between voices.

use num_rational::Rational32;
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::score::Voice;

/// Exact fraction used for durations and timestamps
pub type Rational = Rational32;

/// Notated note value, serialized as its denominator (4 = quarter note)
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DurationType {
    Whole = 1,
    Half = 2,
    Quarter = 4,
    Eighth = 8,
    Sixteenth = 16,
    ThirtySecond = 32,
    SixtyFourth = 64,
}

impl DurationType {
    /// Length in quarter notes, ignoring dots and tuplets
    pub fn quarter_notes(self) -> Rational {
        Rational::new(4, self as i32)
    }
}

impl Default for DurationType {
    fn default() -> Self {
        DurationType::Quarter
    }
}

/// Length of the position at `index` within `voice`, in quarter notes.
///
/// Includes dots and the scaling of every irregular grouping that covers
/// the position.
pub fn duration_time(voice: &Voice, index: usize) -> Rational {
    let position = &voice.positions[index];

    let mut duration = position.duration_type.quarter_notes();
    if position.double_dotted {
        duration *= Rational::new(7, 4);
    } else if position.dotted {
        duration *= Rational::new(3, 2);
    }

    for group in &voice.irregular_groupings {
        let Some(first) = voice.position_index_at(group.slot) else {
            continue;
        };

        if index >= first && index - first < group.length && group.notes_played > 0 {
            duration *= Rational::new(
                group.notes_played_over as i32,
                group.notes_played as i32,
            );
        }
    }

    duration
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IrregularGrouping, Position};

    #[test]
    fn test_plain_durations() {
        assert_eq!(DurationType::Quarter.quarter_notes(), Rational::from_integer(1));
        assert_eq!(DurationType::Whole.quarter_notes(), Rational::from_integer(4));
        assert_eq!(DurationType::Sixteenth.quarter_notes(), Rational::new(1, 4));
    }

    #[test]
    fn test_dotted_durations() {
        let mut voice = Voice::new();
        voice.positions.push(Position::new(0, DurationType::Quarter).with_dotted());
        voice.positions.push(Position::new(2, DurationType::Half).with_double_dotted());

        assert_eq!(duration_time(&voice, 0), Rational::new(3, 2));
        assert_eq!(duration_time(&voice, 1), Rational::new(7, 2));
    }

    #[test]
    fn test_triplet_scales_covered_positions_only() {
        let mut voice = Voice::new();
        for slot in 0..4 {
            voice.positions.push(Position::new(slot, DurationType::Eighth));
        }
        voice.irregular_groupings.push(IrregularGrouping::triplet(0));

        assert_eq!(duration_time(&voice, 0), Rational::new(1, 3));
        assert_eq!(duration_time(&voice, 2), Rational::new(1, 3));
        assert_eq!(duration_time(&voice, 3), Rational::new(1, 2));
    }

    #[test]
    fn test_oversized_grouping_covers_rest_of_voice() {
        let mut voice = Voice::new();
        voice.positions.push(Position::new(0, DurationType::Quarter));
        voice.positions.push(Position::new(2, DurationType::Eighth));
        voice.irregular_groupings.push(IrregularGrouping::new(2, usize::MAX, 3, 2));

        assert_eq!(duration_time(&voice, 0), Rational::from_integer(1));
        assert_eq!(duration_time(&voice, 1), Rational::new(1, 3));
    }

    #[test]
    fn test_duration_type_serializes_as_number() {
        let json = serde_json::to_string(&DurationType::Eighth).unwrap();
        assert_eq!(json, "8");

        let parsed: DurationType = serde_json::from_str("16").unwrap();
        assert_eq!(parsed, DurationType::Sixteenth);
    }
}
