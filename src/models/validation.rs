//! Structural validation
//!
//! Checks the ordering rules that layout depends on. Edit operations are
//! expected to keep these true; documents coming in through the API are
//! checked before they are polished.

use super::annotations::Anchored;
use super::score::{Score, Slot, System};
use crate::error::ScoreError;

impl Score {
    /// Verify barline, position and system ordering, slot signs and tuplet
    /// ratios
    pub fn validate(&self) -> Result<(), ScoreError> {
        let mut previous_end: Option<Slot> = None;
        for (system_index, system) in self.systems.iter().enumerate() {
            validate_system(system_index, system)?;

            if let (Some(previous), Some(first)) = (previous_end, system.barlines.first()) {
                if first.slot <= previous {
                    return Err(ScoreError::OverlappingSystems {
                        system: system_index,
                        previous,
                        slot: first.slot,
                    });
                }
            }
            if let Some(last) = system.barlines.last() {
                previous_end = Some(last.slot);
            }
        }
        Ok(())
    }
}

fn validate_system(system_index: usize, system: &System) -> Result<(), ScoreError> {
    let mut previous: Option<Slot> = None;
    for barline in &system.barlines {
        if barline.slot < 0 {
            return Err(ScoreError::NegativeSlot {
                system: system_index,
                item: "barline".to_string(),
                slot: barline.slot,
            });
        }
        if let Some(prev) = previous {
            if barline.slot <= prev {
                return Err(ScoreError::UnsortedBarlines {
                    system: system_index,
                    previous: prev,
                    slot: barline.slot,
                });
            }
        }
        previous = Some(barline.slot);
    }

    for (staff_index, staff) in system.staves.iter().enumerate() {
        check_annotations(system_index, &staff.dynamics)?;

        for (voice_index, voice) in staff.voices.iter().enumerate() {
            for pair in voice.positions.windows(2) {
                if pair[1].slot <= pair[0].slot {
                    return Err(ScoreError::UnsortedPositions {
                        system: system_index,
                        staff: staff_index,
                        voice: voice_index,
                        previous: pair[0].slot,
                        slot: pair[1].slot,
                    });
                }
            }

            if let Some(first) = voice.positions.first() {
                if first.slot < 0 {
                    return Err(ScoreError::NegativeSlot {
                        system: system_index,
                        item: "position".to_string(),
                        slot: first.slot,
                    });
                }
            }

            for group in &voice.irregular_groupings {
                if group.length == 0 || group.notes_played == 0 || group.notes_played_over == 0 {
                    return Err(ScoreError::InvalidIrregularGrouping {
                        system: system_index,
                        staff: staff_index,
                        voice: voice_index,
                        slot: group.slot,
                    });
                }
            }
            check_annotations(system_index, &voice.irregular_groupings)?;
        }
    }

    check_annotations(system_index, &system.text_items)?;
    check_annotations(system_index, &system.chords)?;
    check_annotations(system_index, &system.tempo_markers)?;
    check_annotations(system_index, &system.directions)?;
    check_annotations(system_index, &system.player_changes)?;

    Ok(())
}

fn check_annotations<T: Anchored>(system_index: usize, items: &[T]) -> Result<(), ScoreError> {
    match items.iter().find(|item| item.slot() < 0) {
        Some(item) => Err(ScoreError::negative_annotation(system_index, T::KIND, item.slot())),
        None => Ok(()),
    }
}
