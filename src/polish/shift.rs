//! Global slot shifting
//!
//! Slots are absolute across the score, so making room in one bar moves
//! everything after it in every system, not only the one being laid out.

use crate::models::{Anchored, Score, Slot, System};

/// Moves every item at or after a pivot slot
pub trait SlotShifter {
    fn shift_from(&mut self, score: &mut Score, pivot: Slot, delta: Slot);
}

/// Shifts barlines, positions and all annotation kinds in place
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreShifter;

impl SlotShifter for ScoreShifter {
    fn shift_from(&mut self, score: &mut Score, pivot: Slot, delta: Slot) {
        log::debug!("shift: slots >= {} by {}", pivot, delta);

        for system in &mut score.systems {
            shift_system(system, pivot, delta);
        }
    }
}

/// Shift one system's contents at or after `pivot` by `delta`
pub fn shift_system(system: &mut System, pivot: Slot, delta: Slot) {
    for barline in &mut system.barlines {
        if barline.slot >= pivot {
            barline.slot += delta;
        }
    }

    for staff in &mut system.staves {
        for voice in &mut staff.voices {
            for position in &mut voice.positions {
                if position.slot >= pivot {
                    position.slot += delta;
                }
            }
            shift_anchored(&mut voice.irregular_groupings, pivot, delta);
        }
        shift_anchored(&mut staff.dynamics, pivot, delta);
    }

    shift_anchored(&mut system.text_items, pivot, delta);
    shift_anchored(&mut system.chords, pivot, delta);
    shift_anchored(&mut system.tempo_markers, pivot, delta);
    shift_anchored(&mut system.directions, pivot, delta);
    shift_anchored(&mut system.player_changes, pivot, delta);
}

fn shift_anchored<T: Anchored>(items: &mut [T], pivot: Slot, delta: Slot) {
    for item in items.iter_mut().filter(|item| item.slot() >= pivot) {
        let slot = item.slot();
        item.set_slot(slot + delta);
    }
}
