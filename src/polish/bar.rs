//! Layout of a single bar
//!
//! A bar runs from a barline up to the next barline. Its positions are
//! re-slotted from the shared timestamp table. If the content no longer
//! fits, everything from the right barline on is shifted forward across
//! the whole score; otherwise the right barline is pulled in and the freed
//! slots are left empty.

use super::allocator::PositionAllocator;
use super::relocate::AnnotationRelocator;
use super::settings::PolishSettings;
use super::shift::SlotShifter;
use super::timestamps::{voice_timestamps, TimedPosition};
use crate::models::{Score, Slot};

/// What happened to the right barline of a bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarResize {
    /// Everything from the old right barline on moved forward by `delta`
    Widened { delta: Slot },
    /// Right barline moved back by `freed` slots
    Shrunk { freed: Slot },
    Unchanged,
}

/// Outcome of reflowing one bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarOutcome {
    pub start: Slot,
    pub end: Slot,
    pub resize: BarResize,
    pub positions_moved: usize,
    pub annotations_moved: usize,
}

/// First slot available to content after a barline
pub fn content_start(left_barline: Slot) -> Slot {
    if left_barline == 0 {
        0
    } else {
        left_barline + 1
    }
}

/// Reflow the bar that starts at barline `barline_index` of system
/// `system_index`.
///
/// Returns `None` for the last barline of a system, which has no bar to its
/// right.
pub fn reflow_bar(
    score: &mut Score,
    system_index: usize,
    barline_index: usize,
    settings: &PolishSettings,
    shifter: &mut dyn SlotShifter,
    relocator: &mut AnnotationRelocator,
) -> Option<BarOutcome> {
    let system = &score.systems[system_index];
    let left = system.barlines[barline_index].slot;
    let right_index = system.next_barline(left)?;
    let old_end = system.barlines[right_index].slot;

    // (staff, voice, timed positions) for every voice in the bar
    let mut voices: Vec<(usize, usize, Vec<TimedPosition>)> = Vec::new();
    let mut allocator = PositionAllocator::new(*settings);
    for (staff_index, staff) in system.staves.iter().enumerate() {
        for (voice_index, voice) in staff.voices.iter().enumerate() {
            let timed = voice_timestamps(voice, left, old_end);
            allocator.add_voice(&timed);
            voices.push((staff_index, voice_index, timed));
        }
    }
    let allocation = allocator.allocate();

    let start = content_start(left);
    // An empty bar still keeps one slot so its barlines stay distinct
    let new_end = (start + allocation.width).max(left + 1);

    let resize = if new_end > old_end {
        let delta = new_end - old_end;
        shifter.shift_from(score, old_end, delta);
        BarResize::Widened { delta }
    } else {
        score.systems[system_index].barlines[right_index].slot = new_end;
        if new_end < old_end {
            BarResize::Shrunk {
                freed: old_end - new_end,
            }
        } else {
            BarResize::Unchanged
        }
    };
    debug_assert_eq!(score.systems[system_index].barlines[right_index].slot, new_end);

    let system = &mut score.systems[system_index];
    let mut positions_moved = 0;
    let mut annotations_moved = 0;

    for (staff_index, voice_index, timed) in voices {
        for TimedPosition { index, timestamp, .. } in timed {
            let Some(offset) = allocation.slot_at(timestamp) else {
                continue;
            };
            let new_slot = start + offset;
            let old_slot = system.staves[staff_index].voices[voice_index].positions[index].slot;
            if old_slot == new_slot {
                // Claim the annotations here so a voice leaving the same
                // slot later does not carry them off.
                relocator.relocate(system, system_index, staff_index, voice_index, old_slot, old_slot);
                continue;
            }

            // Annotations are matched against the old slot, so move them
            // before the position itself.
            annotations_moved += relocator.relocate(
                system,
                system_index,
                staff_index,
                voice_index,
                old_slot,
                new_slot,
            );
            system.staves[staff_index].voices[voice_index].positions[index].slot = new_slot;
            positions_moved += 1;
        }
    }

    log::debug!(
        "bar [{}, {}) in system {}: width {} -> {}, {:?}, {} position(s) moved",
        left,
        old_end,
        system_index,
        old_end - start,
        allocation.width,
        resize,
        positions_moved
    );

    Some(BarOutcome {
        start,
        end: new_end,
        resize,
        positions_moved,
        annotations_moved,
    })
}
