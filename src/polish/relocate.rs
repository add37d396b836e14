//! Moving annotations along with their positions
//!
//! Several voices and staves can pass through the same slot, and an
//! annotation moved forward can land on a slot that is visited later in
//! the same pass. Each annotation is therefore moved at most once per pass,
//! tracked by its [`AnnotationId`].

use std::collections::HashSet;

use crate::models::{Anchored, AnnotationKind, Slot, Staff, System};
use crate::utils::anchored_at;

/// Which collection an annotation lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnotationOwner {
    pub system: usize,
    /// Set for staff- and voice-scoped annotations
    pub staff: Option<usize>,
    /// Set for voice-scoped annotations
    pub voice: Option<usize>,
}

/// Stable identity of one annotation during a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnotationId {
    pub kind: AnnotationKind,
    pub owner: AnnotationOwner,
    pub index: usize,
}

/// A collection of annotations that can be relocated as a unit
pub trait AnchorSet {
    /// Move every not-yet-seen item at `from` to `to` and mark it seen;
    /// returns how many changed slot
    fn relocate(
        &mut self,
        owner: AnnotationOwner,
        from: Slot,
        to: Slot,
        seen: &mut HashSet<AnnotationId>,
    ) -> usize;
}

impl<T: Anchored> AnchorSet for Vec<T> {
    fn relocate(
        &mut self,
        owner: AnnotationOwner,
        from: Slot,
        to: Slot,
        seen: &mut HashSet<AnnotationId>,
    ) -> usize {
        let at_slot: Vec<usize> = anchored_at(self, from).collect();
        let mut moved = 0;

        for index in at_slot {
            let id = AnnotationId {
                kind: T::KIND,
                owner,
                index,
            };
            if !seen.insert(id) {
                continue;
            }

            if from != to {
                self[index].set_slot(to);
                moved += 1;
            }
        }

        moved
    }
}

/// Per-pass annotation mover
#[derive(Debug, Default)]
pub struct AnnotationRelocator {
    seen: HashSet<AnnotationId>,
}

impl AnnotationRelocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct annotations handled so far in this pass, whether
    /// or not they changed slot
    pub fn relocated_count(&self) -> usize {
        self.seen.len()
    }

    pub fn was_relocated(&self, id: &AnnotationId) -> bool {
        self.seen.contains(id)
    }

    /// Move the annotations a position of (`staff`, `voice`) carries from
    /// `from` to `to`.
    ///
    /// Candidates are the voice's irregular groupings, the staff's
    /// dynamics and every system-wide annotation.
    pub fn relocate(
        &mut self,
        system: &mut System,
        system_index: usize,
        staff_index: usize,
        voice_index: usize,
        from: Slot,
        to: Slot,
    ) -> usize {
        let System {
            staves,
            text_items,
            chords,
            tempo_markers,
            directions,
            player_changes,
            ..
        } = system;
        let Staff { voices, dynamics } = &mut staves[staff_index];
        let groupings = &mut voices[voice_index].irregular_groupings;

        let in_voice = AnnotationOwner {
            system: system_index,
            staff: Some(staff_index),
            voice: Some(voice_index),
        };
        let in_staff = AnnotationOwner {
            voice: None,
            ..in_voice
        };
        let in_system = AnnotationOwner {
            staff: None,
            ..in_staff
        };

        let sets: [(AnnotationOwner, &mut dyn AnchorSet); 7] = [
            (in_voice, groupings),
            (in_staff, dynamics),
            (in_system, text_items),
            (in_system, chords),
            (in_system, tempo_markers),
            (in_system, directions),
            (in_system, player_changes),
        ];

        let mut moved = 0;
        for (owner, set) in sets {
            moved += set.relocate(owner, from, to, &mut self.seen);
        }

        if moved > 0 {
            log::trace!(
                "relocated {} annotation(s) {} -> {} (staff {}, voice {})",
                moved,
                from,
                to,
                staff_index,
                voice_index
            );
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChordText, Dynamic, IrregularGrouping, TextItem, VolumeLevel};

    fn two_staff_system() -> System {
        let mut system = System::new();
        system.staves.push(Staff::new());
        system.staves.push(Staff::new());
        system
    }

    #[test]
    fn test_system_annotation_moves_once_across_staves() {
        let mut system = two_staff_system();
        system.text_items.push(TextItem::new(4, "rit."));
        let mut relocator = AnnotationRelocator::new();

        assert_eq!(relocator.relocate(&mut system, 0, 0, 0, 4, 2), 1);
        // Second staff passes through the old slot: nothing left to move
        assert_eq!(relocator.relocate(&mut system, 0, 1, 0, 4, 3), 0);
        assert_eq!(system.text_items[0].slot, 2);
    }

    #[test]
    fn test_moved_annotation_not_caught_again_at_new_slot() {
        let mut system = two_staff_system();
        system.chords.push(ChordText::new(3, "C"));
        let mut relocator = AnnotationRelocator::new();

        relocator.relocate(&mut system, 0, 0, 0, 3, 5);
        relocator.relocate(&mut system, 0, 0, 0, 5, 7);
        assert_eq!(system.chords[0].slot, 5);
    }

    #[test]
    fn test_scoped_annotations_follow_their_owner() {
        let mut system = two_staff_system();
        system.staves[0].dynamics.push(Dynamic::new(4, VolumeLevel::Mf));
        system.staves[1].dynamics.push(Dynamic::new(4, VolumeLevel::P));
        system.staves[1].voices[1]
            .irregular_groupings
            .push(IrregularGrouping::triplet(4));
        let mut relocator = AnnotationRelocator::new();

        relocator.relocate(&mut system, 0, 1, 0, 4, 1);

        assert_eq!(system.staves[0].dynamics[0].slot, 4);
        assert_eq!(system.staves[1].dynamics[0].slot, 1);
        // Grouping belongs to voice 1, not voice 0
        assert_eq!(system.staves[1].voices[1].irregular_groupings[0].slot, 4);
        assert_eq!(relocator.relocated_count(), 1);
    }

    #[test]
    fn test_claim_in_place_blocks_later_move() {
        let mut system = two_staff_system();
        system.text_items.push(TextItem::new(4, "let ring"));
        let mut relocator = AnnotationRelocator::new();

        assert_eq!(relocator.relocate(&mut system, 0, 0, 0, 4, 4), 0);
        assert_eq!(relocator.relocate(&mut system, 0, 1, 0, 4, 6), 0);
        assert_eq!(system.text_items[0].slot, 4);
        assert_eq!(relocator.relocated_count(), 1);
    }

    #[test]
    fn test_shared_slot_items_each_move() {
        let mut system = two_staff_system();
        system.text_items.push(TextItem::new(6, "a"));
        system.text_items.push(TextItem::new(6, "b"));
        let mut relocator = AnnotationRelocator::new();

        assert_eq!(relocator.relocate(&mut system, 0, 0, 0, 6, 2), 2);
        assert!(system.text_items.iter().all(|t| t.slot == 2));
        assert!(relocator.was_relocated(&AnnotationId {
            kind: AnnotationKind::TextItem,
            owner: AnnotationOwner {
                system: 0,
                staff: None,
                voice: None
            },
            index: 1,
        }));
    }
}
