//! Score polishing (bar reflow)
//!
//! After an edit changes durations or adds and removes positions, the
//! horizontal layout is recomputed bar by bar so that:
//!
//! - events at the same musical time line up across every staff and voice
//!   of a system,
//! - each bar is exactly as wide as its content needs (or wider, when a
//!   bar shrinks the freed slots stay empty until a later pass),
//! - annotations anchored to a moved position move with it, once.
//!
//! # Pipeline
//!
//! ```text
//! voice → timestamps → allocator (timestamp → slot) → bar resize → re-slot + relocate
//! ```

pub mod allocator;
pub mod bar;
pub mod relocate;
pub mod settings;
pub mod shift;
pub mod timestamps;

pub use allocator::{Allocation, PositionAllocator};
pub use bar::{reflow_bar, BarOutcome, BarResize};
pub use relocate::{AnchorSet, AnnotationId, AnnotationOwner, AnnotationRelocator};
pub use settings::PolishSettings;
pub use shift::{ScoreShifter, SlotShifter};
pub use timestamps::{voice_timestamps, TimedPosition};

use serde::{Deserialize, Serialize};

use crate::models::Score;

/// Summary of one polish pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolishReport {
    pub bars: usize,
    pub bars_widened: usize,
    pub bars_shrunk: usize,
    pub positions_moved: usize,
    pub annotations_moved: usize,
}

impl PolishReport {
    /// True when the pass moved nothing
    pub fn is_stable(&self) -> bool {
        self.bars_widened == 0
            && self.bars_shrunk == 0
            && self.positions_moved == 0
            && self.annotations_moved == 0
    }

    fn record(&mut self, outcome: &BarOutcome) {
        self.bars += 1;
        match outcome.resize {
            BarResize::Widened { .. } => self.bars_widened += 1,
            BarResize::Shrunk { .. } => self.bars_shrunk += 1,
            BarResize::Unchanged => {}
        }
        self.positions_moved += outcome.positions_moved;
        self.annotations_moved += outcome.annotations_moved;
    }
}

/// Polish the whole score with the default spacing
pub fn polish(score: &mut Score) -> PolishReport {
    polish_with(score, &PolishSettings::default(), &mut ScoreShifter)
}

/// Polish every bar of every system, systems in order and bars left to
/// right.
pub fn polish_with(
    score: &mut Score,
    settings: &PolishSettings,
    shifter: &mut dyn SlotShifter,
) -> PolishReport {
    let mut relocator = AnnotationRelocator::new();
    let mut report = PolishReport::default();

    for system_index in 0..score.systems.len() {
        let barline_count = score.systems[system_index].barlines.len();
        for barline_index in 0..barline_count {
            if let Some(outcome) = reflow_bar(
                score,
                system_index,
                barline_index,
                settings,
                shifter,
                &mut relocator,
            ) {
                report.record(&outcome);
            }
        }
    }

    debug_assert!(relocator.relocated_count() >= report.annotations_moved);
    log::debug!("polish: {:?}", report);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Barline, DurationType, Position, Staff, System};

    #[test]
    fn test_polish_report_counts_bars() {
        let mut system = System::new();
        for slot in [0, 10, 20] {
            system.insert_barline(Barline::single(slot));
        }
        let mut staff = Staff::new();
        staff.voices[0].insert_position(Position::new(3, DurationType::Quarter));
        staff.voices[0].insert_position(Position::new(12, DurationType::Half));
        system.staves.push(staff);

        let mut score = Score::new();
        score.add_system(system);

        let report = polish(&mut score);
        assert_eq!(report.bars, 2);
        assert_eq!(report.bars_shrunk, 2);
        assert_eq!(report.positions_moved, 2);

        let barlines: Vec<i32> = score.systems[0].barlines.iter().map(|b| b.slot).collect();
        assert_eq!(barlines, vec![0, 2, 7]);
        assert!(polish(&mut score).is_stable());
    }

    #[test]
    fn test_polish_empty_score() {
        let mut score = Score::new();
        assert_eq!(polish(&mut score), PolishReport::default());
    }
}
