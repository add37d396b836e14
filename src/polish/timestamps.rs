//! Musical timestamps of the positions of one voice within one bar

use crate::models::{duration_time, Rational, Slot, Voice};

/// A position with its time offset from the start of the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedPosition {
    /// Index into `Voice::positions`
    pub index: usize,
    pub timestamp: Rational,
    pub duration: Rational,
}

/// Timestamps for the positions of `voice` in `[bar_start, bar_end)`.
///
/// The first position in the bar is at time zero; each following one
/// starts when the previous one ends.
pub fn voice_timestamps(voice: &Voice, bar_start: Slot, bar_end: Slot) -> Vec<TimedPosition> {
    let mut timestamp = Rational::from_integer(0);

    voice
        .positions_in_range(bar_start, bar_end)
        .map(|index| {
            let duration = duration_time(voice, index);
            let timed = TimedPosition {
                index,
                timestamp,
                duration,
            };
            timestamp += duration;
            timed
        })
        .collect()
}
