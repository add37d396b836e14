//! Timestamp to slot allocation for one bar
//!
//! Voices synchronize on musical time, not on slots. Every distinct
//! timestamp in the bar gets a single slot, large enough that no voice
//! reaching that timestamp overlaps its own previous event.

use std::collections::BTreeMap;

use super::settings::PolishSettings;
use super::timestamps::TimedPosition;
use crate::models::{Rational, Slot};

/// Result of allocating one bar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocation {
    /// Slot offset from the bar start for each timestamp
    pub table: BTreeMap<Rational, Slot>,
    /// Slots needed by the widest voice
    pub width: Slot,
}

impl Allocation {
    pub fn slot_at(&self, timestamp: Rational) -> Option<Slot> {
        self.table.get(&timestamp).copied()
    }
}

/// Collects the timed positions of every voice in a bar
#[derive(Debug, Clone)]
pub struct PositionAllocator {
    settings: PolishSettings,
    /// (timestamp, duration) pairs per voice
    voices: Vec<Vec<(Rational, Rational)>>,
}

impl PositionAllocator {
    pub fn new(settings: PolishSettings) -> Self {
        Self {
            settings,
            voices: Vec::new(),
        }
    }

    pub fn add_voice(&mut self, timed: &[TimedPosition]) {
        self.voices
            .push(timed.iter().map(|t| (t.timestamp, t.duration)).collect());
    }

    /// Assign slots in increasing timestamp order.
    ///
    /// A timestamp's slot is the furthest any voice has advanced when it
    /// reaches that timestamp. Every later timestamp is allocated after it,
    /// so it always sees the final value.
    pub fn allocate(&self) -> Allocation {
        let mut events: BTreeMap<Rational, Vec<(usize, Rational)>> = BTreeMap::new();
        for (voice, timed) in self.voices.iter().enumerate() {
            for &(timestamp, duration) in timed {
                events.entry(timestamp).or_default().push((voice, duration));
            }
        }

        let mut running: Vec<Slot> = vec![0; self.voices.len()];
        let mut table = BTreeMap::new();

        for (timestamp, at_time) in events {
            let slot = at_time
                .iter()
                .map(|&(voice, _)| running[voice])
                .max()
                .unwrap_or(0);
            table.insert(timestamp, slot);

            for (voice, duration) in at_time {
                running[voice] = slot + self.settings.note_spacing(duration);
            }
        }

        Allocation {
            table,
            width: running.into_iter().max().unwrap_or(0),
        }
    }
}
