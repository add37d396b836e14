//! Core score structures
//!
//! A score is a list of systems. Each system has its own barlines and
//! staves, and every item in the score is placed at an integer slot. Slots
//! are absolute across the whole score, so moving one bar can move content
//! in every system after it.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::annotations::{ChordText, Direction, Dynamic, IrregularGrouping, PlayerChange, TempoMarker, TextItem};
use super::barlines::Barline;
use super::duration::DurationType;
use crate::error::ScoreError;
use crate::utils::{first_after, slot_range};

/// Horizontal address shared by barlines, positions and annotations
pub type Slot = i32;

/// Number of voices created for a new staff
pub const NUM_STAFF_VOICES: usize = 2;

/// Top-level document
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Score {
    #[serde(default)]
    pub systems: Vec<System>,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ScoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ScoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn add_system(&mut self, system: System) {
        self.systems.push(system);
    }
}

/// A row of staves sharing one set of barlines
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct System {
    #[serde(default)]
    pub barlines: Vec<Barline>,
    #[serde(default)]
    pub staves: Vec<Staff>,
    #[serde(default)]
    pub text_items: Vec<TextItem>,
    #[serde(default)]
    pub chords: Vec<ChordText>,
    #[serde(default)]
    pub tempo_markers: Vec<TempoMarker>,
    #[serde(default)]
    pub directions: Vec<Direction>,
    #[serde(default)]
    pub player_changes: Vec<PlayerChange>,
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a barline, keeping barlines sorted by slot
    pub fn insert_barline(&mut self, barline: Barline) {
        let index = self.barlines.partition_point(|b| b.slot < barline.slot);
        self.barlines.insert(index, barline);
    }

    /// Index of the first barline strictly after `slot`
    pub fn next_barline(&self, slot: Slot) -> Option<usize> {
        first_after(&self.barlines, slot, |b| b.slot)
    }
}

/// One staff of a system
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Staff {
    pub voices: Vec<Voice>,
    #[serde(default)]
    pub dynamics: Vec<Dynamic>,
}

impl Staff {
    pub fn new() -> Self {
        Self::with_voices(NUM_STAFF_VOICES)
    }

    pub fn with_voices(count: usize) -> Self {
        Self {
            voices: (0..count).map(|_| Voice::new()).collect(),
            dynamics: Vec::new(),
        }
    }
}

impl Default for Staff {
    fn default() -> Self {
        Self::new()
    }
}

/// Sequence of positions, sorted by slot
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Voice {
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub irregular_groupings: Vec<IrregularGrouping>,
}

impl Voice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a position, keeping positions sorted by slot
    pub fn insert_position(&mut self, position: Position) {
        let index = self.positions.partition_point(|p| p.slot < position.slot);
        self.positions.insert(index, position);
    }

    /// Indices of positions with a slot in `[start, end)`
    pub fn positions_in_range(&self, start: Slot, end: Slot) -> Range<usize> {
        slot_range(&self.positions, start, end, |p| p.slot)
    }

    pub fn position_index_at(&self, slot: Slot) -> Option<usize> {
        self.positions.binary_search_by_key(&slot, |p| p.slot).ok()
    }
}

/// A note or rest event
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Position {
    pub slot: Slot,
    #[serde(default)]
    pub duration_type: DurationType,
    #[serde(default)]
    pub dotted: bool,
    #[serde(default)]
    pub double_dotted: bool,
    #[serde(default)]
    pub rest: bool,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Position {
    pub fn new(slot: Slot, duration_type: DurationType) -> Self {
        Self {
            slot,
            duration_type,
            dotted: false,
            double_dotted: false,
            rest: false,
            notes: Vec::new(),
        }
    }

    pub fn with_dotted(mut self) -> Self {
        self.dotted = true;
        self.double_dotted = false;
        self
    }

    pub fn with_double_dotted(mut self) -> Self {
        self.double_dotted = true;
        self.dotted = false;
        self
    }

    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }
}

/// A fretted note on one string
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
    pub string: u8,
    pub fret: u8,
}

impl Note {
    pub fn new(string: u8, fret: u8) -> Self {
        Self { string, fret }
    }
}
