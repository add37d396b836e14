//! Slot-anchored annotations
//!
//! Irregular groupings, dynamics, text items, chord names, tempo markers,
//! directions and player changes are all attached to a single slot. They
//! share the [`Anchored`] capability so that layout code can move any of
//! them without knowing which kind it is holding.

use serde::{Deserialize, Serialize};

use super::score::Slot;

/// Every kind of annotation that follows its note when the layout changes
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnnotationKind {
    IrregularGrouping,
    Dynamic,
    TextItem,
    Chord,
    TempoMarker,
    Direction,
    PlayerChange,
}

/// An item attached to one slot of a system
pub trait Anchored {
    const KIND: AnnotationKind;

    fn slot(&self) -> Slot;
    fn set_slot(&mut self, slot: Slot);
}

macro_rules! impl_anchored {
    ($ty:ty, $kind:expr) => {
        impl Anchored for $ty {
            const KIND: AnnotationKind = $kind;

            fn slot(&self) -> Slot {
                self.slot
            }

            fn set_slot(&mut self, slot: Slot) {
                self.slot = slot;
            }
        }
    };
}

/// Tuplet: `notes_played` notes in the time of `notes_played_over`
/// (a triplet is 3 in the time of 2)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct IrregularGrouping {
    /// Slot of the first position in the group
    pub slot: Slot,
    /// Number of consecutive positions in the group
    pub length: usize,
    pub notes_played: u8,
    pub notes_played_over: u8,
}

impl IrregularGrouping {
    pub fn new(slot: Slot, length: usize, notes_played: u8, notes_played_over: u8) -> Self {
        Self {
            slot,
            length,
            notes_played,
            notes_played_over,
        }
    }

    /// Standard 3:2 triplet
    pub fn triplet(slot: Slot) -> Self {
        Self::new(slot, 3, 3, 2)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeLevel {
    Off,
    Ppp,
    Pp,
    P,
    Mp,
    Mf,
    F,
    Ff,
    Fff,
}

/// Dynamic marking, scoped to one staff
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Dynamic {
    pub slot: Slot,
    pub volume: VolumeLevel,
}

impl Dynamic {
    pub fn new(slot: Slot, volume: VolumeLevel) -> Self {
        Self { slot, volume }
    }
}

/// Free text shown above the system
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TextItem {
    pub slot: Slot,
    pub contents: String,
}

impl TextItem {
    pub fn new(slot: Slot, contents: impl Into<String>) -> Self {
        Self {
            slot,
            contents: contents.into(),
        }
    }
}

/// Chord name (e.g. "Am7") shown above the staves
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChordText {
    pub slot: Slot,
    pub name: String,
}

impl ChordText {
    pub fn new(slot: Slot, name: impl Into<String>) -> Self {
        Self {
            slot,
            name: name.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TempoMarker {
    pub slot: Slot,
    pub beats_per_minute: u16,
    #[serde(default)]
    pub description: String,
}

impl TempoMarker {
    pub fn new(slot: Slot, beats_per_minute: u16) -> Self {
        Self {
            slot,
            beats_per_minute,
            description: String::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionSymbol {
    Coda,
    Segno,
    Fine,
    DaCapo,
    DalSegno,
    ToCoda,
}

/// Musical direction (coda, segno, D.C., ...)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Direction {
    pub slot: Slot,
    pub symbols: Vec<DirectionSymbol>,
}

impl Direction {
    pub fn new(slot: Slot, symbols: Vec<DirectionSymbol>) -> Self {
        Self { slot, symbols }
    }
}

/// Change of which player is assigned to which staff
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlayerChange {
    pub slot: Slot,
    /// Player indices active on each staff from this slot on
    pub active_players: Vec<Vec<usize>>,
}

impl PlayerChange {
    pub fn new(slot: Slot) -> Self {
        Self {
            slot,
            active_players: Vec::new(),
        }
    }
}

impl_anchored!(IrregularGrouping, AnnotationKind::IrregularGrouping);
impl_anchored!(Dynamic, AnnotationKind::Dynamic);
impl_anchored!(TextItem, AnnotationKind::TextItem);
impl_anchored!(ChordText, AnnotationKind::Chord);
impl_anchored!(TempoMarker, AnnotationKind::TempoMarker);
impl_anchored!(Direction, AnnotationKind::Direction);
impl_anchored!(PlayerChange, AnnotationKind::PlayerChange);
