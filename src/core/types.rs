//! Core type definitions used throughout the engine

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a placed furniture item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for a structural column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnId(pub Uuid);

impl ColumnId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ColumnId {
    fn default() -> Self {
        Self::new()
    }
}

/// Horizontal region of the space with its own slot grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    /// Full-height region under the main ceiling
    Normal,
    /// Region under a ceiling step-down
    Dropped,
}

/// Which end of the space a dropped ceiling attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DroppedSide {
    Left,
    Right,
}

/// Direction from which a column's footprint encroaches on a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntrusionDirection {
    /// No column overlaps this slot
    None,
    /// Column overlaps the slot's left edge; free space is on the right
    Left,
    /// Column overlaps the slot's right edge; free space is on the left
    Right,
    /// Column spans the slot or sits strictly inside it; no
    /// single-sided recenter is possible
    Both,
}

/// All lengths in the engine are millimetres in scene coordinates
/// (X centered on the space midpoint, left edge at `-width / 2`).
pub type Mm = f64;
