//! Rejection taxonomy
//!
//! Nothing in the engine panics or throws for degenerate geometry;
//! infeasible requests come back as typed rejection values so a live
//! UI can distinguish "applied" from "rejected" without exceptions.

use thiserror::Error;

use crate::core::types::{ColumnId, ItemId, Mm, ZoneKind};

/// Why a placement request (add / move / update) was refused.
///
/// The ledger is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementRejection {
    #[error("slot {index} out of range for zone with {slot_count} slots")]
    OutOfRange { index: usize, slot_count: usize },

    #[error("slot range already occupied by item {0:?}")]
    Occupied(ItemId),

    #[error("dual modules need {min}mm internal width, zone has {actual}mm")]
    DualTooNarrow { min: Mm, actual: Mm },

    #[error("dual modules cannot span a column-intruded slot")]
    DualOverColumn,

    #[error("zone {0:?} does not exist in the current space")]
    ZoneMissing(ZoneKind),

    #[error("no placed item with id {0:?}")]
    ItemNotFound(ItemId),

    #[error("position {0}mm is outside every zone")]
    OutsideZones(Mm),
}

/// Why a column mutation was refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColumnRejection {
    #[error("footprint within {clearance}mm of column {other:?}")]
    TooClose { other: ColumnId, clearance: Mm },

    #[error("no column with id {0:?}")]
    NotFound(ColumnId),
}
