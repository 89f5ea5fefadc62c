//! Structural column set
//!
//! Columns are owned by the space description and mutated only through
//! the clearance-validated operations here. The intrusion resolver
//! reads the set; it never mutates it.

use serde::{Deserialize, Serialize};

use crate::core::config::COLUMN_MIN_CLEARANCE;
use crate::core::error::ColumnRejection;
use crate::core::types::{ColumnId, Mm};

/// A structural column intruding into the closet space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    /// Center-line X in scene coordinates (mm)
    pub center_x: Mm,
    pub width: Mm,
    pub depth: Mm,
    pub height: Mm,
}

impl Column {
    pub fn new(center_x: Mm, width: Mm, depth: Mm, height: Mm) -> Self {
        Self {
            id: ColumnId::new(),
            center_x,
            width: width.max(1.0),
            depth: depth.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Horizontal footprint `[left, right]` in scene coordinates
    pub fn footprint(&self) -> (Mm, Mm) {
        (self.center_x - self.width / 2.0, self.center_x + self.width / 2.0)
    }
}

/// Ordered set of columns with a minimum-clearance invariant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Find the nearest clearance violation for a candidate footprint,
    /// ignoring the column with `exclude` (the one being moved).
    fn clearance_violation(
        &self,
        candidate: &Column,
        exclude: Option<ColumnId>,
    ) -> Option<ColumnId> {
        let (left, right) = candidate.footprint();
        self.columns
            .iter()
            .filter(|c| Some(c.id) != exclude)
            .find(|c| {
                let (ol, or) = c.footprint();
                // Distance between intervals; negative means overlap.
                let separation = (ol - right).max(left - or);
                separation < COLUMN_MIN_CLEARANCE
            })
            .map(|c| c.id)
    }

    /// Add a column; rejected when its footprint comes within the
    /// minimum clearance of an existing column.
    pub fn add(&mut self, column: Column) -> Result<ColumnId, ColumnRejection> {
        if let Some(other) = self.clearance_violation(&column, None) {
            tracing::debug!("Rejected column add: too close to {:?}", other);
            return Err(ColumnRejection::TooClose {
                other,
                clearance: COLUMN_MIN_CLEARANCE,
            });
        }
        let id = column.id;
        self.columns.push(column);
        Ok(id)
    }

    /// Move or resize an existing column, re-validating clearance
    /// against all other columns. On rejection the column keeps its
    /// prior geometry.
    pub fn update(
        &mut self,
        id: ColumnId,
        center_x: Mm,
        width: Mm,
    ) -> Result<(), ColumnRejection> {
        let current = *self.get(id).ok_or(ColumnRejection::NotFound(id))?;
        let moved = Column {
            center_x,
            width: width.max(1.0),
            ..current
        };
        if let Some(other) = self.clearance_violation(&moved, Some(id)) {
            tracing::debug!("Rejected column move: too close to {:?}", other);
            return Err(ColumnRejection::TooClose {
                other,
                clearance: COLUMN_MIN_CLEARANCE,
            });
        }
        for column in &mut self.columns {
            if column.id == id {
                *column = moved;
                break;
            }
        }
        Ok(())
    }

    pub fn remove(&mut self, id: ColumnId) -> Result<Column, ColumnRejection> {
        let index = self
            .columns
            .iter()
            .position(|c| c.id == id)
            .ok_or(ColumnRejection::NotFound(id))?;
        Ok(self.columns.remove(index))
    }
}
