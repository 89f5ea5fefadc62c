//! Zone resolution and slot partitioning
//!
//! A zone is a horizontal region of the space with its own equal-width
//! slot grid. Boundaries are always derived from the zone's absolute
//! start coordinate plus an index so repeated recomputation can never
//! accumulate floating drift.

pub mod partition;
pub mod resolver;

use serde::{Deserialize, Serialize};

use crate::core::types::{Mm, ZoneKind};

/// A resolved zone with its slot grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub kind: ZoneKind,
    /// Left edge of the usable internal span, scene coordinates (mm)
    pub start_x: Mm,
    /// Usable internal width after allowances (mm)
    pub internal_width: Mm,
    pub slot_count: usize,
    pub slot_width: Mm,
}

impl Zone {
    /// Left edge of slot `i`
    pub fn slot_left(&self, i: usize) -> Mm {
        self.start_x + i as Mm * self.slot_width
    }

    /// Right edge of slot `i`
    pub fn slot_right(&self, i: usize) -> Mm {
        self.start_x + (i + 1) as Mm * self.slot_width
    }

    /// Center of slot `i`
    pub fn slot_center(&self, i: usize) -> Mm {
        self.start_x + (i as Mm + 0.5) * self.slot_width
    }

    /// Anchor for a dual-span module occupying slots `i` and `i + 1`:
    /// the midpoint between the two slot centers.
    pub fn dual_center(&self, i: usize) -> Mm {
        (self.slot_center(i) + self.slot_center(i + 1)) / 2.0
    }

    /// All `slot_count + 1` boundary coordinates, left to right
    pub fn boundaries(&self) -> Vec<Mm> {
        (0..=self.slot_count).map(|i| self.slot_left(i)).collect()
    }

    pub fn end_x(&self) -> Mm {
        self.start_x + self.internal_width
    }

    pub fn contains(&self, x: Mm) -> bool {
        x >= self.start_x && x <= self.end_x()
    }

    /// Resolve a scene X coordinate to a slot index. Positions outside
    /// the zone clamp to the nearest end slot; inside, the containing
    /// slot wins (which is also the nearest-center slot for an
    /// equal-width grid).
    pub fn slot_at(&self, x: Mm) -> usize {
        if x <= self.start_x {
            return 0;
        }
        if x >= self.end_x() {
            return self.slot_count - 1;
        }
        let index = ((x - self.start_x) / self.slot_width) as usize;
        index.min(self.slot_count - 1)
    }
}

/// The zones of the current space: always a normal zone, plus a
/// dropped zone when a ceiling step-down is enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSet {
    pub normal: Zone,
    pub dropped: Option<Zone>,
}

impl ZoneSet {
    pub fn get(&self, kind: ZoneKind) -> Option<&Zone> {
        match kind {
            ZoneKind::Normal => Some(&self.normal),
            ZoneKind::Dropped => self.dropped.as_ref(),
        }
    }

    /// Zone containing a scene X coordinate; the dropped zone wins on
    /// its own span, everything else falls to the normal zone when the
    /// coordinate is inside it.
    pub fn locate(&self, x: Mm) -> Option<(ZoneKind, usize)> {
        if let Some(dropped) = &self.dropped {
            if dropped.contains(x) {
                return Some((ZoneKind::Dropped, dropped.slot_at(x)));
            }
        }
        if self.normal.contains(x) {
            return Some((ZoneKind::Normal, self.normal.slot_at(x)));
        }
        None
    }

    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        std::iter::once(&self.normal).chain(self.dropped.as_ref())
    }
}

/// Internal space available to furniture after the vertical stack
/// (floor finish, base, top frame) is subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InternalSpace {
    pub width: Mm,
    pub height: Mm,
    pub depth: Mm,
    /// Bottom of the furniture volume above the floor (mm)
    pub start_y: Mm,
}
