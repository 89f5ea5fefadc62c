//! Derived geometry cache
//!
//! The full recomputed output of zone resolution, slot partitioning
//! and intrusion resolution for one space configuration. The engine
//! replaces the whole value on every structural change
//! (update-then-publish); readers never observe a partial update.

use crate::core::types::{Mm, ZoneKind};
use crate::intrusion::{self, SlotGeometry};
use crate::placement::module_spec::ModuleSpan;
use crate::space::columns::ColumnSet;
use crate::space::config::SpaceConfig;
use crate::zone::resolver::{internal_space, resolve_zones};
use crate::zone::{InternalSpace, ZoneSet};

// Not serialized; always recomputed from the space config on load.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedGeometry {
    pub zones: ZoneSet,
    pub internal: InternalSpace,
    normal_slots: Vec<SlotGeometry>,
    dropped_slots: Vec<SlotGeometry>,
    /// Bumped on every structural recompute; cosmetic changes leave it
    /// untouched
    pub generation: u64,
}

impl DerivedGeometry {
    /// Recompute everything from a normalized config and column set.
    pub fn compute(cfg: &SpaceConfig, columns: &ColumnSet, generation: u64) -> Self {
        let zones = resolve_zones(cfg);
        let normal_slots = intrusion::resolve_zone(&zones.normal, columns.columns());
        let dropped_slots = zones
            .dropped
            .as_ref()
            .map(|zone| intrusion::resolve_zone(zone, columns.columns()))
            .unwrap_or_default();

        Self {
            internal: internal_space(cfg),
            zones,
            normal_slots,
            dropped_slots,
            generation,
        }
    }

    pub fn slots(&self, zone: ZoneKind) -> &[SlotGeometry] {
        match zone {
            ZoneKind::Normal => &self.normal_slots,
            ZoneKind::Dropped => &self.dropped_slots,
        }
    }

    pub fn slot(&self, zone: ZoneKind, index: usize) -> Option<&SlotGeometry> {
        self.slots(zone).get(index)
    }

    /// Position and adjusted width for a module anchored at a slot.
    ///
    /// Single-span modules on an intruded slot recenter into the free
    /// sub-range and shrink to the available width; dual-span modules
    /// sit on the midpoint between their two slot centers (they are
    /// never placed over a column).
    pub fn item_geometry(
        &self,
        zone: ZoneKind,
        slot_index: usize,
        span: ModuleSpan,
    ) -> Option<(Mm, Option<Mm>)> {
        let zone_ref = self.zones.get(zone)?;
        match span {
            ModuleSpan::Dual => {
                if slot_index + 1 >= zone_ref.slot_count {
                    return None;
                }
                Some((zone_ref.dual_center(slot_index), None))
            }
            ModuleSpan::Single => {
                let slot = self.slot(zone, slot_index)?;
                let adjusted = slot.column.map(|_| slot.available_width);
                Some((slot.anchor_x, adjusted))
            }
        }
    }

    /// Whether any slot a module would span has a column intrusion.
    pub fn span_has_column(&self, zone: ZoneKind, slot_index: usize, span: ModuleSpan) -> bool {
        (slot_index..slot_index + span.slot_count())
            .any(|i| self.slot(zone, i).map(|s| s.column.is_some()).unwrap_or(false))
    }
}
