//! Placement ledger
//!
//! The authoritative set of placed furniture items. Every mutation
//! funnels through the occupancy invariant; a request that would
//! violate it returns a rejection value and leaves the ledger
//! untouched.

use serde::{Deserialize, Serialize};

use crate::core::config::DUAL_MIN_INTERNAL_WIDTH;
use crate::core::error::PlacementRejection;
use crate::core::types::{ItemId, Mm, ZoneKind};
use crate::placement::module_spec::{ModuleCategory, ModuleSpan, ModuleSpec};
use crate::placement::occupancy;
use crate::zone::{Zone, ZoneSet};

/// A furniture item assigned to the slot grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub id: ItemId,
    pub spec: ModuleSpec,
    pub zone: ZoneKind,
    /// Anchor slot; for dual-span items this is the lower of the two
    /// occupied indices
    pub slot_index: usize,
    /// Scene X position of the item's center (mm)
    pub position_x: Mm,
    /// Present only when the item's slot has a column intrusion
    pub adjusted_width: Option<Mm>,
    pub has_door: bool,
}

impl PlacedItem {
    pub fn occupied_range(&self) -> (usize, usize) {
        occupancy::occupied_range(self.slot_index, self.spec.span)
    }

    /// Highest slot index the item occupies
    pub fn last_slot(&self) -> usize {
        self.occupied_range().1
    }
}

/// Partial update for [`Ledger::update_item`]. `None` fields are left
/// unchanged; slot or zone changes re-run the full validation path.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub zone: Option<ZoneKind>,
    pub slot_index: Option<usize>,
    pub has_door: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    items: Vec<PlacedItem>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Read-only feasibility check: the first item that would conflict
    /// with the candidate placement, if any. UIs use this to
    /// pre-validate before issuing a mutation.
    pub fn would_conflict(
        &self,
        zone: ZoneKind,
        slot_index: usize,
        span: ModuleSpan,
        category: ModuleCategory,
        exclude: Option<ItemId>,
    ) -> Option<ItemId> {
        self.items
            .iter()
            .filter(|item| Some(item.id) != exclude)
            .find(|item| {
                occupancy::conflicts(
                    zone,
                    slot_index,
                    span,
                    category,
                    item.zone,
                    item.slot_index,
                    item.spec.span,
                    item.spec.category,
                )
            })
            .map(|item| item.id)
    }

    /// Validate a candidate placement against the grid and the
    /// invariant. Shared by add / move / update.
    fn validate(
        &self,
        zones: &ZoneSet,
        zone_kind: ZoneKind,
        slot_index: usize,
        spec: &ModuleSpec,
        exclude: Option<ItemId>,
    ) -> Result<(), PlacementRejection> {
        let zone = zones
            .get(zone_kind)
            .ok_or(PlacementRejection::ZoneMissing(zone_kind))?;

        let last = slot_index + spec.span.slot_count() - 1;
        if last >= zone.slot_count {
            return Err(PlacementRejection::OutOfRange {
                index: slot_index,
                slot_count: zone.slot_count,
            });
        }
        if spec.is_dual() && zone.internal_width < DUAL_MIN_INTERNAL_WIDTH {
            return Err(PlacementRejection::DualTooNarrow {
                min: DUAL_MIN_INTERNAL_WIDTH,
                actual: zone.internal_width,
            });
        }
        if let Some(other) =
            self.would_conflict(zone_kind, slot_index, spec.span, spec.category, exclude)
        {
            return Err(PlacementRejection::Occupied(other));
        }
        Ok(())
    }

    /// Add an item after validating the occupancy invariant. The
    /// ledger is unchanged on rejection.
    pub fn add_item(&mut self, item: PlacedItem, zones: &ZoneSet) -> Result<(), PlacementRejection> {
        self.validate(zones, item.zone, item.slot_index, &item.spec, None)
            .inspect_err(|rejection| {
                tracing::debug!("Rejected add for item {:?}: {}", item.id, rejection);
            })?;
        self.items.push(item);
        Ok(())
    }

    /// Move an item to the slot nearest a scene X coordinate,
    /// re-validating against all other items. On rejection the item
    /// keeps its prior state.
    pub fn move_item(
        &mut self,
        id: ItemId,
        new_x: Mm,
        zones: &ZoneSet,
    ) -> Result<(), PlacementRejection> {
        let item = self.get(id).ok_or(PlacementRejection::ItemNotFound(id))?;
        let spec = item.spec;

        let (zone_kind, slot_index) = zones
            .locate(new_x)
            .ok_or(PlacementRejection::OutsideZones(new_x))?;
        // A dual module dropped on the last slot anchors one to the left.
        let zone = zones.get(zone_kind).expect("located zone exists");
        let slot_index = slot_index.min(zone.slot_count.saturating_sub(spec.span.slot_count()));

        self.validate(zones, zone_kind, slot_index, &spec, Some(id))
            .inspect_err(|rejection| {
                tracing::debug!("Rejected move for item {:?}: {}", id, rejection);
            })?;

        let position_x = nominal_position(zone, slot_index, spec.span);
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .expect("item existence checked above");
        item.zone = zone_kind;
        item.slot_index = slot_index;
        item.position_x = position_x;
        Ok(())
    }

    /// Apply a partial update; slot or zone changes run the same
    /// validation path as a move.
    pub fn update_item(
        &mut self,
        id: ItemId,
        patch: ItemPatch,
        zones: &ZoneSet,
    ) -> Result<(), PlacementRejection> {
        let item = self.get(id).ok_or(PlacementRejection::ItemNotFound(id))?;
        let spec = item.spec;
        let zone_kind = patch.zone.unwrap_or(item.zone);
        let slot_index = patch.slot_index.unwrap_or(item.slot_index);
        let relocating = zone_kind != item.zone || slot_index != item.slot_index;

        if relocating {
            self.validate(zones, zone_kind, slot_index, &spec, Some(id))
                .inspect_err(|rejection| {
                    tracing::debug!("Rejected update for item {:?}: {}", id, rejection);
                })?;
        }

        let position_x = zones
            .get(zone_kind)
            .map(|zone| nominal_position(zone, slot_index, spec.span));
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .expect("item existence checked above");
        if relocating {
            item.zone = zone_kind;
            item.slot_index = slot_index;
            if let Some(x) = position_x {
                item.position_x = x;
            }
        }
        if let Some(has_door) = patch.has_door {
            item.has_door = has_door;
        }
        Ok(())
    }

    pub fn remove_item(&mut self, id: ItemId) -> Option<PlacedItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    /// Bulk door-flag mutation; no invariant interaction.
    pub fn set_all_doors(&mut self, installed: bool) {
        for item in &mut self.items {
            item.has_door = installed;
        }
    }

    /// First slot in the given direction where the candidate module
    /// would not conflict, or `None` when the direction is exhausted.
    pub fn next_available_slot(
        &self,
        zone: &Zone,
        from: usize,
        direction: SearchDirection,
        span: ModuleSpan,
        category: ModuleCategory,
        exclude: Option<ItemId>,
    ) -> Option<usize> {
        let max_anchor = zone.slot_count.checked_sub(span.slot_count())?;
        let candidates: Box<dyn Iterator<Item = usize>> = match direction {
            SearchDirection::Right => Box::new(from + 1..=max_anchor),
            SearchDirection::Left => Box::new((0..from.min(max_anchor + 1)).rev()),
        };
        let mut candidates = candidates;
        candidates.find(|&slot| {
            self.would_conflict(zone.kind, slot, span, category, exclude)
                .is_none()
        })
    }

    /// Replace the whole item set; used by the reconciliation driver
    /// to publish a migrated ledger atomically.
    pub(crate) fn replace_items(&mut self, items: Vec<PlacedItem>) {
        self.items = items;
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<PlacedItem> {
        &mut self.items
    }
}

/// Nominal (pre-intrusion) center position for a module anchored at a
/// slot.
pub fn nominal_position(zone: &Zone, slot_index: usize, span: ModuleSpan) -> Mm {
    match span {
        ModuleSpan::Single => zone.slot_center(slot_index),
        ModuleSpan::Dual => zone.dual_center(slot_index),
    }
}

/// Direction for [`Ledger::next_available_slot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Left,
    Right,
}
