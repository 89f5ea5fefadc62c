//! Layout engine state container
//!
//! [`LayoutEngine`] owns the space configuration, the column set, the
//! derived geometry cache and the placement ledger; every mutation
//! goes through its methods. Structural changes reconcile eagerly and
//! inline; cosmetic changes do not. The engine is single-threaded and
//! synchronous; a multi-threaded host must serialize calls itself.

pub mod geometry;
mod reconcile;

pub use geometry::DerivedGeometry;

use crate::core::error::{ColumnRejection, PlacementRejection};
use crate::core::types::{ColumnId, ItemId, Mm, ZoneKind};
use crate::placement::ledger::{ItemPatch, Ledger, PlacedItem, SearchDirection};
use crate::placement::module_spec::{ModuleCategory, ModuleSpan, ModuleSpec};
use crate::space::columns::{Column, ColumnSet};
use crate::space::config::{DroppedCeiling, MaterialConfig, SpaceConfig};
use crate::space::normalize::normalize;

pub struct LayoutEngine {
    config: SpaceConfig,
    columns: ColumnSet,
    geometry: DerivedGeometry,
    ledger: Ledger,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(SpaceConfig::default())
    }
}

impl LayoutEngine {
    pub fn new(raw: SpaceConfig) -> Self {
        let config = normalize(&raw);
        let columns = ColumnSet::new();
        let geometry = DerivedGeometry::compute(&config, &columns, 1);
        Self {
            config,
            columns,
            geometry,
            ledger: Ledger::new(),
        }
    }

    // === Read access for collaborators ===

    pub fn config(&self) -> &SpaceConfig {
        &self.config
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    pub fn geometry(&self) -> &DerivedGeometry {
        &self.geometry
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    // === Structural configuration ===

    /// Replace the space configuration. Returns `true` when the change
    /// was structural and a reconciliation ran; a material-only change
    /// updates the stored config without touching derived state.
    pub fn set_space(&mut self, raw: SpaceConfig) -> bool {
        let normalized = normalize(&raw);
        if self.config.structurally_differs(&normalized) {
            self.config = normalized;
            self.reconcile();
            true
        } else {
            self.config.material = normalized.material;
            false
        }
    }

    /// Cosmetic-only update; never reconciles.
    pub fn set_material(&mut self, material: MaterialConfig) {
        self.config.material = material;
    }

    pub fn set_slot_count_override(&mut self, count: Option<usize>) -> bool {
        let mut cfg = self.config.clone();
        cfg.slot_count_override = count;
        self.set_space(cfg)
    }

    pub fn set_dropped_ceiling(&mut self, dropped: Option<DroppedCeiling>) -> bool {
        let mut cfg = self.config.clone();
        cfg.dropped_ceiling = dropped;
        self.set_space(cfg)
    }

    // === Columns ===

    pub fn add_column(&mut self, column: Column) -> Result<ColumnId, ColumnRejection> {
        let id = self.columns.add(column)?;
        self.reconcile();
        Ok(id)
    }

    pub fn update_column(
        &mut self,
        id: ColumnId,
        center_x: Mm,
        width: Mm,
    ) -> Result<(), ColumnRejection> {
        self.columns.update(id, center_x, width)?;
        self.reconcile();
        Ok(())
    }

    pub fn remove_column(&mut self, id: ColumnId) -> Result<Column, ColumnRejection> {
        let removed = self.columns.remove(id)?;
        self.reconcile();
        Ok(removed)
    }

    // === Placement ===

    /// Place a module into a slot. The module's nominal width comes
    /// from the target zone's slot width; position and adjusted width
    /// come from the slot's intrusion geometry.
    pub fn place_item(
        &mut self,
        span: ModuleSpan,
        category: ModuleCategory,
        zone: ZoneKind,
        slot_index: usize,
        has_door: bool,
    ) -> Result<ItemId, PlacementRejection> {
        let zone_ref = self
            .geometry
            .zones
            .get(zone)
            .ok_or(PlacementRejection::ZoneMissing(zone))?;
        if span == ModuleSpan::Dual && self.geometry.span_has_column(zone, slot_index, span) {
            return Err(PlacementRejection::DualOverColumn);
        }

        let spec = ModuleSpec::for_slot_width(span, category, zone_ref.slot_width);
        let (position_x, adjusted_width) = self
            .geometry
            .item_geometry(zone, slot_index, span)
            .ok_or(PlacementRejection::OutOfRange {
                index: slot_index,
                slot_count: zone_ref.slot_count,
            })?;

        let item = PlacedItem {
            id: ItemId::new(),
            spec,
            zone,
            slot_index,
            position_x,
            adjusted_width,
            has_door,
        };
        let id = item.id;
        self.ledger.add_item(item, &self.geometry.zones)?;
        Ok(id)
    }

    /// Move an item to the slot nearest a scene X coordinate. The
    /// item keeps its prior state on rejection.
    pub fn move_item(&mut self, id: ItemId, new_x: Mm) -> Result<(), PlacementRejection> {
        let span = self
            .ledger
            .get(id)
            .ok_or(PlacementRejection::ItemNotFound(id))?
            .spec
            .span;
        // Pre-check the dual/column rule at the target before the
        // ledger mutates anything.
        if span == ModuleSpan::Dual {
            if let Some((zone_kind, slot)) = self.geometry.zones.locate(new_x) {
                let zone = self.geometry.zones.get(zone_kind).expect("located zone");
                let anchor = slot.min(zone.slot_count.saturating_sub(span.slot_count()));
                if self.geometry.span_has_column(zone_kind, anchor, span) {
                    return Err(PlacementRejection::DualOverColumn);
                }
            }
        }
        self.ledger.move_item(id, new_x, &self.geometry.zones)?;
        self.refresh_item(id);
        Ok(())
    }

    /// Apply a partial update; slot or zone changes re-validate like a
    /// move.
    pub fn update_item(&mut self, id: ItemId, patch: ItemPatch) -> Result<(), PlacementRejection> {
        if let Some(item) = self.ledger.get(id) {
            let span = item.spec.span;
            let relocating = patch.zone.is_some() || patch.slot_index.is_some();
            if span == ModuleSpan::Dual && relocating {
                let zone = patch.zone.unwrap_or(item.zone);
                let slot_index = patch.slot_index.unwrap_or(item.slot_index);
                if self.geometry.span_has_column(zone, slot_index, span) {
                    return Err(PlacementRejection::DualOverColumn);
                }
            }
        }
        self.ledger.update_item(id, patch, &self.geometry.zones)?;
        self.refresh_item(id);
        Ok(())
    }

    pub fn remove_item(&mut self, id: ItemId) -> Option<PlacedItem> {
        self.ledger.remove_item(id)
    }

    pub fn clear_items(&mut self) {
        self.ledger.clear_all();
    }

    pub fn set_all_doors(&mut self, installed: bool) {
        self.ledger.set_all_doors(installed);
    }

    /// Read-only feasibility check for UIs.
    pub fn would_conflict(
        &self,
        zone: ZoneKind,
        slot_index: usize,
        span: ModuleSpan,
        category: ModuleCategory,
        exclude: Option<ItemId>,
    ) -> Option<ItemId> {
        self.ledger
            .would_conflict(zone, slot_index, span, category, exclude)
    }

    /// First conflict-free slot scanning from `from` in `direction`.
    pub fn next_available_slot(
        &self,
        zone: ZoneKind,
        from: usize,
        direction: SearchDirection,
        span: ModuleSpan,
        category: ModuleCategory,
        exclude: Option<ItemId>,
    ) -> Option<usize> {
        let zone_ref = self.geometry.zones.get(zone)?;
        self.ledger
            .next_available_slot(zone_ref, from, direction, span, category, exclude)
    }

    // === Internals ===

    /// Re-derive one item's spec width, position and adjusted width
    /// from the current geometry after its slot assignment changed.
    fn refresh_item(&mut self, id: ItemId) {
        let Some(item) = self.ledger.get(id) else {
            return;
        };
        let zone = item.zone;
        let slot_index = item.slot_index;
        let Some(zone_ref) = self.geometry.zones.get(zone) else {
            return;
        };
        let spec = item.spec.with_slot_width(zone_ref.slot_width);
        let Some((position_x, adjusted_width)) =
            self.geometry.item_geometry(zone, slot_index, spec.span)
        else {
            return;
        };
        if let Some(item) = self
            .ledger
            .items_mut()
            .iter_mut()
            .find(|item| item.id == id)
        {
            item.spec = spec;
            item.position_x = position_x;
            item.adjusted_width = adjusted_width;
        }
    }

    /// Recompute derived geometry and migrate the ledger onto it.
    /// Both are published together so readers see either the fully
    /// previous or fully new state.
    fn reconcile(&mut self) {
        let geometry =
            DerivedGeometry::compute(&self.config, &self.columns, self.geometry.generation + 1);
        let migrated = reconcile::migrate_items(&geometry, self.ledger.items());
        self.geometry = geometry;
        self.ledger.replace_items(migrated);
    }
}
