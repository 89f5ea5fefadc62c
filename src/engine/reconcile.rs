//! Reconciliation driver
//!
//! Runs after every structural change: migrates the placement ledger
//! onto the freshly derived geometry. Items whose slots ceased to
//! exist are removed; survivors get their module identity regenerated
//! from the new slot width and their position and adjusted width
//! recomputed. Never raises: anything internally inconsistent is
//! treated as "item invalid, remove it".

use crate::core::config::DUAL_MIN_INTERNAL_WIDTH;
use crate::engine::geometry::DerivedGeometry;
use crate::placement::ledger::PlacedItem;

/// Migrate every item onto the new geometry. Returns the surviving
/// items, fully refreshed; the caller publishes the result atomically.
pub(crate) fn migrate_items(geometry: &DerivedGeometry, items: &[PlacedItem]) -> Vec<PlacedItem> {
    let mut survivors = Vec::with_capacity(items.len());
    let mut removed = 0usize;

    for item in items {
        match migrate_item(geometry, item) {
            Some(updated) => survivors.push(updated),
            None => removed += 1,
        }
    }

    if removed > 0 {
        tracing::debug!(
            "Reconciliation removed {} item(s), kept {}",
            removed,
            survivors.len()
        );
    }
    survivors
}

fn migrate_item(geometry: &DerivedGeometry, item: &PlacedItem) -> Option<PlacedItem> {
    let zone = geometry.zones.get(item.zone)?;

    if item.last_slot() >= zone.slot_count {
        return None;
    }
    if item.spec.is_dual() {
        if zone.internal_width < DUAL_MIN_INTERNAL_WIDTH {
            return None;
        }
        // A column that moved under a dual item invalidates it; duals
        // cannot shrink against a column the way singles do.
        if geometry.span_has_column(item.zone, item.slot_index, item.spec.span) {
            return None;
        }
    }

    // Module identity encodes width; regenerate it even when the slot
    // index is unchanged.
    let spec = item.spec.with_slot_width(zone.slot_width);
    let (position_x, adjusted_width) =
        geometry.item_geometry(item.zone, item.slot_index, spec.span)?;

    Some(PlacedItem {
        spec,
        position_x,
        adjusted_width,
        ..item.clone()
    })
}
