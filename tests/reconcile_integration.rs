//! Integration tests for reconciliation
//!
//! These tests verify the structural-change pipeline:
//! - Geometry regeneration and the cosmetic-change exclusion
//! - Item survival and removal when the slot grid shrinks or a zone
//!   disappears
//! - Module-identity regeneration when slot width changes
//! - Column-driven width/position adjustment of surviving items

use slotforge::core::types::{DroppedSide, ZoneKind};
use slotforge::placement::{ModuleCategory, ModuleSpan};
use slotforge::space::{Column, DroppedCeiling, MaterialConfig, SpaceConfig};
use slotforge::LayoutEngine;

fn engine() -> LayoutEngine {
    LayoutEngine::new(SpaceConfig::default())
}

// ============================================================================
// Geometry recomputation triggers
// ============================================================================

#[test]
fn structural_change_bumps_generation() {
    let mut engine = engine();
    let before = engine.geometry().generation;

    let mut cfg = engine.config().clone();
    cfg.width = 3000.0;
    assert!(engine.set_space(cfg));
    assert_eq!(engine.geometry().generation, before + 1);
}

#[test]
fn material_change_does_not_reconcile() {
    let mut engine = engine();
    let before = engine.geometry().generation;

    let mut cfg = engine.config().clone();
    cfg.material = MaterialConfig {
        interior_color: "#112233".to_string(),
        door_color: "#445566".to_string(),
    };
    assert!(!engine.set_space(cfg));
    assert_eq!(engine.geometry().generation, before);
    assert_eq!(engine.config().material.door_color, "#445566");

    engine.set_material(MaterialConfig::default());
    assert_eq!(engine.geometry().generation, before);
}

#[test]
fn identical_config_does_not_reconcile() {
    let mut engine = engine();
    let before = engine.geometry().generation;
    assert!(!engine.set_space(engine.config().clone()));
    assert_eq!(engine.geometry().generation, before);
}

// ============================================================================
// Grid shrink
// ============================================================================

/// Shrinking the space from 7 to 5 slots removes exactly the items
/// whose highest occupied index no longer exists.
#[test]
fn shrink_removes_out_of_range_items_only() {
    let mut engine = engine();
    // 3600mm space -> internal 3500 -> 7 slots of 500mm.
    let keep_a = engine
        .place_item(ModuleSpan::Single, ModuleCategory::Full, ZoneKind::Normal, 0, false)
        .unwrap();
    let keep_b = engine
        .place_item(ModuleSpan::Single, ModuleCategory::Full, ZoneKind::Normal, 4, false)
        .unwrap();
    let gone_high = engine
        .place_item(ModuleSpan::Single, ModuleCategory::Full, ZoneKind::Normal, 6, false)
        .unwrap();

    // 2500mm -> internal 2400 -> ideal round(2400/500) = 5 slots.
    let mut cfg = engine.config().clone();
    cfg.width = 2500.0;
    engine.set_space(cfg);

    assert_eq!(engine.geometry().zones.normal.slot_count, 5);
    assert!(engine.ledger().get(keep_a).is_some());
    assert!(engine.ledger().get(keep_b).is_some());
    assert!(engine.ledger().get(gone_high).is_none());
}

#[test]
fn shrink_removes_dual_whose_second_slot_vanished() {
    let mut engine = engine();
    let dual = engine
        .place_item(ModuleSpan::Dual, ModuleCategory::Full, ZoneKind::Normal, 4, false)
        .unwrap();

    // New grid has 5 slots; the dual occupies {4, 5} and 5 is gone.
    let mut cfg = engine.config().clone();
    cfg.width = 2500.0;
    engine.set_space(cfg);

    assert!(engine.ledger().get(dual).is_none());
}

#[test]
fn surviving_items_get_reidentified_module_width() {
    let mut engine = engine();
    let single = engine
        .place_item(ModuleSpan::Single, ModuleCategory::Full, ZoneKind::Normal, 1, false)
        .unwrap();
    let dual = engine
        .place_item(ModuleSpan::Dual, ModuleCategory::Lower, ZoneKind::Normal, 2, false)
        .unwrap();
    assert_eq!(engine.ledger().get(single).unwrap().spec.legacy_id(), "single-full-500");

    // 2500mm -> 5 slots of 480mm.
    let mut cfg = engine.config().clone();
    cfg.width = 2500.0;
    engine.set_space(cfg);

    let zone = engine.geometry().zones.normal;
    assert_eq!(zone.slot_width, 480.0);

    let single = engine.ledger().get(single).unwrap();
    assert_eq!(single.spec.legacy_id(), "single-full-480");
    assert_eq!(single.position_x, zone.slot_center(1));

    let dual = engine.ledger().get(dual).unwrap();
    assert_eq!(dual.spec.legacy_id(), "dual-lower-960");
    assert_eq!(dual.position_x, zone.dual_center(2));
}

#[test]
fn reconcile_is_drift_free_under_repeated_identical_edits() {
    let mut engine = engine();
    let id = engine
        .place_item(ModuleSpan::Single, ModuleCategory::Full, ZoneKind::Normal, 3, false)
        .unwrap();

    let mut cfg = engine.config().clone();
    cfg.width = 2500.0;
    engine.set_space(cfg.clone());
    let position_after_first = engine.ledger().get(id).unwrap().position_x;
    let boundaries_after_first = engine.geometry().zones.normal.boundaries();

    // Bounce the width back and forth; the final state must be
    // byte-identical to the first resolution.
    for _ in 0..5 {
        let mut wide = cfg.clone();
        wide.width = 3600.0;
        engine.set_space(wide);
        engine.set_space(cfg.clone());
    }

    assert_eq!(engine.ledger().get(id).unwrap().position_x, position_after_first);
    assert_eq!(engine.geometry().zones.normal.boundaries(), boundaries_after_first);
}

// ============================================================================
// Dropped ceiling
// ============================================================================

#[test]
fn enabling_dropped_ceiling_creates_second_zone() {
    let mut engine = engine();
    assert!(engine.geometry().zones.dropped.is_none());

    assert!(engine.set_dropped_ceiling(Some(DroppedCeiling::default())));
    let dropped = engine.geometry().zones.dropped.unwrap();
    assert_eq!(dropped.kind, ZoneKind::Dropped);
    // 900mm region minus the 50mm right frame.
    assert_eq!(dropped.internal_width, 850.0);
    assert_eq!(dropped.slot_count, 2);
}

#[test]
fn disabling_dropped_ceiling_removes_its_items() {
    let mut engine = engine();
    engine.set_dropped_ceiling(Some(DroppedCeiling::default()));

    let in_dropped = engine
        .place_item(ModuleSpan::Single, ModuleCategory::Full, ZoneKind::Dropped, 0, false)
        .unwrap();
    let in_normal = engine
        .place_item(ModuleSpan::Single, ModuleCategory::Full, ZoneKind::Normal, 0, false)
        .unwrap();

    engine.set_dropped_ceiling(None);
    assert!(engine.ledger().get(in_dropped).is_none());
    assert!(engine.ledger().get(in_normal).is_some());
}

#[test]
fn dropped_side_left_reverses_zone_layout() {
    let mut engine = engine();
    engine.set_dropped_ceiling(Some(DroppedCeiling {
        side: DroppedSide::Left,
        ..Default::default()
    }));

    let zones = &engine.geometry().zones;
    let dropped = zones.dropped.unwrap();
    assert!(dropped.start_x < zones.normal.start_x);
    assert!(dropped.end_x() <= zones.normal.start_x + 1e-9);
}

// ============================================================================
// Columns during reconciliation
// ============================================================================

#[test]
fn column_add_adjusts_single_item_width_and_position() {
    let mut engine = engine();
    let zone = engine.geometry().zones.normal;
    let id = engine
        .place_item(ModuleSpan::Single, ModuleCategory::Full, ZoneKind::Normal, 2, false)
        .unwrap();

    // Column overlapping slot 2's left 200mm.
    let column_center = zone.slot_left(2) + 100.0 - 50.0;
    engine
        .add_column(Column::new(column_center, 300.0, 300.0, 2400.0))
        .unwrap();

    let item = engine.ledger().get(id).unwrap();
    let slot = engine.geometry().slot(ZoneKind::Normal, 2).unwrap();
    assert_eq!(item.adjusted_width, Some(slot.available_width));
    assert_eq!(item.position_x, slot.anchor_x);
    assert!(slot.available_width < zone.slot_width);
}

#[test]
fn column_removal_restores_full_width() {
    let mut engine = engine();
    let zone = engine.geometry().zones.normal;
    let id = engine
        .place_item(ModuleSpan::Single, ModuleCategory::Full, ZoneKind::Normal, 2, false)
        .unwrap();

    let column = engine
        .add_column(Column::new(zone.slot_left(2), 200.0, 300.0, 2400.0))
        .unwrap();
    assert!(engine.ledger().get(id).unwrap().adjusted_width.is_some());

    engine.remove_column(column).unwrap();
    let item = engine.ledger().get(id).unwrap();
    assert_eq!(item.adjusted_width, None);
    assert_eq!(item.position_x, zone.slot_center(2));
}

#[test]
fn column_moving_under_dual_removes_it() {
    let mut engine = engine();
    let zone = engine.geometry().zones.normal;
    let dual = engine
        .place_item(ModuleSpan::Dual, ModuleCategory::Full, ZoneKind::Normal, 2, false)
        .unwrap();

    // Park a column in the far slot, then move it under the dual.
    let column = engine
        .add_column(Column::new(zone.slot_center(6), 200.0, 300.0, 2400.0))
        .unwrap();
    assert!(engine.ledger().get(dual).is_some());

    engine
        .update_column(column, zone.slot_center(2), 200.0)
        .unwrap();
    assert!(engine.ledger().get(dual).is_none());
}
