//! Column intrusion resolver
//!
//! Intersects structural column footprints against slot spans and
//! produces, per slot, the width still available to furniture, the
//! direction the intrusion comes from, and a recentered anchor that
//! keeps furniture flush against the column instead of overlapping it.

use serde::{Deserialize, Serialize};

use crate::core::config::{DOOR_GAP, EDGE_EPSILON};
use crate::core::types::{ColumnId, IntrusionDirection, Mm, ZoneKind};
use crate::space::columns::Column;
use crate::zone::Zone;

/// Fully resolved geometry for one slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotGeometry {
    pub zone: ZoneKind,
    pub index: usize,
    pub left: Mm,
    pub right: Mm,
    /// Nominal slot center, before any intrusion recentering
    pub center: Mm,
    /// Width usable by furniture; equals the slot width when no column
    /// intrudes
    pub available_width: Mm,
    pub intrusion: IntrusionDirection,
    /// Column responsible for the intrusion, if any
    pub column: Option<ColumnId>,
    /// X position furniture anchored in this slot should occupy
    pub anchor_x: Mm,
    /// Door panel width for this slot (available width minus hinge gap)
    pub door_width: Mm,
}

/// 1-D overlap between a column footprint and a slot span, in mm.
/// Zero when they merely touch.
fn overlap(column: &Column, slot_left: Mm, slot_right: Mm) -> Mm {
    let (col_left, col_right) = column.footprint();
    (col_right.min(slot_right) - col_left.max(slot_left)).max(0.0)
}

/// Resolve every slot of a zone against the column set.
///
/// When several columns overlap one slot the greatest overlap wins;
/// the original behavior never disambiguated this case, so the policy
/// is a documented product decision, not a replication.
pub fn resolve_zone(zone: &Zone, columns: &[Column]) -> Vec<SlotGeometry> {
    (0..zone.slot_count)
        .map(|index| resolve_slot(zone, index, columns))
        .collect()
}

fn resolve_slot(zone: &Zone, index: usize, columns: &[Column]) -> SlotGeometry {
    let left = zone.slot_left(index);
    let right = zone.slot_right(index);
    let center = zone.slot_center(index);

    // Greatest overlap wins; earlier column wins ties so the result
    // is stable for a given insertion order.
    let mut intruder: Option<(&Column, Mm)> = None;
    for column in columns {
        let amount = overlap(column, left, right);
        if amount > 0.0 && intruder.map_or(true, |(_, best)| amount > best) {
            intruder = Some((column, amount));
        }
    }

    let Some((column, overlap_width)) = intruder else {
        return SlotGeometry {
            zone: zone.kind,
            index,
            left,
            right,
            center,
            available_width: zone.slot_width,
            intrusion: IntrusionDirection::None,
            column: None,
            anchor_x: center,
            door_width: (zone.slot_width - DOOR_GAP).max(0.0),
        };
    };

    let (col_left, col_right) = column.footprint();
    let covers_left = col_left <= left + EDGE_EPSILON;
    let covers_right = col_right >= right - EDGE_EPSILON;

    let available_width = (zone.slot_width - overlap_width).max(0.0);
    let (intrusion, anchor_x) = match (covers_left, covers_right) {
        // Free sub-range is to the right of the column.
        (true, false) => (IntrusionDirection::Left, (col_right + right) / 2.0),
        // Free sub-range is to the left of the column.
        (false, true) => (IntrusionDirection::Right, (left + col_left) / 2.0),
        // Column spans the slot, or sits strictly inside it: no
        // single-sided recenter exists, keep the original center.
        _ => (IntrusionDirection::Both, center),
    };

    SlotGeometry {
        zone: zone.kind,
        index,
        left,
        right,
        center,
        available_width,
        intrusion,
        column: Some(column.id),
        anchor_x,
        door_width: (available_width - DOOR_GAP).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::partition::partition;

    fn zone_3000_by_500() -> Zone {
        partition(ZoneKind::Normal, 0.0, 3000.0, Some(6))
    }

    #[test]
    fn slot_without_column_keeps_full_width() {
        let zone = zone_3000_by_500();
        let slots = resolve_zone(&zone, &[]);

        assert_eq!(slots.len(), 6);
        for slot in &slots {
            assert_eq!(slot.intrusion, IntrusionDirection::None);
            assert_eq!(slot.available_width, 500.0);
            assert_eq!(slot.anchor_x, slot.center);
            assert_eq!(slot.door_width, 497.0);
        }
    }

    #[test]
    fn left_intrusion_recenters_into_right_subrange() {
        let zone = zone_3000_by_500();
        // Slot 2 spans [1000, 1500]; column covers [900, 1100].
        let column = Column::new(1000.0, 200.0, 300.0, 2400.0);
        let slots = resolve_zone(&zone, &[column]);

        let slot = &slots[2];
        assert_eq!(slot.intrusion, IntrusionDirection::Left);
        assert_eq!(slot.available_width, 400.0);
        // Remaining free range is [1100, 1500].
        assert_eq!(slot.anchor_x, 1300.0);
        assert_eq!(slot.column, Some(column.id));
    }

    #[test]
    fn right_intrusion_recenters_into_left_subrange() {
        let zone = zone_3000_by_500();
        // Slot 2 spans [1000, 1500]; column covers [1400, 1600].
        let column = Column::new(1500.0, 200.0, 300.0, 2400.0);
        let slots = resolve_zone(&zone, &[column]);

        let slot = &slots[2];
        assert_eq!(slot.intrusion, IntrusionDirection::Right);
        assert_eq!(slot.available_width, 400.0);
        assert_eq!(slot.anchor_x, 1200.0);
    }

    #[test]
    fn interior_column_is_both_and_keeps_center() {
        let zone = zone_3000_by_500();
        // Slot 2 spans [1000, 1500] with center 1250; a 300mm column
        // centered inside overlaps [1100, 1400].
        let column = Column::new(1250.0, 300.0, 300.0, 2400.0);
        let slots = resolve_zone(&zone, &[column]);

        let slot = &slots[2];
        assert_eq!(slot.intrusion, IntrusionDirection::Both);
        assert_eq!(slot.available_width, 200.0);
        assert_eq!(slot.anchor_x, 1250.0);
    }

    #[test]
    fn full_span_column_leaves_zero_width() {
        let zone = zone_3000_by_500();
        let column = Column::new(1250.0, 700.0, 300.0, 2400.0);
        let slots = resolve_zone(&zone, &[column]);

        let slot = &slots[2];
        assert_eq!(slot.intrusion, IntrusionDirection::Both);
        assert_eq!(slot.available_width, 0.0);
        assert_eq!(slot.door_width, 0.0);
    }

    #[test]
    fn greatest_overlap_wins_with_multiple_columns() {
        let zone = zone_3000_by_500();
        // Both columns touch slot 2 [1000, 1500]: 50mm from the left,
        // 150mm from the right.
        let small = Column::new(975.0, 150.0, 300.0, 2400.0);
        let big = Column::new(1450.0, 200.0, 300.0, 2400.0);
        let slots = resolve_zone(&zone, &[small, big]);

        let slot = &slots[2];
        assert_eq!(slot.column, Some(big.id));
        assert_eq!(slot.intrusion, IntrusionDirection::Right);
        assert_eq!(slot.available_width, 350.0);
    }

    #[test]
    fn equal_overlaps_resolve_to_first_inserted_column() {
        let zone = zone_3000_by_500();
        // Both columns take exactly 100mm of slot 2 [1000, 1500]: the
        // first from the left edge, the second from the right.
        let first = Column::new(1050.0, 100.0, 300.0, 2400.0);
        let second = Column::new(1450.0, 100.0, 300.0, 2400.0);
        let slots = resolve_zone(&zone, &[first, second]);

        let slot = &slots[2];
        assert_eq!(slot.column, Some(first.id));
        assert_eq!(slot.intrusion, IntrusionDirection::Left);
        assert_eq!(slot.available_width, 400.0);

        // Insertion order decides; swapping it swaps the winner.
        let slots = resolve_zone(&zone, &[second, first]);
        assert_eq!(slots[2].column, Some(second.id));
        assert_eq!(slots[2].intrusion, IntrusionDirection::Right);
    }

    #[test]
    fn column_spanning_two_slots_intrudes_both() {
        let zone = zone_3000_by_500();
        // Column straddles the boundary at 1500.
        let column = Column::new(1500.0, 200.0, 300.0, 2400.0);
        let slots = resolve_zone(&zone, &[column]);

        assert_eq!(slots[2].intrusion, IntrusionDirection::Right);
        assert_eq!(slots[3].intrusion, IntrusionDirection::Left);
        assert_eq!(slots[2].available_width, 400.0);
        assert_eq!(slots[3].available_width, 400.0);
    }
}
