//! Slot partitioner
//!
//! Derives the legal slot-count range for a zone from the fixed
//! per-slot width constraint, resolves the actual count (override vs.
//! ideal default) and lays out equal-width slots.

use crate::core::config::{ABS_MAX_SLOTS, IDEAL_SLOT_WIDTH, MAX_SLOT_WIDTH, MIN_SLOT_WIDTH};
use crate::core::types::{Mm, ZoneKind};
use crate::zone::Zone;

/// Legal `[min, max]` slot counts for an internal width.
///
/// `min` keeps every slot at or under [`MAX_SLOT_WIDTH`]; `max` keeps
/// every slot at or over [`MIN_SLOT_WIDTH`], capped at
/// [`ABS_MAX_SLOTS`]. `min > max` signals the degenerate case where
/// the width cannot support even one legal slot.
pub fn slot_count_bounds(internal_width: Mm) -> (usize, usize) {
    let min = (internal_width / MAX_SLOT_WIDTH).ceil().max(1.0) as usize;
    let max = ((internal_width / MIN_SLOT_WIDTH).floor() as usize).min(ABS_MAX_SLOTS);
    (min, max)
}

/// Resolve the slot count for a zone.
///
/// An override is clamped into the legal range; otherwise the ideal
/// count `round(width / 500)` is used, clamped the same way. A width
/// too small for any legal slot resolves to exactly one slot spanning
/// the whole zone.
pub fn resolve_slot_count(internal_width: Mm, override_count: Option<usize>) -> usize {
    let (min, max) = slot_count_bounds(internal_width);
    if min > max {
        // Degenerate: one slot spanning the zone, outside the 400-600
        // rule by documented design.
        return 1;
    }
    match override_count {
        Some(n) => n.clamp(min, max),
        None => {
            let ideal = (internal_width / IDEAL_SLOT_WIDTH).round() as usize;
            ideal.clamp(min, max)
        }
    }
}

/// Partition a zone span into equal-width slots.
///
/// Idempotent by construction: slot geometry is a pure function of
/// `(start_x, internal_width, override_count)` and boundaries are
/// derived from `start_x + i * slot_width`, never accumulated.
pub fn partition(
    kind: ZoneKind,
    start_x: Mm,
    internal_width: Mm,
    override_count: Option<usize>,
) -> Zone {
    let slot_count = resolve_slot_count(internal_width, override_count);
    Zone {
        kind,
        start_x,
        internal_width,
        slot_count,
        slot_width: internal_width / slot_count as Mm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_for_typical_width() {
        // 3600mm: min = ceil(3600/600) = 6, max = floor(3600/400) = 9
        assert_eq!(slot_count_bounds(3600.0), (6, 9));
    }

    #[test]
    fn ideal_count_without_override() {
        // round(3600/500) = 7, inside [6, 9]
        assert_eq!(resolve_slot_count(3600.0, None), 7);
        // round(2400/500) = 5, inside [4, 6]
        assert_eq!(resolve_slot_count(2400.0, None), 5);
    }

    #[test]
    fn override_clamps_into_legal_range() {
        assert_eq!(resolve_slot_count(3600.0, Some(8)), 8);
        assert_eq!(resolve_slot_count(3600.0, Some(2)), 6);
        assert_eq!(resolve_slot_count(3600.0, Some(15)), 9);
    }

    #[test]
    fn degenerate_width_resolves_to_single_slot() {
        // 350mm: min = 1, max = 0 -> one slot spanning the zone
        assert_eq!(resolve_slot_count(350.0, None), 1);
        assert_eq!(resolve_slot_count(350.0, Some(5)), 1);

        let zone = partition(ZoneKind::Normal, 0.0, 350.0, None);
        assert_eq!(zone.slot_count, 1);
        assert_eq!(zone.slot_width, 350.0);
    }

    #[test]
    fn absolute_slot_cap_applies() {
        let (_, max) = slot_count_bounds(8000.0 * 4.0);
        assert_eq!(max, ABS_MAX_SLOTS);
    }

    #[test]
    fn partition_is_idempotent() {
        let a = partition(ZoneKind::Normal, -1750.0, 3500.0, Some(7));
        let b = partition(ZoneKind::Normal, -1750.0, 3500.0, Some(7));
        assert_eq!(a.boundaries(), b.boundaries());
    }

    #[test]
    fn slots_are_contiguous_and_conserve_width() {
        let zone = partition(ZoneKind::Normal, -1800.0, 3600.0, None);
        assert_eq!(zone.slot_count, 7);

        let boundaries = zone.boundaries();
        assert_eq!(boundaries.len(), 8);
        assert!((boundaries[0] - zone.start_x).abs() < 1e-9);
        assert!((boundaries[7] - zone.end_x()).abs() < 1e-9);
        for pair in boundaries.windows(2) {
            assert!((pair[1] - pair[0] - zone.slot_width).abs() < 1e-9);
        }
        assert!((zone.slot_count as f64 * zone.slot_width - zone.internal_width).abs() < 1e-9);
    }

    #[test]
    fn slot_centers_derive_from_start_edge() {
        let zone = partition(ZoneKind::Normal, 100.0, 3000.0, Some(6));
        assert_eq!(zone.slot_width, 500.0);
        assert_eq!(zone.slot_center(0), 350.0);
        assert_eq!(zone.slot_center(5), 2850.0);
        assert_eq!(zone.dual_center(0), 600.0);
    }

    #[test]
    fn slot_at_clamps_outside_positions() {
        let zone = partition(ZoneKind::Normal, 0.0, 3000.0, Some(6));
        assert_eq!(zone.slot_at(-500.0), 0);
        assert_eq!(zone.slot_at(5000.0), 5);
        assert_eq!(zone.slot_at(1250.0), 2);
    }
}
