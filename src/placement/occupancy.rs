//! Occupancy invariant and the upper/lower coexistence exception
//!
//! Two items conflict iff they share a zone, their occupied slot
//! ranges overlap, and they are not an upper/lower pair. Upper and
//! lower cabinets occupy different vertical bands, so they may share
//! a horizontal slot range; every other same-zone overlap is illegal.

use crate::placement::module_spec::{ModuleCategory, ModuleSpan};
use crate::core::types::ZoneKind;

/// Slots occupied by a module anchored at `index`: `{i}` for single
/// span, `{i, i + 1}` for dual.
pub fn occupied_range(index: usize, span: ModuleSpan) -> (usize, usize) {
    (index, index + span.slot_count() - 1)
}

fn ranges_overlap(a: (usize, usize), b: (usize, usize)) -> bool {
    a.0 <= b.1 && b.0 <= a.1
}

/// Whether two categories may share a slot range.
pub fn may_coexist(a: ModuleCategory, b: ModuleCategory) -> bool {
    matches!(
        (a, b),
        (ModuleCategory::Upper, ModuleCategory::Lower)
            | (ModuleCategory::Lower, ModuleCategory::Upper)
    )
}

/// Full conflict test between two placements.
#[allow(clippy::too_many_arguments)]
pub fn conflicts(
    zone_a: ZoneKind,
    index_a: usize,
    span_a: ModuleSpan,
    category_a: ModuleCategory,
    zone_b: ZoneKind,
    index_b: usize,
    span_b: ModuleSpan,
    category_b: ModuleCategory,
) -> bool {
    zone_a == zone_b
        && ranges_overlap(occupied_range(index_a, span_a), occupied_range(index_b, span_b))
        && !may_coexist(category_a, category_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ModuleCategory::{Full, Lower, Upper};
    use ModuleSpan::{Dual, Single};
    use ZoneKind::{Dropped, Normal};

    #[test]
    fn same_slot_same_band_conflicts() {
        assert!(conflicts(Normal, 3, Single, Full, Normal, 3, Single, Full));
        assert!(conflicts(Normal, 3, Single, Upper, Normal, 3, Single, Upper));
        assert!(conflicts(Normal, 3, Single, Lower, Normal, 3, Single, Lower));
    }

    #[test]
    fn upper_lower_pair_coexists() {
        assert!(!conflicts(Normal, 3, Single, Upper, Normal, 3, Single, Lower));
        assert!(!conflicts(Normal, 2, Dual, Lower, Normal, 3, Single, Upper));
    }

    #[test]
    fn full_height_conflicts_with_either_band() {
        assert!(conflicts(Normal, 3, Single, Full, Normal, 3, Single, Upper));
        assert!(conflicts(Normal, 3, Single, Lower, Normal, 3, Single, Full));
    }

    #[test]
    fn different_zones_never_conflict() {
        assert!(!conflicts(Normal, 3, Single, Full, Dropped, 3, Single, Full));
    }

    #[test]
    fn dual_span_overlaps_both_slots() {
        assert!(conflicts(Normal, 2, Dual, Full, Normal, 3, Single, Full));
        assert!(conflicts(Normal, 2, Dual, Full, Normal, 1, Dual, Full));
        assert!(!conflicts(Normal, 2, Dual, Full, Normal, 4, Single, Full));
        assert!(!conflicts(Normal, 2, Dual, Full, Normal, 0, Single, Full));
    }
}
