//! Zone resolver
//!
//! Splits the space into one or two zones and computes each zone's
//! usable internal width by subtracting the side allowance that
//! applies there: full frame width on a wall-attached side in surround
//! mode, end panel on an unattached side, wall gap in no-surround
//! mode.

use crate::core::config::{END_PANEL_NO_SURROUND, END_PANEL_SURROUND, MIN_SLOT_WIDTH};
use crate::core::types::{DroppedSide, Mm, ZoneKind};
use crate::space::config::{SpaceConfig, SurroundMode};
use crate::zone::partition::partition;
use crate::zone::{InternalSpace, Zone, ZoneSet};

/// Allowance subtracted at the left edge of the space (mm)
pub fn left_allowance(cfg: &SpaceConfig) -> Mm {
    match cfg.surround {
        SurroundMode::Surround => {
            if cfg.has_left_wall() {
                cfg.frame.left
            } else {
                END_PANEL_SURROUND
            }
        }
        SurroundMode::NoSurround => {
            if cfg.has_left_wall() {
                cfg.gap.left
            } else {
                END_PANEL_NO_SURROUND
            }
        }
    }
}

/// Allowance subtracted at the right edge of the space (mm)
pub fn right_allowance(cfg: &SpaceConfig) -> Mm {
    match cfg.surround {
        SurroundMode::Surround => {
            if cfg.has_right_wall() {
                cfg.frame.right
            } else {
                END_PANEL_SURROUND
            }
        }
        SurroundMode::NoSurround => {
            if cfg.has_right_wall() {
                cfg.gap.right
            } else {
                END_PANEL_NO_SURROUND
            }
        }
    }
}

/// Resolve the zones for a normalized config.
///
/// Without a dropped ceiling, one normal zone spans the full internal
/// width. With one, the configured dropped width is carved off the
/// attached end before allowance subtraction; the dropped zone loses
/// its own outer-edge allowance. The dropped width is re-clamped here
/// so the normal zone always keeps at least one minimum-width slot
/// even if the caller bypassed the normalizer.
pub fn resolve_zones(cfg: &SpaceConfig) -> ZoneSet {
    let x0 = -cfg.width / 2.0;
    let la = left_allowance(cfg);
    let ra = right_allowance(cfg);

    let Some(dropped) = &cfg.dropped_ceiling else {
        let internal = (cfg.width - la - ra).max(1.0);
        let normal = partition(ZoneKind::Normal, x0 + la, internal, cfg.slot_count_override);
        return ZoneSet { normal, dropped: None };
    };

    let (outer, inner) = match dropped.side {
        DroppedSide::Left => (la, ra),
        DroppedSide::Right => (ra, la),
    };
    let max_dropped = cfg.width - inner - MIN_SLOT_WIDTH;
    let dropped_width = dropped.width.min(max_dropped).max(outer + 1.0);

    let normal_internal = (cfg.width - dropped_width - inner).max(MIN_SLOT_WIDTH);
    let dropped_internal = (dropped_width - outer).max(1.0);

    let (normal_start, dropped_start) = match dropped.side {
        // Dropped zone hugs the left end; the normal zone starts at
        // the ceiling break line.
        DroppedSide::Left => (x0 + dropped_width, x0 + la),
        DroppedSide::Right => (x0 + la, x0 + cfg.width - dropped_width),
    };

    let normal = partition(
        ZoneKind::Normal,
        normal_start,
        normal_internal,
        cfg.slot_count_override,
    );
    // The override is a main-zone setting; the dropped zone always
    // sizes itself from its own width.
    let dropped_zone = partition(ZoneKind::Dropped, dropped_start, dropped_internal, None);

    ZoneSet {
        normal,
        dropped: Some(dropped_zone),
    }
}

/// Internal space available to furniture across the whole unit.
pub fn internal_space(cfg: &SpaceConfig) -> InternalSpace {
    let floor = cfg.floor_finish.map(|f| f.height).unwrap_or(0.0);
    let base = cfg.base.internal_height_loss();
    InternalSpace {
        width: (cfg.width - left_allowance(cfg) - right_allowance(cfg)).max(1.0),
        height: (cfg.height - floor - cfg.frame.top - base).max(1.0),
        depth: cfg.depth,
        start_y: floor + base,
    }
}
