//! Dimension normalizer
//!
//! Clamps raw space input into safe numeric ranges. Never errors:
//! pathological input (zero, negative, NaN) degrades to the nearest
//! bound so every downstream stage can assume positive, finite
//! dimensions.

use crate::core::config::{
    DROPPED_MIN_WIDTH, MIN_SLOT_WIDTH, SPACE_DEPTH_MAX, SPACE_DEPTH_MIN, SPACE_HEIGHT_MAX,
    SPACE_HEIGHT_MIN, SPACE_WIDTH_MAX, SPACE_WIDTH_MIN,
};
use crate::core::types::Mm;
use crate::space::config::SpaceConfig;

/// Clamp a raw dimension into `[min, max]`, mapping non-finite input
/// to the minimum bound.
fn clamp_dim(value: Mm, min: Mm, max: Mm) -> Mm {
    if !value.is_finite() {
        return min;
    }
    value.clamp(min, max)
}

/// Clamp to a non-negative finite value.
fn clamp_non_negative(value: Mm) -> Mm {
    if !value.is_finite() || value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Produce a config with every dimension inside its documented bounds.
///
/// The dropped-ceiling width is additionally capped so the normal zone
/// retains at least one minimum-width slot after its own side
/// allowance; the zone resolver relies on that invariant.
pub fn normalize(raw: &SpaceConfig) -> SpaceConfig {
    let mut cfg = raw.clone();

    cfg.width = clamp_dim(raw.width, SPACE_WIDTH_MIN, SPACE_WIDTH_MAX);
    cfg.height = clamp_dim(raw.height, SPACE_HEIGHT_MIN, SPACE_HEIGHT_MAX);
    cfg.depth = clamp_dim(raw.depth, SPACE_DEPTH_MIN, SPACE_DEPTH_MAX);

    cfg.frame.left = clamp_non_negative(raw.frame.left);
    cfg.frame.right = clamp_non_negative(raw.frame.right);
    cfg.frame.top = clamp_non_negative(raw.frame.top);
    cfg.gap.left = clamp_non_negative(raw.gap.left);
    cfg.gap.right = clamp_non_negative(raw.gap.right);

    if let Some(finish) = &mut cfg.floor_finish {
        finish.height = clamp_non_negative(finish.height);
    }
    match &mut cfg.base {
        crate::space::config::BaseConfig::Floor { height }
        | crate::space::config::BaseConfig::Float { height } => {
            *height = clamp_non_negative(*height);
        }
    }

    if let Some(dropped) = &mut cfg.dropped_ceiling {
        dropped.drop_height = clamp_non_negative(dropped.drop_height);
        // The normal zone must survive with at least one legal slot.
        // Side allowances are at most the frame width, so reserving the
        // larger frame side is a safe cap before the resolver's own
        // exact clamp.
        let reserve = cfg.frame.left.max(cfg.frame.right) + MIN_SLOT_WIDTH;
        let max_width = (cfg.width - reserve).max(DROPPED_MIN_WIDTH);
        dropped.width = clamp_dim(dropped.width, DROPPED_MIN_WIDTH, max_width);
    }

    cfg
}
