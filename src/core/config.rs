//! Engine constants with documented values
//!
//! All magic numbers are collected here with explanations of their
//! purpose and how they interact with each other. Values come from the
//! manufacturing constraints of the modular closet system.

use crate::core::types::Mm;

// === SLOT SIZING ===

/// Minimum legal slot width (mm)
///
/// A slot narrower than this cannot hold the smallest cabinet carcass.
/// The only permitted violation is the degenerate case where a zone is
/// too narrow for even one legal slot; that zone then gets exactly one
/// slot spanning its full internal width.
pub const MIN_SLOT_WIDTH: Mm = 400.0;

/// Maximum legal slot width (mm)
///
/// Wider slots would exceed the door-panel stock width.
pub const MAX_SLOT_WIDTH: Mm = 600.0;

/// Ideal slot width targeted when the caller gives no override (mm)
///
/// The default slot count is `round(internal_width / 500)`, clamped
/// into the legal count range.
pub const IDEAL_SLOT_WIDTH: Mm = 500.0;

/// Hard cap on the number of slots in a single zone
///
/// Keeps per-edit recomputation bounded regardless of space width.
pub const ABS_MAX_SLOTS: usize = 20;

// === SPACE CLAMPS ===

/// Space width bounds (mm); out-of-range input clamps, never errors
pub const SPACE_WIDTH_MIN: Mm = 1200.0;
pub const SPACE_WIDTH_MAX: Mm = 8000.0;

/// Space height bounds (mm)
pub const SPACE_HEIGHT_MIN: Mm = 2010.0;
pub const SPACE_HEIGHT_MAX: Mm = 2410.0;

/// Space depth bounds (mm)
pub const SPACE_DEPTH_MIN: Mm = 130.0;
pub const SPACE_DEPTH_MAX: Mm = 1500.0;

// === SIDE ALLOWANCES ===

/// Default surround frame width on a wall-attached side (mm)
pub const FRAME_DEFAULT_SIDE: Mm = 50.0;

/// Default top frame height (mm)
pub const FRAME_DEFAULT_TOP: Mm = 10.0;

/// End panel thickness on an unattached side in surround mode (mm)
pub const END_PANEL_SURROUND: Mm = 18.0;

/// Wall clearance gap on an attached side in no-surround mode (mm)
pub const WALL_GAP_NO_SURROUND: Mm = 2.0;

/// End panel thickness on an unattached side in no-surround mode (mm)
pub const END_PANEL_NO_SURROUND: Mm = 20.0;

// === DROPPED CEILING ===

/// Default dropped-ceiling width (mm)
pub const DROPPED_DEFAULT_WIDTH: Mm = 900.0;

/// Default ceiling step-down height (mm)
pub const DROPPED_DEFAULT_DROP: Mm = 200.0;

/// Smallest dropped-ceiling width the normalizer will accept (mm)
pub const DROPPED_MIN_WIDTH: Mm = 400.0;

// === VERTICAL STACK ===

/// Default floor-mounted base height (mm)
pub const BASE_DEFAULT_HEIGHT: Mm = 65.0;

/// Default floor finish thickness (mm)
pub const FLOOR_FINISH_DEFAULT_HEIGHT: Mm = 50.0;

// === FURNITURE ===

/// Minimum zone internal width for dual-span modules (mm)
///
/// Below this the two slots a dual module would span are individually
/// too narrow for a shared carcass.
pub const DUAL_MIN_INTERNAL_WIDTH: Mm = 1200.0;

/// Gap subtracted from available width to get door width (mm)
pub const DOOR_GAP: Mm = 3.0;

// === COLUMNS ===

/// Minimum horizontal clearance between column footprints (mm)
///
/// Add/update requests that would bring two columns closer than this
/// are rejected so the slot grid never sees fused footprints.
pub const COLUMN_MIN_CLEARANCE: Mm = 50.0;

/// Tolerance for treating a column edge as flush with a slot edge (mm)
pub const EDGE_EPSILON: Mm = 1e-6;
