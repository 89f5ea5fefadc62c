//! Space configuration data model
//!
//! `SpaceConfig` is the externally owned description of the enclosing
//! space. It is a plain serializable record: the persistence
//! collaborator reads and writes it directly, and all derived geometry
//! is recomputed from it on load.

use serde::{Deserialize, Serialize};

use crate::core::config::{
    BASE_DEFAULT_HEIGHT, DROPPED_DEFAULT_DROP, DROPPED_DEFAULT_WIDTH, FLOOR_FINISH_DEFAULT_HEIGHT,
    FRAME_DEFAULT_SIDE, FRAME_DEFAULT_TOP, WALL_GAP_NO_SURROUND,
};
use crate::core::types::{DroppedSide, Mm};

/// How the unit attaches to the room's walls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallMode {
    /// Walls on both sides
    WallBoth,
    /// Wall on exactly one side; see [`WallConfig`] for which
    WallOne,
    /// No walls; end panels on both sides
    Freestanding,
}

/// Which sides have a wall (only consulted in [`InstallMode::WallOne`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallConfig {
    pub left: bool,
    pub right: bool,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self { left: true, right: true }
    }
}

/// Whether the unit carries a full surround frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurroundMode {
    Surround,
    NoSurround,
}

/// Surround frame widths (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSize {
    pub left: Mm,
    pub right: Mm,
    pub top: Mm,
}

impl Default for FrameSize {
    fn default() -> Self {
        Self {
            left: FRAME_DEFAULT_SIDE,
            right: FRAME_DEFAULT_SIDE,
            top: FRAME_DEFAULT_TOP,
        }
    }
}

/// Wall clearance gaps in no-surround mode (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapSize {
    pub left: Mm,
    pub right: Mm,
}

impl Default for GapSize {
    fn default() -> Self {
        Self {
            left: WALL_GAP_NO_SURROUND,
            right: WALL_GAP_NO_SURROUND,
        }
    }
}

/// How the unit meets the floor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BaseConfig {
    /// Floor-mounted plinth of the given height (mm)
    Floor { height: Mm },
    /// Floated off the floor by the given height (mm); no plinth
    Float { height: Mm },
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self::Floor { height: BASE_DEFAULT_HEIGHT }
    }
}

impl BaseConfig {
    /// Height the base subtracts from the internal vertical space (mm)
    pub fn internal_height_loss(&self) -> Mm {
        match self {
            Self::Floor { height } => *height,
            Self::Float { .. } => 0.0,
        }
    }
}

/// Floor finish layer under the unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorFinish {
    pub height: Mm,
}

impl Default for FloorFinish {
    fn default() -> Self {
        Self { height: FLOOR_FINISH_DEFAULT_HEIGHT }
    }
}

/// Ceiling step-down at one end of the space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DroppedCeiling {
    /// Horizontal extent of the stepped-down region (mm)
    pub width: Mm,
    /// How far the ceiling steps down (mm)
    pub drop_height: Mm,
    /// Which end of the space the region attaches to
    pub side: DroppedSide,
}

impl Default for DroppedCeiling {
    fn default() -> Self {
        Self {
            width: DROPPED_DEFAULT_WIDTH,
            drop_height: DROPPED_DEFAULT_DROP,
            side: DroppedSide::Right,
        }
    }
}

/// Cosmetic material settings; never triggers reconciliation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialConfig {
    pub interior_color: String,
    pub door_color: String,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            interior_color: "#FFFFFF".to_string(),
            door_color: "#FFFFFF".to_string(),
        }
    }
}

/// Full description of the enclosing space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceConfig {
    pub width: Mm,
    pub height: Mm,
    pub depth: Mm,
    pub install: InstallMode,
    pub walls: WallConfig,
    pub surround: SurroundMode,
    pub frame: FrameSize,
    pub gap: GapSize,
    pub base: BaseConfig,
    pub floor_finish: Option<FloorFinish>,
    pub dropped_ceiling: Option<DroppedCeiling>,
    /// User override for the normal zone's slot count; clamped into the
    /// legal range when applied
    pub slot_count_override: Option<usize>,
    pub material: MaterialConfig,
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            width: 3600.0,
            height: 2400.0,
            depth: 1500.0,
            install: InstallMode::WallBoth,
            walls: WallConfig::default(),
            surround: SurroundMode::Surround,
            frame: FrameSize::default(),
            gap: GapSize::default(),
            base: BaseConfig::default(),
            floor_finish: None,
            dropped_ceiling: None,
            slot_count_override: None,
            material: MaterialConfig::default(),
        }
    }
}

impl SpaceConfig {
    /// Whether a wall is present on the left side
    pub fn has_left_wall(&self) -> bool {
        match self.install {
            InstallMode::WallBoth => true,
            InstallMode::Freestanding => false,
            InstallMode::WallOne => self.walls.left,
        }
    }

    /// Whether a wall is present on the right side
    pub fn has_right_wall(&self) -> bool {
        match self.install {
            InstallMode::WallBoth => true,
            InstallMode::Freestanding => false,
            InstallMode::WallOne => self.walls.right,
        }
    }

    /// True when `other` differs in any field that affects derived
    /// geometry. Material changes are cosmetic and excluded.
    pub fn structurally_differs(&self, other: &SpaceConfig) -> bool {
        let mut a = self.clone();
        let mut b = other.clone();
        a.material = MaterialConfig::default();
        b.material = MaterialConfig::default();
        a != b
    }
}
