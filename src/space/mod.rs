pub mod columns;
pub mod config;
pub mod normalize;

pub use columns::{Column, ColumnSet};
pub use config::{
    BaseConfig, DroppedCeiling, FloorFinish, FrameSize, GapSize, InstallMode, MaterialConfig,
    SpaceConfig, SurroundMode, WallConfig,
};
pub use normalize::normalize;
