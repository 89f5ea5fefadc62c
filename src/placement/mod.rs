pub mod ledger;
pub mod module_spec;
pub mod occupancy;

pub use ledger::{ItemPatch, Ledger, PlacedItem, SearchDirection};
pub use module_spec::{ModuleCategory, ModuleSpan, ModuleSpec};
