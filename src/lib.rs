//! Slotforge - slot indexing and furniture placement engine
//!
//! Converts a continuously-adjustable closet space description into a
//! discrete grid of placement slots, keeps placed furniture legally
//! assigned to that grid as the space changes, and adjusts furniture
//! geometry when a structural column intrudes into a slot.
//!
//! The engine is a single-threaded, in-process library: collaborators
//! (renderer, persistence, UI store) read the derived geometry and the
//! placement ledger and feed configuration changes back through
//! [`engine::LayoutEngine`].

pub mod core;
pub mod engine;
pub mod intrusion;
pub mod placement;
pub mod space;
pub mod zone;

pub use engine::LayoutEngine;
