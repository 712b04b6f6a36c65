// Team domain module
// Contains the team aggregate root, roster bounds, and domain events

#![allow(clippy::module_inception)]

pub mod events;
pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use events::TeamEvent;
pub use team::Team;
