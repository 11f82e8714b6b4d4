//! Business logic services
//!
//! Stateless operations over the domain models.

mod registry;

pub use registry::LevelRegistry;
