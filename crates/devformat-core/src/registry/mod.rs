//! Tool registry: the single ordered source of truth for the catalog.
//!
//! The registry is built once at start-up and never mutated afterwards, so it
//! can be shared by any number of readers.

mod store;

pub use store::{RouteEntry, ToolRegistry};
