//! # Layer 0: Primitives
//!
//! Basic building blocks for the accessor machinery:
//! - `bool.rs`: type-level boolean logic (True/False).
//! - `shape.rs`: the closed Proxy/Value classification and its selectors.

pub mod bool;
pub mod shape;

// Re-export key types at this level
pub use bool::{Bool, False, True};
pub use shape::{ByProxy, ByValue, Shape};
