//! Domain model for the MODPATH basic package.
//!
//! # Responsibility
//! - Define grid dimensions, raw value sources and resolved arrays.
//! - Hold caller configuration and its documented defaults.
//!
//! # Invariants
//! - Shapes are validated once, when a value is resolved, never per access.

pub mod array;
pub mod grid;
pub mod options;
