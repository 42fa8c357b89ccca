//! Fixed-format array serialization.
//!
//! # Responsibility
//! - Centralize field width, precision and wrapping in `ArrayFormat`.
//! - Render resolved arrays as control records plus data lines.

pub mod array_writer;
pub mod descriptor;
