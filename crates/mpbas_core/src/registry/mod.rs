//! Sibling package contracts of the flow model.
//!
//! # Responsibility
//! - Describe flow-model packages the basic package may read from.
//! - Provide an injectable lookup so resolution never reaches ambient state.

pub mod package_registry;
