//! Attribute resolution from explicit values and flow-model siblings.

pub mod attribute_resolver;
