//! Deck assembly for the MODPATH basic package.
//!
//! # Responsibility
//! - Orchestrate resolution and serialization into one ordered deck.
//! - Own the output stream for the duration of one write.

pub mod bas_service;
pub mod deck_record;
