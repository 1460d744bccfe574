//! Task list management.
//!
//! Tasks carry a display rank that stays consistent across inserts, edits,
//! deletions, completion toggles, and drag-and-drop reorders. The module
//! follows hexagonal architecture:
//!
//! - Domain types and pure ordering functions in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Draft validation in [`validation`]
//! - The task store and board actions in [`services`]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
