//! Step definitions for task ordering BDD scenarios.

pub mod world;

mod then;
mod when;
