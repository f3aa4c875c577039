#![deny(clippy::all)]

//! Driver for the Vue class-component migrator.
//!
//! Wires filesystem enumeration, file loading/writing and console logging
//! to the pure `vue_migrator::transform` core. The core never touches the
//! filesystem; everything environment-facing lives here.

pub mod perform_migrate;
pub mod project;
