#![deny(clippy::all)]

//! Vue 2 class-component to Vue 3 `<script setup lang="ts">` migration.
//!
//! The core is a pipeline of extraction and reconstruction passes over the
//! raw text of a single component file: recognized declaration shapes
//! (decorated properties and accessors, imperative watch registrations,
//! template-reference lookups, two-way binding declarations) are recorded
//! into a normalized intermediate model, erased or rewritten in place, and
//! a new script block is reassembled from the model plus the untouched
//! residue. Unrecognized constructs pass through unmodified.
//!
//! The crate never touches the filesystem; a thin driver wires file
//! enumeration, loading and writing to [`transform`].

pub mod assemble;
pub mod context;
pub mod declarations;
pub mod document;
pub mod emits;
pub mod error;
pub mod members;
pub mod model;
pub mod options;
pub mod props;
pub mod refs;
pub mod self_refs;
pub mod state;
pub mod transform;
pub mod watch;

pub use error::{MigrateError, Result};
pub use options::{MigrateOptions, RuleFlags, TargetVersion};
pub use transform::{transform, transform_with_report};
