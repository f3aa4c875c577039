//! Migration Options
//!
//! Immutable configuration consumed by [`crate::transform`]. One value is
//! shared across a whole batch; nothing in the pipeline mutates it.

use bitflags::bitflags;

/// Which framework major version the rewritten component targets.
///
/// Only the reserved two-way binding names depend on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetVersion {
    /// `value` / `input` two-way convention.
    Vue2,
    /// `modelValue` / `update:modelValue` two-way convention.
    #[default]
    Vue3,
}

impl TargetVersion {
    /// Reserved property name synthesized for a `@VModel` declaration.
    pub fn model_prop_name(self) -> &'static str {
        match self {
            TargetVersion::Vue2 => "value",
            TargetVersion::Vue3 => "modelValue",
        }
    }

    /// Reserved emit name synthesized for a `@VModel` declaration.
    pub fn model_event_name(self) -> &'static str {
        match self {
            TargetVersion::Vue2 => "input",
            TargetVersion::Vue3 => "update:modelValue",
        }
    }
}

bitflags! {
    /// Independent switches for the member-rewriter sub-passes.
    ///
    /// A cleared flag leaves the corresponding construct untouched in the
    /// residual output and is noted in the pass log; later passes are not
    /// affected.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RuleFlags: u32 {
        /// `get` accessors to `computed` bindings.
        const ACCESSORS = 1 << 0;
        /// Instance methods to arrow-function bindings.
        const METHODS = 1 << 1;
        /// Bare field initializers to `ref`/`reactive` bindings.
        const FIELDS = 1 << 2;
        /// `@VModel` declarations to a synthesized model prop/emit pair.
        const VMODEL = 1 << 3;
        /// Project-specific global accessor substitutions.
        const ENV = 1 << 4;
    }
}

impl Default for RuleFlags {
    fn default() -> Self {
        RuleFlags::all()
    }
}

/// Configuration for one migration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateOptions {
    /// Target framework version.
    pub target: TargetVersion,
    /// Hoist matched `ref`/`reactive` declarations into a grouped, sorted
    /// state section instead of leaving them inline.
    pub group_state: bool,
    /// Attach the explanatory comment to the synthesized two-way accessor
    /// helper import.
    pub annotate_imports: bool,
    /// Per-rule switches for the member rewriter.
    pub rules: RuleFlags,
}

impl Default for MigrateOptions {
    fn default() -> Self {
        MigrateOptions {
            target: TargetVersion::default(),
            group_state: true,
            annotate_imports: true,
            rules: RuleFlags::all(),
        }
    }
}
