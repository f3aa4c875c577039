//! Intermediate Model
//!
//! Normalized records produced by the extraction passes and consumed by the
//! rewrite and assembly stages. All collections of these records are
//! append-only during extraction and read-only afterwards.

use smallvec::SmallVec;

/// One input accepted from the parent component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Name under which the parent supplies the value (the `defineProps` key).
    pub name: String,
    /// Declared TypeScript type, verbatim.
    pub prop_type: String,
    /// Whether the decorator options carried `required: true`.
    pub required: bool,
    /// Raw default token from the decorator options, quotes stripped.
    pub default_value: Option<String>,
    /// Local identifier used to reference the property inside the script.
    /// Equal to `name` except for synced props, where the field name differs
    /// from the attribute name. Synced-field usage sites are resolved
    /// through the [`StateBinding`] registered for the field, not through
    /// this record.
    pub binding_name: String,
}

impl Property {
    pub fn new(name: impl Into<String>, prop_type: impl Into<String>) -> Self {
        let name = name.into();
        Property {
            binding_name: name.clone(),
            name,
            prop_type: prop_type.into(),
            required: false,
            default_value: None,
        }
    }
}

/// One distinct template-reference lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefBinding {
    /// The name as written in the template and in `$refs` lookups.
    pub raw_name: String,
    /// Type from a trailing `as` cast on the first lookup, if any.
    pub type_annotation: Option<String>,
    /// Local binding name, derived as `ref_<raw_name>`.
    pub canonical_name: String,
}

impl RefBinding {
    pub fn new(raw_name: impl Into<String>, type_annotation: Option<String>) -> Self {
        let raw_name = raw_name.into();
        RefBinding {
            canonical_name: canonical_ref_name(&raw_name),
            raw_name,
            type_annotation,
        }
    }

    /// The declaration line emitted in the `$refs` section.
    pub fn declaration(&self) -> String {
        match self.type_annotation.as_deref() {
            Some(ty) if !ty.is_empty() => {
                format!("  const {} = ref<{}>(null);", self.canonical_name, ty)
            }
            _ => format!("  const {} = ref(null);", self.canonical_name),
        }
    }
}

/// Canonical binding name for a template reference.
pub fn canonical_ref_name(raw_name: &str) -> String {
    format!("ref_{raw_name}")
}

/// How a converted state container is accessed after migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// `ref()` container; every read and write goes through `.value`.
    Signal,
    /// `reactive()` container; nested fields are accessed directly.
    Structure,
}

/// Placement class of a state binding in the assembled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortOrder {
    /// Synthesized bindings emitted ahead of the grouped blocks.
    Inline = 0,
    /// Grouped `ref` block.
    Signal = 1,
    /// Grouped `reactive` block.
    Structure = 2,
}

/// One converted state container declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateBinding {
    /// Local identifier.
    pub name: String,
    /// Access form required at usage sites.
    pub kind: BindingKind,
    /// The full declaration line.
    pub line: String,
    /// Placement class for the grouped section.
    pub sort_order: SortOrder,
    /// Whether the assembler emits `line`. False only for declarations left
    /// inline in the residual text when grouping is disabled.
    pub hoist: bool,
}

/// One composed watch registration.
///
/// Targets are partitioned by how their access path is rewritten: local
/// state bindings stay bare, inbound properties get a `props.` prefix, and
/// anything else is passed through as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchBinding {
    pub state_targets: SmallVec<[String; 2]>,
    pub prop_targets: SmallVec<[String; 2]>,
    pub other_targets: SmallVec<[String; 2]>,
    /// Name of the handler function referenced by the registration.
    pub handler_name: String,
}

impl WatchBinding {
    pub fn is_empty(&self) -> bool {
        self.state_targets.is_empty() && self.prop_targets.is_empty() && self.other_targets.is_empty()
    }
}
