//! Rewrite Context
//!
//! The explicit mutable accumulator threaded by reference through every
//! pipeline stage. One fresh context is built per document; nothing is
//! shared across documents.

use indexmap::IndexSet;

use crate::model::{BindingKind, Property, RefBinding, StateBinding, WatchBinding};

/// Per-document working state for one `transform` invocation.
#[derive(Debug, Default)]
pub struct RewriteContext {
    /// Markup region. Touched only by reference-attribute and emit-call
    /// renaming and by the property attribute rewrite.
    pub markup: String,
    /// The mutable script working buffer.
    pub script: String,

    /// Extracted import statements, verbatim, trailing newline included.
    pub imports: Vec<String>,
    /// Extracted interface blocks, verbatim.
    pub interfaces: Vec<String>,
    /// Inputs accepted from the parent.
    pub props: Vec<Property>,
    /// Event names, first-seen order, deduplicated.
    pub emits: IndexSet<String>,
    /// Template-reference bindings.
    pub refs: Vec<RefBinding>,
    /// Converted state container declarations.
    pub state: Vec<StateBinding>,
    /// Composed watch registrations.
    pub watches: Vec<WatchBinding>,
    /// Names of accessors converted to `computed` bindings.
    pub computed: Vec<String>,

    /// Pass log, surfaced to the driver.
    pub log: Vec<String>,
}

impl RewriteContext {
    pub fn new(markup: String, script: String) -> Self {
        RewriteContext {
            markup,
            script,
            ..RewriteContext::default()
        }
    }

    pub fn note(&mut self, message: impl Into<String>) {
        self.log.push(message.into());
    }

    /// Registers an import statement, deduplicated by exact string match.
    pub fn add_import_once(&mut self, statement: String) {
        if !self.imports.contains(&statement) {
            self.imports.push(statement);
        }
    }

    pub fn has_prop(&self, name: &str) -> bool {
        self.props.iter().any(|p| p.name == name)
    }

    pub fn has_state(&self, name: &str) -> bool {
        self.state.iter().any(|s| s.name == name)
    }

    /// Names of state bindings that require the `.value` access suffix.
    pub fn signal_names(&self) -> Vec<String> {
        self.state
            .iter()
            .filter(|s| s.kind == BindingKind::Signal)
            .map(|s| s.name.clone())
            .collect()
    }
}
