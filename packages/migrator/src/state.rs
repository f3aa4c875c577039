//! Declaration Classifier & Grouper
//!
//! Recognizes the converted `const x = ref(...)` / `const x = reactive(...)`
//! declarations at the member indent, records a [`StateBinding`] for each
//! and, when grouping is enabled, erases the declaration so the assembler
//! re-emits it in the grouped state section. Recording happens regardless
//! of grouping so the self-reference rewriter always knows which names need
//! the `.value` suffix.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::context::RewriteContext;
use crate::model::{BindingKind, SortOrder, StateBinding};
use crate::options::MigrateOptions;

static HOISTED_STATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^  const (\w+) = (ref|reactive)(?:<([^;]*?)>)?\(([^;]*?)\);$").unwrap()
});

/// Classifies converted state declarations and optionally hoists them.
pub fn collect_state(ctx: &mut RewriteContext, options: &MigrateOptions) {
    let snapshot = ctx.script.clone();
    for caps in HOISTED_STATE_RE.captures_iter(&snapshot) {
        let name = caps[1].to_string();
        if ctx.has_state(&name) {
            ctx.note(format!("duplicate state binding ignored: {name}"));
            continue;
        }
        let (kind, sort_order) = if &caps[2] == "ref" {
            (BindingKind::Signal, SortOrder::Signal)
        } else {
            (BindingKind::Structure, SortOrder::Structure)
        };
        ctx.state.push(StateBinding {
            name,
            kind,
            line: caps[0].to_string(),
            sort_order,
            hoist: options.group_state,
        });
    }
    if options.group_state {
        ctx.script = HOISTED_STATE_RE.replace_all(&ctx.script, "").into_owned();
    } else {
        ctx.note("state grouping disabled; declarations left inline");
    }
}
