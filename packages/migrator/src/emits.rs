//! Emit Collector
//!
//! Scans the full original document for bare emission call sites. This runs
//! on the pristine text, before any erasure, because emission calls appear
//! in the markup region as well.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::context::RewriteContext;

static EMIT_CALL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\$emit\(["'](\w+)["']"#).unwrap());

/// Collects event names in first-seen order, deduplicated.
pub fn collect_emits(document: &str, ctx: &mut RewriteContext) {
    for caps in EMIT_CALL_RE.captures_iter(document) {
        ctx.emits.insert(caps[1].to_string());
    }
}

/// Renames emission call sites in the markup region to the local emitter.
pub fn rename_markup_emit_calls(ctx: &mut RewriteContext) {
    ctx.markup = ctx.markup.replace("$emit(", "emit(");
}
