//! Pipeline Runner
//!
//! Wires the passes in their fixed dependency order over one
//! [`RewriteContext`]. Property, ref and member extraction run before the
//! self-reference rewrite; emit collection runs on the pristine document
//! before any erasure. The transform is pure and deterministic: identical
//! input plus identical options always yields identical output.

use crate::context::RewriteContext;
use crate::error::Result;
use crate::options::MigrateOptions;
use crate::{assemble, declarations, document, emits, members, props, refs, self_refs, state, watch};

/// Converts one component document. Returns the rewritten document, or an
/// error that aborts this document only.
pub fn transform(document: &str, options: &MigrateOptions) -> Result<String> {
    let (output, _log) = transform_with_report(document, options)?;
    Ok(output)
}

/// Like [`transform`], but also returns the pass log for the driver.
pub fn transform_with_report(
    input: &str,
    options: &MigrateOptions,
) -> Result<(String, Vec<String>)> {
    let (markup, script) = document::split_document(input)?;
    let mut ctx = RewriteContext::new(markup, script);

    declarations::extract_imports(&mut ctx);
    declarations::extract_interfaces(&mut ctx);
    props::extract_props(&mut ctx, options);
    emits::collect_emits(input, &mut ctx);
    refs::collect_refs(&mut ctx);

    members::remove_self_links(&mut ctx);
    members::rewrite_accessor_usages(&mut ctx, options);
    self_refs::rewrite_prop_refs(&mut ctx);
    members::rewrite_vmodel(&mut ctx, options);
    members::apply_env_substitutions(&mut ctx, options);
    members::apply_member_rules(&mut ctx, options);
    members::close_computed_blocks(&mut ctx);

    state::collect_state(&mut ctx, options);
    self_refs::rewrite_signal_refs(&mut ctx);

    watch::resolve_watch_decorators(&mut ctx)?;
    watch::rewrite_watch_calls(&mut ctx);

    assemble::insert_lifecycle_guards(&mut ctx);
    self_refs::strip_this(&mut ctx);
    emits::rename_markup_emit_calls(&mut ctx);

    let output = assemble::assemble(&ctx, options);
    let log = std::mem::take(&mut ctx.log);
    Ok((output, log))
}
