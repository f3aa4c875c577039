//! Ref Collector
//!
//! Recognizes template-reference lookups (`this.$refs.name`,
//! `this.$refs["name"]`, optional trailing `as Type` cast), allocates one
//! canonical binding per distinct raw name and rewrites every lookup in the
//! script to `<canonical>.value`. Matching `ref="name"` attribute values in
//! the markup are renamed under the same iteration so attribute and lookup
//! names stay in sync.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::context::RewriteContext;
use crate::model::{canonical_ref_name, RefBinding};

static REF_LOOKUP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\$refs(?:\.(\w+)|\[["'](\w+)["']\])(?:\s+as\s+([A-Za-z_]\w*))?"#).unwrap()
});

fn raw_name<'t>(caps: &'t Captures) -> &'t str {
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str()).unwrap_or_default()
}

/// Registers one [`RefBinding`] per distinct raw name and rewrites every
/// lookup occurrence.
pub fn collect_refs(ctx: &mut RewriteContext) {
    let snapshot = ctx.script.clone();
    for caps in REF_LOOKUP_RE.captures_iter(&snapshot) {
        let raw = raw_name(&caps);
        if ctx.refs.iter().any(|r| r.raw_name == raw) {
            continue;
        }
        let annotation = caps.get(3).map(|m| m.as_str().to_string());
        ctx.refs.push(RefBinding::new(raw, annotation));
    }

    ctx.script = REF_LOOKUP_RE
        .replace_all(&ctx.script, |caps: &Captures| {
            format!("{}.value", canonical_ref_name(raw_name(caps)))
        })
        .into_owned();

    for binding in &ctx.refs {
        let attr = format!("ref=\"{}\"", binding.raw_name);
        let renamed = format!("ref=\"{}\"", binding.canonical_name);
        ctx.markup = ctx.markup.replace(&attr, &renamed);
    }
}
