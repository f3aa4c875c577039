//! Self-Reference Rewriter
//!
//! Replaces implicit-self references to extracted members with their
//! composition-style access form: `this.<prop>` becomes `props.<prop>`
//! (properties also get their quoted attribute references in the markup
//! prefixed), `this.<signal>` becomes `<signal>.value`, structure bindings
//! are left bare. Names are resolved longest first and every match must end
//! on a word boundary, so a short name can never corrupt a longer
//! identifier that contains it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::context::RewriteContext;

static THIS_QUALIFIER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"this\.(\w*)").unwrap());

fn longest_first(mut names: Vec<String>) -> Vec<String> {
    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    names
}

fn this_usage(name: &str) -> Regex {
    Regex::new(&format!(r"this\.{}\b", regex::escape(name))).unwrap()
}

/// Rewrites property references in the script and the markup.
pub fn rewrite_prop_refs(ctx: &mut RewriteContext) {
    let names = longest_first(ctx.props.iter().map(|p| p.name.clone()).collect());
    for name in names {
        ctx.script = this_usage(&name)
            .replace_all(&ctx.script, regex::NoExpand(&format!("props.{name}")))
            .into_owned();
        let attr = Regex::new(&format!(r#""{}\b"#, regex::escape(&name))).unwrap();
        ctx.markup = attr
            .replace_all(&ctx.markup, regex::NoExpand(&format!("\"props.{name}")))
            .into_owned();
    }
}

/// Rewrites signal-binding references in the script to the `.value` form.
pub fn rewrite_signal_refs(ctx: &mut RewriteContext) {
    for name in longest_first(ctx.signal_names()) {
        ctx.script = this_usage(&name)
            .replace_all(&ctx.script, regex::NoExpand(&format!("{name}.value")))
            .into_owned();
    }
}

/// Strips any remaining implicit-self qualifier that was not resolved
/// against a known binding; pass-through identifiers are left bare.
pub fn strip_this(ctx: &mut RewriteContext) {
    ctx.script = THIS_QUALIFIER_RE
        .replace_all(&ctx.script, "$1")
        .into_owned();
}
